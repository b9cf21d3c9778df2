use crate::{AccountError, AccountOperations, Violation};

/// A bank account
///
/// The account holds a balance and an interest rate. Both are validated when
/// the account is created and can only change through the account's
/// operations afterwards:
/// 1. The balance:
///    Always finite and never negative. Deposits, withdrawals, transfers
///    and interest accrual move it.
/// 2. The interest rate:
///    A finite, non-negative percentage. It is applied to the balance on
///    every call to [`Account::calculate_interest`].
#[derive(Debug, Clone, PartialEq, serde::Deserialize)]
#[serde(try_from = "AccountRecord")]
pub struct Account {
    balance: f64,
    interest_rate: f64,
}

impl Account {
    /// Creates a new account with the specified opening balance and interest rate
    ///
    /// Checks run in a fixed order and the first failing one is reported.
    /// Negative values are checked before NaN, and NaN before positive
    /// infinity. Within each check the balance comes before the interest
    /// rate.
    pub fn new(initial_balance: f64, interest_rate: f64) -> Result<Self, AccountError> {
        if initial_balance < 0.0 {
            return Err(AccountError::OutOfRange(Violation::NegativeBalance));
        }
        if interest_rate < 0.0 {
            return Err(AccountError::OutOfRange(Violation::NegativeInterest));
        }
        if initial_balance.is_nan() {
            return Err(AccountError::InvalidArgument(Violation::BalanceNaN));
        }
        if interest_rate.is_nan() {
            return Err(AccountError::InvalidArgument(Violation::InterestNaN));
        }
        if initial_balance == f64::INFINITY {
            return Err(AccountError::OutOfRange(Violation::InfiniteBalance));
        }
        if interest_rate == f64::INFINITY {
            return Err(AccountError::OutOfRange(Violation::InfiniteInterest));
        }

        Ok(Self {
            balance: initial_balance,
            interest_rate,
        })
    }

    /// The current balance
    pub fn balance(&self) -> f64 {
        self.balance
    }

    /// The interest rate in percent
    pub fn interest_rate(&self) -> f64 {
        self.interest_rate
    }

    /// Accrues interest and returns the accrued amount
    ///
    /// The accrued amount is `balance * (interest_rate / 100)` and is added
    /// to the balance. If that would overflow, the balance stops at
    /// [`f64::MAX`] and only the amount needed to reach it is accrued.
    pub fn calculate_interest(&mut self) -> f64 {
        let mut interest = self.balance * (self.interest_rate / 100.0);
        if (self.balance + interest).is_finite() {
            self.balance += interest;
        } else {
            interest = f64::MAX - self.balance;
            self.balance = f64::MAX;
        }
        tracing::trace!(interest, balance = self.balance, "interest accrued");

        interest
    }

    /// Deposits the specified amount on the account
    ///
    /// A deposit that would overflow the balance is refused with
    /// [`Violation::InfiniteBalance`].
    pub fn deposit(&mut self, amount: f64) -> Result<(), AccountError> {
        self.check_deposit(amount)
            .inspect_err(|err| tracing::debug!(%err, amount, "deposit rejected"))?;
        self.balance += amount;
        tracing::trace!(amount, balance = self.balance, "deposited");

        Ok(())
    }

    /// Withdraws the specified amount from the account
    pub fn withdraw(&mut self, amount: f64) -> Result<(), AccountError> {
        self.check_withdrawal(amount)
            .inspect_err(|err| tracing::debug!(%err, amount, "withdrawal rejected"))?;
        self.balance -= amount;
        tracing::trace!(amount, balance = self.balance, "withdrawn");

        Ok(())
    }

    /// Transfers the specified amount from this account to `target`
    ///
    /// The amount is withdrawn from this account first and then deposited on
    /// the target. If the target refuses the deposit, this account gets its
    /// previous balance back, so a failed transfer leaves both accounts as
    /// they were.
    pub fn transfer(
        &mut self,
        target: Option<&mut dyn AccountOperations>,
        amount: f64,
    ) -> Result<bool, AccountError> {
        let target = target.ok_or(AccountError::NullArgument).inspect_err(|err| {
            tracing::debug!(%err, amount, "transfer rejected");
        })?;

        let previous = self.balance;
        self.withdraw(amount)?;
        if let Err(err) = target.deposit(amount) {
            self.balance = previous;
            tracing::debug!(%err, amount, "transfer rolled back");
            return Err(err);
        }

        Ok(true)
    }

    fn check_withdrawal(&self, amount: f64) -> Result<(), AccountError> {
        if amount.is_nan() {
            return Err(AccountError::InvalidArgument(Violation::AmountNaN));
        }
        if amount < 0.0 {
            return Err(AccountError::OutOfRange(Violation::NegativeAmount));
        }
        if amount > self.balance {
            return Err(AccountError::InvalidArgument(Violation::ExceedsBalance));
        }

        Ok(())
    }

    fn check_deposit(&self, amount: f64) -> Result<(), AccountError> {
        if amount.is_nan() {
            return Err(AccountError::InvalidArgument(Violation::AmountNaN));
        }
        if amount == f64::INFINITY {
            return Err(AccountError::OutOfRange(Violation::InfiniteAmount));
        }
        if amount < 0.0 {
            return Err(AccountError::OutOfRange(Violation::NegativeAmount));
        }
        if !(self.balance + amount).is_finite() {
            return Err(AccountError::OutOfRange(Violation::InfiniteBalance));
        }

        Ok(())
    }
}

impl AccountOperations for Account {
    fn balance(&self) -> f64 {
        Account::balance(self)
    }

    fn interest_rate(&self) -> f64 {
        Account::interest_rate(self)
    }

    fn deposit(&mut self, amount: f64) -> Result<(), AccountError> {
        Account::deposit(self, amount)
    }

    fn withdraw(&mut self, amount: f64) -> Result<(), AccountError> {
        Account::withdraw(self, amount)
    }

    fn transfer(
        &mut self,
        target: Option<&mut dyn AccountOperations>,
        amount: f64,
    ) -> Result<bool, AccountError> {
        Account::transfer(self, target, amount)
    }

    fn calculate_interest(&mut self) -> f64 {
        Account::calculate_interest(self)
    }
}

impl serde::Serialize for Account {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where S: serde::Serializer
    {
        use serde::ser::SerializeStruct;
        let mut map = serializer.serialize_struct("Account", 2)?;

        map.serialize_field("balance", &self.balance)?;
        map.serialize_field("interest_rate", &self.interest_rate)?;

        map.end()
    }
}

/// The unvalidated shape of a serialized account
#[derive(serde::Deserialize)]
struct AccountRecord {
    balance: f64,
    interest_rate: f64,
}

impl TryFrom<AccountRecord> for Account {
    type Error = AccountError;

    fn try_from(record: AccountRecord) -> Result<Self, Self::Error> {
        Self::new(record.balance, record.interest_rate)
    }
}
