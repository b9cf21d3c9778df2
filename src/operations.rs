use crate::AccountError;

/// The operations every kind of account supports
///
/// [`Account`](crate::Account) is the one implementation in this crate. The
/// trait is object safe, so a transfer can target any implementor through
/// `&mut dyn AccountOperations`.
pub trait AccountOperations {
    /// The current balance
    fn balance(&self) -> f64;

    /// The interest rate in percent, applied on every accrual
    fn interest_rate(&self) -> f64;

    /// Credits the specified amount to the account
    fn deposit(&mut self, amount: f64) -> Result<(), AccountError>;

    /// Debits the specified amount from the account
    fn withdraw(&mut self, amount: f64) -> Result<(), AccountError>;

    /// Moves the specified amount from this account to `target`
    fn transfer(
        &mut self,
        target: Option<&mut dyn AccountOperations>,
        amount: f64,
    ) -> Result<bool, AccountError>;

    /// Accrues interest on the balance and returns the accrued amount
    fn calculate_interest(&mut self) -> f64;
}
