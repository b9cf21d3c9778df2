/// The specific rule an argument broke
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Violation {
    #[error("Balance cannot be negative")]
    NegativeBalance,
    #[error("Interest cannot be negative")]
    NegativeInterest,
    #[error("Balance must be a valid number")]
    BalanceNaN,
    #[error("Interest must be a valid number")]
    InterestNaN,
    #[error("Balance cannot be infinite")]
    InfiniteBalance,
    #[error("Interest cannot be infinite")]
    InfiniteInterest,
    #[error("Amount must be a valid number")]
    AmountNaN,
    #[error("Amount cannot be infinite")]
    InfiniteAmount,
    #[error("Value cannot be less than zero")]
    NegativeAmount,
    #[error("Value cannot be more than balance")]
    ExceedsBalance,
}

/// Possible errors to occur during account operations
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum AccountError {
    /// The value is not a number, or a withdrawal exceeds the balance
    #[error("{0}")]
    InvalidArgument(Violation),
    /// The value violates a numeric bound
    #[error("{0}")]
    OutOfRange(Violation),
    /// A transfer was requested without a target account
    #[error("Target cannot be null")]
    NullArgument,
}

impl AccountError {
    /// The rule that was broken
    ///
    /// Returns `None` for [`AccountError::NullArgument`], which is about a
    /// missing argument rather than a bad value.
    pub fn violation(&self) -> Option<Violation> {
        match self {
            Self::InvalidArgument(violation) | Self::OutOfRange(violation) => Some(*violation),
            Self::NullArgument => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(
        AccountError::OutOfRange(Violation::NegativeBalance),
        "Balance cannot be negative"
    )]
    #[case(
        AccountError::InvalidArgument(Violation::InterestNaN),
        "Interest must be a valid number"
    )]
    #[case(
        AccountError::OutOfRange(Violation::InfiniteAmount),
        "Amount cannot be infinite"
    )]
    #[case(
        AccountError::InvalidArgument(Violation::ExceedsBalance),
        "Value cannot be more than balance"
    )]
    #[case(AccountError::NullArgument, "Target cannot be null")]
    fn display_forwards_the_violation_message(
        #[case] error: AccountError,
        #[case] message: &str,
    ) {
        assert_eq!(error.to_string(), message);
    }

    #[test]
    fn violation_of_null_argument() {
        assert_eq!(AccountError::NullArgument.violation(), None);
        assert_eq!(
            AccountError::OutOfRange(Violation::NegativeAmount).violation(),
            Some(Violation::NegativeAmount),
        );
    }
}
