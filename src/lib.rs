pub use self::{
    account::Account,
    error::{AccountError, Violation},
    operations::AccountOperations,
};

mod account;
mod error;
mod operations;
