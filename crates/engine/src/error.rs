//! The module contains the errors the ledger can throw.
//!
//! Every variant maps onto one of the two failure kinds the HTTP surface
//! knows about: a missing record or an invalid request.
//!
//! [`ExpenseOwnerNotFound`] carries the same message as [`UserNotFound`] but
//! is a validation failure: it is raised when an expense is created against
//! an unknown user, not when a user lookup misses.
//!
//! [`ExpenseOwnerNotFound`]: LedgerError::ExpenseOwnerNotFound
//! [`UserNotFound`]: LedgerError::UserNotFound
use thiserror::Error;

/// Ledger custom errors.
///
/// The display strings are the exact messages returned in error bodies.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum LedgerError {
    #[error("User not found")]
    UserNotFound,
    #[error("Expense not found")]
    ExpenseNotFound,
    #[error("User not found")]
    ExpenseOwnerNotFound,
    #[error("Title, amount and userId are required")]
    MissingExpenseFields,
    #[error("Name is required")]
    NameRequired,
    #[error("Invalid date format")]
    InvalidDateFormat,
}

impl LedgerError {
    /// True for the variants raised by a failed id lookup.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::UserNotFound | Self::ExpenseNotFound)
    }
}
