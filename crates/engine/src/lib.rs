//! In-memory ledger of users and expenses.
//!
//! The [`Ledger`] owns one collection per record type and exposes every
//! operation the HTTP surface needs: CRUD on both collections plus the
//! composed expense listing filter. It holds no I/O and no shared state; the
//! server instantiates one ledger and guards it with a single lock.

use chrono::Utc;
use uuid::Uuid;

pub use error::LedgerError;
pub use expenses::{Expense, ExpenseDraft, ExpenseFilter, ExpensePatch, Expenses};
pub use users::{User, Users};

mod error;
mod expenses;
mod users;

type ResultLedger<T> = Result<T, LedgerError>;

/// The in-memory store behind the API.
///
/// Everything is lost on restart; that is the intended lifecycle.
#[derive(Debug, Default)]
pub struct Ledger {
    users: Users,
    expenses: Expenses,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns all users, in creation order.
    pub fn users(&self) -> &[User] {
        self.users.all()
    }

    /// Returns a user by id.
    pub fn user(&self, id: Uuid) -> ResultLedger<&User> {
        self.users.find(id)
    }

    /// Creates a user. The name must be present and non-empty.
    pub fn create_user(&mut self, name: Option<String>) -> ResultLedger<&User> {
        let name = validate_name(name)?;
        Ok(self.users.insert(User::new(name)))
    }

    /// Renames a user. The name must be present and non-empty once trimmed.
    pub fn rename_user(&mut self, id: Uuid, name: Option<String>) -> ResultLedger<&User> {
        // Lookup first: an unknown id is reported before a missing name.
        self.users.find(id)?;
        let name = validate_name(name)?;
        let user = self.users.find_mut(id)?;
        user.name = name;
        Ok(user)
    }

    /// Deletes a user. Their expenses are left in place (no cascade).
    pub fn delete_user(&mut self, id: Uuid) -> ResultLedger<()> {
        self.users.remove(id).map(|_| ())
    }

    /// Returns the expenses matching `filter`, in creation order.
    pub fn expenses(&self, filter: &ExpenseFilter) -> ResultLedger<Vec<Expense>> {
        self.expenses.filtered(filter)
    }

    /// Returns an expense by id.
    pub fn expense(&self, id: Uuid) -> ResultLedger<&Expense> {
        self.expenses.find(id)
    }

    /// Creates an expense from a draft.
    ///
    /// `title` must be present and non-empty, `amount` and `user_id` present;
    /// presence is checked explicitly, so an amount of zero is accepted. The
    /// owner must exist at creation time. `category` and `note` default to
    /// the empty string, `spent_at` to the current time.
    pub fn create_expense(&mut self, draft: ExpenseDraft) -> ResultLedger<&Expense> {
        let (title, amount, user_id) = match (draft.title, draft.amount, draft.user_id) {
            (Some(title), Some(amount), Some(user_id)) if !title.is_empty() => {
                (title, amount, user_id)
            }
            _ => return Err(LedgerError::MissingExpenseFields),
        };

        if !self.users.contains(user_id) {
            return Err(LedgerError::ExpenseOwnerNotFound);
        }

        let expense = Expense {
            id: Uuid::new_v4(),
            user_id,
            title,
            amount,
            category: draft.category.unwrap_or_default(),
            note: draft.note.unwrap_or_default(),
            spent_at: draft.spent_at.unwrap_or_else(Utc::now),
        };
        Ok(self.expenses.insert(expense))
    }

    /// Applies a partial update to an expense. Absent fields are untouched.
    pub fn update_expense(&mut self, id: Uuid, patch: ExpensePatch) -> ResultLedger<&Expense> {
        self.expenses.update(id, patch)
    }

    /// Deletes an expense.
    pub fn delete_expense(&mut self, id: Uuid) -> ResultLedger<()> {
        self.expenses.remove(id).map(|_| ())
    }
}

fn validate_name(name: Option<String>) -> ResultLedger<String> {
    match name {
        Some(name) if !name.trim().is_empty() => Ok(name),
        _ => Err(LedgerError::NameRequired),
    }
}
