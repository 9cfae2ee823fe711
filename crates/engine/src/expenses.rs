//! The module contains the `Expense` record, its collection and the list
//! filter.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use uuid::Uuid;

use crate::{LedgerError, ResultLedger};

/// A single expense.
#[derive(Clone, Debug, PartialEq)]
pub struct Expense {
    /// Stable identifier, generated once at creation.
    pub id: Uuid,
    /// Owner at creation time. The user may be deleted afterwards; the
    /// expense is kept and simply no longer resolves to a user.
    pub user_id: Uuid,
    pub title: String,
    pub amount: f64,
    pub category: String,
    pub note: String,
    pub spent_at: DateTime<Utc>,
}

/// Raw fields for a new expense, before presence validation.
///
/// `title`, `amount` and `user_id` are required; the rest default.
#[derive(Clone, Debug, Default)]
pub struct ExpenseDraft {
    pub title: Option<String>,
    pub amount: Option<f64>,
    pub user_id: Option<Uuid>,
    pub category: Option<String>,
    pub note: Option<String>,
    pub spent_at: Option<DateTime<Utc>>,
}

/// A partial update. Only the fields that are `Some` are applied.
///
/// There is no re-validation here: an explicit empty title or zero amount is
/// written as-is, intentionally asymmetric with creation.
#[derive(Clone, Debug, Default)]
pub struct ExpensePatch {
    pub title: Option<String>,
    pub amount: Option<f64>,
    pub category: Option<String>,
    pub note: Option<String>,
    pub spent_at: Option<DateTime<Utc>>,
}

impl Expense {
    fn apply(&mut self, patch: ExpensePatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(amount) = patch.amount {
            self.amount = amount;
        }
        if let Some(category) = patch.category {
            self.category = category;
        }
        if let Some(note) = patch.note {
            self.note = note;
        }
        if let Some(spent_at) = patch.spent_at {
            self.spent_at = spent_at;
        }
    }
}

/// Narrowing criteria for an expense listing.
///
/// Filters compose with AND, applied in order: owner, single category,
/// category set, date range. The date bounds arrive as raw strings and are
/// only parsed when both are present; a range with one missing bound is
/// ignored entirely.
#[derive(Clone, Debug, Default)]
pub struct ExpenseFilter {
    pub user_id: Option<Uuid>,
    pub category: Option<String>,
    pub categories: Option<Vec<String>>,
    pub from: Option<String>,
    pub to: Option<String>,
}

/// Parses a date bound: RFC 3339, or a bare date taken as midnight UTC.
fn parse_bound(value: &str) -> ResultLedger<DateTime<Utc>> {
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(value) {
        return Ok(timestamp.with_timezone(&Utc));
    }
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Ok(date.and_time(NaiveTime::MIN).and_utc());
    }
    Err(LedgerError::InvalidDateFormat)
}

/// The expenses collection.
///
/// Backed by a `Vec` so list responses preserve insertion order.
#[derive(Debug, Default)]
pub struct Expenses {
    records: Vec<Expense>,
}

impl Expenses {
    pub fn find(&self, id: Uuid) -> ResultLedger<&Expense> {
        self.records
            .iter()
            .find(|expense| expense.id == id)
            .ok_or(LedgerError::ExpenseNotFound)
    }

    pub fn insert(&mut self, expense: Expense) -> &Expense {
        self.records.push(expense);
        &self.records[self.records.len() - 1]
    }

    pub fn update(&mut self, id: Uuid, patch: ExpensePatch) -> ResultLedger<&Expense> {
        match self.records.iter().position(|expense| expense.id == id) {
            Some(index) => {
                let expense = &mut self.records[index];
                expense.apply(patch);
                Ok(expense)
            }
            None => Err(LedgerError::ExpenseNotFound),
        }
    }

    pub fn remove(&mut self, id: Uuid) -> ResultLedger<Expense> {
        match self.records.iter().position(|expense| expense.id == id) {
            Some(index) => Ok(self.records.remove(index)),
            None => Err(LedgerError::ExpenseNotFound),
        }
    }

    /// Returns the expenses matching `filter`, in insertion order.
    pub fn filtered(&self, filter: &ExpenseFilter) -> ResultLedger<Vec<Expense>> {
        let mut matches: Vec<&Expense> = self.records.iter().collect();

        if let Some(user_id) = filter.user_id {
            matches.retain(|expense| expense.user_id == user_id);
        }

        if let Some(category) = &filter.category {
            matches.retain(|expense| expense.category == *category);
        }

        if let Some(categories) = &filter.categories {
            // The value may arrive comma-separated, repeated, or both.
            let wanted: Vec<String> = categories
                .iter()
                .flat_map(|value| value.split(','))
                .map(|category| category.trim().to_string())
                .collect();
            matches.retain(|expense| wanted.contains(&expense.category));
        }

        if let (Some(from), Some(to)) = (&filter.from, &filter.to) {
            let start = parse_bound(from)?;
            let end = parse_bound(to)?;
            matches.retain(|expense| expense.spent_at >= start && expense.spent_at <= end);
        }

        Ok(matches.into_iter().cloned().collect())
    }
}
