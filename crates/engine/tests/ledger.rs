use chrono::{TimeZone, Utc};
use uuid::Uuid;

use engine::{ExpenseDraft, ExpenseFilter, ExpensePatch, Ledger, LedgerError};

fn ledger_with_user(name: &str) -> (Ledger, Uuid) {
    let mut ledger = Ledger::new();
    let user_id = ledger.create_user(Some(name.to_string())).unwrap().id;
    (ledger, user_id)
}

fn draft(title: &str, amount: f64, user_id: Uuid) -> ExpenseDraft {
    ExpenseDraft {
        title: Some(title.to_string()),
        amount: Some(amount),
        user_id: Some(user_id),
        ..Default::default()
    }
}

#[test]
fn create_user_requires_name() {
    let mut ledger = Ledger::new();
    assert_eq!(ledger.create_user(None), Err(LedgerError::NameRequired));
    assert_eq!(
        ledger.create_user(Some(String::new())),
        Err(LedgerError::NameRequired)
    );
    assert_eq!(
        ledger.create_user(Some(String::from("   "))),
        Err(LedgerError::NameRequired)
    );
}

#[test]
fn created_user_is_found_by_id() {
    let (ledger, user_id) = ledger_with_user("Ann");
    let user = ledger.user(user_id).unwrap();
    assert_eq!(user.name, "Ann");
}

#[test]
fn rename_checks_existence_before_name() {
    let (mut ledger, user_id) = ledger_with_user("Ann");

    // Unknown id wins over the missing name.
    assert_eq!(
        ledger.rename_user(Uuid::new_v4(), None),
        Err(LedgerError::UserNotFound)
    );
    assert_eq!(
        ledger.rename_user(user_id, Some(String::from("  "))),
        Err(LedgerError::NameRequired)
    );

    let user = ledger.rename_user(user_id, Some(String::from("Anna"))).unwrap();
    assert_eq!(user.name, "Anna");
}

#[test]
fn deleting_a_user_keeps_their_expenses() {
    let (mut ledger, user_id) = ledger_with_user("Ann");
    let expense_id = ledger.create_expense(draft("Coffee", 3.0, user_id)).unwrap().id;

    ledger.delete_user(user_id).unwrap();

    assert_eq!(ledger.user(user_id), Err(LedgerError::UserNotFound));
    let orphan = ledger.expense(expense_id).unwrap();
    assert_eq!(orphan.user_id, user_id);
}

#[test]
fn expense_creation_validates_presence_not_truthiness() {
    let (mut ledger, user_id) = ledger_with_user("Ann");

    let missing = ExpenseDraft {
        amount: Some(3.0),
        user_id: Some(user_id),
        ..Default::default()
    };
    assert_eq!(
        ledger.create_expense(missing).map(|_| ()),
        Err(LedgerError::MissingExpenseFields)
    );

    let empty_title = ExpenseDraft {
        title: Some(String::new()),
        amount: Some(3.0),
        user_id: Some(user_id),
        ..Default::default()
    };
    assert_eq!(
        ledger.create_expense(empty_title).map(|_| ()),
        Err(LedgerError::MissingExpenseFields)
    );

    // A zero amount is present, so it is valid.
    let free = ledger.create_expense(draft("Tap water", 0.0, user_id)).unwrap();
    assert_eq!(free.amount, 0.0);
}

#[test]
fn expense_owner_must_exist_at_creation() {
    let mut ledger = Ledger::new();
    assert_eq!(
        ledger.create_expense(draft("Coffee", 3.0, Uuid::new_v4())).map(|_| ()),
        Err(LedgerError::ExpenseOwnerNotFound)
    );
}

#[test]
fn expense_defaults() {
    let (mut ledger, user_id) = ledger_with_user("Ann");
    let before = Utc::now();
    let expense = ledger.create_expense(draft("Coffee", 3.0, user_id)).unwrap();

    assert_eq!(expense.category, "");
    assert_eq!(expense.note, "");
    assert!(expense.spent_at >= before && expense.spent_at <= Utc::now());
}

#[test]
fn empty_patch_changes_nothing() {
    let (mut ledger, user_id) = ledger_with_user("Ann");
    let original = ledger
        .create_expense(draft("Coffee", 3.0, user_id))
        .unwrap()
        .clone();

    let updated = ledger
        .update_expense(original.id, ExpensePatch::default())
        .unwrap();
    assert_eq!(*updated, original);
}

#[test]
fn patch_applies_empty_and_zero_values() {
    let (mut ledger, user_id) = ledger_with_user("Ann");
    let id = ledger.create_expense(draft("Coffee", 3.0, user_id)).unwrap().id;

    let patch = ExpensePatch {
        title: Some(String::new()),
        amount: Some(0.0),
        ..Default::default()
    };
    let updated = ledger.update_expense(id, patch).unwrap();
    assert_eq!(updated.title, "");
    assert_eq!(updated.amount, 0.0);
}

#[test]
fn patch_unknown_expense() {
    let mut ledger = Ledger::new();
    assert_eq!(
        ledger
            .update_expense(Uuid::new_v4(), ExpensePatch::default())
            .map(|_| ()),
        Err(LedgerError::ExpenseNotFound)
    );
}

#[test]
fn delete_expense_then_lookup_misses() {
    let (mut ledger, user_id) = ledger_with_user("Ann");
    let id = ledger.create_expense(draft("Coffee", 3.0, user_id)).unwrap().id;

    assert_eq!(
        ledger.delete_expense(Uuid::new_v4()),
        Err(LedgerError::ExpenseNotFound)
    );
    ledger.delete_expense(id).unwrap();
    assert_eq!(ledger.expense(id), Err(LedgerError::ExpenseNotFound));
}

#[test]
fn filters_compose_conjunctively() {
    let (mut ledger, ann) = ledger_with_user("Ann");
    let bob = ledger.create_user(Some(String::from("Bob"))).unwrap().id;

    let mut make = |user: Uuid, category: &str, day: u32| {
        let mut d = draft("Item", 1.0, user);
        d.category = Some(category.to_string());
        d.spent_at = Some(Utc.with_ymd_and_hms(2026, 3, day, 9, 0, 0).unwrap());
        ledger.create_expense(d).unwrap().id
    };

    let wanted = make(ann, "food", 2);
    make(ann, "food", 20);
    make(ann, "travel", 2);
    make(bob, "food", 2);

    let filter = ExpenseFilter {
        user_id: Some(ann),
        category: Some(String::from("food")),
        from: Some(String::from("2026-03-01")),
        to: Some(String::from("2026-03-10")),
        ..Default::default()
    };
    let found = ledger.expenses(&filter).unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].id, wanted);
}

#[test]
fn category_set_matches_union_without_duplicates() {
    let (mut ledger, ann) = ledger_with_user("Ann");

    for category in ["food", "travel", "rent"] {
        let mut d = draft("Item", 1.0, ann);
        d.category = Some(category.to_string());
        ledger.create_expense(d).unwrap();
    }

    let multi = ExpenseFilter {
        categories: Some(vec![String::from("food,travel")]),
        ..Default::default()
    };
    let found = ledger.expenses(&multi).unwrap();

    let singles: Vec<_> = ["food", "travel"]
        .iter()
        .flat_map(|category| {
            let filter = ExpenseFilter {
                category: Some((*category).to_string()),
                ..Default::default()
            };
            ledger.expenses(&filter).unwrap()
        })
        .collect();

    assert_eq!(found.len(), 2);
    assert_eq!(found.len(), singles.len());
}

#[test]
fn owner_filter_preserves_creation_order() {
    let (mut ledger, ann) = ledger_with_user("Ann");

    let mut ids = Vec::new();
    for title in ["First", "Second", "Third"] {
        ids.push(ledger.create_expense(draft(title, 1.0, ann)).unwrap().id);
    }

    let filter = ExpenseFilter {
        user_id: Some(ann),
        ..Default::default()
    };
    let found: Vec<Uuid> = ledger
        .expenses(&filter)
        .unwrap()
        .into_iter()
        .map(|e| e.id)
        .collect();
    assert_eq!(found, ids);
}
