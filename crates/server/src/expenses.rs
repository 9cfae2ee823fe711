//! Expenses API endpoints.

use api_types::expense::{ExpenseListParams, ExpenseNew, ExpenseUpdate, ExpenseView};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use axum_extra::extract::Query;
use uuid::Uuid;

use crate::{ServerError, server::ServerState};

fn view(expense: &engine::Expense) -> ExpenseView {
    ExpenseView {
        id: expense.id,
        user_id: expense.user_id,
        title: expense.title.clone(),
        amount: expense.amount,
        category: expense.category.clone(),
        note: expense.note.clone(),
        spent_at: expense.spent_at,
    }
}

// `axum_extra`'s Query so a repeated `categories` parameter collects into the
// Vec; a single comma-separated value is split further down in the ledger.
pub async fn list(
    State(state): State<ServerState>,
    Query(params): Query<ExpenseListParams>,
) -> Result<Json<Vec<ExpenseView>>, ServerError> {
    let filter = engine::ExpenseFilter {
        user_id: params.user_id,
        category: params.category,
        categories: params.categories,
        from: params.from,
        to: params.to,
    };

    let ledger = state.ledger.lock().await;
    let expenses = ledger.expenses(&filter)?;
    Ok(Json(expenses.iter().map(view).collect()))
}

pub async fn get(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ExpenseView>, ServerError> {
    let ledger = state.ledger.lock().await;
    let expense = ledger.expense(id)?;
    Ok(Json(view(expense)))
}

pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<ExpenseNew>,
) -> Result<(StatusCode, Json<ExpenseView>), ServerError> {
    let draft = engine::ExpenseDraft {
        title: payload.title,
        amount: payload.amount,
        user_id: payload.user_id,
        category: payload.category,
        note: payload.note,
        spent_at: payload.spent_at,
    };

    let mut ledger = state.ledger.lock().await;
    let expense = ledger.create_expense(draft)?;
    Ok((StatusCode::CREATED, Json(view(expense))))
}

pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<ExpenseUpdate>,
) -> Result<Json<ExpenseView>, ServerError> {
    let patch = engine::ExpensePatch {
        title: payload.title,
        amount: payload.amount,
        category: payload.category,
        note: payload.note,
        spent_at: payload.spent_at,
    };

    let mut ledger = state.ledger.lock().await;
    let expense = ledger.update_expense(id, patch)?;
    Ok(Json(view(expense)))
}

pub async fn remove(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ServerError> {
    let mut ledger = state.ledger.lock().await;
    ledger.delete_expense(id)?;
    Ok(StatusCode::NO_CONTENT)
}
