//! Users API endpoints.

use api_types::user::{UserNew, UserUpdate, UserView};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use uuid::Uuid;

use crate::{ServerError, server::ServerState};

fn view(user: &engine::User) -> UserView {
    UserView {
        id: user.id,
        name: user.name.clone(),
    }
}

pub async fn list(State(state): State<ServerState>) -> Json<Vec<UserView>> {
    let ledger = state.ledger.lock().await;
    Json(ledger.users().iter().map(view).collect())
}

pub async fn get(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
) -> Result<Json<UserView>, ServerError> {
    let ledger = state.ledger.lock().await;
    let user = ledger.user(id)?;
    Ok(Json(view(user)))
}

pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<UserNew>,
) -> Result<(StatusCode, Json<UserView>), ServerError> {
    let mut ledger = state.ledger.lock().await;
    let user = ledger.create_user(payload.name)?;
    Ok((StatusCode::CREATED, Json(view(user))))
}

pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UserUpdate>,
) -> Result<Json<UserView>, ServerError> {
    let mut ledger = state.ledger.lock().await;
    let user = ledger.rename_user(id, payload.name)?;
    Ok(Json(view(user)))
}

pub async fn remove(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ServerError> {
    let mut ledger = state.ledger.lock().await;
    ledger.delete_user(id)?;
    Ok(StatusCode::NO_CONTENT)
}
