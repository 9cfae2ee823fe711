use axum::{Json, http::StatusCode, response::IntoResponse};
use engine::LedgerError;
use serde::Serialize;

pub use server::{app, run, run_with_listener, spawn_with_listener};

mod expenses;
mod server;
mod users;

pub mod types {
    pub mod user {
        pub use api_types::user::{UserNew, UserUpdate, UserView};
    }

    pub mod expense {
        pub use api_types::expense::{ExpenseListParams, ExpenseNew, ExpenseUpdate, ExpenseView};
    }
}

pub enum ServerError {
    Ledger(LedgerError),
}

#[derive(Serialize)]
struct ErrorBody {
    message: String,
}

fn status_for_ledger_error(err: &LedgerError) -> StatusCode {
    if err.is_not_found() {
        StatusCode::NOT_FOUND
    } else {
        StatusCode::BAD_REQUEST
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> axum::response::Response {
        let Self::Ledger(err) = self;
        let status = status_for_ledger_error(&err);
        let message = err.to_string();

        (status, Json(ErrorBody { message })).into_response()
    }
}

impl From<LedgerError> for ServerError {
    fn from(value: LedgerError) -> Self {
        Self::Ledger(value)
    }
}
