//! Request and response bodies shared by the server and its clients.
//!
//! All JSON field names are camelCase (`userId`, `spentAt`). Required fields
//! on create bodies are still `Option` here: their absence must produce the
//! API's own validation message, not a deserialization rejection.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub mod user {
    use super::*;

    #[derive(Debug, Serialize, Deserialize)]
    pub struct UserNew {
        pub name: Option<String>,
    }

    /// Body for renaming a user. Same shape as [`UserNew`], kept separate so
    /// the two requests can evolve independently.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct UserUpdate {
        pub name: Option<String>,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct UserView {
        pub id: Uuid,
        pub name: String,
    }
}

pub mod expense {
    use super::*;

    #[derive(Debug, Default, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct ExpenseNew {
        pub title: Option<String>,
        pub amount: Option<f64>,
        pub user_id: Option<Uuid>,
        pub category: Option<String>,
        pub note: Option<String>,
        /// RFC 3339 timestamp. Defaults to the server's current time.
        pub spent_at: Option<DateTime<Utc>>,
    }

    /// Partial update: absent fields are left untouched. `userId` and `id`
    /// cannot be changed.
    #[derive(Debug, Default, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct ExpenseUpdate {
        pub title: Option<String>,
        pub amount: Option<f64>,
        pub category: Option<String>,
        pub note: Option<String>,
        pub spent_at: Option<DateTime<Utc>>,
    }

    #[derive(Debug, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct ExpenseView {
        pub id: Uuid,
        pub user_id: Uuid,
        pub title: String,
        pub amount: f64,
        pub category: String,
        pub note: String,
        pub spent_at: DateTime<Utc>,
    }

    /// Query parameters for the expense listing.
    ///
    /// `categories` accepts either a comma-separated value or a repeated
    /// parameter; the date bounds only apply when both are present.
    #[derive(Debug, Default, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct ExpenseListParams {
        pub user_id: Option<Uuid>,
        pub category: Option<String>,
        pub categories: Option<Vec<String>>,
        pub from: Option<String>,
        pub to: Option<String>,
    }
}
