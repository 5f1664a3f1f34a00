//! Tester DTOs.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::entity::tester;
use crate::error::{AppError, AppResult};

use super::{optional_text, required_text};

/// Request body for `POST /api/testers`.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct CreateTesterRequest {
    pub name: Option<String>,
    /// Must be unique across testers.
    pub email: Option<String>,
    /// e.g. "QA Engineer", "Senior QA".
    pub role: Option<String>,
    /// Defaults to today.
    pub date_joined: Option<NaiveDate>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewTester {
    pub name: String,
    pub email: String,
    pub role: Option<String>,
    pub date_joined: Option<NaiveDate>,
}

impl CreateTesterRequest {
    pub fn validate(self) -> AppResult<NewTester> {
        let name = required_text(self.name, "name")?;
        let email = required_text(self.email, "email")?;
        if !email.contains('@') {
            return Err(AppError::InvalidInput(format!(
                "email '{}' is not a valid address",
                email
            )));
        }

        Ok(NewTester {
            name,
            email,
            role: optional_text(self.role),
            date_joined: self.date_joined,
        })
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct TesterResponse {
    pub tester_id: i32,
    pub name: String,
    pub email: String,
    pub role: Option<String>,
    pub date_joined: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
}

impl From<tester::Model> for TesterResponse {
    fn from(m: tester::Model) -> Self {
        Self {
            tester_id: m.tester_id,
            name: m.name,
            email: m.email,
            role: m.role,
            date_joined: m.date_joined,
            created_at: m.created_at,
        }
    }
}
