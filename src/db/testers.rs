//! Database queries for testers.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set, SqlErr};
use tracing::info;

use crate::entity::tester::{self, ActiveModel, Entity as Tester};
use crate::error::{AppError, AppResult};
use crate::models::NewTester;

use super::DbPool;

impl DbPool {
    /// Insert a new tester. Emails are unique; a duplicate yields a conflict.
    pub async fn create_tester(&self, new: NewTester) -> AppResult<tester::Model> {
        let now = Utc::now();
        let model = ActiveModel {
            name: Set(new.name),
            email: Set(new.email),
            role: Set(new.role),
            date_joined: Set(Some(new.date_joined.unwrap_or_else(|| now.date_naive()))),
            created_at: Set(now),
            ..Default::default()
        };

        let result = model.insert(self.connection()).await.map_err(|e| {
            if let Some(SqlErr::UniqueConstraintViolation(_)) = e.sql_err() {
                return AppError::Conflict("A tester with this email already exists".to_string());
            }
            AppError::from_db("Failed to insert tester", e)
        })?;

        info!(tester_id = result.tester_id, "Tester created");
        Ok(result)
    }

    pub async fn list_testers(&self) -> AppResult<Vec<tester::Model>> {
        Tester::find()
            .order_by_asc(tester::Column::TesterId)
            .all(self.connection())
            .await
            .map_err(|e| AppError::from_db("Failed to list testers", e))
    }

    pub async fn get_tester(&self, id: i32) -> AppResult<Option<tester::Model>> {
        Tester::find_by_id(id)
            .one(self.connection())
            .await
            .map_err(|e| AppError::from_db("Failed to get tester", e))
    }

    pub async fn find_tester_by_email(&self, email: &str) -> AppResult<Option<tester::Model>> {
        Tester::find()
            .filter(tester::Column::Email.eq(email))
            .one(self.connection())
            .await
            .map_err(|e| AppError::from_db("Failed to look up tester", e))
    }

    /// Delete a tester.
    ///
    /// Rejected while the tester is recorded as the discoverer of any bug.
    /// Assigned bugs lose their assignee and the tester's executions are removed.
    pub async fn delete_tester(&self, id: i32) -> AppResult<()> {
        let result = Tester::delete_by_id(id)
            .exec(self.connection())
            .await
            .map_err(|e| {
                if let Some(SqlErr::ForeignKeyConstraintViolation(_)) = e.sql_err() {
                    return AppError::Conflict(format!(
                        "Tester {} has discovered bugs and cannot be deleted",
                        id
                    ));
                }
                AppError::from_db("Failed to delete tester", e)
            })?;

        if result.rows_affected == 0 {
            return Err(AppError::NotFound(format!("Tester {}", id)));
        }

        info!(tester_id = id, "Tester deleted");
        Ok(())
    }
}
