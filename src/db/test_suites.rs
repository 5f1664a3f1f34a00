//! Database queries for test suites.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};
use tracing::info;

use crate::entity::test_suite::{self, ActiveModel, Entity as TestSuite};
use crate::error::{AppError, AppResult};
use crate::models::NewTestSuite;

use super::DbPool;

impl DbPool {
    /// Insert a new test suite. `created_date` is the current UTC date.
    pub async fn create_test_suite(&self, new: NewTestSuite) -> AppResult<test_suite::Model> {
        let now = Utc::now();
        let model = ActiveModel {
            project_id: Set(new.project_id),
            name: Set(new.name),
            description: Set(new.description),
            created_date: Set(now.date_naive()),
            created_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(self.connection())
            .await
            .map_err(|e| AppError::from_db("Failed to insert test suite", e))?;

        info!(test_suite_id = result.test_suite_id, "Test suite created");
        Ok(result)
    }

    pub async fn list_test_suites(
        &self,
        project_id: Option<i32>,
    ) -> AppResult<Vec<test_suite::Model>> {
        let mut select = TestSuite::find();
        if let Some(project_id) = project_id {
            select = select.filter(test_suite::Column::ProjectId.eq(project_id));
        }

        select
            .order_by_asc(test_suite::Column::TestSuiteId)
            .all(self.connection())
            .await
            .map_err(|e| AppError::from_db("Failed to list test suites", e))
    }

    pub async fn get_test_suite(&self, id: i32) -> AppResult<Option<test_suite::Model>> {
        TestSuite::find_by_id(id)
            .one(self.connection())
            .await
            .map_err(|e| AppError::from_db("Failed to get test suite", e))
    }
}
