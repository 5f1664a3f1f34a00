//! Database queries for test cases.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};
use tracing::info;

use crate::entity::test_case::{self, ActiveModel, Entity as TestCase};
use crate::error::{AppError, AppResult};
use crate::models::NewTestCase;

use super::DbPool;

impl DbPool {
    /// Insert a new test case into an existing suite.
    pub async fn create_test_case(&self, new: NewTestCase) -> AppResult<test_case::Model> {
        let now = Utc::now();
        let model = ActiveModel {
            test_suite_id: Set(new.test_suite_id),
            name: Set(new.name),
            description: Set(new.description),
            preconditions: Set(new.preconditions),
            steps: Set(new.steps),
            expected_result: Set(new.expected_result),
            priority: Set(new.priority.as_str().to_string()),
            created_date: Set(now.date_naive()),
            created_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(self.connection())
            .await
            .map_err(|e| AppError::from_db("Failed to insert test case", e))?;

        info!(
            test_case_id = result.test_case_id,
            test_suite_id = result.test_suite_id,
            "Test case created"
        );
        Ok(result)
    }

    pub async fn list_test_cases(
        &self,
        test_suite_id: Option<i32>,
    ) -> AppResult<Vec<test_case::Model>> {
        let mut select = TestCase::find();
        if let Some(test_suite_id) = test_suite_id {
            select = select.filter(test_case::Column::TestSuiteId.eq(test_suite_id));
        }

        select
            .order_by_asc(test_case::Column::TestCaseId)
            .all(self.connection())
            .await
            .map_err(|e| AppError::from_db("Failed to list test cases", e))
    }

    pub async fn get_test_case(&self, id: i32) -> AppResult<Option<test_case::Model>> {
        TestCase::find_by_id(id)
            .one(self.connection())
            .await
            .map_err(|e| AppError::from_db("Failed to get test case", e))
    }
}
