//! Database queries for test executions.
//!
//! Executions are append-only: there is no update or delete here. They are
//! removed only when their test case or tester is deleted.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};
use tracing::info;

use crate::entity::test_execution::{self, ActiveModel, Entity as TestExecution};
use crate::error::{AppError, AppResult};
use crate::models::{ListExecutionsQuery, NewExecution};

use super::DbPool;

impl DbPool {
    /// Record a test execution.
    pub async fn create_execution(&self, new: NewExecution) -> AppResult<test_execution::Model> {
        let model = ActiveModel {
            test_case_id: Set(new.test_case_id),
            tester_id: Set(new.tester_id),
            execution_date: Set(new.execution_date.unwrap_or_else(Utc::now)),
            status: Set(new.status.as_str().to_string()),
            notes: Set(new.notes),
            ..Default::default()
        };

        let result = model
            .insert(self.connection())
            .await
            .map_err(|e| AppError::from_db("Failed to insert test execution", e))?;

        info!(
            execution_id = result.execution_id,
            test_case_id = result.test_case_id,
            status = %result.status,
            "Test execution recorded"
        );
        Ok(result)
    }

    /// List executions, newest first.
    pub async fn list_executions(
        &self,
        query: &ListExecutionsQuery,
    ) -> AppResult<Vec<test_execution::Model>> {
        let mut select = TestExecution::find();
        if let Some(test_case_id) = query.test_case_id {
            select = select.filter(test_execution::Column::TestCaseId.eq(test_case_id));
        }
        if let Some(tester_id) = query.tester_id {
            select = select.filter(test_execution::Column::TesterId.eq(tester_id));
        }

        select
            .order_by_desc(test_execution::Column::ExecutionDate)
            .order_by_desc(test_execution::Column::ExecutionId)
            .all(self.connection())
            .await
            .map_err(|e| AppError::from_db("Failed to list test executions", e))
    }

    pub async fn get_execution(&self, id: i32) -> AppResult<Option<test_execution::Model>> {
        TestExecution::find_by_id(id)
            .one(self.connection())
            .await
            .map_err(|e| AppError::from_db("Failed to get test execution", e))
    }
}
