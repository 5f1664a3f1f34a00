//! Database queries for bugs, including the timestamp side effects of
//! assignment and status changes.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};
use tracing::info;

use crate::entity::bug::{self, ActiveModel, Entity as Bug};
use crate::error::{AppError, AppResult};
use crate::models::{BugPatch, ListBugsQuery, NewBug};

use super::DbPool;

/// Build the active model for a bug update.
///
/// Only fields present in the patch are marked as changed. `assigned_date` is
/// stamped when the bug is assigned to a tester it was not already assigned
/// to; `resolution_date` is stamped when the status moves into the closed
/// category from a different status. Clearing the assignee or reopening a bug
/// leaves the earlier timestamps in place.
pub fn build_bug_update(current: bug::Model, patch: BugPatch, now: DateTime<Utc>) -> ActiveModel {
    let previous_assignee = current.assigned_to;
    let previous_status = current.status.clone();
    let mut active: ActiveModel = current.into();

    if let Some(project_id) = patch.project_id {
        active.project_id = Set(project_id);
    }
    if let Some(sub_project_id) = patch.sub_project_id {
        active.sub_project_id = Set(sub_project_id);
    }
    if let Some(test_case_id) = patch.test_case_id {
        active.test_case_id = Set(test_case_id);
    }
    if let Some(discovered_by) = patch.discovered_by {
        active.discovered_by = Set(discovered_by);
    }
    if let Some(assigned_to) = patch.assigned_to {
        if assigned_to.is_some() && assigned_to != previous_assignee {
            active.assigned_date = Set(Some(now));
        }
        active.assigned_to = Set(assigned_to);
    }
    if let Some(name) = patch.name {
        active.name = Set(name);
    }
    if let Some(description) = patch.description {
        active.description = Set(description);
    }
    if let Some(steps) = patch.steps_to_reproduce {
        active.steps_to_reproduce = Set(steps);
    }
    if let Some(status) = patch.status {
        if status.is_closed() && status.as_str() != previous_status {
            active.resolution_date = Set(Some(now));
        }
        active.status = Set(status.as_str().to_string());
    }
    if let Some(severity) = patch.severity {
        active.severity = Set(severity.as_str().to_string());
    }
    if let Some(priority) = patch.priority {
        active.priority = Set(priority.as_str().to_string());
    }
    if let Some(bug_type) = patch.bug_type {
        active.bug_type = Set(bug_type.as_str().to_string());
    }
    if let Some(environment) = patch.environment {
        active.environment = Set(environment);
    }

    active
}

impl DbPool {
    /// Insert a new bug.
    ///
    /// A bug created with an assignee gets an `assigned_date`; one created
    /// directly in a closed status gets a `resolution_date`.
    pub async fn create_bug(&self, new: NewBug) -> AppResult<bug::Model> {
        let now = Utc::now();
        let assigned_date = new.assigned_to.map(|_| now);
        let resolution_date = new.status.is_closed().then_some(now);

        let model = ActiveModel {
            project_id: Set(new.project_id),
            sub_project_id: Set(new.sub_project_id),
            test_case_id: Set(new.test_case_id),
            discovered_by: Set(new.discovered_by),
            assigned_to: Set(new.assigned_to),
            name: Set(new.name),
            description: Set(new.description),
            steps_to_reproduce: Set(new.steps_to_reproduce),
            status: Set(new.status.as_str().to_string()),
            severity: Set(new.severity.as_str().to_string()),
            priority: Set(new.priority.as_str().to_string()),
            bug_type: Set(new.bug_type.as_str().to_string()),
            environment: Set(new.environment),
            discovered_date: Set(now),
            assigned_date: Set(assigned_date),
            resolution_date: Set(resolution_date),
            ..Default::default()
        };

        let result = model
            .insert(self.connection())
            .await
            .map_err(|e| AppError::from_db("Failed to insert bug", e))?;

        info!(
            bug_id = result.bug_id,
            project_id = result.project_id,
            severity = %result.severity,
            "Bug created"
        );
        Ok(result)
    }

    /// List bugs, newest first, with optional filters.
    pub async fn list_bugs(&self, query: &ListBugsQuery) -> AppResult<Vec<bug::Model>> {
        let mut select = Bug::find();

        if let Some(project_id) = query.project_id {
            select = select.filter(bug::Column::ProjectId.eq(project_id));
        }
        if let Some(ref status) = query.status {
            select = select.filter(bug::Column::Status.eq(status.as_str()));
        }
        if let Some(ref severity) = query.severity {
            select = select.filter(bug::Column::Severity.eq(severity.as_str()));
        }
        if let Some(assigned_to) = query.assigned_to {
            select = select.filter(bug::Column::AssignedTo.eq(assigned_to));
        }

        select
            .order_by_desc(bug::Column::DiscoveredDate)
            .order_by_desc(bug::Column::BugId)
            .all(self.connection())
            .await
            .map_err(|e| AppError::from_db("Failed to list bugs", e))
    }

    /// Get a bug by ID.
    pub async fn get_bug(&self, id: i32) -> AppResult<Option<bug::Model>> {
        Bug::find_by_id(id)
            .one(self.connection())
            .await
            .map_err(|e| AppError::from_db("Failed to get bug", e))
    }

    /// Apply a partial update to a bug.
    pub async fn update_bug(&self, id: i32, patch: BugPatch) -> AppResult<bug::Model> {
        let current = self
            .get_bug(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Bug {}", id)))?;

        if patch.is_empty() {
            return Ok(current);
        }

        let new_status = patch.status;
        let active = build_bug_update(current, patch, Utc::now());

        let result = active
            .update(self.connection())
            .await
            .map_err(|e| AppError::from_db("Failed to update bug", e))?;

        info!(bug_id = id, status = ?new_status.map(|s| s.as_str()), "Bug updated");
        Ok(result)
    }
}
