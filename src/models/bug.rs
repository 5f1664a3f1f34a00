//! Bug domain models, enumerations and DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::entity::bug;
use crate::error::{AppError, AppResult};

use super::{deserialize_some, optional_text, parse_enum, required_id, required_text};

/// Bug severity, most severe first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Critical,
    High,
    Medium,
    Low,
}

impl Severity {
    pub const ALL: [Severity; 4] = [Self::Critical, Self::High, Self::Medium, Self::Low];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Critical => "Critical",
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "Critical" => Some(Self::Critical),
            "High" => Some(Self::High),
            "Medium" => Some(Self::Medium),
            "Low" => Some(Self::Low),
            _ => None,
        }
    }

    /// Sort rank, 1 for Critical through 4 for Low.
    pub fn rank(&self) -> i32 {
        *self as i32 + 1
    }

    pub fn names() -> Vec<&'static str> {
        Self::ALL.iter().map(|s| s.as_str()).collect()
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Bug priority, P1 most urgent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum BugPriority {
    P1,
    P2,
    P3,
    P4,
}

impl BugPriority {
    pub const ALL: [BugPriority; 4] = [Self::P1, Self::P2, Self::P3, Self::P4];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::P1 => "P1",
            Self::P2 => "P2",
            Self::P3 => "P3",
            Self::P4 => "P4",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "P1" => Some(Self::P1),
            "P2" => Some(Self::P2),
            "P3" => Some(Self::P3),
            "P4" => Some(Self::P4),
            _ => None,
        }
    }

    /// Sort rank, 1 for P1 through 4 for P4.
    pub fn rank(&self) -> i32 {
        *self as i32 + 1
    }

    pub fn names() -> Vec<&'static str> {
        Self::ALL.iter().map(|p| p.as_str()).collect()
    }
}

impl std::fmt::Display for BugPriority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Reporting bucket a bug status falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCategory {
    Open,
    Closed,
    /// Reopened, Rejected and Deferred are counted in neither bucket.
    Other,
}

/// Bug workflow status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BugStatus {
    New,
    Assigned,
    Open,
    Fixed,
    Retest,
    Verified,
    Closed,
    Reopened,
    Rejected,
    Deferred,
}

impl BugStatus {
    pub const ALL: [BugStatus; 10] = [
        Self::New,
        Self::Assigned,
        Self::Open,
        Self::Fixed,
        Self::Retest,
        Self::Verified,
        Self::Closed,
        Self::Reopened,
        Self::Rejected,
        Self::Deferred,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::New => "New",
            Self::Assigned => "Assigned",
            Self::Open => "Open",
            Self::Fixed => "Fixed",
            Self::Retest => "Retest",
            Self::Verified => "Verified",
            Self::Closed => "Closed",
            Self::Reopened => "Reopened",
            Self::Rejected => "Rejected",
            Self::Deferred => "Deferred",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|status| status.as_str() == s)
    }

    pub fn category(&self) -> StatusCategory {
        match self {
            Self::New | Self::Assigned | Self::Open | Self::Fixed | Self::Retest => {
                StatusCategory::Open
            }
            Self::Closed | Self::Verified => StatusCategory::Closed,
            Self::Reopened | Self::Rejected | Self::Deferred => StatusCategory::Other,
        }
    }

    pub fn is_closed(&self) -> bool {
        self.category() == StatusCategory::Closed
    }

    /// Statuses belonging to `category`, in workflow order.
    pub fn in_category(category: StatusCategory) -> Vec<BugStatus> {
        Self::ALL
            .iter()
            .copied()
            .filter(|status| status.category() == category)
            .collect()
    }

    pub fn names() -> Vec<&'static str> {
        Self::ALL.iter().map(|s| s.as_str()).collect()
    }
}

impl std::fmt::Display for BugStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Bug classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BugType {
    Functional,
    Performance,
    UiUx,
    Security,
    Compatibility,
    Data,
    Integration,
}

impl BugType {
    pub const ALL: [BugType; 7] = [
        Self::Functional,
        Self::Performance,
        Self::UiUx,
        Self::Security,
        Self::Compatibility,
        Self::Data,
        Self::Integration,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Functional => "Functional",
            Self::Performance => "Performance",
            Self::UiUx => "UI/UX",
            Self::Security => "Security",
            Self::Compatibility => "Compatibility",
            Self::Data => "Data",
            Self::Integration => "Integration",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|t| t.as_str() == s)
    }

    pub fn names() -> Vec<&'static str> {
        Self::ALL.iter().map(|t| t.as_str()).collect()
    }
}

impl std::fmt::Display for BugType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

fn parse_severity(value: &str) -> AppResult<Severity> {
    parse_enum(value, "severity", Severity::parse, &Severity::names())
}

fn parse_priority(value: &str) -> AppResult<BugPriority> {
    parse_enum(value, "priority", BugPriority::parse, &BugPriority::names())
}

fn parse_status(value: &str) -> AppResult<BugStatus> {
    parse_enum(value, "status", BugStatus::parse, &BugStatus::names())
}

fn parse_type(value: &str) -> AppResult<BugType> {
    parse_enum(value, "type", BugType::parse, &BugType::names())
}

/// Request body for `POST /api/bugs`.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct CreateBugRequest {
    pub project_id: Option<i32>,
    pub sub_project_id: Option<i32>,
    pub test_case_id: Option<i32>,
    /// Tester who found the bug.
    pub discovered_by: Option<i32>,
    /// Tester the bug is assigned to; sets `assigned_date` when present.
    pub assigned_to: Option<i32>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub steps_to_reproduce: Option<String>,
    /// Defaults to "New".
    pub status: Option<String>,
    /// Critical, High, Medium or Low.
    pub severity: Option<String>,
    /// P1, P2, P3 or P4.
    pub priority: Option<String>,
    /// Defaults to "Functional".
    #[serde(rename = "type")]
    pub bug_type: Option<String>,
    pub environment: Option<String>,
}

/// A validated bug ready for insertion.
#[derive(Debug, Clone, PartialEq)]
pub struct NewBug {
    pub project_id: i32,
    pub sub_project_id: Option<i32>,
    pub test_case_id: Option<i32>,
    pub discovered_by: i32,
    pub assigned_to: Option<i32>,
    pub name: String,
    pub description: Option<String>,
    pub steps_to_reproduce: Option<String>,
    pub status: BugStatus,
    pub severity: Severity,
    pub priority: BugPriority,
    pub bug_type: BugType,
    pub environment: Option<String>,
}

impl CreateBugRequest {
    pub fn validate(self) -> AppResult<NewBug> {
        let name = required_text(self.name, "name")?;
        let project_id = required_id(self.project_id, "project_id")?;
        let discovered_by = required_id(self.discovered_by, "discovered_by")?;
        let severity = parse_severity(&required_text(self.severity, "severity")?)?;
        let priority = parse_priority(&required_text(self.priority, "priority")?)?;

        let status = match optional_text(self.status) {
            Some(s) => parse_status(&s)?,
            None => BugStatus::New,
        };
        let bug_type = match optional_text(self.bug_type) {
            Some(t) => parse_type(&t)?,
            None => BugType::Functional,
        };

        Ok(NewBug {
            project_id,
            sub_project_id: self.sub_project_id,
            test_case_id: self.test_case_id,
            discovered_by,
            assigned_to: self.assigned_to,
            name,
            description: optional_text(self.description),
            steps_to_reproduce: optional_text(self.steps_to_reproduce),
            status,
            severity,
            priority,
            bug_type,
            environment: optional_text(self.environment),
        })
    }
}

/// Request body for `PUT /api/bugs/{id}`.
///
/// Absent fields are left untouched. For nullable columns an explicit `null`
/// clears the value.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct UpdateBugRequest {
    pub project_id: Option<i32>,
    #[serde(default, deserialize_with = "deserialize_some")]
    #[schema(value_type = Option<i32>)]
    pub sub_project_id: Option<Option<i32>>,
    #[serde(default, deserialize_with = "deserialize_some")]
    #[schema(value_type = Option<i32>)]
    pub test_case_id: Option<Option<i32>>,
    pub discovered_by: Option<i32>,
    /// Assigning to a different tester refreshes `assigned_date`.
    #[serde(default, deserialize_with = "deserialize_some")]
    #[schema(value_type = Option<i32>)]
    pub assigned_to: Option<Option<i32>>,
    pub name: Option<String>,
    #[serde(default, deserialize_with = "deserialize_some")]
    #[schema(value_type = Option<String>)]
    pub description: Option<Option<String>>,
    #[serde(default, deserialize_with = "deserialize_some")]
    #[schema(value_type = Option<String>)]
    pub steps_to_reproduce: Option<Option<String>>,
    /// Moving into Closed or Verified sets `resolution_date`.
    pub status: Option<String>,
    pub severity: Option<String>,
    pub priority: Option<String>,
    #[serde(rename = "type")]
    pub bug_type: Option<String>,
    #[serde(default, deserialize_with = "deserialize_some")]
    #[schema(value_type = Option<String>)]
    pub environment: Option<Option<String>>,
}

/// A validated partial bug update.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BugPatch {
    pub project_id: Option<i32>,
    pub sub_project_id: Option<Option<i32>>,
    pub test_case_id: Option<Option<i32>>,
    pub discovered_by: Option<i32>,
    pub assigned_to: Option<Option<i32>>,
    pub name: Option<String>,
    pub description: Option<Option<String>>,
    pub steps_to_reproduce: Option<Option<String>>,
    pub status: Option<BugStatus>,
    pub severity: Option<Severity>,
    pub priority: Option<BugPriority>,
    pub bug_type: Option<BugType>,
    pub environment: Option<Option<String>>,
}

impl BugPatch {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

impl UpdateBugRequest {
    pub fn validate(self) -> AppResult<BugPatch> {
        let name = match self.name {
            Some(n) => Some(required_text(Some(n), "name")?),
            None => None,
        };

        Ok(BugPatch {
            project_id: self.project_id,
            sub_project_id: self.sub_project_id,
            test_case_id: self.test_case_id,
            discovered_by: self.discovered_by,
            assigned_to: self.assigned_to,
            name,
            description: self.description.map(optional_text),
            steps_to_reproduce: self.steps_to_reproduce.map(optional_text),
            status: self.status.as_deref().map(parse_status).transpose()?,
            severity: self.severity.as_deref().map(parse_severity).transpose()?,
            priority: self.priority.as_deref().map(parse_priority).transpose()?,
            bug_type: self.bug_type.as_deref().map(parse_type).transpose()?,
            environment: self.environment.map(optional_text),
        })
    }
}

/// Query parameters for `GET /api/bugs`.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListBugsQuery {
    pub project_id: Option<i32>,
    pub status: Option<String>,
    pub severity: Option<String>,
    pub assigned_to: Option<i32>,
}

impl ListBugsQuery {
    /// Reject filter values that can never match.
    pub fn validate(&self) -> AppResult<()> {
        if let Some(status) = &self.status {
            parse_status(status)?;
        }
        if let Some(severity) = &self.severity {
            parse_severity(severity)?;
        }
        Ok(())
    }
}

/// Bug as returned by the API.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct BugResponse {
    pub bug_id: i32,
    pub project_id: i32,
    pub sub_project_id: Option<i32>,
    pub test_case_id: Option<i32>,
    pub discovered_by: i32,
    pub assigned_to: Option<i32>,
    pub name: String,
    pub description: Option<String>,
    pub steps_to_reproduce: Option<String>,
    pub status: String,
    pub severity: String,
    pub priority: String,
    #[serde(rename = "type")]
    pub bug_type: String,
    pub environment: Option<String>,
    pub discovered_date: DateTime<Utc>,
    pub assigned_date: Option<DateTime<Utc>>,
    pub resolution_date: Option<DateTime<Utc>>,
}

impl From<bug::Model> for BugResponse {
    fn from(m: bug::Model) -> Self {
        Self {
            bug_id: m.bug_id,
            project_id: m.project_id,
            sub_project_id: m.sub_project_id,
            test_case_id: m.test_case_id,
            discovered_by: m.discovered_by,
            assigned_to: m.assigned_to,
            name: m.name,
            description: m.description,
            steps_to_reproduce: m.steps_to_reproduce,
            status: m.status,
            severity: m.severity,
            priority: m.priority,
            bug_type: m.bug_type,
            environment: m.environment,
            discovered_date: m.discovered_date,
            assigned_date: m.assigned_date,
            resolution_date: m.resolution_date,
        }
    }
}
