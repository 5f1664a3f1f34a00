//! Bug entity for SeaORM.
//!
//! A bug references its tester twice (discoverer and assignee), so only the
//! project relation gets a `Related` impl.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "bugs")]
pub struct Model {
    #[sea_orm(primary_key)]
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
    #[sea_orm(column_name = "type")]
    pub bug_type: String,
    pub environment: Option<String>,
    pub discovered_date: DateTimeUtc,
    pub assigned_date: Option<DateTimeUtc>,
    pub resolution_date: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::project::Entity",
        from = "Column::ProjectId",
        to = "super::project::Column::ProjectId",
        on_delete = "Cascade"
    )]
    Project,
    #[sea_orm(
        belongs_to = "super::sub_project::Entity",
        from = "Column::SubProjectId",
        to = "super::sub_project::Column::SubProjectId",
        on_delete = "SetNull"
    )]
    SubProject,
    #[sea_orm(
        belongs_to = "super::test_case::Entity",
        from = "Column::TestCaseId",
        to = "super::test_case::Column::TestCaseId",
        on_delete = "SetNull"
    )]
    TestCase,
    #[sea_orm(
        belongs_to = "super::tester::Entity",
        from = "Column::DiscoveredBy",
        to = "super::tester::Column::TesterId",
        on_delete = "Restrict"
    )]
    Discoverer,
    #[sea_orm(
        belongs_to = "super::tester::Entity",
        from = "Column::AssignedTo",
        to = "super::tester::Column::TesterId",
        on_delete = "SetNull"
    )]
    Assignee,
}

impl Related<super::project::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Project.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
