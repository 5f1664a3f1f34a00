//! TestCase entity for SeaORM.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "test_cases")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub test_case_id: i32,
    pub test_suite_id: i32,
    pub name: String,
    pub description: Option<String>,
    pub preconditions: Option<String>,
    pub steps: Option<String>,
    pub expected_result: Option<String>,
    pub priority: String,
    pub created_date: Date,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::test_suite::Entity",
        from = "Column::TestSuiteId",
        to = "super::test_suite::Column::TestSuiteId",
        on_delete = "Cascade"
    )]
    TestSuite,
    #[sea_orm(has_many = "super::test_execution::Entity")]
    TestExecutions,
}

impl Related<super::test_suite::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TestSuite.def()
    }
}

impl Related<super::test_execution::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TestExecutions.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
