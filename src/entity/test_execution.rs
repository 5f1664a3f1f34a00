//! TestExecution entity for SeaORM.
//!
//! Executions are append-only: rows are inserted and listed, never updated.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "test_executions")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub execution_id: i32,
    pub test_case_id: i32,
    pub tester_id: i32,
    pub execution_date: DateTimeUtc,
    pub status: String,
    pub notes: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::test_case::Entity",
        from = "Column::TestCaseId",
        to = "super::test_case::Column::TestCaseId",
        on_delete = "Cascade"
    )]
    TestCase,
    #[sea_orm(
        belongs_to = "super::tester::Entity",
        from = "Column::TesterId",
        to = "super::tester::Column::TesterId",
        on_delete = "Cascade"
    )]
    Tester,
}

impl Related<super::test_case::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TestCase.def()
    }
}

impl Related<super::tester::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Tester.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
