//! Tester entity for SeaORM.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "testers")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub tester_id: i32,
    pub name: String,
    #[sea_orm(unique)]
    pub email: String,
    pub role: Option<String>,
    pub date_joined: Option<Date>,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::test_execution::Entity")]
    TestExecutions,
}

impl Related<super::test_execution::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TestExecutions.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
