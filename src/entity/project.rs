//! Project entity for SeaORM.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "projects")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub project_id: i32,
    pub name: String,
    pub description: Option<String>,
    pub start_date: Option<Date>,
    pub end_date: Option<Date>,
    pub status: String,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::sub_project::Entity")]
    SubProjects,
    #[sea_orm(has_many = "super::test_suite::Entity")]
    TestSuites,
    #[sea_orm(has_many = "super::bug::Entity")]
    Bugs,
}

impl Related<super::sub_project::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SubProjects.def()
    }
}

impl Related<super::test_suite::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TestSuites.def()
    }
}

impl Related<super::bug::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Bugs.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
