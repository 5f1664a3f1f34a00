//! SeaORM entity definitions for PostgreSQL database.

pub mod bug;
pub mod project;
pub mod sub_project;
pub mod test_case;
pub mod test_execution;
pub mod test_suite;
pub mod tester;
