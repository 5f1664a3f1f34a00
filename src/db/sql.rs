//! SQL fragments generated from the status, severity and priority enums so the
//! report queries and the Rust-side classification cannot drift apart.
//!
//! Only enum constants are inlined here, never request input.

use crate::models::{BugPriority, BugStatus, Severity, StatusCategory};

/// `'A', 'B', 'C'` for use inside `IN (...)`.
pub fn sql_in_list<'a>(values: impl IntoIterator<Item = &'a str>) -> String {
    values
        .into_iter()
        .map(|v| format!("'{}'", v.replace('\'', "''")))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Quoted list of the statuses in `category`.
pub fn status_list(category: StatusCategory) -> String {
    sql_in_list(BugStatus::in_category(category).iter().map(|s| s.as_str()))
}

/// `CASE <column> WHEN 'A' THEN 1 ... END` ranking expression.
pub fn sql_rank_case<'a>(column: &str, values: impl IntoIterator<Item = (&'a str, i32)>) -> String {
    let arms: String = values
        .into_iter()
        .map(|(v, rank)| format!(" WHEN '{}' THEN {}", v.replace('\'', "''"), rank))
        .collect();
    format!("CASE {}{} END", column, arms)
}

pub fn severity_rank(column: &str) -> String {
    sql_rank_case(column, Severity::ALL.iter().map(|s| (s.as_str(), s.rank())))
}

pub fn priority_rank(column: &str) -> String {
    sql_rank_case(column, BugPriority::ALL.iter().map(|p| (p.as_str(), p.rank())))
}
