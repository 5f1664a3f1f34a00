//! Demo data for development databases.
//!
//! Everything goes through the regular repository methods so the seeded rows
//! obey the same validation and timestamp rules as API writes. The data set is
//! fixed: rerunning against a database without projects yields the same rows,
//! reusing demo testers left behind by earlier runs.

use chrono::{Duration, NaiveDate, Utc};
use tracing::info;

use crate::error::AppResult;
use crate::models::{
    BugPriority, BugStatus, BugType, ExecutionStatus, NewBug, NewExecution, NewProject,
    NewSubProject, NewTestCase, NewTestSuite, NewTester, Severity, TestCasePriority,
};

use super::DbPool;

/// (name, email, role, date joined)
const TESTERS: [(&str, &str, &str, (i32, u32, u32)); 3] = [
    ("Alice Johnson", "alice.johnson@test.com", "Senior QA Engineer", (2024, 9, 1)),
    ("Bob Smith", "bob.smith@test.com", "QA Engineer", (2024, 9, 15)),
    ("Carol White", "carol.white@test.com", "Test Lead", (2024, 8, 20)),
];

/// (name, description, start, end)
const PROJECTS: [(&str, &str, (i32, u32, u32), (i32, u32, u32)); 3] = [
    ("E-Commerce Platform", "Online shopping platform", (2024, 9, 1), (2025, 3, 1)),
    ("Mobile Banking App", "Banking application", (2024, 8, 15), (2025, 2, 15)),
    ("CRM System", "Customer management", (2024, 9, 20), (2025, 4, 20)),
];

/// (project index, name, description)
const SUB_PROJECTS: [(usize, &str, &str); 7] = [
    (0, "Payment Module", "Payments"),
    (0, "Shopping Cart", "Cart"),
    (0, "Authentication", "Login"),
    (1, "Transactions", "Transfers"),
    (1, "Account Mgmt", "Accounts"),
    (2, "Contacts", "Contact DB"),
    (2, "Sales", "Pipeline"),
];

/// (project index, name, description)
const TEST_SUITES: [(usize, &str, &str); 6] = [
    (0, "Payment Tests", "Payments"),
    (0, "Cart Tests", "Cart"),
    (0, "Auth Tests", "Auth"),
    (1, "Transaction Tests", "Transfers"),
    (1, "Security Tests", "Security"),
    (2, "CRM Tests", "CRM"),
];

/// (suite index, name, priority)
const TEST_CASES: [(usize, &str, TestCasePriority); 23] = [
    (0, "Credit Card Payment", TestCasePriority::High),
    (0, "PayPal Payment", TestCasePriority::High),
    (0, "Invalid Card", TestCasePriority::High),
    (0, "Refund", TestCasePriority::Medium),
    (1, "Add to Cart", TestCasePriority::High),
    (1, "Remove Item", TestCasePriority::Medium),
    (1, "Update Qty", TestCasePriority::Medium),
    (1, "Discount", TestCasePriority::Medium),
    (2, "Registration", TestCasePriority::High),
    (2, "Login", TestCasePriority::High),
    (2, "Password Reset", TestCasePriority::High),
    (2, "Logout", TestCasePriority::Medium),
    (3, "Transfer", TestCasePriority::High),
    (3, "Bill Pay", TestCasePriority::High),
    (3, "Schedule", TestCasePriority::Medium),
    (4, "2FA", TestCasePriority::High),
    (4, "Timeout", TestCasePriority::High),
    (4, "Encryption", TestCasePriority::High),
    (5, "Add Contact", TestCasePriority::High),
    (5, "Update", TestCasePriority::Medium),
    (5, "Delete", TestCasePriority::Low),
    (5, "Search", TestCasePriority::Medium),
    (5, "Export", TestCasePriority::Low),
];

const EXECUTION_COUNT: usize = 40;

const EXECUTION_OUTCOMES: [ExecutionStatus; 5] = [
    ExecutionStatus::Pass,
    ExecutionStatus::Fail,
    ExecutionStatus::Pass,
    ExecutionStatus::Pass,
    ExecutionStatus::Blocked,
];

/// (sub-project index, name, severity, priority, type, status)
const BUGS: [(usize, &str, Severity, BugPriority, BugType, BugStatus); 25] = [
    (0, "Payment fails", Severity::Critical, BugPriority::P1, BugType::Functional, BugStatus::Open),
    (1, "Cart wrong", Severity::High, BugPriority::P1, BugType::Functional, BugStatus::Fixed),
    (2, "Login broken", Severity::Medium, BugPriority::P2, BugType::UiUx, BugStatus::Assigned),
    (2, "Reset fails", Severity::High, BugPriority::P1, BugType::Functional, BugStatus::Reopened),
    (1, "Cart disappears", Severity::High, BugPriority::P2, BugType::Functional, BugStatus::Open),
    (1, "Discount fails", Severity::Medium, BugPriority::P2, BugType::Functional, BugStatus::New),
    (4, "Timeout short", Severity::Low, BugPriority::P3, BugType::Performance, BugStatus::Deferred),
    (3, "No confirm", Severity::Medium, BugPriority::P2, BugType::UiUx, BugStatus::Fixed),
    (3, "Bill fails", Severity::Critical, BugPriority::P1, BugType::Functional, BugStatus::Open),
    (4, "2FA broken", Severity::Critical, BugPriority::P1, BugType::Security, BugStatus::Retest),
    (4, "Weak crypto", Severity::Critical, BugPriority::P1, BugType::Security, BugStatus::Fixed),
    (5, "No search", Severity::High, BugPriority::P2, BugType::Functional, BugStatus::Assigned),
    (6, "Export crash", Severity::High, BugPriority::P2, BugType::Performance, BugStatus::Open),
    (5, "No confirm on delete", Severity::Low, BugPriority::P3, BugType::UiUx, BugStatus::New),
    (0, "PayPal timeout", Severity::High, BugPriority::P1, BugType::Integration, BugStatus::Open),
    (0, "Slow refund", Severity::Medium, BugPriority::P3, BugType::Performance, BugStatus::New),
    (1, "Glitchy", Severity::Low, BugPriority::P4, BugType::UiUx, BugStatus::Closed),
    (2, "Weak validation", Severity::Medium, BugPriority::P2, BugType::Security, BugStatus::Verified),
    (4, "Cache issue", Severity::Medium, BugPriority::P2, BugType::Security, BugStatus::Fixed),
    (6, "Page broken", Severity::Medium, BugPriority::P3, BugType::Functional, BugStatus::Assigned),
    (6, "UI confusing", Severity::Low, BugPriority::P4, BugType::UiUx, BugStatus::New),
    (5, "Overwrites", Severity::High, BugPriority::P2, BugType::Data, BugStatus::Open),
    (3, "Crashes", Severity::Critical, BugPriority::P1, BugType::Functional, BugStatus::Reopened),
    (5, "Email slow", Severity::Low, BugPriority::P3, BugType::Performance, BugStatus::Closed),
    (1, "Qty wrong", Severity::Medium, BugPriority::P3, BugType::Functional, BugStatus::New),
];

fn date((y, m, d): (i32, u32, u32)) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(y, m, d)
}

/// Index of the first test case belonging to a suite of `project`.
fn first_case_of_project(project: usize, offset: usize) -> Option<usize> {
    let cases: Vec<usize> = TEST_CASES
        .iter()
        .enumerate()
        .filter(|(_, (suite, _, _))| TEST_SUITES[*suite].0 == project)
        .map(|(i, _)| i)
        .collect();
    if cases.is_empty() {
        None
    } else {
        Some(cases[offset % cases.len()])
    }
}

/// Insert the demo data set unless projects already exist.
///
/// Returns `true` when data was inserted.
pub async fn seed_demo_data(pool: &DbPool) -> AppResult<bool> {
    if pool.has_projects().await? {
        info!("Database already contains projects, skipping demo seed");
        return Ok(false);
    }

    // Testers outlive project deletion, so a reseed reuses them by email.
    let mut tester_ids = Vec::with_capacity(TESTERS.len());
    for (name, email, role, joined) in TESTERS {
        let tester = match pool.find_tester_by_email(email).await? {
            Some(existing) => existing,
            None => {
                pool.create_tester(NewTester {
                    name: name.to_string(),
                    email: email.to_string(),
                    role: Some(role.to_string()),
                    date_joined: date(joined),
                })
                .await?
            }
        };
        tester_ids.push(tester.tester_id);
    }

    let mut project_ids = Vec::with_capacity(PROJECTS.len());
    for (name, description, start, end) in PROJECTS {
        let project = pool
            .create_project(NewProject {
                name: name.to_string(),
                description: Some(description.to_string()),
                start_date: date(start),
                end_date: date(end),
                status: "Active".to_string(),
            })
            .await?;
        project_ids.push(project.project_id);
    }

    let mut sub_project_ids = Vec::with_capacity(SUB_PROJECTS.len());
    for (project, name, description) in SUB_PROJECTS {
        let sub_project = pool
            .create_sub_project(NewSubProject {
                project_id: project_ids[project],
                name: name.to_string(),
                description: Some(description.to_string()),
            })
            .await?;
        sub_project_ids.push(sub_project.sub_project_id);
    }

    let mut suite_ids = Vec::with_capacity(TEST_SUITES.len());
    for (project, name, description) in TEST_SUITES {
        let suite = pool
            .create_test_suite(NewTestSuite {
                project_id: project_ids[project],
                name: name.to_string(),
                description: Some(description.to_string()),
            })
            .await?;
        suite_ids.push(suite.test_suite_id);
    }

    let mut case_ids = Vec::with_capacity(TEST_CASES.len());
    for (suite, name, priority) in TEST_CASES {
        let case = pool
            .create_test_case(NewTestCase {
                test_suite_id: suite_ids[suite],
                name: name.to_string(),
                description: None,
                preconditions: None,
                steps: Some("Steps".to_string()),
                expected_result: Some("Result".to_string()),
                priority,
            })
            .await?;
        case_ids.push(case.test_case_id);
    }

    let now = Utc::now();
    for i in 0..EXECUTION_COUNT {
        let days_ago = ((i * 11) % 30) as i64;
        pool.create_execution(NewExecution {
            test_case_id: case_ids[i % case_ids.len()],
            tester_id: tester_ids[i % tester_ids.len()],
            status: EXECUTION_OUTCOMES[i % EXECUTION_OUTCOMES.len()],
            notes: Some("Note".to_string()),
            execution_date: Some(now - Duration::days(days_ago) - Duration::hours(i as i64 % 9)),
        })
        .await?;
    }

    for (i, (sub_project, name, severity, priority, bug_type, status)) in
        BUGS.into_iter().enumerate()
    {
        let project = SUB_PROJECTS[sub_project].0;
        let assigned_to = (i % 4 != 3).then(|| tester_ids[i % tester_ids.len()]);

        pool.create_bug(NewBug {
            project_id: project_ids[project],
            sub_project_id: Some(sub_project_ids[sub_project]),
            test_case_id: first_case_of_project(project, i).map(|c| case_ids[c]),
            discovered_by: tester_ids[(i + 1) % tester_ids.len()],
            assigned_to,
            name: name.to_string(),
            description: Some("Description".to_string()),
            steps_to_reproduce: Some("Steps".to_string()),
            status,
            severity,
            priority,
            bug_type,
            environment: Some("Chrome".to_string()),
        })
        .await?;
    }

    info!(
        testers = TESTERS.len(),
        projects = PROJECTS.len(),
        sub_projects = SUB_PROJECTS.len(),
        test_suites = TEST_SUITES.len(),
        test_cases = TEST_CASES.len(),
        executions = EXECUTION_COUNT,
        bugs = BUGS.len(),
        "Demo data seeded"
    );
    Ok(true)
}
