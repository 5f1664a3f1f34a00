//! API E2E test suite.
//!
//! Drives the full `/api` surface against a real PostgreSQL database.
//! Requires `RUST_ENV` and `DATABASE_URL` (or `TRACKER_TEST_DATABASE_URL`).
//!
//! Run with: cargo test --test api_e2e -- --ignored

mod test_helpers;

mod test_bugs;
mod test_cascade;
mod test_reports;
mod test_seed;
mod test_validation;
