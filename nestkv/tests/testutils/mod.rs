//! Test utilities for NestKV integration tests
//!
//! `TestFixture` wraps a fresh `TransactionEngine` and only uses the
//! public crate API.

pub mod test_fixture;
