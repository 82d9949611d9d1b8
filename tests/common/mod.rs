//! Common test utilities for integration tests.
//!
//! Provides an in-memory version control backend and sample data so the
//! application can be driven without a Team Foundation server.
//!
//! Note: Each integration test file compiles as a separate crate,
//! so not all helpers are used in every test file. We suppress
//! dead_code warnings at the module level.

#![allow(dead_code)]
#![allow(unused_imports)]

pub mod fake_backend;

pub use fake_backend::{FakeVersionControl, sample_changesets};
