//! Test utilities for HTTP-level and use case testing.
//!
//! This module provides:
//! - Test data factories for creating valid test fixtures
//! - In-memory implementations of the repository and notifier ports
//! - `TestAppStateBuilder` for assembling an `AppState` from those mocks

mod app_state_builder;
mod factories;
mod mocks;

pub use app_state_builder::*;
pub use factories::*;
pub use mocks::*;
