//! Fluent builders for seeding scenarios.

mod scenario;

pub use scenario::{ScenarioBuilder, ScenarioResult};
