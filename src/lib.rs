//! In-memory university course registration: a bounded roster of students
//! and courses plus the ledger that keeps their registrations consistent.
//!
//! Nothing here is thread-safe. `Roster`, `EnrollmentLedger` and `Registrar`
//! mutate through `&mut self` with no internal locking, so sharing one between
//! threads needs external synchronization.

pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::console::IoConsole;
pub use config::RegistryConfig;
pub use crate::core::{
    ledger::EnrollmentLedger, menu::MenuSession, registrar::Registrar, roster::Roster,
};
pub use domain::model::{Course, CourseSummary, Limits, Student};
pub use domain::ports::Console;
pub use utils::error::{RegistryError, Result};
