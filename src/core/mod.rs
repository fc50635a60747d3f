pub mod ledger;
pub mod menu;
pub mod registrar;
pub mod roster;

pub use crate::domain::model::{Course, CourseSummary, Limits, Student};
pub use crate::domain::ports::Console;
pub use crate::utils::error::Result;
