//! Run orchestration and outcome types.

pub mod orchestrator;
pub mod result;

pub use orchestrator::{Orchestrator, HEADER_TITLE};
pub use result::{CheckReport, RunResult, SuccessPolicy};
