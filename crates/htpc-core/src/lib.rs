//! Power management core for htpc-manager
//!
//! Contains the shutdown decision logic and the per-run orchestration.
//! All host and DVR access goes through traits so the decision path is
//! testable without touching the machine.

mod decision;
mod manager;
mod schedule;
mod state;

pub use decision::*;
pub use manager::*;
pub use schedule::*;
pub use state::*;
