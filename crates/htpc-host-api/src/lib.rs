//! Host adapter trait interface for htpc-manager
//!
//! This crate defines the interface between the power-management core and
//! platform-specific implementations. It contains no platform code itself.

mod mock;
mod traits;

pub use mock::*;
pub use traits::*;
