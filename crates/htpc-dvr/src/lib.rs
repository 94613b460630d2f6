//! Tvheadend DVR client for htpc-manager
//!
//! Queries the local Tvheadend backend's `grid_upcoming` API for the next
//! scheduled recording. One blocking request per run, with an explicit
//! timeout so a wedged backend cannot hang the cycle.

mod client;

pub use client::*;
