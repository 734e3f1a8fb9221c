//! Hiring pipeline core for the TalentFlow recruiting platform.
//!
//! The `pipeline` module owns the board state machine: applications grouped
//! by stage, the drag-session controller, and the transition executor that
//! keeps local state consistent with the remote source of truth.

pub mod config;
pub mod error;
pub mod pipeline;
pub mod telemetry;
