//! Background Tasks Module
//!
//! Contains background tasks that run periodically alongside the REPL.
//!
//! # Tasks
//! - TTL Sweep: Removes expired cache entries once per TTL

mod sweep;

pub use sweep::{spawn_sweep_task, MAX_SWEEP_PERIOD};
