//! Deterministic (rule-based) schedulers.
//!
//! Each scheduler decides an ordering or selection policy and defers the
//! actual clock simulation to [`crate::sim::build_schedule`]. Round Robin
//! is the exception: preemption needs its own time-sliced builder.
//!
//! - [`fcfs`]: arrival order, stable on ties
//! - [`sjf`]: shortest arrived job at each decision point
//! - [`priority`]: most urgent arrived job at each decision point
//! - [`round_robin`]: fixed-quantum preemptive time slicing
//!
//! # Reference
//! Silberschatz, Galvin & Gagne, *Operating System Concepts*, Ch. 5:
//! CPU Scheduling.

mod fcfs;
mod priority;
mod round_robin;
mod sjf;

pub use fcfs::fcfs;
pub use priority::priority;
pub use round_robin::{round_robin, RrConfig};
pub use sjf::sjf;
