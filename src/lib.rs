//! In-memory hospital triage queue.
//!
//! [`TriageQueue`] is the engine: a binary heap of [`Entry`] values ranked by
//! [`PriorityClass`] and arrival number. [`Session`] is the line-oriented
//! interpreter that drives it.

pub mod command;
pub mod config;
pub mod entry;
pub mod error;
pub mod heap;
pub mod priority;
pub mod queue;
pub mod session;

pub use command::Command;
pub use config::Config;
pub use entry::{Entry, TriageOrder};
pub use error::{CommandError, ConfigError, ParsePriorityError};
pub use heap::{Heap, HeapOrder};
pub use priority::PriorityClass;
pub use queue::TriageQueue;
pub use session::{Flow, Session};
