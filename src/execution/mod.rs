//! Execution orchestration
//!
//! Harness generation, the poll loop and verdict interpretation. The
//! request flow tying them together lives in
//! [`ExecutionService`](crate::services::ExecutionService).

pub mod harness;
pub mod interpreter;
pub mod poller;

pub use interpreter::{interpret, ExecutionFailure, ExecutionReport, Verdict};
pub use poller::{cancel_pair, poll_until_terminal, CancelHandle, CancelSignal, PollPolicy};
