//! Adapters layer: Concrete implementations of ports.
//!
//! - `feedback_file`: newline-delimited JSON feedback log on the local
//!   filesystem

pub mod feedback_file;

pub use feedback_file::FileFeedbackLog;
