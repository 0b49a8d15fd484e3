//! Application initialization.
//!
//! The one shared resource this crate sets up is the logger; everything else
//! (the status-code table, the rule set) is owned by its module.

mod logger;

pub use logger::init_logger_with;
