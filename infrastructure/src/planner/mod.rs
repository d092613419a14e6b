//! Opportunity planner adapters.

mod json_file;

pub use json_file::JsonFilePlanner;
