pub mod scanner;

pub use scanner::{list_work_items, ScanOptions, WorkItem};
