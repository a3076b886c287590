pub mod controller;

pub use controller::{RunState, RunSummary, SortController, State, Termination};
