pub mod mover;

pub use mover::{FileSystem, LocalFs, MoveRecord, Mover};
