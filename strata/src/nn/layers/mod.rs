mod concat;

pub use concat::{ConcatConfig, ConcatLayer};
