//! Input data structures: the order record and its normalized vocabularies.

pub mod order;
pub mod status;

pub use order::*;
pub use status::*;
