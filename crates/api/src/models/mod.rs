pub mod entry;
pub mod node_kind;

pub use entry::*;
pub use node_kind::*;
