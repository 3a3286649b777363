pub mod catalog;
pub mod error;
pub mod logging;

pub use catalog::{KindCatalog, KindFilter};
pub use error::{CoreError, Result};
