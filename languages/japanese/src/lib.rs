pub mod loader;

pub use loader::{BatchError, BatchLoader};
