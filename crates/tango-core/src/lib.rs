pub mod density;
pub mod duplicates;
pub mod error;
pub mod preprocess;
pub mod reindex;
pub mod renumber;
pub mod types;

pub use error::CoreError;
pub use types::{WordId, WordRecord};
