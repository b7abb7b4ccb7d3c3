mod error;
mod loader;
mod snapshot;

pub use error::DatasetError;
pub use loader::load_snapshot;
pub use snapshot::DatasetSnapshot;
