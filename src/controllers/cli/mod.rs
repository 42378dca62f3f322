pub mod args;
pub mod snapshot;

pub use args::SnapshotArgs;
pub use snapshot::{SnapshotController, SnapshotError};
