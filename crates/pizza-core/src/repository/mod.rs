//! Repository Layer
//!
//! Key-value slot abstraction, its backends, and the snapshot codec.

mod browser;
mod file;
mod memory;
mod snapshot;
mod traits;


pub use browser::BrowserStorage;
pub use file::FileStorage;
pub use memory::MemoryStorage;
pub use snapshot::{decode_snapshot, encode_snapshot, load_snapshot, save_snapshot};
pub use traits::KeyValueStore;
