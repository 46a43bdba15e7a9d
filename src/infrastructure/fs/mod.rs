//! File System Implementations
//!
//! Concrete implementations of the FileSystem port, plus the output lock.

mod local;
mod lock;

pub use local::LocalFs;
pub use lock::{OutputLock, LOCK_FILE_NAME};
