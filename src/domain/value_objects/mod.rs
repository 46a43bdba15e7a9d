//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod file_mode;
mod hash;
mod path;

pub use file_mode::{FileMode, ParseFileModeError};
pub use hash::ContentHash;
pub use path::{
    join_destination, normalize_destination, resolve_destination, validate_destination,
    DestinationError, RESERVED_DESTINATIONS,
};
