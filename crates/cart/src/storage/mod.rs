//! # Storage Layer
//!
//! The cart is mirrored into a key-value store that behaves like a browser's
//! local storage: string keys, string values, each write replacing the whole
//! value. The [`CartStorage`] trait keeps the cart manager independent of
//! where that store lives.
//!
//! ## Implementations
//!
//! - [`FileStorage`]: one JSON file per key in a data directory
//!   - Writes go to a temporary sibling and are renamed into place, so a
//!     reader sees either the old value or the new one
//!
//! - [`MemoryStorage`]: in-memory map for tests and throwaway sessions
//!
//! ## Storage Format
//!
//! ```text
//! .luxe/
//! └── luxeCart.json   # [{"id":1700000000000,"name":"Ring","price":1000.0,"quantity":1}]
//! ```

use std::path::PathBuf;

use thiserror::Error;

pub mod fs;
pub mod memory;

pub use fs::FileStorage;
pub use memory::MemoryStorage;

/// Default storage slot holding the serialized cart.
pub const DEFAULT_CART_KEY: &str = "luxeCart";

/// Errors from a storage backend.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Filesystem operation failed.
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Key cannot be mapped to a storage slot.
    #[error("invalid storage key: {0:?}")]
    InvalidKey(String),
}

/// Key-value store shared with the rest of the page.
pub trait CartStorage {
    /// Read the value stored under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read.
    fn read(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Replace the value stored under `key`.
    ///
    /// Either the full value is stored or the previous value remains.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be written.
    fn write(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

impl<S: CartStorage + ?Sized> CartStorage for &mut S {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).read(key)
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).write(key, value)
    }
}
