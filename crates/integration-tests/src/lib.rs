//! Integration tests for the Luxe cart.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p luxe-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `persistence` - File-backed storage across sessions
//! - `cart_scenarios` - Cart behaviour end to end
//! - `storefront` - Configuration, catalog and contact form together
//!
//! Every test gets its own temporary data directory through [`TestStore`].

use std::path::Path;

use luxe_cart::{
    CartManager, CartStorage, DEFAULT_CART_KEY, FileStorage, PricingPolicy, RecordingNotifier,
};
use luxe_core::Price;
use tempfile::TempDir;

/// Cart manager used throughout the tests.
pub type Session = CartManager<FileStorage, RecordingNotifier>;

/// A throwaway data directory for file-backed carts.
pub struct TestStore {
    dir: TempDir,
}

impl TestStore {
    /// Create an empty data directory.
    ///
    /// # Panics
    ///
    /// Panics if the temporary directory cannot be created.
    #[must_use]
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("Failed to create temp dir"),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Storage rooted in this directory.
    #[must_use]
    pub fn storage(&self) -> FileStorage {
        FileStorage::new(self.dir.path())
    }

    /// Start a session on the default slot, as a fresh page load would.
    #[must_use]
    pub fn open(&self) -> Session {
        CartManager::restore(self.storage(), RecordingNotifier::new())
    }

    /// Start a session on `key` with custom pricing.
    #[must_use]
    pub fn open_with(&self, key: &str, pricing: PricingPolicy) -> Session {
        CartManager::restore_from(self.storage(), RecordingNotifier::new(), key, pricing)
    }

    /// Raw contents of the default slot.
    ///
    /// # Panics
    ///
    /// Panics if the slot exists but cannot be read.
    #[must_use]
    pub fn saved_cart(&self) -> Option<String> {
        self.storage()
            .read(DEFAULT_CART_KEY)
            .expect("Failed to read cart slot")
    }

    /// Overwrite the default slot with `value`.
    ///
    /// # Panics
    ///
    /// Panics if the slot cannot be written.
    pub fn seed(&self, value: &str) {
        self.storage()
            .write(DEFAULT_CART_KEY, value)
            .expect("Failed to seed cart slot");
    }
}

impl Default for TestStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse a price literal.
///
/// # Panics
///
/// Panics if `s` is not a valid price.
#[must_use]
pub fn price(s: &str) -> Price {
    s.parse().expect("Invalid price literal")
}
