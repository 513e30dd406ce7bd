//! Luxe cart library.
//!
//! The stateful core of the Luxe storefront: a shopping cart mirrored to
//! key-value storage, plus the small pure helpers the storefront pages use
//! (product filtering, contact-form validation, promo codes).
//!
//! # Architecture
//!
//! - [`CartManager`] owns the cart for a session and is the only thing that
//!   mutates it. Rendering code borrows it; there is no global cart.
//! - [`CartStorage`], [`Notifier`] and [`Confirmation`] are the seams to the
//!   outside world. Tests plug in [`MemoryStorage`], [`RecordingNotifier`]
//!   and [`AlwaysConfirm`]/[`NeverConfirm`].
//! - Nothing here renders output; the `luxe` CLI does that.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod catalog;
pub mod config;
pub mod confirm;
pub mod contact;
pub mod manager;
pub mod notify;
pub mod pricing;
pub mod promo;
pub mod storage;

pub use cart::{Cart, CartDataError, LineItem};
pub use catalog::{Catalog, CatalogError, CategoryFilter, Product};
pub use config::{CartConfig, ConfigError};
pub use confirm::{AlwaysConfirm, Confirmation, NeverConfirm};
pub use contact::{ContactFieldError, ContactForm, ValidatedContact};
pub use manager::{CLEAR_CART_PROMPT, CartChange, CartManager, CheckoutOutcome};
pub use notify::{Notification, Notifier, RecordingNotifier, TracingNotifier};
pub use pricing::{CartSummary, PricingPolicy};
pub use promo::PromoCode;
pub use storage::{CartStorage, DEFAULT_CART_KEY, FileStorage, MemoryStorage, StorageError};
