//! Luxe Core - Shared types library.
//!
//! This crate provides common types used across all Luxe components:
//! - `cart` - Cart manager, storage backends, catalog and contact validation
//! - `cli` - The `luxe` command-line front end
//!
//! # Architecture
//!
//! The core crate contains only types and traits - no I/O, no storage access,
//! no terminal handling. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, prices, emails, phones, and statuses

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
