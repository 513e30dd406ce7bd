//! Subcommand implementations.
//!
//! Each command writes its visible output to the `io::Write` it is handed and
//! reports failures as a [`CommandError`].

pub mod cart;
pub mod contact;
pub mod products;

use luxe_cart::{CatalogError, ContactFieldError};
use luxe_core::LineItemId;
use thiserror::Error;

/// Errors that can occur while running a command.
#[derive(Debug, Error)]
pub enum CommandError {
    /// Writing output failed.
    #[error("Output error: {0}")]
    Io(#[from] std::io::Error),

    /// No line item has the given id.
    #[error("No cart item with id {0}")]
    UnknownItem(LineItemId),

    /// The catalog could not be loaded.
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// The contact form failed validation.
    #[error("Contact form has {} invalid field(s)", .0.len())]
    InvalidContact(Vec<ContactFieldError>),
}
