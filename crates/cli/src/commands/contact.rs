//! Contact form submission.
//!
//! Submissions are validated and logged; nothing is sent.

use std::io::Write;

use luxe_cart::ContactForm;

use super::CommandError;

/// Shown once a submission passes validation.
pub const SUCCESS_MESSAGE: &str =
    "Thank you for your message! We'll get back to you within 24 hours.";

/// Validate and log a contact form.
///
/// Field errors are written to `out` before the error is returned.
///
/// # Errors
///
/// Returns [`CommandError::InvalidContact`] listing every failing field.
pub fn submit(form: &ContactForm, out: &mut impl Write) -> Result<(), CommandError> {
    match form.validate() {
        Ok(contact) => {
            tracing::info!(
                name = %contact.name,
                email = %contact.email,
                subject = %contact.subject,
                "Contact form submitted"
            );
            writeln!(out, "✓ {SUCCESS_MESSAGE}")?;
            Ok(())
        }
        Err(errors) => {
            for error in &errors {
                writeln!(out, "⚠ {}: {error}", error.field())?;
            }
            Err(CommandError::InvalidContact(errors))
        }
    }
}
