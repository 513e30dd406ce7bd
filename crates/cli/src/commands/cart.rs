//! Cart commands.
//!
//! # Usage
//!
//! ```bash
//! luxe cart add "Eternal Diamond Ring" 2499
//! luxe cart update 1718000000000 -1
//! luxe cart remove 1718000000000
//! luxe cart clear --yes
//! luxe cart show --promo LUXE10
//! luxe cart checkout
//! ```
//!
//! Every invocation restores the cart from storage, runs one operation and
//! lets the manager persist the result.

use std::io::{self, BufRead, Write};

use luxe_cart::{
    CartChange, CartConfig, CartManager, CartStorage, CheckoutOutcome, Confirmation, FileStorage,
    RecordingNotifier,
};
use luxe_core::{LineItemId, Price};

use super::CommandError;
use crate::render;

/// Cart manager backed by the on-disk store.
pub type Session = CartManager<FileStorage, RecordingNotifier>;

/// Restore the cart described by `config`.
#[must_use]
pub fn open(config: &CartConfig) -> Session {
    CartManager::restore_from(
        FileStorage::new(&config.data_dir),
        RecordingNotifier::new(),
        &config.storage_key,
        config.pricing,
    )
}

/// Asks a yes/no question on `output` and reads the answer from `input`.
///
/// Anything other than `y` or `yes` (any case) is a refusal, including a
/// failed read.
pub struct PromptConfirmation<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> PromptConfirmation<R, W> {
    #[must_use]
    pub const fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl PromptConfirmation<io::StdinLock<'static>, io::Stderr> {
    /// Prompt on stderr, answer on stdin.
    #[must_use]
    pub fn terminal() -> Self {
        Self::new(io::stdin().lock(), io::stderr())
    }
}

impl<R: BufRead, W: Write> Confirmation for PromptConfirmation<R, W> {
    fn confirm(&mut self, prompt: &str) -> bool {
        if write!(self.output, "{prompt} [y/N] ")
            .and_then(|()| self.output.flush())
            .is_err()
        {
            return false;
        }

        let mut answer = String::new();
        match self.input.read_line(&mut answer) {
            Ok(_) => matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes"),
            Err(e) => {
                tracing::warn!(error = %e, "Failed to read confirmation");
                false
            }
        }
    }
}

/// Add one unit of `name` at `price`.
///
/// # Errors
///
/// Returns an error if output cannot be written.
pub fn add<S: CartStorage>(
    session: &mut CartManager<S, RecordingNotifier>,
    out: &mut impl Write,
    name: &str,
    price: Price,
) -> Result<(), CommandError> {
    let change = session.add_item(name, price);
    finish(session, out, &change)
}

/// Change the quantity of line item `id` by `delta`.
///
/// # Errors
///
/// Returns [`CommandError::UnknownItem`] if no line item has that id.
pub fn update<S: CartStorage>(
    session: &mut CartManager<S, RecordingNotifier>,
    out: &mut impl Write,
    id: LineItemId,
    delta: i64,
) -> Result<(), CommandError> {
    let change = session.change_quantity(id, delta);
    if change == CartChange::Unchanged && session.find(id).is_none() {
        return Err(CommandError::UnknownItem(id));
    }
    finish(session, out, &change)
}

/// Remove line item `id`.
///
/// # Errors
///
/// Returns [`CommandError::UnknownItem`] if no line item has that id.
pub fn remove<S: CartStorage>(
    session: &mut CartManager<S, RecordingNotifier>,
    out: &mut impl Write,
    id: LineItemId,
) -> Result<(), CommandError> {
    let change = session.remove_item(id);
    if change == CartChange::Unchanged {
        return Err(CommandError::UnknownItem(id));
    }
    finish(session, out, &change)
}

/// Empty the cart once `confirmation` agrees.
///
/// # Errors
///
/// Returns an error if output cannot be written.
pub fn clear<S: CartStorage>(
    session: &mut CartManager<S, RecordingNotifier>,
    out: &mut impl Write,
    confirmation: &mut impl Confirmation,
) -> Result<(), CommandError> {
    let change = session.clear(confirmation);
    if change == CartChange::Declined {
        writeln!(out, "Cart left unchanged")?;
    }
    finish(session, out, &change)
}

/// Print the cart, optionally priced with a promo code.
///
/// # Errors
///
/// Returns an error if output cannot be written.
pub fn show<S: CartStorage>(
    session: &mut CartManager<S, RecordingNotifier>,
    out: &mut impl Write,
    promo: Option<&str>,
    json: bool,
) -> Result<(), CommandError> {
    if let Some(code) = promo {
        session.apply_promo(code);
    }

    if json {
        let view = serde_json::json!({
            "items": session.items(),
            "count": session.item_count(),
            "state": session.state(),
            "summary": session.summary(),
            "promo": session.promo().map(|code| code.code()),
        });
        writeln!(out, "{view:#}")?;
        return Ok(());
    }

    flush_notifications(session, out)?;
    render::cart(out, session.item_count(), session.items(), &session.summary())?;
    Ok(())
}

/// Print the badge count.
///
/// # Errors
///
/// Returns an error if output cannot be written.
pub fn count<S: CartStorage>(
    session: &CartManager<S, RecordingNotifier>,
    out: &mut impl Write,
) -> Result<(), CommandError> {
    writeln!(out, "{}", session.item_count())?;
    Ok(())
}

/// Run the demo checkout.
///
/// # Errors
///
/// Returns an error if output cannot be written.
pub fn checkout<S: CartStorage>(
    session: &mut CartManager<S, RecordingNotifier>,
    out: &mut impl Write,
    promo: Option<&str>,
) -> Result<(), CommandError> {
    if let Some(code) = promo {
        session.apply_promo(code);
    }

    let outcome = session.checkout();
    flush_notifications(session, out)?;

    if let CheckoutOutcome::Demo(summary) = outcome {
        render::summary(out, &summary)?;
        writeln!(out, "Amount due: {}", summary.amount_due())?;
        writeln!(
            out,
            "This is a demo. In a real application, you would be redirected to a secure checkout page."
        )?;
    }
    Ok(())
}

/// Show pending toasts and, if the cart changed, the updated view.
fn finish<S: CartStorage>(
    session: &mut CartManager<S, RecordingNotifier>,
    out: &mut impl Write,
    change: &CartChange,
) -> Result<(), CommandError> {
    flush_notifications(session, out)?;
    if change.requires_render() {
        render::cart(out, session.item_count(), session.items(), &session.summary())?;
    }
    Ok(())
}

fn flush_notifications<S: CartStorage>(
    session: &mut CartManager<S, RecordingNotifier>,
    out: &mut impl Write,
) -> Result<(), CommandError> {
    let pending = session.notifier_mut().drain();
    render::notifications(out, &pending)?;
    Ok(())
}
