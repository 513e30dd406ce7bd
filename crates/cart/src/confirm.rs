//! Confirmation gate for destructive actions.

/// Asks the user to approve an action.
pub trait Confirmation {
    /// Returns true only if the user approved `prompt`.
    fn confirm(&mut self, prompt: &str) -> bool;
}

impl<F> Confirmation for F
where
    F: FnMut(&str) -> bool,
{
    fn confirm(&mut self, prompt: &str) -> bool {
        self(prompt)
    }
}

/// Approves everything (`--yes`).
#[derive(Debug, Default, Clone, Copy)]
pub struct AlwaysConfirm;

impl Confirmation for AlwaysConfirm {
    fn confirm(&mut self, _prompt: &str) -> bool {
        true
    }
}

/// Declines everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NeverConfirm;

impl Confirmation for NeverConfirm {
    fn confirm(&mut self, _prompt: &str) -> bool {
        false
    }
}
