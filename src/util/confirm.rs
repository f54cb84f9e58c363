//! Yes/no confirmation before destructive operations.
//!
//! Resetting the board, importing over it, deleting an item, restoring a
//! backup and wiping local data all ask first. The question is delegated so
//! the browser can show `window.confirm` while tests answer with a closure.

#[cfg(test)]
#[path = "confirm_test.rs"]
mod confirm_test;

/// Asks the user a yes/no question.
pub trait Confirm {
    /// `true` when the user agreed to `message`.
    fn confirm(&self, message: &str) -> bool;
}

impl<F> Confirm for F
where
    F: Fn(&str) -> bool,
{
    fn confirm(&self, message: &str) -> bool {
        self(message)
    }
}

/// Answers every question with the same value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Always(pub bool);

impl Confirm for Always {
    fn confirm(&self, _message: &str) -> bool {
        self.0
    }
}
