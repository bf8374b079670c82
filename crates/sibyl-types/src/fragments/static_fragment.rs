//! A minimal fragment that injects a *static* string into the prompt.
//!
//! Use this when you have pre-determined text (role description, safety
//! notice, system instruction …) that never changes between invocations.
//!
//! ```rust
//! use sibyl_types::fragments::StaticFragment;
//! use sibyl_core::generic::GenericRole;
//!
//! let sys = StaticFragment::new(
//!     "You are an invoice-extraction engine.",
//!     GenericRole::System,
//! );
//! ```
//!
//! # Why a dedicated type?
//!
//! 1. It keeps the [`IntoPrompt`] API symmetrical – every fragment, no
//!    matter how simple, implements the same trait.
//! 2. You can attach metadata (`role`) so the backend sees the correct turn
//!    type without manual wrapping.
//! 3. Unlike `&'static str`, this struct can carry a *borrowed* slice with
//!    lifetime `'a`, allowing the caller to reference larger inline strings
//!    without `String` allocation.
//!
//! The `From<&str>` impl defaults to `GenericRole::System` for convenience
//! since system text is the most common static fragment.

use sibyl_core::{
    generic::{GenericRole, GenericTurn},
    template::IntoPrompt,
};

/// A borrowed static string bundled with a conversation role.
pub struct StaticFragment<'a> {
    text: &'a str,
    role: GenericRole,
}

/// Shorthand so you can write `StaticFragment::from("…")` without specifying
/// the role each time. Defaults to **system**.
impl<'a> From<&'a str> for StaticFragment<'a> {
    fn from(value: &'a str) -> Self {
        Self {
            text: value,
            role: GenericRole::System,
        }
    }
}

impl<'a> StaticFragment<'a> {
    /// Create a new fragment with explicit role.
    pub fn new(text: &'a str, role: GenericRole) -> Self {
        Self { text, role }
    }
}

impl IntoPrompt for StaticFragment<'_> {
    type Message = GenericTurn;

    fn into_prompt(self) -> Vec<Self::Message> {
        vec![GenericTurn::new(self.text.to_string(), self.role)]
    }
}
