//! A small **prompt fragment** that injects the current date into the
//! system instruction.
//!
//! Extraction tasks frequently involve relative dates—"due next Friday",
//! "delivered yesterday". Hard-coding the date at the call-site is brittle,
//! so this helper does the job for you.
//!
//! # Example
//!
//! ```rust
//! use sibyl_types::fragments::CurrentDateFragment;
//! use sibyl_prompt::chain::PromptChain;
//! use sibyl_core::generic::GenericRole;
//!
//! let turns = PromptChain::new()
//!     .with(CurrentDateFragment::new())
//!     .build();
//!
//! assert_eq!(turns[0].role, GenericRole::System);
//! assert!(turns[0].text.contains("Today's date (UTC)"));
//! ```
//!
//! The fragment is fully **stateless**—you can create and reuse it as often
//! as needed without side effects.

use chrono::Datelike as _;
use sibyl_core::{
    generic::{GenericRole, GenericTurn},
    template::IntoPrompt,
};
use sibyl_prompt::builder::PromptBuilder;

/// Injects the current UTC date and weekday as a system turn.
#[derive(Default)]
pub struct CurrentDateFragment;

impl CurrentDateFragment {
    /// Convenience constructor (equivalent to `Self::default()`).
    pub fn new() -> Self {
        Self
    }
}

impl IntoPrompt for CurrentDateFragment {
    type Message = GenericTurn;

    fn into_prompt(self) -> Vec<Self::Message> {
        let today = chrono::Utc::now();

        let builder = PromptBuilder::new()
            .add_key_value("Today's date (UTC)", today.format("%Y-%m-%d"))
            .add_key_value("Weekday", today.weekday())
            .add_blank_line()
            .add_line(
                "Resolve relative date expressions such as 'tomorrow' or \
                 'last Friday' against this date.",
            );

        vec![GenericTurn::new(builder.finalize(), GenericRole::System)]
    }
}
