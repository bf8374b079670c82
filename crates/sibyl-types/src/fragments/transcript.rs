//! Wraps the prior conversation so it can slot into a
//! [`PromptChain`](sibyl_prompt::chain::PromptChain) like any other
//! fragment.
//!
//! The transcript is passed through exactly as given: no reordering, no
//! deduplication, no truncation. Callers who accumulate very long
//! conversations pay the corresponding token cost; trimming is their call,
//! not this type's.
//!
//! ```rust
//! use sibyl_types::fragments::{StaticFragment, TranscriptFragment};
//! use sibyl_prompt::chain::PromptChain;
//! use sibyl_core::generic::GenericTurn;
//!
//! let history = vec![
//!     GenericTurn::user("My name is Alice."),
//!     GenericTurn::model("Nice to meet you, Alice."),
//! ];
//!
//! let turns = PromptChain::new()
//!     .with(StaticFragment::from("You are a helpful bot."))
//!     .with(TranscriptFragment::from(history))
//!     .with(GenericTurn::user("What's my name?"))
//!     .build();
//!
//! assert_eq!(turns.len(), 4);
//! assert_eq!(turns[2].text, "Nice to meet you, Alice.");
//! ```

use sibyl_core::{generic::GenericTurn, template::IntoPrompt};

/// Prior conversation turns, emitted in their original order.
pub struct TranscriptFragment(Vec<GenericTurn>);

impl From<Vec<GenericTurn>> for TranscriptFragment {
    fn from(turns: Vec<GenericTurn>) -> Self {
        Self(turns)
    }
}

impl IntoPrompt for TranscriptFragment {
    type Message = GenericTurn;

    fn into_prompt(self) -> Vec<Self::Message> {
        self.0
    }
}
