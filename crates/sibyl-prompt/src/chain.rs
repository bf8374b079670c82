//! Simple **builder** that concatenates multiple values implementing
//! [`IntoPrompt`](sibyl_core::template::IntoPrompt).
//!
//! # Motivation
//!
//! In real-world prompts you often want to **compose** smaller, reusable
//! *fragments*—for example:
//!
//! * a static role description,
//! * the current date,
//! * the prior conversation transcript,
//! * a final user instruction.
//!
//! `PromptChain` lets you line up these fragments in a clear, linear fashion
//! **without** mutable vectors or verbose `extend()` calls. The resulting
//! turn sequence preserves exactly the order in which fragments were added.
//!
//! # Usage
//!
//! ```rust
//! use sibyl_prompt::chain::PromptChain;
//! use sibyl_core::generic::{GenericRole, GenericTurn};
//!
//! let turns: Vec<GenericTurn> = PromptChain::new()
//!     .with(GenericTurn::system("You are a helpful bot."))
//!     .with(GenericTurn::user("What's the weather like?"))
//!     .build();
//!
//! assert_eq!(turns.len(), 2);
//! assert_eq!(turns[1].role, GenericRole::User);
//! ```
//!
//! The generic parameter `Message` allows back-ends to plug in their own,
//! richer turn types while reusing the same chaining logic.
use sibyl_core::template::IntoPrompt;

/// Lightweight container that accumulates turns produced by [`IntoPrompt`]
/// implementors.
///
/// The single `Vec` field is kept private so the only way to obtain the
/// result is through [`Self::build`], ensuring the builder API remains
/// fluent.
pub struct PromptChain<Message>(Vec<Message>);

impl<Message> Default for PromptChain<Message> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Message> PromptChain<Message> {
    /// Create an empty chain.
    pub fn new() -> Self {
        Self(vec![])
    }

    /// Append the turns produced by `with` to the chain.
    ///
    /// The method takes `self` **by value** to encourage concise
    /// call-chaining.
    pub fn with(mut self, with: impl IntoPrompt<Message = Message>) -> Self {
        self.0.append(&mut with.into_prompt());
        self
    }

    /// Append every fragment of an iterator in order. Handy for prior
    /// conversation turns:
    ///
    /// ```rust
    /// use sibyl_prompt::chain::PromptChain;
    /// use sibyl_core::generic::GenericTurn;
    ///
    /// let history = vec![GenericTurn::user("Hi"), GenericTurn::model("Hello!")];
    /// let turns = PromptChain::new()
    ///     .with_each(history)
    ///     .with(GenericTurn::user("How are you?"))
    ///     .build();
    ///
    /// assert_eq!(turns.len(), 3);
    /// ```
    pub fn with_each<I>(mut self, fragments: I) -> Self
    where
        I: IntoIterator,
        I::Item: IntoPrompt<Message = Message>,
    {
        for fragment in fragments {
            self.0.append(&mut fragment.into_prompt());
        }
        self
    }

    /// Consume the builder and return the accumulated turns.
    pub fn build(self) -> Vec<Message> {
        self.0
    }
}
