//! Provider-agnostic foundation of the **sibyl** workspace.
//!
//! This crate carries everything a backend adapter needs to plug in:
//!
//! * [`generic`] – conversation turns, roles and the normalized reply shape,
//! * [`model`] – logical model identifiers,
//! * [`provider`] – the two backend traits (untyped and typed execution),
//! * [`template`] – prompt/response typing glue,
//! * [`schema_util`] – response-schema derivation via `schemars`,
//! * [`error`] – the unified error enum,
//! * [`SibylClient`] – a thin generic client over a single backend.
//!
//! Nothing in here performs I/O; the network lives in the backend crates.

mod client;
pub mod error;
pub mod generic;
pub mod model;
pub mod provider;
pub mod schema_util;
pub mod template;

pub use client::SibylClient;
pub use error::{Result, SibylError};
