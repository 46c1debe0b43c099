//! # verity-core
//!
//! Core types shared across all Verity crates:
//! - [`PageIdentity`], the canonical URL a verdict is keyed by
//! - [`Assessment`] and the per-activation [`CheckState`] machine
//! - The verdict data model ([`Citation`], [`Claim`], [`VerdictRecord`])
//! - The presentation mapping consumed by display renderers
//! - Cross-cutting error types

pub mod entities;
pub mod enums;
pub mod errors;
pub mod identity;
pub mod presentation;

pub use entities::{Citation, Claim, VerdictRecord};
pub use enums::{Assessment, CheckState};
pub use errors::CoreError;
pub use identity::PageIdentity;
pub use presentation::{RenderableClaim, present, present_claim};
