//! # verity-store
//!
//! Durable verdict store for Verity.
//!
//! [`VerdictStore`] maps a page identity to the last verdict retrieved for
//! it. Persistence goes through the [`KvBackend`] capability:
//! - [`LibsqlBackend`]: a local libSQL file that survives across runs
//! - [`MemoryBackend`]: a process-local map
//!
//! Records are never evicted; they stay until explicitly forgotten.

mod backend;
mod error;
mod libsql_backend;
mod verdicts;

pub use backend::{KvBackend, MemoryBackend};
pub use error::StoreError;
pub use libsql_backend::LibsqlBackend;
pub use verdicts::VerdictStore;
