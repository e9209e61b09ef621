//! Vault module — the encrypted record and the engine over it.
//!
//! This module provides:
//! - `Entry`, `EntryPreview`, and `VaultData` payload types (`entry`)
//! - The persisted JSON record format (`record`)
//! - `VaultStore` for reading and writing the record file (`store`)
//! - `VaultEngine`, the high-level init/unlock/read orchestrator (`engine`)

pub mod engine;
pub mod entry;
pub mod record;
pub mod store;

// Re-export the most commonly used items.
pub use engine::{VaultEngine, VaultStatus};
pub use entry::{Entry, EntryPreview, VaultData};
pub use record::{SealedData, VaultRecord};
pub use store::VaultStore;
