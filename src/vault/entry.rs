//! Entry types stored inside the decrypted payload.
//!
//! The payload is a single `VaultData` collection.  Each `Entry` has a
//! stable `id`, a `title`, a `username`, and an open-ended set of extra
//! named fields (one of which is conventionally `password`).  The extra
//! fields are flattened in JSON, so an entry serializes as one flat
//! object: `{"id": ..., "title": ..., "username": ..., "password": ...}`.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A single credential entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Entry {
    /// Stable identifier, unique within a vault (e.g. "gmail.com").
    pub id: String,

    /// Human-readable title.
    pub title: String,

    /// The account name for this entry.
    pub username: String,

    /// Additional named fields, flattened into the entry object.
    /// No schema restricts the names.
    #[serde(flatten)]
    pub fields: BTreeMap<String, String>,
}

impl Entry {
    /// Look up a field by name.
    ///
    /// The built-in fields resolve like any other, so `field("username")`
    /// and `field("password")` go through the same accessor.
    pub fn field(&self, name: &str) -> Option<&str> {
        match name {
            "id" => Some(&self.id),
            "title" => Some(&self.title),
            "username" => Some(&self.username),
            _ => self.fields.get(name).map(String::as_str),
        }
    }

    /// The non-secret preview of this entry.
    pub fn preview(&self) -> EntryPreview {
        EntryPreview {
            id: self.id.clone(),
            title: self.title.clone(),
            username: self.username.clone(),
        }
    }
}

/// What a bulk listing exposes: identity fields only, never secrets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntryPreview {
    pub id: String,
    pub title: String,
    pub username: String,
}

/// The decrypted entry collection — the entire plaintext of a vault.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VaultData {
    pub entries: Vec<Entry>,
}

impl VaultData {
    /// An empty collection, as sealed by vault initialization.
    pub fn empty() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Find an entry by exact `id` match.
    pub fn find(&self, id: &str) -> Option<&Entry> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// Case-insensitive substring search against `id` and `title`.
    ///
    /// An empty query matches every entry.  Returns previews only.
    pub fn search(&self, query: &str) -> Vec<EntryPreview> {
        let needle = query.to_lowercase();
        self.entries
            .iter()
            .filter(|e| {
                e.id.to_lowercase().contains(&needle) || e.title.to_lowercase().contains(&needle)
            })
            .map(Entry::preview)
            .collect()
    }
}
