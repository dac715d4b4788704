//! In-memory display-object URLs for the photo preview.
//!
//! A captured photo is previewed through a short-lived `blob:` URL that
//! resolves to process-local bytes without touching the disk. Each minted
//! URL stays alive until it is revoked; the panel revokes the previous one
//! before minting the next so repeated captures do not accumulate dead
//! blobs.

use std::collections::HashMap;

use uuid::Uuid;

/// The bytes behind one display-object URL.
pub struct Blob {
    pub bytes: Vec<u8>,
    pub mime_type: String,
}

#[derive(Default)]
pub struct ObjectUrlStore {
    entries: HashMap<String, Blob>,
}

impl ObjectUrlStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers the bytes under a fresh `blob:` URL and returns it.
    pub fn create(&mut self, bytes: Vec<u8>, mime_type: &str) -> String {
        let url = format!("blob:{}", Uuid::new_v4());
        self.entries.insert(
            url.clone(),
            Blob {
                bytes,
                mime_type: mime_type.to_owned(),
            },
        );
        url
    }

    pub fn get(&self, url: &str) -> Option<&Blob> {
        self.entries.get(url)
    }

    /// Releases the blob behind `url`. Returns false when the URL was
    /// unknown or already revoked.
    pub fn revoke(&mut self, url: &str) -> bool {
        self.entries.remove(url).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
