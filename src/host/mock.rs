use std::sync::Mutex;

use super::ReleaseHost;
use crate::error::Result;
use crate::release::Release;

/// Mock host for testing without network access
pub struct MockHost {
    releases: Vec<Release>,
    deleted: Mutex<Vec<u64>>,
}

impl MockHost {
    /// Create a new empty mock host
    pub fn new() -> Self {
        MockHost {
            releases: Vec::new(),
            deleted: Mutex::new(Vec::new()),
        }
    }

    /// Add a release to the mock host
    pub fn add_release(&mut self, release: Release) {
        self.releases.push(release);
    }

    /// Ids passed to delete_release, in call order
    pub fn deleted_ids(&self) -> Vec<u64> {
        self.deleted.lock().expect("mock lock poisoned").clone()
    }
}

impl Default for MockHost {
    fn default() -> Self {
        Self::new()
    }
}

impl ReleaseHost for MockHost {
    fn list_releases(&self) -> Result<Vec<Release>> {
        Ok(self.releases.clone())
    }

    fn delete_release(&self, release: &Release) -> Result<()> {
        self.deleted
            .lock()
            .expect("mock lock poisoned")
            .push(release.id);
        Ok(())
    }
}
