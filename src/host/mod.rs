//! Hosting-service abstraction layer
//!
//! This module provides a trait-based abstraction over the release hosting
//! service, allowing for multiple implementations including the real GitHub
//! REST API and a mock implementation for testing.
//!
//! Most code should depend on the [ReleaseHost] trait rather than concrete
//! implementations:
//!
//! - [github::GithubHost]: the real implementation over the GitHub REST API
//! - [mock::MockHost]: an in-memory implementation for testing

pub mod github;
pub mod mock;

pub use github::GithubHost;
pub use mock::MockHost;

use crate::error::Result;
use crate::release::Release;

/// Common hosting-service operations
///
/// Implementors must be `Send + Sync` to allow safe sharing across threads.
/// Methods return [crate::error::Result<T>]; implementations map transport
/// failures to [crate::error::ReleasePruneError] variants. Retry and backoff
/// are the implementation's concern, never the caller's.
pub trait ReleaseHost: Send + Sync {
    /// Get every release of the repository
    ///
    /// Returns the complete release list in the order the service reports
    /// it (newest first on GitHub). Pagination is walked internally; callers
    /// always see the full set.
    ///
    /// # Returns
    /// * `Ok(Vec<Release>)` - All releases, possibly empty
    /// * `Err` - If the repository is unreachable or the response is malformed
    fn list_releases(&self) -> Result<Vec<Release>>;

    /// Delete one release
    ///
    /// Removes the release from the hosting service. The release is addressed
    /// by its service-assigned id; the tag itself is not touched.
    ///
    /// # Arguments
    /// * `release` - The release to delete
    ///
    /// # Returns
    /// * `Ok(())` - Success
    /// * `Err` - If the release no longer exists or the service refuses
    fn delete_release(&self, release: &Release) -> Result<()>;
}
