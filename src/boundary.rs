use std::fmt;

/// Warnings that occur around the edges of a prune run.
/// These are non-fatal conditions that should be reported to the user.
#[derive(Debug, Clone, PartialEq)]
pub enum BoundaryWarning {
    /// The repository has no releases at all
    NoReleases { repository: String },
    /// No API token was found; requests go out unauthenticated
    MissingToken,
    /// A grouping strategy skipped tags outside the version convention
    NonSemverTags { count: usize },
}

impl fmt::Display for BoundaryWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoundaryWarning::NoReleases { repository } => {
                write!(f, "No releases found in '{}'", repository)
            }
            BoundaryWarning::MissingToken => {
                write!(
                    f,
                    "No API token configured; requests are unauthenticated and rate-limited"
                )
            }
            BoundaryWarning::NonSemverTags { count } => {
                write!(
                    f,
                    "Skipped {} tag(s) that do not follow the v<major>.<minor>.<patch> convention",
                    count
                )
            }
        }
    }
}
