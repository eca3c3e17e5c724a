use regex::Regex;

/// Represents a semantic version with major, minor, and patch components.
///
/// Follows semantic versioning specification (major.minor.patch).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Version {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

impl Version {
    /// Creates a new Version with the specified major, minor, and patch components.
    ///
    /// # Arguments
    /// * `major` - Major version number
    /// * `minor` - Minor version number
    /// * `patch` - Patch version number
    pub fn new(major: u32, minor: u32, patch: u32) -> Self {
        Version {
            major,
            minor,
            patch,
        }
    }
}

impl std::fmt::Display for Version {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

/// Parses a version from a release tag string.
///
/// Only the exact `v<major>.<minor>.<patch>` form is accepted, anchored at
/// both ends: no uppercase `V`, no other prefixes, and no pre-release or
/// build suffixes. A tag that doesn't match is not an error, just a release
/// outside the versioning convention (e.g. `latest`, `nightly-2024-01-01`).
///
/// Leading zeros in a component parse as decimal (`v1.02.3` → minor = 2).
///
/// # Arguments
/// * `tag` - Tag string to parse (e.g., "v1.2.3")
///
/// # Returns
/// * `Some(Version)` - Successfully parsed version
/// * `None` - If the tag doesn't follow the convention
pub fn parse_version_from_tag(tag: &str) -> Option<Version> {
    let re = Regex::new(r"^v(\d+)\.(\d+)\.(\d+)$").ok()?;
    let captures = re.captures(tag)?;

    let major = captures[1].parse::<u32>().ok()?;
    let minor = captures[2].parse::<u32>().ok()?;
    let patch = captures[3].parse::<u32>().ok()?;

    Some(Version::new(major, minor, patch))
}

/// Checks a tag against the release naming convention: `v<major>.<minor>.<patch>`
/// with the major component limited to one or two digits.
///
/// This is deliberately stricter than [parse_version_from_tag] and is used by
/// the `not-matching-semver` strategy to flag out-of-convention tags; the
/// two-digit cap on the major is part of that strategy's contract.
///
/// # Arguments
/// * `tag` - Tag string to check
pub fn matches_release_tag_convention(tag: &str) -> bool {
    match Regex::new(r"^v\d{1,2}\.\d+\.\d+$") {
        Ok(re) => re.is_match(tag),
        Err(_) => false,
    }
}
