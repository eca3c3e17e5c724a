//! The release selection engine.
//!
//! A pure function from a release list and a [Strategy] to a keep/delete
//! partition. No I/O, no state between calls; invoking it twice with the
//! same input yields the same result, and concurrent calls over distinct
//! inputs need no coordination.

use std::collections::{BTreeMap, HashSet};

use crate::error::Result;
use crate::release::Release;
use crate::strategy::Strategy;
use crate::version::{matches_release_tag_convention, parse_version_from_tag};

/// The keep/delete partition produced by a strategy.
///
/// `delete` is always the input minus `keep`, compared by tag name, with the
/// input order preserved. The two sets are disjoint and cover the input.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectionResult {
    /// Releases to retain, in the order defined by the strategy.
    pub keep: Vec<Release>,

    /// Releases to remove, in input order.
    pub delete: Vec<Release>,

    /// Tags the grouping strategies excluded because they do not follow the
    /// `v<major>.<minor>.<patch>` convention, in input order. Diagnostic
    /// only; these releases still appear in `delete`.
    pub non_semver_tags: Vec<String>,
}

/// Partition `releases` according to `strategy`.
pub fn select(releases: &[Release], strategy: &Strategy) -> SelectionResult {
    let (keep, non_semver_tags) = match strategy {
        Strategy::All => (releases.to_vec(), Vec::new()),
        Strategy::LatestInMinor => keep_last_n_in_minor(releases, 1),
        Strategy::LastNInMinor(n) => keep_last_n_in_minor(releases, *n),
        Strategy::NotMatchingSemver => (
            releases
                .iter()
                .filter(|release| !matches_release_tag_convention(&release.tag_name))
                .cloned()
                .collect(),
            Vec::new(),
        ),
        Strategy::WithoutArtifacts => (
            releases
                .iter()
                .filter(|release| !release.has_artifacts())
                .cloned()
                .collect(),
            Vec::new(),
        ),
    };

    let delete = delete_set(releases, &keep);
    SelectionResult {
        keep,
        delete,
        non_semver_tags,
    }
}

/// Decode `strategy` and partition `releases` with it.
///
/// Fails with [crate::ReleasePruneError::UnknownStrategy] or
/// [crate::ReleasePruneError::InvalidStrategyFormat] before looking at the
/// release list; no partial result is produced.
pub fn select_by_name(releases: &[Release], strategy: &str) -> Result<SelectionResult> {
    let strategy = strategy.parse::<Strategy>()?;
    Ok(select(releases, &strategy))
}

/// Group parseable releases by `(major, minor)` and keep the top `n` of each
/// group by patch, flattened with groups in numeric key-descending order.
///
/// The ordered map makes the output independent of hash iteration order and
/// of the input permutation (membership-wise). Within a group the sort is
/// stable, so equal patches keep input order and the first one encountered
/// wins.
fn keep_last_n_in_minor(releases: &[Release], n: usize) -> (Vec<Release>, Vec<String>) {
    let mut groups: BTreeMap<(u32, u32), Vec<(u32, Release)>> = BTreeMap::new();
    let mut non_semver = Vec::new();

    for release in releases {
        match parse_version_from_tag(&release.tag_name) {
            Some(version) => groups
                .entry((version.major, version.minor))
                .or_default()
                .push((version.patch, release.clone())),
            None => non_semver.push(release.tag_name.clone()),
        }
    }

    let mut keep = Vec::new();
    for (_, mut entries) in groups.into_iter().rev() {
        entries.sort_by(|a, b| b.0.cmp(&a.0));
        keep.extend(entries.into_iter().take(n).map(|(_, release)| release));
    }

    (keep, non_semver)
}

/// Input minus keep, compared by tag name, input order preserved.
fn delete_set(releases: &[Release], keep: &[Release]) -> Vec<Release> {
    let kept: HashSet<&str> = keep.iter().map(|release| release.tag_name.as_str()).collect();
    releases
        .iter()
        .filter(|release| !kept.contains(release.tag_name.as_str()))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn releases(tags: &[&str]) -> Vec<Release> {
        tags.iter().map(|tag| Release::new(*tag)).collect()
    }

    fn keep_tags(result: &SelectionResult) -> Vec<&str> {
        result.keep.iter().map(|r| r.tag_name.as_str()).collect()
    }

    #[test]
    fn test_empty_input() {
        for strategy in [
            Strategy::All,
            Strategy::LatestInMinor,
            Strategy::LastNInMinor(3),
            Strategy::NotMatchingSemver,
            Strategy::WithoutArtifacts,
        ] {
            let result = select(&[], &strategy);
            assert!(result.keep.is_empty());
            assert!(result.delete.is_empty());
            assert!(result.non_semver_tags.is_empty());
        }
    }

    #[test]
    fn test_groups_flatten_key_descending() {
        let input = releases(&["v1.2.4", "v2.0.1", "v1.3.0", "v1.2.9"]);
        let result = select(&input, &Strategy::LastNInMinor(2));
        assert_eq!(keep_tags(&result), ["v2.0.1", "v1.3.0", "v1.2.9", "v1.2.4"]);
    }

    #[test]
    fn test_patch_tie_first_in_input_order_wins() {
        // Distinct tags can parse to the same triple via leading zeros
        let input = releases(&["v1.02.3", "v1.2.3"]);
        let result = select(&input, &Strategy::LatestInMinor);
        assert_eq!(keep_tags(&result), ["v1.02.3"]);
    }

    #[test]
    fn test_last_zero_keeps_nothing() {
        let input = releases(&["v1.2.1", "v1.2.2"]);
        let result = select(&input, &Strategy::LastNInMinor(0));
        assert!(result.keep.is_empty());
        assert_eq!(result.delete.len(), 2);
    }

    #[test]
    fn test_non_semver_diagnostics_only_for_grouping_strategies() {
        let input = releases(&["v1.2.3", "latest"]);

        let grouped = select(&input, &Strategy::LatestInMinor);
        assert_eq!(grouped.non_semver_tags, ["latest"]);

        for strategy in [
            Strategy::All,
            Strategy::NotMatchingSemver,
            Strategy::WithoutArtifacts,
        ] {
            assert!(select(&input, &strategy).non_semver_tags.is_empty());
        }
    }
}
