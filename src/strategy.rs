use std::fmt;
use std::str::FromStr;

use crate::error::ReleasePruneError;

/// A retention strategy, decoded once from its string identifier.
///
/// The complete vocabulary of identifiers:
///
/// | Token | Meaning |
/// |---|---|
/// | `all` | keep every release |
/// | `latest-in-minor` | keep the highest patch of each `major.minor` group |
/// | `last-<N>-in-minor` | keep the `N` highest patches of each `major.minor` group |
/// | `not-matching-semver` | keep the releases whose tag is outside the version convention |
/// | `without-artifacts` | keep the releases with no uploaded artifacts |
///
/// The `last-<N>-in-minor` family embeds its count in the token; the count is
/// extracted here so the selection engine never parses strings. Unrecognized
/// tokens are a hard error, not a no-op.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Strategy {
    All,
    LatestInMinor,
    LastNInMinor(usize),
    NotMatchingSemver,
    WithoutArtifacts,
}

impl Strategy {
    /// The recognized tokens, for help and error output. `<N>` stands for a
    /// decimal integer.
    pub const VOCABULARY: [&'static str; 5] = [
        "all",
        "latest-in-minor",
        "last-<N>-in-minor",
        "not-matching-semver",
        "without-artifacts",
    ];
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::All => write!(f, "all"),
            Strategy::LatestInMinor => write!(f, "latest-in-minor"),
            Strategy::LastNInMinor(n) => write!(f, "last-{}-in-minor", n),
            Strategy::NotMatchingSemver => write!(f, "not-matching-semver"),
            Strategy::WithoutArtifacts => write!(f, "without-artifacts"),
        }
    }
}

impl FromStr for Strategy {
    type Err = ReleasePruneError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        match token {
            "all" => Ok(Strategy::All),
            "latest-in-minor" => Ok(Strategy::LatestInMinor),
            "not-matching-semver" => Ok(Strategy::NotMatchingSemver),
            "without-artifacts" => Ok(Strategy::WithoutArtifacts),
            _ => {
                // The parameterized family: a token shaped like the family
                // with a bad count is a format error, not an unknown token.
                if let Some(count) = token
                    .strip_prefix("last-")
                    .and_then(|rest| rest.strip_suffix("-in-minor"))
                {
                    if count.is_empty() || !count.chars().all(|c| c.is_ascii_digit()) {
                        return Err(ReleasePruneError::invalid_strategy_format(format!(
                            "expected an integer count in '{}', got '{}'",
                            token, count
                        )));
                    }
                    let n = count.parse::<usize>().map_err(|_| {
                        ReleasePruneError::invalid_strategy_format(format!(
                            "count '{}' in '{}' is out of range",
                            count, token
                        ))
                    })?;
                    return Ok(Strategy::LastNInMinor(n));
                }

                Err(ReleasePruneError::unknown_strategy(token))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_fixed_tokens() {
        assert_eq!("all".parse::<Strategy>().unwrap(), Strategy::All);
        assert_eq!(
            "latest-in-minor".parse::<Strategy>().unwrap(),
            Strategy::LatestInMinor
        );
        assert_eq!(
            "not-matching-semver".parse::<Strategy>().unwrap(),
            Strategy::NotMatchingSemver
        );
        assert_eq!(
            "without-artifacts".parse::<Strategy>().unwrap(),
            Strategy::WithoutArtifacts
        );
    }

    #[test]
    fn test_parse_parameterized_family() {
        assert_eq!(
            "last-3-in-minor".parse::<Strategy>().unwrap(),
            Strategy::LastNInMinor(3)
        );
        assert_eq!(
            "last-0-in-minor".parse::<Strategy>().unwrap(),
            Strategy::LastNInMinor(0)
        );
    }

    #[test]
    fn test_parse_unknown_token() {
        let err = "bogus".parse::<Strategy>().unwrap_err();
        assert!(matches!(err, ReleasePruneError::UnknownStrategy(_)));
    }

    #[test]
    fn test_parse_malformed_count() {
        for token in ["last-x-in-minor", "last--in-minor", "last-+3-in-minor"] {
            let err = token.parse::<Strategy>().unwrap_err();
            assert!(
                matches!(err, ReleasePruneError::InvalidStrategyFormat(_)),
                "'{}' should be a format error, got {:?}",
                token,
                err
            );
        }
    }

    #[test]
    fn test_parse_oversized_count() {
        let err = "last-99999999999999999999-in-minor"
            .parse::<Strategy>()
            .unwrap_err();
        assert!(matches!(err, ReleasePruneError::InvalidStrategyFormat(_)));
    }

    #[test]
    fn test_display_round_trips() {
        for strategy in [
            Strategy::All,
            Strategy::LatestInMinor,
            Strategy::LastNInMinor(5),
            Strategy::NotMatchingSemver,
            Strategy::WithoutArtifacts,
        ] {
            let token = strategy.to_string();
            assert_eq!(token.parse::<Strategy>().unwrap(), strategy);
        }
    }
}
