use serde::{Deserialize, Serialize};

/// An artifact uploaded to a release.
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
pub struct ReleaseAsset {
    #[serde(default)]
    pub id: u64,

    pub name: String,

    #[serde(default)]
    pub size: u64,

    #[serde(default)]
    pub browser_download_url: String,
}

/// A published release as returned by the hosting service.
///
/// Within one run the tag name uniquely identifies a release; set differences
/// over releases compare tag names, never whole records. Fields the tool does
/// not read are dropped at deserialization.
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
pub struct Release {
    /// Numeric identifier assigned by the hosting service; the delete call
    /// addresses releases by this id.
    #[serde(default)]
    pub id: u64,

    pub tag_name: String,

    pub name: Option<String>,

    #[serde(default)]
    pub draft: bool,

    #[serde(default)]
    pub prerelease: bool,

    #[serde(default)]
    pub published_at: Option<String>,

    /// Artifact list. A payload without the field deserializes to an empty
    /// list, which `without-artifacts` treats the same as zero artifacts
    /// (fails open toward keeping the release).
    #[serde(default)]
    pub assets: Vec<ReleaseAsset>,
}

impl Release {
    /// Create a release carrying only a tag name.
    pub fn new(tag_name: impl Into<String>) -> Self {
        Release {
            tag_name: tag_name.into(),
            ..Default::default()
        }
    }

    /// Human label for reports: the display name, or "no name".
    pub fn label(&self) -> &str {
        self.name
            .as_deref()
            .filter(|name| !name.is_empty())
            .unwrap_or("no name")
    }

    pub fn has_artifacts(&self) -> bool {
        !self.assets.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_full_payload() {
        let payload = r#"{
            "id": 42,
            "tag_name": "v1.2.3",
            "name": "Release 1.2.3",
            "draft": false,
            "prerelease": true,
            "published_at": "2024-01-15T10:00:00Z",
            "assets": [
                {
                    "id": 7,
                    "name": "bundle.tar.gz",
                    "size": 1024,
                    "browser_download_url": "https://example.com/bundle.tar.gz"
                }
            ],
            "html_url": "ignored"
        }"#;

        let release: Release = serde_json::from_str(payload).unwrap();
        assert_eq!(release.id, 42);
        assert_eq!(release.tag_name, "v1.2.3");
        assert_eq!(release.name.as_deref(), Some("Release 1.2.3"));
        assert!(release.prerelease);
        assert_eq!(release.assets.len(), 1);
        assert_eq!(release.assets[0].name, "bundle.tar.gz");
    }

    #[test]
    fn test_deserialize_without_assets_field() {
        let payload = r#"{"tag_name": "v0.1.0", "name": null}"#;

        let release: Release = serde_json::from_str(payload).unwrap();
        assert!(release.assets.is_empty());
        assert!(!release.has_artifacts());
    }

    #[test]
    fn test_label_falls_back_to_no_name() {
        assert_eq!(Release::new("v1.0.0").label(), "no name");

        let mut named = Release::new("v1.0.0");
        named.name = Some(String::new());
        assert_eq!(named.label(), "no name");

        named.name = Some("First stable".to_string());
        assert_eq!(named.label(), "First stable");
    }
}
