use std::time::Duration;

use reqwest::blocking::{Client, RequestBuilder};
use reqwest::StatusCode;

use super::ReleaseHost;
use crate::error::{ReleasePruneError, Result};
use crate::release::Release;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
const PAGE_SIZE: usize = 100;
const USER_AGENT: &str = concat!("release-prune/", env!("CARGO_PKG_VERSION"));

/// GitHub REST implementation of [ReleaseHost].
///
/// Talks to `api_url` (the public API or a GitHub Enterprise endpoint) with
/// an optional bearer token. Unauthenticated requests work for public
/// repositories but are rate-limited.
pub struct GithubHost {
    client: Client,
    api_url: String,
    owner: String,
    repo: String,
    token: Option<String>,
}

impl GithubHost {
    /// Create a host for `owner/repo` against `api_url`.
    pub fn new(
        api_url: impl Into<String>,
        owner: impl Into<String>,
        repo: impl Into<String>,
        token: Option<String>,
    ) -> Result<Self> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(USER_AGENT)
            .build()?;

        Ok(GithubHost {
            client,
            api_url: api_url.into(),
            owner: owner.into(),
            repo: repo.into(),
            token,
        })
    }

    fn releases_url(&self) -> String {
        format!(
            "{}/repos/{}/{}/releases",
            self.api_url.trim_end_matches('/'),
            self.owner,
            self.repo
        )
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        let request = request.header("Accept", "application/vnd.github+json");
        match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }
}

impl ReleaseHost for GithubHost {
    fn list_releases(&self) -> Result<Vec<Release>> {
        let mut releases = Vec::new();
        let mut page = 1u32;

        loop {
            let page_param = page.to_string();
            let per_page_param = PAGE_SIZE.to_string();
            let request = self.client.get(self.releases_url()).query(&[
                ("per_page", per_page_param.as_str()),
                ("page", page_param.as_str()),
            ]);

            let response = self.authorize(request).send()?;
            if !response.status().is_success() {
                return Err(ReleasePruneError::remote(format!(
                    "listing releases for {}/{} failed with status {}",
                    self.owner,
                    self.repo,
                    response.status()
                )));
            }

            let batch: Vec<Release> = response.json()?;
            let last_page = batch.len() < PAGE_SIZE;
            releases.extend(batch);
            if last_page {
                break;
            }
            page += 1;
        }

        Ok(releases)
    }

    fn delete_release(&self, release: &Release) -> Result<()> {
        let url = format!("{}/{}", self.releases_url(), release.id);
        let response = self.authorize(self.client.delete(url)).send()?;

        match response.status() {
            status if status.is_success() => Ok(()),
            StatusCode::NOT_FOUND => Err(ReleasePruneError::remote(format!(
                "release '{}' not found on {}/{}",
                release.tag_name, self.owner, self.repo
            ))),
            status => Err(ReleasePruneError::remote(format!(
                "deleting release '{}' failed with status {}",
                release.tag_name, status
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_releases_url() {
        let host =
            GithubHost::new("https://api.github.com", "acme", "widgets", None).unwrap();
        assert_eq!(
            host.releases_url(),
            "https://api.github.com/repos/acme/widgets/releases"
        );
    }

    #[test]
    fn test_releases_url_trims_trailing_slash() {
        let host = GithubHost::new(
            "https://github.example.com/api/v3/",
            "acme",
            "widgets",
            None,
        )
        .unwrap();
        assert_eq!(
            host.releases_url(),
            "https://github.example.com/api/v3/repos/acme/widgets/releases"
        );
    }
}
