// frontend_marasty/src/api/contributors.rs
use gloo::net::http::Request;
use serde::Deserialize;
use thiserror::Error;

use crate::config_file::asset_url;

/// Path of the contributor list, relative to the base path.
pub const CONTRIBUTORS_ASSET: &str = "/contributors.json";

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct Contributor {
    pub login: String,
    pub avatar_url: String,
    pub html_url: String,
    pub contributions: u64,
}

impl Contributor {
    pub fn tooltip(&self) -> String {
        format!("{} ({} příspěvků)", self.login, self.contributions)
    }
}

/// Contributor data unavailable. The variants only refine the log message.
#[derive(Debug, Error)]
pub enum ContributorError {
    #[error("contributor request failed: {0}")]
    Request(String),
    #[error("contributor request returned status {0}")]
    Status(u16),
    #[error("malformed contributor data: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Something that can hand back the text body stored at a URL.
pub trait AssetSource {
    async fn fetch_text(&self, url: &str) -> Result<String, ContributorError>;
}

/// Fetches assets from the page's origin with `gloo-net`.
#[derive(Clone, Copy, Debug, Default)]
pub struct HttpAssetSource;

impl AssetSource for HttpAssetSource {
    async fn fetch_text(&self, url: &str) -> Result<String, ContributorError> {
        let response = Request::get(url)
            .send()
            .await
            .map_err(|e| ContributorError::Request(e.to_string()))?;

        if !response.ok() {
            return Err(ContributorError::Status(response.status()));
        }

        response
            .text()
            .await
            .map_err(|e| ContributorError::Request(e.to_string()))
    }
}

pub fn contributors_url(base_path: &str) -> String {
    asset_url(base_path, CONTRIBUTORS_ASSET)
}

/// Parses the JSON array as-is: order is kept, duplicates are kept.
pub fn parse_contributors(body: &str) -> Result<Vec<Contributor>, ContributorError> {
    Ok(serde_json::from_str(body)?)
}

/// One fetch of `{base_path}/contributors.json`, then parse.
pub async fn load_contributors<S: AssetSource>(
    source: &S,
    base_path: &str,
) -> Result<Vec<Contributor>, ContributorError> {
    let body = source.fetch_text(&contributors_url(base_path)).await?;
    parse_contributors(&body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    /// Canned source that records every URL it is asked for.
    struct FakeSource {
        response: Result<String, u16>,
        requested: RefCell<Vec<String>>,
    }

    impl FakeSource {
        fn body(body: &str) -> Self {
            Self {
                response: Ok(body.to_owned()),
                requested: RefCell::new(Vec::new()),
            }
        }

        fn failing(status: u16) -> Self {
            Self {
                response: Err(status),
                requested: RefCell::new(Vec::new()),
            }
        }
    }

    impl AssetSource for FakeSource {
        async fn fetch_text(&self, url: &str) -> Result<String, ContributorError> {
            self.requested.borrow_mut().push(url.to_owned());
            match &self.response {
                Ok(body) => Ok(body.clone()),
                Err(0) => Err(ContributorError::Request("connection refused".into())),
                Err(status) => Err(ContributorError::Status(*status)),
            }
        }
    }

    const TWO_CONTRIBUTORS: &str = r#"[
        {"login": "skopevoj", "avatar_url": "https://avatars.example/1", "html_url": "https://github.com/skopevoj", "contributions": 120, "type": "User"},
        {"login": "alice", "avatar_url": "https://avatars.example/2", "html_url": "https://github.com/alice", "contributions": 3}
    ]"#;

    #[test]
    fn url_uses_base_path() {
        assert_eq!(contributors_url("/x"), "/x/contributors.json");
        assert_eq!(contributors_url(""), "/contributors.json");
    }

    #[test]
    fn parse_keeps_source_order_and_ignores_extra_fields() {
        let list = parse_contributors(TWO_CONTRIBUTORS).unwrap();
        let logins: Vec<_> = list.iter().map(|c| c.login.as_str()).collect();
        assert_eq!(logins, ["skopevoj", "alice"]);
        assert_eq!(list[0].contributions, 120);
        assert_eq!(list[1].html_url, "https://github.com/alice");
    }

    #[test]
    fn parse_keeps_duplicates() {
        let body = r#"[
            {"login": "bob", "avatar_url": "a", "html_url": "h", "contributions": 1},
            {"login": "bob", "avatar_url": "a", "html_url": "h", "contributions": 2}
        ]"#;
        assert_eq!(parse_contributors(body).unwrap().len(), 2);
    }

    #[test]
    fn parse_rejects_non_array() {
        let err = parse_contributors(r#"{"login": "bob"}"#).unwrap_err();
        assert!(matches!(err, ContributorError::Malformed(_)));
    }

    #[test]
    fn parse_rejects_missing_field() {
        let body = r#"[{"login": "bob", "avatar_url": "a", "contributions": 1}]"#;
        assert!(parse_contributors(body).is_err());
    }

    #[test]
    fn parse_rejects_empty_body() {
        assert!(parse_contributors("").is_err());
    }

    #[test]
    fn tooltip_shows_login_and_count() {
        let list = parse_contributors(TWO_CONTRIBUTORS).unwrap();
        assert_eq!(list[1].tooltip(), "alice (3 příspěvků)");
    }

    #[tokio::test]
    async fn load_fetches_once_from_base_path() {
        let source = FakeSource::body(TWO_CONTRIBUTORS);
        let list = load_contributors(&source, "/x").await.unwrap();

        assert_eq!(list.len(), 2);
        assert_eq!(*source.requested.borrow(), ["/x/contributors.json"]);
    }

    #[tokio::test]
    async fn load_without_base_path_hits_root() {
        let source = FakeSource::body("[]");
        let list = load_contributors(&source, "").await.unwrap();

        assert!(list.is_empty());
        assert_eq!(*source.requested.borrow(), ["/contributors.json"]);
    }

    #[tokio::test]
    async fn load_reports_network_failure() {
        let source = FakeSource::failing(0);
        let err = load_contributors(&source, "").await.unwrap_err();
        assert!(matches!(err, ContributorError::Request(_)));
        assert_eq!(source.requested.borrow().len(), 1);
    }

    #[tokio::test]
    async fn load_reports_missing_asset() {
        let source = FakeSource::failing(404);
        let err = load_contributors(&source, "").await.unwrap_err();
        assert!(matches!(err, ContributorError::Status(404)));
    }

    #[tokio::test]
    async fn load_reports_malformed_payload() {
        let source = FakeSource::body("<html>not json</html>");
        let err = load_contributors(&source, "").await.unwrap_err();
        assert!(matches!(err, ContributorError::Malformed(_)));
    }
}
