//! Group sources: a static `{"groups": [{"name": ..}]}` document or a remote listing.

use std::path::PathBuf;
use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;

use crate::error::{GroupError, GroupResult};
use crate::http;
use crate::log;

use super::{GroupItem, GroupList};

/// Document shipped with the binary, used when no source is configured.
const BUNDLED_GROUPS: &str = include_str!("../../assets/groups.json");

/// Where the picker's options come from.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GroupSource {
    /// Static document; `None` means the bundled one
    Static {
        #[serde(default)]
        path: Option<PathBuf>,
    },
    /// Listing endpoint returning `[{"label", "value"}]`
    Remote { url: String },
}

impl Default for GroupSource {
    fn default() -> Self {
        GroupSource::Static { path: None }
    }
}

#[derive(Deserialize)]
struct StaticDocument {
    groups: Vec<StaticGroup>,
}

#[derive(Deserialize)]
struct StaticGroup {
    name: String,
}

/// Parse a static groups document, using each name as label and value.
pub fn parse_static_document(contents: &str) -> GroupResult<GroupList> {
    let doc: StaticDocument = serde_json::from_str(contents)
        .map_err(|e| GroupError::LoadFailed(format!("invalid groups document: {}", e)))?;
    Ok(doc.groups.into_iter().map(|g| GroupItem::named(g.name)).collect())
}

impl GroupSource {
    /// Short description for the header line
    pub fn describe(&self) -> String {
        match self {
            GroupSource::Static { path: None } => "bundled groups".to_string(),
            GroupSource::Static { path: Some(path) } => path.display().to_string(),
            GroupSource::Remote { url } => url.clone(),
        }
    }

    /// Produce the group list. Every failure maps to `LoadFailed`.
    pub async fn load(&self, client: &Client, timeout: Duration) -> GroupResult<GroupList> {
        match self {
            GroupSource::Static { path: None } => parse_static_document(BUNDLED_GROUPS),
            GroupSource::Static { path: Some(path) } => {
                let contents = tokio::fs::read_to_string(path).await.map_err(|e| {
                    GroupError::LoadFailed(format!("{}: {}", path.display(), e))
                })?;
                parse_static_document(&contents)
            }
            GroupSource::Remote { url } => fetch_remote(client, url, timeout).await,
        }
    }
}

async fn fetch_remote(client: &Client, url: &str, timeout: Duration) -> GroupResult<GroupList> {
    log::log_request("GET", url, None);

    let response = client
        .get(url)
        .timeout(timeout)
        .send()
        .await
        .map_err(|e| GroupError::LoadFailed(http::describe_error(&e, timeout)))?;

    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| GroupError::LoadFailed(http::describe_error(&e, timeout)))?;
    log::log_response(url, status.as_u16(), &body);

    if !status.is_success() {
        return Err(GroupError::LoadFailed(format!("server returned {}", status)));
    }

    serde_json::from_str(&body)
        .map_err(|e| GroupError::LoadFailed(format!("response was not a group list: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support;

    const TIMEOUT: Duration = Duration::from_secs(5);

    #[test]
    fn test_static_document_preserves_order() {
        let groups = parse_static_document(r#"{"groups":[{"name":"a"},{"name":"b"}]}"#).unwrap();
        assert_eq!(groups, vec![GroupItem::named("a"), GroupItem::named("b")]);
        assert_eq!(groups[0].label, "a");
        assert_eq!(groups[0].value, "a");
    }

    #[test]
    fn test_static_document_keeps_duplicates() {
        let groups =
            parse_static_document(r#"{"groups":[{"name":"a"},{"name":"a"}]}"#).unwrap();
        assert_eq!(groups.len(), 2);
    }

    #[test]
    fn test_static_document_wrong_shape() {
        let err = parse_static_document(r#"[{"name":"a"}]"#).unwrap_err();
        assert!(matches!(err, GroupError::LoadFailed(_)));
    }

    #[test]
    fn test_source_from_toml() {
        let source: GroupSource = toml::from_str(
            r#"
            kind = "remote"
            url = "http://localhost/gosvc/listgroups"
        "#,
        )
        .unwrap();
        assert_eq!(
            source,
            GroupSource::Remote {
                url: "http://localhost/gosvc/listgroups".to_string()
            }
        );

        let source: GroupSource = toml::from_str(r#"kind = "static""#).unwrap();
        assert_eq!(source, GroupSource::default());
    }

    #[tokio::test]
    async fn test_bundled_document_loads() {
        let groups = GroupSource::default()
            .load(&test_support::client(), TIMEOUT)
            .await
            .unwrap();
        assert!(!groups.is_empty());
        assert!(groups.iter().all(|g| g.label == g.value));
    }

    #[tokio::test]
    async fn test_static_file_loads() {
        let path = std::env::temp_dir().join(format!("grouppick_groups_{}.json", std::process::id()));
        std::fs::write(&path, r#"{"groups":[{"name":"x"},{"name":"y"}]}"#).unwrap();

        let source = GroupSource::Static { path: Some(path.clone()) };
        let groups = source.load(&test_support::client(), TIMEOUT).await.unwrap();
        let _ = std::fs::remove_file(&path);

        assert_eq!(groups, vec![GroupItem::named("x"), GroupItem::named("y")]);
    }

    #[tokio::test]
    async fn test_missing_static_file_fails() {
        let source = GroupSource::Static {
            path: Some(PathBuf::from("/nonexistent/grouppick/groups.json")),
        };
        let err = source.load(&test_support::client(), TIMEOUT).await.unwrap_err();
        assert!(matches!(err, GroupError::LoadFailed(_)));
    }

    #[tokio::test]
    async fn test_remote_listing_used_as_is() {
        let server = test_support::serve_once(
            "200 OK",
            r#"[{"label":"Physics","value":"phys-topic"},{"label":"Maths","value":"maths"}]"#,
        )
        .await;
        let source = GroupSource::Remote { url: server.url.clone() };

        let groups = source.load(&test_support::client(), TIMEOUT).await.unwrap();
        assert_eq!(
            groups,
            vec![
                GroupItem::new("Physics", "phys-topic"),
                GroupItem::new("Maths", "maths"),
            ]
        );
        assert!(server.request().await.starts_with("GET / "));
    }

    #[tokio::test]
    async fn test_remote_error_status_fails() {
        let server = test_support::serve_once("500 Internal Server Error", "oops").await;
        let source = GroupSource::Remote { url: server.url.clone() };

        let err = source.load(&test_support::client(), TIMEOUT).await.unwrap_err();
        assert_eq!(
            err,
            GroupError::LoadFailed("server returned 500 Internal Server Error".to_string())
        );
    }

    #[tokio::test]
    async fn test_remote_non_json_fails() {
        let server = test_support::serve_once("200 OK", "<html>login</html>").await;
        let source = GroupSource::Remote { url: server.url.clone() };

        let err = source.load(&test_support::client(), TIMEOUT).await.unwrap_err();
        match err {
            GroupError::LoadFailed(reason) => {
                assert!(reason.starts_with("response was not a group list"))
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_remote_timeout_fails() {
        let url = test_support::serve_hanging().await;
        let source = GroupSource::Remote { url };

        let err = source
            .load(&test_support::client(), Duration::from_millis(50))
            .await
            .unwrap_err();
        assert_eq!(
            err,
            GroupError::LoadFailed("request timed out after 50ms".to_string())
        );
    }
}
