//! HTTP client for the remote curation service.
//!
//! The service is an opaque collaborator: it owns researcher
//! registration, the author-paper lookup, and all similarity scoring.
//! This crate only mirrors its wire shapes and never recomputes scores.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use curate_core::Paper;

/// Default base URL for a local development service.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";

/// Default per-request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("service returned HTTP {0}")]
    Status(reqwest::StatusCode),
}

/// `POST /api/researcher` request body. Field names are the service's.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
struct ResearcherBody<'a> {
    full_name: &'a str,
    subject_area: &'a str,
}

/// `GET /api/similar_papers` response: scored papers plus the keyword
/// set the service extracted from the selected papers.
#[derive(Debug, Clone, Deserialize)]
pub struct SimilarPapersResponse {
    #[serde(default)]
    pub papers: Vec<Paper>,
    #[serde(default)]
    pub keywords: Vec<String>,
}

/// Client for the curation service. Cheap to clone (shares the
/// underlying connection pool).
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Register the researcher context with the service. The response
    /// body is not consumed; any non-2xx status is an error.
    pub async fn register_researcher(
        &self,
        full_name: &str,
        subject_area: &str,
    ) -> Result<(), ApiError> {
        let url = format!("{}/api/researcher", self.base_url);
        tracing::debug!(%url, full_name, subject_area, "registering researcher");
        let resp = self
            .client
            .post(&url)
            .json(&ResearcherBody {
                full_name,
                subject_area,
            })
            .send()
            .await?;
        if !resp.status().is_success() {
            return Err(ApiError::Status(resp.status()));
        }
        Ok(())
    }

    /// Fetch the author's existing papers.
    pub async fn author_papers(&self, author_name: &str) -> Result<Vec<Paper>, ApiError> {
        let url = author_papers_url(&self.base_url, author_name);
        tracing::debug!(%url, "fetching author papers");
        let resp = self.client.get(&url).send().await?;
        if !resp.status().is_success() {
            return Err(ApiError::Status(resp.status()));
        }
        Ok(resp.json().await?)
    }

    /// Request the curated feed for a selection of the author's papers.
    pub async fn similar_papers(
        &self,
        author_name: &str,
        category: &str,
        selected_ids: &[String],
    ) -> Result<SimilarPapersResponse, ApiError> {
        let url = similar_papers_url(&self.base_url, author_name, category, selected_ids);
        tracing::debug!(%url, selected = selected_ids.len(), "fetching similar papers");
        let resp = self.client.get(&url).send().await?;
        if !resp.status().is_success() {
            return Err(ApiError::Status(resp.status()));
        }
        Ok(resp.json().await?)
    }
}

fn author_papers_url(base_url: &str, author_name: &str) -> String {
    format!(
        "{}/api/author_papers?authorName={}",
        base_url,
        urlencoding::encode(author_name)
    )
}

fn similar_papers_url(
    base_url: &str,
    author_name: &str,
    category: &str,
    selected_ids: &[String],
) -> String {
    format!(
        "{}/api/similar_papers?authorName={}&category={}&selectedPaperIds={}",
        base_url,
        urlencoding::encode(author_name),
        urlencoding::encode(category),
        urlencoding::encode(&selected_ids.join(","))
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn author_papers_url_encodes_name() {
        let url = author_papers_url("http://localhost:5000", "Grace Hopper");
        assert_eq!(
            url,
            "http://localhost:5000/api/author_papers?authorName=Grace%20Hopper"
        );
    }

    #[test]
    fn similar_papers_url_joins_ids_with_commas() {
        let ids = vec!["2301.1".to_string(), "2301.2".to_string()];
        let url = similar_papers_url("http://localhost:5000", "Ada", "cs.AI", &ids);
        assert_eq!(
            url,
            "http://localhost:5000/api/similar_papers?authorName=Ada&category=cs.AI&selectedPaperIds=2301.1%2C2301.2"
        );
    }

    #[test]
    fn client_strips_trailing_slash_from_base_url() {
        let client =
            ApiClient::new("http://localhost:5000/", Duration::from_secs(5)).unwrap();
        assert_eq!(client.base_url(), "http://localhost:5000");
    }

    #[test]
    fn researcher_body_uses_service_field_names() {
        let body = ResearcherBody {
            full_name: "Ada Lovelace",
            subject_area: "cs.AI",
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["fullName"], "Ada Lovelace");
        assert_eq!(json["subjectArea"], "cs.AI");
    }

    #[test]
    fn similar_papers_response_tolerates_missing_keywords() {
        let resp: SimilarPapersResponse = serde_json::from_str(r#"{"papers": []}"#).unwrap();
        assert!(resp.papers.is_empty());
        assert!(resp.keywords.is_empty());
    }

    #[test]
    fn similar_papers_response_parses_scored_papers() {
        let resp: SimilarPapersResponse = serde_json::from_str(
            r#"{
                "papers": [
                    {"id": "2301.1", "title": "One", "combined_score": 0.9},
                    {"id": "2301.2", "title": "Two", "combined_score": 0.4}
                ],
                "keywords": ["graph", "neural"]
            }"#,
        )
        .unwrap();
        assert_eq!(resp.papers.len(), 2);
        assert_eq!(resp.papers[0].combined_score, Some(0.9));
        assert_eq!(resp.keywords, vec!["graph", "neural"]);
    }
}
