//! REST accessors for a projects/experience backend.
//!
//! The viewer renders compiled-in content and never calls these; they are
//! kept as library API for a future dynamic backend.

use std::time::Duration;

use serde::Deserialize;

#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    #[error("invalid backend URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("backend returned status {0}")]
    Status(u16),

    #[error("malformed response: {0}")]
    Decode(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoteProject {
    pub id: u32,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub tech_stack: Vec<String>,
    #[serde(default)]
    pub category: String,
    pub image: Option<String>,
    pub live_link: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RemoteExperience {
    pub id: u32,
    pub company: String,
    pub role: String,
    pub duration: String,
    #[serde(default)]
    pub description: Vec<String>,
    #[serde(rename = "type", default)]
    pub kind: String,
}

pub struct BackendClient {
    base: url::Url,
    client: reqwest::blocking::Client,
}

impl BackendClient {
    pub fn new(base_url: &str) -> Result<Self, BackendError> {
        // A trailing slash keeps `join` from dropping the last path segment.
        let normalized = if base_url.ends_with('/') {
            base_url.to_string()
        } else {
            format!("{}/", base_url)
        };
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(15))
            .build()?;
        Ok(Self {
            base: url::Url::parse(&normalized)?,
            client,
        })
    }

    pub fn endpoint(&self, path: &str) -> Result<url::Url, BackendError> {
        Ok(self.base.join(path)?)
    }

    fn get_json<T: serde::de::DeserializeOwned>(&self, path: &str) -> Result<T, BackendError> {
        let url = self.endpoint(path)?;
        log::debug!("GET {}", url);
        let response = self.client.get(url).send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(BackendError::Status(status.as_u16()));
        }
        let body = response.text()?;
        Ok(serde_json::from_str(&body)?)
    }

    /// `GET {base}/projects`
    pub fn fetch_projects(&self) -> Result<Vec<RemoteProject>, BackendError> {
        self.get_json("projects")
    }

    /// `GET {base}/experience`
    pub fn fetch_experience(&self) -> Result<Vec<RemoteExperience>, BackendError> {
        self.get_json("experience")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_keep_api_prefix() {
        let client = BackendClient::new("http://localhost:5000/api").unwrap();
        assert_eq!(
            client.endpoint("projects").unwrap().as_str(),
            "http://localhost:5000/api/projects"
        );
        assert_eq!(
            client.endpoint("experience").unwrap().as_str(),
            "http://localhost:5000/api/experience"
        );
    }

    #[test]
    fn invalid_base_is_rejected() {
        assert!(matches!(
            BackendClient::new("not a url"),
            Err(BackendError::InvalidUrl(_))
        ));
    }

    #[test]
    fn project_payload_decodes() {
        let body = r#"[{"id":1,"title":"DevCollab","description":"d",
            "techStack":["React"],"category":"Full Stack","liveLink":"https://x.dev/"}]"#;
        let projects: Vec<RemoteProject> = serde_json::from_str(body).unwrap();
        assert_eq!(projects[0].tech_stack, vec!["React".to_string()]);
        assert_eq!(projects[0].live_link.as_deref(), Some("https://x.dev/"));
        assert_eq!(projects[0].image, None);
    }

    #[test]
    fn experience_payload_decodes() {
        let body = r#"[{"id":2,"company":"INNOV8","role":"Frontend Developer",
            "duration":"2024 – 2025","description":["a","b"],"type":"work"}]"#;
        let entries: Vec<RemoteExperience> = serde_json::from_str(body).unwrap();
        assert_eq!(entries[0].kind, "work");
        assert_eq!(entries[0].description.len(), 2);
    }
}
