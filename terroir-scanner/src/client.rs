use crate::error::{Result, ScanError};
use reqwest::Client;
use tracing::debug;
use url::Url;

/// Browser identity sent with every page request.
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:106.0) Gecko/20100101 Firefox/106.0";

/// Thin wrapper around a `reqwest::Client` that carries the spoofed user agent
/// and hands back raw response bodies.
#[derive(Debug, Clone)]
pub struct PageClient {
    client: Client,
    user_agent: String,
}

impl PageClient {
    pub fn new() -> Result<Self> {
        Self::with_user_agent(DEFAULT_USER_AGENT)
    }

    pub fn with_user_agent(user_agent: &str) -> Result<Self> {
        let client = Client::builder()
            .user_agent(user_agent)
            .redirect(reqwest::redirect::Policy::limited(5))
            .build()?;

        Ok(Self {
            client,
            user_agent: user_agent.to_string(),
        })
    }

    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    /// GET `url` and return the body as text.
    ///
    /// The status code is not checked. An error page comes back as an
    /// ordinary body and extracts to nothing downstream.
    pub async fn get_text(&self, url: &str) -> Result<String> {
        Url::parse(url).map_err(|e| ScanError::InvalidUrl(format!("{}: {}", url, e)))?;

        debug!("Fetching {}", url);
        let response = self.client.get(url).send().await?;
        debug!("{} answered {}", url, response.status().as_u16());

        Ok(response.text().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::{
        Mock, MockServer, ResponseTemplate,
        matchers::{header, method, path},
    };

    #[tokio::test]
    async fn test_get_text_sends_browser_user_agent() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/page"))
            .and(header("user-agent", DEFAULT_USER_AGENT))
            .respond_with(ResponseTemplate::new(200).set_body_string("hello"))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = PageClient::new().unwrap();
        let body = client
            .get_text(&format!("{}/page", mock_server.uri()))
            .await
            .unwrap();

        assert_eq!(body, "hello");
    }

    #[tokio::test]
    async fn test_custom_user_agent_is_sent() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/page"))
            .and(header("user-agent", "terroir-test/1.0"))
            .respond_with(ResponseTemplate::new(200).set_body_string("ok"))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = PageClient::with_user_agent("terroir-test/1.0").unwrap();
        assert_eq!(client.user_agent(), "terroir-test/1.0");

        let body = client
            .get_text(&format!("{}/page", mock_server.uri()))
            .await
            .unwrap();
        assert_eq!(body, "ok");
    }

    #[tokio::test]
    async fn test_get_text_ignores_error_status() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/missing"))
            .respond_with(ResponseTemplate::new(404).set_body_string("<html>gone</html>"))
            .mount(&mock_server)
            .await;

        let client = PageClient::new().unwrap();
        let body = client
            .get_text(&format!("{}/missing", mock_server.uri()))
            .await
            .unwrap();

        assert_eq!(body, "<html>gone</html>");
    }

    #[tokio::test]
    async fn test_get_text_rejects_invalid_url() {
        let client = PageClient::new().unwrap();
        let result = client.get_text("not a url").await;

        assert!(matches!(result, Err(ScanError::InvalidUrl(_))));
    }
}
