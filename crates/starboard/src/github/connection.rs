//! Connection used to issue REST requests against the GitHub API.

use std::sync::Arc;

use crate::http::{HttpError, HttpMethod, HttpRequest, HttpResponse, HttpTransport};

/// Default GitHub REST endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://api.github.com";

/// User agent sent with every request. GitHub rejects requests without one.
pub const DEFAULT_USER_AGENT: &str = "starboard";

/// A GitHub REST connection.
///
/// Resolves relative API paths (`users/octocat/starred`) against an endpoint
/// and hands the request to an [`HttpTransport`]. Timeouts and retries, if
/// any, are the transport's business.
#[derive(Clone)]
pub struct GitHubConnection {
    transport: Arc<dyn HttpTransport>,
    endpoint: String,
    user_agent: String,
}

impl GitHubConnection {
    pub fn new(transport: Arc<dyn HttpTransport>) -> Self {
        Self {
            transport,
            endpoint: DEFAULT_ENDPOINT.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }

    /// Point the connection at a different API root (GitHub Enterprise, test servers).
    #[must_use]
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Full URL for a relative API path.
    #[must_use]
    pub fn url_for(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.endpoint.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// Issue a request for `path` with the given extra headers.
    pub async fn make_request(
        &self,
        path: &str,
        method: HttpMethod,
        headers: &[(&str, &str)],
    ) -> Result<HttpResponse, HttpError> {
        let url = self.url_for(path);
        tracing::debug!(method = method.as_str(), url = %url, "Sending GitHub request");

        let mut request_headers = vec![("User-Agent".to_string(), self.user_agent.clone())];
        request_headers.extend(
            headers
                .iter()
                .map(|(k, v)| ((*k).to_string(), (*v).to_string())),
        );

        let response = self
            .transport
            .send(HttpRequest {
                method,
                url,
                headers: request_headers,
            })
            .await?;

        tracing::debug!(status = response.status, path, "GitHub request finished");
        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::MockTransport;

    #[test]
    fn url_for_joins_endpoint_and_path_with_single_slash() {
        let conn = GitHubConnection::new(Arc::new(MockTransport::new()));
        assert_eq!(
            conn.url_for("users/octocat/starred"),
            "https://api.github.com/users/octocat/starred"
        );

        let conn = conn.with_endpoint("http://localhost:8080/api/v3/");
        assert_eq!(
            conn.url_for("/repos/a/b/readme"),
            "http://localhost:8080/api/v3/repos/a/b/readme"
        );
    }

    #[test]
    fn url_for_keeps_empty_login_segment() {
        let conn = GitHubConnection::new(Arc::new(MockTransport::new()));
        assert_eq!(
            conn.url_for("users//starred"),
            "https://api.github.com/users//starred"
        );
    }

    #[tokio::test]
    async fn make_request_sends_user_agent_and_extra_headers() {
        let transport = MockTransport::new();
        transport.respond("https://api.github.com/repos/a/b/readme", 200, "# hello");
        let conn = GitHubConnection::new(Arc::new(transport.clone())).with_user_agent("tester");

        let resp = conn
            .make_request(
                "repos/a/b/readme",
                HttpMethod::Get,
                &[("Accept", "application/vnd.github.v3.html")],
            )
            .await
            .expect("response");
        assert_eq!(resp.body, b"# hello".to_vec());

        let requests = transport.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].header("user-agent"), Some("tester"));
        assert_eq!(
            requests[0].header("accept"),
            Some("application/vnd.github.v3.html")
        );
    }
}
