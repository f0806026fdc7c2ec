//! [`Fetcher`] backed by `reqwest`.

use super::{FetchError, Fetcher};
use async_trait::async_trait;
use hyper::ext::ReasonPhrase;
use reqwest::header::{self, HeaderMap, HeaderValue};
use reqwest::{redirect, Client, Response, Url};
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, instrument, warn};

/// Same-origin JSON client.
///
/// - `Content-Type` and `Accept` are `application/json` on every request.
/// - Cookies set by the origin are kept and sent back (credentials included).
/// - Redirects are not followed, so a 3xx surfaces as a failed status.
/// - A failed status carries the reason phrase the server sent.
/// - Relative URLs are resolved against the origin; absolute URLs on any
///   other origin are refused without touching the network.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
    origin: Url,
}

impl HttpFetcher {
    pub fn new(origin: Url, timeout: Duration) -> Result<Self, FetchError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        );
        headers.insert(header::ACCEPT, HeaderValue::from_static("application/json"));

        let client = Client::builder()
            .default_headers(headers)
            .redirect(redirect::Policy::none())
            .cookie_store(true)
            .timeout(timeout)
            .build()
            .map_err(|e| FetchError::Transport(format!("failed to build http client: {e}")))?;

        Ok(Self { client, origin })
    }

    pub fn origin(&self) -> &Url {
        &self.origin
    }

    /// Resolves `url` against the origin and refuses anything cross-origin.
    pub fn resolve(&self, url: &str) -> Result<Url, FetchError> {
        let resolved = self
            .origin
            .join(url)
            .map_err(|e| FetchError::InvalidUrl {
                url: url.to_string(),
                reason: e.to_string(),
            })?;
        if resolved.origin() != self.origin.origin() {
            return Err(FetchError::CrossOrigin(resolved.to_string()));
        }
        Ok(resolved)
    }
}

/// The reason phrase the server sent, else the canonical one, else the bare
/// status code. Never empty.
fn status_text(response: &Response) -> String {
    let status = response.status();
    response
        .extensions()
        .get::<ReasonPhrase>()
        .map(|reason| String::from_utf8_lossy(reason.as_bytes()).trim().to_string())
        .filter(|text| !text.is_empty())
        .or_else(|| status.canonical_reason().map(str::to_string))
        .unwrap_or_else(|| status.as_str().to_string())
}

#[async_trait]
impl Fetcher for HttpFetcher {
    #[instrument(skip(self))]
    async fn get_json(&self, url: &str) -> Result<Value, FetchError> {
        let resolved = self.resolve(url)?;
        let response = self.client.get(resolved).send().await?;
        let status = response.status();
        debug!(status = status.as_u16(), "Response");

        if !status.is_success() {
            let status_text = status_text(&response);
            warn!(status = status.as_u16(), %status_text, "Request rejected");
            return Err(FetchError::status(status.as_u16(), status_text));
        }
        Ok(response.json::<Value>().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::task::JoinHandle;

    fn fetcher() -> HttpFetcher {
        HttpFetcher::new(
            Url::parse("http://shop.test:8080/").unwrap(),
            Duration::from_secs(1),
        )
        .unwrap()
    }

    #[test]
    fn test_resolve_relative_path() {
        let url = fetcher().resolve("/api/products?page=2&limit=5").unwrap();
        assert_eq!(url.as_str(), "http://shop.test:8080/api/products?page=2&limit=5");
    }

    #[test]
    fn test_resolve_same_origin_absolute() {
        let url = fetcher()
            .resolve("http://shop.test:8080/api/products")
            .unwrap();
        assert_eq!(url.path(), "/api/products");
    }

    #[test]
    fn test_resolve_refuses_other_origins() {
        let fetcher = fetcher();
        for url in [
            "https://shop.test:8080/api",
            "http://evil.test:8080/api",
            "http://shop.test:9090/api",
            "//evil.test/api",
        ] {
            assert!(
                matches!(fetcher.resolve(url), Err(FetchError::CrossOrigin(_))),
                "{url} should be refused"
            );
        }
    }

    #[tokio::test]
    async fn test_cross_origin_is_refused_before_any_io() {
        let err = fetcher()
            .get_json("http://evil.test/api/products")
            .await
            .unwrap_err();
        assert!(matches!(err, FetchError::CrossOrigin(_)));
    }

    /// Serves one connection on a loopback port with a canned response and
    /// hands back the request head, lowercased.
    async fn serve_once(
        status_line: &str,
        extra_headers: &str,
        body: &str,
    ) -> (HttpFetcher, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let response = format!(
            "HTTP/1.1 {status_line}\r\n{extra_headers}Content-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );

        let server = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = socket.read(&mut buf).await.unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..n]);
            }
            socket.write_all(response.as_bytes()).await.unwrap();
            let _ = socket.shutdown().await;
            String::from_utf8_lossy(&request).to_lowercase()
        });

        let origin = Url::parse(&format!("http://{addr}/")).unwrap();
        (HttpFetcher::new(origin, Duration::from_secs(5)).unwrap(), server)
    }

    #[tokio::test]
    async fn test_json_body_is_decoded() {
        let (fetcher, server) = serve_once("200 OK", "", r#"{"list":[],"count":3}"#).await;

        let value = fetcher.get_json("/api/products?page=1&limit=5").await.unwrap();
        assert_eq!(value, json!({ "list": [], "count": 3 }));

        let request = server.await.unwrap();
        assert!(request.starts_with("get /api/products?page=1&limit=5 http/1.1\r\n"));
        assert!(request.contains("\r\naccept: application/json\r\n"));
        assert!(request.contains("\r\ncontent-type: application/json\r\n"));
    }

    #[tokio::test]
    async fn test_redirect_is_a_failed_status() {
        let (fetcher, server) = serve_once("302 Found", "Location: /login\r\n", "").await;

        let err = fetcher.get_json("/api/products").await.unwrap_err();
        assert_eq!(err, FetchError::status(302, "Found"));
        server.await.unwrap();
    }

    #[tokio::test]
    async fn test_server_reason_phrase_is_kept() {
        let (fetcher, server) = serve_once("404 No Such Page", "", "{}").await;

        let err = fetcher.get_json("/api/products").await.unwrap_err();
        assert_eq!(err, FetchError::status(404, "No Such Page"));
        assert_eq!(err.to_string(), "No Such Page");
        server.await.unwrap();
    }

    #[tokio::test]
    async fn test_uncommon_status_keeps_its_text() {
        let (fetcher, server) = serve_once("599 Catalogue Offline", "", "{}").await;

        let err = fetcher.get_json("/api/products").await.unwrap_err();
        assert_eq!(err, FetchError::status(599, "Catalogue Offline"));
        server.await.unwrap();
    }

    #[tokio::test]
    async fn test_canonical_reason_when_server_matches_it() {
        let (fetcher, server) = serve_once("503 Service Unavailable", "", "{}").await;

        let err = fetcher.get_json("/api/products").await.unwrap_err();
        assert_eq!(err.to_string(), "Service Unavailable");
        server.await.unwrap();
    }
}
