//! Scripted [`Fetcher`] for tests.
//!
//! Expectations are consumed in order. A reply can be ready up front or held
//! back until the test releases it, which makes it possible to script races
//! between overlapping requests.

use super::{FetchError, Fetcher};
use async_trait::async_trait;
use serde_json::Value;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard};
use tokio::sync::oneshot;

enum Reply {
    Ready(Result<Value, FetchError>),
    Deferred(oneshot::Receiver<Result<Value, FetchError>>),
}

struct Expectation {
    url: String,
    reply: Reply,
}

#[derive(Default)]
struct Inner {
    expectations: VecDeque<Expectation>,
    requests: Vec<String>,
}

#[derive(Clone, Default)]
pub struct MockFetcher {
    inner: Arc<Mutex<Inner>>,
}

/// Pending expectation for one GET. Finish it with one of the `return_*`
/// methods; dropping it registers nothing.
#[must_use]
pub struct ExpectGet<'a> {
    mock: &'a MockFetcher,
    url: String,
}

impl ExpectGet<'_> {
    pub fn return_ok(self, body: Value) {
        self.push(Reply::Ready(Ok(body)));
    }

    pub fn return_err(self, error: FetchError) {
        self.push(Reply::Ready(Err(error)));
    }

    /// Holds the reply back until the returned sender is used. Dropping the
    /// sender fails the request with a transport error.
    pub fn return_later(self) -> oneshot::Sender<Result<Value, FetchError>> {
        let (tx, rx) = oneshot::channel();
        self.push(Reply::Deferred(rx));
        tx
    }

    fn push(self, reply: Reply) {
        self.mock.lock().expectations.push_back(Expectation {
            url: self.url,
            reply,
        });
    }
}

impl MockFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn expect_get(&self, url: impl Into<String>) -> ExpectGet<'_> {
        ExpectGet {
            mock: self,
            url: url.into(),
        }
    }

    /// Every URL requested so far, in order.
    pub fn requests(&self) -> Vec<String> {
        self.lock().requests.clone()
    }

    /// Panics if any expectation was not consumed.
    pub fn verify(&self) {
        let inner = self.lock();
        let pending: Vec<&str> = inner.expectations.iter().map(|e| e.url.as_str()).collect();
        assert!(pending.is_empty(), "unmet GET expectations: {pending:?}");
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[async_trait]
impl Fetcher for MockFetcher {
    async fn get_json(&self, url: &str) -> Result<Value, FetchError> {
        let reply = {
            let mut inner = self.lock();
            inner.requests.push(url.to_string());
            let expectation = inner
                .expectations
                .pop_front()
                .unwrap_or_else(|| panic!("unexpected GET {url}"));
            assert_eq!(expectation.url, url, "GET went to the wrong url");
            expectation.reply
        };

        match reply {
            Reply::Ready(result) => result,
            Reply::Deferred(rx) => rx
                .await
                .unwrap_or_else(|_| Err(FetchError::Transport("reply dropped".to_string()))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_replies_in_order() {
        let mock = MockFetcher::new();
        mock.expect_get("/a").return_ok(json!(1));
        mock.expect_get("/b").return_err(FetchError::status(500, "Internal Server Error"));

        assert_eq!(mock.get_json("/a").await, Ok(json!(1)));
        assert!(mock.get_json("/b").await.is_err());
        assert_eq!(mock.requests(), vec!["/a", "/b"]);
        mock.verify();
    }

    #[tokio::test]
    async fn test_deferred_reply() {
        let mock = MockFetcher::new();
        let release = mock.expect_get("/slow").return_later();

        let pending = tokio::spawn({
            let mock = mock.clone();
            async move { mock.get_json("/slow").await }
        });
        release.send(Ok(json!({"ok": true}))).unwrap();

        assert_eq!(pending.await.unwrap(), Ok(json!({"ok": true})));
    }

    #[test]
    #[should_panic(expected = "unmet GET expectations")]
    fn test_verify_reports_unmet() {
        let mock = MockFetcher::new();
        mock.expect_get("/never").return_ok(json!(null));
        mock.verify();
    }
}
