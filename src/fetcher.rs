// File: fetcher.rs
// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2025
// - Volker Schwaberow <volker@schwaberow.de>

use crate::analyzer::{parse_set_cookie, Analyzer, Cookie};
use crate::config::ConfigParameter;
use crate::error::FetchError;
use crate::getstate::GetState;
use futures::stream::{FuturesUnordered, StreamExt};
use indicatif::{ProgressBar, ProgressState, ProgressStyle};
use log::{debug, info, warn};
use reqwest::header::{SET_COOKIE, USER_AGENT};
use serde::Serialize;
use std::fmt::Write;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{mpsc, Semaphore};

const AGENT: &str = concat!("rcooky/", env!("CARGO_PKG_VERSION"));

/// Per-URL batch outcome. Exactly one of `cookies`/`error` carries meaning:
/// a fetch that fails has no cookies, a fetch that succeeds has no error
/// (but may have zero cookies).
#[derive(Debug, Clone, Serialize)]
pub struct FetchResult {
    pub url: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub cookies: Vec<Cookie>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl FetchResult {
    fn pending(url: String) -> Self {
        Self {
            url,
            cookies: Vec::new(),
            error: None,
        }
    }

    fn from_join_error(url: String, err: &tokio::task::JoinError) -> Self {
        Self {
            url,
            cookies: Vec::new(),
            error: Some(format!("worker task failed: {}", err)),
        }
    }
}

/// Streaming event. An erroring fetch emits exactly one `Failed` event; a
/// successful fetch emits one `Decoded` event per cookie whose value
/// actually decoded to something new.
#[derive(Debug, Clone)]
pub enum CookieEvent {
    Decoded { url: String, cookie: Cookie },
    Failed { url: String, error: String },
}

#[derive(Clone)]
pub struct Fetcher {
    client: reqwest::Client,
    timeout: Duration,
    workers: usize,
    analyzer: Arc<Analyzer>,
    state: Arc<GetState>,
}

impl Fetcher {
    /// Redirects are terminal: a 3xx response is inspected as-is so cookies
    /// set by the redirecting hop are not lost.
    pub fn new(config: &ConfigParameter, state: Arc<GetState>) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::none())
            .build()?;

        Ok(Self {
            client,
            timeout: Duration::from_secs(config.timeout()),
            workers: config.workers(),
            analyzer: Arc::new(Analyzer::new()),
            state,
        })
    }

    /// Fetch a single target and analyze every named cookie it sets,
    /// decoded or not.
    pub async fn fetch(&self, target: &str) -> FetchResult {
        let url = normalize_target(target);
        match self.fetch_cookies(&url).await {
            Ok(cookies) => {
                self.state.add_success();
                FetchResult {
                    url,
                    cookies,
                    error: None,
                }
            }
            Err(e) => {
                self.state.add_failure();
                debug!("fetch of {} failed: {}", url, e);
                FetchResult {
                    url,
                    cookies: Vec::new(),
                    error: Some(e.to_string()),
                }
            }
        }
    }

    /// Batch fetch. Result `i` always corresponds to input URL `i`, even
    /// though completion order is unordered.
    pub async fn fetch_many(&self, targets: &[String]) -> Vec<FetchResult> {
        let pb = ProgressBar::new(targets.len() as u64);
        pb.set_style(
            ProgressStyle::with_template(
                "[{elapsed_precise}] [{wide_bar:.cyan/blue}] {pos}/{len} ({eta})",
            )
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .with_key("eta", |state: &ProgressState, w: &mut dyn Write| {
                let _ = write!(w, "{:.1}s", state.eta().as_secs_f64());
            })
            .progress_chars("█▉▊▋▌▍▎▏  "),
        );

        let semaphore = Arc::new(Semaphore::new(self.workers));
        let mut futures = FuturesUnordered::new();

        for (idx, target) in targets.iter().enumerate() {
            let fetcher = self.clone();
            let semaphore = Arc::clone(&semaphore);
            let target = target.clone();
            let slot_url = normalize_target(&target);
            let handle = tokio::spawn(async move {
                let _permit = semaphore
                    .acquire_owned()
                    .await
                    .expect("worker semaphore closed");
                fetcher.fetch(&target).await
            });
            futures.push(async move {
                match handle.await {
                    Ok(result) => (idx, result),
                    Err(e) => {
                        warn!("worker for {} failed: {}", slot_url, e);
                        (idx, FetchResult::from_join_error(slot_url, &e))
                    }
                }
            });
        }

        let mut results: Vec<FetchResult> = targets
            .iter()
            .map(|t| FetchResult::pending(normalize_target(t)))
            .collect();

        while let Some((idx, result)) = futures.next().await {
            results[idx] = result;
            pb.inc(1);
        }
        pb.finish_and_clear();
        results
    }

    /// Streaming fetch. Results arrive in completion order on a bounded
    /// channel; a slow consumer backpressures the workers. The channel
    /// closes once every worker has finished. Dropping the receiver is the
    /// batch-wide cancellation signal: queued fetches never start and
    /// in-flight workers stop at their next send.
    pub fn fetch_stream(&self, targets: &[String]) -> mpsc::Receiver<CookieEvent> {
        let (tx, rx) = mpsc::channel(self.workers);
        let semaphore = Arc::new(Semaphore::new(self.workers));

        for target in targets {
            let fetcher = self.clone();
            let tx = tx.clone();
            let semaphore = Arc::clone(&semaphore);
            let target = target.clone();
            tokio::spawn(async move {
                let _permit = semaphore
                    .acquire_owned()
                    .await
                    .expect("worker semaphore closed");
                if tx.is_closed() {
                    return;
                }

                let url = normalize_target(&target);
                match fetcher.fetch_cookies(&url).await {
                    Ok(cookies) => {
                        fetcher.state.add_success();
                        for cookie in cookies {
                            if !cookie.is_decoded() {
                                continue;
                            }
                            let event = CookieEvent::Decoded {
                                url: url.clone(),
                                cookie,
                            };
                            if tx.send(event).await.is_err() {
                                return;
                            }
                        }
                    }
                    Err(e) => {
                        fetcher.state.add_failure();
                        info!("fetch of {} failed: {}", url, e);
                        let _ = tx
                            .send(CookieEvent::Failed {
                                url,
                                error: e.to_string(),
                            })
                            .await;
                    }
                }
            });
        }

        rx
    }

    async fn fetch_cookies(&self, url: &str) -> Result<Vec<Cookie>, FetchError> {
        let parsed = url::Url::parse(url)?;

        let response = self
            .client
            .get(parsed)
            .header(USER_AGENT, AGENT)
            .timeout(self.timeout)
            .send()
            .await?;

        let mut cookies = Vec::new();
        for raw in response.headers().get_all(SET_COOKIE) {
            let Ok(raw) = raw.to_str() else {
                debug!("skipping non-ascii set-cookie header from {}", url);
                continue;
            };
            if let Some((name, value)) = parse_set_cookie(raw) {
                cookies.push(self.analyzer.analyze(&name, &value));
            }
        }

        Ok(cookies)
    }
}

/// Bare hosts are probed over https.
pub fn normalize_target(target: &str) -> String {
    if target.starts_with("http://") || target.starts_with("https://") {
        target.to_string()
    } else {
        format!("https://{}", target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_target() {
        assert_eq!(normalize_target("example.com"), "https://example.com");
        assert_eq!(normalize_target("http://example.com"), "http://example.com");
        assert_eq!(
            normalize_target("https://example.com"),
            "https://example.com"
        );
    }

    #[tokio::test]
    async fn test_crashed_worker_fills_slot_with_error() {
        let err = tokio::spawn(async { panic!("worker died") })
            .await
            .unwrap_err();
        let result = FetchResult::from_join_error("https://example.com".to_string(), &err);
        assert!(result.cookies.is_empty());
        let error = result.error.as_deref().unwrap();
        assert!(error.contains("worker task failed"));
    }

    #[test]
    fn test_fetch_result_serialization_omits_empty_fields() {
        let result = FetchResult::pending("https://example.com".to_string());
        let json = serde_json::to_string(&result).unwrap();
        assert_eq!(json, r#"{"url":"https://example.com"}"#);
    }
}
