//! HTTP client for the reply service (POST {"message"} -> {"response"}).

use reqwest::Url;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Result of one reply exchange. Every failure mode (connect error,
/// non-success status, malformed body, missing field) collapses into
/// `Failed`; the consumer renders one fixed error text for all of them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ReplyOutcome {
    Reply(String),
    Failed,
}

#[derive(Serialize)]
struct OutboundMessage<'a> {
    message: &'a str,
}

#[derive(Deserialize)]
struct ReplyBody {
    response: String,
}

pub struct ReplyClient {
    endpoint: Url,
    http: reqwest::Client,
}

impl ReplyClient {
    pub fn new(endpoint: Url) -> Self {
        Self {
            endpoint,
            http: reqwest::Client::new(),
        }
    }

    /// One attempt, no retry, no client-side timeout.
    pub async fn fetch(&self, message: &str) -> ReplyOutcome {
        let sent = self
            .http
            .post(self.endpoint.clone())
            .json(&OutboundMessage { message })
            .send()
            .await;
        let resp = match sent {
            Ok(r) => r,
            Err(e) => {
                warn!(error = %e, "reply request failed");
                return ReplyOutcome::Failed;
            }
        };
        if !resp.status().is_success() {
            warn!(status = %resp.status(), "reply service returned an error status");
            return ReplyOutcome::Failed;
        }
        match resp.text().await {
            Ok(body) => parse_reply(&body),
            Err(e) => {
                warn!(error = %e, "failed to read reply body");
                ReplyOutcome::Failed
            }
        }
    }
}

/// Decode a reply body. A body without a string `response` field is a
/// failure, not an empty reply.
pub fn parse_reply(body: &str) -> ReplyOutcome {
    match serde_json::from_str::<ReplyBody>(body) {
        Ok(reply) => ReplyOutcome::Reply(reply.response),
        Err(e) => {
            warn!(error = %e, "reply body did not match the expected shape");
            ReplyOutcome::Failed
        }
    }
}
