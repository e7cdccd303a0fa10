use crate::transport::{Response, TransportError};
use serde_json::Value;

const MAX_PLAIN_MESSAGE: usize = 200;

/// Why a save did not succeed.
#[derive(Debug)]
pub enum SubmitFailure {
    /// The server answered with a non-success status.
    Status(Response),
    /// The request never produced a response.
    Transport(TransportError),
}

impl SubmitFailure {
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status(resp) => Some(resp.status),
            Self::Transport(_) => None,
        }
    }
}

/// Turns a failed save into the text shown to the user.
pub trait StatusExtractor: Send + Sync {
    fn status_message(&self, failure: &SubmitFailure) -> String;
}

impl<F> StatusExtractor for F
where
    F: Fn(&SubmitFailure) -> String + Send + Sync,
{
    fn status_message(&self, failure: &SubmitFailure) -> String {
        self(failure)
    }
}

/// Reads `status_msg` from a JSON body, then a short plain-text body, then
/// the status reason phrase.
#[derive(Clone, Debug, Default)]
pub struct StatusMsg;

impl StatusExtractor for StatusMsg {
    fn status_message(&self, failure: &SubmitFailure) -> String {
        match failure {
            SubmitFailure::Transport(e) => e.to_string(),
            SubmitFailure::Status(resp) => json_status_msg(&resp.body)
                .or_else(|| plain_text_message(&resp.body))
                .or_else(|| resp.reason().map(str::to_string))
                .unwrap_or_else(|| format!("Request failed with status {}", resp.status)),
        }
    }
}

fn json_status_msg(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    value
        .get("status_msg")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|msg| !msg.is_empty())
        .map(str::to_string)
}

fn plain_text_message(body: &str) -> Option<String> {
    let body = body.trim();
    // JSON without status_msg and HTML error pages are not user-facing text.
    if body.is_empty() || body.starts_with(['<', '{', '[']) {
        return None;
    }
    let line = body.lines().next()?.trim();
    Some(line.chars().take(MAX_PLAIN_MESSAGE).collect())
}
