//! Mock provider implementation for testing.

use super::{GenerationParams, ProviderError, TextProvider};
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

enum MockReply {
    Text(String),
    Upstream { status: u16, body: String },
    Timeout,
}

/// Mock text provider returning a canned reply and counting calls.
pub struct MockTextProvider {
    reply: MockReply,
    calls: AtomicUsize,
    last_prompt: Mutex<Option<String>>,
}

impl MockTextProvider {
    /// Reply to every call with `text`.
    pub fn replying(text: impl Into<String>) -> Self {
        Self::with_reply(MockReply::Text(text.into()))
    }

    /// Fail every call with a non-2xx upstream status.
    pub fn failing_with_status(status: u16, body: impl Into<String>) -> Self {
        Self::with_reply(MockReply::Upstream {
            status,
            body: body.into(),
        })
    }

    /// Fail every call as if the upstream stalled past the timeout.
    pub fn timing_out() -> Self {
        Self::with_reply(MockReply::Timeout)
    }

    fn with_reply(reply: MockReply) -> Self {
        Self {
            reply,
            calls: AtomicUsize::new(0),
            last_prompt: Mutex::new(None),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_prompt(&self) -> Option<String> {
        self.last_prompt
            .lock()
            .map(|guard| guard.clone())
            .unwrap_or(None)
    }
}

#[async_trait]
impl TextProvider for MockTextProvider {
    async fn complete(
        &self,
        prompt: &str,
        _params: &GenerationParams,
    ) -> Result<String, ProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut last) = self.last_prompt.lock() {
            *last = Some(prompt.to_string());
        }

        match &self.reply {
            MockReply::Text(text) => Ok(text.clone()),
            MockReply::Upstream { status, body } => Err(ProviderError::Upstream {
                status: *status,
                body: body.clone(),
            }),
            MockReply::Timeout => Err(ProviderError::Timeout),
        }
    }

    fn name(&self) -> &'static str {
        "mock"
    }
}
