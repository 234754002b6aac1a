//! Mock text generator for testing.

use async_trait::async_trait;
use reelscript_core::{
    ClientType, GenerateRequest, GenerateResponse, ReelDuration, ScriptInputs, VideoAngle,
};
use reelscript_error::{ReelscriptResult, UpstreamError, UpstreamErrorKind};
use reelscript_interface::TextGenerator;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Behavior configuration for mock responses.
#[derive(Debug, Clone)]
pub enum MockBehavior {
    /// Return the given text
    Success(String),
    /// Answer without any text
    Empty,
    /// Answer with empty text, as Gemini does when it has nothing to say
    EmptyText,
    /// Fail with the given upstream error
    Error(UpstreamErrorKind),
    /// Never answer
    Pending,
    /// Answer with the text after a delay
    Delayed(Duration, String),
}

/// Mock text generator.
///
/// Clones share the call count and captured requests, so a test can keep a
/// handle after moving the mock into a generator.
#[derive(Debug, Clone)]
pub struct MockTextGenerator {
    behavior: MockBehavior,
    call_count: Arc<Mutex<usize>>,
    requests: Arc<Mutex<Vec<GenerateRequest>>>,
}

impl MockTextGenerator {
    /// Create a mock with custom behavior.
    pub fn new(behavior: MockBehavior) -> Self {
        Self {
            behavior,
            call_count: Arc::new(Mutex::new(0)),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Create a mock that always succeeds with the given text.
    pub fn new_success(text: impl Into<String>) -> Self {
        Self::new(MockBehavior::Success(text.into()))
    }

    /// Create a mock that always fails with the given error.
    #[allow(dead_code)]
    pub fn new_error(kind: UpstreamErrorKind) -> Self {
        Self::new(MockBehavior::Error(kind))
    }

    /// Number of times generate() was called.
    pub fn call_count(&self) -> usize {
        *self.call_count.lock().unwrap()
    }

    /// Every request received, in order.
    #[allow(dead_code)]
    pub fn requests(&self) -> Vec<GenerateRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl TextGenerator for MockTextGenerator {
    async fn generate(&self, req: &GenerateRequest) -> ReelscriptResult<GenerateResponse> {
        *self.call_count.lock().unwrap() += 1;
        self.requests.lock().unwrap().push(req.clone());

        match &self.behavior {
            MockBehavior::Success(text) => Ok(GenerateResponse {
                text: Some(text.clone()),
            }),
            MockBehavior::Empty => Ok(GenerateResponse { text: None }),
            MockBehavior::EmptyText => Ok(GenerateResponse {
                text: Some(String::new()),
            }),
            MockBehavior::Error(kind) => Err(UpstreamError::new(kind.clone()).into()),
            MockBehavior::Pending => std::future::pending().await,
            MockBehavior::Delayed(delay, text) => {
                tokio::time::sleep(*delay).await;
                Ok(GenerateResponse {
                    text: Some(text.clone()),
                })
            }
        }
    }

    fn provider_name(&self) -> &'static str {
        "mock"
    }

    fn model_name(&self) -> &str {
        "mock-model"
    }
}

/// Valid inputs for a typical request.
pub fn sample_inputs() -> ScriptInputs {
    ScriptInputs::from_choices(
        ClientType::Investment,
        "New Cairo",
        VideoAngle::Comparison,
        ReelDuration::Thirty,
    )
}
