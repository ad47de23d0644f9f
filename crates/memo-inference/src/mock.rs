//! Mock generation backend for deterministic testing.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use memo_inference::mock::MockGenerationBackend;
//!
//! let backend = MockGenerationBackend::new().with_fixed_response("A summary.");
//! let text = backend.generate("prompt").await.unwrap();
//! assert_eq!(text, "A summary.");
//! assert_eq!(backend.prompts(), vec!["prompt".to_string()]);
//! ```

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use memo_core::{Error, GenerationBackend, Result};

/// Mock generation backend for testing.
#[derive(Clone)]
pub struct MockGenerationBackend {
    response: String,
    failure: Option<String>,
    prompts: Arc<Mutex<Vec<String>>>,
}

impl Default for MockGenerationBackend {
    fn default() -> Self {
        Self {
            response: "Mock summary".to_string(),
            failure: None,
            prompts: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

impl MockGenerationBackend {
    /// Create a new mock backend with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a fixed response for generation requests.
    pub fn with_fixed_response(mut self, response: impl Into<String>) -> Self {
        self.response = response.into();
        self
    }

    /// Fail every generation request with this message.
    pub fn with_failure(mut self, message: impl Into<String>) -> Self {
        self.failure = Some(message.into());
        self
    }

    /// Prompts received so far, in order.
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl GenerationBackend for MockGenerationBackend {
    async fn generate(&self, prompt: &str) -> Result<String> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        match &self.failure {
            Some(msg) => Err(Error::Inference(msg.clone())),
            None => Ok(self.response.clone()),
        }
    }

    fn model_name(&self) -> &str {
        "mock"
    }
}
