//! Shared pipeline context.

use std::sync::Arc;
use thirdbrain_core::{ImageRequest, ImageRequestBuilder};
use thirdbrain_interface::{ImageGenerator, ProgressSink, TextGenerator, TracingSink};
use thirdbrain_retry::{Invoker, RetryConfig};
use thirdbrain_storage::Vault;
use thirdbrain_store::ArtifactStore;

/// Caller-supplied image parameters.
///
/// Count, dimensions, step budget, and engine come from the caller's
/// settings surface, not from pipeline logic. The few-image provider
/// receives `few_samples` at a fixed high-fidelity size; the configurable
/// provider receives the full set.
#[derive(Debug, Clone, PartialEq)]
pub struct ArtParams {
    /// Images requested from the few-image provider
    pub few_samples: u32,
    /// Edge length for the few-image provider (square output)
    pub few_size: u32,
    /// Images requested from the configurable provider
    pub samples: u32,
    /// Output width for the configurable provider
    pub width: u32,
    /// Output height for the configurable provider
    pub height: u32,
    /// Diffusion step budget for the configurable provider
    pub steps: u32,
    /// Engine identifier for the configurable provider
    pub engine: String,
}

impl Default for ArtParams {
    fn default() -> Self {
        Self {
            few_samples: 1,
            few_size: 1024,
            samples: 2,
            width: 512,
            height: 512,
            steps: 30,
            engine: "stable-diffusion-v1-5".to_string(),
        }
    }
}

impl ArtParams {
    /// Request for the few-image provider.
    pub(crate) fn few_request(&self, prompt: &str) -> ImageRequest {
        ImageRequestBuilder::default()
            .prompt(prompt)
            .samples(self.few_samples)
            .width(self.few_size)
            .height(self.few_size)
            .build()
            .expect("image request builder with prompt set cannot fail")
    }

    /// Request for the configurable provider.
    pub(crate) fn multi_request(&self, prompt: &str) -> ImageRequest {
        ImageRequestBuilder::default()
            .prompt(prompt)
            .samples(self.samples)
            .width(self.width)
            .height(self.height)
            .steps(self.steps)
            .engine(self.engine.clone())
            .build()
            .expect("image request builder with prompt set cannot fail")
    }
}

/// The collaborators every pipeline runs against.
///
/// Construct with [`PipelineContext::new`], then chain `with_*` methods for
/// the optional pieces.
///
/// # Example
///
/// ```rust,ignore
/// let ctx = PipelineContext::new(text, few_images, multi_images, vault, store)
///     .with_long_text(long_text)
///     .with_sink(sink);
/// let summarizer = BookSummarizer::new(Arc::new(ctx));
/// ```
pub struct PipelineContext {
    pub(crate) invoker: Invoker,
    pub(crate) text: Arc<dyn TextGenerator>,
    pub(crate) long_text: Arc<dyn TextGenerator>,
    pub(crate) few_images: Arc<dyn ImageGenerator>,
    pub(crate) multi_images: Arc<dyn ImageGenerator>,
    pub(crate) vault: Arc<dyn Vault>,
    pub(crate) store: Arc<dyn ArtifactStore>,
    pub(crate) sink: Arc<dyn ProgressSink>,
    pub(crate) subject_requests: u32,
}

impl PipelineContext {
    /// Create a context with default retry configuration and tracing-backed
    /// progress reporting.
    ///
    /// The long-form text model defaults to the short-form one; use
    /// [`Self::with_long_text`] to route summaries and chapters to a
    /// long-context model.
    pub fn new(
        text: Arc<dyn TextGenerator>,
        few_images: Arc<dyn ImageGenerator>,
        multi_images: Arc<dyn ImageGenerator>,
        vault: Arc<dyn Vault>,
        store: Arc<dyn ArtifactStore>,
    ) -> Self {
        Self {
            invoker: Invoker::new(RetryConfig::default()),
            long_text: text.clone(),
            text,
            few_images,
            multi_images,
            vault,
            store,
            sink: Arc::new(TracingSink),
            subject_requests: 3,
        }
    }

    /// Route long-form steps to a dedicated model.
    pub fn with_long_text(mut self, long_text: Arc<dyn TextGenerator>) -> Self {
        self.long_text = long_text;
        self
    }

    /// Replace the invoker (retry budget, delay, timeout).
    pub fn with_invoker(mut self, invoker: Invoker) -> Self {
        self.invoker = invoker;
        self
    }

    /// Replace the progress sink.
    pub fn with_sink(mut self, sink: Arc<dyn ProgressSink>) -> Self {
        self.sink = sink;
        self
    }

    /// Bound on subject re-requests when candidates keep colliding.
    pub fn with_subject_requests(mut self, subject_requests: u32) -> Self {
        self.subject_requests = subject_requests;
        self
    }
}
