//! Automatic subject selection.

use crate::context::PipelineContext;
use crate::prompts;
use thirdbrain_core::{GenerateRequestBuilder, SubjectLedger, strip_punctuation};
use thirdbrain_error::{PipelineError, PipelineErrorKind, ThirdBrainResult};
use thirdbrain_interface::{ProgressSink as _, TextGenerator as _};

/// Picks a fresh subject from the text-generation service.
///
/// Candidates colliding with the used-subject ledger (exact match after
/// punctuation stripping and case folding) are rejected and re-requested, up
/// to the context's bound; running out of requests is a terminal error, not
/// a silent reuse.
pub struct SubjectPicker<'a> {
    ctx: &'a PipelineContext,
}

impl<'a> SubjectPicker<'a> {
    /// Create a picker over the shared context.
    pub fn new(ctx: &'a PipelineContext) -> Self {
        Self { ctx }
    }

    /// Request a subject absent from `ledger`.
    ///
    /// # Errors
    ///
    /// Returns `PipelineErrorKind::SubjectExhausted` when every candidate
    /// within the request bound collided, and `EmptyCompletion` when the
    /// service returns a blank candidate.
    #[tracing::instrument(skip_all, fields(used = ledger.len()))]
    pub async fn pick(&self, ledger: &SubjectLedger) -> ThirdBrainResult<String> {
        let bound = self.ctx.subject_requests.max(1);
        self.ctx.sink.info("Selecting random book...");

        for request in 0..bound {
            // The first ask lists the used titles; re-asks emphasize the
            // collision.
            let messages = if request == 0 {
                prompts::book_picker(ledger.titles())
            } else {
                prompts::book_repicker(ledger.titles())
            };
            let req = GenerateRequestBuilder::default()
                .messages(messages)
                .max_tokens(Some(50))
                .build()
                .expect("defaulted request builder cannot fail");

            let response = self
                .ctx
                .invoker
                .invoke("pick subject", || self.ctx.text.generate(&req))
                .await?;

            let candidate = strip_punctuation(&response.content);
            if candidate.is_empty() {
                return Err(PipelineError::new(PipelineErrorKind::EmptyCompletion(
                    "pick subject".to_string(),
                ))
                .into());
            }

            if ledger.contains(&candidate) {
                self.ctx.sink.warn(
                    "Oh, you've read this book already. Choosing a different book...",
                );
                continue;
            }

            self.ctx.sink.success(&candidate);
            return Ok(candidate);
        }

        Err(PipelineError::new(PipelineErrorKind::SubjectExhausted(bound)).into())
    }
}
