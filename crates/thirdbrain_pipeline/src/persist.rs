//! Best-effort image gathering and persistence of generated bundles.

use crate::context::{ArtParams, PipelineContext};
use std::collections::HashMap;
use thirdbrain_core::ImageArtifact;
use thirdbrain_error::ThirdBrainResult;
use thirdbrain_interface::{ImageGenerator as _, ProgressSink as _};
use thirdbrain_storage::Vault as _;

/// Request images from both providers, best effort.
///
/// A provider that exhausts its retry budget contributes nothing; the other
/// provider's output still flows through. Artifacts keep production order:
/// few-image provider first, then the configurable provider.
pub(crate) async fn gather_images(
    ctx: &PipelineContext,
    prompt: &str,
    params: &ArtParams,
) -> Vec<ImageArtifact> {
    let mut artifacts = Vec::new();

    ctx.sink.info("Drawing images...");
    let few = ctx
        .invoker
        .invoke("few-image provider", || {
            let req = params.few_request(prompt);
            async move { ctx.few_images.generate_images(&req).await }
        })
        .await;
    match few {
        Ok(mut images) => {
            ctx.sink.success("High-fidelity images ready!");
            artifacts.append(&mut images);
        }
        Err(e) => ctx
            .sink
            .error(&format!("Few-image provider failed: {e}")),
    }

    let multi = ctx
        .invoker
        .invoke("multi-image provider", || {
            let req = params.multi_request(prompt);
            async move { ctx.multi_images.generate_images(&req).await }
        })
        .await;
    match multi {
        Ok(mut images) => {
            ctx.sink.success("Configured images ready!");
            artifacts.append(&mut images);
        }
        Err(e) => ctx
            .sink
            .error(&format!("Multi-image provider failed: {e}")),
    }

    artifacts
}

/// Persist one generation bundle under `folder`: an optional text body named
/// `{stem}.txt` plus numbered images named `{stem}_{provider}_{i}.png`.
///
/// Each asset write is independent (a failed upload is reported and
/// skipped, never a placeholder), so the returned asset locations are
/// exactly the successfully uploaded images, in production order.
///
/// # Errors
///
/// Only folder creation aborts the bundle; nothing can land without it.
pub(crate) async fn persist_bundle(
    ctx: &PipelineContext,
    folder: &str,
    stem: &str,
    text_body: Option<&str>,
    artifacts: &[ImageArtifact],
) -> ThirdBrainResult<Vec<String>> {
    ctx.vault.create_folder(folder).await?;

    if let Some(body) = text_body {
        let text_path = format!("{folder}/{stem}.txt");
        if let Err(e) = ctx.vault.upload(&text_path, body.as_bytes()).await {
            ctx.sink
                .error(&format!("An error occurred while saving {text_path}: {e}"));
        }
    }

    let mut asset_urls = Vec::new();
    let mut counters: HashMap<&str, u32> = HashMap::new();

    for artifact in artifacts {
        let provider = artifact.provider().as_str();
        let index = counters.entry(provider).or_insert(0);
        let image_path = format!("{folder}/{stem}_{provider}_{index}.png");
        *index += 1;

        match ctx.vault.upload(&image_path, artifact.data()).await {
            Ok(()) => match ctx.vault.resolve_link(&image_path).await {
                Ok(url) => asset_urls.push(url),
                Err(e) => ctx
                    .sink
                    .error(&format!("Could not link {image_path}: {e}")),
            },
            Err(e) => ctx
                .sink
                .error(&format!("An error occurred while saving {image_path}: {e}")),
        }
    }

    Ok(asset_urls)
}
