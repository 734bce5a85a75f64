//! Request and artifact types for image generation.

use serde::{Deserialize, Serialize};

/// Parameters for one image-generation call.
///
/// Count, dimensions, and step budget are caller-supplied configuration;
/// providers ignore the fields they have no equivalent for.
///
/// # Examples
///
/// ```
/// use thirdbrain_core::ImageRequestBuilder;
///
/// let request = ImageRequestBuilder::default()
///     .prompt("A lighthouse in a storm, oil on canvas")
///     .samples(2u32)
///     .width(512u32)
///     .height(512u32)
///     .build()
///     .unwrap();
///
/// assert_eq!(request.samples, 2);
/// ```
#[derive(
    Debug, Clone, PartialEq, Serialize, Deserialize, derive_builder::Builder,
)]
pub struct ImageRequest {
    /// The textual depiction to render
    #[builder(setter(into))]
    pub prompt: String,
    /// Number of images to produce
    #[builder(default = "1")]
    pub samples: u32,
    /// Output width in pixels
    #[builder(default = "512")]
    pub width: u32,
    /// Output height in pixels
    #[builder(default = "512")]
    pub height: u32,
    /// Diffusion step budget
    #[builder(default = "30")]
    pub steps: u32,
    /// Prompt adherence scale
    #[builder(default = "7.0")]
    pub cfg_scale: f32,
    /// Engine identifier for engines-based providers
    #[builder(setter(into), default = "String::from(\"stable-diffusion-v1-5\")")]
    pub engine: String,
}

/// One decoded image produced by a generation service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, derive_getters::Getters)]
pub struct ImageArtifact {
    /// Short provider label, used in persisted file names (e.g. "dalle")
    provider: String,
    /// MIME type of the image data
    mime: String,
    /// Decoded binary image data
    data: Vec<u8>,
}

impl ImageArtifact {
    /// Create a new artifact from decoded bytes.
    pub fn new(provider: impl Into<String>, mime: impl Into<String>, data: Vec<u8>) -> Self {
        Self {
            provider: provider.into(),
            mime: mime.into(),
            data,
        }
    }

    /// Consume the artifact, returning the raw bytes.
    pub fn into_data(self) -> Vec<u8> {
        self.data
    }
}
