//! Typed projection of e-book artifact records.
//!
//! E-book records grow schemalessly (`chapter_1`, `chapter_2`,
//! `Prompt_Cover`, `Cover`, ...), one field per named sub-artifact. This
//! module gives that shape a typed view: an outline, a cover section, and an
//! ordered list of chapters, each with its manuscript text, image prompt,
//! and asset list. Conversion is lossless in both directions so existing
//! records keep reading.

use crate::{ArtifactRecord, FieldValue, Fields};
use serde::{Deserialize, Serialize};
use thirdbrain_error::{StoreError, StoreErrorKind, ThirdBrainResult};

/// Field holding the markdown table of contents.
const OUTLINE: &str = "outline";
/// Field holding the intended audience description.
const TARGET_AUDIENCE: &str = "target_audience";
/// Prefix of per-chapter manuscript fields.
const CHAPTER_PREFIX: &str = "chapter_";
/// Prefix of per-section image-prompt fields.
const PROMPT_PREFIX: &str = "Prompt_";
/// Display label of the cover section.
pub(crate) const COVER: &str = "Cover";

/// Artwork attached to one e-book section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    /// The image prompt the artwork was generated from
    pub prompt: Option<String>,
    /// Asset locations in display order
    pub asset_urls: Vec<String>,
}

/// One written chapter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chapter {
    /// 1-based chapter number
    pub number: u32,
    /// Manuscript text
    pub text: String,
    /// Artwork for this chapter
    pub art: Section,
}

impl Chapter {
    /// Display label of this chapter ("Chapter 3").
    pub fn label(&self) -> String {
        format!("Chapter {}", self.number)
    }
}

/// Typed view of one e-book record.
///
/// # Examples
///
/// ```
/// use thirdbrain_store::{ArtifactRecord, EbookRecord};
///
/// let record = ArtifactRecord::new("The Focused Mind")
///     .with_field("outline", "# The Focused Mind\n1. Introduction")
///     .with_field("chapter_1", "## Introduction\n...");
///
/// let ebook = EbookRecord::from_record(&record).unwrap();
/// assert_eq!(ebook.chapters.len(), 1);
/// assert_eq!(ebook.chapters[0].label(), "Chapter 1");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EbookRecord {
    /// The e-book title, also the record key
    pub title: String,
    /// Markdown table of contents
    pub outline: Option<String>,
    /// Intended audience description
    pub target_audience: Option<String>,
    /// Cover artwork
    pub cover: Section,
    /// Written chapters, ordered by number
    pub chapters: Vec<Chapter>,
}

impl EbookRecord {
    /// Create an empty e-book view.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    /// Build the typed view from a schemaless record.
    ///
    /// # Errors
    ///
    /// Returns `StoreErrorKind::InvalidField` when a chapter field holds a
    /// list, an asset field holds text, or a chapter suffix is not a number.
    pub fn from_record(record: &ArtifactRecord) -> ThirdBrainResult<Self> {
        let mut ebook = Self::new(record.key.clone());
        ebook.outline = record.text(OUTLINE).map(str::to_string);
        ebook.target_audience = record.text(TARGET_AUDIENCE).map(str::to_string);

        ebook.cover = Section {
            prompt: record
                .text(&format!("{PROMPT_PREFIX}{COVER}"))
                .map(str::to_string),
            asset_urls: record.list(COVER).map(<[String]>::to_vec).unwrap_or_default(),
        };

        let mut chapters = Vec::new();
        for name in record.field_names_with_prefix(CHAPTER_PREFIX) {
            let suffix = &name[CHAPTER_PREFIX.len()..];
            let number: u32 = suffix.parse().map_err(|_| {
                StoreError::new(StoreErrorKind::InvalidField {
                    field: name.to_string(),
                    message: "chapter suffix is not a number".to_string(),
                })
            })?;
            let text = record.text(name).ok_or_else(|| {
                StoreError::new(StoreErrorKind::InvalidField {
                    field: name.to_string(),
                    message: "chapter field must be text".to_string(),
                })
            })?;

            let label = format!("Chapter {number}");
            let art = Section {
                prompt: record
                    .text(&format!("{PROMPT_PREFIX}{label}"))
                    .map(str::to_string),
                asset_urls: record.list(&label).map(<[String]>::to_vec).unwrap_or_default(),
            };

            chapters.push(Chapter {
                number,
                text: text.to_string(),
                art,
            });
        }
        chapters.sort_by_key(|c| c.number);
        ebook.chapters = chapters;

        Ok(ebook)
    }

    /// Project the typed view back into a field map.
    pub fn to_fields(&self) -> Fields {
        let mut fields = Fields::new();
        if let Some(outline) = &self.outline {
            fields.insert(OUTLINE.to_string(), outline.clone().into());
        }
        if let Some(audience) = &self.target_audience {
            fields.insert(TARGET_AUDIENCE.to_string(), audience.clone().into());
        }
        fields.extend(section_art_fields(COVER, &self.cover));
        for chapter in &self.chapters {
            fields.insert(
                chapter_field(chapter.number),
                chapter.text.clone().into(),
            );
            fields.extend(section_art_fields(&chapter.label(), &chapter.art));
        }
        fields
    }

    /// The number the next written chapter will get.
    pub fn next_chapter_number(&self) -> u32 {
        self.chapters.last().map(|c| c.number + 1).unwrap_or(1)
    }
}

/// Field name of chapter `number`'s manuscript.
pub(crate) fn chapter_field(number: u32) -> String {
    format!("{CHAPTER_PREFIX}{number}")
}

/// Field updates recording one section's artwork.
pub(crate) fn section_art_fields(label: &str, section: &Section) -> Fields {
    let mut fields = Fields::new();
    if let Some(prompt) = &section.prompt {
        fields.insert(format!("{PROMPT_PREFIX}{label}"), prompt.clone().into());
    }
    if !section.asset_urls.is_empty() {
        fields.insert(
            label.to_string(),
            FieldValue::List(section.asset_urls.clone()),
        );
    }
    fields
}
