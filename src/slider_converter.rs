use anyhow::{Context, Result};
use log::{debug, info, warn};
use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use std::path::Path;

use crate::file_utils::FileManager;

// @module: Slider markup detection and rewriting

// @const: Two-row slider block regex
// Capture 1: label text, capture 2: value text, capture 3: raw input attributes.
// `\s*` spans newlines, so a block may be spread over several lines; the
// `[^<]`/`[^>]` classes keep every capture inside its own tag.
static SLIDER_BLOCK_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"<div class="slider-control">\s*<div class="slider-label">\s*<span>([^<]+)</span>\s*<span>([^<]+)</span>\s*</div>\s*<input([^>]+)>\s*</div>"#,
    )
    .unwrap()
});

/// Result of one substitution pass over a document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionOutcome {
    /// Rewritten document text
    pub text: String,

    /// Number of slider blocks rewritten
    pub replaced: usize,
}

// @struct: Two-row to three-column slider rewriter
pub struct SliderConverter;

impl SliderConverter {
    /// Rewrite every two-row slider block in the text into the three-column
    /// layout. Regions outside matched blocks are copied through verbatim,
    /// and already-converted markup does not match again.
    pub fn convert_text(content: &str) -> ConversionOutcome {
        let replaced = SLIDER_BLOCK_REGEX.find_iter(content).count();

        let text = SLIDER_BLOCK_REGEX
            .replace_all(content, |caps: &Captures| {
                format!(
                    r#"<div class="slider-control"><div class="slider-label">{}</div><input{}><div class="slider-value">{}</div></div>"#,
                    &caps[1], &caps[3], &caps[2]
                )
            })
            .into_owned();

        ConversionOutcome { text, replaced }
    }

    /// Read the source document, rewrite its slider blocks and write the
    /// result to the destination, overwriting any previous content there.
    pub fn convert_file<P1: AsRef<Path>, P2: AsRef<Path>>(
        input: P1,
        output: P2,
    ) -> Result<ConversionOutcome> {
        let input = input.as_ref();
        let output = output.as_ref();

        debug!("Reading source document: {:?}", input);
        let content = FileManager::read_to_string(input)?;

        let outcome = Self::convert_text(&content);
        if outcome.replaced == 0 {
            // Zero matches is not an error, but an interactive user should notice
            warn!(
                "No two-row slider blocks found in {:?}, output written unchanged",
                input
            );
        } else {
            info!(
                "Rewrote {} slider block(s) into the three-column layout",
                outcome.replaced
            );
        }

        FileManager::write_to_file(output, &outcome.text)
            .with_context(|| format!("Failed to write converted document: {:?}", output))?;

        Ok(outcome)
    }
}
