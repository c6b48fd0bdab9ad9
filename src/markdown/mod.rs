//! Summary text processing.
//!
//! Raw summaries pass through up to three rewrites before display:
//!
//! ```text
//! raw ──→ normalize_markdown ──→ clean_markdown ──→ science_notation ──→ render_markdown
//!         (Summarize page only)
//! ```

mod cleanup;
mod normalize;
mod notation;
mod render;

pub use cleanup::{clean_markdown, strip_asterisks};
pub use normalize::normalize_markdown;
pub use notation::science_notation;
pub use render::render_markdown;

/// Runs the display pipeline over a raw summary.
///
/// `normalize` enables the structural repair pass used for standalone
/// summaries.
pub fn prepare_summary(raw: &str, normalize: bool) -> String {
    let cleaned = if normalize {
        clean_markdown(&normalize_markdown(raw))
    } else {
        clean_markdown(raw)
    };
    science_notation(&cleaned)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pipeline_with_normalization() {
        let raw = "1. Photosynthesis\n\n\n***Chlorophyll*** : absorbs light\nCO2 -> C6H12O6";
        assert_eq!(
            prepare_summary(raw, true),
            "## Photosynthesis\n\nChlorophyll: absorbs light\nCO₂ → C₆H₁₂O₆"
        );
    }

    #[test]
    fn pipeline_without_normalization_keeps_numbered_lists() {
        let raw = "1. first\n2. second";
        assert_eq!(prepare_summary(raw, false), "1. first\n2. second");
    }
}
