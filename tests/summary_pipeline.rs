//! Raw service summaries through cleanup and rendering.

use ratatui::style::Style;
use ratatui::text::Line;
use studyspark::markdown::{prepare_summary, render_markdown};

fn rendered_text(markdown: &str) -> Vec<String> {
    render_markdown(markdown, Style::default())
        .iter()
        .map(|line: &Line| line.spans.iter().map(|s| s.content.as_ref()).collect())
        .collect()
}

#[test]
fn study_summary_is_cleaned_and_rendered() {
    let raw = "# Cell Biology\n\n**Mitochondria:** make ATP from C6H12O6.\n\n\n\n* organelles\n* membranes";

    let prepared = prepare_summary(raw, false);
    assert_eq!(
        prepared,
        "## Cell Biology\n\nMitochondria: make ATP from C₆H₁₂O₆.\n\n* organelles\n* membranes"
    );

    assert_eq!(
        rendered_text(&prepared),
        vec![
            "Cell Biology",
            "",
            "Mitochondria: make ATP from C₆H₁₂O₆.",
            "",
            "• organelles",
            "• membranes",
        ]
    );
}

#[test]
fn standalone_summary_gets_headings_from_numbered_titles() {
    let raw = "1. Overview\n\nWater -> steam at 100 C.\n\n2. Reactions\n\n2H2 + O2 -> 2H2O";

    let prepared = prepare_summary(raw, true);
    assert_eq!(
        prepared,
        "## Overview\n\nWater → steam at 100 C.\n\n## Reactions\n\n2H₂ + O₂ → 2H₂O"
    );

    let text = rendered_text(&prepared);
    assert_eq!(text[0], "Overview");
    assert!(text.contains(&"Reactions".to_string()));
    assert!(text.contains(&"2H₂ + O₂ → 2H₂O".to_string()));
}

#[test]
fn inline_code_survives_the_pipeline() {
    let prepared = prepare_summary("Type `a -> H2O` then H2O -> ice", true);
    assert_eq!(prepared, "Type `a -> H2O` then H₂O → ice");

    let text = rendered_text(&prepared).join("\n");
    assert!(text.contains("a -> H2O"));
    assert!(text.contains("H₂O → ice"));
}
