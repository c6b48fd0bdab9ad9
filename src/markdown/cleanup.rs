//! Presentation cleanup applied to every summary before it is shown.

use regex::Regex;
use std::sync::LazyLock;

struct CleanupRules {
    h1: Regex,
    bold_label: Regex,
    blank_runs: Regex,
    bold: Regex,
    italic: Regex,
}

static RULES: LazyLock<CleanupRules> = LazyLock::new(|| CleanupRules {
    h1: Regex::new(r"(?m)^# (.+)$").expect("valid h1 regex"),
    bold_label: Regex::new(r"\*\*([^*\n]{1,60}?):\*\*").expect("valid bold label regex"),
    blank_runs: Regex::new(r"\n{3,}").expect("valid blank run regex"),
    bold: Regex::new(r"\*\*(.+?)\*\*").expect("valid bold regex"),
    // Bullet lines `* item` have no closing star and are left alone.
    italic: Regex::new(r"(^|[^*\n])\*([^*\n]+)\*").expect("valid italic regex"),
});

/// Demotes H1 to H2, unbolds `**Label:**` patterns, strips remaining bold
/// and italic emphasis, and squeezes blank lines.
pub fn clean_markdown(md: &str) -> String {
    let rules = &*RULES;

    let out = rules.h1.replace_all(md, "## $1");
    let out = rules.bold_label.replace_all(&out, "$1:");
    let out = rules.blank_runs.replace_all(&out, "\n\n");
    let out = rules.bold.replace_all(&out, "$1");
    let out = rules.italic.replace_all(&out, "$1$2");

    out.trim().to_string()
}

/// Quiz questions are shown as plain text.
pub fn strip_asterisks(text: &str) -> String {
    text.replace('*', "")
}
