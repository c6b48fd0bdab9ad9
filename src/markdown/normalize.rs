//! Structural repair of loosely formatted summary markdown.
//!
//! Summaries often arrive with numbered section titles instead of headings,
//! `***` used as bullets, and bold markers padded with spaces. Each rule is
//! an independent rewrite applied in order.

use regex::{Captures, Regex};
use std::sync::LazyLock;

struct NormalizeRules {
    numbered_heading: Regex,
    triple_star_bullet: Regex,
    triple_star_wrap: Regex,
    padded_bold: Regex,
    bold_then_colon: Regex,
    dash_bullet: Regex,
    blank_runs: Regex,
}

static RULES: LazyLock<NormalizeRules> = LazyLock::new(|| NormalizeRules {
    numbered_heading: Regex::new(r"(?m)^[ \t]*\d+\.[ \t]+(.*)$")
        .expect("valid numbered heading regex"),
    triple_star_bullet: Regex::new(r"(?m)^[ \t]*\*{3}[ \t]+(.*)$")
        .expect("valid triple star bullet regex"),
    triple_star_wrap: Regex::new(r"\*{3}([^*\n]+)\*{3}").expect("valid triple star regex"),
    padded_bold: Regex::new(r"\*\*\s*([^*\n][^*]*?)\s*\*\*").expect("valid padded bold regex"),
    bold_then_colon: Regex::new(r"\*\*([^*\n]+?)\*\*[ \t]*:").expect("valid bold colon regex"),
    dash_bullet: Regex::new(r"(?m)^[ \t]*-[ \t]*").expect("valid dash bullet regex"),
    blank_runs: Regex::new(r"\n{3,}").expect("valid blank run regex"),
});

/// Repairs headings, bullets and bold markers in model-written markdown.
///
/// Rules, in order:
/// 1. `1. Title` lines become `## Title`
/// 2. `*** text` lines become `- text`
/// 3. `***Term***` becomes `**Term**`
/// 4. whitespace inside `** Term **` is trimmed
/// 5. `**Term** :` becomes `**Term:**`
/// 6. a lone `*` becomes `•`
/// 7. whitespace around a leading `-` collapses to single spaces
/// 8. runs of blank lines collapse to one, and the result is trimmed
pub fn normalize_markdown(input: &str) -> String {
    let rules = &*RULES;

    let s = rules.numbered_heading.replace_all(input, "## $1");
    let s = rules.triple_star_bullet.replace_all(&s, "- $1");
    let s = rules.triple_star_wrap.replace_all(&s, "**$1**");
    let s = rules
        .padded_bold
        .replace_all(&s, |caps: &Captures| format!("**{}**", caps[1].trim()));
    let s = rules.bold_then_colon.replace_all(&s, "**$1:**");
    let s = lone_stars_to_dots(&s);
    let s = rules.dash_bullet.replace_all(&s, |caps: &Captures| {
        collapse_whitespace(&caps[0])
    });
    let s = rules.blank_runs.replace_all(&s, "\n\n");

    s.trim().to_string()
}

/// Replaces every `*` that has no `*` on either side with `•`.
fn lone_stars_to_dots(input: &str) -> String {
    let chars: Vec<char> = input.chars().collect();
    let mut out = String::with_capacity(input.len());

    for (i, &c) in chars.iter().enumerate() {
        let prev_star = i > 0 && chars[i - 1] == '*';
        let next_star = chars.get(i + 1) == Some(&'*');
        if c == '*' && !prev_star && !next_star {
            out.push('•');
        } else {
            out.push(c);
        }
    }

    out
}

fn collapse_whitespace(segment: &str) -> String {
    let mut out = String::with_capacity(segment.len());
    let mut in_space = false;
    for c in segment.chars() {
        if c.is_whitespace() {
            if !in_space {
                out.push(' ');
            }
            in_space = true;
        } else {
            out.push(c);
            in_space = false;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbered_lines_become_headings() {
        assert_eq!(
            normalize_markdown("1. Cell Structure\nText"),
            "## Cell Structure\nText"
        );
        assert_eq!(normalize_markdown("  12.  Energy"), "## Energy");
    }

    #[test]
    fn triple_star_lines_become_bullets() {
        assert_eq!(
            normalize_markdown("*** Cell Wall: ** rigid layer"),
            "- Cell Wall: ** rigid layer"
        );
        assert_eq!(
            normalize_markdown("*** **Cell Wall:** rigid"),
            "- **Cell Wall:** rigid"
        );
    }

    #[test]
    fn triple_star_wrap_becomes_bold() {
        assert_eq!(normalize_markdown("a ***Term*** b"), "a **Term** b");
    }

    #[test]
    fn padded_bold_is_trimmed() {
        assert_eq!(normalize_markdown("** Term **"), "**Term**");
    }

    #[test]
    fn colon_after_bold_moves_inside() {
        assert_eq!(
            normalize_markdown("**Osmosis** : diffusion of water"),
            "**Osmosis:** diffusion of water"
        );
    }

    #[test]
    fn lone_star_becomes_dot() {
        assert_eq!(lone_stars_to_dots("a * b ** c"), "a • b ** c");
        assert_eq!(lone_stars_to_dots("*x"), "•x");
        assert_eq!(lone_stars_to_dots("x*"), "x•");
    }

    #[test]
    fn dash_bullets_are_tidied() {
        assert_eq!(normalize_markdown("text\n-   item"), "text\n- item");
        assert_eq!(normalize_markdown("text\n  -\titem"), "text\n - item");
    }

    #[test]
    fn blank_runs_are_squeezed_and_trimmed() {
        assert_eq!(normalize_markdown("\n\na\n\n\n\nb\n\n"), "a\n\nb");
    }

    #[test]
    fn empty_input_stays_empty() {
        assert_eq!(normalize_markdown(""), "");
    }
}
