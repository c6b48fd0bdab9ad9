//! Science notation: arrows and chemical formula subscripts.

use regex::{Captures, Regex};
use std::sync::LazyLock;

const ELEMENTS: &[&str] = &[
    "H", "He", "Li", "Be", "B", "C", "N", "O", "F", "Ne", "Na", "Mg", "Al", "Si", "P", "S", "Cl",
    "Ar", "K", "Ca", "Sc", "Ti", "V", "Cr", "Mn", "Fe", "Co", "Ni", "Cu", "Zn", "Ga", "Ge", "As",
    "Se", "Br", "Kr", "Rb", "Sr", "Y", "Zr", "Nb", "Mo", "Tc", "Ru", "Rh", "Pd", "Ag", "Cd", "In",
    "Sn", "Sb", "Te", "I", "Xe", "Cs", "Ba", "La", "Ce", "Pr", "Nd", "Pm", "Sm", "Eu", "Gd", "Tb",
    "Dy", "Ho", "Er", "Tm", "Yb", "Lu", "Hf", "Ta", "W", "Re", "Os", "Ir", "Pt", "Au", "Hg", "Tl",
    "Pb", "Bi", "Po", "At", "Rn", "Fr", "Ra", "Ac", "Th", "Pa", "U", "Np", "Pu", "Am", "Cm", "Bk",
    "Cf", "Es", "Fm", "Md", "No", "Lr", "Rf", "Db", "Sg", "Bh", "Hs", "Mt", "Ds", "Rg", "Cn", "Nh",
    "Fl", "Mc", "Lv", "Ts", "Og",
];

struct NotationRules {
    arrow: Regex,
    formula: Regex,
    element: Regex,
}

static RULES: LazyLock<NotationRules> = LazyLock::new(|| NotationRules {
    // Longer arrows first: alternation is leftmost-first.
    arrow: Regex::new(r"<=>|<->|-->|<--|->|<-|=>").expect("valid arrow regex"),
    // Optional stoichiometric coefficient, then the formula itself.
    formula: Regex::new(r"\b(\d*)((?:[A-Z][a-z]?\d*)+)\b").expect("valid formula regex"),
    element: Regex::new(r"([A-Z][a-z]?)(\d*)").expect("valid element regex"),
});

/// Rewrites ASCII arrows and chemical formulas in prose.
///
/// Fenced code blocks and inline code spans are left untouched.
pub fn science_notation(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_fence = false;

    for (i, line) in text.split('\n').enumerate() {
        if i > 0 {
            out.push('\n');
        }

        let trimmed = line.trim_start();
        if trimmed.starts_with("```") || trimmed.starts_with("~~~") {
            in_fence = !in_fence;
            out.push_str(line);
            continue;
        }
        if in_fence {
            out.push_str(line);
            continue;
        }

        // Odd segments sit between backticks.
        for (n, segment) in line.split('`').enumerate() {
            if n > 0 {
                out.push('`');
            }
            if n % 2 == 0 {
                out.push_str(&rewrite_prose(segment));
            } else {
                out.push_str(segment);
            }
        }
    }

    out
}

fn rewrite_prose(segment: &str) -> String {
    let rules = &*RULES;
    let arrows = rules.arrow.replace_all(segment, |caps: &Captures| {
        match &caps[0] {
            "<=>" => "⇌",
            "<->" => "↔",
            "-->" | "->" => "→",
            "<--" | "<-" => "←",
            _ => "⇒",
        }
        .to_string()
    });
    rules
        .formula
        .replace_all(&arrows, |caps: &Captures| match subscript_formula(&caps[2]) {
            Some(formula) => format!("{}{}", &caps[1], formula),
            None => caps[0].to_string(),
        })
        .into_owned()
}

/// `C6H12O6` becomes `C₆H₁₂O₆`. Returns `None` when the token is not a
/// formula: no digits, or a symbol that is not an element.
fn subscript_formula(token: &str) -> Option<String> {
    let rules = &*RULES;
    let mut out = String::with_capacity(token.len() * 2);
    let mut has_count = false;

    for caps in rules.element.captures_iter(token) {
        let symbol = &caps[1];
        if !ELEMENTS.contains(&symbol) {
            return None;
        }
        out.push_str(symbol);

        let count = &caps[2];
        if count.starts_with('0') {
            return None;
        }
        if !count.is_empty() {
            has_count = true;
            out.extend(count.chars().map(subscript_digit));
        }
    }

    has_count.then_some(out)
}

fn subscript_digit(c: char) -> char {
    c.to_digit(10)
        .and_then(|d| char::from_u32(0x2080 + d))
        .unwrap_or(c)
}
