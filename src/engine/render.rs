//! Template rendering.
//!
//! Turns the winning pair's right side into output text:
//!
//! ```text
//! right side ──┬─ callable        -> transform(&MatchData)
//!              ├─ literal         -> text unchanged, captures ignored
//!              └─ template        -> substitute markers
//!                   $N     indexed group N (1-based)
//!                   {name} named group
//! ```
//!
//! Markers are found in a single left-to-right scan of the original template,
//! so text inserted for one marker is never scanned again. `$N` takes the
//! longest run of digits that names an existing group: with twelve groups
//! `$12` is group 12, with one group it is group 1 followed by `2`.
//!
//! A marker whose group exists but did not participate renders as `""`. A
//! marker naming a group the pattern does not declare is kept as written.

use super::matcher::MatchData;
use crate::{BipartitePair, Pattern};
use regex::{Captures, Regex};

/// Render the output of `pair` for a successful match.
pub(crate) fn render(pair: &BipartitePair, data: &MatchData<'_, '_>) -> String {
    match &pair.transform {
        Some(transform) => transform(data),
        None => render_template(&pair.right, data),
    }
}

/// Render a right pattern with the captured groups in `data`.
pub(crate) fn render_template(right: &Pattern, data: &MatchData<'_, '_>) -> String {
    if right.is_literal() {
        return right.text.clone();
    }

    markers()
        .replace_all(&right.text, |caps: &Captures<'_>| {
            if let Some(digits) = caps.get(1).map(|m| m.as_str()) {
                return match positional(digits, data) {
                    Some((value, used)) => format!("{value}{}", &digits[used..]),
                    None => caps[0].to_string(),
                };
            }
            let name = &caps[2];
            if data.has_group(name) { data.name(name).unwrap_or("").to_string() } else { caps[0].to_string() }
        })
        .into_owned()
}

/// Replacement for the longest prefix of `digits` that is a group index,
/// with the number of digits it consumed. `None` when no prefix is a group.
fn positional<'h>(digits: &str, data: &MatchData<'_, 'h>) -> Option<(&'h str, usize)> {
    if digits.starts_with('0') {
        return None;
    }
    (1..=digits.len()).rev().find_map(|len| {
        let index: usize = digits[..len].parse().ok()?;
        (index <= data.group_count()).then(|| (data.get(index).unwrap_or(""), len))
    })
}

/// Turn a template into regex source for classification.
///
/// Markers are blanked out, then every brace that is not part of a
/// `{m}`, `{m,}` or `{m,n}` repetition is escaped, so `fn $1() {}` compiles
/// while `(unbalanced` still does not.
pub(crate) fn neutralize_markers(template: &str) -> String {
    let blanked = markers().replace_all(template, "x");
    braces()
        .replace_all(&blanked, |caps: &Captures<'_>| match &caps[0] {
            "{" => r"\{".to_string(),
            "}" => r"\}".to_string(),
            kept => kept.to_string(),
        })
        .into_owned()
}

/// `$N` in group 1, `{name}` in group 2. Names use the characters the regex
/// crate allows in group names.
fn markers() -> &'static Regex {
    regex!(r"\$([0-9]+)|\{([_\p{L}][_.\[\]\p{L}\p{N}]*)\}")
}

/// Escape sequences, counted repetitions, or a lone brace.
fn braces() -> &'static Regex {
    regex!(r"(?s)\\.|\{[0-9]+(?:,[0-9]*)?\}|[{}]")
}
