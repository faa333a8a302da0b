//! Identifier formatting and item-name normalization.
//!
//! Everything here is pure: the orchestrator calls these before issuing
//! create calls so that every name and identifier reaching the remote store
//! already satisfies its validation rules.
use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::error::IdentifierError;

/// Maximum length of an item name accepted by the remote store.
pub const MAX_ITEM_NAME_LEN: usize = 100;

/// Name used when sanitization leaves nothing behind.
const FALLBACK_ITEM_NAME: &str = "Item";

// Patterns are literals; compilation cannot fail at runtime.
#[allow(clippy::expect_used)]
static SEPARATOR_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[_-]+").expect("valid separator pattern"));

#[allow(clippy::expect_used)]
static CAMEL_BOUNDARY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([a-z])([A-Z])").expect("valid camel-case pattern"));

#[allow(clippy::expect_used)]
static PAREN_GROUP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\(([^()]*)\)").expect("valid group pattern"));

#[allow(clippy::expect_used)]
static TRAILING_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\((\d+)\)\s*$").expect("valid suffix pattern"));

/// Format a loosely written hex string as a braced, upper-case identifier.
///
/// Every non-hex character is discarded first, so `a1b2…`, `{A1B2-…}` and
/// `a1b2 c3d4 …` all format identically.
///
/// # Examples
///
/// ```
/// use sitecore_provision::naming::format_identifier;
///
/// let id = format_identifier("0437fee244c946a6abe928858d9fee8c").unwrap();
/// assert_eq!(id, "{0437FEE2-44C9-46A6-ABE9-28858D9FEE8C}");
/// assert!(format_identifier("not-an-id").is_err());
/// ```
///
/// # Errors
///
/// Returns [`IdentifierError::InvalidFormat`] unless exactly 32 hex digits
/// remain after stripping.
pub fn format_identifier(input: &str) -> Result<String, IdentifierError> {
    let hex: String = input
        .chars()
        .filter(char::is_ascii_hexdigit)
        .map(|c| c.to_ascii_uppercase())
        .collect();
    if hex.len() != 32 {
        return Err(IdentifierError::InvalidFormat { found: hex.len() });
    }
    let (a, rest) = hex.split_at(8);
    let (b, rest) = rest.split_at(4);
    let (c, rest) = rest.split_at(4);
    let (d, e) = rest.split_at(4);
    Ok(format!("{{{a}-{b}-{c}-{d}-{e}}}"))
}

/// Turn a compact component name into a readable folder name.
///
/// `heroSection`, `hero_section` and `hero-section` all become
/// `Hero Section`.  Applying it to its own output is a no-op.
#[must_use]
pub fn title_case_with_spacing(input: &str) -> String {
    let spaced = SEPARATOR_RUN.replace_all(input, " ");
    let split = CAMEL_BOUNDARY.replace_all(&spaced, "$1 $2");
    split
        .split_whitespace()
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}

/// Rewrite arbitrary text into a valid remote item name.
///
/// The result always matches `^[\w*$][\w\s\-$]*(\(\d+\))?$` and is at most
/// [`MAX_ITEM_NAME_LEN`] characters long.  A single trailing numeric group
/// such as `(2)` survives; every other parenthetical group is dropped.
///
/// # Examples
///
/// ```
/// use sitecore_provision::naming::sanitize_item_name;
///
/// assert_eq!(sanitize_item_name(""), "Item");
/// assert_eq!(sanitize_item_name("Hello, World! 1"), "Hello World 1");
/// assert_eq!(sanitize_item_name("!Name"), "Item Name");
/// assert_eq!(sanitize_item_name("Card (draft) (2)"), "Card(2)");
/// ```
#[must_use]
pub fn sanitize_item_name(raw: &str) -> String {
    let leading_allowed = raw.trim().chars().next().is_none_or(is_valid_first_char);

    let kept: String = raw
        .chars()
        .map(|c| if c.is_whitespace() { ' ' } else { c })
        .filter(|&c| c.is_ascii_alphanumeric() || matches!(c, '_' | ' ' | '-' | '$' | '*' | '(' | ')'))
        .collect();

    // Non-numeric groups go first so that `Name(9)(extra)` still ends in `(9)`.
    let numeric_groups = PAREN_GROUP.replace_all(&kept, |caps: &Captures<'_>| {
        let inner = caps.get(1).map_or("", |m| m.as_str());
        if !inner.is_empty() && inner.bytes().all(|b| b.is_ascii_digit()) {
            caps.get(0).map_or_else(String::new, |m| m.as_str().to_string())
        } else {
            String::new()
        }
    });

    let suffix = TRAILING_NUMBER
        .captures(&numeric_groups)
        .and_then(|caps| caps.get(1))
        .map_or_else(String::new, |m| format!("({})", m.as_str()));

    let without_groups = PAREN_GROUP.replace_all(&numeric_groups, "");
    let base: String = without_groups
        .chars()
        .filter(|&c| c != '(' && c != ')')
        .collect();
    let base = collapse_whitespace(&strip_inner_stars(&collapse_whitespace(&base)));

    let base = if base.is_empty() {
        FALLBACK_ITEM_NAME.to_string()
    } else if !leading_allowed || !base.chars().next().is_some_and(is_valid_first_char) {
        format!("{FALLBACK_ITEM_NAME} {base}")
    } else {
        base
    };

    let budget = MAX_ITEM_NAME_LEN.saturating_sub(suffix.len());
    let truncated: String = base.chars().take(budget).collect();
    format!("{}{suffix}", truncated.trim_end())
}

const fn is_valid_first_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '_' | '*' | '$')
}

/// `*` is only accepted as the first character of a name.
fn strip_inner_stars(s: &str) -> String {
    s.char_indices()
        .filter(|&(i, c)| c != '*' || i == 0)
        .map(|(_, c)| c)
        .collect()
}

fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}
