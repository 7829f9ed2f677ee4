//! Pattern-anchored text patching.
//!
//! A locator pattern carries three capture groups: the literal prefix up to
//! the opening delimiter, the value to rewrite, and the literal suffix from
//! the closing delimiter on. Only the first match is ever touched and every
//! byte outside the matched span is copied through unchanged.

use regex::{Captures, Regex, RegexBuilder};

use crate::error::{BumpError, Result};
use crate::version::bump_patch;

/// Capture group holding the value being rewritten.
pub const VALUE_GROUP: usize = 2;

/// Old and new version strings for one patched document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateResult {
    pub old: String,
    pub new: String,
}

/// Compile a locator pattern in multi-line mode.
pub fn compile(pattern: &str) -> Result<Regex> {
    let regex = RegexBuilder::new(pattern).multi_line(true).build()?;
    if regex.captures_len() <= VALUE_GROUP + 1 {
        return Err(BumpError::pattern(format!(
            "Expected three capture groups in {}",
            pattern
        )));
    }
    Ok(regex)
}

/// Replace the first match of `pattern` in `text`.
///
/// `transform` receives the captures and returns the replacement for the
/// whole matched span. Returns the patched text together with the original
/// content of the value group.
///
/// # Returns
/// * `Ok((new_text, old_value))` - Patched document and the pre-transform value
/// * `Err(BumpError::NotFound)` - If nothing in `text` matches `pattern`
pub fn replace_once<F>(pattern: &Regex, text: &str, transform: F) -> Result<(String, String)>
where
    F: FnOnce(&Captures<'_>) -> Result<String>,
{
    let captures = pattern
        .captures(text)
        .ok_or_else(|| BumpError::not_found(pattern.as_str()))?;

    let span = captures
        .get(0)
        .ok_or_else(|| BumpError::not_found(pattern.as_str()))?;
    let old_value = captures
        .get(VALUE_GROUP)
        .map(|m| m.as_str().to_string())
        .ok_or_else(|| {
            BumpError::pattern(format!("Value group did not match in {}", pattern.as_str()))
        })?;

    let replacement = transform(&captures)?;

    let mut updated = String::with_capacity(text.len() + replacement.len());
    updated.push_str(&text[..span.start()]);
    updated.push_str(&replacement);
    updated.push_str(&text[span.end()..]);

    Ok((updated, old_value))
}

/// Bump the patch component of the value group, keeping prefix and suffix verbatim.
pub fn bump_value(pattern: &Regex, text: &str) -> Result<(String, UpdateResult)> {
    let mut bumped = String::new();
    let (updated, old) = replace_once(pattern, text, |caps| {
        let prefix = caps.get(1).map_or("", |m| m.as_str());
        let value = caps.get(VALUE_GROUP).map_or("", |m| m.as_str());
        let suffix = caps.get(3).map_or("", |m| m.as_str());
        bumped = bump_patch(value)?;
        Ok(format!("{}{}{}", prefix, bumped, suffix))
    })?;

    Ok((updated, UpdateResult { old, new: bumped }))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SOLUTION_PATTERN: &str = r"(<Version>)([^<]+)(</Version>)";

    #[test]
    fn test_replace_once_only_first_match() {
        let re = compile(SOLUTION_PATTERN).unwrap();
        let text = "<Version>1.0.0</Version>\n<Version>1.0.0</Version>\n";
        let (updated, result) = bump_value(&re, text).unwrap();
        assert_eq!(
            updated,
            "<Version>1.0.1</Version>\n<Version>1.0.0</Version>\n"
        );
        assert_eq!(result.old, "1.0.0");
        assert_eq!(result.new, "1.0.1");
    }

    #[test]
    fn test_replace_once_not_found() {
        let re = compile(SOLUTION_PATTERN).unwrap();
        let err = bump_value(&re, "<Solution></Solution>").unwrap_err();
        match err {
            BumpError::NotFound(pattern) => assert_eq!(pattern, SOLUTION_PATTERN),
            other => panic!("expected NotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_replace_once_preserves_surrounding_bytes() {
        let re = compile(SOLUTION_PATTERN).unwrap();
        let before = "\u{feff}<?xml version=\"1.0\"?>\r\n  <Version>9.9.9</Version>\r\n\t tail é";
        let (after, _) = bump_value(&re, before).unwrap();
        let start = before.find("9.9.9").unwrap();
        assert_eq!(&after[..start], &before[..start]);
        assert_eq!(&after[start..start + 6], "9.9.10");
        assert_eq!(&after[start + 6..], &before[start + 5..]);
    }

    #[test]
    fn test_replace_once_returns_old_value_from_transform_input() {
        let re = compile(SOLUTION_PATTERN).unwrap();
        let (updated, old) =
            replace_once(&re, "<Version>1.2</Version>", |_| Ok("X".to_string())).unwrap();
        assert_eq!(updated, "X");
        assert_eq!(old, "1.2");
    }

    #[test]
    fn test_transform_error_propagates() {
        let re = compile(SOLUTION_PATTERN).unwrap();
        let err = bump_value(&re, "<Version>1.beta.0</Version>").unwrap_err();
        assert!(matches!(err, BumpError::Parse { .. }));
    }

    #[test]
    fn test_compile_requires_three_groups() {
        assert!(matches!(
            compile(r"<Version>([^<]+)</Version>"),
            Err(BumpError::Pattern(_))
        ));
    }

    #[test]
    fn test_match_spans_lines() {
        let re = compile(r#"(<control\b[^>]*\bversion=")([^"]+)(")"#).unwrap();
        let text = "<control namespace=\"x\"\n    version=\"0.1.0\"\n    constructor=\"y\">";
        let (updated, result) = bump_value(&re, text).unwrap();
        assert!(updated.contains("version=\"0.1.1\""));
        assert_eq!(result.old, "0.1.0");
    }
}
