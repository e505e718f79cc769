//! Offset pagination parameters for the news listing.
//!
//! Query parameters arrive as raw strings; they are parsed into signed 32-bit
//! integers with explicit range checks so an oversized value is reported as a
//! client error rather than silently truncated.

use crate::error::CoreError;

/// Fallback `limit` when neither the request nor the configuration sets one.
pub const DEFAULT_LIMIT: i32 = 10;

/// Fallback `offset` when neither the request nor the configuration sets one.
pub const DEFAULT_OFFSET: i32 = 0;

/// Configured defaults applied when the caller omits `limit` or `offset`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageDefaults {
    pub limit: i32,
    pub offset: i32,
}

impl Default for PageDefaults {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            offset: DEFAULT_OFFSET,
        }
    }
}

/// A validated `(limit, offset)` pair ready to hand to the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub limit: i32,
    pub offset: i32,
}

impl Page {
    /// Parse both parameters, falling back to `defaults` for absent ones.
    pub fn parse(
        limit: Option<&str>,
        offset: Option<&str>,
        defaults: PageDefaults,
    ) -> Result<Self, CoreError> {
        Ok(Self {
            limit: parse_page_param("limit", limit, defaults.limit)?,
            offset: parse_page_param("offset", offset, defaults.offset)?,
        })
    }
}

/// Parse one pagination parameter.
///
/// - absent or empty: `default`
/// - not an integer, or outside `i32`: [`CoreError::Validation`]
/// - negative: [`CoreError::Validation`] (PostgreSQL rejects negative LIMIT/OFFSET)
pub fn parse_page_param(name: &str, raw: Option<&str>, default: i32) -> Result<i32, CoreError> {
    let raw = match raw.map(str::trim) {
        None | Some("") => return Ok(default),
        Some(raw) => raw,
    };

    let wide: i64 = raw
        .parse()
        .map_err(|_| CoreError::Validation(format!("invalid {name}: expected an integer")))?;

    let value = i32::try_from(wide)
        .map_err(|_| CoreError::Validation(format!("invalid {name}: out of range")))?;

    if value < 0 {
        return Err(CoreError::Validation(format!(
            "invalid {name}: must not be negative"
        )));
    }

    Ok(value)
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn absent_values_use_defaults() {
        let defaults = PageDefaults { limit: 25, offset: 5 };
        let page = Page::parse(None, Some(""), defaults).unwrap();
        assert_eq!(page, Page { limit: 25, offset: 5 });
    }

    #[test]
    fn parses_explicit_values() {
        let page = Page::parse(Some("2"), Some("0"), PageDefaults::default()).unwrap();
        assert_eq!(page, Page { limit: 2, offset: 0 });
    }

    #[test]
    fn accepts_i32_max() {
        assert_eq!(
            parse_page_param("limit", Some("2147483647"), 10).unwrap(),
            i32::MAX
        );
    }

    #[test]
    fn rejects_values_past_i32() {
        let result = parse_page_param("limit", Some("2147483648"), 10);
        assert_matches!(result, Err(CoreError::Validation(msg)) if msg.contains("out of range"));
    }

    #[test]
    fn rejects_non_numeric() {
        let result = parse_page_param("offset", Some("ten"), 0);
        assert_matches!(result, Err(CoreError::Validation(msg)) if msg == "invalid offset: expected an integer");
    }

    #[test]
    fn rejects_negative() {
        assert_matches!(
            parse_page_param("offset", Some("-1"), 0),
            Err(CoreError::Validation(_))
        );
    }
}
