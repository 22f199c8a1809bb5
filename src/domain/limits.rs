//! Field-length validation for free-text content fields.
//!
//! Every free-text field belongs to a category with a fixed ceiling.
//! Violations produce a message naming the field, the limit and the
//! actual length; nothing is ever silently truncated.

use crate::config::{
    MAX_BULLET_LEN, MAX_LONG_TEXT_LEN, MAX_NAME_LEN, MAX_SUMMARY_LEN, MAX_TAG_LEN, MAX_TITLE_LEN,
    MAX_URL_LEN,
};
use crate::errors::{AppError, AppResult};

/// Free-text field categories with distinct ceilings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Title,
    Name,
    Summary,
    Bullet,
    Tag,
    Url,
    LongText,
}

impl FieldKind {
    pub fn max_len(&self) -> usize {
        match self {
            FieldKind::Title => MAX_TITLE_LEN,
            FieldKind::Name => MAX_NAME_LEN,
            FieldKind::Summary => MAX_SUMMARY_LEN,
            FieldKind::Bullet => MAX_BULLET_LEN,
            FieldKind::Tag => MAX_TAG_LEN,
            FieldKind::Url => MAX_URL_LEN,
            FieldKind::LongText => MAX_LONG_TEXT_LEN,
        }
    }
}

/// Check one field value against its category ceiling.
///
/// Length is counted in characters, matching what the admin UI shows.
pub fn check_len(field: &str, kind: FieldKind, value: &str) -> AppResult<()> {
    let len = value.chars().count();
    let max = kind.max_len();
    if len > max {
        return Err(AppError::validation(format!(
            "{} must be at most {} characters (got {})",
            field, max, len
        )));
    }
    Ok(())
}

/// Check an optional field only when provided (partial updates).
pub fn check_opt_len(field: &str, kind: FieldKind, value: Option<&str>) -> AppResult<()> {
    match value {
        Some(v) => check_len(field, kind, v),
        None => Ok(()),
    }
}

/// Check every element of a list field (highlights, tags, paragraphs).
pub fn check_each_len(field: &str, kind: FieldKind, values: &[String]) -> AppResult<()> {
    for (i, v) in values.iter().enumerate() {
        check_len(&format!("{}[{}]", field, i), kind, v)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn at_limit_passes_over_limit_fails() {
        let at = "x".repeat(MAX_TITLE_LEN);
        assert!(check_len("title", FieldKind::Title, &at).is_ok());

        let over = "x".repeat(MAX_TITLE_LEN + 1);
        let err = check_len("title", FieldKind::Title, &over).unwrap_err();
        match err {
            AppError::Validation(msg) => {
                assert!(msg.contains("title"));
                assert!(msg.contains(&MAX_TITLE_LEN.to_string()));
                assert!(msg.contains(&(MAX_TITLE_LEN + 1).to_string()));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn multibyte_counted_as_characters() {
        // 40 four-byte scalars are 40 characters, not 160
        let value = "🦀".repeat(MAX_TAG_LEN);
        assert!(check_len("tag", FieldKind::Tag, &value).is_ok());
    }

    #[test]
    fn optional_absent_is_ok() {
        assert!(check_opt_len("summary", FieldKind::Summary, None).is_ok());
    }

    #[test]
    fn list_elements_named_individually() {
        let values = vec!["ok".to_string(), "y".repeat(MAX_TAG_LEN + 1)];
        let err = check_each_len("tags", FieldKind::Tag, &values).unwrap_err();
        match err {
            AppError::Validation(msg) => assert!(msg.contains("tags[1]")),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
