//! Tech-stack tag editing for the project form.
//!
//! A project's tech stack is an ordered list of unique tags. Uniqueness is
//! exact and case-sensitive: `"React"` and `"react"` are different tags.

use crate::error::CoreError;

/// Maximum number of tags on one project.
pub const MAX_TECH_TAGS: usize = 20;

/// Maximum length of a single tag, in characters.
pub const MAX_TECH_TAG_LEN: usize = 50;

/// Append `value` (trimmed) unless it is empty or already present.
///
/// Returns `true` if the stack changed.
pub fn add_tech(stack: &mut Vec<String>, value: &str) -> bool {
    let value = value.trim();
    if value.is_empty() || stack.iter().any(|t| t == value) {
        return false;
    }
    stack.push(value.to_string());
    true
}

/// Remove the tag equal to `value`. Returns `true` if the stack changed.
pub fn remove_tech(stack: &mut Vec<String>, value: &str) -> bool {
    let before = stack.len();
    stack.retain(|t| t != value);
    stack.len() != before
}

/// Rebuild a stack by feeding every value through [`add_tech`].
///
/// Trims, drops empties and duplicates, keeps first-occurrence order.
pub fn normalize_tech_stack<I, S>(values: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut stack = Vec::new();
    for value in values {
        add_tech(&mut stack, value.as_ref());
    }
    stack
}

/// Validate tag count and tag length limits.
pub fn validate_tech_stack(stack: &[String]) -> Result<(), CoreError> {
    if stack.len() > MAX_TECH_TAGS {
        return Err(CoreError::Validation(format!(
            "tech_stack must have at most {MAX_TECH_TAGS} entries, got {}",
            stack.len()
        )));
    }
    if let Some(tag) = stack.iter().find(|t| t.chars().count() > MAX_TECH_TAG_LEN) {
        return Err(CoreError::Validation(format!(
            "tech_stack entry '{tag}' exceeds {MAX_TECH_TAG_LEN} characters"
        )));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    fn stack(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn add_appends_trimmed_value_once() {
        let mut s = stack(&["React"]);
        assert!(add_tech(&mut s, "  Node.js "));
        assert_eq!(s, stack(&["React", "Node.js"]));
    }

    #[test]
    fn add_duplicate_is_noop() {
        let mut s = stack(&["React", "Node.js"]);
        assert!(!add_tech(&mut s, "React"));
        assert!(!add_tech(&mut s, " React "));
        assert_eq!(s, stack(&["React", "Node.js"]));
    }

    #[test]
    fn add_is_case_sensitive() {
        let mut s = stack(&["React"]);
        assert!(add_tech(&mut s, "react"));
        assert_eq!(s.len(), 2);
    }

    #[test]
    fn add_blank_is_noop() {
        let mut s = Vec::new();
        assert!(!add_tech(&mut s, "   "));
        assert!(s.is_empty());
    }

    #[test]
    fn remove_by_exact_value() {
        let mut s = stack(&["Flutter", "Firebase", "Dart"]);
        assert!(!remove_tech(&mut s, "dart"));
        assert!(remove_tech(&mut s, "Firebase"));
        assert_eq!(s, stack(&["Flutter", "Dart"]));
    }

    #[test]
    fn normalize_keeps_first_occurrence_order() {
        let s = normalize_tech_stack(["Java", " JavaFX", "", "Java", "SQLite "]);
        assert_eq!(s, stack(&["Java", "JavaFX", "SQLite"]));
    }

    #[test]
    fn validate_rejects_too_many_tags() {
        let s: Vec<String> = (0..=MAX_TECH_TAGS).map(|i| format!("tag{i}")).collect();
        assert_matches!(validate_tech_stack(&s), Err(CoreError::Validation(_)));
    }

    #[test]
    fn validate_rejects_long_tag() {
        let s = vec!["x".repeat(MAX_TECH_TAG_LEN + 1)];
        assert_matches!(validate_tech_stack(&s), Err(CoreError::Validation(_)));
    }

    #[test]
    fn validate_accepts_seed_sized_stack() {
        let s = stack(&["Figma", "Adobe XD", "HTML", "CSS"]);
        assert!(validate_tech_stack(&s).is_ok());
    }
}
