//! Turning raw completion text into a [`GeneratedProject`].

use phpforge_types::GeneratedProject;
use serde_json::Value;

use crate::error::{ProviderError, Result};

const PROJECT_KEYS: [&str; 5] = ["description", "features", "instructions", "databaseSchema", "files"];

/// Remove a Markdown code fence around the completion.
///
/// The text is trimmed. When it then starts with a fence, the opening line
/// is dropped, along with a closing fence if one is present. A fence glued
/// to the payload (` ```json{...}``` `) loses only the backticks and the
/// language tag. Anything else is returned trimmed.
pub fn strip_code_fences(text: &str) -> &str {
    let text = text.trim();
    let Some(rest) = text.strip_prefix("```") else {
        return text;
    };
    let body = match rest.find('\n') {
        Some(i) if !rest[..i].contains(['{', '[']) => &rest[i + 1..],
        _ => rest.trim_start_matches(|c: char| c.is_ascii_alphanumeric()),
    };
    let body = body.trim_end();
    body.strip_suffix("```").unwrap_or(body).trim()
}

/// Parse a completion into a project.
///
/// Fences are stripped first. If the result is not a JSON object, the
/// outermost `{ ... }` slice is tried, which recovers answers wrapped in a
/// sentence of prose. The object must carry at least one project key.
pub fn parse_project(text: &str) -> Result<GeneratedProject> {
    let body = strip_code_fences(text);
    if body.is_empty() {
        return Err(ProviderError::InvalidResponse("empty completion".into()));
    }

    let value = match serde_json::from_str::<Value>(body) {
        Ok(v) => v,
        Err(first) => match outer_object(body) {
            Some(slice) => serde_json::from_str::<Value>(slice).map_err(|_| first)?,
            None => return Err(first.into()),
        },
    };

    let Some(obj) = value.as_object() else {
        return Err(ProviderError::InvalidResponse(
            "completion is not a JSON object".into(),
        ));
    };
    if !PROJECT_KEYS.iter().any(|k| obj.contains_key(*k)) {
        return Err(ProviderError::InvalidResponse(
            "JSON object has no project fields".into(),
        ));
    }

    Ok(serde_json::from_value(value)?)
}

fn outer_object(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    (end > start).then(|| &text[start..=end])
}

#[cfg(test)]
mod tests {
    use super::*;

    const PROJECT: &str = r#"{"description":"Blog","features":["Posts"],"instructions":"run","databaseSchema":[],"files":[{"name":"index.php","path":"public/index.php","content":"<?php","type":"php"}]}"#;

    #[test]
    fn unfenced_text_is_trimmed_only() {
        assert_eq!(strip_code_fences("  {\"a\":1}\n"), "{\"a\":1}");
    }

    #[test]
    fn json_fence_removed() {
        let fenced = format!("```json\n{PROJECT}\n```");
        assert_eq!(strip_code_fences(&fenced), PROJECT);
    }

    #[test]
    fn bare_fence_removed() {
        let fenced = format!("```\n{PROJECT}\n```\n");
        assert_eq!(strip_code_fences(&fenced), PROJECT);
    }

    #[test]
    fn glued_fence_removed() {
        let text = r#"```json{"description":"x","files":[]}```"#;
        assert_eq!(strip_code_fences(text), r#"{"description":"x","files":[]}"#);
        assert_eq!(parse_project(text).unwrap().description, "x");
        assert_eq!(strip_code_fences("```[1]```"), "[1]");
    }

    #[test]
    fn glued_fence_around_full_project() {
        let fenced = format!("```json{PROJECT}```");
        assert_eq!(strip_code_fences(&fenced), PROJECT);
    }

    #[test]
    fn missing_closing_fence_tolerated() {
        let fenced = format!("```json\n{PROJECT}");
        assert_eq!(strip_code_fences(&fenced), PROJECT);
    }

    #[test]
    fn fenced_and_plain_parse_identically() {
        let plain = parse_project(PROJECT).unwrap();
        let fenced = parse_project(&format!("```json\n{PROJECT}\n```")).unwrap();
        assert_eq!(plain, fenced);
        assert_eq!(plain.files[0].path, "public/index.php");
    }

    #[test]
    fn prose_wrapped_object_recovered() {
        let text = format!("Here is your application:\n{PROJECT}\nEnjoy!");
        let project = parse_project(&text).unwrap();
        assert_eq!(project.description, "Blog");
    }

    #[test]
    fn non_json_rejected() {
        assert!(matches!(
            parse_project("I cannot help with that."),
            Err(ProviderError::Json(_))
        ));
    }

    #[test]
    fn empty_rejected() {
        assert!(matches!(
            parse_project("```\n```"),
            Err(ProviderError::InvalidResponse(_))
        ));
    }

    #[test]
    fn array_rejected() {
        assert!(matches!(
            parse_project("[1, 2, 3]"),
            Err(ProviderError::InvalidResponse(_))
        ));
    }

    #[test]
    fn unrelated_object_rejected() {
        assert!(matches!(
            parse_project(r#"{"error": "overloaded"}"#),
            Err(ProviderError::InvalidResponse(_))
        ));
    }

    #[test]
    fn wrong_field_types_rejected() {
        assert!(parse_project(r#"{"features": "not a list"}"#).is_err());
    }
}
