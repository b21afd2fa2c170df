//! Placeholder audit of the deployment manifest.
//!
//! Literal substring matching against a fixed list. The audit is advisory:
//! an unreadable manifest or a leftover placeholder is reported and the
//! build carries on. Bytes that are not valid UTF-8 do not stop the scan.

use super::{BuildContext, StageOutcome};
use crate::error::Result;

/// Placeholders contained in `text`, in list order.
pub fn find_placeholders<'p>(text: &str, placeholders: &'p [String]) -> Vec<&'p str> {
    placeholders
        .iter()
        .filter(|p| !p.is_empty() && text.contains(p.as_str()))
        .map(String::as_str)
        .collect()
}

pub fn audit_manifest<R>(ctx: &mut BuildContext<'_, R>) -> Result<StageOutcome> {
    let manifest = ctx.settings.manifest_path();
    let bytes = match std::fs::read(ctx.settings.resolve(manifest)) {
        Ok(bytes) => bytes,
        Err(e) => return Ok(StageOutcome::fail(format!("Could not validate manifest: {e}"))),
    };
    // Invalid UTF-8 sequences are replaced with U+FFFD.
    let text = String::from_utf8_lossy(&bytes);

    let found = find_placeholders(&text, ctx.settings.placeholders());
    if found.is_empty() {
        return Ok(StageOutcome::pass("Manifest looks good"));
    }

    for placeholder in &found {
        ctx.output.warn(&format!("Warning: Placeholder detected: \"{placeholder}\""))?;
    }
    ctx.output.hint(&format!("Update {manifest} with your production values"))?;

    Ok(StageOutcome::fail(format!(
        "{} placeholder value(s) remain in {manifest}",
        found.len()
    )))
}

#[cfg(test)]
mod tests {
    use super::find_placeholders;

    fn placeholders() -> Vec<String> {
        vec![
            "12345678-1234-1234-1234-123456789012".to_string(),
            "localhost:3000".to_string(),
            "Your Company".to_string(),
        ]
    }

    #[test]
    fn finds_literal_matches_in_list_order() {
        let manifest = r#"<ProviderName>Your Company</ProviderName>
            <SourceLocation DefaultValue="https://localhost:3000/taskpane.html"/>"#;
        let list = placeholders();

        assert_eq!(
            find_placeholders(manifest, &list),
            vec!["localhost:3000", "Your Company"]
        );
    }

    #[test]
    fn matching_is_case_sensitive() {
        let list = placeholders();
        assert!(find_placeholders("<ProviderName>your company</ProviderName>", &list).is_empty());
    }

    #[test]
    fn empty_placeholder_never_matches() {
        let list = vec![String::new()];
        assert!(find_placeholders("anything", &list).is_empty());
    }
}
