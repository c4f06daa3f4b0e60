/// Export snippet rendering.
///
/// The snippet is a JavaScript module that exports the palette under a
/// `brand` key, ready to spread into a UI library theme:
///
/// ```text
/// export const colors = {
///     brand:{
///     "50": "#f4f7fb",
///     ...
/// }
/// }
/// ```
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

use super::shades::ShadeResult;

const PREFIX: &str = "export const colors = {\n\tbrand:";
const SUFFIX: &str = "\n}";

/// Render the export snippet for `result`.
///
/// # Errors
///
/// Returns `serde_json::Error` if the result cannot be serialized.
pub fn render_export(result: &ShadeResult) -> Result<String, serde_json::Error> {
    let body = to_json_indented(result, b"    ")?;
    Ok(format!("{PREFIX}{body}{SUFFIX}"))
}

/// Pretty-print `value` as JSON with a custom indent.
///
/// # Errors
///
/// Returns `serde_json::Error` if `value` cannot be serialized.
pub fn to_json_indented<T: Serialize + ?Sized>(
    value: &T,
    indent: &[u8],
) -> Result<String, serde_json::Error> {
    let mut buf = Vec::new();
    let mut ser = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(indent));
    value.serialize(&mut ser)?;
    // serde_json only ever emits valid UTF-8.
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Pull the `brand` JSON body back out of a rendered snippet.
///
/// Returns `None` when `snippet` was not produced by [`render_export`].
#[cfg(test)]
#[must_use]
pub fn extract_brand(snippet: &str) -> Option<&str> {
    snippet.strip_prefix(PREFIX)?.strip_suffix(SUFFIX)
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;

    fn object() -> ShadeResult {
        ShadeResult::Object(BTreeMap::from([
            (50, "#f0f0f0".to_owned()),
            (500, "#312333".to_owned()),
        ]))
    }

    #[test]
    fn test_exact_object_layout() {
        let out = render_export(&object()).unwrap();
        assert_eq!(
            out,
            "export const colors = {\n\tbrand:{\n    \"50\": \"#f0f0f0\",\n    \"500\": \"#312333\"\n}\n}"
        );
    }

    #[test]
    fn test_array_layout() {
        let out = render_export(&ShadeResult::Array(vec!["#ffffff".to_owned()])).unwrap();
        assert_eq!(
            out,
            "export const colors = {\n\tbrand:[\n    \"#ffffff\"\n]\n}"
        );
    }

    #[test]
    fn test_brand_round_trips() {
        let out = render_export(&object()).unwrap();
        let brand = extract_brand(&out).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(brand).unwrap();
        assert_eq!(parsed, serde_json::to_value(object()).unwrap());
    }

    #[test]
    fn test_extract_rejects_foreign_text() {
        assert_eq!(extract_brand("const x = 1"), None);
    }
}
