//! Lenient field access for JioSaavn JSON.
//!
//! The API is inconsistent about scalar types: the same field may arrive as
//! `245`, `"245"`, `true`, `"true"` or `"1"` depending on the endpoint. It
//! also HTML-escapes display strings. These helpers normalize both.

use serde_json::Value;

/// String field, HTML-unescaped. Numbers are stringified; missing/null → `""`.
pub fn text(v: &Value, key: &str) -> String {
    opt_text(v, key).unwrap_or_default()
}

/// Like [`text`], but `None` for missing, null or empty values.
pub fn opt_text(v: &Value, key: &str) -> Option<String> {
    let s = match &v[key] {
        Value::String(s) => unescape(s),
        Value::Number(n) => n.to_string(),
        _ => return None,
    };
    (!s.is_empty()).then_some(s)
}

/// Unsigned integer field, accepting numbers and numeric strings.
pub fn opt_u64(v: &Value, key: &str) -> Option<u64> {
    match &v[key] {
        Value::Number(n) => n.as_u64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Boolean field: `true`, `"true"`, non-zero numbers and `"1"` are true.
pub fn flag(v: &Value, key: &str) -> bool {
    match &v[key] {
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_u64().is_some_and(|n| n != 0),
        Value::String(s) => matches!(s.as_str(), "true" | "1"),
        _ => false,
    }
}

/// Replace the HTML entities JioSaavn puts into titles and names.
pub fn unescape(s: &str) -> String {
    if !s.contains('&') {
        return s.to_owned();
    }
    s.replace("&quot;", "\"")
        .replace("&#039;", "'")
        .replace("&#39;", "'")
        .replace("&apos;", "'")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&amp;", "&")
}

/// Upgrade a thumbnail URL to the 500x500 rendition.
pub fn hires_image(url: &str) -> String {
    url.replace("150x150", "500x500").replace("50x50", "500x500")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn scalars_are_coerced() {
        let v = json!({
            "n": 245, "s": "245", "b": true, "bs": "true", "one": "1", "zero": 0,
            "empty": "", "null": null
        });
        assert_eq!(opt_u64(&v, "n"), Some(245));
        assert_eq!(opt_u64(&v, "s"), Some(245));
        assert_eq!(opt_u64(&v, "empty"), None);
        assert_eq!(text(&v, "n"), "245");
        assert!(flag(&v, "b") && flag(&v, "bs") && flag(&v, "one"));
        assert!(!flag(&v, "zero") && !flag(&v, "missing"));
        assert_eq!(opt_text(&v, "empty"), None);
        assert_eq!(opt_text(&v, "null"), None);
        assert_eq!(text(&v, "missing"), "");
    }

    #[test]
    fn entities_are_unescaped() {
        assert_eq!(
            unescape("Tum Hi Ho (From &quot;Aashiqui 2&quot;) &amp; Rock &#039;n&#039; Roll"),
            "Tum Hi Ho (From \"Aashiqui 2\") & Rock 'n' Roll"
        );
        assert_eq!(unescape("&amp;quot;"), "&quot;");
    }

    #[test]
    fn image_upgrade() {
        assert_eq!(
            hires_image("https://c.saavncdn.com/430/Aashiqui-2-Hindi-2013-150x150.jpg"),
            "https://c.saavncdn.com/430/Aashiqui-2-Hindi-2013-500x500.jpg"
        );
        assert_eq!(
            hires_image("https://c.saavncdn.com/x-50x50.jpg"),
            "https://c.saavncdn.com/x-500x500.jpg"
        );
    }
}
