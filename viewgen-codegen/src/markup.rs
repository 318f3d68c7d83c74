//! Generic markup form.
//!
//! Tags render the same way for every destination.

use std::borrow::Cow;

/// Opening tag, with attributes in the given order.
pub fn open_tag<'a>(name: &str, attributes: impl IntoIterator<Item = (&'a str, &'a str)>) -> String {
    let mut tag = format!("<{name}");
    for (key, value) in attributes {
        tag.push(' ');
        tag.push_str(key);
        tag.push_str("=\"");
        tag.push_str(&escape_attribute(value));
        tag.push('"');
    }
    tag.push('>');
    tag
}

/// Closing tag.
pub fn close_tag(name: &str) -> String {
    format!("</{name}>")
}

/// Escape an attribute value for use inside double quotes.
pub fn escape_attribute(value: &str) -> Cow<'_, str> {
    if !value.contains(['&', '"', '<']) {
        return Cow::Borrowed(value);
    }

    let mut escaped = String::with_capacity(value.len() + 8);
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '"' => escaped.push_str("&quot;"),
            '<' => escaped.push_str("&lt;"),
            c => escaped.push(c),
        }
    }
    Cow::Owned(escaped)
}
