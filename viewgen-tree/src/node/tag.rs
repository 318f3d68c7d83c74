use indexmap::IndexMap;
use serde::Serialize;
use viewgen_codegen::{
    builder::CodeBuilder,
    markup::{close_tag, open_tag},
};
use viewgen_core::{Destination, NameKind, Result, validate_name};

use super::{Node, Render, TextLeaf, render_children};

/// A generic markup element.
///
/// Renders the same for every destination: the opening tag, the children
/// one level deeper, then the closing tag.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Tag {
    name: String,
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    attributes: IndexMap<String, String>,
    children: Vec<Node>,
}

impl Tag {
    pub(crate) fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        validate_name(&name, NameKind::Tag)?;
        Ok(Self {
            name,
            attributes: IndexMap::new(),
            children: Vec::new(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn attributes(&self) -> &IndexMap<String, String> {
        &self.attributes
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Set an attribute.
    ///
    /// Attributes render in the order they were first set; setting an
    /// existing attribute again replaces its value in place.
    pub fn attr(&mut self, name: impl Into<String>, value: impl Into<String>) -> Result<&mut Self> {
        let name = name.into();
        validate_name(&name, NameKind::Attribute)?;
        self.attributes.insert(name, value.into());
        Ok(self)
    }

    /// Add a nested element.
    pub fn add_tag<F>(&mut self, name: impl Into<String>, configure: F) -> Result<&mut Tag>
    where
        F: FnOnce(&mut Tag) -> Result<()>,
    {
        let mut tag = Tag::new(name)?;
        configure(&mut tag)?;
        Ok(attach!(self.children, Tag(tag)))
    }

    /// Add a line of text.
    pub fn add_text(&mut self, text: impl Into<String>) -> &mut Self {
        self.children.push(Node::Text(TextLeaf::new(text)));
        self
    }
}

impl Render for Tag {
    fn render(&self, out: &mut CodeBuilder, destination: Destination) {
        tracing::trace!(tag = %self.name, %destination, "open tag");
        let attributes = self
            .attributes
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()));
        out.push_line(&open_tag(&self.name, attributes));
        out.indented(|out| render_children(&self.children, out, destination));
        out.push_line(&close_tag(&self.name));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_tag() {
        let tag = Tag::new("br").unwrap();
        assert_eq!(tag.to_text(Destination::SwiftUi), "<br>\n</br>\n");
    }

    #[test]
    fn test_tag_with_text() {
        let mut tag = Tag::new("p").unwrap();
        tag.add_text("a").add_text("b");
        for destination in Destination::ALL {
            assert_eq!(tag.to_text(destination), "<p>\n  a\n  b\n</p>\n");
        }
    }

    #[test]
    fn test_nested_tags_indent() {
        let mut html = Tag::new("html").unwrap();
        html.add_tag("body", |body| {
            body.add_tag("p", |p| {
                p.add_text("hi");
                Ok(())
            })?;
            Ok(())
        })
        .unwrap();

        assert_eq!(
            html.to_text(Destination::JetpackCompose),
            "<html>\n  <body>\n    <p>\n      hi\n    </p>\n  </body>\n</html>\n"
        );
    }

    #[test]
    fn test_attributes() {
        let mut a = Tag::new("a").unwrap();
        a.attr("href", "https://kotlinlang.org")
            .unwrap()
            .add_text("Kotlin");
        assert_eq!(
            a.to_text(Destination::SwiftUi),
            "<a href=\"https://kotlinlang.org\">\n  Kotlin\n</a>\n"
        );
    }

    #[test]
    fn test_attribute_set_twice_keeps_position() {
        let mut a = Tag::new("a").unwrap();
        a.attr("href", "one").unwrap();
        a.attr("id", "link").unwrap();
        a.attr("href", "two").unwrap();
        let keys: Vec<_> = a.attributes().keys().map(String::as_str).collect();
        assert_eq!(keys, ["href", "id"]);
        assert_eq!(a.attributes()["href"], "two");
    }

    #[test]
    fn test_invalid_names() {
        assert!(Tag::new("").is_err());
        assert!(Tag::new("my tag").is_err());
        let mut p = Tag::new("p").unwrap();
        assert!(p.attr("on click", "x").is_err());
        assert!(p.add_tag("<b>", |_| Ok(())).is_err());
        assert!(p.children().is_empty());
    }

    #[test]
    fn test_configure_error_propagates() {
        let mut body = Tag::new("body").unwrap();
        let result = body.add_tag("p", |p| {
            p.add_tag("", |_| Ok(()))?;
            Ok(())
        });
        assert!(result.is_err());
    }

    #[test]
    fn test_failed_nested_tag_is_not_attached() {
        let mut html = Tag::new("html").unwrap();
        html.add_tag("body", |body| {
            let nested = body.add_tag("p", |p| {
                p.add_text("half");
                p.add_tag("bad name", |_| Ok(()))?;
                Ok(())
            });
            assert!(nested.is_err());
            assert!(body.children().is_empty());
            Ok(())
        })
        .unwrap();

        assert_eq!(
            html.to_text(Destination::SwiftUi),
            "<html>\n  <body>\n  </body>\n</html>\n"
        );
    }
}
