//! Top-level entry points of the build phase.

use viewgen_core::Result;

use crate::{Container, Document, Tag};

/// Build a container and its children.
///
/// `configure` receives the new container and attaches children through
/// its factory methods. Any error from `configure` aborts the build.
///
/// # Example
///
/// ```
/// use viewgen_tree::{Destination, Render, build_container};
///
/// let view = build_container("Main", |view| {
///     view.add_field("poem")?;
///     Ok(())
/// })
/// .unwrap();
///
/// assert_eq!(
///     view.to_text(Destination::SwiftUi),
///     "struct MainView: View {\n  @State var poem = \"\"\n}"
/// );
/// ```
pub fn build_container<F>(name: impl Into<String>, configure: F) -> Result<Document<Container>>
where
    F: FnOnce(&mut Container) -> Result<()>,
{
    let mut container = Container::new(name)?;
    configure(&mut container)?;
    tracing::debug!(
        container = container.name(),
        children = container.children().len(),
        "built container"
    );
    Ok(Document::new(container))
}

/// Build a markup element and its children.
///
/// # Example
///
/// ```
/// use viewgen_tree::{Destination, Render, build_tag};
///
/// let p = build_tag("p", |p| {
///     p.add_text("a").add_text("b");
///     Ok(())
/// })
/// .unwrap();
///
/// assert_eq!(p.to_text(Destination::SwiftUi), "<p>\n  a\n  b\n</p>\n");
/// ```
pub fn build_tag<F>(name: impl Into<String>, configure: F) -> Result<Document<Tag>>
where
    F: FnOnce(&mut Tag) -> Result<()>,
{
    let mut tag = Tag::new(name)?;
    configure(&mut tag)?;
    tracing::debug!(
        tag = tag.name(),
        children = tag.children().len(),
        "built tag"
    );
    Ok(Document::new(tag))
}
