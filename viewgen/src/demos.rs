//! Sample documents printed by the CLI.

use viewgen_tree::{Container, Document, Result, Tag, build_container, build_tag};

const KOTLIN_URL: &str = "https://kotlinlang.org";

/// A page that shows a poem and a button to fetch the next one.
pub fn poetry_page(name: &str) -> Result<Document<Container>> {
    build_container(name, |view| {
        view.add_dependency_group(|deps| {
            deps.add_dependency("poetryReader")?;
            Ok(())
        })?;
        view.add_field("poem")?;
        view.add_stack(|stack| {
            stack.add_text("Poem of the day");
            stack.add_button(|button| {
                button.add_text("Next poem");
                Ok(())
            })?;
            Ok(())
        })?;
        Ok(())
    })
}

/// An HTML page with mixed content; the last paragraph lists `args`.
pub fn kotlin_page(args: &[String]) -> Result<Document<Tag>> {
    build_tag("html", |html| {
        html.add_tag("head", |head| {
            head.add_tag("title", |title| {
                title.add_text("XML encoding with Kotlin");
                Ok(())
            })?;
            Ok(())
        })?;
        html.add_tag("body", |body| {
            body.add_tag("h1", |h1| {
                h1.add_text("XML encoding with Kotlin");
                Ok(())
            })?;
            body.add_tag("p", |p| {
                p.add_text("this format can be used as an alternative markup to XML");
                Ok(())
            })?;

            // an element with attributes and text content
            body.add_tag("a", |a| {
                a.attr("href", KOTLIN_URL)?.add_text("Kotlin");
                Ok(())
            })?;

            // mixed content
            body.add_tag("p", |p| {
                p.add_text("This is some");
                p.add_tag("b", |b| {
                    b.add_text("mixed");
                    Ok(())
                })?;
                p.add_text("text. For more see the");
                p.add_tag("a", |a| {
                    a.attr("href", KOTLIN_URL)?.add_text("Kotlin");
                    Ok(())
                })?;
                p.add_text("project");
                Ok(())
            })?;
            body.add_tag("p", |p| {
                p.add_text("some text");
                Ok(())
            })?;

            body.add_tag("p", |p| {
                for arg in args {
                    p.add_text(arg.as_str());
                }
                Ok(())
            })?;
            Ok(())
        })?;
        Ok(())
    })
}

#[cfg(test)]
mod tests {
    use viewgen_tree::{Destination, Render};

    use super::*;

    #[test]
    fn test_poetry_page_swiftui() {
        let page = poetry_page("Main").unwrap();
        assert_eq!(
            page.to_text(Destination::SwiftUi),
            "struct MainView: View {\n  let poetryReader = PoetryReader()\n  @State var poem = \"\"\n  Poem of the day\n  Next poem\n}"
        );
    }

    #[test]
    fn test_poetry_page_compose() {
        let page = poetry_page("Main").unwrap();
        assert_eq!(
            page.to_text(Destination::JetpackCompose),
            "@Composable\nfun MainContent() {\n  val poetryReader = PoetryReader()\n  var poem by remember { mutableStateOf(\"\") }\n  Poem of the day\n  Next poem\n}"
        );
    }

    #[test]
    fn test_poetry_page_rejects_bad_name() {
        assert!(poetry_page("My Page").is_err());
    }

    #[test]
    fn test_kotlin_page_lists_args() {
        let args = vec!["one".to_string(), "two".to_string()];
        let text = kotlin_page(&args).unwrap().to_text(Destination::SwiftUi);
        assert!(text.starts_with("<html>\n  <head>\n    <title>\n"));
        assert!(text.contains("    <p>\n      one\n      two\n    </p>\n"));
        assert!(text.ends_with("  </body>\n</html>\n"));
    }

    #[test]
    fn test_kotlin_page_without_args() {
        let text = kotlin_page(&[]).unwrap().to_text(Destination::SwiftUi);
        assert!(text.contains("    <p>\n    </p>\n"));
        assert_eq!(text.matches("<a href=\"https://kotlinlang.org\">").count(), 2);
    }
}
