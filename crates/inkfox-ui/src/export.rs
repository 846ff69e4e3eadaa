//! Static HTML export.
//!
//! Renders the landing page on the server side with `dioxus-ssr`, for
//! hosting the catalog as a plain file.

use dioxus::prelude::*;
use inkfox_core::Site;

use crate::components::{LandingPage, LandingPageProps};
use crate::theme::global_styles;

/// Render the landing page body markup.
pub fn render_page(site: &Site) -> String {
    render_ssr(LandingPage, LandingPageProps { site: site.clone() })
}

/// Render a standalone HTML document with inline styles.
pub fn render_document(site: &Site) -> String {
    let markup = render_ssr(Document, DocumentProps { site: site.clone() });
    tracing::debug!("Rendered '{}' ({} bytes of markup)", site.title, markup.len());
    format!("<!DOCTYPE html>\n{}\n", markup)
}

fn render_ssr<P: Clone + 'static>(component: fn(P) -> Element, props: P) -> String {
    let mut dom = VirtualDom::new_with_props(component, props);
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}

/// Whole document: head with title and stylesheet, page in the body.
#[component]
fn Document(site: Site) -> Element {
    let css = global_styles();

    rsx! {
        html { lang: "en",
            head {
                meta { charset: "utf-8" }
                meta { name: "viewport", content: "width=device-width, initial-scale=1" }
                title { "{site.title}" }
                style { dangerous_inner_html: "{css}" }
            }
            body {
                LandingPage { site: site.clone() }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_wraps_page() {
        let site = Site::builtin();
        let doc = render_document(&site);
        assert!(doc.starts_with("<!DOCTYPE html>"));
        assert!(doc.contains("<html lang=\"en\">"));
        assert!(doc.contains("<title>InkFox Publishing</title>"));
        assert!(doc.contains("--neon:"));
        assert!(doc.trim_end().ends_with("</html>"));
    }

    #[test]
    fn body_holds_rendered_page() {
        let site = Site::builtin();
        let doc = render_document(&site);
        let body = doc.find("<body").unwrap();
        assert!(doc.find("id=\"books\"").unwrap() > body);
        assert!(doc.find("</head>").unwrap() < body);
    }
}
