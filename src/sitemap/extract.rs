use roxmltree::{Document, Node};
use tracing::warn;

use crate::error::SitemapError;

/// Namespace of the sitemap protocol schema.
pub const SITEMAP_NAMESPACE: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

/// Returns the trimmed text of every `urlset/url/loc` element in document order.
///
/// Elements match when they are unqualified or bound to [`SITEMAP_NAMESPACE`],
/// whatever prefix the document uses. Children of other namespaces (image,
/// video and news extensions) are ignored. `loc` elements without text are
/// dropped.
///
/// # Errors
///
/// Returns [`SitemapError::Parse`] when the document is not well-formed XML and
/// [`SitemapError::UnexpectedRoot`] when the root is not a `urlset`.
pub fn extract_urls(document: &str) -> Result<Vec<String>, SitemapError> {
    let doc = Document::parse(document).map_err(|err| SitemapError::Parse { source: err })?;
    let root = doc.root_element();
    if !is_sitemap_element(root, "urlset") {
        return Err(SitemapError::UnexpectedRoot {
            found: root.tag_name().name().to_owned(),
        });
    }

    let mut urls = Vec::new();
    for entry in sitemap_children(root, "url") {
        for loc in sitemap_children(entry, "loc") {
            let text = loc.text().map(str::trim).unwrap_or_default();
            if text.is_empty() {
                warn!(
                    "Skipping empty <loc> at byte offset {}",
                    loc.range().start
                );
                continue;
            }
            urls.push(text.to_owned());
        }
    }
    Ok(urls)
}

fn sitemap_children<'a, 'input: 'a>(
    parent: Node<'a, 'input>,
    name: &'static str,
) -> impl Iterator<Item = Node<'a, 'input>> {
    parent
        .children()
        .filter(move |child| is_sitemap_element(*child, name))
}

fn is_sitemap_element(node: Node<'_, '_>, name: &str) -> bool {
    if !node.is_element() {
        return false;
    }
    let tag = node.tag_name();
    tag.name() == name && matches!(tag.namespace(), None | Some(SITEMAP_NAMESPACE))
}
