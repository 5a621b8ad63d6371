//! HTML parsing for the page under audit

use crate::error::{AuditError, Result};
use crate::url_utils::{normalize_origin, resolve_link};
use scraper::{ElementRef, Html, Node, Selector};
use url::Url;

/// Elements whose text never reaches the reader
const NON_VISIBLE_ELEMENTS: [&str; 3] = ["script", "style", "template"];

/// Parsed primary page together with the URL it was fetched from.
///
/// `scraper::Html` is not `Send`, so a `PageDocument` is built after the last
/// network await of an audit and dropped before returning.
pub struct PageDocument {
    document: Html,
    url: Url,
    origin: String,
    text_length: usize,
}

impl PageDocument {
    pub fn parse(html: &str, page_url: &str) -> Result<Self> {
        let url = Url::parse(page_url).map_err(|e| AuditError::invalid_url(page_url, e))?;
        let origin = normalize_origin(url.as_str());
        let document = Html::parse_document(html);
        let text_length = visible_text(&document).chars().count();

        Ok(Self {
            document,
            url,
            origin,
            text_length,
        })
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Scheme + host (+ port) of the page, used to classify links
    pub fn origin(&self) -> &str {
        &self.origin
    }

    /// Length of the visible text in characters, whitespace included
    pub fn text_length(&self) -> usize {
        self.text_length
    }

    /// Whether any `<script>` declares JSON-LD structured data.
    ///
    /// Uses contains() to catch variations like "application/ld+json; charset=utf-8"
    pub fn has_structured_data(&self) -> bool {
        self.elements("script[type]").any(|element| {
            element
                .value()
                .attr("type")
                .map(|t| t.trim().to_ascii_lowercase().contains("ld+json"))
                .unwrap_or(false)
        })
    }

    /// Whether a `<meta name=...>` with the given name exists
    pub fn has_meta_name(&self, name: &str) -> bool {
        self.meta_by("name", name).next().is_some()
    }

    /// Whether a `<meta property=...>` with the given property exists
    pub fn has_meta_property(&self, property: &str) -> bool {
        self.meta_by("property", property).next().is_some()
    }

    /// Whether a `<meta name="description">` carries non-empty content.
    ///
    /// Whitespace-only content still counts as content.
    pub fn has_meta_description(&self) -> bool {
        self.meta_by("name", "description").any(|element| {
            element
                .value()
                .attr("content")
                .is_some_and(|content| !content.is_empty())
        })
    }

    /// Count elements matching a CSS selector
    pub fn count(&self, selector: &str) -> usize {
        self.elements(selector).count()
    }

    /// Links whose resolved target contains the page origin
    pub fn internal_link_count(&self) -> usize {
        self.elements("a[href]")
            .filter_map(|element| element.value().attr("href"))
            .filter_map(|href| resolve_link(&self.url, href))
            .filter(|target| target.as_str().contains(&self.origin))
            .count()
    }

    /// Returns `(total images, images with a non-empty alt attribute)`
    pub fn image_alt_coverage(&self) -> (usize, usize) {
        let mut total = 0;
        let mut with_alt = 0;

        for image in self.elements("img") {
            total += 1;
            if image
                .value()
                .attr("alt")
                .is_some_and(|alt| !alt.is_empty())
            {
                with_alt += 1;
            }
        }

        (total, with_alt)
    }

    fn meta_by<'a>(
        &'a self,
        attribute: &'a str,
        expected: &'a str,
    ) -> impl Iterator<Item = ElementRef<'a>> + 'a {
        self.elements("meta").filter(move |element| {
            element
                .value()
                .attr(attribute)
                .is_some_and(|value| value.trim().eq_ignore_ascii_case(expected))
        })
    }

    fn elements<'a>(&'a self, selector: &str) -> impl Iterator<Item = ElementRef<'a>> + 'a {
        let selector = Selector::parse(selector).ok();
        selector
            .into_iter()
            .flat_map(move |selector| self.document.select(&selector).collect::<Vec<_>>())
    }
}

/// Concatenated text nodes a reader would see.
///
/// Text under `script`, `style` or `template` is skipped. Whitespace is kept
/// exactly as it appears in the markup.
pub fn visible_text(document: &Html) -> String {
    let mut text = String::new();

    for node in document.tree.root().descendants() {
        let Node::Text(content) = node.value() else {
            continue;
        };
        let hidden = node.ancestors().any(|ancestor| {
            ancestor.value().as_element().is_some_and(|element| {
                NON_VISIBLE_ELEMENTS
                    .iter()
                    .any(|name| element.name().eq_ignore_ascii_case(name))
            })
        });
        if !hidden {
            text.push_str(content);
        }
    }

    text
}
