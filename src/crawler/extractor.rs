//! Link extractor
//!
//! This module pulls hyperlink targets out of a loaded page and runs every
//! raw href through the filter pipeline: scheme check, same-domain check,
//! downloadable-file check, then normalization. Duplicates within one page
//! are allowed through; deduplication is the frontier's job.

use crate::url::{is_downloadable_file, is_same_domain, normalize_url, DomainPolicy};
use scraper::{Html, Selector};
use url::Url;

/// Extracted information from one loaded page
#[derive(Debug, Clone)]
pub struct ExtractedPage {
    /// The page title (from the <title> tag)
    pub title: Option<String>,

    /// In-scope, normalized crawl candidates, in document order
    pub links: Vec<Url>,
}

/// Extracts the title and in-scope links from a page's document
///
/// Relative hrefs are resolved against `page_url` (the URL the document was
/// actually served from, after redirects); scope is judged against `scope`,
/// the crawl's seed URL.
///
/// # Filter pipeline
///
/// Applied to every raw href, in order:
/// 1. reject non-HTTP(S) schemes (`javascript:`, `mailto:`, `tel:`, `data:`)
///    and fragment-only anchors;
/// 2. reject cross-domain targets per `policy`;
/// 3. reject downloadable-file targets;
/// 4. normalize survivors.
///
/// # Arguments
///
/// * `html` - The document body
/// * `page_url` - Base for resolving relative hrefs
/// * `scope` - The crawl's seed URL, for the same-domain check
/// * `policy` - Whether subdomains are in scope
///
/// # Returns
///
/// * `Ok(ExtractedPage)` - Title and filtered links
/// * `Err(String)` - Extraction failed; the caller treats this as zero links
pub fn extract_page(
    html: &str,
    page_url: &Url,
    scope: &Url,
    policy: DomainPolicy,
) -> Result<ExtractedPage, String> {
    let document = Html::parse_document(html);

    let title = extract_title(&document);

    let anchor_selector =
        Selector::parse("a[href]").map_err(|e| format!("invalid selector: {}", e))?;

    let mut links = Vec::new();
    for element in document.select(&anchor_selector) {
        // Skip explicit download links regardless of extension
        if element.value().attr("download").is_some() {
            continue;
        }

        if let Some(href) = element.value().attr("href") {
            if let Some(absolute) = resolve_link(href, page_url) {
                if !is_same_domain(scope, &absolute, policy) {
                    continue;
                }

                if is_downloadable_file(&absolute) {
                    continue;
                }

                match normalize_url(absolute.as_str()) {
                    Ok(normalized) => links.push(normalized),
                    Err(e) => {
                        tracing::debug!("Dropping unnormalizable link {}: {}", absolute, e);
                    }
                }
            }
        }
    }

    Ok(ExtractedPage { title, links })
}

/// Extracts the page title from the HTML document
fn extract_title(document: &Html) -> Option<String> {
    let title_selector = Selector::parse("title").ok()?;

    document
        .select(&title_selector)
        .next()
        .map(|element| element.text().collect::<String>().trim().to_string())
        .filter(|s| !s.is_empty())
}

/// Resolves a link href to an absolute URL and validates its scheme
///
/// Returns None if the link should be excluded:
/// - javascript:, mailto:, tel: schemes
/// - data: URIs
/// - fragment-only anchors
/// - invalid URLs, or non-HTTP(S) URLs after resolution
fn resolve_link(href: &str, base_url: &Url) -> Option<Url> {
    let href = href.trim();

    if href.is_empty() {
        return None;
    }

    if href.starts_with("javascript:")
        || href.starts_with("mailto:")
        || href.starts_with("tel:")
        || href.starts_with("data:")
    {
        return None;
    }

    // Same-page anchors
    if href.starts_with('#') {
        return None;
    }

    match base_url.join(href) {
        Ok(absolute) => {
            if absolute.scheme() == "http" || absolute.scheme() == "https" {
                Some(absolute)
            } else {
                None
            }
        }
        Err(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_url() -> Url {
        Url::parse("https://example.com/page").unwrap()
    }

    fn extract(html: &str) -> ExtractedPage {
        extract_page(html, &base_url(), &base_url(), DomainPolicy::ExactHost).unwrap()
    }

    #[test]
    fn test_extract_title() {
        let page = extract(r#"<html><head><title>Test Page</title></head><body></body></html>"#);
        assert_eq!(page.title, Some("Test Page".to_string()));
    }

    #[test]
    fn test_extract_title_with_whitespace() {
        let page = extract(r#"<html><head><title>  Test Page  </title></head><body></body></html>"#);
        assert_eq!(page.title, Some("Test Page".to_string()));
    }

    #[test]
    fn test_no_title() {
        let page = extract(r#"<html><head></head><body></body></html>"#);
        assert_eq!(page.title, None);
    }

    #[test]
    fn test_extract_relative_link() {
        let page = extract(r#"<html><body><a href="/other">Link</a></body></html>"#);
        assert_eq!(page.links.len(), 1);
        assert_eq!(page.links[0].as_str(), "https://example.com/other");
    }

    #[test]
    fn test_extract_relative_path_link() {
        let page = extract(r#"<html><body><a href="other">Link</a></body></html>"#);
        assert_eq!(page.links.len(), 1);
        assert_eq!(page.links[0].as_str(), "https://example.com/other");
    }

    #[test]
    fn test_links_are_normalized() {
        let page = extract(r#"<html><body><a href="/other/#section">Link</a></body></html>"#);
        assert_eq!(page.links.len(), 1);
        assert_eq!(page.links[0].as_str(), "https://example.com/other");
    }

    #[test]
    fn test_cross_domain_link_rejected() {
        let page = extract(r#"<html><body><a href="https://other.com/page">Link</a></body></html>"#);
        assert_eq!(page.links.len(), 0);
    }

    #[test]
    fn test_subdomain_link_respects_policy() {
        let html = r#"<html><body><a href="https://blog.example.com/post">Link</a></body></html>"#;

        let exact = extract_page(html, &base_url(), &base_url(), DomainPolicy::ExactHost).unwrap();
        assert_eq!(exact.links.len(), 0);

        let inclusive =
            extract_page(html, &base_url(), &base_url(), DomainPolicy::IncludeSubdomains).unwrap();
        assert_eq!(inclusive.links.len(), 1);
    }

    #[test]
    fn test_downloadable_link_rejected() {
        let page = extract(r#"<html><body><a href="/report.pdf">Report</a></body></html>"#);
        assert_eq!(page.links.len(), 0);
    }

    #[test]
    fn test_skip_javascript_link() {
        let page = extract(r#"<html><body><a href="javascript:void(0)">Link</a></body></html>"#);
        assert_eq!(page.links.len(), 0);
    }

    #[test]
    fn test_skip_mailto_and_tel_links() {
        let page = extract(
            r#"<html><body>
            <a href="mailto:test@example.com">Email</a>
            <a href="tel:+1234567890">Call</a>
            </body></html>"#,
        );
        assert_eq!(page.links.len(), 0);
    }

    #[test]
    fn test_skip_data_uri() {
        let page =
            extract(r#"<html><body><a href="data:text/html,<h1>Test</h1>">Data</a></body></html>"#);
        assert_eq!(page.links.len(), 0);
    }

    #[test]
    fn test_skip_fragment_only() {
        let page = extract(r##"<html><body><a href="#section">Jump</a></body></html>"##);
        assert_eq!(page.links.len(), 0);
    }

    #[test]
    fn test_skip_download_attribute() {
        let page = extract(r#"<html><body><a href="/file" download>Download</a></body></html>"#);
        assert_eq!(page.links.len(), 0);
    }

    #[test]
    fn test_duplicates_pass_through() {
        let page = extract(
            r#"<html><body>
            <a href="/a">First</a>
            <a href="/a">Again</a>
            </body></html>"#,
        );
        assert_eq!(page.links.len(), 2);
    }

    #[test]
    fn test_mixed_valid_and_invalid_links() {
        let page = extract(
            r#"<html><body>
            <a href="/valid">Valid</a>
            <a href="javascript:alert('no')">Invalid</a>
            <a href="https://elsewhere.org/">External</a>
            <a href="/another-valid">Valid</a>
            </body></html>"#,
        );
        assert_eq!(page.links.len(), 2);
    }

    #[test]
    fn test_relative_links_resolve_against_page_url() {
        // The document came from /docs/ after a redirect; relative hrefs
        // resolve there, while scope is still judged against the seed
        let page_url = Url::parse("https://example.com/docs/").unwrap();
        let seed = Url::parse("https://example.com/").unwrap();

        let page = extract_page(
            r#"<html><body><a href="guide">Guide</a></body></html>"#,
            &page_url,
            &seed,
            DomainPolicy::ExactHost,
        )
        .unwrap();

        assert_eq!(page.links.len(), 1);
        assert_eq!(page.links[0].as_str(), "https://example.com/docs/guide");
    }
}
