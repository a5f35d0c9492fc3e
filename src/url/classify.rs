use serde::Deserialize;
use url::Url;

/// Path extensions treated as non-HTML resources
///
/// URLs whose final path segment carries one of these extensions are excluded
/// from both frontier insertion and fetch attempts.
const DOWNLOADABLE_EXTENSIONS: &[&str] = &[
    // Archives
    "zip", "tar", "gz", "tgz", "bz2", "xz", "rar", "7z",
    // Documents
    "pdf", "doc", "docx", "xls", "xlsx", "ppt", "pptx", "odt", "rtf", "csv",
    // Images
    "jpg", "jpeg", "png", "gif", "bmp", "svg", "webp", "ico", "tiff",
    // Audio/video
    "mp3", "wav", "ogg", "mp4", "avi", "mov", "wmv", "mkv", "webm", "flv",
    // Binaries and installers
    "exe", "msi", "dmg", "pkg", "deb", "rpm", "iso", "bin", "apk", "jar",
];

/// Policy for deciding whether a candidate URL is in crawl scope
///
/// The crawl is restricted to the seed URL's host. Whether subdomains of that
/// host count as in-scope is a configuration choice; the default is exact-host
/// matching, so `blog.example.com` is out of scope for a crawl seeded at
/// `example.com`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DomainPolicy {
    /// Candidate host must equal the seed host exactly
    #[default]
    ExactHost,

    /// Candidate host may also be any subdomain of the seed host
    IncludeSubdomains,
}

/// Checks whether a candidate URL belongs to the same domain as the base URL
///
/// Hosts are compared case-insensitively (the `url` crate lowercases them at
/// parse time). Ports are ignored for the comparison; scope is a property of
/// the host alone.
///
/// # Arguments
///
/// * `base` - The crawl's seed URL
/// * `candidate` - The URL to check
/// * `policy` - Whether subdomains of the seed host are in scope
///
/// # Examples
///
/// ```
/// use site_surveyor::url::{is_same_domain, DomainPolicy};
/// use url::Url;
///
/// let base = Url::parse("https://example.com/").unwrap();
/// let sub = Url::parse("https://blog.example.com/post").unwrap();
///
/// assert!(!is_same_domain(&base, &sub, DomainPolicy::ExactHost));
/// assert!(is_same_domain(&base, &sub, DomainPolicy::IncludeSubdomains));
/// ```
pub fn is_same_domain(base: &Url, candidate: &Url, policy: DomainPolicy) -> bool {
    let (Some(base_host), Some(candidate_host)) = (base.host_str(), candidate.host_str()) else {
        return false;
    };

    match policy {
        DomainPolicy::ExactHost => candidate_host == base_host,
        DomainPolicy::IncludeSubdomains => {
            candidate_host == base_host
                || candidate_host.ends_with(&format!(".{}", base_host))
        }
    }
}

/// Checks whether a URL points at a downloadable (non-HTML) resource
///
/// The check is by path extension only; query strings and fragments are not
/// consulted. Extensions are matched case-insensitively.
pub fn is_downloadable_file(url: &Url) -> bool {
    let last_segment = url
        .path_segments()
        .and_then(|segments| segments.last())
        .unwrap_or("");

    match last_segment.rsplit_once('.') {
        Some((stem, extension)) if !stem.is_empty() && !extension.is_empty() => {
            let extension = extension.to_lowercase();
            DOWNLOADABLE_EXTENSIONS.contains(&extension.as_str())
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn url(s: &str) -> Url {
        Url::parse(s).unwrap()
    }

    #[test]
    fn test_exact_host_match() {
        let base = url("https://example.com/");
        assert!(is_same_domain(
            &base,
            &url("https://example.com/page"),
            DomainPolicy::ExactHost
        ));
    }

    #[test]
    fn test_exact_host_rejects_subdomain() {
        let base = url("https://example.com/");
        assert!(!is_same_domain(
            &base,
            &url("https://blog.example.com/"),
            DomainPolicy::ExactHost
        ));
    }

    #[test]
    fn test_exact_host_rejects_other_domain() {
        let base = url("https://example.com/");
        assert!(!is_same_domain(
            &base,
            &url("https://other.com/"),
            DomainPolicy::ExactHost
        ));
    }

    #[test]
    fn test_subdomain_policy_accepts_subdomains() {
        let base = url("https://example.com/");
        assert!(is_same_domain(
            &base,
            &url("https://blog.example.com/"),
            DomainPolicy::IncludeSubdomains
        ));
        assert!(is_same_domain(
            &base,
            &url("https://api.v2.example.com/"),
            DomainPolicy::IncludeSubdomains
        ));
    }

    #[test]
    fn test_subdomain_policy_rejects_suffix_lookalike() {
        let base = url("https://example.com/");
        assert!(!is_same_domain(
            &base,
            &url("https://notexample.com/"),
            DomainPolicy::IncludeSubdomains
        ));
    }

    #[test]
    fn test_ports_ignored_for_scope() {
        let base = url("https://example.com/");
        assert!(is_same_domain(
            &base,
            &url("https://example.com:8443/page"),
            DomainPolicy::ExactHost
        ));
    }

    #[test]
    fn test_downloadable_by_extension() {
        assert!(is_downloadable_file(&url("https://example.com/report.pdf")));
        assert!(is_downloadable_file(&url("https://example.com/a/b/photo.jpg")));
        assert!(is_downloadable_file(&url("https://example.com/release.tar")));
    }

    #[test]
    fn test_downloadable_case_insensitive() {
        assert!(is_downloadable_file(&url("https://example.com/REPORT.PDF")));
    }

    #[test]
    fn test_downloadable_ignores_query() {
        assert!(is_downloadable_file(&url(
            "https://example.com/file.zip?session=abc"
        )));
        assert!(!is_downloadable_file(&url(
            "https://example.com/page?file=report.pdf"
        )));
    }

    #[test]
    fn test_html_pages_not_downloadable() {
        assert!(!is_downloadable_file(&url("https://example.com/")));
        assert!(!is_downloadable_file(&url("https://example.com/about")));
        assert!(!is_downloadable_file(&url("https://example.com/page.html")));
        assert!(!is_downloadable_file(&url("https://example.com/index.php")));
    }

    #[test]
    fn test_dotfile_segment_not_downloadable() {
        // A leading dot with no stem is a hidden name, not an extension
        assert!(!is_downloadable_file(&url("https://example.com/.bin")));
    }
}
