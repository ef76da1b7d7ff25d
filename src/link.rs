//! Share-link handling for hosted track files.

/// The host marker identifying Dropbox share links.
pub const DROPBOX_HOST: &str = "dropbox.com";

/// The preview download flag when it opens the query string.
const PREVIEW_FLAG_FIRST: &str = "?dl=0";

/// The preview download flag within a longer query string.
const PREVIEW_FLAG_REST: &str = "&dl=0";

/// Rewrites a Dropbox share link from its preview form to its
/// direct-download form.
///
/// A URL qualifies when it contains the Dropbox host marker and carries a
/// `dl=0` query flag; the flag is rewritten to `dl=1` and the rest of the
/// string is preserved unchanged. All other URLs pass through unmodified,
/// which also makes the transform idempotent.
///
/// # Examples
///
/// ```
/// use sessionfile::link;
///
/// assert_eq!(
///     link::direct_download("https://www.dropbox.com/s/abc/a.bw?dl=0"),
///     "https://www.dropbox.com/s/abc/a.bw?dl=1"
/// );
///
/// // Other hosts are left alone, even with a `dl=0` flag.
/// assert_eq!(
///     link::direct_download("https://example.com/a.bw?dl=0"),
///     "https://example.com/a.bw?dl=0"
/// );
/// ```
pub fn direct_download(url: &str) -> String {
    if url.contains(DROPBOX_HOST) {
        if url.contains(PREVIEW_FLAG_FIRST) {
            return url.replace(PREVIEW_FLAG_FIRST, "?dl=1");
        } else if url.contains(PREVIEW_FLAG_REST) {
            return url.replace(PREVIEW_FLAG_REST, "&dl=1");
        }
    }

    url.to_string()
}

/// Derives a file name from a URL: the substring after the final `/` with
/// any trailing `?`-delimited query portion removed.
///
/// # Examples
///
/// ```
/// use sessionfile::link;
///
/// assert_eq!(
///     link::file_name("https://www.dropbox.com/s/abc/a.bw?dl=1"),
///     "a.bw"
/// );
/// assert_eq!(link::file_name("https://example.com/tracks/b.bw"), "b.bw");
/// ```
pub fn file_name(url: &str) -> &str {
    let base = url.rsplit('/').next().unwrap_or(url);
    base.split('?').next().unwrap_or(base)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rewrites_leading_preview_flag() {
        assert_eq!(
            direct_download("https://www.dropbox.com/s/abc/a.bw?dl=0"),
            "https://www.dropbox.com/s/abc/a.bw?dl=1"
        );
    }

    #[test]
    fn test_rewrites_embedded_preview_flag() {
        assert_eq!(
            direct_download("https://www.dropbox.com/s/abc/a.bw?rlkey=xyz&dl=0"),
            "https://www.dropbox.com/s/abc/a.bw?rlkey=xyz&dl=1"
        );
    }

    #[test]
    fn test_non_dropbox_urls_pass_through() {
        let url = "https://example.com/a.bw?dl=0";
        assert_eq!(direct_download(url), url);
    }

    #[test]
    fn test_dropbox_urls_without_a_preview_flag_pass_through() {
        let url = "https://www.dropbox.com/s/abc/a.bw?dl=1";
        assert_eq!(direct_download(url), url);
    }

    #[test]
    fn test_rewriting_is_idempotent() {
        let once = direct_download("https://www.dropbox.com/s/abc/a.bw?dl=0");
        assert_eq!(direct_download(&once), once);
    }

    #[test]
    fn test_file_name_strips_the_query_portion() {
        assert_eq!(file_name("https://www.dropbox.com/s/abc/a.bw?dl=1"), "a.bw");
    }

    #[test]
    fn test_file_name_without_a_query_portion() {
        assert_eq!(file_name("https://example.com/tracks/b.bw"), "b.bw");
    }

    #[test]
    fn test_file_name_of_a_bare_name() {
        assert_eq!(file_name("c.bw"), "c.bw");
    }
}
