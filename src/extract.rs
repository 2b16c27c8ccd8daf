//! URL extraction from free text
//!
//! One scheme-anchored pattern recognizes `http`/`https`/`ftp`/`ftps` URLs
//! and bare `www.` hosts inside arbitrary text. Matches are deduplicated by
//! exact string equality; query strings can optionally be dropped.

use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

/// Pattern for recognizing a URL inside surrounding text.
///
/// A candidate starts at the beginning of the input or right after a non-word
/// character. The capture group spans the prefix token (`http://`,
/// `https://`, `ftp://`, `ftps://`, or bare `www.`) through the end of the
/// match, so the boundary character stays out of the captured text. The body
/// needs at least one dotted hostname segment, then takes an optional path
/// and a greedy run of URL-ish trailing characters. Character classes are
/// ASCII, and none of them admits a newline: a match never spans lines.
static URL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?im)(?:^|[^0-9A-Za-z_])((?:(?:ht|f)tps?://|www\.)(?:[0-9A-Za-z_-]+\.)+?(?:[0-9A-Za-z_.~-]+/?)*[[:alnum:].,%_=?&#+()\[\]*$~@!:/{};'-]*)").unwrap()
});

/// Extract unique URLs from free text.
///
/// Scans left to right without overlap: once a match is consumed, scanning
/// resumes right after it. With `strip_args` set, each matched URL is cut at
/// its first `?` before deduplication, so two matches that differ only in
/// their query string collapse to one entry. Text with no URL-like content
/// yields an empty set; there is no failure mode.
pub fn extract_urls(text: &str, strip_args: bool) -> HashSet<String> {
    let mut urls = HashSet::new();

    for cap in URL_RE.captures_iter(text) {
        let url = if strip_args {
            strip_arguments(&cap[1])
        } else {
            &cap[1]
        };
        urls.insert(url.to_string());
    }

    urls
}

/// Drop the query string from a URL, if any.
///
/// Truncates at the first `?`; the `?` itself is dropped. A URL without a
/// query string comes back unchanged.
pub fn strip_arguments(url: &str) -> &str {
    match url.find('?') {
        Some(idx) => &url[..idx],
        None => url,
    }
}
