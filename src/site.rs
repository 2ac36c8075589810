//! Hostname normalization for derivation input.
//!
//! The core derives from a bare hostname, never a full URL. This module does
//! the stripping so `https://user@Example.com:8443/login?next=/` and
//! `example.com` derive the same password.

use anyhow::{Result, bail};

/// Reduces a user-supplied site string (hostname or URL) to a lowercase
/// hostname.
///
/// Drops the scheme, userinfo, port, path, query, and fragment. Ports are
/// deliberately excluded so `example.com:8443` and `example.com` match.
///
/// # Errors
///
/// Fails when nothing hostname-like remains after stripping.
pub fn normalize(site: &str) -> Result<String> {
    let mut rest = site.trim();

    if let Some((_, after)) = rest.split_once("://") {
        rest = after;
    }
    // Cut the authority out before looking for userinfo: an '@' in the path
    // or query (profile URLs, mailto-style params) is not a credential
    // delimiter.
    if let Some((before, _)) = rest.split_once(['/', '?', '#']) {
        rest = before;
    }
    if let Some((_, after)) = rest.rsplit_once('@') {
        rest = after;
    }
    // IPv6 literals keep their colons inside the brackets.
    let host = if rest.starts_with('[') {
        match rest.find(']') {
            Some(end) => &rest[..=end],
            None => rest,
        }
    } else if let Some((before, _)) = rest.split_once(':') {
        before
    } else {
        rest
    };

    if host.is_empty() {
        bail!("no hostname in '{site}'");
    }

    Ok(host.to_ascii_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_hostname_passes_through() {
        assert_eq!(normalize("example.com").unwrap(), "example.com");
    }

    #[test]
    fn url_is_reduced_to_its_hostname() {
        assert_eq!(
            normalize("https://example.com/login?next=/home#top").unwrap(),
            "example.com"
        );
    }

    #[test]
    fn scheme_userinfo_and_port_are_dropped() {
        assert_eq!(
            normalize("https://alice@Example.COM:8443/dashboard").unwrap(),
            "example.com"
        );
    }

    #[test]
    fn hostname_is_lowercased() {
        assert_eq!(normalize("EXAMPLE.com").unwrap(), "example.com");
    }

    #[test]
    fn port_without_scheme_is_dropped() {
        assert_eq!(normalize("example.com:8080").unwrap(), "example.com");
    }

    #[test]
    fn at_sign_in_path_is_not_userinfo() {
        assert_eq!(
            normalize("https://medium.com/@user/post").unwrap(),
            "medium.com"
        );
    }

    #[test]
    fn at_sign_in_query_is_not_userinfo() {
        assert_eq!(
            normalize("https://example.com?reply=a@b.com").unwrap(),
            "example.com"
        );
    }

    #[test]
    fn ipv6_literal_keeps_its_brackets() {
        assert_eq!(normalize("http://[::1]:8080/x").unwrap(), "[::1]");
    }

    #[test]
    fn surrounding_whitespace_is_trimmed() {
        assert_eq!(normalize("  example.com\n").unwrap(), "example.com");
    }

    #[test]
    fn empty_input_fails() {
        assert!(normalize("").is_err());
        assert!(normalize("https:///path").is_err());
    }
}
