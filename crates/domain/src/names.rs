//! Name normalization and registrable-domain helpers.
//!
//! Everything the pipeline compares, stores or re-publishes goes through
//! [`normalize_name`] first, so the rest of the code can assume lower-case
//! names without surrounding whitespace or dots.

use std::net::IpAddr;

/// Lower-cases `raw` and strips surrounding whitespace and dots.
///
/// Idempotent: `normalize_name(&normalize_name(x)) == normalize_name(x)`.
pub fn normalize_name(raw: &str) -> String {
    raw.trim_matches(|c: char| c == '.' || c.is_whitespace())
        .to_lowercase()
}

/// Computes the registrable domain (effective TLD plus one label) of `name`
/// using the public suffix list.
///
/// Returns `None` for empty names, names with empty labels, IP literals and
/// names that are themselves a public suffix (e.g. `co.uk`).
pub fn registrable_domain(name: &str) -> Option<String> {
    let name = normalize_name(name);
    if name.is_empty() || name.split('.').any(str::is_empty) {
        return None;
    }
    if name.parse::<IpAddr>().is_ok() {
        return None;
    }

    psl::domain_str(&name)
        .map(str::to_lowercase)
        .filter(|domain| !domain.is_empty())
}

/// True when `name` equals `root` or is a subdomain of it.
///
/// Both arguments are expected to be normalized.
pub fn is_same_or_subdomain(name: &str, root: &str) -> bool {
    if root.is_empty() {
        return false;
    }
    name == root
        || name
            .strip_suffix(root)
            .is_some_and(|prefix| prefix.ends_with('.'))
}

/// Extracts the target host from record data that may arrive in full
/// presentation format (`"10 mail.example.com"` for MX,
/// `"10 5 5060 sip.example.com"` for SRV). Bare targets pass through.
pub fn rdata_target(data: &str) -> String {
    data.split_whitespace()
        .last()
        .map(normalize_name)
        .unwrap_or_default()
}
