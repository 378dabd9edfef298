//! Evidence items and trusted-source classification.

use serde::{Deserialize, Serialize};
use url::Url;

/// Official government domains (substring match on the hostname).
pub const GOVT_DOMAINS: &[&str] = &["gov.in", "nic.in", "pib.gov.in", ".gov"];

/// Top trusted news domains (substring match on the hostname).
pub const MEDIA_DOMAINS: &[&str] = &[
    "bbc.com",
    "reuters.com",
    "ndtv.com",
    "thehindu.com",
    "indianexpress.com",
    "timesofindia",
    "aniin.com",
    "pti.in",
];

/// One corroborating (or merely related) search result for a claim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Evidence {
    /// Result headline.
    pub title: String,
    /// Result snippet.
    pub snippet: String,
    /// Link to the source page.
    pub link: String,
    /// Hosted on an official government domain.
    #[serde(rename = "isGovt")]
    pub is_govt: bool,
    /// Hosted on a trusted media domain.
    #[serde(rename = "isTrusted")]
    pub is_trusted: bool,
}

impl Evidence {
    /// Builds an evidence item, classifying the link's host against the
    /// trusted-source tables.
    #[must_use]
    pub fn from_result(title: String, snippet: String, link: String) -> Self {
        let (is_govt, is_trusted) = classify_link(&link);
        Self {
            title,
            snippet,
            link,
            is_govt,
            is_trusted,
        }
    }

    /// Whether this item counts toward the trusted evidence total.
    #[must_use]
    pub const fn counts_as_trusted(&self) -> bool {
        self.is_govt || self.is_trusted
    }
}

/// Classifies a link as `(is_govt, is_trusted_media)`.
///
/// Unparseable links classify as neither.
#[must_use]
pub fn classify_link(link: &str) -> (bool, bool) {
    let Ok(url) = Url::parse(link) else {
        return (false, false);
    };
    let Some(host) = url.host_str() else {
        return (false, false);
    };
    let host = host.to_lowercase();

    let is_govt = GOVT_DOMAINS.iter().any(|domain| host.contains(domain));
    let is_trusted = MEDIA_DOMAINS.iter().any(|domain| host.contains(domain));
    (is_govt, is_trusted)
}

/// Counts the items that come from a trusted source.
#[must_use]
pub fn trusted_count(evidence: &[Evidence]) -> usize {
    evidence.iter().filter(|e| e.counts_as_trusted()).count()
}
