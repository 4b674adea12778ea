//! Social share link construction.
//!
//! # Responsibility
//! - Build platform share URLs for one article page.
//! - Percent-encode caller-provided values safely.
//!
//! # Invariants
//! - Pure string construction; no network activity.

use url::Url;

/// Supported share targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SharePlatform {
    Twitter,
    Facebook,
    LinkedIn,
}

impl SharePlatform {
    fn endpoint(self) -> &'static str {
        match self {
            Self::Twitter => "https://twitter.com/intent/tweet",
            Self::Facebook => "https://www.facebook.com/sharer/sharer.php",
            Self::LinkedIn => "https://www.linkedin.com/sharing/share-offsite/",
        }
    }
}

/// Builds the share URL for one platform.
///
/// `page_url` is the canonical article page address and `title` its
/// display title; both are percent-encoded as query parameters. Twitter
/// carries the title, Facebook and LinkedIn only carry the URL.
pub fn share_url(platform: SharePlatform, page_url: &str, title: &str) -> String {
    let mut url = Url::parse(platform.endpoint()).expect("valid share endpoint");

    {
        let mut pairs = url.query_pairs_mut();
        match platform {
            SharePlatform::Twitter => {
                pairs.append_pair("url", page_url);
                pairs.append_pair("text", title);
            }
            SharePlatform::Facebook => {
                pairs.append_pair("u", page_url);
            }
            SharePlatform::LinkedIn => {
                pairs.append_pair("url", page_url);
            }
        }
    }

    url.into()
}
