//! Ecosystem inference from a tool's display name.
//!
//! Case-insensitive substring matching against fixed keyword lists, checked
//! in priority order Microsoft -> Google -> Apple. Pure and total: every
//! input, including the empty string, yields a tag.

use serde::Serialize;

const MICROSOFT_KEYWORDS: [&str; 6] = ["microsoft", "outlook", "office", "teams", "365", "onedrive"];
const GOOGLE_KEYWORDS: [&str; 5] = ["google", "gmail", "workspace", "android", "g suite"];
const APPLE_KEYWORDS: [&str; 6] = ["apple", "icloud", "mac", "ios", "ipad", "iphone"];

#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum EcosystemTag {
    Apple,
    Google,
    Microsoft,
    Unknown,
}

impl EcosystemTag {
    pub fn label(self) -> &'static str {
        match self {
            EcosystemTag::Apple => "apple",
            EcosystemTag::Google => "google",
            EcosystemTag::Microsoft => "microsoft",
            EcosystemTag::Unknown => "unknown",
        }
    }
}

pub fn classify(name: &str) -> EcosystemTag {
    let t = name.to_lowercase();

    if MICROSOFT_KEYWORDS.iter().any(|k| t.contains(k)) {
        return EcosystemTag::Microsoft;
    }
    if GOOGLE_KEYWORDS.iter().any(|k| t.contains(k)) {
        return EcosystemTag::Google;
    }
    if APPLE_KEYWORDS.iter().any(|k| t.contains(k)) {
        return EcosystemTag::Apple;
    }
    EcosystemTag::Unknown
}
