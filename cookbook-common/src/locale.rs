//! Locale selection for user-facing text
//!
//! Each controller keeps its own message table; this only picks which one.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Language of status messages, labels and placeholders
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Locale {
    /// Traditional Chinese (Taiwan)
    #[default]
    #[serde(rename = "zh-TW")]
    ZhTw,
    /// English
    #[serde(rename = "en")]
    En,
}

impl FromStr for Locale {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "zh-tw" | "zh_tw" | "zh" => Ok(Locale::ZhTw),
            "en" | "en-us" | "en_us" => Ok(Locale::En),
            other => Err(crate::Error::InvalidInput(format!("unknown locale: {}", other))),
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Locale::ZhTw => write!(f, "zh-TW"),
            Locale::En => write!(f, "en"),
        }
    }
}

impl Locale {
    /// HTML `lang` attribute value
    pub fn html_lang(&self) -> &'static str {
        match self {
            Locale::ZhTw => "zh-Hant-TW",
            Locale::En => "en",
        }
    }
}
