//! Page address: the viewer's own URL
//!
//! The query may carry `data=<url>` to choose the document source. The
//! fragment carries the reading position as `#p=<1-based page>`; it is read
//! once at startup and rewritten on every render so the address can be
//! shared or reopened at the same page.

use cookbook_common::DEFAULT_DATA_PATH;
use reqwest::Url;
use std::fmt;

/// Default page address when none is given
pub const DEFAULT_ADDRESS: &str = "recipe.html";

/// Address split into everything before `#` and the fragment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageAddress {
    /// Path and query, e.g. `recipe.html?data=./json/x.json`
    location: String,
    /// Fragment without the leading `#`
    fragment: Option<String>,
}

impl PageAddress {
    pub fn parse(address: &str) -> Self {
        match address.split_once('#') {
            Some((location, fragment)) => Self {
                location: location.to_string(),
                fragment: Some(fragment.to_string()),
            },
            None => Self {
                location: address.to_string(),
                fragment: None,
            },
        }
    }

    pub fn fragment(&self) -> Option<&str> {
        self.fragment.as_deref()
    }

    /// Decoded value of the first `name` query parameter
    pub fn query_param(&self, name: &str) -> Option<String> {
        let (_, query) = self.location.split_once('?')?;
        // Only the query is needed; a fixed base makes it parseable as a URL
        let url = Url::parse(&format!("http://page.invalid/?{}", query)).ok()?;
        url.query_pairs()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.into_owned())
    }

    /// Document URL: the `data` query parameter, else the default path
    pub fn data_url(&self) -> String {
        self.query_param("data")
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_DATA_PATH.to_string())
    }

    /// Starting page index from a `#p=<n>` marker in the fragment
    ///
    /// The first `#p=` followed by digits wins, so `#top#p=2` reads page 2.
    /// `n` is raised to at least 1 and converted to 0-based. Anything else
    /// starts at page 0. Clamping to the page count is left to the caller.
    pub fn start_index(&self) -> usize {
        let Some(fragment) = self.fragment.as_deref() else {
            return 0;
        };
        let hash = format!("#{}", fragment);
        let Some(digits) = hash
            .match_indices("#p=")
            .map(|(at, marker)| leading_digits(&hash[at + marker.len()..]))
            .find(|digits| !digits.is_empty())
        else {
            return 0;
        };
        // All digits, so parsing only fails on overflow
        let n = digits.parse::<usize>().unwrap_or(usize::MAX);
        n.max(1) - 1
    }

    /// Record the current page (0-based index) as `p=<index + 1>`
    pub fn set_page(&mut self, index: usize) {
        self.fragment = Some(format!("p={}", index + 1));
    }
}

fn leading_digits(text: &str) -> &str {
    let end = text
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(text.len());
    &text[..end]
}

impl Default for PageAddress {
    fn default() -> Self {
        Self::parse(DEFAULT_ADDRESS)
    }
}

impl fmt::Display for PageAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.fragment {
            Some(fragment) => write!(f, "{}#{}", self.location, fragment),
            None => write!(f, "{}", self.location),
        }
    }
}
