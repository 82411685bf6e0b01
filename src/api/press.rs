use std::collections::HashMap;
use url::Url;

/// Label used when a URL cannot be parsed or has no host.
pub const NO_SOURCE: &str = "출처없음";

/// Number of characters kept from an unmapped domain.
const FALLBACK_LABEL_CHARS: usize = 6;

const DEFAULT_PRESS: &[(&str, &str)] = &[
    ("chosun.com", "조선일보"),
    ("yna.co.kr", "연합뉴스"),
    ("hani.co.kr", "한겨레"),
    ("joongang.co.kr", "중앙일보"),
    ("mbn.co.kr", "MBN"),
    ("kbs.co.kr", "KBS"),
    ("sbs.co.kr", "SBS"),
    ("ytn.co.kr", "YTN"),
    ("donga.com", "동아일보"),
    ("segye.com", "세계일보"),
    ("munhwa.com", "문화일보"),
    ("newsis.com", "뉴시스"),
    ("naver.com", "네이버"),
    ("daum.net", "다음"),
    ("kukinews.com", "국민일보"),
    ("kookbang.dema.mil.kr", "국방일보"),
    ("edaily.co.kr", "이데일리"),
    ("news1.kr", "뉴스1"),
    ("mbnmoney.mbn.co.kr", "MBN"),
    ("news.kmib.co.kr", "국민일보"),
];

/// Read-only domain → publisher name table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PressDirectory {
    names: HashMap<String, String>,
}

impl PressDirectory {
    pub fn new(names: HashMap<String, String>) -> Self {
        Self { names }
    }

    /// Built-in table with `overrides` layered on top.
    pub fn with_overrides<'a, I>(overrides: I) -> Self
    where
        I: IntoIterator<Item = (&'a String, &'a String)>,
    {
        let mut dir = Self::default();
        for (domain, name) in overrides {
            dir.names
                .insert(domain.trim_start_matches("www.").to_string(), name.clone());
        }
        dir
    }

    pub fn get(&self, domain: &str) -> Option<&str> {
        self.names.get(domain).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Publisher name for `url`.
    ///
    /// The host is looked up exactly (after dropping a leading `www.`); an
    /// unknown host falls back to its first six characters, and anything that
    /// does not parse as a URL with a host yields [`NO_SOURCE`].
    pub fn resolve(&self, url: &str) -> String {
        let Some(domain) = domain_of(url) else {
            return NO_SOURCE.to_string();
        };
        match self.get(&domain) {
            Some(name) => name.to_string(),
            None => domain.chars().take(FALLBACK_LABEL_CHARS).collect(),
        }
    }
}

impl Default for PressDirectory {
    fn default() -> Self {
        let names = DEFAULT_PRESS
            .iter()
            .map(|(domain, name)| (domain.to_string(), name.to_string()))
            .collect();
        Self { names }
    }
}

/// Host of `url` without a leading `www.`. Punycode labels are decoded back
/// to Unicode so the fallback label shows the domain as written.
fn domain_of(url: &str) -> Option<String> {
    let parsed = Url::parse(url.trim()).ok()?;
    let host = parsed.host_str().filter(|h| !h.is_empty())?;
    let host = if host.split('.').any(|label| label.starts_with("xn--")) {
        match idna::domain_to_unicode(host) {
            (unicode, Ok(())) => unicode,
            (_, Err(_)) => host.to_string(),
        }
    } else {
        host.to_string()
    };
    Some(host.strip_prefix("www.").map(str::to_string).unwrap_or(host))
}
