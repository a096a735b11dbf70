//! Platform location
//!
//! Session history over the hosting document's URL. The browser platform
//! binds [`BrowserPlatformLocation`], seeded from the environment snapshot.

use parking_lot::Mutex;
use plinth_domain::error::{Error, Result};
use plinth_domain::tokens::ENVIRONMENT;
use plinth_domain::value_objects::{Dependency, Deps, Injectable};
use tracing::debug;

/// Access to the current URL and session history
pub trait PlatformLocation: Send + Sync {
    fn href(&self) -> String;

    fn pathname(&self) -> String;

    /// Query string including the leading `?`, or empty
    fn search(&self) -> String;

    /// Fragment including the leading `#`, or empty
    fn hash(&self) -> String;

    /// Append a history entry
    fn push_state(&self, url: &str);

    /// Replace the current history entry
    fn replace_state(&self, url: &str);

    /// Step back; `false` when already at the first entry
    fn back(&self) -> bool;

    /// Step forward; `false` when already at the last entry
    fn forward(&self) -> bool;
}

/// Components of an absolute URL
#[derive(Debug, Clone, PartialEq, Eq)]
struct UrlParts {
    origin: String,
    pathname: String,
    search: String,
    hash: String,
}

impl UrlParts {
    fn parse(href: &str) -> Self {
        let (rest, hash) = split_at_char(href, '#');
        let (rest, search) = split_at_char(rest, '?');
        let (origin, pathname) = match rest.find("://") {
            Some(scheme_end) => {
                let authority = scheme_end + 3;
                match rest[authority..].find('/') {
                    Some(path_start) => rest.split_at(authority + path_start),
                    None => (rest, ""),
                }
            }
            None => ("", rest),
        };
        Self {
            origin: origin.to_string(),
            pathname: if pathname.is_empty() { "/" } else { pathname }.to_string(),
            search: search.to_string(),
            hash: hash.to_string(),
        }
    }

    fn href(&self) -> String {
        format!("{}{}{}{}", self.origin, self.pathname, self.search, self.hash)
    }

    /// Resolve `url` against this location
    fn join(&self, url: &str) -> Self {
        if url.contains("://") {
            return Self::parse(url);
        }
        let absolute = match url.chars().next() {
            Some('/') => format!("{}{}", self.origin, url),
            Some('?') => format!("{}{}{}", self.origin, self.pathname, url),
            Some('#') => format!("{}{}{}{}", self.origin, self.pathname, self.search, url),
            _ => {
                let base = self
                    .pathname
                    .rsplit_once('/')
                    .map_or("", |(directory, _)| directory);
                format!("{}{}/{}", self.origin, base, url)
            }
        };
        Self::parse(&absolute)
    }
}

fn split_at_char(value: &str, separator: char) -> (&str, &str) {
    match value.find(separator) {
        Some(at) => value.split_at(at),
        None => (value, ""),
    }
}

struct History {
    entries: Vec<UrlParts>,
    index: usize,
}

impl History {
    fn current(&self) -> &UrlParts {
        &self.entries[self.index]
    }
}

/// In-memory session history seeded from the environment URL
pub struct BrowserPlatformLocation {
    history: Mutex<History>,
}

impl BrowserPlatformLocation {
    pub fn new(href: &str) -> Self {
        Self {
            history: Mutex::new(History {
                entries: vec![UrlParts::parse(href)],
                index: 0,
            }),
        }
    }

    /// Number of history entries
    pub fn len(&self) -> usize {
        self.history.lock().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.history.lock().entries.is_empty()
    }
}

impl PlatformLocation for BrowserPlatformLocation {
    fn href(&self) -> String {
        self.history.lock().current().href()
    }

    fn pathname(&self) -> String {
        self.history.lock().current().pathname.clone()
    }

    fn search(&self) -> String {
        self.history.lock().current().search.clone()
    }

    fn hash(&self) -> String {
        self.history.lock().current().hash.clone()
    }

    fn push_state(&self, url: &str) {
        let mut history = self.history.lock();
        let next = history.current().join(url);
        let keep = history.index + 1;
        history.entries.truncate(keep);
        history.entries.push(next);
        history.index = keep;
        debug!(url, entries = history.entries.len(), "History entry pushed");
    }

    fn replace_state(&self, url: &str) {
        let mut history = self.history.lock();
        let next = history.current().join(url);
        let index = history.index;
        history.entries[index] = next;
    }

    fn back(&self) -> bool {
        let mut history = self.history.lock();
        if history.index == 0 {
            return false;
        }
        history.index -= 1;
        true
    }

    fn forward(&self) -> bool {
        let mut history = self.history.lock();
        if history.index + 1 >= history.entries.len() {
            return false;
        }
        history.index += 1;
        true
    }
}

impl Injectable for BrowserPlatformLocation {
    fn dependencies() -> Vec<Dependency> {
        vec![Dependency::one(&*ENVIRONMENT)]
    }

    fn construct(deps: &Deps) -> Result<Self> {
        let env = deps.get(&*ENVIRONMENT)?;
        if env.url.trim().is_empty() {
            return Err(Error::configuration("environment.url must not be empty"));
        }
        Ok(Self::new(&env.url))
    }
}
