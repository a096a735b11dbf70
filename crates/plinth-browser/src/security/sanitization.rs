//! Sanitization services
//!
//! [`SanitizationService`] is the engine-facing contract; the browser binds it
//! as an alias of [`DomSanitizationService`], whose default implementation is
//! registered as a sensitive binding. Replacing it should go through a
//! trusted override.

use std::fmt;

use once_cell::sync::Lazy;
use plinth_domain::error::{Error, Result};
use plinth_domain::value_objects::{Deps, Injectable};
use regex::Regex;
use tracing::warn;

/// Where a value will be used
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SecurityContext {
    Html,
    Style,
    Script,
    Url,
    ResourceUrl,
}

impl fmt::Display for SecurityContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Html => "html",
            Self::Style => "style",
            Self::Script => "script",
            Self::Url => "url",
            Self::ResourceUrl => "resource-url",
        };
        f.write_str(name)
    }
}

/// Value explicitly marked as trusted for one security context
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SafeValue {
    context: SecurityContext,
    value: String,
}

impl SafeValue {
    pub fn context(&self) -> SecurityContext {
        self.context
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }
}

/// Makes untrusted values safe for a security context
pub trait SanitizationService: Send + Sync {
    fn sanitize(&self, context: SecurityContext, value: &str) -> Result<String>;
}

/// DOM sanitization with explicit trust bypasses
pub trait DomSanitizationService: SanitizationService {
    /// Mark a value as trusted; it is returned as-is when sanitized for the same context
    fn bypass_security_trust(&self, context: SecurityContext, value: &str) -> SafeValue;

    /// Sanitize a previously trusted value
    fn sanitize_trusted(&self, context: SecurityContext, value: &SafeValue) -> Result<String> {
        if value.context == context {
            Ok(value.value.clone())
        } else {
            self.sanitize(context, &value.value)
        }
    }
}

static SAFE_URL: Lazy<Result<Regex>> = Lazy::new(|| {
    Regex::new(r"(?i)^(?:(?:https?|mailto|ftp|tel|file):|[^&:/?#]*(?:[/?#]|$))")
        .map_err(|err| Error::configuration_with_source("Invalid safe URL pattern", err))
});

static SAFE_STYLE: Lazy<Result<Regex>> = Lazy::new(|| {
    Regex::new(r"^([-,.\s%#\w]+|(?:rgb|hsl)a?\([\d.,%\s]+\))$")
        .map_err(|err| Error::configuration_with_source("Invalid safe style pattern", err))
});

fn pattern(compiled: &'static Lazy<Result<Regex>>) -> Result<&'static Regex> {
    match Lazy::force(compiled) {
        Ok(regex) => Ok(regex),
        Err(err) => Err(Error::configuration(err.to_string())),
    }
}

/// Default sanitizer: escapes markup, neutralises unsafe URLs and styles
#[derive(Debug, Default)]
pub struct DomSanitizationServiceImpl;

impl DomSanitizationServiceImpl {
    fn escape_html(value: &str) -> String {
        let mut escaped = String::with_capacity(value.len());
        for ch in value.chars() {
            match ch {
                '&' => escaped.push_str("&amp;"),
                '<' => escaped.push_str("&lt;"),
                '>' => escaped.push_str("&gt;"),
                '"' => escaped.push_str("&quot;"),
                '\'' => escaped.push_str("&#39;"),
                other => escaped.push(other),
            }
        }
        escaped
    }
}

impl SanitizationService for DomSanitizationServiceImpl {
    fn sanitize(&self, context: SecurityContext, value: &str) -> Result<String> {
        match context {
            SecurityContext::Html => Ok(Self::escape_html(value)),
            SecurityContext::Url => {
                if pattern(&SAFE_URL)?.is_match(value.trim()) {
                    Ok(value.to_string())
                } else {
                    warn!(context = %context, "Unsafe URL value neutralised");
                    Ok(format!("unsafe:{value}"))
                }
            }
            SecurityContext::Style => {
                if pattern(&SAFE_STYLE)?.is_match(value.trim()) {
                    Ok(value.to_string())
                } else {
                    warn!(context = %context, "Unsafe style value dropped");
                    Ok("unsafe".to_string())
                }
            }
            SecurityContext::Script | SecurityContext::ResourceUrl => Err(Error::unsafe_value(
                context.to_string(),
                "values for this context must be explicitly trusted",
            )),
        }
    }
}

impl DomSanitizationService for DomSanitizationServiceImpl {
    fn bypass_security_trust(&self, context: SecurityContext, value: &str) -> SafeValue {
        SafeValue {
            context,
            value: value.to_string(),
        }
    }
}

impl Injectable for DomSanitizationServiceImpl {
    fn construct(_deps: &Deps) -> Result<Self> {
        Ok(Self)
    }
}
