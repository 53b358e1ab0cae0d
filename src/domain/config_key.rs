// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration key paths.
//!
//! A `ConfigKey` holds a full lookup path such as `pluginsConfig['Tracer'].depth`
//! or `modules[2].name`. Keys are stored verbatim; [`ConfigKey::segments`] parses
//! them on demand for stores that need to walk a tree.
//!
//! # Path grammar
//!
//! ```text
//! path    := head ( '.' ident | '[' bracket ']' )*
//! head    := ident | '[' bracket ']'
//! ident   := [A-Za-z_][A-Za-z0-9_]*
//! bracket := '\'' chars '\'' | '"' chars '"' | digits
//! ```
//!
//! Quoted brackets name a table field; numeric brackets index a list and are
//! 1-based.

use crate::domain::errors::{ConfigError, Result};
use std::fmt;

/// A type-safe wrapper for configuration key paths.
///
/// # Examples
///
/// ```
/// use scopedcfg::domain::config_key::{ConfigKey, KeySegment};
///
/// let key = ConfigKey::from("pluginsConfig['Tracer'].depth");
/// let segments = key.segments().unwrap();
/// assert_eq!(segments[1], KeySegment::Field("Tracer".to_string()));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ConfigKey(String);

/// One step of a parsed key path.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum KeySegment {
    /// A named table field, from `.name` or `['name']`.
    Field(String),
    /// A 1-based list position, from `[n]`.
    Index(usize),
}

impl ConfigKey {
    /// Creates a new `ConfigKey` from a `String`.
    pub fn new(key: String) -> Self {
        ConfigKey(key)
    }

    /// Builds a key by appending `suffix` to `prefix` verbatim.
    ///
    /// ```
    /// use scopedcfg::domain::ConfigKey;
    ///
    /// let key = ConfigKey::scoped("pluginsConfig['Tracer'].", "depth");
    /// assert_eq!(key.as_str(), "pluginsConfig['Tracer'].depth");
    /// ```
    pub fn scoped(prefix: &str, suffix: &str) -> Self {
        let mut key = String::with_capacity(prefix.len() + suffix.len());
        key.push_str(prefix);
        key.push_str(suffix);
        ConfigKey(key)
    }

    /// Returns the key as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Converts the `ConfigKey` into its inner `String`.
    pub fn into_string(self) -> String {
        self.0
    }

    /// Parses the key path into its segments.
    ///
    /// Returns `ConfigError::InvalidKeyPath` if the path does not follow the
    /// grammar described in the module documentation.
    pub fn segments(&self) -> Result<Vec<KeySegment>> {
        let path = self.0.as_str();
        if path.is_empty() {
            return Err(ConfigError::invalid_path(path, "empty key"));
        }

        let mut segments = Vec::new();
        let mut rest = path;
        let mut head = true;

        loop {
            if let Some(inner) = rest.strip_prefix('[') {
                let (segment, remaining) =
                    parse_bracket(inner).map_err(|m| ConfigError::invalid_path(path, m))?;
                segments.push(segment);
                rest = remaining;
            } else {
                let body = if head {
                    rest
                } else {
                    rest.strip_prefix('.').ok_or_else(|| {
                        ConfigError::invalid_path(path, "expected '.' or '[' between segments")
                    })?
                };
                let (ident, remaining) =
                    split_ident(body).map_err(|m| ConfigError::invalid_path(path, m))?;
                segments.push(KeySegment::Field(ident.to_string()));
                rest = remaining;
            }

            head = false;
            if rest.is_empty() {
                return Ok(segments);
            }
        }
    }
}

/// Splits a leading identifier off `s`.
fn split_ident(s: &str) -> std::result::Result<(&str, &str), &'static str> {
    let end = s
        .find(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
        .unwrap_or(s.len());
    let ident = &s[..end];
    match ident.chars().next() {
        None => Err("expected identifier"),
        Some(c) if c.is_ascii_digit() => Err("identifier cannot start with a digit"),
        Some(_) => Ok((ident, &s[end..])),
    }
}

/// Parses the body of a bracket, `s` starting just after the `[`.
fn parse_bracket(s: &str) -> std::result::Result<(KeySegment, &str), &'static str> {
    let quote = s.chars().next().filter(|c| *c == '\'' || *c == '"');

    if let Some(q) = quote {
        let body = &s[1..];
        let close = body.find(q).ok_or("unterminated quoted field")?;
        let rest = body[close + 1..]
            .strip_prefix(']')
            .ok_or("expected ']' after quoted field")?;
        return Ok((KeySegment::Field(body[..close].to_string()), rest));
    }

    let close = s.find(']').ok_or("unterminated bracket")?;
    let digits = &s[..close];
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err("bracket must hold a quoted field or a list index");
    }
    let index: usize = digits.parse().map_err(|_| "list index out of range")?;
    if index == 0 {
        return Err("list indices start at 1");
    }
    Ok((KeySegment::Index(index), &s[close + 1..]))
}

impl From<String> for ConfigKey {
    fn from(s: String) -> Self {
        ConfigKey(s)
    }
}

impl From<&str> for ConfigKey {
    fn from(s: &str) -> Self {
        ConfigKey(s.to_string())
    }
}

impl From<ConfigKey> for String {
    fn from(key: ConfigKey) -> Self {
        key.0
    }
}

impl AsRef<str> for ConfigKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ConfigKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
