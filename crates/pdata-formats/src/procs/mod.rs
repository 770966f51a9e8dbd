//! Processing parameter blocks (`procs`, `proc2s`, ...)
//!
//! A parameter block is JCAMP-DX flavoured text. Each parameter sits on a
//! line of the form `##$NAME= value`:
//!
//! ```text
//! ##TITLE= Parameter file, TopSpin 4.1.4
//! ##JCAMPDX= 5.0
//! $$ /opt/data/exp/10/pdata/1/procs
//! ##$BYTORDP= 0
//! ##$DTYPP= 0
//! ##$NC_proc= -3
//! ##$SI= 65536
//! ##END=
//! ```
//!
//! Only `##$` lines are kept. Section markers (`##TITLE=`), comments (`$$`),
//! and the continuation lines of array values (`##$TILT= (0..7)` followed by
//! the numbers on later lines) are dropped. Values are kept as trimmed
//! strings; turning them into numbers is left to [`DecodeSettings`] and
//! [`ParameterSet::integer`] so a bad value only affects its own setting.

mod settings;

use std::collections::BTreeMap;

use serde::Serialize;
use tracing::debug;

pub use settings::{
    BYTORDP, ByteOrder, DTYPP, DecodeSettings, ElementType, NC_PROC, Setting,
};

/// Prefix marking a parameter line
const PARAMETER_PREFIX: &str = "##$";

/// Parameters parsed from one parameter block
///
/// Keys are parameter names without the `##$` prefix; values are the raw
/// text after `=`, trimmed. A repeated key keeps its last value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ParameterSet {
    entries: BTreeMap<String, String>,
}

impl ParameterSet {
    /// Create an empty parameter set
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a parameter block
    ///
    /// `None` stands for a missing parameter member and yields an empty set,
    /// which makes every decoding setting fall back to its default.
    ///
    /// ```rust
    /// use pdata_formats::procs::ParameterSet;
    ///
    /// let params = ParameterSet::parse(Some("##$SI= 1024\r\n$$ comment\n##$DTYPP= 2\n"));
    /// assert_eq!(params.len(), 2);
    /// assert_eq!(params.get("SI"), Some("1024"));
    /// assert!(ParameterSet::parse(None).is_empty());
    /// ```
    pub fn parse(text: Option<&str>) -> Self {
        let mut entries = BTreeMap::new();

        if let Some(text) = text {
            for line in text.lines() {
                if let Some((key, value)) = parse_line(line) {
                    entries.insert(key.to_string(), value.to_string());
                }
            }
        }

        debug!("Parsed {} parameters", entries.len());
        Self { entries }
    }

    /// Raw value of a parameter
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Whether a parameter is present
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Number of parameters
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no parameter was parsed
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over `(name, value)` pairs in name order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Read a parameter as an integer
    ///
    /// The value is read the way acquisition software writes it: optional
    /// sign, decimal digits, and anything after the digits ignored. A
    /// missing, empty, non-numeric or out-of-range value gives
    /// `Setting::Default(0)`.
    pub fn integer(&self, key: &str) -> Setting<i32> {
        self.get(key)
            .and_then(parse_leading_integer)
            .map_or(Setting::Default(0), Setting::Parsed)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for ParameterSet {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into().trim().to_string()))
                .collect(),
        }
    }
}

/// Extract `(name, value)` from a `##$NAME=VALUE` line
///
/// The prefix may appear anywhere in the line; the first occurrence followed
/// by a valid name and `=` is used.
fn parse_line(line: &str) -> Option<(&str, &str)> {
    let mut rest = line;

    while let Some(pos) = rest.find(PARAMETER_PREFIX) {
        let candidate = &rest[pos + PARAMETER_PREFIX.len()..];
        let name_len = candidate.bytes().take_while(|b| is_name_byte(*b)).count();

        if name_len > 0 && candidate.as_bytes().get(name_len) == Some(&b'=') {
            return Some((&candidate[..name_len], candidate[name_len + 1..].trim()));
        }

        rest = &rest[pos + 1..];
    }

    None
}

/// Parameter names are ASCII letters, digits and underscores (`NC_proc`,
/// `BYTORDP`, `TDeff`)
fn is_name_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

fn parse_leading_integer(value: &str) -> Option<i32> {
    let value = value.trim_start();
    let bytes = value.as_bytes();

    let sign_len = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let digits = bytes[sign_len..]
        .iter()
        .take_while(|b| b.is_ascii_digit())
        .count();

    if digits == 0 {
        return None;
    }

    value[..sign_len + digits].parse().ok()
}
