//! Decoding of the info-strings: the backslash separated key/value serialization used by the game server
//! for the `InitGame`, `InitRound`, `ClientUserinfo` & `ClientUserinfoChanged` data.
//!
//! `\key1\value1\key2\value2...` -- the leading backslash is optional and no escaping exists, so
//! decoding is purely positional: split on `\`, drop a leading empty token and pair up the remaining ones.
//! Odd token streams (a trailing key without a value) have their last key dropped.

use std::str::FromStr;


/// The decoded key/value pairs, in the order they appeared on the wire.\
/// Keys are matched case-insensitively -- the game isn't consistent with them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InfoString {
    entries: Vec<(String, String)>,
}

impl InfoString {

    pub fn get(&self, key: &str) -> Option<&str> {
        self.position(key)
            .map(|index| self.entries[index].1.as_str())
    }

    /// Parses the value of `key` -- `None` if absent or unparseable
    pub fn get_as<T: FromStr>(&self, key: &str) -> Option<T> {
        self.get(key)
            .and_then(|value| value.trim().parse().ok())
    }

    /// `true` if the key is present, even if with an empty value
    pub fn contains_key(&self, key: &str) -> bool {
        self.position(key).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item=(&str, &str)> {
        self.entries.iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn position(&self, key: &str) -> Option<usize> {
        self.entries.iter()
            .position(|(existing_key, _)| existing_key.eq_ignore_ascii_case(key))
    }

    /// Repeated keys keep their first position, but take the last value
    fn insert(&mut self, key: &str, value: &str) {
        match self.position(key) {
            Some(index) => self.entries[index].1 = value.to_string(),
            None => self.entries.push((key.to_string(), value.to_string())),
        }
    }

}

/// Transforms a raw info-string into an [InfoString]
pub fn decode(raw: &str) -> InfoString {
    let raw = raw.trim();
    let raw = raw.strip_prefix('\\').unwrap_or(raw);
    let mut info_string = InfoString::default();
    if raw.is_empty() {
        return info_string
    }
    let mut tokens = raw.split('\\');
    while let (Some(key), Some(value)) = (tokens.next(), tokens.next()) {
        info_string.insert(key, value);
    }
    info_string
}
