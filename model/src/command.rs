//! Resting place for [Command] & [Prefix]

use serde::Serialize;
use crate::client::Client;


/// How loud the answer to a command should be -- chosen by the sigil the message starts with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Prefix {
    /// `!command` -- the answer is sent privately to the issuer
    Normal,
    /// `@command` -- the answer is sent to everybody
    Loud,
    /// `&command` -- the answer is sent to everybody, in big text
    Forced,
}

impl Prefix {

    pub fn from_sigil(sigil: char) -> Option<Self> {
        match sigil {
            '!' => Some(Prefix::Normal),
            '@' => Some(Prefix::Loud),
            '&' => Some(Prefix::Forced),
            _ => None,
        }
    }

    pub fn sigil(&self) -> char {
        match self {
            Prefix::Normal => '!',
            Prefix::Loud   => '@',
            Prefix::Forced => '&',
        }
    }

}

/// A bot command issued through the chat.\
/// `params` are kept raw: tokenization only happens when they are accessed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Command {
    pub client: Client,
    pub prefix: Prefix,
    /// Lowercase command name
    pub handle: String,
    pub params: Option<String>,
    /// Set when a client runs the command on behalf of another one
    pub force: bool,
}

impl Command {

    pub fn new<IntoString: Into<String>>(client: Client, prefix: Prefix, handle: &str, params: Option<IntoString>, force: bool) -> Self {
        Self {
            client,
            prefix,
            handle: handle.to_lowercase(),
            params: params.map(Into::into),
            force,
        }
    }

    /// The whitespace separated parameter at `index`
    pub fn param_string(&self, index: usize) -> Option<&str> {
        self.params.as_deref()?
            .split_whitespace()
            .nth(index)
    }

    /// Everything from the parameter at `index` on, with the inner whitespaces preserved
    pub fn param_string_concat(&self, index: usize) -> Option<&str> {
        let mut rest = self.params.as_deref()?.trim();
        for _ in 0..index {
            let end = rest.find(char::is_whitespace)?;
            rest = rest[end..].trim_start();
        }
        (!rest.is_empty()).then_some(rest)
    }

    pub fn param_count(&self) -> usize {
        self.params.as_deref()
            .map_or(0, |params| params.split_whitespace().count())
    }

}
