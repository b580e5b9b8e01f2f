//! URL that has passed format and host resolution checks.

use std::fmt;

/// An absolute HTTP(S) URL whose host resolved at validation time.
///
/// Only [`crate::application::services::UrlValidator`] can construct one, so
/// every value reaching the registry went through validation. The wrapped
/// string is the submitted input verbatim: no case folding, no trailing slash
/// changes, query strings untouched.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ValidatedUrl(String);

impl ValidatedUrl {
    pub(crate) fn new(url: String) -> Self {
        Self(url)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl AsRef<str> for ValidatedUrl {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ValidatedUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
