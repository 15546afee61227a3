//! URL as submitted by a Webmention sender.

use url::Url;

/// A syntactically valid URL together with the exact text it was parsed from.
///
/// The parsed form is what gets fetched. The submitted text is what gets
/// authorized and relayed, so hosts are compared as the sender wrote them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmittedUrl {
    raw: String,
    url: Url,
}

impl SubmittedUrl {
    /// Parses a form value into a URL.
    ///
    /// Leading and trailing whitespace and control characters are dropped
    /// before parsing, the same way the URL parser itself ignores them.
    ///
    /// # Errors
    ///
    /// Returns [`url::ParseError`] for empty input, relative references and
    /// anything else the WHATWG URL parser rejects.
    pub fn parse(input: &str) -> Result<Self, url::ParseError> {
        let raw = input.trim_matches(|c: char| c <= ' ');
        let url = Url::parse(raw)?;

        Ok(Self {
            raw: raw.to_string(),
            url,
        })
    }

    /// The submitted text.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    pub fn scheme(&self) -> &str {
        self.url.scheme()
    }

    /// Returns the authority host exactly as written, port included.
    ///
    /// Userinfo is dropped. Case, trailing dots and ports are kept, so
    /// `https://EXAMPLE.com:443/` yields `EXAMPLE.com:443`. URLs without a
    /// `scheme://` authority yield an empty string.
    pub fn presented_host(&self) -> &str {
        let Some((_, rest)) = self.raw.split_once(':') else {
            return "";
        };
        let Some(rest) = rest.strip_prefix("//") else {
            return "";
        };

        let end = rest.find(['/', '?', '#', '\\']).unwrap_or(rest.len());
        let authority = &rest[..end];

        match authority.rsplit_once('@') {
            Some((_, host)) => host,
            None => authority,
        }
    }
}

impl std::fmt::Display for SubmittedUrl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.raw)
    }
}
