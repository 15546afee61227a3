//! Form body of `POST /accept`.

use url::form_urlencoded;

use crate::domain::entities::{AcceptRequest, SubmittedUrl};
use crate::error::AppError;

/// The only content type accepted by `POST /accept`, compared byte for byte.
pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Raw `source` and `target` fields of a Webmention form.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct AcceptForm {
    pub source: Option<String>,
    pub target: Option<String>,
}

impl AcceptForm {
    /// Decodes an `application/x-www-form-urlencoded` body.
    ///
    /// The first occurrence of each field wins and unknown fields are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::MalformedForm`] if the body is not UTF-8 or contains
    /// a `%` that is not followed by two hex digits.
    pub fn from_bytes(body: &[u8]) -> Result<Self, AppError> {
        let text = std::str::from_utf8(body).map_err(|e| AppError::MalformedForm(e.to_string()))?;
        check_percent_escapes(text)?;

        let mut form = Self::default();
        for (key, value) in form_urlencoded::parse(text.as_bytes()) {
            let slot = match key.as_ref() {
                "source" => &mut form.source,
                "target" => &mut form.target,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value.into_owned());
            }
        }

        Ok(form)
    }

    /// Parses both fields into URLs.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::InvalidUrl`] naming the first field (target, then
    /// source) that is missing or not an absolute URL.
    pub fn into_request(self) -> Result<AcceptRequest, AppError> {
        let target = parse_field("target", self.target)?;
        let source = parse_field("source", self.source)?;

        Ok(AcceptRequest { source, target })
    }
}

fn parse_field(field: &'static str, value: Option<String>) -> Result<SubmittedUrl, AppError> {
    let value = value.ok_or_else(|| AppError::invalid_url(field, "missing"))?;
    SubmittedUrl::parse(&value).map_err(|e| AppError::invalid_url(field, e.to_string()))
}

fn check_percent_escapes(text: &str) -> Result<(), AppError> {
    let bytes = text.as_bytes();
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] == b'%' {
            let valid = bytes
                .get(i + 1..i + 3)
                .is_some_and(|hex| hex.iter().all(u8::is_ascii_hexdigit));
            if !valid {
                return Err(AppError::MalformedForm(format!(
                    "invalid percent escape at byte {i}"
                )));
            }
            i += 3;
        } else {
            i += 1;
        }
    }

    Ok(())
}
