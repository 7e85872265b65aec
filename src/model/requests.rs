/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/
use crate::error::AppError;
use serde::Serialize;
use serde::de::IgnoredAny;
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

/// Body of `POST sessions`
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct LoginRequest<'a> {
    /// CMDBuild username
    pub username: &'a str,
    /// CMDBuild password
    pub password: &'a str,
}

impl<'a> LoginRequest<'a> {
    /// Creates a new login body
    pub fn new(username: &'a str, password: &'a str) -> Self {
        Self { username, password }
    }
}

/// A card body that has already been checked to be valid JSON
///
/// The content is not interpreted: the caller's text is kept as given and
/// forwarded byte for byte, so numbers outside `f64` range or precision
/// reach CMDBuild unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardPayload(String);

impl CardPayload {
    /// Checks a raw JSON document and wraps it
    ///
    /// Only syntax is checked; values are skipped without being decoded.
    ///
    /// # Returns
    /// * `Ok(CardPayload)` - The document is syntactically valid JSON
    /// * `Err(AppError::InvalidPayload)` - Otherwise, with the parser message
    pub fn parse(raw: &str) -> Result<Self, AppError> {
        serde_json::from_str::<IgnoredAny>(raw)
            .map_err(|e| AppError::InvalidPayload(format!("card payload is not valid JSON: {e}")))?;
        Ok(CardPayload(raw.to_owned()))
    }

    /// Borrows the document exactly as supplied
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the payload, returning the document text
    pub fn into_inner(self) -> String {
        self.0
    }

    /// Decodes the document into a JSON value
    pub fn to_value(&self) -> Result<Value, AppError> {
        Ok(serde_json::from_str(&self.0)?)
    }
}

impl FromStr for CardPayload {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<Value> for CardPayload {
    fn from(value: Value) -> Self {
        CardPayload(value.to_string())
    }
}

impl fmt::Display for CardPayload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
