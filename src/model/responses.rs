/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/
use serde::Deserialize;
use serde_json::Value;

/// `data` object of responses that carry an `_id`
///
/// Returned by `POST sessions` (the session token) and
/// `POST classes/{type}/cards` (the id of the new card).
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct IdData {
    /// Identifier, a string for sessions and usually a number for cards
    #[serde(rename = "_id")]
    pub id: Option<Value>,
}

/// Envelope `{"data": {"_id": ...}}`
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct IdResponse {
    /// Payload of the response
    pub data: Option<IdData>,
}

impl IdResponse {
    /// Returns the identifier as a string, or `None` when absent or empty
    pub fn id(&self) -> Option<String> {
        let id = self.data.as_ref()?.id.as_ref()?;
        let id = match id {
            Value::String(s) => s.clone(),
            Value::Number(n) => n.to_string(),
            _ => return None,
        };
        if id.is_empty() { None } else { Some(id) }
    }
}

/// Reads `meta.total` from a list response
pub fn meta_total(body: &Value) -> Option<u64> {
    body.pointer("/meta/total").and_then(Value::as_u64)
}
