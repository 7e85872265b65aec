use crate::error::AppError;
use async_trait::async_trait;
use serde_json::Value;

/// Interface for cards (instances of a class)
#[async_trait]
pub trait CardService: Send + Sync {
    /// Lists the cards of a class
    ///
    /// Only the first page the server returns; `meta.total` tells how many exist.
    async fn list_cards(&self, class_type: &str) -> Result<Value, AppError>;

    /// Gets a single card
    async fn get_card_detail(&self, class_type: &str, card_id: &str) -> Result<Value, AppError>;

    /// Creates a card
    ///
    /// # Arguments
    /// * `class_type` - Class the card belongs to
    /// * `payload` - JSON document with the card attributes
    ///
    /// # Returns
    /// * `Ok(String)` - Id of the created card
    /// * `Err(AppError::InvalidPayload)` - If `payload` is not valid JSON; nothing is sent
    async fn insert_card(&self, class_type: &str, payload: &str) -> Result<String, AppError>;
}
