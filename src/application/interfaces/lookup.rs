use crate::error::AppError;
use async_trait::async_trait;
use serde_json::Value;

/// Interface for lookup types (enumerated value lists)
#[async_trait]
pub trait LookupService: Send + Sync {
    /// Lists the defined lookup types
    async fn list_lookup_types(&self) -> Result<Value, AppError>;

    /// Gets the values of a lookup type
    async fn get_lookup_type_values(&self, lookup_type_id: &str) -> Result<Value, AppError>;

    /// Gets a single value of a lookup type
    ///
    /// # Arguments
    /// * `lookup_type` - Name of the lookup type
    /// * `value_id` - Id of the lookup value
    async fn get_lookup_type_value_detail(
        &self,
        lookup_type: &str,
        value_id: &str,
    ) -> Result<Value, AppError>;
}
