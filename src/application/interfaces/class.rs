use crate::error::AppError;
use async_trait::async_trait;
use serde_json::Value;

/// Interface for classes (entity types)
#[async_trait]
pub trait ClassService: Send + Sync {
    /// Lists the available classes
    async fn list_classes(&self) -> Result<Value, AppError>;

    /// Gets the number of classes, read from `meta.total`
    async fn count_classes(&self) -> Result<u64, AppError>;

    /// Gets the definition of a class
    async fn get_class_detail(&self, class_id: &str) -> Result<Value, AppError>;

    /// Gets the attributes of a class
    async fn get_class_attributes(&self, class_id: &str) -> Result<Value, AppError>;
}
