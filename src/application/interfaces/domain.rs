use crate::error::AppError;
use async_trait::async_trait;
use serde_json::Value;

/// Interface for domains (relation types between classes)
#[async_trait]
pub trait DomainService: Send + Sync {
    /// Lists the defined domains
    async fn list_domains(&self) -> Result<Value, AppError>;

    /// Gets the definition of a domain
    async fn get_domain_detail(&self, domain_id: &str) -> Result<Value, AppError>;

    /// Gets the attributes of a domain
    async fn get_domain_attributes(&self, domain_id: &str) -> Result<Value, AppError>;

    /// Gets the relations of a domain
    async fn get_domain_relations(&self, domain_id: &str) -> Result<Value, AppError>;

    /// Gets a single relation of a domain
    ///
    /// # Arguments
    /// * `domain` - Name of the domain
    /// * `relation_id` - Id of the relation
    async fn get_domain_relation_detail(
        &self,
        domain: &str,
        relation_id: &str,
    ) -> Result<Value, AppError>;
}
