/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/
use crate::application::auth::Session;
use crate::application::config::Config;
use crate::application::interfaces::card::CardService;
use crate::application::interfaces::class::ClassService;
use crate::application::interfaces::domain::DomainService;
use crate::application::interfaces::lookup::LookupService;
use crate::application::interfaces::session::SessionService;
use crate::error::AppError;
use crate::model::http::HttpClient;
use crate::model::requests::CardPayload;
use crate::model::responses::{IdResponse, meta_total};
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, info};

/// Client for the CMDBuild REST API
///
/// Cheap to clone; clones share the HTTP connection pool and the session.
#[derive(Clone)]
pub struct Client {
    http_client: Arc<HttpClient>,
}

impl Client {
    /// Creates a client without contacting the server
    ///
    /// Call [`SessionService::authenticate`] or [`SessionService::login`] before
    /// any resource method; until then they fail with [`AppError::NotAuthenticated`].
    pub fn new(config: Config) -> Result<Self, AppError> {
        let http_client = Arc::new(HttpClient::new(config)?);
        Ok(Self { http_client })
    }

    /// Creates a client and logs in with the configured credentials
    pub async fn connect(config: Config) -> Result<Self, AppError> {
        let http_client = Arc::new(HttpClient::connect(config).await?);
        Ok(Self { http_client })
    }

    /// Gets the current session
    pub async fn session(&self) -> Result<Session, AppError> {
        self.http_client.get_session().await
    }

    /// Returns `true` once a session token is stored
    pub async fn is_authenticated(&self) -> bool {
        self.http_client.auth().is_authenticated().await
    }

    async fn get_list(&self, segments: &[&str], what: &str) -> Result<Value, AppError> {
        let body: Value = self.http_client.get(segments).await?;
        match meta_total(&body) {
            Some(total) => debug!("There are {} results for {}", total, what),
            None => debug!("No meta.total in {} response", what),
        }
        Ok(body)
    }
}

#[async_trait]
impl SessionService for Client {
    async fn authenticate(
        &self,
        url: &str,
        username: &str,
        password: &str,
    ) -> Result<Session, AppError> {
        self.http_client
            .auth()
            .authenticate(url, username, password)
            .await
    }

    async fn login(&self) -> Result<Session, AppError> {
        self.http_client.auth().login().await
    }

    async fn get_session_info(&self) -> Result<Value, AppError> {
        let session = self.http_client.get_session().await?;
        debug!("Session info for {}", session.username);
        self.http_client.get(&["sessions", session.token.as_str()]).await
    }

    async fn logout(&self) -> Result<(), AppError> {
        self.http_client.auth().logout().await
    }
}

#[async_trait]
impl LookupService for Client {
    async fn list_lookup_types(&self) -> Result<Value, AppError> {
        self.get_list(&["lookup_types"], "lookup types").await
    }

    async fn get_lookup_type_values(&self, lookup_type_id: &str) -> Result<Value, AppError> {
        debug!("Getting values of lookup type {}", lookup_type_id);
        self.get_list(
            &["lookup_types", lookup_type_id, "values"],
            &format!("lookup type {lookup_type_id}"),
        )
        .await
    }

    async fn get_lookup_type_value_detail(
        &self,
        lookup_type: &str,
        value_id: &str,
    ) -> Result<Value, AppError> {
        debug!("Getting lookup value {} of {}", value_id, lookup_type);
        self.http_client
            .get(&["lookup_types", lookup_type, "values", value_id])
            .await
    }
}

#[async_trait]
impl DomainService for Client {
    async fn list_domains(&self) -> Result<Value, AppError> {
        self.get_list(&["domains"], "domains").await
    }

    async fn get_domain_detail(&self, domain_id: &str) -> Result<Value, AppError> {
        debug!("Getting domain {} details", domain_id);
        self.http_client.get(&["domains", domain_id]).await
    }

    async fn get_domain_attributes(&self, domain_id: &str) -> Result<Value, AppError> {
        self.get_list(
            &["domains", domain_id, "attributes"],
            &format!("domain {domain_id} attributes"),
        )
        .await
    }

    async fn get_domain_relations(&self, domain_id: &str) -> Result<Value, AppError> {
        self.get_list(
            &["domains", domain_id, "relations"],
            &format!("domain {domain_id} relations"),
        )
        .await
    }

    async fn get_domain_relation_detail(
        &self,
        domain: &str,
        relation_id: &str,
    ) -> Result<Value, AppError> {
        debug!("Getting relation {} of domain {}", relation_id, domain);
        self.http_client
            .get(&["domains", domain, "relations", relation_id])
            .await
    }
}

#[async_trait]
impl ClassService for Client {
    async fn list_classes(&self) -> Result<Value, AppError> {
        self.get_list(&["classes"], "classes").await
    }

    async fn count_classes(&self) -> Result<u64, AppError> {
        let body: Value = self.http_client.get(&["classes"]).await?;
        let total = meta_total(&body).ok_or_else(|| {
            AppError::Deserialization("classes response has no numeric meta.total".to_string())
        })?;
        debug!("There are {} classes", total);
        Ok(total)
    }

    async fn get_class_detail(&self, class_id: &str) -> Result<Value, AppError> {
        debug!("Getting class {} details", class_id);
        self.http_client.get(&["classes", class_id]).await
    }

    async fn get_class_attributes(&self, class_id: &str) -> Result<Value, AppError> {
        self.get_list(
            &["classes", class_id, "attributes"],
            &format!("class {class_id} attributes"),
        )
        .await
    }
}

#[async_trait]
impl CardService for Client {
    async fn list_cards(&self, class_type: &str) -> Result<Value, AppError> {
        self.get_list(
            &["classes", class_type, "cards"],
            &format!("class {class_type} cards"),
        )
        .await
    }

    async fn get_card_detail(&self, class_type: &str, card_id: &str) -> Result<Value, AppError> {
        debug!("Getting card {} of class {}", card_id, class_type);
        self.http_client
            .get(&["classes", class_type, "cards", card_id])
            .await
    }

    async fn insert_card(&self, class_type: &str, payload: &str) -> Result<String, AppError> {
        let payload = CardPayload::parse(payload)?;
        info!("Inserting card of class {}", class_type);
        debug!("Card payload: {}", payload);

        let response: IdResponse = self
            .http_client
            .post_raw(&["classes", class_type, "cards"], payload.as_str())
            .await?;

        let id = response.id().ok_or_else(|| {
            AppError::Deserialization("card creation response has no data._id".to_string())
        })?;
        info!("✓ Card {} created in class {}", id, class_type);
        Ok(id)
    }
}
