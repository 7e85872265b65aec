use cmdbuild_client::prelude::*;
use serde_json::Value;
use tracing::{info, warn};

fn first_id(body: &Value) -> Option<String> {
    match body.pointer("/data/0/_id")? {
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_logger();
    info!("{}", version());

    // Credentials come from CMDBUILD_URL / CMDBUILD_USERNAME / CMDBUILD_PASSWORD
    let client = Client::connect(Config::new()).await?;
    info!("✓ Client created and authenticated");

    info!("Session info: {}", client.get_session_info().await?);

    let lookup_types = client.list_lookup_types().await?;
    if let Some(lookup_type) = first_id(&lookup_types) {
        let values = client.get_lookup_type_values(&lookup_type).await?;
        if let Some(value_id) = first_id(&values) {
            let value = client
                .get_lookup_type_value_detail(&lookup_type, &value_id)
                .await?;
            info!("Lookup value {lookup_type}/{value_id}: {value}");
        }
    }

    let domains = client.list_domains().await?;
    if let Some(domain) = first_id(&domains) {
        info!("Domain: {}", client.get_domain_detail(&domain).await?);
        info!("Attributes: {}", client.get_domain_attributes(&domain).await?);
        let relations = client.get_domain_relations(&domain).await?;
        if let Some(relation_id) = first_id(&relations) {
            let relation = client
                .get_domain_relation_detail(&domain, &relation_id)
                .await?;
            info!("Relation {domain}/{relation_id}: {relation}");
        }
    }

    info!("There are {} classes", client.count_classes().await?);
    let classes = client.list_classes().await?;
    if let Some(class) = first_id(&classes) {
        info!("Class: {}", client.get_class_detail(&class).await?);
        info!("Attributes: {}", client.get_class_attributes(&class).await?);
        let cards = client.list_cards(&class).await?;
        if let Some(card_id) = first_id(&cards) {
            info!("Card: {}", client.get_card_detail(&class, &card_id).await?);
        }
    }

    // Card insertion needs an explicit target class
    match std::env::var("CMDBUILD_DEMO_CLASS") {
        Ok(class) => {
            let id = client
                .insert_card(&class, r#"{"Description":"created by cmdbuild_tour"}"#)
                .await?;
            info!("✓ Inserted card {id} in {class}");
        }
        Err(_) => warn!("CMDBUILD_DEMO_CLASS not set, skipping card insertion"),
    }

    client.logout().await?;
    Ok(())
}
