//! Catalog item types
//!
//! These types mirror the JSON representation used by the remote catalog
//! service under `/foods`.

use serde::{Deserialize, Serialize};

/// One sellable catalog entry.
///
/// The id is assigned by the service on creation and never changes
/// afterward. The price is decimal-as-text, kept exactly as the service
/// sends it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Food {
    pub id: u64,
    pub name: String,
    pub image: String,
    pub price: String,
    pub description: String,
    pub available: bool,
}

/// Payload for create and update calls.
///
/// Carries no id: on create the service assigns one, on update the id
/// lives in the request path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewFood {
    pub name: String,
    pub description: String,
    pub price: String,
    pub image: String,
    pub available: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn food_parses_service_json() {
        let food: Food = serde_json::from_str(
            r#"{
                "id": 1,
                "name": "Ao molho",
                "image": "https://example.com/ao_molho.png",
                "price": "19.90",
                "description": "Macarrao ao molho branco com funghi.",
                "available": true
            }"#,
        )
        .unwrap();

        assert_eq!(food.id, 1);
        assert_eq!(food.name, "Ao molho");
        assert_eq!(food.price, "19.90");
        assert!(food.available);
    }

    #[test]
    fn new_food_payload_has_no_id() {
        let payload = NewFood {
            name: "Veggie".to_string(),
            description: "Legumes no vapor".to_string(),
            price: "21.90".to_string(),
            image: "https://example.com/veggie.png".to_string(),
            available: true,
        };

        let json = serde_json::to_value(&payload).unwrap();
        assert!(json.get("id").is_none());
        assert_eq!(json["available"], serde_json::Value::Bool(true));
        assert_eq!(json["price"], "21.90");
    }
}
