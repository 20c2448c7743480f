//! Catalog and gallery domain types.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;

use vestiubem_core::{ClothingItemId, GeneratedImageId, Price, UserId};

/// A catalog entry (domain type).
///
/// Created/edited/deleted only by administrators. Field names follow the
/// catalog wire format the SPA consumes.
#[derive(Debug, Clone, Serialize)]
pub struct ClothingItem {
    /// Unique item ID.
    pub id: ClothingItemId,
    /// Display name.
    pub name: String,
    /// Optional short description.
    pub description: Option<String>,
    /// Image reference (URL).
    pub image_url: String,
    /// Price in the catalog's currency (BRL).
    pub price: Decimal,
    /// External purchase link.
    pub shein_link: String,
    /// When the item was added.
    pub created_at: DateTime<Utc>,
}

impl ClothingItem {
    /// Formatted price for display (e.g., "R$89.90").
    #[must_use]
    pub fn display_price(&self) -> String {
        Price::brl(self.price).to_string()
    }
}

/// One try-on result (domain type).
///
/// Owned by the requesting user; created only after the proxy call returned a
/// usable image, never mutated afterwards. Serialized in camelCase because
/// that is the gallery wire format.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedImage {
    /// Unique record ID.
    pub id: GeneratedImageId,
    /// Owning user.
    pub user_id: UserId,
    /// Source user photo (base64 or URL, as the client submitted it).
    pub original_user_image: String,
    /// Source garment image.
    pub clothing_image: String,
    /// The composite result image.
    pub result_image: String,
    /// Display name of the garment, when it came from the catalog.
    pub clothing_name: Option<String>,
    /// When the result was recorded.
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_price() {
        let item = ClothingItem {
            id: ClothingItemId::new(1),
            name: "Vestido Floral Verão".to_string(),
            description: Some("Leve e solto".to_string()),
            image_url: "https://example.com/vestido.webp".to_string(),
            price: Decimal::new(8990, 2),
            shein_link: "#".to_string(),
            created_at: Utc::now(),
        };
        assert_eq!(item.display_price(), "R$89.90");
    }

    #[test]
    fn test_generated_image_serializes_camel_case() {
        let image = GeneratedImage {
            id: GeneratedImageId::new(5),
            user_id: UserId::new(9),
            original_user_image: "dXNlcg==".to_string(),
            clothing_image: "cm91cGE=".to_string(),
            result_image: "cmVzdWx0".to_string(),
            clothing_name: None,
            created_at: Utc::now(),
        };

        let json = serde_json::to_value(&image).expect("serialize");
        assert!(json.get("userId").is_some());
        assert!(json.get("originalUserImage").is_some());
        assert!(json.get("resultImage").is_some());
    }
}
