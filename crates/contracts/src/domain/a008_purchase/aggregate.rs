use crate::domain::common::{
    AggregateId, AggregateRoot, BaseAggregate, DocumentStatus, EntityMetadata,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique purchase identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PurchaseId(pub Uuid);

impl PurchaseId {
    pub fn new(value: Uuid) -> Self {
        Self(value)
    }
}

impl AggregateId for PurchaseId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(PurchaseId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

/// Goods purchase received from a supplier. Reviewed from the list only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Purchase {
    #[serde(flatten)]
    pub base: BaseAggregate<PurchaseId>,

    #[serde(rename = "supplierName")]
    pub supplier_name: String,

    #[serde(rename = "invoiceNumber")]
    pub invoice_number: String,

    pub total: f64,

    /// ISO date (YYYY-MM-DD)
    #[serde(rename = "purchaseDate")]
    pub purchase_date: String,

    #[serde(rename = "itemsCount")]
    pub items_count: usize,

    pub status: DocumentStatus,
}

impl AggregateRoot for Purchase {
    type Id = PurchaseId;

    fn id(&self) -> Self::Id {
        self.base.id
    }

    fn code(&self) -> &str {
        &self.base.code
    }

    fn description(&self) -> &str {
        &self.base.description
    }

    fn metadata(&self) -> &EntityMetadata {
        &self.base.metadata
    }

    fn metadata_mut(&mut self) -> &mut EntityMetadata {
        &mut self.base.metadata
    }

    fn aggregate_index() -> &'static str {
        "a008"
    }

    fn collection_name() -> &'static str {
        "purchase"
    }

    fn element_name() -> &'static str {
        "Compra"
    }

    fn list_name() -> &'static str {
        "Compras"
    }
}

/// `GET /api/purchase/stats`
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PurchaseStats {
    pub total_count: usize,
    pub pending_count: usize,
    #[serde(rename = "monthTotal")]
    pub month_total: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decodes_list_row() {
        let row = json!({
            "id": "3e7a9d5f-1b2c-4d6e-8f90-a1b2c3d4e5f6",
            "code": "CMP-2026-052",
            "description": "Pedido monturas",
            "metadata": {
                "created_at": "2026-08-10T11:20:00Z",
                "updated_at": "2026-08-10T11:20:00Z"
            },
            "supplierName": "Luxottica",
            "invoiceNumber": "FV-9912",
            "total": 8_000_000.0,
            "purchaseDate": "2026-08-10",
            "itemsCount": 24,
            "status": "cancelled"
        });
        let purchase: Purchase = serde_json::from_value(row).unwrap();
        assert_eq!(purchase.supplier_name, "Luxottica");
        assert_eq!(purchase.items_count, 24);
        assert_eq!(purchase.purchase_date, "2026-08-10");
        assert_eq!(purchase.status, DocumentStatus::Cancelled);
    }
}
