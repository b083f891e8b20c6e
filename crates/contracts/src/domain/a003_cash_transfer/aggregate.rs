use crate::domain::common::{
    AggregateId, AggregateRoot, BaseAggregate, DocumentStatus, EntityMetadata,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique cash transfer identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CashTransferId(pub Uuid);

impl CashTransferId {
    pub fn new(value: Uuid) -> Self {
        Self(value)
    }
}

impl AggregateId for CashTransferId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(CashTransferId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

/// Movement of cash between registers (e.g. front desk to safe).
///
/// Transfers originate at the point of sale; this screen only reviews them,
/// so the type is read-and-transition only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CashTransfer {
    #[serde(flatten)]
    pub base: BaseAggregate<CashTransferId>,

    #[serde(rename = "fromRegister")]
    pub from_register: String,

    #[serde(rename = "toRegister")]
    pub to_register: String,

    pub amount: f64,

    /// ISO date (YYYY-MM-DD)
    #[serde(rename = "transferDate")]
    pub transfer_date: String,

    pub status: DocumentStatus,
}

impl AggregateRoot for CashTransfer {
    type Id = CashTransferId;

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
        "a003"
    }

    fn collection_name() -> &'static str {
        "cash-transfer"
    }

    fn element_name() -> &'static str {
        "Traslado de efectivo"
    }

    fn list_name() -> &'static str {
        "Traslados de efectivo"
    }
}

/// `GET /api/cash-transfer/stats`
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CashTransferStats {
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
            "id": "7c9e6679-7425-40de-944b-e07fc1f90ae7",
            "code": "TRF-2026-014",
            "description": "Cierre de caja",
            "metadata": {
                "created_at": "2026-08-20T18:30:00Z",
                "updated_at": "2026-08-20T18:30:00Z"
            },
            "fromRegister": "caja-1",
            "toRegister": "caja-fuerte",
            "amount": 300_000.0,
            "transferDate": "2026-08-20",
            "status": "pending"
        });
        let transfer: CashTransfer = serde_json::from_value(row).unwrap();
        assert_eq!(transfer.base.code, "TRF-2026-014");
        assert_eq!(transfer.from_register, "caja-1");
        assert_eq!(transfer.to_register, "caja-fuerte");
        assert_eq!(transfer.status, DocumentStatus::Pending);
        assert!(transfer.base.notes.is_none());
    }
}
