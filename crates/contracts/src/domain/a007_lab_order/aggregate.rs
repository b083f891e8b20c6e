use crate::domain::common::{
    AggregateId, AggregateRoot, BaseAggregate, DocumentStatus, EntityMetadata,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique laboratory order identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LabOrderId(pub Uuid);

impl LabOrderId {
    pub fn new(value: Uuid) -> Self {
        Self(value)
    }
}

impl AggregateId for LabOrderId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(LabOrderId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

/// Lens fabrication order sent to an external laboratory.
///
/// The prescription is carried as free text; protocol-level integration with
/// laboratories is out of scope. Orders are reviewed from the list only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LabOrder {
    #[serde(flatten)]
    pub base: BaseAggregate<LabOrderId>,

    #[serde(rename = "patientName")]
    pub patient_name: String,

    pub laboratory: String,

    /// Free-text optical formula ("OD -1.25 -0.50 x 180 ...")
    pub prescription: String,

    pub cost: f64,

    /// ISO date (YYYY-MM-DD)
    #[serde(rename = "expectedDate")]
    pub expected_date: String,

    pub status: DocumentStatus,
}

impl AggregateRoot for LabOrder {
    type Id = LabOrderId;

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
        "a007"
    }

    fn collection_name() -> &'static str {
        "lab-order"
    }

    fn element_name() -> &'static str {
        "Orden de laboratorio"
    }

    fn list_name() -> &'static str {
        "Órdenes de laboratorio"
    }
}

/// `GET /api/lab-order/stats`
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct LabOrderStats {
    pub total_count: usize,
    pub pending_count: usize,
    #[serde(rename = "inLabCount")]
    pub in_lab_count: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decodes_list_row() {
        let row = json!({
            "id": "9b2f8c1d-6e3a-4f50-8a7b-0c1d2e3f4a5b",
            "code": "LAB-2026-088",
            "description": "Lentes progresivos",
            "metadata": {
                "created_at": "2026-08-22T15:45:00Z",
                "updated_at": "2026-08-22T15:45:00Z"
            },
            "patientName": "Ana Martínez",
            "laboratory": "Laboratorio Óptico Andino",
            "prescription": "OD -1.25 -0.50 x 180 / OI -1.00 -0.25 x 175",
            "cost": 350_000.0,
            "expectedDate": "2026-09-05",
            "status": "pending"
        });
        let order: LabOrder = serde_json::from_value(row).unwrap();
        assert_eq!(order.patient_name, "Ana Martínez");
        assert_eq!(order.laboratory, "Laboratorio Óptico Andino");
        assert_eq!(order.expected_date, "2026-09-05");
        assert_eq!(order.status, DocumentStatus::Pending);
    }
}
