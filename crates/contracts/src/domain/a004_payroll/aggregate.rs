use crate::domain::common::{
    AggregateId, AggregateRoot, BaseAggregate, DocumentStatus, EntityMetadata,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique payroll record identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PayrollId(pub Uuid);

impl PayrollId {
    pub fn new(value: Uuid) -> Self {
        Self(value)
    }
}

impl AggregateId for PayrollId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(PayrollId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

/// Payroll record for one employee and one period.
///
/// Amounts are entered or server-computed; this crate never computes taxes.
/// Records are reviewed from the list only (approve, complete, cancel).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Payroll {
    #[serde(flatten)]
    pub base: BaseAggregate<PayrollId>,

    #[serde(rename = "employeeName")]
    pub employee_name: String,

    /// Settlement period, "YYYY-MM"
    pub period: String,

    #[serde(rename = "baseSalary")]
    pub base_salary: f64,

    pub bonuses: f64,
    pub deductions: f64,

    #[serde(rename = "netPay")]
    pub net_pay: f64,

    pub status: DocumentStatus,
}

impl AggregateRoot for Payroll {
    type Id = PayrollId;

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
        "a004"
    }

    fn collection_name() -> &'static str {
        "payroll"
    }

    fn element_name() -> &'static str {
        "Nómina"
    }

    fn list_name() -> &'static str {
        "Nóminas"
    }
}

/// `GET /api/payroll/stats`
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PayrollStats {
    pub total_count: usize,
    pub pending_count: usize,
    #[serde(rename = "periodTotal")]
    pub period_total: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decodes_list_row() {
        let row = json!({
            "id": "1a0d7f2b-3c58-4e6f-9b21-8d4a5c6e7f80",
            "code": "NOM-2026-08-007",
            "description": "Nómina agosto",
            "notes": "Incluye bono de ventas",
            "metadata": {
                "created_at": "2026-08-31T12:00:00Z",
                "updated_at": "2026-08-31T12:00:00Z"
            },
            "employeeName": "Laura Gómez",
            "period": "2026-08",
            "baseSalary": 1_800_000.0,
            "bonuses": 200_000.0,
            "deductions": 150_000.0,
            "netPay": 1_850_000.0,
            "status": "approved"
        });
        let payroll: Payroll = serde_json::from_value(row).unwrap();
        assert_eq!(payroll.employee_name, "Laura Gómez");
        assert_eq!(payroll.period, "2026-08");
        assert_eq!(payroll.net_pay, 1_850_000.0);
        assert_eq!(payroll.status, DocumentStatus::Approved);
        assert_eq!(payroll.base.notes.as_deref(), Some("Incluye bono de ventas"));
    }
}
