use crate::domain::common::{
    AggregateId, AggregateRoot, BaseAggregate, DocumentStatus, EntityMetadata,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique supplier payment identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SupplierPaymentId(pub Uuid);

impl SupplierPaymentId {
    pub fn new(value: Uuid) -> Self {
        Self(value)
    }
}

impl AggregateId for SupplierPaymentId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(SupplierPaymentId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

/// Payment issued against a supplier invoice. Reviewed from the list only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SupplierPayment {
    #[serde(flatten)]
    pub base: BaseAggregate<SupplierPaymentId>,

    #[serde(rename = "supplierName")]
    pub supplier_name: String,

    #[serde(rename = "invoiceNumber")]
    pub invoice_number: String,

    pub amount: f64,

    /// ISO date (YYYY-MM-DD)
    #[serde(rename = "paymentDate")]
    pub payment_date: String,

    pub status: DocumentStatus,
}

impl AggregateRoot for SupplierPayment {
    type Id = SupplierPaymentId;

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
        "a006"
    }

    fn collection_name() -> &'static str {
        "supplier-payment"
    }

    fn element_name() -> &'static str {
        "Pago a proveedor"
    }

    fn list_name() -> &'static str {
        "Pagos a proveedores"
    }
}

/// `GET /api/supplier-payment/stats`
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SupplierPaymentStats {
    pub total_count: usize,
    pub pending_count: usize,
    #[serde(rename = "pendingTotal")]
    pub pending_total: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decodes_list_row() {
        let row = json!({
            "id": "6f1e2d3c-4b5a-4978-8e6f-5d4c3b2a1908",
            "code": "PAG-2026-031",
            "description": "Factura Essilor",
            "metadata": {
                "created_at": "2026-08-15T09:10:00Z",
                "updated_at": "2026-08-15T09:10:00Z"
            },
            "supplierName": "Essilor Colombia",
            "invoiceNumber": "FE-20448",
            "amount": 4_200_000.0,
            "paymentDate": "2026-08-15",
            "status": "completed"
        });
        let payment: SupplierPayment = serde_json::from_value(row).unwrap();
        assert_eq!(payment.supplier_name, "Essilor Colombia");
        assert_eq!(payment.invoice_number, "FE-20448");
        assert_eq!(payment.amount, 4_200_000.0);
        assert_eq!(payment.status, DocumentStatus::Completed);
    }
}
