use crate::domain::common::{
    AggregateId, AggregateRoot, BaseAggregate, DocumentStatus, EntityMetadata,
};
use crate::error::ApiError;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique service order identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ServiceOrderId(pub Uuid);

impl ServiceOrderId {
    pub fn new(value: Uuid) -> Self {
        Self(value)
    }

    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl AggregateId for ServiceOrderId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(ServiceOrderId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

/// Customer service order (repairs, adjustments, custom work)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceOrder {
    #[serde(flatten)]
    pub base: BaseAggregate<ServiceOrderId>,

    #[serde(rename = "customerName")]
    pub customer_name: String,

    pub total: f64,

    /// Amount already paid by the customer when the order was taken
    pub advance: f64,

    /// ISO date (YYYY-MM-DD)
    #[serde(rename = "deliveryDate")]
    pub delivery_date: String,

    pub status: DocumentStatus,
}

impl ServiceOrder {
    pub fn new_for_insert(dto: &ServiceOrderDto) -> Self {
        let mut base = BaseAggregate::new(
            ServiceOrderId::new_v4(),
            dto.code.clone().unwrap_or_default(),
            dto.description.clone(),
        );
        base.notes = dto.notes.clone();

        Self {
            base,
            customer_name: dto.customer_name.clone(),
            total: dto.total,
            advance: dto.advance,
            delivery_date: dto.delivery_date.clone(),
            status: DocumentStatus::Pending,
        }
    }

    pub fn update(&mut self, dto: &ServiceOrderDto) {
        self.base.code = dto.code.clone().unwrap_or_default();
        self.base.description = dto.description.clone();
        self.base.notes = dto.notes.clone();
        self.customer_name = dto.customer_name.clone();
        self.total = dto.total;
        self.advance = dto.advance;
        self.delivery_date = dto.delivery_date.clone();
        self.base.touch();
    }

    /// Outstanding balance at delivery
    pub fn balance(&self) -> f64 {
        self.total - self.advance
    }
}

impl AggregateRoot for ServiceOrder {
    type Id = ServiceOrderId;

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
        "a005"
    }

    fn collection_name() -> &'static str {
        "service-order"
    }

    fn element_name() -> &'static str {
        "Orden de servicio"
    }

    fn list_name() -> &'static str {
        "Órdenes de servicio"
    }
}

/// DTO for service order create/update
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ServiceOrderDto {
    pub id: Option<String>,
    pub code: Option<String>,
    pub description: String,

    #[serde(rename = "customerName")]
    pub customer_name: String,

    pub total: f64,
    pub advance: f64,

    #[serde(rename = "deliveryDate")]
    pub delivery_date: String,

    pub notes: Option<String>,
}

impl ServiceOrderDto {
    pub fn validate(&self) -> Result<(), ApiError> {
        if self.customer_name.trim().is_empty() {
            return Err(ApiError::validation(
                "customerName",
                "El nombre del cliente es obligatorio",
            ));
        }
        if self.description.trim().is_empty() {
            return Err(ApiError::validation(
                "description",
                "La descripción del trabajo es obligatoria",
            ));
        }
        if self.total < 0.0 {
            return Err(ApiError::validation(
                "total",
                "El total no puede ser negativo",
            ));
        }
        if self.advance < 0.0 || self.advance > self.total {
            return Err(ApiError::validation(
                "advance",
                "El anticipo debe estar entre cero y el total",
            ));
        }
        if self.delivery_date.trim().is_empty() {
            return Err(ApiError::validation(
                "deliveryDate",
                "La fecha de entrega es obligatoria",
            ));
        }
        Ok(())
    }
}

/// `GET /api/service-order/stats`
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ServiceOrderStats {
    pub total_count: usize,
    pub pending_count: usize,
    #[serde(rename = "inProgressCount")]
    pub in_progress_count: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance_cannot_exceed_total() {
        let dto = ServiceOrderDto {
            description: "Cambio de lentes".into(),
            customer_name: "Carlos Ruiz".into(),
            total: 100_000.0,
            advance: 150_000.0,
            delivery_date: "2026-09-01".into(),
            ..Default::default()
        };
        assert_eq!(dto.validate().unwrap_err().field(), Some("advance"));
    }

    #[test]
    fn test_balance() {
        let dto = ServiceOrderDto {
            description: "Cambio de lentes".into(),
            customer_name: "Carlos Ruiz".into(),
            total: 250_000.0,
            advance: 100_000.0,
            delivery_date: "2026-09-01".into(),
            ..Default::default()
        };
        let order = ServiceOrder::new_for_insert(&dto);
        assert_eq!(order.balance(), 150_000.0);
    }
}
