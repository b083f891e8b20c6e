use crate::domain::common::{AggregateId, AggregateRoot, BaseAggregate, EntityMetadata};
use crate::error::ApiError;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// ID Type
// ============================================================================

/// Unique product identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProductId(pub Uuid);

impl ProductId {
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

impl AggregateId for ProductId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(ProductId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Catalogue product (frames, lenses, accessories). The only resource
/// without a lifecycle status.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    #[serde(flatten)]
    pub base: BaseAggregate<ProductId>,

    pub brand: String,
    pub category: String,

    #[serde(rename = "purchasePrice")]
    pub purchase_price: f64,

    #[serde(rename = "salePrice")]
    pub sale_price: f64,

    pub stock: i64,
}

impl Product {
    pub fn new_for_insert(dto: &ProductDto) -> Self {
        let mut base = BaseAggregate::new(
            ProductId::new_v4(),
            dto.code.clone().unwrap_or_default(),
            dto.description.clone(),
        );
        base.notes = dto.notes.clone();

        Self {
            base,
            brand: dto.brand.clone(),
            category: dto.category.clone(),
            purchase_price: dto.purchase_price,
            sale_price: dto.sale_price,
            stock: dto.stock,
        }
    }

    pub fn update(&mut self, dto: &ProductDto) {
        self.base.code = dto.code.clone().unwrap_or_default();
        self.base.description = dto.description.clone();
        self.base.notes = dto.notes.clone();
        self.brand = dto.brand.clone();
        self.category = dto.category.clone();
        self.purchase_price = dto.purchase_price;
        self.sale_price = dto.sale_price;
        self.stock = dto.stock;
        self.base.touch();
    }
}

impl AggregateRoot for Product {
    type Id = ProductId;

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
        "a001"
    }

    fn collection_name() -> &'static str {
        "product"
    }

    fn element_name() -> &'static str {
        "Producto"
    }

    fn list_name() -> &'static str {
        "Productos"
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// DTO for product create/update
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ProductDto {
    pub id: Option<String>,
    pub code: Option<String>,
    pub description: String,
    pub brand: String,
    pub category: String,

    #[serde(rename = "purchasePrice")]
    pub purchase_price: f64,

    #[serde(rename = "salePrice")]
    pub sale_price: f64,

    pub stock: i64,
    pub notes: Option<String>,
}

impl ProductDto {
    /// Validated before dispatch; a failure never reaches the network.
    pub fn validate(&self) -> Result<(), ApiError> {
        if self.description.trim().is_empty() {
            return Err(ApiError::validation(
                "description",
                "El nombre del producto es obligatorio",
            ));
        }
        if self.purchase_price < 0.0 {
            return Err(ApiError::validation(
                "purchasePrice",
                "El precio de compra no puede ser negativo",
            ));
        }
        if self.sale_price < 0.0 {
            return Err(ApiError::validation(
                "salePrice",
                "El precio de venta no puede ser negativo",
            ));
        }
        if self.stock < 0 {
            return Err(ApiError::validation(
                "stock",
                "El stock no puede ser negativo",
            ));
        }
        Ok(())
    }
}

/// `GET /api/product/stats`
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ProductStats {
    pub total_products: usize,
    pub low_stock: usize,
    #[serde(rename = "inventoryValue")]
    pub inventory_value: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_rejects_negative_price() {
        let dto = ProductDto {
            description: "Montura RayBan RB5154".into(),
            sale_price: -1.0,
            ..Default::default()
        };
        let err = dto.validate().unwrap_err();
        assert_eq!(err.field(), Some("salePrice"));
    }

    #[test]
    fn test_validate_requires_description() {
        let dto = ProductDto::default();
        assert_eq!(dto.validate().unwrap_err().field(), Some("description"));
    }
}
