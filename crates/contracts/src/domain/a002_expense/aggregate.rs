use crate::domain::common::{
    AggregateId, AggregateRoot, BaseAggregate, DocumentStatus, EntityMetadata,
};
use crate::error::ApiError;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// ID Type
// ============================================================================

/// Unique expense identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ExpenseId(pub Uuid);

impl ExpenseId {
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

impl AggregateId for ExpenseId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(ExpenseId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Operating expense (rent, utilities, supplies, services)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Expense {
    #[serde(flatten)]
    pub base: BaseAggregate<ExpenseId>,

    pub category: String,
    pub amount: f64,

    /// ISO date (YYYY-MM-DD)
    #[serde(rename = "expenseDate")]
    pub expense_date: String,

    pub status: DocumentStatus,
}

impl Expense {
    pub fn new_for_insert(dto: &ExpenseDto) -> Self {
        let mut base = BaseAggregate::new(
            ExpenseId::new_v4(),
            dto.code.clone().unwrap_or_default(),
            dto.description.clone(),
        );
        base.notes = dto.notes.clone();

        Self {
            base,
            category: dto.category.clone(),
            amount: dto.amount,
            expense_date: dto.expense_date.clone(),
            // new expenses always start pending; the backend confirms
            status: DocumentStatus::Pending,
        }
    }

    pub fn update(&mut self, dto: &ExpenseDto) {
        self.base.code = dto.code.clone().unwrap_or_default();
        self.base.description = dto.description.clone();
        self.base.notes = dto.notes.clone();
        self.category = dto.category.clone();
        self.amount = dto.amount;
        self.expense_date = dto.expense_date.clone();
        self.base.touch();
    }
}

impl AggregateRoot for Expense {
    type Id = ExpenseId;

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
        "a002"
    }

    fn collection_name() -> &'static str {
        "expense"
    }

    fn element_name() -> &'static str {
        "Gasto"
    }

    fn list_name() -> &'static str {
        "Gastos"
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// DTO for expense create/update
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ExpenseDto {
    pub id: Option<String>,
    pub code: Option<String>,
    pub description: String,
    pub category: String,
    pub amount: f64,

    #[serde(rename = "expenseDate")]
    pub expense_date: String,

    pub notes: Option<String>,
}

impl ExpenseDto {
    pub fn validate(&self) -> Result<(), ApiError> {
        if self.description.trim().is_empty() {
            return Err(ApiError::validation(
                "description",
                "La descripción es obligatoria",
            ));
        }
        if self.category.trim().is_empty() {
            return Err(ApiError::validation(
                "category",
                "La categoría es obligatoria",
            ));
        }
        if self.amount <= 0.0 {
            return Err(ApiError::validation(
                "amount",
                "El monto debe ser mayor que cero",
            ));
        }
        if self.expense_date.trim().is_empty() {
            return Err(ApiError::validation(
                "expenseDate",
                "La fecha del gasto es obligatoria",
            ));
        }
        Ok(())
    }
}

/// `GET /api/expense/stats`
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ExpenseStats {
    pub total_count: usize,
    pub pending_count: usize,
    #[serde(rename = "monthTotal")]
    pub month_total: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_expense_starts_pending() {
        let dto = ExpenseDto {
            description: "Arriendo local".into(),
            category: "arriendo".into(),
            amount: 2_500_000.0,
            expense_date: "2026-08-01".into(),
            ..Default::default()
        };
        assert!(dto.validate().is_ok());
        let expense = Expense::new_for_insert(&dto);
        assert_eq!(expense.status, DocumentStatus::Pending);
    }

    #[test]
    fn test_validate_rejects_zero_amount() {
        let dto = ExpenseDto {
            description: "Servicios públicos".into(),
            category: "servicios".into(),
            amount: 0.0,
            expense_date: "2026-08-01".into(),
            ..Default::default()
        };
        assert_eq!(dto.validate().unwrap_err().field(), Some("amount"));
    }

    #[test]
    fn test_validate_requires_date() {
        let dto = ExpenseDto {
            description: "Papelería".into(),
            category: "insumos".into(),
            amount: 50_000.0,
            ..Default::default()
        };
        assert_eq!(dto.validate().unwrap_err().field(), Some("expenseDate"));
    }
}
