use super::{AggregateId, EntityMetadata};

/// Contract implemented by every aggregate administered through a
/// list-and-mutate page.
pub trait AggregateRoot {
    type Id: AggregateId;

    fn id(&self) -> Self::Id;
    fn code(&self) -> &str;
    fn description(&self) -> &str;
    fn metadata(&self) -> &EntityMetadata;
    fn metadata_mut(&mut self) -> &mut EntityMetadata;

    /// Stable aggregate index ("a002")
    fn aggregate_index() -> &'static str;

    /// REST collection segment ("expense" -> /api/expense)
    fn collection_name() -> &'static str;

    /// Singular display name ("Gasto")
    fn element_name() -> &'static str;

    /// Plural display name for list pages ("Gastos")
    fn list_name() -> &'static str;
}
