mod aggregate_id;
mod aggregate_root;
mod base_aggregate;
mod entity_metadata;
mod list_query;
mod status;

pub use aggregate_id::AggregateId;
pub use aggregate_root::AggregateRoot;
pub use base_aggregate::BaseAggregate;
pub use entity_metadata::EntityMetadata;
pub use list_query::{ListQuery, Paginated, ALL_STATUSES};
pub use status::{DocumentStatus, StatusPatch};
