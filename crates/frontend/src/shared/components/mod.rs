pub mod badge;
pub mod data_table;
pub mod modal;
pub mod number_format;
pub mod pagination_controls;
pub mod search_input;
pub mod stat_card;
