pub mod api_utils;
pub mod columns;
pub mod components;
pub mod date_utils;
pub mod list_controller;
pub mod list_state;
pub mod mutation;
pub mod notifications;
pub mod query;
pub mod service;
