mod client;
mod key;

pub use client::QueryClient;
pub use key::{QueryKey, Scope};
