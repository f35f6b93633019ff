//! PokéAPI backend: wire schema and HTTP client

pub mod api;
pub mod types;

pub use api::PokeApiClient;
pub use types::{Pokemon, Stat};
