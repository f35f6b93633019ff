//! Pokédex: look up a Pokémon by name or number
//!
//! Single-window client for PokéAPI.
//!
//! Usage:
//!   pokedex                   - Open the lookup window
//!   pokedex --base-url <URL>  - Query another PokéAPI host
//!   pokedex --timeout <SECS>  - Request timeout
//!   pokedex help              - Show help

mod app;
mod backend;
mod config;
mod error;
mod lookup;
mod ui;

use app::Pokedex;
use backend::PokeApiClient;
use config::{Config, Launch};
use iced::{window, Size};
use std::env;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> iced::Result {
    // Initialize logging (use try_init to avoid panic if already initialized)
    let _ = tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();

    match Config::from_args(env::args().skip(1)) {
        Ok(Launch::Run(config)) => start(config),
        Ok(Launch::Help) => {
            println!("{}", Config::help_text());
            Ok(())
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!("Run 'pokedex help' for usage");
            Ok(())
        }
    }
}

fn start(config: Config) -> iced::Result {
    let client = match PokeApiClient::new(config.base_url.clone(), config.timeout) {
        Ok(client) => client,
        Err(e) => {
            eprintln!("Error: could not create HTTP client: {}", e);
            return Ok(());
        }
    };

    tracing::info!(
        "Starting Pokédex against {} (timeout {:?})",
        client.base_url(),
        config.timeout
    );

    iced::application(Pokedex::title, Pokedex::update, Pokedex::view)
        .subscription(Pokedex::subscription)
        .theme(Pokedex::theme)
        .window(window::Settings {
            size: Size::new(520.0, 720.0),
            position: window::Position::Centered,
            resizable: true,
            ..Default::default()
        })
        .antialiasing(true)
        .run_with(move || (Pokedex::new(client.clone()), iced::Task::none()))
}
