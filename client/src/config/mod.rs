mod config;
mod players_config;

pub use config::get_config_manager;
pub use players_config::PlayersConfig;
