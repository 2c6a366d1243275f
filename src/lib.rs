pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::{http::HttpTicketStore, storage::LocalStorage};
pub use config::CliConfig;
pub use core::{engine::PressEngine, pipeline::CardPipeline};
pub use utils::error::{PressError, Result};
