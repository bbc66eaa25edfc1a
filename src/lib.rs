pub use utils::Pos;
mod utils;

pub use cell::{Cell, CellStatus};
pub mod cell;

pub mod rule;

pub use world::{BoundedWorld, World};
pub mod world;

pub use sim::Sim;
mod sim;

pub mod pattern;

pub mod app;

pub use config::Config;
mod config;

pub use error::{ConfigError, Error, PatternError, Result, WorldError};
mod error;
