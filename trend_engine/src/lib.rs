//! # Trend Engine
//!
//! The simulation engine of the media ecosystem. It owns a
//! [`media_model::Catalog`] and advances it in throttled steps: random reader
//! interactions, viral spread of shares, trending scores and author influence.
//!
//! ## Core Components
//!
//! - **ecosystem**: The controller, its statistics and the injectable random source
//! - **config**: Tunable engine parameters, loadable from TOML
//! - **seed**: A demo population for drivers that want a populated start
//!
//! The engine never schedules itself; a driver calls [`Ecosystem::tick`] with
//! the current time as often as it wants.

pub mod config;
pub mod ecosystem;
pub mod error;
pub mod seed;

pub use config::*;
pub use ecosystem::*;
pub use error::*;
pub use media_model;
