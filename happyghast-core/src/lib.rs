//! # Happy Ghast Core Library
//!
//! Host-agnostic building blocks for translating speed and slowness effects
//! on happy ghasts into a flight-speed attribute modifier.
//!
//! - [`types`] — entity/world handles, attribute instances and modifiers
//! - [`host`] — the [`Host`] trait the game server implements, plus an
//!   in-memory reference host
//! - [`resolve`] — ordered-candidate symbol resolution ([`Capabilities`])
//! - [`speed`] — potency-to-magnitude tiers
//! - [`config`] — `happyghast.toml` configuration
//!
//! ## Threading Contract
//!
//! Nothing here spawns, blocks, or locks. The host drives every call from
//! its simulation thread; exclusive access is expressed with `&mut`.

#![deny(clippy::unwrap_used)]
#![deny(missing_docs)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod error;
pub mod host;
pub mod resolve;
pub mod speed;
pub mod types;

pub use config::HappyGhastConfig;
pub use error::{HappyGhastError, HostError};
pub use host::Host;
pub use resolve::Capabilities;
pub use types::*;
