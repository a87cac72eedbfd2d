//! # happyghast-plugin — Speed Effects for Happy Ghasts
//!
//! Translates speed and slowness potion effects on happy ghasts into a
//! multiplicative modifier on their flying-speed attribute.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │              Host runtime                │
//! │  ┌───────────────────────────────────┐  │
//! │  │       happyghast-plugin           │  │
//! │  │  ┌─────────────┐ ┌─────────────┐ │  │
//! │  │  │   Hooks /   │ │   Plugin    │ │  │
//! │  │  │   Events    │ │  lifecycle  │ │  │
//! │  │  └──────┬──────┘ └──────┬──────┘ │  │
//! │  │         │               │         │  │
//! │  │         ▼               ▼         │  │
//! │  │    ┌─────────────────────────┐    │  │
//! │  │    │    happyghast-core      │    │  │
//! │  │    └─────────────────────────┘    │  │
//! │  └───────────────────────────────────┘  │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - `events` — effect-change notifications
//! - `hooks` — constructors for each host notification shape
//! - `filter` — which entities count as happy ghasts
//! - `systems` — apply/clear of the owned modifier
//! - `plugin` — enable/disable lifecycle and the event handler
//! - `logging` — optional tracing subscriber bootstrap

pub mod events;
pub mod filter;
pub mod hooks;
pub mod logging;
pub mod plugin;
pub mod systems;

pub use plugin::{EffectOutcome, IgnoreReason, SpeedPlugin};
