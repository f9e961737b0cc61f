//! # Slotpick Core Library
//!
//! This library provides the core business logic for Slotpick, a tool that
//! proposes meeting times from a scheduling provider's open availability.
//! It implements a CLI-first philosophy where all operations are available
//! via a standalone CLI binary that is a thin layer over this library.
//!
//! ## Architecture
//!
//! - **Selection engine**: a pure computation that infers a recipient's
//!   existing commitments from holes in a day's availability, scores every
//!   slot by proximity to those commitments, and picks a small subset --
//!   clustered next to busy periods, with at least one option outside the
//!   dominant part of the day
//! - **Provider adapters**: normalize a scheduling provider's open-slot
//!   payloads into [`TimeSlot`]s
//! - **Configuration**: TOML-based user preferences
//!
//! ## Key Components
//!
//! - [`SlotSelector`]: selection entry point
//! - [`GapDetector`]: inferred-commitment detection
//! - [`AvailabilityProvider`]: trait for provider adapters
//! - [`Config`]: application configuration management

pub mod config;
pub mod error;
pub mod provider;
pub mod selection;

pub use config::Config;
pub use error::{ConfigError, CoreError, ProviderError, Result, ValidationError};
pub use provider::{AvailabilityProvider, CalComProvider};
pub use selection::{
    detect_gaps, proximity_score, select_smart_slots, Gap, GapDetector, ScoredSlot,
    SelectorConfig, SlotSelector, TimeBucket, TimeSlot,
};
