//! Core types and schedule resolution for the wastewise collection calendar.

/// Recycling facility listings and maps links.
pub mod facility;
/// Waste-sorting reference guide.
pub mod guide;
/// Domain models for waste streams, rules, and schedules.
pub mod model;
/// Registry resolving postcodes to location schedules.
pub mod registry;
/// Collection-date resolution engine.
pub mod resolver;
/// High-level service facade used by clients.
pub mod service;
/// Caller-owned user settings and notification preferences.
pub mod settings;

pub use facility::*;
pub use guide::*;
pub use model::*;
pub use registry::*;
pub use resolver::*;
pub use service::*;
pub use settings::*;
