//! Site core for the ProPlus real-estate listing front-end.
//!
//! The crate owns the state behind the rendered site: the route table and
//! layout shell, the transient notification center, the auth modal state
//! machine, per-card favorites, and the static property catalog. Markup,
//! styling, and animation belong to an external display surface that
//! consumes the serializable views exposed here.

pub mod catalog;
pub mod config;
pub mod error;
pub mod notifications;
pub mod site;
pub mod telemetry;
