//! Release metadata for publishing application versions to a Relution
//! backend: the release status registry, version constraints and the upload
//! payload built from a job's persisted configuration.

pub mod bootstrap;
pub mod config;
pub mod constraint;
pub mod errors;
pub mod list_box;
pub mod release_status;
pub mod version;

pub use config::PublisherConfig;
pub use constraint::{Constraint, ConstraintEntry};
pub use errors::{AggregateError, ConfigError, InvalidConstraintConstruction, UnknownStatusKey};
pub use list_box::{ListBox, ListBoxOption};
pub use release_status::ReleaseStatus;
pub use version::VersionPayload;
