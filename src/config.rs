use crate::{
    constraint::{Constraint, ConstraintEntry},
    errors::{AggregateError, ConfigError},
    release_status::ReleaseStatus,
    version::VersionPayload,
};
use serde_derive::{Deserialize, Serialize};
use std::{
    env::{self, VarError},
    fs,
    path::Path,
};
use tap::Pipe;
use tracing::{debug, instrument, warn};

pub const ENV_RELEASE_STATUS: &str = "RELUTION_RELEASE_STATUS";
pub const ENV_STATUS_FALLBACK: &str = "RELUTION_STATUS_FALLBACK";
pub const ENV_CONSTRAINTS: &str = "RELUTION_CONSTRAINTS";

/// Publisher settings as persisted with a job.
///
/// The release status is stored by key, so labels can change without breaking
/// saved jobs.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PublisherConfig {
    #[serde(default = "default_release_status")]
    pub release_status: String,
    #[serde(default)]
    pub constraints: Vec<ConstraintEntry>,
    /// Resolve an unknown status key to `DEVELOPMENT` instead of failing.
    #[serde(default)]
    pub fallback_to_development: bool,
}

fn default_release_status() -> String {
    ReleaseStatus::default().key().to_owned()
}

impl Default for PublisherConfig {
    fn default() -> Self {
        Self {
            release_status: default_release_status(),
            constraints: Vec::new(),
            fallback_to_development: false,
        }
    }
}

impl PublisherConfig {
    pub fn from_json_str(input: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(input)?)
    }

    #[instrument(err, skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        fs::read_to_string(path)
            .map_err(|source| ConfigError::Io {
                path: path.display().to_string(),
                source,
            })?
            .pipe(|content| Self::from_json_str(&content))
    }

    /// Reads the config file at `path`, or the `RELUTION_*` variables (after
    /// loading a `.env` file if present) when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::load_with(path, env_var)
    }

    fn load_with(
        path: Option<&Path>,
        lookup: impl Fn(&'static str) -> EnvValue,
    ) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => Self::from_lookup(lookup),
        }
    }

    pub fn from_lookup(lookup: impl Fn(&'static str) -> EnvValue) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(key) = lookup(ENV_RELEASE_STATUS)? {
            config.release_status = key;
        }

        if let Some(value) = lookup(ENV_STATUS_FALLBACK)? {
            config.fallback_to_development = parse_flag(ENV_STATUS_FALLBACK, value)?;
        }

        if let Some(value) = lookup(ENV_CONSTRAINTS)? {
            config.constraints = serde_json::from_str(&value).map_err(|source| {
                ConfigError::InvalidConstraintList {
                    name: ENV_CONSTRAINTS,
                    source,
                }
            })?;
        }

        debug!(?config, "load config from environment");
        Ok(config)
    }

    /// Resolves the persisted key. An unknown key is an error unless the job
    /// opted into falling back to `DEVELOPMENT`.
    #[instrument(skip(self), fields(key = %self.release_status))]
    pub fn resolve_release_status(&self) -> Result<ReleaseStatus, ConfigError> {
        match ReleaseStatus::resolve(&self.release_status) {
            Ok(status) => Ok(status),
            Err(err) if self.fallback_to_development => {
                warn!(%err, "fall back to {}", ReleaseStatus::Development.key());
                Ok(ReleaseStatus::Development)
            }
            Err(err) => Err(err.into()),
        }
    }

    /// Builds every constraint and reports all invalid entries together.
    pub fn build_constraints(&self) -> Result<Vec<Constraint>, ConfigError> {
        let mut constraints = Vec::with_capacity(self.constraints.len());
        let mut errors = Vec::new();

        for entry in &self.constraints {
            match Constraint::try_from(entry.clone()) {
                Ok(constraint) => constraints.push(constraint),
                Err(err) => {
                    warn!(?entry, %err, "invalid constraint");
                    errors.push(err);
                }
            }
        }

        match AggregateError::try_from_iter(errors) {
            Some(errors) => Err(errors.into()),
            None => Ok(constraints),
        }
    }

    #[instrument(err, skip(self))]
    pub fn build_payload(&self) -> Result<VersionPayload, ConfigError> {
        let mut payload = VersionPayload::new(self.resolve_release_status()?);
        payload.extend(self.build_constraints()?);
        debug!(
            status = payload.release_status().key(),
            constraints = payload.constraints().len(),
            "build version payload"
        );
        Ok(payload)
    }
}

/// `Ok(None)` only for an unset variable.
pub type EnvValue = Result<Option<String>, ConfigError>;

fn env_var(name: &'static str) -> EnvValue {
    env_value(name, env::var(name))
}

fn env_value(name: &'static str, value: Result<String, VarError>) -> EnvValue {
    match value {
        Ok(value) => Ok(Some(value)),
        Err(VarError::NotPresent) => Ok(None),
        Err(VarError::NotUnicode(_)) => Err(ConfigError::InvalidEnv { name }),
    }
}

fn parse_flag(name: &'static str, value: String) -> Result<bool, ConfigError> {
    match value.trim() {
        "1" | "true" | "TRUE" | "True" | "yes" => Ok(true),
        "0" | "false" | "FALSE" | "False" | "no" | "" => Ok(false),
        _ => Err(ConfigError::InvalidFlag { name, value }),
    }
}
