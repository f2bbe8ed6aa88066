use crate::{constraint::Constraint, release_status::ReleaseStatus};
use serde_derive::{Deserialize, Serialize};

/// Body of one version upload: the status to publish under and the version's
/// constraints, in the order they were configured.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct VersionPayload {
    release_status: ReleaseStatus,
    #[serde(default)]
    constraints: Vec<Constraint>,
}

impl VersionPayload {
    pub fn new(release_status: ReleaseStatus) -> Self {
        Self {
            release_status,
            constraints: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_constraint(mut self, constraint: Constraint) -> Self {
        self.constraints.push(constraint);
        self
    }

    pub fn push_constraint(&mut self, constraint: Constraint) {
        self.constraints.push(constraint);
    }

    #[inline]
    pub fn release_status(&self) -> ReleaseStatus {
        self.release_status
    }

    pub fn constraints(&self) -> &[Constraint] {
        &self.constraints
    }

    pub fn into_constraints(self) -> Vec<Constraint> {
        self.constraints
    }

    pub fn to_json_string(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn to_json_string_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl Extend<Constraint> for VersionPayload {
    fn extend<T: IntoIterator<Item = Constraint>>(&mut self, iter: T) {
        self.constraints.extend(iter);
    }
}
