use std::{
    error::Error as StdError,
    fmt::{self, Debug, Display},
};

/// A persisted or submitted key that names none of the known release statuses.
///
/// This usually means a job configuration was written by a different version
/// of the publisher or edited by hand.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown release status key {key:?}, expected one of DEVELOPMENT, REVIEW, RELEASE")]
pub struct UnknownStatusKey {
    pub key: String,
}

impl UnknownStatusKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidConstraintConstruction {
    #[error("Constraint name must not be empty")]
    EmptyName,
    #[error("Constraint {name:?} has an empty type")]
    EmptyType { name: String },
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Fail to read config {path}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config document")]
    InvalidDocument(#[from] serde_json::Error),

    #[error("{name} is set but is not valid unicode")]
    InvalidEnv { name: &'static str },

    #[error("Invalid value {value:?} for {name}")]
    InvalidFlag { name: &'static str, value: String },

    #[error("Invalid constraint list in {name}")]
    InvalidConstraintList {
        name: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error(transparent)]
    UnknownStatus(#[from] UnknownStatusKey),

    #[error(transparent)]
    Constraints(#[from] AggregateError<InvalidConstraintConstruction>),
}

/// A non-empty chain of errors, reported through `source()` one after another.
#[derive(Debug)]
pub struct AggregateError<E: StdError + Debug + Send + Sync + 'static> {
    root: AggregateErrorNode<E>,
    len: usize,
}

impl<E: StdError + Debug + Send + Sync + 'static> AggregateError<E> {
    pub fn new(error: E) -> Self {
        Self {
            root: AggregateErrorNode { error, next: None },
            len: 1,
        }
    }

    /// Returns `None` when `errors` is empty.
    pub fn try_from_iter<L: IntoIterator<Item = E>>(errors: L) -> Option<Self> {
        let mut errors = errors.into_iter().collect::<Vec<_>>();
        let len = errors.len();
        let mut next = None;
        while let Some(error) = errors.pop() {
            next = Some(Box::new(AggregateErrorNode { error, next }));
        }
        next.map(|root| Self { root: *root, len })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn into_vec(self) -> Vec<E> {
        let mut res = Vec::with_capacity(self.len);
        let AggregateErrorNode { error, mut next } = self.root;
        res.push(error);
        while let Some(node) = next {
            res.push(node.error);
            next = node.next;
        }
        res
    }
}

impl<E: StdError + Debug + Send + Sync + 'static> IntoIterator for AggregateError<E> {
    type Item = E;
    type IntoIter = <Vec<E> as IntoIterator>::IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        self.into_vec().into_iter()
    }
}

impl<E: StdError + Debug + Send + Sync + 'static> Display for AggregateError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.len == 1 {
            Display::fmt(&self.root.error, f)
        } else {
            write!(f, "{} errors, first: {}", self.len, self.root.error)
        }
    }
}

impl<E: StdError + Debug + Send + Sync + 'static> StdError for AggregateError<E> {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        Some(&self.root)
    }
}

#[derive(Debug)]
struct AggregateErrorNode<E: StdError + Debug + Send + Sync + 'static> {
    error: E,
    next: Option<Box<AggregateErrorNode<E>>>,
}

impl<E: StdError + Debug + Send + Sync + 'static> Display for AggregateErrorNode<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.error, f)
    }
}

impl<E: StdError + Debug + Send + Sync + 'static> StdError for AggregateErrorNode<E> {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.next.as_ref().map(|err| err as _)
    }
}
