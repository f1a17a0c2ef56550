use std::collections::{HashMap, HashSet};
use std::error::Error as StdError;
use std::fmt;

use crate::types::reference_name;

/// A directory lookup the engine needs answered during decomposition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Query<'a> {
    /// Member nations of the named region.
    Region(&'a str),
    /// All World Assembly members.
    WaMembers,
    /// Current World Assembly delegates.
    Delegates,
    /// Recently founded nations.
    NewNations,
    /// Every nation.
    AllNations,
}

impl fmt::Display for Query<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Query::Region(name) => write!(f, "region '{name}'"),
            Query::WaMembers => f.write_str("tag:wa"),
            Query::Delegates => f.write_str("tag:delegates"),
            Query::NewNations => f.write_str("tag:new"),
            Query::AllNations => f.write_str("tag:all"),
        }
    }
}

/// A resolver-side failure (network down, lookup miss). The engine wraps it
/// into [`EvalError::ResolutionFailure`](crate::EvalError::ResolutionFailure)
/// without retrying; retry policy belongs to the resolver.
#[derive(Debug)]
pub struct ResolveError {
    message: String,
    source: Option<Box<dyn StdError + Send + Sync>>,
}

impl ResolveError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            source: None,
        }
    }

    pub fn with_source(
        message: impl Into<String>,
        source: impl Into<Box<dyn StdError + Send + Sync>>,
    ) -> Self {
        Self {
            message: message.into(),
            source: Some(source.into()),
        }
    }
}

impl fmt::Display for ResolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl StdError for ResolveError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.source
            .as_deref()
            .map(|e| e as &(dyn StdError + 'static))
    }
}

/// The directory service consumed during decomposition. Implementations own
/// their transport, caching and retry policy; the engine only issues one
/// synchronous call per region/tag token.
pub trait Resolver {
    /// Answer a query with raw nation names, in the directory's order.
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError`] if the lookup cannot be completed.
    fn resolve(&self, query: Query<'_>) -> Result<Vec<String>, ResolveError>;
}

impl<R: Resolver + ?Sized> Resolver for &R {
    fn resolve(&self, query: Query<'_>) -> Result<Vec<String>, ResolveError> {
        (**self).resolve(query)
    }
}

/// The classification source consumed by
/// [`ProcessingAction::PrioritizeClassified`](crate::ProcessingAction::PrioritizeClassified).
///
/// `snapshot` is a point-in-time view (e.g. of a delegates cache) and is
/// queried at most once per post-processing invocation.
pub trait Classifier {
    fn snapshot(&self) -> HashSet<String>;
}

impl<C: Classifier + ?Sized> Classifier for &C {
    fn snapshot(&self) -> HashSet<String> {
        (**self).snapshot()
    }
}

/// An in-memory [`Resolver`] and [`Classifier`] backed by plain maps.
///
/// Used by this crate's tests and benches, and useful to embedders that
/// already hold directory data locally. Names may be given in any form; they
/// are normalized to reference form on the way out by the engine.
#[derive(Debug, Clone, Default)]
pub struct MemoryResolver {
    regions: HashMap<String, Vec<String>>,
    wa_members: Vec<String>,
    delegates: Vec<String>,
    new_nations: Vec<String>,
    all_nations: Vec<String>,
}

impl MemoryResolver {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a region and its member nations. The region name is keyed in
    /// reference form.
    #[must_use]
    pub fn region<I, S>(mut self, name: &str, members: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.regions
            .insert(reference_name(name), members.into_iter().map(Into::into).collect());
        self
    }

    #[must_use]
    pub fn wa_members<I, S>(mut self, members: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.wa_members = members.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn delegates<I, S>(mut self, delegates: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.delegates = delegates.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn new_nations<I, S>(mut self, nations: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.new_nations = nations.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn all_nations<I, S>(mut self, nations: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.all_nations = nations.into_iter().map(Into::into).collect();
        self
    }
}

impl Resolver for MemoryResolver {
    fn resolve(&self, query: Query<'_>) -> Result<Vec<String>, ResolveError> {
        match query {
            Query::Region(name) => self
                .regions
                .get(&reference_name(name))
                .cloned()
                .ok_or_else(|| ResolveError::new(format!("no such region '{name}'"))),
            Query::WaMembers => Ok(self.wa_members.clone()),
            Query::Delegates => Ok(self.delegates.clone()),
            Query::NewNations => Ok(self.new_nations.clone()),
            Query::AllNations => Ok(self.all_nations.clone()),
        }
    }
}

impl Classifier for MemoryResolver {
    fn snapshot(&self) -> HashSet<String> {
        self.delegates.iter().map(|n| reference_name(n)).collect()
    }
}
