use std::fmt;

use log::debug;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::resolve::Classifier;

/// Reordering applied to the final recipient list before sending.
///
/// Operates on the fold's output, independent of the filter algebra; every
/// action is a pure permutation or sub-permutation of its input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ProcessingAction {
    /// Leave the list as resolved.
    #[default]
    None,
    /// Uniform random permutation of the whole list.
    Randomize,
    /// Exact reversal.
    Reverse,
    /// Classified names (e.g. current delegates) first, each partition
    /// independently shuffled.
    PrioritizeClassified,
}

impl ProcessingAction {
    /// Apply this action using the thread-local random source.
    #[must_use]
    pub fn apply<C: Classifier>(self, names: Vec<String>, classifier: &C) -> Vec<String> {
        self.apply_with_rng(names, classifier, &mut rand::thread_rng())
    }

    /// Apply this action with a caller-supplied random source. Tests use a
    /// seeded generator for reproducible orderings.
    ///
    /// The classifier is queried exactly once per call, and only for
    /// [`PrioritizeClassified`](ProcessingAction::PrioritizeClassified):
    /// every element is judged against the same snapshot.
    #[must_use]
    pub fn apply_with_rng<C: Classifier, R: Rng>(
        self,
        mut names: Vec<String>,
        classifier: &C,
        rng: &mut R,
    ) -> Vec<String> {
        match self {
            ProcessingAction::None => names,
            ProcessingAction::Randomize => {
                names.shuffle(rng);
                names
            }
            ProcessingAction::Reverse => {
                names.reverse();
                names
            }
            ProcessingAction::PrioritizeClassified => {
                let snapshot = classifier.snapshot();
                let (mut classified, mut rest): (Vec<String>, Vec<String>) =
                    names.into_iter().partition(|name| snapshot.contains(name));
                debug!(
                    "prioritizing {} classified of {} recipients",
                    classified.len(),
                    classified.len() + rest.len()
                );
                classified.shuffle(rng);
                rest.shuffle(rng);
                classified.extend(rest);
                classified
            }
        }
    }
}

impl fmt::Display for ProcessingAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProcessingAction::None => f.write_str("none"),
            ProcessingAction::Randomize => f.write_str("randomize"),
            ProcessingAction::Reverse => f.write_str("reverse"),
            ProcessingAction::PrioritizeClassified => f.write_str("prioritize classified"),
        }
    }
}
