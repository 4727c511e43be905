//! Jug state representation.
//!
//! A [`JugState`] is an immutable snapshot of the volume held by every jug.
//! Transitions never mutate a state in place; they build a new one.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Volumes held by each jug, indexed by jug position.
///
/// Two states are equal when every jug holds the same volume. States are
/// hashable so the search engine can keep them in its visited set.
///
/// # Example
///
/// ```rust
/// use jugsearch::core::JugState;
///
/// let empty = JugState::empty(3);
/// assert_eq!(empty.volumes(), &[0, 0, 0]);
/// assert_eq!(empty.total(), 0);
///
/// let filled = empty.with_volume(1, 5);
/// assert_eq!(filled.volumes(), &[0, 5, 0]);
/// assert_eq!(empty.volume(1), 0); // original unchanged
/// ```
#[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct JugState(Vec<u64>);

impl JugState {
    /// The all-empty state for `jugs` jugs.
    pub fn empty(jugs: usize) -> Self {
        Self(vec![0; jugs])
    }

    pub fn from_volumes(volumes: Vec<u64>) -> Self {
        Self(volumes)
    }

    pub fn volumes(&self) -> &[u64] {
        &self.0
    }

    /// Volume of jug `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    pub fn volume(&self, index: usize) -> u64 {
        self.0[index]
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Total volume across all jugs.
    ///
    /// States produced by the move generator never exceed the total
    /// capacity, which the engine has already checked fits in a `u64`.
    pub fn total(&self) -> u64 {
        self.0.iter().sum()
    }

    /// Returns a new state with jug `index` set to `volume`.
    pub fn with_volume(&self, index: usize, volume: u64) -> Self {
        let mut volumes = self.0.clone();
        volumes[index] = volume;
        Self(volumes)
    }

    /// Check that every jug is within its capacity.
    ///
    /// A state with a different number of jugs than `capacities` never fits.
    pub fn fits(&self, capacities: &[u64]) -> bool {
        self.0.len() == capacities.len()
            && self
                .0
                .iter()
                .zip(capacities)
                .all(|(volume, capacity)| volume <= capacity)
    }
}

impl fmt::Display for JugState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (index, volume) in self.0.iter().enumerate() {
            if index > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{volume}")?;
        }
        write!(f, ")")
    }
}

impl From<Vec<u64>> for JugState {
    fn from(volumes: Vec<u64>) -> Self {
        Self(volumes)
    }
}
