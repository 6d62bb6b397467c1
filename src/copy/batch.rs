//! Batch-shape validation.
//!
//! A copy takes either one path per side or one ordered sequence of paths
//! per side. Both sides must agree: two single paths form a batch of one,
//! two sequences must have the same length, and anything else is rejected
//! before any transfer starts.

use crate::error::{Error, Result};
use std::path::{Path, PathBuf};

/// One side of a copy call: a single path or an ordered sequence of paths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Paths {
    /// Exactly one path.
    Single(PathBuf),
    /// Zero or more paths, in transfer order.
    Batch(Vec<PathBuf>),
}

impl Paths {
    /// Whether this is the sequence form.
    pub fn is_batch(&self) -> bool {
        matches!(self, Paths::Batch(_))
    }

    fn into_vec(self) -> Vec<PathBuf> {
        match self {
            Paths::Single(path) => vec![path],
            Paths::Batch(paths) => paths,
        }
    }
}

impl From<PathBuf> for Paths {
    fn from(path: PathBuf) -> Self {
        Paths::Single(path)
    }
}

impl From<&PathBuf> for Paths {
    fn from(path: &PathBuf) -> Self {
        Paths::Single(path.clone())
    }
}

impl From<&Path> for Paths {
    fn from(path: &Path) -> Self {
        Paths::Single(path.to_path_buf())
    }
}

impl From<String> for Paths {
    fn from(path: String) -> Self {
        Paths::Single(path.into())
    }
}

impl From<&String> for Paths {
    fn from(path: &String) -> Self {
        Paths::Single(path.into())
    }
}

impl From<&str> for Paths {
    fn from(path: &str) -> Self {
        Paths::Single(path.into())
    }
}

impl<T: AsRef<Path>> From<Vec<T>> for Paths {
    fn from(paths: Vec<T>) -> Self {
        paths.iter().collect()
    }
}

impl<T: AsRef<Path>> From<&[T]> for Paths {
    fn from(paths: &[T]) -> Self {
        paths.iter().collect()
    }
}

impl<T: AsRef<Path>, const N: usize> From<[T; N]> for Paths {
    fn from(paths: [T; N]) -> Self {
        paths.iter().collect()
    }
}

impl<P: AsRef<Path>> FromIterator<P> for Paths {
    fn from_iter<I: IntoIterator<Item = P>>(iter: I) -> Self {
        Paths::Batch(iter.into_iter().map(|p| p.as_ref().to_path_buf()).collect())
    }
}

/// Validated source/destination pairs, in transfer order.
#[derive(Debug)]
pub(crate) struct Batch {
    sources: Vec<PathBuf>,
    destinations: Vec<PathBuf>,
}

impl Batch {
    /// Check that `sources` and `destinations` agree in shape.
    pub(crate) fn pair(sources: Paths, destinations: Paths) -> Result<Self> {
        match (sources.is_batch(), destinations.is_batch()) {
            (true, false) => {
                return Err(Error::argument(
                    "destination must be a sequence if source is a sequence",
                ));
            }
            (false, true) => {
                return Err(Error::argument(
                    "source must be a sequence if destination is a sequence",
                ));
            }
            _ => {}
        }

        let sources = sources.into_vec();
        let destinations = destinations.into_vec();
        if sources.len() != destinations.len() {
            return Err(Error::argument("length mismatch"));
        }

        Ok(Self {
            sources,
            destinations,
        })
    }

    /// Split an ordered mapping into a batch, keeping iteration order.
    pub(crate) fn from_mapping<I, K, V>(mapping: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<Path>,
        V: AsRef<Path>,
    {
        let (sources, destinations) = mapping
            .into_iter()
            .map(|(k, v)| (k.as_ref().to_path_buf(), v.as_ref().to_path_buf()))
            .unzip();
        Self {
            sources,
            destinations,
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.sources.len()
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = (&Path, &Path)> {
        self.sources
            .iter()
            .map(PathBuf::as_path)
            .zip(self.destinations.iter().map(PathBuf::as_path))
    }
}
