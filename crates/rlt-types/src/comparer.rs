//! Item comparers: identity equality plus optional version equality.
//!
//! The diff engine distinguishes two questions about a pair of items:
//! whether they are the *same logical entity* (identity), and whether a same
//! entity's *content* changed between snapshots (version). Identity defaults
//! to structural equality; when no version function is set, an identity match
//! is considered unchanged.

use std::fmt;
use std::sync::Arc;

/// A shared equality function over two items.
pub type EqualityFn<T> = Arc<dyn Fn(&T, &T) -> bool + Send + Sync>;

/// Pluggable equality for the diff engine.
///
/// `is_same` must be an equivalence relation (reflexive, symmetric,
/// transitive) over the combined item universe of both snapshots. Both
/// functions must be pure: the analyzer may call them in any order and
/// caches nothing.
pub struct ItemComparer<T> {
    identity: EqualityFn<T>,
    version: Option<EqualityFn<T>>,
}

impl<T> ItemComparer<T> {
    /// A comparer from explicit identity and optional version functions.
    pub fn new(identity: EqualityFn<T>, version: Option<EqualityFn<T>>) -> Self {
        Self { identity, version }
    }

    /// A comparer whose identity is the given function, with no version
    /// function (identity matches are considered unchanged).
    pub fn by_identity(identity: impl Fn(&T, &T) -> bool + Send + Sync + 'static) -> Self {
        Self {
            identity: Arc::new(identity),
            version: None,
        }
    }

    /// Adds a version function deciding whether a same entity's content
    /// changed. The function returns `true` when the two versions are equal.
    pub fn and_version(mut self, version: impl Fn(&T, &T) -> bool + Send + Sync + 'static) -> Self {
        self.version = Some(Arc::new(version));
        self
    }

    /// Whether `a` and `b` are the same logical entity.
    pub fn is_same(&self, a: &T, b: &T) -> bool {
        (self.identity)(a, b)
    }

    /// Whether the content of a same entity changed between `a` and `b`.
    ///
    /// Only meaningful when [`is_same`](Self::is_same) holds; the analyzer
    /// never calls it otherwise.
    pub fn has_changed(&self, a: &T, b: &T) -> bool {
        match &self.version {
            Some(version) => !version(a, b),
            None => false,
        }
    }
}

impl<T: PartialEq + 'static> ItemComparer<T> {
    /// The default comparer: structural equality as identity, no version
    /// function.
    pub fn structural() -> Self {
        Self::by_identity(|a: &T, b: &T| a == b)
    }
}

impl<T: PartialEq + 'static> Default for ItemComparer<T> {
    fn default() -> Self {
        Self::structural()
    }
}

impl<T> Clone for ItemComparer<T> {
    fn clone(&self) -> Self {
        Self {
            identity: Arc::clone(&self.identity),
            version: self.version.as_ref().map(Arc::clone),
        }
    }
}

impl<T> fmt::Debug for ItemComparer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ItemComparer")
            .field("version", &self.version.is_some())
            .finish()
    }
}
