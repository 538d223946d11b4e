//! Finite sets [`Set`].

use crate::prelude::*;

/// A finite set: an unordered collection where equal elements collapse into one.
///
/// Membership is the only fact a set records. Iteration order is unspecified, and two sets compare
/// equal whenever they have the same elements.
#[derive(Clone, IntoIterator)]
pub struct Set<T>(#[into_iterator(owned, ref)] HashSet<T>);

/// Error in building or mutating a collection.
///
/// Both variants signal a broken precondition on the caller's side, and the operation that
/// returned them has no effect.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, Error)]
pub enum SetError {
    /// Two collections to be paired up have different sizes.
    ///
    /// When building a [`Function`], `left` counts only the distinct keys.
    #[display(fmt = "cannot pair {} elements with {} elements", left, right)]
    InvalidArgument {
        /// Size of the first collection.
        left: usize,
        /// Size of the second collection.
        right: usize,
    },

    /// A [`Function`] already maps the key of a pair being added.
    #[display(fmt = "duplicate key")]
    DuplicateKey,
}

// -------------------- Basic traits -------------------- //

impl<T> Default for Set<T> {
    fn default() -> Self {
        Self(HashSet::new())
    }
}

impl<T: Element> FromIterator<T> for Set<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<T: Element> Extend<T> for Set<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.0.extend(iter);
    }
}

impl<T: Element, const N: usize> From<[T; N]> for Set<T> {
    fn from(value: [T; N]) -> Self {
        Self::from_iter(value)
    }
}

impl<T> From<HashSet<T>> for Set<T> {
    fn from(value: HashSet<T>) -> Self {
        Self(value)
    }
}

impl<T> From<Set<T>> for HashSet<T> {
    fn from(value: Set<T>) -> Self {
        value.0
    }
}

/// Succinctly writes a set in roster notation.
impl<T: Debug> Debug for Set<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_set().entries(&self.0).finish()
    }
}

/// Displays a set in roster notation, in no particular order.
impl<T: Display> Display for Set<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_char('{')?;
        let mut iter = self.0.iter();
        if let Some(fst) = iter.next() {
            write!(f, "{fst}")?;
        }
        for el in iter {
            write!(f, ", {el}")?;
        }
        f.write_char('}')
    }
}

// -------------------- SetOps -------------------- //

impl<T> crate::Seal for Set<T> {}

impl<T: Element> SetOps<T> for Set<T> {
    type Output = Self;

    fn as_set(&self) -> &Set<T> {
        self
    }
}

/// Implements a binary operator on set references through a [`SetOps`] method.
macro_rules! impl_op {
    ($op: ident, $func: ident, $method: ident) => {
        impl<T: Element> std::ops::$op for &Set<T> {
            type Output = Set<T>;

            fn $func(self, rhs: Self) -> Set<T> {
                self.$method(rhs)
            }
        }
    };
}

impl_op!(BitOr, bitor, union);
impl_op!(BitAnd, bitand, intersection);
impl_op!(Sub, sub, difference);

// -------------------- Other -------------------- //

impl<T> Set<T> {
    /// The empty set Ø.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The underlying hash set.
    pub const fn as_hash_set(&self) -> &HashSet<T> {
        &self.0
    }

    /// Removes all elements from the set.
    pub fn clear(&mut self) {
        self.0.clear();
    }
}

impl<T: Element> Set<T> {
    /// Singleton set {x}.
    pub fn singleton(el: T) -> Self {
        Self::from([el])
    }

    /// In-place set insertion x ∪ {y}.
    ///
    /// Returns whether the set changed, i.e. whether the element was missing.
    pub fn add(&mut self, el: T) -> bool {
        self.0.insert(el)
    }

    /// Set insertion x ∪ {y}.
    #[must_use]
    pub fn insert(mut self, el: T) -> Self {
        self.add(el);
        self
    }

    /// In-place removal x \ {y}.
    ///
    /// Returns whether the set changed, i.e. whether the element was present.
    pub fn remove(&mut self, el: &T) -> bool {
        self.0.remove(el)
    }

    /// In-place set specification.
    pub fn retain<P: FnMut(&T) -> bool>(&mut self, pred: P) {
        self.0.retain(pred);
    }
}
