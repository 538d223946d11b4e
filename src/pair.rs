//! Ordered pairs [`Pair`], the elements of a [`Relation`].

use crate::prelude::*;

/// An ordered pair (x, y), also known as a maplet x ↦ y.
///
/// Two pairs are equal exactly when both of their entries are. A pair can't be modified after it's
/// built; use [`Pair::into_parts`] to take it apart instead.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, From, Into)]
pub struct Pair<X, Y> {
    /// The first entry.
    x: X,
    /// The second entry.
    y: Y,
}

impl<X: Debug, Y: Debug> Debug for Pair<X, Y> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "({:?}, {:?})", self.x, self.y)
    }
}

impl<X: Display, Y: Display> Display for Pair<X, Y> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl<X, Y> Pair<X, Y> {
    /// The ordered pair (x, y).
    pub const fn new(x: X, y: Y) -> Self {
        Self { x, y }
    }

    /// The first entry x of (x, y).
    pub const fn x(&self) -> &X {
        &self.x
    }

    /// The second entry y of (x, y).
    pub const fn y(&self) -> &Y {
        &self.y
    }

    /// Splits the pair into its entries.
    pub fn into_parts(self) -> (X, Y) {
        (self.x, self.y)
    }

    /// Takes the second entry, discarding the first.
    pub fn into_y(self) -> Y {
        self.y
    }

    /// The swapped pair (y, x).
    #[must_use]
    pub fn swap(self) -> Pair<Y, X> {
        Pair::new(self.y, self.x)
    }
}
