//! Partial functions [`Function`].

use crate::prelude::*;

/// A partial function X ⇸ Y, i.e. a [`Relation`] relating every x to at most one y.
///
/// ## Invariants
///
/// For every two pairs (x₁, y₁) and (x₂, y₂) in a [`Function`], x₁ = x₂ implies y₁ = y₂. Every
/// method that adds pairs checks this, so that a function can never be built otherwise.
#[derive(Clone)]
pub struct Function<X, Y>(Relation<X, Y>);

// -------------------- Basic traits -------------------- //

impl<X, Y> Default for Function<X, Y> {
    fn default() -> Self {
        Self(Relation::default())
    }
}

impl<X, Y> IntoIterator for Function<X, Y> {
    type Item = Pair<X, Y>;
    type IntoIter = hash_set::IntoIter<Pair<X, Y>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a, X, Y> IntoIterator for &'a Function<X, Y> {
    type Item = &'a Pair<X, Y>;
    type IntoIter = hash_set::Iter<'a, Pair<X, Y>>;

    fn into_iter(self) -> Self::IntoIter {
        (&self.0).into_iter()
    }
}

impl<X: Element, Y: Element> TryFrom<Relation<X, Y>> for Function<X, Y> {
    type Error = SetError;

    /// Fails with [`SetError::DuplicateKey`] if the relation is not a function.
    fn try_from(value: Relation<X, Y>) -> Result<Self, SetError> {
        if value.is_function() {
            Ok(Self(value))
        } else {
            Err(SetError::DuplicateKey)
        }
    }
}

impl<X, Y> From<Function<X, Y>> for Relation<X, Y> {
    fn from(value: Function<X, Y>) -> Self {
        value.0
    }
}

impl<X: Element, Y: Element, S> From<HashMap<X, Y, S>> for Function<X, Y> {
    fn from(value: HashMap<X, Y, S>) -> Self {
        // Map keys are unique.
        Self(Relation::from(value))
    }
}

impl<X: Element, Y: Element> From<BTreeMap<X, Y>> for Function<X, Y> {
    fn from(value: BTreeMap<X, Y>) -> Self {
        Self(Relation::from(value))
    }
}

impl<X: Debug, Y: Debug> Debug for Function<X, Y> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{:?}", self.0)
    }
}

impl<X: Display, Y: Display> Display for Function<X, Y> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.0)
    }
}

// -------------------- SetOps -------------------- //

impl<X, Y> crate::Seal for Function<X, Y> {}

impl<X: Element, Y: Element> SetOps<Pair<X, Y>> for Function<X, Y> {
    type Output = Relation<X, Y>;

    fn as_set(&self) -> &Set<Pair<X, Y>> {
        self.0.as_set()
    }
}

impl<X: Element, Y: Element> RelationOps<X, Y> for Function<X, Y> {}

impl<X, Y> Function<X, Y> {
    /// The empty function.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The function as a relation.
    pub const fn as_relation(&self) -> &Relation<X, Y> {
        &self.0
    }

    /// Removes all pairs from the function.
    pub fn clear(&mut self) {
        self.0.clear();
    }
}

impl<X: Element, Y: Element> Function<X, Y> {
    /// Pairs up the distinct elements of `xs` with the elements of `ys`.
    ///
    /// Each distinct x is paired in order of first appearance, so that `[a, b, a]` and `[1, 2]`
    /// build {(a, 1), (b, 2)}. Fails with [`SetError::InvalidArgument`] unless the number of
    /// distinct x equals the length of `ys`.
    pub fn from_sequences<I, J>(xs: I, ys: J) -> Result<Self, SetError>
    where
        I: IntoIterator<Item = X>,
        J: IntoIterator<Item = Y>,
    {
        let mut seen = Set::new();
        let keys: Vec<_> = xs.into_iter().filter(|x| seen.add(x.clone())).collect();
        let values: Vec<_> = ys.into_iter().collect();

        Relation::from_sequences(keys, values).map(Self)
    }

    /// Builds a function by adding each pair in turn through [`FunctionOps::add`].
    ///
    /// Fails with [`SetError::DuplicateKey`] as soon as two pairs share a key, even if they're
    /// equal.
    pub fn try_from_pairs<I: IntoIterator<Item = Pair<X, Y>>>(iter: I) -> Result<Self, SetError> {
        let mut fun = Self::new();
        for pair in iter {
            fun.add(pair)?;
        }
        Ok(fun)
    }

    /// Removes a pair from the function.
    ///
    /// Returns whether the function changed, i.e. whether the pair was present.
    pub fn remove(&mut self, pair: &Pair<X, Y>) -> bool {
        self.0.remove(pair)
    }

    /// Removes the pair with key x, returning its value.
    pub fn remove_key(&mut self, x: &X) -> Option<Y> {
        let pair = self.get_maplet(x)?.clone();
        self.0.remove(&pair);
        Some(pair.into_y())
    }
}

// -------------------- FunctionOps -------------------- //

/// The operators of a partial function X ⇸ Y.
///
/// Lookups scan every pair of the function, as no index from keys to values is kept.
pub trait FunctionOps<X: Element, Y: Element>: RelationOps<X, Y> {
    /// Adds a pair (x, y) to the function.
    ///
    /// Fails with [`SetError::DuplicateKey`] if the function already has a pair with key x,
    /// regardless of its value. Use [`put`](Self::put) to overwrite a value instead.
    fn add(&mut self, pair: Pair<X, Y>) -> Result<(), SetError>;

    /// Maps x to y, replacing any previous value, which is returned.
    fn put(&mut self, x: X, y: Y) -> Option<Y>;

    /// The pair (x, y) with key x, if any.
    fn get_maplet(&self, x: &X) -> Option<&Pair<X, Y>> {
        self.iter().find(|pair| pair.x() == x)
    }

    /// The value y with (x, y) in the function, if any.
    fn get_value<'a>(&'a self, x: &X) -> Option<&'a Y>
    where
        X: 'a,
    {
        self.get_maplet(x).map(Pair::y)
    }

    /// Whether x is in the domain.
    fn contains_key(&self, x: &X) -> bool {
        self.domain().contains(x)
    }

    /// Whether y is in the range.
    fn contains_value(&self, y: &Y) -> bool {
        self.range().contains(y)
    }
}

impl<X: Element, Y: Element> FunctionOps<X, Y> for Function<X, Y> {
    fn add(&mut self, pair: Pair<X, Y>) -> Result<(), SetError> {
        if self.get_maplet(pair.x()).is_some() {
            return Err(SetError::DuplicateKey);
        }

        self.0.add(pair);
        Ok(())
    }

    fn put(&mut self, x: X, y: Y) -> Option<Y> {
        let prev = self.remove_key(&x);
        self.0.insert(x, y);
        prev
    }
}
