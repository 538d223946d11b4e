//! Binary relations [`Relation`].

use crate::prelude::*;
use std::ops::Shr;

/// A binary relation between X and Y, i.e. a set of [`Pairs`](Pair) (x, y).
///
/// Unlike a [`Function`], a relation may relate one x to many y.
#[derive(Clone)]
pub struct Relation<X, Y>(Set<Pair<X, Y>>);

// -------------------- Basic traits -------------------- //

impl<X, Y> Default for Relation<X, Y> {
    fn default() -> Self {
        Self(Set::default())
    }
}

impl<X: Element, Y: Element> FromIterator<Pair<X, Y>> for Relation<X, Y> {
    fn from_iter<I: IntoIterator<Item = Pair<X, Y>>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<X, Y> IntoIterator for Relation<X, Y> {
    type Item = Pair<X, Y>;
    type IntoIter = hash_set::IntoIter<Pair<X, Y>>;

    fn into_iter(self) -> Self::IntoIter {
        HashSet::from(self.0).into_iter()
    }
}

impl<'a, X, Y> IntoIterator for &'a Relation<X, Y> {
    type Item = &'a Pair<X, Y>;
    type IntoIter = hash_set::Iter<'a, Pair<X, Y>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.as_hash_set().iter()
    }
}

impl<X: Element, Y: Element> Extend<Pair<X, Y>> for Relation<X, Y> {
    fn extend<I: IntoIterator<Item = Pair<X, Y>>>(&mut self, iter: I) {
        self.0.extend(iter);
    }
}

impl<X: Element, Y: Element, const N: usize> From<[(X, Y); N]> for Relation<X, Y> {
    fn from(value: [(X, Y); N]) -> Self {
        value.into_iter().map(Pair::from).collect()
    }
}

impl<X, Y> From<Set<Pair<X, Y>>> for Relation<X, Y> {
    fn from(value: Set<Pair<X, Y>>) -> Self {
        Self(value)
    }
}

impl<X, Y> From<Relation<X, Y>> for Set<Pair<X, Y>> {
    fn from(value: Relation<X, Y>) -> Self {
        value.0
    }
}

impl<X: Element, Y: Element, S> From<HashMap<X, Y, S>> for Relation<X, Y> {
    fn from(value: HashMap<X, Y, S>) -> Self {
        value.into_iter().map(Pair::from).collect()
    }
}

impl<X: Element, Y: Element> From<BTreeMap<X, Y>> for Relation<X, Y> {
    fn from(value: BTreeMap<X, Y>) -> Self {
        value.into_iter().map(Pair::from).collect()
    }
}

impl<X: Debug, Y: Debug> Debug for Relation<X, Y> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{:?}", self.0)
    }
}

/// Displays a relation as a set of pairs, in no particular order.
impl<X: Display, Y: Display> Display for Relation<X, Y> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.0)
    }
}

/// Composition of relations, `&q >> &r` being [`RelationOps::composition`].
impl<X: Element, Y: Element, Z: Element> Shr<&Relation<Y, Z>> for &Relation<X, Y> {
    type Output = Relation<X, Z>;

    fn shr(self, rhs: &Relation<Y, Z>) -> Relation<X, Z> {
        self.composition(rhs)
    }
}

// -------------------- SetOps -------------------- //

impl<X, Y> crate::Seal for Relation<X, Y> {}

impl<X: Element, Y: Element> SetOps<Pair<X, Y>> for Relation<X, Y> {
    type Output = Self;

    fn as_set(&self) -> &Set<Pair<X, Y>> {
        &self.0
    }
}

impl<X: Element, Y: Element> RelationOps<X, Y> for Relation<X, Y> {}

impl<X, Y> Relation<X, Y> {
    /// The empty relation.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Removes all pairs from the relation.
    pub fn clear(&mut self) {
        self.0.clear();
    }
}

impl<X: Element, Y: Element> Relation<X, Y> {
    /// Zips two sequences into the relation {(x₀, y₀), (x₁, y₁), …}.
    ///
    /// Fails with [`SetError::InvalidArgument`] if the sequences have different lengths. Repeated
    /// pairs collapse into one.
    pub fn from_sequences<I, J>(xs: I, ys: J) -> Result<Self, SetError>
    where
        I: IntoIterator<Item = X>,
        I::IntoIter: ExactSizeIterator,
        J: IntoIterator<Item = Y>,
        J::IntoIter: ExactSizeIterator,
    {
        let (xs, ys) = (xs.into_iter(), ys.into_iter());
        if xs.len() != ys.len() {
            return Err(SetError::InvalidArgument {
                left: xs.len(),
                right: ys.len(),
            });
        }

        Ok(xs.zip(ys).map(Pair::from).collect())
    }

    /// Adds a pair to the relation.
    ///
    /// Returns whether the relation changed, i.e. whether the pair was missing.
    pub fn add(&mut self, pair: Pair<X, Y>) -> bool {
        self.0.add(pair)
    }

    /// Relates x to y. Shorthand for [`Relation::add`].
    pub fn insert(&mut self, x: X, y: Y) -> bool {
        self.add(Pair::new(x, y))
    }

    /// Removes a pair from the relation.
    ///
    /// Returns whether the relation changed, i.e. whether the pair was present.
    pub fn remove(&mut self, pair: &Pair<X, Y>) -> bool {
        self.0.remove(pair)
    }

    /// Adds every entry of a map as a pair. Returns whether the relation changed.
    pub fn extend_from_map<M: IntoIterator<Item = (X, Y)>>(&mut self, map: M) -> bool {
        let mut changed = false;
        for (x, y) in map {
            changed |= self.insert(x, y);
        }
        changed
    }
}

// -------------------- RelationOps -------------------- //

/// The operators of a binary relation X ↔ Y.
///
/// Every method builds its result from scratch, including [`domain`](Self::domain) and
/// [`range`](Self::range), so the cost of a query is always proportional to the number of pairs.
pub trait RelationOps<X: Element, Y: Element>: SetOps<Pair<X, Y>> {
    /// Domain dom(R) = {x : (x, y) ∈ R}.
    fn domain(&self) -> Set<X> {
        self.iter().map(|pair| pair.x().clone()).collect()
    }

    /// Range ran(R) = {y : (x, y) ∈ R}.
    fn range(&self) -> Set<Y> {
        self.iter().map(|pair| pair.y().clone()).collect()
    }

    /// Domain restriction S ◁ R, the pairs whose x belongs to S.
    fn domain_restriction<S: SetOps<X> + ?Sized>(&self, s: &S) -> Relation<X, Y> {
        self.iter().filter(|pair| s.contains(pair.x())).cloned().collect()
    }

    /// Domain anti-restriction S ⩤ R, the pairs whose x doesn't belong to S.
    fn domain_anti_restriction<S: SetOps<X> + ?Sized>(&self, s: &S) -> Relation<X, Y> {
        self.iter().filter(|pair| !s.contains(pair.x())).cloned().collect()
    }

    /// Range restriction R ▷ T, the pairs whose y belongs to T.
    fn range_restriction<S: SetOps<Y> + ?Sized>(&self, t: &S) -> Relation<X, Y> {
        self.iter().filter(|pair| t.contains(pair.y())).cloned().collect()
    }

    /// Range anti-restriction R ⩥ T, the pairs whose y doesn't belong to T.
    fn range_anti_restriction<S: SetOps<Y> + ?Sized>(&self, t: &S) -> Relation<X, Y> {
        self.iter().filter(|pair| !t.contains(pair.y())).cloned().collect()
    }

    /// Inverse relation R⁻¹ = {(y, x) : (x, y) ∈ R}.
    fn inverse(&self) -> Relation<Y, X> {
        self.iter().map(|pair| pair.clone().swap()).collect()
    }

    /// Forward composition R ; Q = {(x, z) : (x, y) ∈ R, (y, z) ∈ Q}.
    ///
    /// This is a nested join over both relations, taking O(|R| · |Q|) comparisons.
    fn composition<Z: Element, R: RelationOps<Y, Z> + ?Sized>(&self, r: &R) -> Relation<X, Z> {
        let mut rel = Relation::new();
        for fst in self.iter() {
            for snd in r.iter() {
                if fst.y() == snd.x() {
                    rel.insert(fst.x().clone(), snd.y().clone());
                }
            }
        }
        rel
    }

    /// Relational override R ⊕ Q = (dom(Q) ⩤ R) ∪ Q.
    ///
    /// Every x in the domain of Q keeps exactly its pairs in Q, while the remaining x keep their
    /// pairs in R.
    fn override_with<R: RelationOps<X, Y> + ?Sized>(&self, r: &R) -> Relation<X, Y> {
        let mut rel = self.domain_anti_restriction(&r.domain());
        rel.extend(r.iter().cloned());
        rel
    }

    /// Relational image R[S], the range of S ◁ R.
    fn image<S: SetOps<X> + ?Sized>(&self, s: &S) -> Set<Y> {
        self.iter()
            .filter(|pair| s.contains(pair.x()))
            .map(|pair| pair.y().clone())
            .collect()
    }

    /// Whether every x is related to at most one y.
    fn is_function(&self) -> bool {
        self.domain().card() == self.card()
    }

    /// Whether the relation is a function relating no two x to the same y.
    fn is_injection(&self) -> bool {
        self.is_function() && self.domain().card() == self.range().card()
    }
}

/// The operators of a relation X ↔ X from a type to itself.
///
/// This is implemented for every [`RelationOps`] whose domain and range types agree.
pub trait EndorelationOps<T: Element>: RelationOps<T, T> {
    /// Whether (x, x) ∈ R for every x in the domain of R.
    fn is_reflexive(&self) -> bool {
        self.domain().identity().is_subset_of(self)
    }

    /// Whether (x, y) ∈ R implies (y, x) ∈ R.
    fn is_symmetric(&self) -> bool {
        self.inverse().is_subset_of(self)
    }

    /// Whether (x, y) ∈ R and (y, z) ∈ R imply (x, z) ∈ R.
    fn is_transitive(&self) -> bool {
        self.composition(self).is_subset_of(self)
    }

    /// Transitive closure R⁺, the smallest transitive relation containing R.
    ///
    /// We repeatedly add R ; R to R until this adds no new pairs.
    fn transitive_closure(&self) -> Relation<T, T> {
        let mut rel: Relation<T, T> = self.iter().cloned().collect();
        loop {
            let card = rel.card();
            let step = rel.composition(&rel);
            rel.extend(step);

            if rel.card() == card {
                return rel;
            }
        }
    }
}

impl<T: Element, R: RelationOps<T, T> + ?Sized> EndorelationOps<T> for R {}
