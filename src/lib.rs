//! # Finite sets, relations and partial functions
//!
//! A [`Set`] is an unordered collection without duplicates. A [`Relation`] is a set of ordered
//! [`Pairs`](Pair), relating each x to any number of y. A [`Function`] is a relation where every x
//! is related to at most one y.
//!
//! All three share the algebra of [`SetOps`]. Relations add the operators of [`RelationOps`] and
//! [`EndorelationOps`], and functions add key-based access through [`FunctionOps`].
//!
//! ```
//! use relalg::prelude::*;
//!
//! let q = Relation::from([("tom", "jane"), ("fred", "mary"), ("tom", "kim")]);
//! let r = Relation::from([("jane", "car"), ("mary", "truck"), ("kim", "train")]);
//!
//! let owns = q.composition(&r);
//! assert_eq!(owns.image(&Set::singleton("tom")), Set::from(["car", "train"]));
//! ```

#![warn(clippy::pedantic)]
#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

pub mod function;
pub mod pair;
pub mod prelude;
pub mod relation;
pub mod set;


/// Compiles and runs the examples in the readme.
#[cfg(doctest)]
#[doc = include_str!("../README.md")]
struct ReadmeDoctests;

use prelude::*;

/// A type that can be stored in a [`Set`].
///
/// Membership is decided by [`Eq`] and [`Hash`]. Elements are cloned whenever an operator builds a
/// new collection out of an old one.
pub trait Element: Clone + Eq + Hash {}

impl<T: Clone + Eq + Hash> Element for T {}

/// A seal for [`SetOps`], avoiding foreign implementations.
trait Seal {}

/// A trait for [`Set`], [`Relation`] and [`Function`].
///
/// The trait is sealed so that these are the only three types that ever implement it. It only
/// contains queries and operators building new collections. Insertion is left to each type, since
/// a [`Function`] can refuse an element that a [`Set`] would take.
#[allow(private_bounds)]
pub trait SetOps<T: Element>: Seal {
    /// The collection built by the operators on this set.
    ///
    /// This is `Self` for sets and relations. Operators on functions build relations, as the
    /// union of two functions needn't be a function.
    type Output: SetOps<T> + FromIterator<T>;

    // -------------------- Basic methods -------------------- //

    /// The underlying set of elements.
    fn as_set(&self) -> &Set<T>;

    /// Set cardinality.
    fn card(&self) -> usize {
        self.as_set().as_hash_set().len()
    }

    /// Whether the set is empty.
    fn is_empty(&self) -> bool {
        self.as_set().as_hash_set().is_empty()
    }

    /// Set membership ∈.
    fn contains(&self, el: &T) -> bool {
        self.as_set().as_hash_set().contains(el)
    }

    /// Iterate over the elements of the set, in no particular order.
    fn iter(&self) -> hash_set::Iter<'_, T> {
        self.as_set().as_hash_set().iter()
    }

    // -------------------- Constructions -------------------- //

    /// Set specification {x ∈ X : P(x)}.
    #[must_use]
    fn select<P: FnMut(&T) -> bool>(&self, mut pred: P) -> Self::Output {
        self.iter().filter(|el| pred(el)).cloned().collect()
    }

    /// Union x ∪ y.
    #[must_use]
    fn union<S: SetOps<T> + ?Sized>(&self, other: &S) -> Self::Output {
        self.iter().chain(other.iter()).cloned().collect()
    }

    /// Difference x \ y.
    #[must_use]
    fn difference<S: SetOps<T> + ?Sized>(&self, other: &S) -> Self::Output {
        self.select(|el| !other.contains(el))
    }

    /// Intersection x ∩ y.
    #[must_use]
    fn intersection<S: SetOps<T> + ?Sized>(&self, other: &S) -> Self::Output {
        // Iterate over the smaller set.
        if self.card() <= other.card() {
            self.select(|el| other.contains(el))
        } else {
            other.iter().filter(|el| self.contains(el)).cloned().collect()
        }
    }

    /// The identity relation {(x, x) : x ∈ X}.
    fn identity(&self) -> Relation<T, T> {
        self.iter()
            .map(|el| Pair::new(el.clone(), el.clone()))
            .collect()
    }

    /// The cartesian product X × Y.
    fn cartesian_product<U: Element, S: SetOps<U> + ?Sized>(&self, other: &S) -> Relation<T, U> {
        self.iter()
            .flat_map(|x| other.iter().map(move |y| Pair::new(x.clone(), y.clone())))
            .collect()
    }

    // -------------------- Relations -------------------- //

    /// Subset relation ⊆.
    fn is_subset_of<S: SetOps<T> + ?Sized>(&self, other: &S) -> bool {
        self.card() <= other.card() && self.iter().all(|el| other.contains(el))
    }

    /// Strict subset relation ⊂.
    fn is_proper_subset_of<S: SetOps<T> + ?Sized>(&self, other: &S) -> bool {
        self.card() < other.card() && self.is_subset_of(other)
    }

    /// Whether x ∩ y = Ø.
    fn is_disjoint<S: SetOps<T> + ?Sized>(&self, other: &S) -> bool {
        if self.card() <= other.card() {
            self.iter().all(|el| !other.contains(el))
        } else {
            other.iter().all(|el| !self.contains(el))
        }
    }
}

/// Implements [`PartialEq`] and [`PartialOrd`] for a [`SetOps`] type, with the subset relation
/// as the order.
macro_rules! impl_partial_ord {
    ($t: ident <$($g: ident),*>) => {
        impl<$($g: Element),*> PartialEq for $t<$($g),*> {
            fn eq(&self, other: &Self) -> bool {
                self.card() == other.card() && self.is_subset_of(other)
            }
        }

        impl<$($g: Element),*> Eq for $t<$($g),*> {}

        impl<$($g: Element),*> PartialOrd for $t<$($g),*> {
            fn le(&self, other: &Self) -> bool {
                self.is_subset_of(other)
            }

            fn ge(&self, other: &Self) -> bool {
                other.le(self)
            }

            fn lt(&self, other: &Self) -> bool {
                self.is_proper_subset_of(other)
            }

            fn gt(&self, other: &Self) -> bool {
                other.lt(self)
            }

            fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
                let cmp = self.card().cmp(&other.card());
                let test = match cmp {
                    Ordering::Equal => self.eq(other),
                    Ordering::Less => self.le(other),
                    Ordering::Greater => self.ge(other),
                };

                if test {
                    Some(cmp)
                } else {
                    None
                }
            }
        }
    };
}

impl_partial_ord!(Set<T>);
impl_partial_ord!(Relation<X, Y>);
impl_partial_ord!(Function<X, Y>);
