//! Crate prelude.

// The actual prelude.
pub use crate::{
    function::{Function, FunctionOps},
    pair::Pair,
    relation::{EndorelationOps, Relation, RelationOps},
    set::{Set, SetError},
    Element, SetOps,
};

// Convenient imports within the crate.
pub(crate) use derive_more::{Display, Error, From, Into, IntoIterator};
pub(crate) use std::{
    cmp::Ordering,
    collections::{hash_set, BTreeMap, HashMap, HashSet},
    fmt::{Debug, Display, Formatter, Result as FmtResult, Write},
    hash::Hash,
};
