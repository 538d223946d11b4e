use {
    proptest::{
        collection::{hash_set, vec},
        prelude::Strategy,
    },
    relalg::prelude::*,
};

/// Elements are drawn from `0..MAX_ELEMENT`, so that random collections overlap often.
const MAX_ELEMENT: u8 = 8;

/// Upper bound on the size of generated collections.
const MAX_SIZE: usize = 12;

pub(crate) fn set_strategy() -> impl Strategy<Value = Set<u8>> {
    hash_set(0..MAX_ELEMENT, 0..MAX_SIZE).prop_map(Set::from)
}

pub(crate) fn relation_strategy() -> impl Strategy<Value = Relation<u8, u8>> {
    vec((0..MAX_ELEMENT, 0..MAX_ELEMENT), 0..MAX_SIZE)
        .prop_map(|pairs| pairs.into_iter().map(Pair::from).collect())
}

pub(crate) fn function_strategy() -> impl Strategy<Value = Function<u8, u8>> {
    relation_strategy().prop_map(|rel| {
        let mut fun = Function::new();
        for pair in rel {
            let (x, y) = pair.into_parts();
            fun.put(x, y);
        }
        fun
    })
}
