mod strategy;

use proptest::{prop_assert, prop_assert_eq, prop_assert_ne, proptest};
use relalg::prelude::*;
use strategy::*;

proptest! {
    #[test]
    fn union_commutes(a in set_strategy(), b in set_strategy()) {
        prop_assert_eq!(a.union(&b), b.union(&a));
        prop_assert_eq!(&a | &b, a.union(&b));
    }

    #[test]
    fn intersection_is_subset(a in set_strategy(), b in set_strategy()) {
        let inter = a.intersection(&b);
        prop_assert!(inter.is_subset_of(&a));
        prop_assert!(inter.is_subset_of(&b));
        prop_assert_eq!(inter, b.intersection(&a));
    }

    #[test]
    fn difference_is_disjoint(a in set_strategy(), b in set_strategy()) {
        let diff = a.difference(&b);
        prop_assert!(diff.intersection(&b).is_empty());
        prop_assert_eq!(diff.union(&a.intersection(&b)), a);
    }

    #[test]
    fn subset_is_reflexive(a in set_strategy()) {
        prop_assert!(a.is_subset_of(&a));
        prop_assert!(!a.is_proper_subset_of(&a));
        prop_assert!(a <= a);
    }

    #[test]
    fn proper_subset(a in set_strategy(), b in set_strategy()) {
        let union = a.union(&b);
        prop_assert_eq!(a.is_proper_subset_of(&union), a != union);
    }

    #[test]
    fn cartesian_product_size(a in set_strategy(), b in set_strategy()) {
        let prod = a.cartesian_product(&b);
        prop_assert_eq!(prod.card(), a.card() * b.card());
        if !b.is_empty() {
            prop_assert_eq!(prod.domain(), a);
        }
    }

    #[test]
    fn identity_is_reflexive(a in set_strategy()) {
        let id = a.identity();
        prop_assert_eq!(id.card(), a.card());
        prop_assert!(id.is_reflexive());
        prop_assert!(id.is_injection());
    }
}

proptest! {
    #[test]
    fn restrictions_are_complementary(r in relation_strategy(), s in set_strategy()) {
        let res = r.domain_restriction(&s);
        let anti = r.domain_anti_restriction(&s);
        prop_assert_eq!(res.union(&anti), r.clone());
        prop_assert!(res.domain().is_disjoint(&anti.domain()));

        let res = r.range_restriction(&s);
        let anti = r.range_anti_restriction(&s);
        prop_assert_eq!(res.union(&anti), r);
        prop_assert!(res.range().is_disjoint(&anti.range()));
    }

    #[test]
    fn inverse_is_involution(r in relation_strategy()) {
        let inv = r.inverse();
        prop_assert_eq!(inv.card(), r.card());
        prop_assert_eq!(inv.domain(), r.range());
        prop_assert_eq!(inv.inverse(), r);
    }

    #[test]
    fn composition_is_associative(
        p in relation_strategy(),
        q in relation_strategy(),
        r in relation_strategy(),
    ) {
        prop_assert_eq!(p.composition(&q).composition(&r), p.composition(&q.composition(&r)));
        prop_assert_eq!(&(&p >> &q) >> &r, p.composition(&q).composition(&r));
    }

    #[test]
    fn composition_inverse(q in relation_strategy(), r in relation_strategy()) {
        prop_assert_eq!(q.composition(&r).inverse(), r.inverse().composition(&q.inverse()));
    }

    #[test]
    fn override_takes_precedence(q in relation_strategy(), r in relation_strategy()) {
        let over = q.override_with(&r);
        prop_assert!(r.is_subset_of(&over));
        prop_assert_eq!(over.domain_restriction(&r.domain()), r.clone());
        prop_assert_eq!(
            over.domain_anti_restriction(&r.domain()),
            q.domain_anti_restriction(&r.domain())
        );
    }

    #[test]
    fn closure_is_idempotent(r in relation_strategy()) {
        let closure = r.transitive_closure();
        prop_assert!(r.is_subset_of(&closure));
        prop_assert!(closure.is_transitive());
        prop_assert_eq!(closure.transitive_closure(), closure.clone());

        // Closure only links elements already in the relation.
        prop_assert!(closure.domain().is_subset_of(&r.domain()));
        prop_assert!(closure.range().is_subset_of(&r.range()));
    }

    #[test]
    fn image_of_domain(r in relation_strategy(), s in set_strategy()) {
        prop_assert_eq!(r.image(&r.domain()), r.range());
        prop_assert_eq!(r.image(&s), r.domain_restriction(&s).range());
    }

    #[test]
    fn classification(r in relation_strategy()) {
        prop_assert_eq!(r.is_function(), Function::<u8, u8>::try_from(r.clone()).is_ok());
        if r.is_injection() {
            prop_assert!(r.inverse().is_injection());
        }
    }
}

proptest! {
    #[test]
    fn function_put_get(f in function_strategy(), x in 0u8..8, y in 0u8..8) {
        let mut f = f;
        let prev = f.get_value(&x).copied();
        prop_assert_eq!(f.put(x, y), prev);
        prop_assert_eq!(f.get_value(&x), Some(&y));
        prop_assert!(f.is_function());
        prop_assert!(f.contains_key(&x));
        prop_assert!(f.contains_value(&y));
    }

    #[test]
    fn function_add_is_strict(f in function_strategy(), x in 0u8..8, y in 0u8..8) {
        let mut f = f;
        let card = f.card();
        if f.contains_key(&x) {
            prop_assert_eq!(f.add(Pair::new(x, y)), Err(SetError::DuplicateKey));
            prop_assert_eq!(f.card(), card);
        } else {
            prop_assert_eq!(f.add(Pair::new(x, y)), Ok(()));
            prop_assert_ne!(f.card(), card);
        }
    }

    #[test]
    fn function_override_is_function(f in function_strategy(), g in function_strategy()) {
        prop_assert!(f.override_with(&g).is_function());
    }
}
