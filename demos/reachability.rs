//! Build orders from a package dependency graph.
//!
//! A package depends directly on the packages it names, and transitively on everything those
//! depend on. The transitive closure of the dependency relation answers both "what must be built
//! before this?" and "what must be rebuilt after this changes?".

use relalg::prelude::*;

/// Package names.
type Package = &'static str;

/// Pairs (p, q) where package p directly depends on package q.
fn dependencies() -> Relation<Package, Package> {
    Relation::from([
        ("app", "http"),
        ("app", "json"),
        ("http", "io"),
        ("http", "tls"),
        ("tls", "crypto"),
        ("json", "io"),
        ("cli", "json"),
    ])
}

fn main() {
    let deps = dependencies();
    let closure = deps.transitive_closure();
    let packages = deps.domain().union(&deps.range());

    println!("packages: {packages}");
    // A package reaching itself means a dependency cycle.
    println!("cyclic:   {}", !closure.is_disjoint(&packages.identity()));

    for target in ["app", "cli", "tls"] {
        let before = closure.image(&Set::singleton(target));
        println!("{target} needs {before}");
    }

    // Reverse dependencies: whatever depends on a changed package must be rebuilt.
    let dependents = closure.inverse();
    let changed = Set::from(["io"]);
    println!("changing {changed} rebuilds {}", dependents.image(&changed));

    // Leaves depend on nothing.
    let leaves = packages.difference(&deps.domain());
    println!("leaves:   {leaves}");

    // Pin a replacement dependency for `http`, overriding its previous ones.
    let pinned = deps.override_with(&Relation::from([("http", "io")]));
    let needs = pinned.transitive_closure().image(&Set::singleton("app"));
    println!("pinned:   app needs {needs}");
}
