//! Small walkthrough of the relation algebra on a family tree.

use relalg::prelude::*;

fn main() {
    let parent = Relation::from([
        ("harry", "tom"),
        ("harry", "jane"),
        ("tom", "fred"),
        ("jane", "mary"),
        ("mary", "eve"),
    ]);

    let grandparent = &parent >> &parent;
    let ancestor = parent.transitive_closure();
    let children = parent.inverse();

    println!("parent:      {parent}");
    println!("grandparent: {grandparent}");
    println!("ancestor:    {ancestor}");
    println!("children:    {children}");
    println!("descendants of jane: {}", ancestor.image(&Set::singleton("jane")));
}
