use bstree::Tree;

use std::collections::HashSet;

use quickcheck_macros::quickcheck;

fn build(xs: &[i8]) -> Tree<i8> {
    xs.iter().copied().collect()
}

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let tree = build(&xs);

    xs.iter().all(|x| tree.search(x))
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let tree = build(&xs);
    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| !tree.search(x))
}

#[quickcheck]
fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    let mut tree = build(&xs);
    for delete in &deletes {
        tree.delete(delete);
    }

    let mut still_present = xs;
    for delete in &deletes {
        // We may have inserted the same value multiple times - delete each one.
        while let Some(pos) = still_present.iter().position(|x| x == delete) {
            still_present.swap_remove(pos);
        }
    }

    deletes.iter().all(|x| !tree.search(x))
        && still_present.iter().all(|x| tree.search(x))
        && tree.verify().is_ok()
}

#[quickcheck]
fn node_count_is_number_of_distinct_values(xs: Vec<i8>) -> bool {
    let tree = build(&xs);
    let distinct: HashSet<_> = xs.iter().collect();

    tree.node_count() == distinct.len()
}

#[quickcheck]
fn reinserting_keeps_count(xs: Vec<i8>) -> bool {
    let mut tree = build(&xs);
    let count = tree.node_count();
    for x in &xs {
        if tree.insert(*x) {
            return false;
        }
    }

    tree.node_count() == count
}

#[quickcheck]
fn count_identities(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    let mut tree = build(&xs);
    for delete in &deletes {
        tree.delete(delete);
    }

    let nodes = tree.node_count();
    nodes >= tree.leaf_count()
        && (nodes == 0) == tree.is_empty()
        && (nodes == 0) == (tree.height() == 0)
        && tree.height() <= nodes
}

#[quickcheck]
fn copies_are_independent(xs: Vec<i8>, extra: Vec<i8>) -> bool {
    let original = build(&xs);
    let mut copied = original.clone();
    let before: Vec<i8> = original.preorder().into_iter().copied().collect();

    for x in &extra {
        copied.insert(*x);
    }
    for x in &xs {
        copied.delete(x);
    }

    let after: Vec<i8> = original.preorder().into_iter().copied().collect();
    before == after && xs.iter().all(|x| original.search(x) && !copied.search(x))
}

#[quickcheck]
fn clone_from_matches_source(xs: Vec<i8>, ys: Vec<i8>) -> bool {
    let source = build(&xs);
    let mut target = build(&ys);
    target.clone_from(&source);

    target == source && target.preorder() == source.preorder()
}
