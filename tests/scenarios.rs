use bstree::Tree;

#[test]
fn newly_constructed_trees_are_empty() {
    let ints: Tree<i32> = Tree::new();
    let doubles: Tree<f64> = Tree::new();

    assert!(ints.is_empty());
    assert!(doubles.is_empty());
}

#[test]
fn copy_construct() {
    let mut original = Tree::new();
    assert!(!original.search(&2));

    original.insert(2);
    assert!(original.search(&2));

    let copied = original.clone();
    assert!(copied.search(&2));
}

#[test_log::test]
fn copy_assign() {
    let mut original = Tree::new();
    original.insert(2);

    let mut copied = Tree::new();
    copied.insert(7);
    copied.clone_from(&original);

    assert!(copied.search(&2));
    assert!(!copied.search(&7));
}

#[test]
fn insert_then_search() {
    let mut tree = Tree::new();
    assert!(!tree.search(&2));

    tree.insert(2);
    assert!(tree.search(&2));
}

/// Inserts `i / 2` for even `i` and `i` for odd `i`, so the small values arrive
/// late and branch off the long right spine built by the odd values.
fn interleaved() -> Tree<i32> {
    let mut tree = Tree::new();
    for i in 0..1000 {
        if i % 2 == 0 {
            tree.insert(i / 2);
        } else {
            tree.insert(i);
        }
    }
    tree
}

#[test]
fn height() {
    assert_eq!(Tree::<i32>::new().height(), 0);
    assert_eq!(interleaved().height(), 501);
}

#[test]
fn node_count() {
    assert_eq!(Tree::<i32>::new().node_count(), 0);
    assert_eq!(interleaved().node_count(), 750);
}

#[test]
fn leaf_count() {
    assert_eq!(Tree::<i32>::new().leaf_count(), 0);
    assert_eq!(interleaved().leaf_count(), 250);
}

#[test_log::test]
fn delete_keeps_everything_else() {
    let mut tree = interleaved();
    let present: Vec<i32> = tree.preorder().into_iter().copied().collect();

    for value in present.iter().step_by(3) {
        assert!(tree.delete(value));
    }
    for (i, value) in present.iter().enumerate() {
        assert_eq!(tree.search(value), i % 3 != 0);
    }
    assert_eq!(tree.verify(), Ok(()));
}
