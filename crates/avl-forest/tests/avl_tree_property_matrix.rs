use std::collections::BTreeSet;

use avl_forest::{AvlTree, TreeError};
use proptest::prelude::*;

#[derive(Clone, Debug)]
enum Op {
    Insert(i16),
    Remove(i16),
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => (-64i16..64).prop_map(Op::Insert),
        2 => (-64i16..64).prop_map(Op::Remove),
    ]
}

fn height_bound(size: usize) -> f64 {
    1.44 * ((size + 2) as f64).log2() - 0.33
}

fn keys(tree: &AvlTree<i16>) -> Vec<i16> {
    tree.in_order().into_iter().copied().collect()
}

proptest! {
    #[test]
    fn avl_ops_follow_set_model(ops in prop::collection::vec(op(), 0..200)) {
        let mut tree = AvlTree::<i16>::new();
        let mut model = BTreeSet::new();
        for op in ops {
            match op {
                Op::Insert(k) => {
                    tree.insert(k).unwrap();
                    model.insert(k);
                }
                Op::Remove(k) => {
                    let expected = if model.remove(&k) { Ok(k) } else { Err(TreeError::NotFound) };
                    prop_assert_eq!(tree.remove(&k), expected);
                }
            }
            prop_assert_eq!(tree.assert_valid(), Ok(()));
            prop_assert_eq!(tree.size(), model.len());
            prop_assert!((tree.height() as f64) <= height_bound(tree.size()));
        }
        prop_assert_eq!(keys(&tree), model.into_iter().collect::<Vec<_>>());
    }

    #[test]
    fn avl_in_order_is_strictly_increasing(input in prop::collection::vec(any::<i16>(), 0..300)) {
        let tree: AvlTree<i16> = input.into_iter().collect();
        let keys = keys(&tree);
        prop_assert!(keys.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn avl_duplicate_inserts_are_idempotent(input in prop::collection::vec(-100i16..100, 1..100)) {
        let mut tree: AvlTree<i16> = input.iter().copied().collect();
        let pre_order: Vec<i16> = tree.pre_order().into_iter().copied().collect();
        let size = tree.size();
        tree.extend(input.iter().copied());
        prop_assert_eq!(tree.pre_order().into_iter().copied().collect::<Vec<_>>(), pre_order);
        prop_assert_eq!(tree.size(), size);
    }

    #[test]
    fn avl_insert_get_remove_round_trip(input in prop::collection::btree_set(any::<i16>(), 1..100)) {
        let mut tree = AvlTree::<i16>::new();
        for &k in &input {
            tree.insert(k).unwrap();
            prop_assert_eq!(tree.get(&k), Ok(&k));
        }
        for &k in &input {
            prop_assert_eq!(tree.remove(&k), Ok(k));
            prop_assert_eq!(tree.contains(&k), Ok(false));
            prop_assert_eq!(tree.assert_valid(), Ok(()));
        }
        prop_assert!(tree.is_empty());
        prop_assert_eq!(tree.height(), -1);
    }
}
