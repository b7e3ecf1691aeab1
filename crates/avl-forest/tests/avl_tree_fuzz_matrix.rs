use std::collections::BTreeSet;

use avl_forest::{AvlTree, Bst, TreeError};
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256StarStar;

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn avl_tree_random_ops_matrix() {
    init_logger();
    for seed in 0..8u64 {
        let mut rng = Xoshiro256StarStar::seed_from_u64(seed);
        let mut tree = AvlTree::<u32>::new();
        let mut model = BTreeSet::new();
        for _ in 0..2_000 {
            let k = rng.gen_range(0..500u32);
            if rng.gen_bool(0.6) {
                tree.insert(k).unwrap();
                model.insert(k);
            } else {
                let expected = if model.remove(&k) {
                    Ok(k)
                } else {
                    Err(TreeError::NotFound)
                };
                assert_eq!(tree.remove(&k), expected, "seed {seed}");
            }
            tree.assert_valid()
                .unwrap_or_else(|e| panic!("seed {seed}: {e}\n{tree:?}"));
            assert_eq!(tree.size(), model.len());
        }
        let keys: Vec<u32> = tree.in_order().into_iter().copied().collect();
        assert_eq!(keys, model.iter().copied().collect::<Vec<_>>());
    }
}

#[test]
fn avl_tree_matches_bst_contents_matrix() {
    init_logger();
    let mut rng = Xoshiro256StarStar::seed_from_u64(0x5eed);
    let mut avl = AvlTree::<i64>::new();
    let mut bst = Bst::<i64>::new();
    for _ in 0..5_000 {
        let k = rng.gen_range(-1_000..1_000i64);
        if rng.gen_bool(0.5) {
            avl.insert(k).unwrap();
            bst.insert(k).unwrap();
        } else {
            assert_eq!(avl.remove(&k), bst.remove(&k));
        }
        assert_eq!(avl.size(), bst.size());
    }
    assert_eq!(avl.in_order(), bst.in_order());
    assert!(avl.height() <= bst.height());
    avl.assert_valid().unwrap();
}
