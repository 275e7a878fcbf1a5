use dslab::tree::{Order, Tree};

use std::collections::{BTreeMap, HashSet};

fn tree_of(xs: &[i8]) -> Tree<i8, i8> {
    let mut tree = Tree::new();
    for x in xs {
        tree.insert(*x, *x);
    }
    tree
}

fn inorder_keys(tree: &Tree<i8, i8>) -> Vec<i8> {
    tree.inorder().into_iter().map(|n| *n.key()).collect()
}

quickcheck::quickcheck! {
    fn last_write_wins(pairs: Vec<(i8, i8)>) -> bool {
        let mut tree = Tree::new();
        let mut map = BTreeMap::new();
        for (k, v) in &pairs {
            tree.insert(*k, *v);
            map.insert(*k, *v);
        }

        map.iter().all(|(k, v)| tree.find(k) == Some(v))
    }

    fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
        let tree = tree_of(&xs);
        let added: HashSet<_> = xs.into_iter().collect();
        let nots: HashSet<_> = nots.into_iter().collect();
        let mut nots = nots.difference(&added);

        nots.all(|x| tree.find(x).is_none())
    }

    fn inorder_is_sorted(xs: Vec<i8>) -> bool {
        let keys = inorder_keys(&tree_of(&xs));

        keys.windows(2).all(|w| w[0] < w[1])
    }

    fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
        let mut tree = tree_of(&xs);
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

        deletes.iter().all(|x| tree.find(x).is_none())
            && still_present.iter().all(|x| tree.find(x) == Some(x))
            && inorder_keys(&tree).windows(2).all(|w| w[0] < w[1])
    }

    fn deleting_missing_key_changes_nothing(xs: Vec<i8>, missing: i8) -> bool {
        let xs: Vec<_> = xs.into_iter().filter(|x| *x != missing).collect();
        let mut tree = tree_of(&xs);
        let before = tree.traversal(Order::Pre).to_string();

        tree.delete(&missing).is_none() && tree.traversal(Order::Pre).to_string() == before
    }

    fn height_is_bounded_by_size(xs: Vec<i8>) -> bool {
        let tree = tree_of(&xs);
        let size = tree.inorder().len();

        // A tree with `size` nodes is at least as tall as a complete one and at most a chain.
        let min_height = (usize::BITS - size.leading_zeros()) as usize;
        tree.height() >= min_height && tree.height() <= size
    }

    fn lca_is_between_keys(xs: Vec<i8>, a: usize, b: usize) -> bool {
        if xs.is_empty() {
            return true;
        }
        let tree = tree_of(&xs);
        let (a, b) = (xs[a % xs.len()], xs[b % xs.len()]);

        match tree.lowest_common_ancestor(&a, &b) {
            Ok(lca) => a.min(b) <= *lca.key() && *lca.key() <= a.max(b),
            Err(_) => false,
        }
    }
}
