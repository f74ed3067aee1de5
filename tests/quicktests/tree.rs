use stackwalk::tree::Tree;

use std::collections::{BTreeMap, HashSet};

use crate::Op;

/// Applies a set of operations to a tree and a map.
/// This way we can ensure that after a random smattering of inserts
/// and deletes we have the same set of keys in the map.
fn do_ops(ops: &[Op<char, i32>], bst: &mut Tree, map: &mut BTreeMap<char, i32>) {
    for op in ops {
        match op {
            Op::Insert(k, v) => {
                bst.insert(*k, *v);
                map.insert(*k, *v);
            }
            Op::Remove(k) => {
                bst.delete(*k);
                map.remove(k);
            }
        }
    }
}

#[quickcheck]
fn fuzz_multiple_operations_char(ops: Vec<Op<char, i32>>) -> bool {
    let mut tree = Tree::new();
    let mut map = BTreeMap::new();

    do_ops(&ops, &mut tree, &mut map);
    let inorder: Vec<_> = tree.inorder().map(|e| (e.key, e.value)).collect();
    let expected: Vec<_> = map.into_iter().collect();
    inorder == expected
}

#[quickcheck]
fn contains(xs: Vec<char>) -> bool {
    let mut tree = Tree::new();
    for (i, x) in xs.iter().enumerate() {
        tree.insert(*x, i as i32);
    }

    // The last insert of a key wins.
    xs.iter()
        .enumerate()
        .all(|(i, x)| tree.search(*x).map_or(false, |v| v as usize >= i))
}

#[quickcheck]
fn contains_not(xs: Vec<char>, nots: Vec<char>) -> bool {
    let mut tree = Tree::new();
    for x in &xs {
        tree.insert(*x, 0);
    }
    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| tree.search(*x).is_none())
}

#[quickcheck]
fn with_deletions(xs: Vec<char>, deletes: Vec<char>) -> bool {
    let mut tree = Tree::new();
    for x in &xs {
        tree.insert(*x, 0);
    }
    for delete in &deletes {
        tree.delete(*delete);
    }

    let deleted: HashSet<_> = deletes.iter().collect();
    let still_present: HashSet<_> = xs.iter().filter(|x| !deleted.contains(x)).collect();

    deletes.iter().all(|x| tree.search(*x).is_none())
        && still_present.iter().all(|x| tree.search(**x).is_some())
        && tree.len() == still_present.len()
}

#[quickcheck]
fn deleting_missing_key_keeps_shape(xs: Vec<char>, missing: char) -> bool {
    let mut tree = Tree::new();
    for x in xs.iter().filter(|x| **x != missing) {
        tree.insert(*x, 0);
    }
    let before: Vec<_> = tree.preorder().collect();

    tree.delete(missing).is_none() && tree.preorder().collect::<Vec<_>>() == before
}

#[quickcheck]
fn dispose_matches_new(xs: Vec<char>) -> bool {
    let mut tree = Tree::new();
    for x in &xs {
        tree.insert(*x, 0);
    }
    tree.dispose();

    tree.is_empty()
        && tree.len() == 0
        && xs.iter().all(|x| tree.search(*x).is_none())
        && tree.postorder().next().is_none()
}
