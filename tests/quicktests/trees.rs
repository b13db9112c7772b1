use std::collections::BTreeSet;

use dsa::bst::{Order, Tree};
use dsa::heap::Heap;
use dsa::trie::Trie;
use quickcheck_macros::quickcheck;

#[quickcheck]
fn bst_in_order_is_sorted_set(xs: Vec<i32>) -> bool {
    let tree: Tree<_> = xs.iter().cloned().collect();
    let expected: BTreeSet<_> = xs.iter().collect();

    tree.traverse(Order::In).into_iter().eq(expected.into_iter())
}

#[quickcheck]
fn bst_contains_exactly_inserted(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let tree: Tree<_> = xs.iter().cloned().collect();
    let added: BTreeSet<_> = xs.iter().cloned().collect();

    added.iter().all(|x| tree.contains(x))
        && nots
            .iter()
            .filter(|x| !added.contains(*x))
            .all(|x| !tree.contains(x))
}

#[quickcheck]
fn bst_pre_order_root_first_post_order_root_last(xs: Vec<i8>) -> bool {
    let tree: Tree<_> = xs.iter().cloned().collect();
    let root = tree.root().and_then(|r| tree.get(r));

    tree.traverse(Order::Pre).first().cloned() == root
        && tree.traverse(Order::Post).last().cloned() == root
}

#[quickcheck]
fn heap_min_tracks_smallest(xs: Vec<i8>) -> bool {
    let mut heap = Heap::new(xs.len());
    let mut seen = Vec::new();
    for x in &xs {
        heap.insert(*x);
        seen.push(*x);
        if heap.min().ok() != seen.iter().min() {
            return false;
        }
    }

    seen.sort_unstable();
    for expected in seen {
        if heap.delete_min() != Some(expected) {
            return false;
        }
    }
    heap.min().is_err()
}

#[quickcheck]
fn heap_never_exceeds_capacity(xs: Vec<i8>, capacity: u8) -> bool {
    let capacity = capacity as usize % 16;
    let mut heap = Heap::new(capacity);
    for x in &xs {
        heap.insert(*x);
    }

    heap.len() == xs.len().min(capacity)
}

#[quickcheck]
fn trie_prefixes_of_inserted_are_counted(words: Vec<String>) -> bool {
    let mut trie = Trie::new();
    for word in &words {
        trie.insert(word);
    }

    words.iter().all(|word| {
        word.char_indices()
            .map(|(i, c)| &word[..i + c.len_utf8()])
            .all(|prefix| trie.count_prefix(prefix) >= 1)
    })
}

#[quickcheck]
fn trie_check_prefix_finds_prefix_pairs(words: Vec<String>) -> bool {
    let mut trie = Trie::new();
    let mut recorded: Vec<&String> = Vec::new();
    for word in words.iter().filter(|w| !w.is_empty()) {
        // A clash means an earlier word is a prefix of this one or the other way around.
        let expected = recorded
            .iter()
            .any(|r| r.starts_with(word.as_str()) || word.starts_with(r.as_str()));
        if trie.check_prefix(word) != expected {
            return false;
        }
        // Clashing words leave the trie as it was.
        if !expected {
            recorded.push(word);
        }
    }
    true
}
