use dsa::doubly::DoublyLinkedList;
use dsa::singly::{merge, Position, SinglyLinkedList};
use quickcheck_macros::quickcheck;

use crate::Op;

/// Walks a singly linked list through its public handles.
fn singly_values<T: Clone>(list: &SinglyLinkedList<T>) -> Vec<T> {
    let mut out = Vec::new();
    let mut current = list.head();
    while let Some(id) = current {
        out.push(list.get(id).unwrap().clone());
        current = list.next(id);
    }
    out
}

fn doubly_values<T: Clone>(list: &DoublyLinkedList<T>) -> Vec<T> {
    let mut out = Vec::new();
    let mut current = list.head();
    while let Some(id) = current {
        out.push(list.get(id).unwrap().clone());
        current = list.next(id);
    }
    out
}

/// Applies a set of operations to a list and a `Vec`.
/// This way we can ensure that after a random smattering of inserts,
/// deletes and reversals both hold the same sequence.
fn do_ops<T>(ops: &[Op<T>], list: &mut SinglyLinkedList<T>, model: &mut Vec<T>)
where
    T: PartialEq + Clone,
{
    for op in ops {
        match op {
            Op::Insert(v) => {
                list.insert(v.clone());
                model.push(v.clone());
            }
            Op::Delete(v) => {
                let deleted = list.delete_val(v);
                match model.iter().position(|x| x == v) {
                    Some(pos) => {
                        model.remove(pos);
                        assert!(deleted);
                    }
                    None => assert!(!deleted),
                }
            }
            Op::Reverse => {
                list.reverse();
                model.reverse();
            }
        }
    }
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
    let mut list = SinglyLinkedList::new();
    let mut model = Vec::new();

    do_ops(&ops, &mut list, &mut model);
    singly_values(&list) == model && list.len() == model.len()
}

#[quickcheck]
fn find_agrees_with_position(xs: Vec<i8>, needle: i8) -> bool {
    let list: SinglyLinkedList<_> = xs.iter().cloned().collect();
    match (list.find(&needle), xs.iter().position(|x| *x == needle)) {
        (Position::NotFound, None) => true,
        (Position::Head, Some(0)) => true,
        (Position::After(pred), Some(pos)) if pos > 0 => {
            let found = list.next(pred).and_then(|n| list.get(n));
            list.get(pred) == Some(&xs[pos - 1]) && found == Some(&needle)
        }
        _ => false,
    }
}

#[quickcheck]
fn singly_reverse_twice(xs: Vec<i8>) -> bool {
    let mut list: SinglyLinkedList<_> = xs.iter().cloned().collect();
    list.reverse();
    let reversed = singly_values(&list);
    list.reverse();

    reversed.into_iter().eq(xs.iter().rev().cloned()) && singly_values(&list) == xs
}

#[quickcheck]
fn doubly_reverse_twice(xs: Vec<i8>) -> bool {
    let mut list: DoublyLinkedList<_> = xs.iter().cloned().collect();
    list.reverse();
    let reversed = doubly_values(&list);
    list.reverse();

    reversed.into_iter().eq(xs.iter().rev().cloned()) && doubly_values(&list) == xs
}

#[quickcheck]
fn merge_sorted(xs: Vec<i16>, ys: Vec<i16>) -> bool {
    let mut xs = xs;
    let mut ys = ys;
    xs.sort_unstable();
    ys.sort_unstable();

    let merged = merge(xs.iter().cloned().collect(), ys.iter().cloned().collect());
    let mut expected = xs;
    expected.extend(ys);
    expected.sort_unstable();

    singly_values(&merged) == expected
}

#[quickcheck]
fn render_matches_vec_format(xs: Vec<u8>) -> bool {
    let singly: SinglyLinkedList<_> = xs.iter().cloned().collect();
    let doubly: DoublyLinkedList<_> = xs.iter().cloned().collect();
    let expected = format!("{:?}", xs);

    singly.to_string() == expected && doubly.to_string() == expected
}
