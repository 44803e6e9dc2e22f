use quickcheck_macros::quickcheck;

use crate::{ArrayList, LinkedList, List};

fn to_vec(list: &LinkedList<i32>) -> Vec<i32> {
    list.iter().copied().collect()
}

/// Replays `ops` on both representations. Indices run slightly past the end so
/// that refused calls are exercised too.
#[quickcheck]
fn prop_agrees_with_array_list(seed: Vec<i32>, ops: Vec<(u8, usize, i32)>) -> bool {
    let _ = env_logger::builder().is_test(true).try_init();

    let mut linked: LinkedList<i32> = seed.iter().copied().collect();
    let mut array = ArrayList::from(seed);

    for (op, i, x) in ops {
        let i = i % (array.size() + 2);
        let same = match op % 4 {
            0 => linked.get(i).copied() == array.get(i).copied(),
            1 => linked.set(i, x) == array.set(i, x),
            2 => linked.add(i, x) == array.add(i, x),
            _ => linked.remove(i) == array.remove(i),
        };
        if !same || linked.size() != array.size() || to_vec(&linked) != array.as_slice() {
            return false;
        }
        if !linked.ring_is_consistent() {
            return false;
        }
    }
    true
}

#[quickcheck]
fn prop_set_then_get(seed: Vec<i32>, i: usize, x: i32) -> bool {
    let mut list: LinkedList<i32> = seed.iter().copied().collect();
    if seed.is_empty() {
        return list.set(i, x).is_err() && list.is_empty();
    }
    let i = i % seed.len();
    let old = list.set(i, x);

    let mut expected = seed.clone();
    expected[i] = x;
    old == Ok(seed[i]) && list.get(i) == Ok(&x) && to_vec(&list) == expected
}

#[quickcheck]
fn prop_add_shifts_tail_up(seed: Vec<i32>, i: usize, x: i32) -> bool {
    let mut list: LinkedList<i32> = seed.iter().copied().collect();
    let i = i % (seed.len() + 1);
    if list.add(i, x).is_err() {
        return false;
    }

    let mut expected = seed.clone();
    expected.insert(i, x);
    list.size() == seed.len() + 1 && list.get(i) == Ok(&x) && to_vec(&list) == expected
}

#[quickcheck]
fn prop_remove_shifts_tail_down(seed: Vec<i32>, i: usize) -> bool {
    let mut list: LinkedList<i32> = seed.iter().copied().collect();
    if seed.is_empty() {
        return list.remove(i).is_err();
    }
    let i = i % seed.len();
    let removed = list.remove(i);

    let mut expected = seed.clone();
    let x = expected.remove(i);
    removed == Ok(x) && list.size() == seed.len() - 1 && to_vec(&list) == expected
}

#[quickcheck]
fn prop_add_then_remove_round_trips(seed: Vec<i32>, i: usize, x: i32) -> bool {
    let mut list: LinkedList<i32> = seed.iter().copied().collect();
    let i = i % (seed.len() + 1);
    list.add(i, x).is_ok() && list.remove(i) == Ok(x) && to_vec(&list) == seed
}

#[quickcheck]
fn prop_out_of_range_changes_nothing(seed: Vec<i32>, past: u8, x: i32) -> bool {
    let mut list: LinkedList<i32> = seed.iter().copied().collect();
    let n = seed.len();
    let past = past as usize;

    let refused = list.get(n + past).is_err()
        && list.set(n + past, x).is_err()
        && list.remove(n + past).is_err()
        && list.add(n + 1 + past, x).is_err();
    refused && list.size() == n && to_vec(&list) == seed
}

#[quickcheck]
fn prop_iter_matches_reverse_walk(seed: Vec<i32>) -> bool {
    let list: LinkedList<i32> = seed.iter().copied().collect();
    let mut reversed: Vec<i32> = list.iter().rev().copied().collect();
    reversed.reverse();
    reversed == seed && list.iter().len() == seed.len()
}
