#![cfg(test)]

// Property tests for the private chain layer kept inside the crate so
// they can inspect chain internals without feature gates.
//
// Model: a `Vec<(String, String)>` holding the expected entries in
// insertion order. Chain contract under test:
// - insert appends new keys at the tail and overwrites duplicates in
//   place, so model order is insertion order with stable positions;
// - remove splices out exactly the matching entry;
// - pop drains front-to-back.

use crate::chain::Chain;
use proptest::prelude::*;

#[derive(Clone, Debug)]
enum Op {
    Insert(usize, u32),
    Remove(usize),
    Get(usize),
    Pop,
}

fn op_strategy(pool: usize) -> impl Strategy<Value = Op> {
    prop_oneof![
        (0..pool, any::<u32>()).prop_map(|(k, v)| Op::Insert(k, v)),
        (0..pool).prop_map(Op::Remove),
        (0..pool).prop_map(Op::Get),
        Just(Op::Pop),
    ]
}

fn key(i: usize) -> String {
    format!("k{i}")
}

proptest! {
    // Property: the chain agrees with the ordered model after every op.
    #[test]
    fn chain_matches_ordered_model(
        pool in 1usize..=6,
        ops in proptest::collection::vec(op_strategy(6), 1..200)
    ) {
        let mut chain = Chain::new();
        let mut model: Vec<(String, String)> = Vec::new();

        for op in ops {
            match op {
                Op::Insert(k, v) => {
                    let (k, v) = (key(k % pool), v.to_string());
                    let appended = chain.insert(k.clone(), v.clone());
                    match model.iter_mut().find(|(mk, _)| *mk == k) {
                        Some((_, mv)) => {
                            prop_assert!(!appended);
                            *mv = v;
                        }
                        None => {
                            prop_assert!(appended);
                            model.push((k, v));
                        }
                    }
                }
                Op::Remove(k) => {
                    let k = key(k % pool);
                    let removed = chain.remove(&k);
                    match model.iter().position(|(mk, _)| *mk == k) {
                        Some(i) => {
                            let (_, mv) = model.remove(i);
                            prop_assert_eq!(removed, Some(mv));
                        }
                        None => prop_assert_eq!(removed, None),
                    }
                }
                Op::Get(k) => {
                    let k = key(k % pool);
                    let expected = model.iter().find(|(mk, _)| *mk == k).map(|(_, v)| v.as_str());
                    prop_assert_eq!(chain.get(&k), expected);
                }
                Op::Pop => {
                    let popped = chain.pop();
                    if model.is_empty() {
                        prop_assert_eq!(popped, None);
                    } else {
                        prop_assert_eq!(popped, Some(model.remove(0)));
                    }
                }
            }

            // Order and uniqueness after every step.
            let expected_keys: Vec<String> = model.iter().map(|(k, _)| k.clone()).collect();
            prop_assert_eq!(chain.keys(), expected_keys);
            prop_assert_eq!(chain.len(), model.len());
            prop_assert_eq!(chain.is_empty(), model.is_empty());
        }
    }
}
