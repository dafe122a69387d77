use crate::constants::MAX_CODE_POINT;
use crate::{constants, CodePointSet, CodePointSetError};
use proptest::prelude::*;
use std::collections::BTreeSet;

/// Code points weighted toward the tier boundary and the top of the
/// codespace, where the index arithmetic is most likely to slip.
fn arb_code_point() -> impl Strategy<Value = u32> {
    prop_oneof![
        0u32..256,
        240u32..300,
        256u32..0x3000,
        0x10000u32..=MAX_CODE_POINT,
        (MAX_CODE_POINT - 16)..=MAX_CODE_POINT,
    ]
}

#[derive(Debug, Clone)]
enum Op {
    Insert(u32),
    Remove(u32),
    InsertRange(u32, u32),
    RemoveRange(u32, u32),
    Clear,
}

fn arb_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        6 => arb_code_point().prop_map(Op::Insert),
        4 => arb_code_point().prop_map(Op::Remove),
        2 => (arb_code_point(), 0u32..64).prop_map(|(lo, n)| Op::InsertRange(lo, (lo + n).min(MAX_CODE_POINT))),
        2 => (arb_code_point(), 0u32..64).prop_map(|(lo, n)| Op::RemoveRange(lo, lo + n)),
        1 => Just(Op::Clear),
    ]
}

/// Apply `ops` to both a CodePointSet and a BTreeSet model.
fn run(ops: &[Op]) -> (CodePointSet, BTreeSet<u32>) {
    let mut set = CodePointSet::new();
    let mut model = BTreeSet::new();

    for op in ops {
        match *op {
            Op::Insert(cp) => {
                assert_eq!(set.insert(cp), Ok(model.insert(cp)));
            }
            Op::Remove(cp) => {
                let expected = model.remove(&cp).then_some(cp);
                assert_eq!(set.remove(cp), expected);
            }
            Op::InsertRange(lo, hi) => {
                set.insert_range(lo..=hi).unwrap();
                model.extend(lo..=hi);
            }
            Op::RemoveRange(lo, hi) => {
                set.remove_range(lo..=hi);
                model.retain(|cp| !(lo..=hi).contains(cp));
            }
            Op::Clear => {
                set.clear();
                model.clear();
            }
        }
    }

    (set, model)
}

proptest! {
    #[test]
    fn len_matches_model(ops in proptest::collection::vec(arb_op(), 0..64)) {
        let (set, model) = run(&ops);
        prop_assert_eq!(set.len(), model.len());
        prop_assert_eq!(set.is_empty(), model.is_empty());
    }

    #[test]
    fn iter_matches_model(ops in proptest::collection::vec(arb_op(), 0..64)) {
        let (set, model) = run(&ops);
        let members: Vec<u32> = set.iter().collect();
        let expected: Vec<u32> = model.iter().copied().collect();
        prop_assert_eq!(members, expected);
        prop_assert_eq!(set.first(), model.first().copied());
        prop_assert_eq!(set.last(), model.last().copied());
    }

    #[test]
    fn contains_matches_model(
        ops in proptest::collection::vec(arb_op(), 0..64),
        extra in proptest::collection::vec(arb_code_point(), 0..64),
    ) {
        let (set, model) = run(&ops);
        for cp in extra.into_iter().chain(model.iter().copied()) {
            prop_assert_eq!(set.contains(cp), model.contains(&cp), "cp {:#X}", cp);
        }
    }

    #[test]
    fn range_matches_model(
        ops in proptest::collection::vec(arb_op(), 0..64),
        lo in arb_code_point(),
        hi in arb_code_point(),
    ) {
        let (set, model) = run(&ops);
        let members: Vec<u32> = set.range(lo..=hi).collect();
        let expected: Vec<u32> = if lo <= hi {
            model.range(lo..=hi).copied().collect()
        } else {
            Vec::new()
        };
        prop_assert_eq!(members, expected);
    }

    #[test]
    fn insert_then_remove_round_trips(cp in arb_code_point()) {
        let mut set = CodePointSet::new();
        prop_assert_eq!(set.insert(cp), Ok(true));
        prop_assert!(set.contains(cp));
        prop_assert_eq!(set.insert(cp), Ok(false));
        prop_assert_eq!(set.len(), 1);

        prop_assert_eq!(set.remove(cp), Some(cp));
        prop_assert!(!set.contains(cp));
        prop_assert!(set.is_empty());
    }

    #[test]
    fn capacity_covers_inserted(cps in proptest::collection::vec(arb_code_point(), 1..16)) {
        let mut set = CodePointSet::new();
        let mut last = set.capacity();
        for cp in cps {
            set.insert(cp).unwrap();
            let capacity = set.capacity();
            prop_assert!(capacity >= last);
            prop_assert!(capacity > cp as usize);
            prop_assert_eq!(capacity % 8, 0);
            last = capacity;
        }
    }

    #[test]
    fn out_of_range_insert_fails(cp in (MAX_CODE_POINT + 1)..=u32::MAX) {
        let mut set = CodePointSet::new();
        prop_assert_eq!(
            set.insert(cp),
            Err(CodePointSetError::OutOfRange { code_point: cp })
        );
        prop_assert!(!set.contains(cp));
        prop_assert!(set.is_empty());
    }

    #[test]
    fn equal_sets_built_in_different_order(mut cps in proptest::collection::vec(arb_code_point(), 0..32)) {
        let mut forward = CodePointSet::new();
        for &cp in &cps {
            forward.insert(cp).unwrap();
        }

        cps.reverse();
        let mut backward = CodePointSet::with_capacity(0x4000);
        for &cp in &cps {
            backward.insert(cp).unwrap();
        }

        prop_assert_eq!(&forward, &backward);
        prop_assert_eq!(forward.clone(), backward);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(8))]

    #[test]
    fn complement_is_exclusive(cps in proptest::collection::vec(arb_code_point(), 0..32)) {
        let mut set = CodePointSet::new();
        for &cp in &cps {
            set.insert(cp).unwrap();
        }

        let other = set.complement();
        prop_assert_eq!(set.len() + other.len(), constants::CODESPACE_LEN);
        for cp in cps {
            prop_assert!(!other.contains(cp));
        }
        for cp in other.range(..0x400).take(64) {
            prop_assert!(!set.contains(cp));
        }
        prop_assert_eq!(other.complement(), set);
    }
}
