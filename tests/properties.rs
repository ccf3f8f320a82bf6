//! Property tests checking ArrayList and the structures layered over it against a plain [`Vec`]
//! model.

use proptest::prelude::*;
use specialized_collections::collections::contiguous::{ArrayList, DEFAULT_INITIAL_CAPACITY};
use specialized_collections::collections::traits::List;
use specialized_collections::collections::wrappers::Unmodifiable;

#[derive(Debug, Clone)]
enum Op {
    Push(i32),
    Pop,
    Insert(usize, i32),
    Remove(usize),
    AddBlock(usize, Vec<i32>),
    RemoveRange(usize, usize),
    Clear,
    Trim(usize),
    Ensure(usize),
    Resize(usize),
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => any::<i32>().prop_map(Op::Push),
        1 => Just(Op::Pop),
        2 => (0usize..40, any::<i32>()).prop_map(|(i, v)| Op::Insert(i, v)),
        2 => (0usize..40).prop_map(Op::Remove),
        1 => (0usize..40, prop::collection::vec(any::<i32>(), 0..8))
            .prop_map(|(i, values)| Op::AddBlock(i, values)),
        1 => (0usize..40, 0usize..40).prop_map(|(from, to)| Op::RemoveRange(from, to)),
        1 => Just(Op::Clear),
        1 => (0usize..40).prop_map(Op::Trim),
        1 => (0usize..60).prop_map(Op::Ensure),
        1 => (0usize..30).prop_map(Op::Resize),
    ]
}

proptest! {
    /// Every operation keeps the list equal to the model and within its capacity. Rejected
    /// operations leave both untouched.
    #[test]
    fn prop_operations_match_model(ops in prop::collection::vec(op(), 0..60)) {
        let mut list = ArrayList::new();
        let mut model: Vec<i32> = Vec::new();

        for op in ops {
            match op {
                Op::Push(v) => {
                    list.push(v);
                    model.push(v);
                }
                Op::Pop => {
                    prop_assert_eq!(list.pop(), model.pop());
                }
                Op::Insert(i, v) => {
                    let result = list.insert(i, v);
                    if i <= model.len() {
                        prop_assert!(result.is_ok());
                        model.insert(i, v);
                    } else {
                        prop_assert!(result.unwrap_err().is_index_out_of_bounds());
                    }
                }
                Op::Remove(i) => {
                    let result = list.remove(i);
                    if i < model.len() {
                        prop_assert_eq!(result, Ok(model.remove(i)));
                    } else {
                        prop_assert!(result.is_err());
                    }
                }
                Op::AddBlock(i, values) => {
                    let result = list.add_elements(i, &values);
                    if i <= model.len() {
                        prop_assert!(result.is_ok());
                        for (offset, v) in values.into_iter().enumerate() {
                            model.insert(i + offset, v);
                        }
                    } else {
                        prop_assert!(result.is_err());
                    }
                }
                Op::RemoveRange(from, to) => {
                    let result = list.remove_elements(from, to);
                    if from <= to && to <= model.len() {
                        prop_assert!(result.is_ok());
                        model.drain(from..to);
                    } else {
                        prop_assert!(result.is_err());
                    }
                }
                Op::Clear => {
                    list.clear();
                    model.clear();
                }
                Op::Trim(n) => {
                    let before = list.capacity();
                    list.trim(n);
                    prop_assert!(list.capacity() <= before);
                }
                Op::Ensure(n) => {
                    list.ensure_capacity(n);
                    prop_assert!(
                        list.capacity() >= n
                            || (list.capacity() == 0 && n <= DEFAULT_INITIAL_CAPACITY)
                    );
                }
                Op::Resize(n) => {
                    list.resize(n);
                    model.resize(n, 0);
                }
            }

            prop_assert!(list.len() <= list.capacity(), "len {} > capacity {}", list.len(), list.capacity());
            prop_assert_eq!(list.as_slice(), model.as_slice());
        }
    }

    #[test]
    fn prop_push_then_get_last(values in prop::collection::vec(any::<i64>(), 1..100)) {
        let mut list = ArrayList::new();
        for &v in &values {
            list.push(v);
            prop_assert_eq!(list.get(list.len() - 1), Ok(v));
        }
    }

    #[test]
    fn prop_insert_then_remove_restores(
        base in prop::collection::vec("[a-z]{0,6}", 0..30),
        index: usize,
        value in "[a-z]{1,6}"
    ) {
        let mut list = ArrayList::from(base.clone());
        let index = index % (base.len() + 1);

        list.insert(index, value.clone()).unwrap();
        prop_assert_eq!(list.remove(index), Ok(value));
        prop_assert_eq!(list.as_slice(), base.as_slice());
        prop_assert!(
            list.elements()[list.len()..].iter().all(String::is_empty),
            "Vacated slots should be cleared."
        );
    }

    #[test]
    fn prop_growth_is_geometric(values in prop::collection::vec(any::<u8>(), 0..200), initial in 0usize..20) {
        let mut list = ArrayList::with_capacity(initial);
        for (i, &v) in values.iter().enumerate() {
            let old = list.capacity();
            list.push(v);
            let new = list.capacity();
            if new != old {
                prop_assert!(new >= old + old / 2, "grew from {} to {}", old, new);
            }
            prop_assert_eq!(list.as_slice(), &values[..=i]);
        }
    }

    #[test]
    fn prop_get_elements_matches_get(
        base in prop::collection::vec(any::<i32>(), 0..40),
        from in 0usize..50,
        count in 0usize..20
    ) {
        let list = ArrayList::from(base.clone());
        let mut dest = vec![0; count];
        let result = list.get_elements(from, &mut dest);

        if from + count <= base.len() {
            prop_assert!(result.is_ok());
            let expected: Vec<i32> = (from..from + count).map(|i| list.get(i).unwrap()).collect();
            prop_assert_eq!(dest, expected);
        } else {
            prop_assert!(result.is_err());
            prop_assert_eq!(dest, vec![0; count]);
        }
    }

    #[test]
    fn prop_set_elements_matches_set(
        base in prop::collection::vec(any::<i32>(), 0..40),
        from in 0usize..50,
        block in prop::collection::vec(any::<i32>(), 0..20)
    ) {
        let mut bulk = ArrayList::from(base.clone());
        let mut single = ArrayList::from(base.clone());
        let result = bulk.set_elements(from, &block);

        if from + block.len() <= base.len() {
            prop_assert!(result.is_ok());
            for (offset, &v) in block.iter().enumerate() {
                single.set(from + offset, v).unwrap();
            }
        } else {
            prop_assert!(result.is_err());
        }
        prop_assert_eq!(bulk, single);
    }

    #[test]
    fn prop_add_elements_matches_insert(
        base in prop::collection::vec(any::<i32>(), 0..40),
        index in 0usize..50,
        block in prop::collection::vec(any::<i32>(), 0..20)
    ) {
        let mut bulk = ArrayList::from(base.clone());
        let mut single = ArrayList::from(base.clone());
        let result = bulk.add_elements(index, &block);

        if index <= base.len() {
            prop_assert!(result.is_ok());
            for (offset, &v) in block.iter().enumerate() {
                single.insert(index + offset, v).unwrap();
            }
        } else {
            prop_assert!(result.is_err());
        }
        prop_assert_eq!(bulk, single);
    }

    #[test]
    fn prop_remove_elements_matches_remove(
        base in prop::collection::vec(any::<i32>(), 0..40),
        from in 0usize..50,
        to in 0usize..50
    ) {
        let mut bulk = ArrayList::from(base.clone());
        let mut single = ArrayList::from(base.clone());
        let result = bulk.remove_elements(from, to);

        if from <= to && to <= base.len() {
            prop_assert!(result.is_ok());
            for _ in from..to {
                single.remove(from).unwrap();
            }
        } else {
            prop_assert!(result.is_err());
        }
        prop_assert_eq!(bulk, single);
    }

    #[test]
    fn prop_cursor_fails_fast(
        base in prop::collection::vec(any::<i32>(), 0..20),
        extra in prop::collection::vec(any::<i32>(), 1..5)
    ) {
        let mut list = ArrayList::from(base);
        let mut cursor = list.cursor(0).unwrap();
        list.extend(extra);

        prop_assert!(cursor.next(&list).unwrap_err().is_concurrent_modification());
    }

    #[test]
    fn prop_split_conserves_elements(n in 0usize..300, consumed in 0usize..10, rounds in 0usize..6) {
        let list: ArrayList<usize> = (0..n).collect();
        let mut drained = Vec::new();

        let mut first = list.spliterator();
        for _ in 0..consumed {
            first.try_advance(&list, |v| drained.push(v)).unwrap();
        }

        let mut pieces = vec![first];
        for _ in 0..rounds {
            let mut next = Vec::new();
            for mut piece in pieces {
                if let Some(lower) = piece.try_split(&list) {
                    next.push(lower);
                }
                next.push(piece);
            }
            pieces = next;
        }

        let estimated: usize = pieces.iter().map(|piece| piece.estimate_size(&list)).sum();
        prop_assert_eq!(estimated + drained.len(), n);

        for mut piece in pieces {
            piece.for_each_remaining(&list, |v| drained.push(v)).unwrap();
        }
        prop_assert_eq!(drained, (0..n).collect::<Vec<_>>());
    }

    #[test]
    fn prop_sub_list_matches_parent(
        base in prop::collection::vec(any::<i32>(), 1..50),
        a: usize,
        b: usize,
        extra: i32
    ) {
        let len = base.len();
        let from = a % (len + 1);
        let to = from + b % (len - from + 1);
        let mut list = ArrayList::from(base);

        let expected: Vec<i32> = list.as_slice()[from..to].to_vec();
        let view = list.sub_list(from, to).unwrap();
        for i in 0..view.len() {
            prop_assert_eq!(view.get(i), Ok(expected[i]));
        }

        list.push(extra);
        if from > 0 {
            list.set(0, extra).unwrap();
        }

        let view = list.sub_list(from, to).unwrap();
        prop_assert_eq!(view.to_vec(), expected, "Edits outside the range shouldn't show through.");
    }

    #[test]
    fn prop_unmodifiable_is_transparent(
        base in prop::collection::vec(0i32..20, 0..30),
        needle in 0i32..20,
        index in 0usize..40
    ) {
        let list = ArrayList::from(base.clone());
        let mut view = Unmodifiable::new(&list);

        prop_assert_eq!(view.len(), list.len());
        prop_assert_eq!(view.get(index), list.get(index));
        prop_assert_eq!(view.index_of(&needle), list.index_of(&needle));
        prop_assert_eq!(view.last_index_of(&needle), list.last_index_of(&needle));
        prop_assert_eq!(view.contains(&needle), list.contains(&needle));
        prop_assert_eq!(view.to_vec(), base.clone());

        prop_assert!(view.push(needle).unwrap_err().is_unsupported());
        prop_assert!(view.insert(index, needle).unwrap_err().is_unsupported());
        prop_assert!(view.remove(index).unwrap_err().is_unsupported());
        prop_assert!(view.remove_elements(0, 0).unwrap_err().is_unsupported());
        prop_assert_eq!(list.as_slice(), base.as_slice());
    }
}
