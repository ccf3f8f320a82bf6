#![cfg(test)]

use std::cell::Cell;
use std::hash::{BuildHasher, RandomState};
use std::rc::Rc;

use super::*;
use crate::collections::traits::List;
use crate::collections::wrappers::Singleton;
use crate::util::drop::Tracked;
use crate::util::error::{IndexOutOfBounds, ListError};
use crate::util::panic::assert_panics;

#[test]
fn test_remove_then_read() {
    let mut list = ArrayList::new();
    for i in 1..=5 {
        list.push(i);
    }
    assert_eq!(list.capacity(), DEFAULT_INITIAL_CAPACITY);

    assert_eq!(list.remove(2), Ok(3), "Removing index 2 should return the third value.");
    assert_eq!(list.as_slice(), &[1, 2, 4, 5]);
    assert_eq!(list.len(), 4);

    assert!(
        list.get(10).unwrap_err().is_index_out_of_bounds(),
        "Reading past the end should be a bounds fault."
    );

    let view = list.sub_list(1, 3).unwrap();
    assert_eq!(view.to_vec(), vec![2, 4]);
}

#[test]
fn test_growth_from_default() {
    let mut list = ArrayList::new();
    assert_eq!(list.capacity(), 0, "A new list shouldn't allocate.");

    list.push(0_u32);
    assert_eq!(list.capacity(), 10, "The first allocation should use the default capacity.");

    for i in 1..11 {
        list.push(i);
    }
    assert_eq!(list.capacity(), 15, "Capacity should grow by half.");

    for i in 11..16 {
        list.push(i);
    }
    assert_eq!(list.capacity(), 22);
    assert!(list.iter().copied().eq(0..16), "Growth should preserve all elements in order.");
}

#[test]
fn test_growth_from_zero_capacity() {
    let mut list = ArrayList::with_capacity(0);
    let mut caps = Vec::new();
    for i in 0..5_u8 {
        list.push(i);
        caps.push(list.capacity());
    }
    assert_eq!(
        caps,
        vec![1, 2, 3, 4, 6],
        "An explicit zero capacity shouldn't jump to the default capacity."
    );
}

#[test]
fn test_wrap_keeps_element_type() {
    let buf: Box<[String]> = vec!["a".to_string(), "b".to_string(), "c".to_string()].into();
    let mut list = ArrayList::wrap(buf, 3).unwrap();
    assert!(list.is_wrapped());
    assert_eq!(list.capacity(), 3);

    list.push("d".to_string());
    list.push("e".to_string());
    assert!(list.capacity() > 3, "Wrapped buffer should have been reallocated.");
    assert_eq!(list.as_slice(), &["a", "b", "c", "d", "e"]);

    let elements: &[String] = list.elements();
    assert_eq!(elements.len(), list.capacity());
    assert!(elements[5..].iter().all(String::is_empty), "Spare slots should be cleared.");
}

#[test]
fn test_wrap_partial() {
    let list = ArrayList::wrap(vec![1, 2, 3, 4].into_boxed_slice(), 2).unwrap();
    assert_eq!(list.as_slice(), &[1, 2]);
    assert_eq!(list.elements(), &[1, 2, 0, 0], "Slots past len should be cleared when wrapping.");

    let err = ArrayList::wrap(vec![1, 2].into_boxed_slice(), 3).unwrap_err();
    assert!(err.is_illegal_argument());
}

#[test]
fn test_removal_releases_values() {
    let counter = Rc::new(Cell::new(0));
    let mut list: ArrayList<Tracked> = (0..5).map(|id| Tracked::new(id, &counter)).collect();

    drop(list.remove(1));
    assert_eq!(counter.get(), 1, "The removed value should be the only one dropped.");
    assert!(
        list.elements()[4].counter.is_none(),
        "The vacated slot shouldn't hold a reference."
    );
    assert_eq!(list.iter().map(|t| t.id).collect::<Vec<_>>(), vec![0, 2, 3, 4]);

    list.remove_elements(0, 2).unwrap();
    assert_eq!(counter.get(), 3);
    assert!(list.elements()[2..].iter().all(|t| t.counter.is_none()));

    list.clear();
    assert_eq!(counter.get(), 5, "Clearing should drop every element.");
    assert_eq!(list.capacity(), 5, "Clearing shouldn't shrink the buffer.");
}

#[test]
fn test_insert_remove() {
    let mut list = ArrayList::from([10, 20, 30]);

    list.insert(0, 5).unwrap();
    list.insert(2, 15).unwrap();
    list.insert(5, 35).unwrap();
    assert_eq!(list.as_slice(), &[5, 10, 15, 20, 30, 35]);

    let err = list.insert(7, 0).unwrap_err();
    assert_eq!(err, ListError::IndexOutOfBounds(IndexOutOfBounds { index: 7, len: 6 }));
    assert_eq!(list.len(), 6, "A rejected insert shouldn't change the list.");

    assert_eq!(list.remove(2), Ok(15));
    assert_eq!(list.remove(0), Ok(5));
    assert_eq!(list.remove(3), Ok(35));
    assert!(list.remove(3).unwrap_err().is_index_out_of_bounds());
    assert_eq!(list.as_slice(), &[10, 20, 30]);
}

#[test]
fn test_set_and_get() {
    let mut list = ArrayList::from(['a', 'b', 'c']);
    assert_eq!(list.set(1, 'x'), Ok('b'));
    assert_eq!(list.get(1), Ok('x'));
    assert!(list.set(3, 'y').unwrap_err().is_index_out_of_bounds());

    list[0] = 'z';
    assert_eq!(list[0], 'z');
    assert_panics!({ list[3] });
}

#[test]
fn test_block_operations() {
    let mut list: ArrayList<i32> = (0..6).collect();

    list.add_elements(2, &[100, 101, 102]).unwrap();
    assert_eq!(list.as_slice(), &[0, 1, 100, 101, 102, 2, 3, 4, 5]);

    list.set_elements(7, &[-4, -5]).unwrap();
    assert_eq!(list.as_slice(), &[0, 1, 100, 101, 102, 2, 3, -4, -5]);

    let mut dest = [0; 3];
    list.get_elements(2, &mut dest).unwrap();
    assert_eq!(dest, [100, 101, 102]);

    list.remove_elements(2, 5).unwrap();
    assert_eq!(list.as_slice(), &[0, 1, 2, 3, -4, -5]);

    list.add_elements(6, &[6]).unwrap();
    assert_eq!(list.as_slice(), &[0, 1, 2, 3, -4, -5, 6]);
}

#[test]
fn test_block_operations_validate_first() {
    let mut list: ArrayList<i32> = (0..4).collect();
    let before = list.clone();

    assert!(list.add_elements(5, &[1]).unwrap_err().is_index_out_of_bounds());
    assert!(list.set_elements(3, &[1, 2]).unwrap_err().is_index_out_of_bounds());
    assert!(list.remove_elements(3, 1).unwrap_err().is_invalid_range());
    assert!(list.remove_elements(2, 5).unwrap_err().is_index_out_of_bounds());

    let mut dest = [0; 5];
    assert!(list.get_elements(0, &mut dest).unwrap_err().is_index_out_of_bounds());
    assert_eq!(dest, [0; 5], "A rejected copy shouldn't write anything.");

    assert_eq!(list, before, "Rejected block operations shouldn't change the list.");
}

#[test]
fn test_ensure_capacity() {
    let mut list = ArrayList::<u16>::new();
    list.ensure_capacity(5);
    assert_eq!(list.capacity(), 0, "The default allocation already covers small requests.");

    list.ensure_capacity(20);
    assert_eq!(list.capacity(), 20, "Explicit requests should allocate exactly.");

    list.ensure_capacity(10);
    assert_eq!(list.capacity(), 20, "Capacity should never shrink implicitly.");

    for i in 0..21 {
        list.push(i);
    }
    assert_eq!(list.capacity(), 30, "Growth after an explicit request should still grow by half.");
}

#[test]
fn test_trim() {
    let mut list = ArrayList::with_capacity(20);
    list.extend([1, 2, 3]);

    list.trim(25);
    assert_eq!(list.capacity(), 20, "Trimming above the capacity should do nothing.");

    list.trim(5);
    assert_eq!(list.capacity(), 5);

    list.trim(1);
    assert_eq!(list.capacity(), 3, "Trimming should never drop elements.");
    assert_eq!(list.as_slice(), &[1, 2, 3]);

    list.push(4);
    list.trim_to_size();
    assert_eq!(list.capacity(), 4);
}

#[test]
fn test_resize() {
    let mut list = ArrayList::from([1, 2, 3]);
    list.resize(5);
    assert_eq!(list.as_slice(), &[1, 2, 3, 0, 0]);

    list.resize(1);
    assert_eq!(list.as_slice(), &[1]);
    assert!(list.elements()[1..].iter().all(|&v| v == 0));
}

#[test]
fn test_resize_from_default() {
    let mut list = ArrayList::<i32>::new();
    list.resize(0);
    assert_eq!(list.capacity(), 0, "Resizing to zero shouldn't allocate.");

    list.resize(5);
    assert_eq!(list.capacity(), DEFAULT_INITIAL_CAPACITY, "Resizing should allocate the default buffer.");
    assert_eq!(list.as_slice(), &[0; 5]);
    assert_eq!(format!("{list:?}"), "ArrayList { contents: [0, 0, 0, 0, 0], len: 5, cap: 10 }");

    let mut large = ArrayList::<i32>::new();
    large.resize(25);
    assert_eq!(large.capacity(), 25);
    assert_eq!(large.len(), 25);
}

#[test]
fn test_capacity_overflow() {
    assert_panics!({
        ArrayList::<u64>::with_capacity(usize::MAX);
    });

    assert_panics!({
        let mut list = ArrayList::<u8>::new();
        list.ensure_capacity(isize::MAX as usize + 1);
    });
}

#[test]
fn test_sort() {
    let mut list = ArrayList::from([5, 3, 9, 1, 7]);
    list.sort();
    assert_eq!(list.as_slice(), &[1, 3, 5, 7, 9]);

    list.unstable_sort_by(|a, b| b.cmp(a));
    assert_eq!(list.as_slice(), &[9, 7, 5, 3, 1]);

    let mut pairs = ArrayList::from([(2, 'a'), (1, 'b'), (2, 'c'), (1, 'd')]);
    pairs.sort_by(|a, b| a.0.cmp(&b.0));
    assert_eq!(
        pairs.as_slice(),
        &[(1, 'b'), (1, 'd'), (2, 'a'), (2, 'c')],
        "Stable sort should keep equal keys in their original order."
    );
}

#[test]
fn test_stack_operations() {
    let mut list = ArrayList::new();
    assert_eq!(list.pop(), None);
    assert_eq!(list.top(), None);

    list.push("x");
    list.push("y");
    assert_eq!(list.top(), Some(&"y"));
    assert_eq!(list.pop(), Some("y"));
    assert_eq!(list.pop(), Some("x"));
    assert!(list.is_empty());
}

#[test]
fn test_searching_and_filtering() {
    let mut list = ArrayList::from([4, 1, 4, 2, 4, 3]);
    assert_eq!(list.index_of(&4), Some(0));
    assert_eq!(list.last_index_of(&4), Some(4));
    assert!(list.contains(&3));
    assert!(!list.contains(&9));

    assert!(list.remove_item(&4));
    assert_eq!(list.as_slice(), &[1, 4, 2, 4, 3]);
    assert!(!list.remove_item(&9));

    assert!(list.remove_if(|&v| v % 2 == 0));
    assert_eq!(list.as_slice(), &[1, 3]);
    assert_eq!(list.elements()[2..], [0, 0, 0, 0]);
    assert!(!list.remove_if(|&v| v > 10));
}

#[test]
fn test_equality_and_hash() {
    let list = ArrayList::from([1, 2, 3]);
    let mut other = ArrayList::with_capacity(50);
    other.extend([1, 2, 3]);

    assert_eq!(list, other, "Capacity shouldn't affect equality.");
    assert_ne!(list, ArrayList::from([1, 2]));
    assert_ne!(list, ArrayList::from([1, 2, 4]));
    assert_eq!(ArrayList::from([7]), Singleton::new(7));

    let state = RandomState::new();
    assert_eq!(state.hash_one(&list), state.hash_one(&other));
}

#[test]
fn test_conversions() {
    let list: ArrayList<_> = "abc".chars().collect();
    assert_eq!(format!("{list}"), "[a, b, c]");

    let copy = ArrayList::from_list(&Singleton::new('q'));
    assert_eq!(copy.as_slice(), &['q']);

    let mut joined = ArrayList::from_slice(&['x', 'y']);
    joined.add_all(1, &list).unwrap();
    assert_eq!(joined.as_slice(), &['x', 'a', 'b', 'c', 'y']);

    let mut sized = ArrayList::with_capacity(8);
    sized.extend([1, 2]);
    let values: Vec<i32> = sized.into_iter().collect();
    assert_eq!(values, vec![1, 2], "Owned iteration shouldn't yield spare capacity.");

    let cloned = joined.clone();
    assert_eq!(cloned.capacity(), cloned.len(), "Clones should be minimally sized.");
    assert_eq!((&cloned).into_iter().count(), 5);
}

#[test]
fn test_through_capability_interface() {
    fn fill<L: List<u8>>(list: &mut L) {
        for i in 0..4 {
            list.push(i).unwrap();
        }
        list.remove(0).unwrap();
    }

    let mut list = ArrayList::new();
    fill(&mut list);
    assert_eq!(list.as_slice(), &[1, 2, 3]);
    assert_eq!(List::contiguous(&list), Some(&[1, 2, 3][..]));
}

#[cfg(feature = "serde")]
#[test]
fn test_serde_writes_live_elements() {
    let mut list = ArrayList::with_capacity(16);
    list.extend([1_i64, -2, 3]);

    let json = serde_json::to_string(&list).unwrap();
    assert_eq!(json, "[1,-2,3]", "Spare capacity shouldn't be serialized.");

    let back: ArrayList<i64> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, list);
    assert_eq!(back.capacity(), 3);

    assert!(serde_json::from_str::<ArrayList<i64>>("{\"len\":3}").is_err());
}

#[cfg(feature = "serde")]
#[test]
fn test_serde_ignores_inflated_length() {
    use serde::Deserialize;
    use serde::de::value::{Error, SeqDeserializer};

    struct Inflated(std::vec::IntoIter<i64>);

    impl Iterator for Inflated {
        type Item = i64;

        fn next(&mut self) -> Option<i64> {
            self.0.next()
        }

        fn size_hint(&self) -> (usize, Option<usize>) {
            (usize::MAX / 2, Some(usize::MAX / 2))
        }
    }

    let input = SeqDeserializer::<_, Error>::new(Inflated(vec![4, 5].into_iter()));
    let list = ArrayList::<i64>::deserialize(input).unwrap();
    assert_eq!(list.as_slice(), &[4, 5], "A claimed length shouldn't be trusted up front.");
    assert_eq!(list.capacity(), 2);
}
