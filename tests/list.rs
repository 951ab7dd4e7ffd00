use anchor_list::{AllocError, List};

mod common;
use common::{Budget, Counting, Tracked, TrackedStats};

#[test]
fn test_new() {
    let list: List<i32> = List::new();
    assert!(list.is_empty());
    assert_eq!(list.len(), 0);
    assert_eq!(list.front(), None);
    assert_eq!(list.back(), None);
}

#[test]
fn test_pop_on_empty_is_a_noop() {
    let mut list: List<i32> = List::new();
    assert_eq!(list.pop_back(), None);
    assert_eq!(list.pop_front(), None);
    assert_eq!(list.len(), 0);

    // Still a no-op after the list has been used and drained.
    list.push_back(1).unwrap();
    list.pop_back();
    assert_eq!(list.pop_front(), None);
    assert_eq!(list.len(), 0);
}

#[test]
fn test_end_insertions_and_removals() {
    let mut list = List::new();
    list.push_back(1).unwrap();
    list.push_back(2).unwrap();
    list.push_front(0).unwrap();

    assert_eq!(list.len(), 3);
    assert_eq!(Vec::from_iter(list.iter().copied()), vec![0, 1, 2]);

    assert_eq!(list.pop_front(), Some(0));
    assert_eq!(Vec::from_iter(list.iter().copied()), vec![1, 2]);

    assert_eq!(list.pop_back(), Some(2));
    assert_eq!(Vec::from_iter(list.iter().copied()), vec![1]);
    assert_eq!(list.len(), 1);
}

#[test]
fn test_len_always_matches_traversal() {
    let mut list = List::new();
    let mut model = Vec::new();

    let script: &[(&str, i32)] = &[
        ("push_back", 1),
        ("push_back", 2),
        ("push_front", 0),
        ("pop_back", 0),
        ("push_front", -1),
        ("pop_front", 0),
        ("pop_front", 0),
        ("pop_front", 0),
        ("pop_front", 0),
        ("push_back", 9),
    ];
    for (op, value) in script {
        match *op {
            "push_back" => {
                list.push_back(*value).unwrap();
                model.push(*value);
            }
            "push_front" => {
                list.push_front(*value).unwrap();
                model.insert(0, *value);
            }
            "pop_back" => {
                assert_eq!(list.pop_back(), model.pop());
            }
            "pop_front" => {
                let expected = if model.is_empty() {
                    None
                } else {
                    Some(model.remove(0))
                };
                assert_eq!(list.pop_front(), expected);
            }
            _ => unreachable!(),
        }
        assert_eq!(list.len(), model.len());
        assert_eq!(list.iter().count(), model.len());
        assert_eq!(Vec::from_iter(list.iter().copied()), model);
    }
}

#[test]
fn test_from_elem_then_drain() {
    let counting = Counting::default();
    let list = List::from_elem_in(&5, 3, counting.clone()).unwrap();
    assert_eq!(list.len(), 3);
    assert!(list.iter().all(|x| *x == 5));

    let mut list = list;
    assert_eq!(list.pop_back(), Some(5));
    assert_eq!(list.pop_back(), Some(5));
    assert_eq!(list.pop_back(), Some(5));
    assert!(list.is_empty());
    // Draining released every node and the anchor with the last one.
    assert_eq!(counting.live(), 0);
}

#[test]
fn test_iterator_reaches_the_end_and_steps_back() {
    let list = List::try_from_iter([10, 20, 30]).unwrap();

    let mut iter = list.iter();
    for _ in 0..list.len() {
        assert!(iter.next().is_some());
    }
    assert_eq!(iter.next(), None);

    let mut from_end = list.iter();
    assert_eq!(from_end.next_back(), Some(&30));
}

#[test]
fn test_clone_is_independent() {
    let stats = TrackedStats::new();
    let mut list = List::new();
    for value in [1, 2, 3] {
        list.push_back(Tracked::new(value, &stats)).unwrap();
    }

    let mut copy = list.try_clone().unwrap();
    assert_eq!(copy, list);

    copy.push_back(Tracked::new(4, &stats)).unwrap();
    if let Some(front) = copy.front_mut() {
        front.value = 99;
    }

    assert_eq!(list.len(), 3);
    assert_eq!(copy.len(), 4);
    assert_eq!(list.front().map(|t| t.value), Some(1));
    assert_eq!(copy.front().map(|t| t.value), Some(99));

    drop(copy);
    drop(list);
    assert_eq!(stats.live(), 0);
}

#[test]
fn test_clone_from_any_relative_length() {
    let cases: &[(&[i32], &[i32])] = &[
        (&[7, 8, 9], &[1, 2]),    // longer target
        (&[7], &[1, 2, 3]),       // shorter target
        (&[7, 8], &[1, 2]),       // equal lengths
        (&[], &[1, 2]),           // empty target
        (&[7, 8], &[]),           // empty source
    ];
    for (target, source) in cases {
        let mut target = List::try_from_iter(target.iter().copied()).unwrap();
        let source = List::try_from_iter(source.iter().copied()).unwrap();
        target.try_clone_from(&source).unwrap();
        assert_eq!(target, source);
        assert_eq!(target.len(), source.len());
    }
}

#[test]
fn test_construction_failure_unwinds_everything() {
    let counting = Counting::default();
    let stats = TrackedStats::new();
    let proto = Tracked::new(5, &stats);

    stats.allow_clones(2);
    assert!(List::from_elem_in(&proto, 5, counting.clone()).is_err());

    // Only the prototype value survives; every node and the anchor are
    // gone.
    assert_eq!(stats.live(), 1);
    assert_eq!(counting.live(), 0);
}

#[test]
fn test_allocation_failure_leaves_consistent_state() {
    let budget = Budget::new(0);
    let mut list = List::new_in(budget.clone());
    assert_eq!(list.push_back(1), Err(AllocError));
    assert!(list.is_empty());
    assert_eq!(budget.live(), 0);

    // Anchor plus two nodes fit; the third element does not.
    budget.refill(3);
    assert_eq!(list.try_extend([1, 2, 3]), Err(AllocError));
    assert_eq!(Vec::from_iter(list.iter().copied()), vec![1, 2]);
    assert_eq!(budget.live(), 3);

    drop(list);
    assert_eq!(budget.live(), 0);
}

#[test]
fn test_into_iter_consumes_in_order() {
    let list = List::try_from_iter([1, 2, 3]).unwrap();
    let collected: Vec<i32> = list.into_iter().collect();
    assert_eq!(collected, vec![1, 2, 3]);
}

#[test]
fn test_default_valued_construction() {
    let mut list: List<u64> = List::from_default(3).unwrap();
    assert_eq!(Vec::from_iter(list.iter().copied()), vec![0, 0, 0]);

    list.push_default().unwrap();
    assert_eq!(list.len(), 4);
    assert_eq!(list.back(), Some(&0));
}
