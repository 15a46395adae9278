use super::*;

#[test]
fn second_page_of_twelve_holds_the_last_two() {
    let items: Vec<u32> = (1..=12).collect();
    let (visible, window) = paginate(&items, 2, 10);

    assert_eq!(visible, &[11, 12]);
    assert_eq!(window.page_count, 2);
    assert!(window.has_previous);
    assert!(!window.has_next);
}

#[test]
fn windows_reassemble_the_sequence() {
    for len in [0usize, 1, 9, 10, 11, 25, 30] {
        for size in [1usize, 3, 10] {
            let items: Vec<usize> = (0..len).collect();
            let count = page_count(len, size);
            let mut joined = Vec::new();
            for page in 1..=count {
                let (visible, _) = paginate(&items, page, size);
                assert!(visible.len() <= size);
                assert!(!visible.is_empty());
                joined.extend_from_slice(visible);
            }
            assert_eq!(joined, items, "len={len} size={size}");
        }
    }
}

#[test]
fn button_states_follow_page_bounds() {
    let first = window(1, 25, 10);
    assert!(!first.has_previous);
    assert!(first.has_next);

    let last = window(3, 25, 10);
    assert!(last.has_previous);
    assert!(!last.has_next);
}

#[test]
fn empty_sequence_disables_both_buttons() {
    let items: Vec<u8> = Vec::new();
    let (visible, window) = paginate(&items, 1, 10);

    assert!(visible.is_empty());
    assert_eq!(window.page_count, 0);
    assert!(!window.has_previous);
    assert!(!window.has_next);
}

#[test]
fn page_past_the_end_is_empty_not_a_panic() {
    let items: Vec<u8> = vec![1, 2, 3];
    let (visible, window) = paginate(&items, 7, 10);

    assert!(visible.is_empty());
    assert!(window.has_previous);
    assert!(!window.has_next);
}

#[test]
fn page_links_collapse_long_ranges() {
    assert_eq!(page_links(0, 1), vec![]);
    assert_eq!(
        page_links(5, 1),
        vec![Some(1), Some(2), Some(3), Some(4), Some(5)]
    );
    assert_eq!(
        page_links(20, 10),
        vec![
            Some(1),
            Some(2),
            None,
            Some(8),
            Some(9),
            Some(10),
            Some(11),
            Some(12),
            None,
            Some(19),
            Some(20),
        ]
    );
}
