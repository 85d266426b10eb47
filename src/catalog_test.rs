use super::*;

// =============================================================
// Catalog integrity
// =============================================================

#[test]
fn catalog_has_ten_entries() {
    assert_eq!(QUOTES.len(), 10);
}

#[test]
fn catalog_ids_are_unique() {
    let mut ids: Vec<&str> = QUOTES.iter().map(|q| q.id).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), QUOTES.len());
}

#[test]
fn catalog_entries_are_non_empty() {
    for quote in QUOTES {
        assert!(!quote.id.is_empty());
        assert!(!quote.text.is_empty());
        assert!(!quote.author.is_empty());
    }
}

// =============================================================
// by_id
// =============================================================

#[test]
fn by_id_finds_existing_entry() {
    let quote = by_id("3").unwrap();
    assert_eq!(quote.author, "Eleanor Roosevelt");
}

#[test]
fn by_id_returns_none_for_unknown_id() {
    assert!(by_id("99").is_none());
}

// =============================================================
// pick_random
// =============================================================

#[test]
fn pick_random_never_returns_excluded_id() {
    // Every possible index over the candidate pool must avoid the excluded id.
    for excluded in QUOTES {
        for i in 0..QUOTES.len() {
            let picked = pick_random(Some(excluded.id), |_| i);
            assert_ne!(picked.id, excluded.id);
        }
    }
}

#[test]
fn pick_random_without_exclusion_can_return_any_entry() {
    for (i, quote) in QUOTES.iter().enumerate() {
        let picked = pick_random(None, |_| i);
        assert_eq!(picked.id, quote.id);
    }
}

#[test]
fn pick_random_samples_from_reduced_pool_when_excluding() {
    let mut seen_len = 0;
    let _ = pick_random(Some("1"), |n| {
        seen_len = n;
        0
    });
    assert_eq!(seen_len, QUOTES.len() - 1);
}

#[test]
fn pick_random_clamps_out_of_range_index() {
    let picked = pick_random(Some("1"), |n| n + 7);
    assert_ne!(picked.id, "1");
}

#[test]
fn pick_random_ignores_unknown_excluded_id() {
    let mut seen_len = 0;
    let _ = pick_random(Some("99"), |n| {
        seen_len = n;
        0
    });
    assert_eq!(seen_len, QUOTES.len());
}
