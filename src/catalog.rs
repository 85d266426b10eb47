//! The fixed quote catalog and random selection.
//!
//! DESIGN
//! ======
//! The catalog is the single source of truth for every consumer (generator
//! card, saved list, membership checks). Entries are ordered; list views
//! preserve catalog order regardless of when a quote was saved.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

/// One displayable quote.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Quote {
    pub id: &'static str,
    pub text: &'static str,
    pub author: &'static str,
}

/// The full catalog, in display order.
pub const QUOTES: &[Quote] = &[
    Quote {
        id: "1",
        text: "The only way to do great work is to love what you do.",
        author: "Steve Jobs",
    },
    Quote {
        id: "2",
        text: "Life is what happens when you're busy making other plans.",
        author: "John Lennon",
    },
    Quote {
        id: "3",
        text: "The future belongs to those who believe in the beauty of their dreams.",
        author: "Eleanor Roosevelt",
    },
    Quote {
        id: "4",
        text: "In the end, it's not the years in your life that count. It's the life in your years.",
        author: "Abraham Lincoln",
    },
    Quote {
        id: "5",
        text: "The purpose of our lives is to be happy.",
        author: "Dalai Lama",
    },
    Quote {
        id: "6",
        text: "Get busy living or get busy dying.",
        author: "Stephen King",
    },
    Quote {
        id: "7",
        text: "You only live once, but if you do it right, once is enough.",
        author: "Mae West",
    },
    Quote {
        id: "8",
        text: "Many of life's failures are people who did not realize how close they were to success when they gave up.",
        author: "Thomas A. Edison",
    },
    Quote {
        id: "9",
        text: "The mind is everything. What you think you become.",
        author: "Buddha",
    },
    Quote {
        id: "10",
        text: "The best time to plant a tree was 20 years ago. The second best time is now.",
        author: "Chinese Proverb",
    },
];

/// All catalog entries, in catalog order.
#[must_use]
pub fn all() -> &'static [Quote] {
    QUOTES
}

/// Look up a catalog entry by id.
#[must_use]
pub fn by_id(id: &str) -> Option<&'static Quote> {
    QUOTES.iter().find(|q| q.id == id)
}

/// Pick a uniformly random entry whose id differs from `exclude_id`.
///
/// `random_index` maps a candidate count `n` to an index in `0..n`; the
/// browser caller passes [`js_random_index`], tests inject a deterministic
/// source. When excluding leaves no candidates (one-entry catalog) the
/// sole entry is returned rather than sampling an empty pool.
#[must_use]
pub fn pick_random(exclude_id: Option<&str>, random_index: impl FnOnce(usize) -> usize) -> &'static Quote {
    let candidates: Vec<&'static Quote> = QUOTES
        .iter()
        .filter(|q| exclude_id != Some(q.id))
        .collect();
    match candidates.len() {
        0 => &QUOTES[0],
        n => candidates[random_index(n) % n],
    }
}

/// Random index in `0..len` from `Math.random`.
#[cfg(feature = "hydrate")]
#[must_use]
pub fn js_random_index(len: usize) -> usize {
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_precision_loss,
        clippy::cast_sign_loss
    )]
    let index = (js_sys::Math::random() * len as f64).floor() as usize;
    index.min(len.saturating_sub(1))
}
