use serde::{Deserialize, Serialize};

use super::types::BodyId;

/// Unordered association between two distinct bodies.
///
/// `first` is always the earlier-inserted body, so `first < second`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BodyPair {
    pub first: BodyId,
    pub second: BodyId,
}

impl BodyPair {
    /// Orders the two ids; returns `None` for a self pair.
    pub fn new(a: BodyId, b: BodyId) -> Option<Self> {
        match a.cmp(&b) {
            std::cmp::Ordering::Less => Some(Self { first: a, second: b }),
            std::cmp::Ordering::Greater => Some(Self { first: b, second: a }),
            std::cmp::Ordering::Equal => None,
        }
    }
}

/// Incrementally grown set of unique body pairs.
#[derive(Debug, Clone, Default)]
pub struct PairSet {
    pairs: Vec<BodyPair>,
}

impl PairSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of unique pairs among `body_count` bodies.
    pub const fn expected_len(body_count: usize) -> usize {
        body_count * body_count.saturating_sub(1) / 2
    }

    /// Pairs a newly inserted body with every body that came before it.
    ///
    /// Bodies are indexed by insertion order, so the existing ones are exactly
    /// the indices below `new_body`.
    pub fn register(&mut self, new_body: BodyId) {
        let existing = new_body.index();
        self.pairs.reserve(existing);
        self.pairs.extend(
            (0..existing).filter_map(|index| BodyPair::new(BodyId::from_index(index), new_body)),
        );
    }

    pub fn as_slice(&self) -> &[BodyPair] {
        &self.pairs
    }

    pub fn iter(&self) -> std::slice::Iter<'_, BodyPair> {
        self.pairs.iter()
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

/// Borrows two distinct elements of a slice mutably at once.
pub(crate) fn get2_mut<T>(items: &mut [T], a: usize, b: usize) -> Option<(&mut T, &mut T)> {
    if a == b || a >= items.len() || b >= items.len() {
        return None;
    }

    let (low, high, flipped) = if a < b { (a, b, false) } else { (b, a, true) };
    let (left, right) = items.split_at_mut(high);
    let first = &mut left[low];
    let second = &mut right[0];

    if flipped {
        Some((second, first))
    } else {
        Some((first, second))
    }
}
