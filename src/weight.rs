/*!
# Edge Weights

Weights are non-negative integers `Weight = u64`. A weight of `0` is a perfectly valid edge weight:
absence of an edge is encoded separately. In the matrix, every cell is an `Option<OptionalWeight>`
where `OptionalWeight` reserves `Weight::MAX` as its niche, so a cell costs exactly 8 bytes and
`Weight::MAX` itself can never be stored as an edge weight.
*/

use crate::node::OptionalU64;

/// Non-negative edge weight
pub type Weight = u64;

/// Weight-Value reserved to mark an absent edge; it can never be stored
pub const INVALID_WEIGHT: Weight = Weight::MAX;

/// Compact present-weight used in matrix cells; `Option<OptionalWeight>` has the size of a `Weight`
pub type OptionalWeight = OptionalU64;

/// Returns *true* if `w` can be stored as the weight of an edge
pub const fn is_valid_weight(w: Weight) -> bool {
    w != INVALID_WEIGHT
}

/// Extends a (possibly infinite) distance by an edge of weight `w`.
/// An overflowing sum is treated as infinite, i.e. `None`.
pub fn extend_distance(dist: Option<Weight>, w: Weight) -> Option<Weight> {
    dist?.checked_add(w).filter(|&d| is_valid_weight(d))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn optional_weight_niche() {
        assert_eq!(
            std::mem::size_of::<Option<OptionalWeight>>(),
            std::mem::size_of::<Weight>()
        );
        assert_eq!(OptionalWeight::new(0).map(|w| w.get()), Some(0));
        assert_eq!(OptionalWeight::new(INVALID_WEIGHT), None);
    }

    #[test]
    fn distance_extension_saturates_to_infinity() {
        assert_eq!(extend_distance(Some(3), 4), Some(7));
        assert_eq!(extend_distance(None, 4), None);
        assert_eq!(extend_distance(Some(Weight::MAX - 1), 1), None);
        assert_eq!(extend_distance(Some(Weight::MAX - 1), 2), None);
        assert_eq!(extend_distance(Some(Weight::MAX - 2), 1), Some(Weight::MAX - 1));
    }
}
