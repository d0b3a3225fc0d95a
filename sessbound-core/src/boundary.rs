//! Boundary position sets with tolerance queries

/// Sorted, deduplicated message indices at which a session starts
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BoundarySet {
    positions: Vec<usize>,
}

impl BoundarySet {
    /// Collect the indices of all `1` labels
    pub fn from_labels(labels: &[u8]) -> Self {
        Self {
            positions: labels
                .iter()
                .enumerate()
                .filter(|(_, label)| **label == 1)
                .map(|(i, _)| i)
                .collect(),
        }
    }

    /// Build from arbitrary positions
    pub fn from_positions(mut positions: Vec<usize>) -> Self {
        positions.sort_unstable();
        positions.dedup();
        Self { positions }
    }

    /// Boundary indices in ascending order
    pub fn positions(&self) -> &[usize] {
        &self.positions
    }

    /// Number of boundaries
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Whether there are no boundaries
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Whether `index` is a boundary
    pub fn contains(&self, index: usize) -> bool {
        self.positions.binary_search(&index).is_ok()
    }

    /// Distance from `index` to the closest boundary, `None` when empty
    pub fn nearest_distance(&self, index: usize) -> Option<usize> {
        let split = self.positions.partition_point(|&p| p < index);
        let after = self.positions.get(split).map(|&p| p - index);
        let before = split
            .checked_sub(1)
            .and_then(|i| self.positions.get(i))
            .map(|&p| index - p);

        match (before, after) {
            (Some(b), Some(a)) => Some(b.min(a)),
            (b, a) => b.or(a),
        }
    }

    /// Whether some boundary lies within `k` positions of `index`
    pub fn has_within(&self, index: usize, k: usize) -> bool {
        self.nearest_distance(index).is_some_and(|d| d <= k)
    }

    /// For every boundary in `self`, the distance to the nearest boundary in `other`
    ///
    /// Empty when `other` has no boundaries.
    pub fn distances_to(&self, other: &BoundarySet) -> Vec<usize> {
        self.positions
            .iter()
            .filter_map(|&p| other.nearest_distance(p))
            .collect()
    }

    /// Number of boundaries in `self` with a boundary of `other` within `k`
    pub fn matched_within(&self, other: &BoundarySet, k: usize) -> usize {
        self.positions
            .iter()
            .filter(|&&p| other.has_within(p, k))
            .count()
    }

    /// Number of boundaries in the half-open range `(start, end]`
    pub fn count_in(&self, start: usize, end: usize) -> usize {
        let lo = self.positions.partition_point(|&p| p <= start);
        let hi = self.positions.partition_point(|&p| p <= end);
        hi.saturating_sub(lo)
    }

    /// Iterate over boundary indices
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.positions.iter().copied()
    }
}

impl From<BoundarySet> for Vec<usize> {
    fn from(set: BoundarySet) -> Self {
        set.positions
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_labels() {
        let set = BoundarySet::from_labels(&[1, 0, 0, 1, 0, 1, 0, 0]);
        assert_eq!(set.positions(), &[0, 3, 5]);
        assert_eq!(set.len(), 3);
        assert!(set.contains(3));
        assert!(!set.contains(4));
    }

    #[test]
    fn test_from_positions_sorts_and_dedups() {
        let set = BoundarySet::from_positions(vec![9, 2, 9, 4]);
        assert_eq!(set.positions(), &[2, 4, 9]);
    }

    #[test]
    fn test_nearest_distance() {
        let set = BoundarySet::from_positions(vec![2, 10]);
        assert_eq!(set.nearest_distance(0), Some(2));
        assert_eq!(set.nearest_distance(2), Some(0));
        assert_eq!(set.nearest_distance(5), Some(3));
        assert_eq!(set.nearest_distance(7), Some(3));
        assert_eq!(set.nearest_distance(15), Some(5));
    }

    #[test]
    fn test_nearest_distance_empty() {
        let set = BoundarySet::default();
        assert_eq!(set.nearest_distance(3), None);
        assert!(!set.has_within(3, 100));
    }

    #[test]
    fn test_has_within() {
        let set = BoundarySet::from_positions(vec![4]);
        assert!(set.has_within(3, 1));
        assert!(!set.has_within(2, 1));
        assert!(set.has_within(4, 0));
    }

    #[test]
    fn test_distances_to() {
        let predicted = BoundarySet::from_positions(vec![0, 3, 5]);
        let actual = BoundarySet::from_positions(vec![0, 4, 5]);
        assert_eq!(predicted.distances_to(&actual), vec![0, 1, 0]);
        assert!(predicted.distances_to(&BoundarySet::default()).is_empty());
    }

    #[test]
    fn test_count_in_half_open_range() {
        let set = BoundarySet::from_positions(vec![1, 3, 5, 7]);
        assert_eq!(set.count_in(1, 5), 2);
        assert_eq!(set.count_in(0, 1), 1);
        assert_eq!(set.count_in(7, 20), 0);
    }
}
