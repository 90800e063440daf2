use rustc_hash::FxHashMap;

use crate::rect::{Rectangle, Shape};

/// An unordered multiset of rectangle shapes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShapeTally {
    counts: FxHashMap<Shape, usize>,
}

impl ShapeTally {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, shape: Shape) {
        *self.counts.entry(shape).or_insert(0) += 1;
    }

    pub fn count(&self, shape: Shape) -> usize {
        self.counts.get(&shape).copied().unwrap_or(0)
    }

    /// Total number of rectangles tallied.
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// `(shape, count)` pairs, smallest shape first.
    pub fn sorted(&self) -> Vec<(Shape, usize)> {
        let mut out: Vec<(Shape, usize)> = self.counts.iter().map(|(&s, &n)| (s, n)).collect();
        out.sort_unstable();
        out
    }
}

impl Extend<Shape> for ShapeTally {
    fn extend<I: IntoIterator<Item = Shape>>(&mut self, iter: I) {
        for shape in iter {
            self.add(shape);
        }
    }
}

impl FromIterator<Shape> for ShapeTally {
    fn from_iter<I: IntoIterator<Item = Shape>>(iter: I) -> Self {
        let mut tally = Self::new();
        tally.extend(iter);
        tally
    }
}

impl FromIterator<Rectangle> for ShapeTally {
    fn from_iter<I: IntoIterator<Item = Rectangle>>(iter: I) -> Self {
        iter.into_iter().map(|r| r.shape()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_repeated_shapes() {
        let tally: ShapeTally = [Shape::new(3, 4), Shape::new(2, 2), Shape::new(3, 4)]
            .into_iter()
            .collect();
        assert_eq!(tally.count(Shape::new(3, 4)), 2);
        assert_eq!(tally.count(Shape::new(9, 9)), 0);
        assert_eq!(tally.total(), 3);
        assert_eq!(
            tally.sorted(),
            vec![(Shape::new(2, 2), 1), (Shape::new(3, 4), 2)]
        );
    }

    #[test]
    fn order_of_insertion_does_not_matter() {
        let a: ShapeTally = [Shape::new(2, 5), Shape::new(4, 3)].into_iter().collect();
        let b: ShapeTally = [Shape::new(4, 3), Shape::new(2, 5)].into_iter().collect();
        assert_eq!(a, b);
    }
}
