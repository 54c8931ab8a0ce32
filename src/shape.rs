//! Classification of a node by which of its slots are occupied.

/// The four reachable occupancy states of a binary node. Exactly one applies at any time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    /// Both slots empty.
    Leaf,
    /// Left occupied, right empty.
    SimpleLeft,
    /// Left empty, right occupied.
    SimpleRight,
    /// Both slots occupied.
    Double,
}

impl Shape {
    /// Classifies a node from whether its left and right slots are occupied.
    ///
    /// # Examples
    ///
    /// ```
    /// use binary_node::Shape;
    ///
    /// assert_eq!(Shape::from_occupancy(false, false), Shape::Leaf);
    /// assert_eq!(Shape::from_occupancy(true, false), Shape::SimpleLeft);
    /// assert_eq!(Shape::from_occupancy(false, true), Shape::SimpleRight);
    /// assert_eq!(Shape::from_occupancy(true, true), Shape::Double);
    /// ```
    pub fn from_occupancy(left: bool, right: bool) -> Self {
        match (left, right) {
            (false, false) => Self::Leaf,
            (true, false) => Self::SimpleLeft,
            (false, true) => Self::SimpleRight,
            (true, true) => Self::Double,
        }
    }

    /// `true` when no further child can be inserted.
    pub fn is_full(self) -> bool {
        self == Self::Double
    }

    /// How many slots are occupied.
    pub fn child_count(self) -> usize {
        match self {
            Self::Leaf => 0,
            Self::SimpleLeft | Self::SimpleRight => 1,
            Self::Double => 2,
        }
    }
}
