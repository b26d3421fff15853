//! Cardinal directions and second-order (indirect) lookups.

use std::fmt;

/// The four cardinal directions of a cell, in neighbour-slot order.
///
/// A direction also names the face edge it crosses: a cell on its face's
/// top row reaches its `Top` neighbour across the face's top edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Direction {
    /// Toward row 0.
    Top,
    /// Toward the last column.
    Right,
    /// Toward the last row.
    Bottom,
    /// Toward column 0.
    Left,
}

impl Direction {
    /// All directions in slot order.
    pub const ALL: [Direction; 4] = [
        Direction::Top,
        Direction::Right,
        Direction::Bottom,
        Direction::Left,
    ];

    /// Neighbour-slot index: `Top` 0, `Right` 1, `Bottom` 2, `Left` 3.
    pub const fn index(self) -> usize {
        match self {
            Direction::Top => 0,
            Direction::Right => 1,
            Direction::Bottom => 2,
            Direction::Left => 3,
        }
    }

    /// The reverse direction on the same face.
    pub const fn opposite(self) -> Direction {
        match self {
            Direction::Top => Direction::Bottom,
            Direction::Right => Direction::Left,
            Direction::Bottom => Direction::Top,
            Direction::Left => Direction::Right,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::Top => "top",
            Direction::Right => "right",
            Direction::Bottom => "bottom",
            Direction::Left => "left",
        };
        write!(f, "{name}")
    }
}

/// The eight second-order neighbours, each the composition of two direct
/// hops.
///
/// The `Far*` variants step twice in one direction. The corner variants
/// pair two perpendicular steps: `TopRight` is the right neighbour of the
/// top neighbour, `BottomRight` the bottom neighbour of the right
/// neighbour, and so on. Slot order puts the four straight compositions
/// first, then the four corners.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Indirect {
    /// Two steps up: top of top.
    FarTop,
    /// Two steps right: right of right.
    FarRight,
    /// Two steps down: bottom of bottom.
    FarBottom,
    /// Two steps left: left of left.
    FarLeft,
    /// North-east corner: right of top.
    TopRight,
    /// South-east corner: bottom of right.
    BottomRight,
    /// South-west corner: left of bottom.
    BottomLeft,
    /// North-west corner: top of left.
    TopLeft,
}

impl Indirect {
    /// All indirect lookups in slot order.
    pub const ALL: [Indirect; 8] = [
        Indirect::FarTop,
        Indirect::FarRight,
        Indirect::FarBottom,
        Indirect::FarLeft,
        Indirect::TopRight,
        Indirect::BottomRight,
        Indirect::BottomLeft,
        Indirect::TopLeft,
    ];

    /// Slot index, matching the order of [`Indirect::ALL`].
    pub const fn index(self) -> usize {
        match self {
            Indirect::FarTop => 0,
            Indirect::FarRight => 1,
            Indirect::FarBottom => 2,
            Indirect::FarLeft => 3,
            Indirect::TopRight => 4,
            Indirect::BottomRight => 5,
            Indirect::BottomLeft => 6,
            Indirect::TopLeft => 7,
        }
    }

    /// The two direct hops composing this lookup, in hop order.
    pub const fn hops(self) -> (Direction, Direction) {
        match self {
            Indirect::FarTop => (Direction::Top, Direction::Top),
            Indirect::FarRight => (Direction::Right, Direction::Right),
            Indirect::FarBottom => (Direction::Bottom, Direction::Bottom),
            Indirect::FarLeft => (Direction::Left, Direction::Left),
            Indirect::TopRight => (Direction::Top, Direction::Right),
            Indirect::BottomRight => (Direction::Right, Direction::Bottom),
            Indirect::BottomLeft => (Direction::Bottom, Direction::Left),
            Indirect::TopLeft => (Direction::Left, Direction::Top),
        }
    }
}

impl fmt::Display for Indirect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Indirect::FarTop => "far_top",
            Indirect::FarRight => "far_right",
            Indirect::FarBottom => "far_bottom",
            Indirect::FarLeft => "far_left",
            Indirect::TopRight => "top_right",
            Indirect::BottomRight => "bottom_right",
            Indirect::BottomLeft => "bottom_left",
            Indirect::TopLeft => "top_left",
        };
        write!(f, "{name}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direction_indices_match_all_order() {
        for (i, direction) in Direction::ALL.into_iter().enumerate() {
            assert_eq!(direction.index(), i);
        }
    }

    #[test]
    fn opposite_is_an_involution() {
        for direction in Direction::ALL {
            assert_eq!(direction.opposite().opposite(), direction);
            assert_ne!(direction.opposite(), direction);
        }
    }

    #[test]
    fn indirect_indices_match_all_order() {
        for (i, indirect) in Indirect::ALL.into_iter().enumerate() {
            assert_eq!(indirect.index(), i);
        }
    }

    #[test]
    fn straight_compositions_repeat_one_direction() {
        for indirect in [
            Indirect::FarTop,
            Indirect::FarRight,
            Indirect::FarBottom,
            Indirect::FarLeft,
        ] {
            let (first, second) = indirect.hops();
            assert_eq!(first, second);
        }
    }

    #[test]
    fn corner_compositions_use_perpendicular_hops() {
        for indirect in [
            Indirect::TopRight,
            Indirect::BottomRight,
            Indirect::BottomLeft,
            Indirect::TopLeft,
        ] {
            let (first, second) = indirect.hops();
            assert_ne!(first, second);
            assert_ne!(first.opposite(), second);
        }
    }
}
