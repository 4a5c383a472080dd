/// Four-sided pixel values.
///
/// Used for edge margins, per-item padding and for the offsets computed for an
/// item. Constructors that take several values follow CSS shorthand order
/// (top, right, bottom, left) only where noted; [`Insets::new`] takes
/// left, top, right, bottom like a rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Insets {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Insets {
    pub const ZERO: Self = Self {
        left: 0,
        top: 0,
        right: 0,
        bottom: 0,
    };

    pub fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    pub fn all(value: i32) -> Self {
        Self::new(value, value, value, value)
    }

    pub fn vertical_horizontal(vertical: i32, horizontal: i32) -> Self {
        Self {
            top: vertical,
            bottom: vertical,
            left: horizontal,
            right: horizontal,
        }
    }

    /// Build from CSS shorthand order: top, right, bottom, left.
    pub fn from_css(top: i32, right: i32, bottom: i32, left: i32) -> Self {
        Self::new(left, top, right, bottom)
    }

    pub fn is_all_zeros(&self) -> bool {
        self.left == 0 && self.top == 0 && self.right == 0 && self.bottom == 0
    }

    /// Swap the left and right sides.
    pub fn mirrored_horizontally(self) -> Self {
        Self {
            left: self.right,
            right: self.left,
            ..self
        }
    }

    /// Returns the first negative side as `(side name, value)`.
    pub(crate) fn first_negative(&self) -> Option<(&'static str, i32)> {
        [
            ("left", self.left),
            ("top", self.top),
            ("right", self.right),
            ("bottom", self.bottom),
        ]
        .into_iter()
        .find(|(_, value)| *value < 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn css_order_maps_to_sides() {
        let insets = Insets::from_css(1, 2, 3, 4);
        assert_eq!(insets, Insets::new(4, 1, 2, 3));
    }

    #[test]
    fn mirroring_swaps_left_and_right() {
        let insets = Insets::new(1, 2, 3, 4);
        assert_eq!(insets.mirrored_horizontally(), Insets::new(3, 2, 1, 4));
    }

    #[test]
    fn first_negative_reports_side() {
        assert_eq!(Insets::new(0, -1, -2, 0).first_negative(), Some(("top", -1)));
        assert_eq!(Insets::all(3).first_negative(), None);
    }
}
