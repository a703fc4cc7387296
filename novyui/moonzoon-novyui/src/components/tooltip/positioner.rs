use super::placement::{EdgeAlignment, Placement, PlacementFamily, Spacing};
use super::state::{BoundingBox, Point, Size};

/// Places a floating element next to an anchor.
///
/// Implementations return the floating element's top-left corner in the same
/// coordinate space as `anchor` (viewport coordinates for `position: fixed`).
pub trait FloatingPositioner {
    fn position(&self, anchor: BoundingBox, floating: Size, placement: Placement, spacing: Spacing) -> Point;
}

/// Attaches to the requested anchor edge, aligned to its start, center or end.
#[derive(Clone, Copy, Debug, Default)]
pub struct EdgePositioner;

impl FloatingPositioner for EdgePositioner {
    fn position(&self, anchor: BoundingBox, floating: Size, placement: Placement, spacing: Spacing) -> Point {
        let align_x = || match placement.alignment() {
            EdgeAlignment::Start => anchor.x,
            EdgeAlignment::Center => anchor.center_x() - floating.width / 2.0,
            EdgeAlignment::End => anchor.right() - floating.width,
        };
        let align_y = || match placement.alignment() {
            EdgeAlignment::Start => anchor.y,
            EdgeAlignment::Center => anchor.center_y() - floating.height / 2.0,
            EdgeAlignment::End => anchor.bottom() - floating.height,
        };

        match placement.family() {
            PlacementFamily::Top => Point {
                x: align_x(),
                y: anchor.y - floating.height - spacing.y,
            },
            PlacementFamily::Bottom => Point {
                x: align_x(),
                y: anchor.bottom() + spacing.y,
            },
            PlacementFamily::Left => Point {
                x: anchor.x - floating.width - spacing.x,
                y: align_y(),
            },
            PlacementFamily::Right => Point {
                x: anchor.right() + spacing.x,
                y: align_y(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ANCHOR: BoundingBox = BoundingBox { x: 100.0, y: 50.0, width: 40.0, height: 20.0 };
    const FLOATING: Size = Size { width: 200.0, height: 30.0 };

    fn place(placement: Placement) -> Point {
        EdgePositioner.position(ANCHOR, FLOATING, placement, placement.spacing())
    }

    #[test]
    fn test_bottom_is_centered_below_with_gap() {
        assert_eq!(place(Placement::Bottom), Point { x: 20.0, y: 78.0 });
    }

    #[test]
    fn test_top_start_and_end() {
        assert_eq!(place(Placement::TopStart), Point { x: 100.0, y: 12.0 });
        assert_eq!(place(Placement::TopEnd), Point { x: -60.0, y: 12.0 });
    }

    #[test]
    fn test_side_placements_use_horizontal_gap() {
        assert_eq!(place(Placement::Left), Point { x: -108.0, y: 45.0 });
        assert_eq!(place(Placement::RightStart), Point { x: 148.0, y: 50.0 });
        assert_eq!(place(Placement::RightEnd), Point { x: 148.0, y: 40.0 });
    }

    #[test]
    fn test_centered_tooltip_needs_no_arrow_offset() {
        use super::super::state::TooltipState;

        let origin = place(Placement::Bottom);
        let mut state = TooltipState::new(Placement::Bottom);
        state.position_arrow(Some(ANCHOR), Some(BoundingBox::at(origin, FLOATING)));
        assert_eq!(state.arrow_offset, Some(0.0));

        let origin = place(Placement::BottomStart);
        state.position_arrow(Some(ANCHOR), Some(BoundingBox::at(origin, FLOATING)));
        assert_eq!(state.arrow_offset, Some(-80.0));
    }
}
