// Tooltip placement, spacing and tail geometry

/// Distance between anchor and tooltip, along the attaching axis
pub const TOOLTIP_GAP: f64 = 8.0;

/// Tail wedge size before rotation
pub const TAIL_WIDTH: f64 = 34.0;
pub const TAIL_HEIGHT: f64 = 8.0;

/// Teardrop outline of the tail, tip pointing up (towards the anchor of a
/// bottom-placed tooltip).
pub const TAIL_CLIP_PATH: &str =
    "path('M0 8C6.5 8 10.5 6.5 13.5 3.5L15.5 1.2C16.3 0.3 17.7 0.3 18.5 1.2L20.5 3.5C23.5 6.5 27.5 8 34 8Z')";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Placement {
    Top,
    TopStart,
    TopEnd,
    #[default]
    Bottom,
    BottomStart,
    BottomEnd,
    Left,
    LeftStart,
    LeftEnd,
    Right,
    RightStart,
    RightEnd,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlacementFamily {
    Top,
    Bottom,
    Left,
    Right,
}

/// Alignment along the anchor edge the tooltip attaches to
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EdgeAlignment {
    Start,
    Center,
    End,
}

impl Placement {
    pub const ALL: [Placement; 12] = [
        Placement::Top,
        Placement::TopStart,
        Placement::TopEnd,
        Placement::Bottom,
        Placement::BottomStart,
        Placement::BottomEnd,
        Placement::Left,
        Placement::LeftStart,
        Placement::LeftEnd,
        Placement::Right,
        Placement::RightStart,
        Placement::RightEnd,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Placement::Top => "top",
            Placement::TopStart => "top-start",
            Placement::TopEnd => "top-end",
            Placement::Bottom => "bottom",
            Placement::BottomStart => "bottom-start",
            Placement::BottomEnd => "bottom-end",
            Placement::Left => "left",
            Placement::LeftStart => "left-start",
            Placement::LeftEnd => "left-end",
            Placement::Right => "right",
            Placement::RightStart => "right-start",
            Placement::RightEnd => "right-end",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|placement| placement.name() == name)
    }

    pub fn family(self) -> PlacementFamily {
        match self {
            Placement::Top | Placement::TopStart | Placement::TopEnd => PlacementFamily::Top,
            Placement::Bottom | Placement::BottomStart | Placement::BottomEnd => PlacementFamily::Bottom,
            Placement::Left | Placement::LeftStart | Placement::LeftEnd => PlacementFamily::Left,
            Placement::Right | Placement::RightStart | Placement::RightEnd => PlacementFamily::Right,
        }
    }

    pub fn alignment(self) -> EdgeAlignment {
        match self {
            Placement::TopStart | Placement::BottomStart | Placement::LeftStart | Placement::RightStart => {
                EdgeAlignment::Start
            }
            Placement::TopEnd | Placement::BottomEnd | Placement::LeftEnd | Placement::RightEnd => {
                EdgeAlignment::End
            }
            _ => EdgeAlignment::Center,
        }
    }

    pub fn spacing(self) -> Spacing {
        Spacing::for_placement_name(self.name())
    }

    pub fn tail(self) -> TailPlacement {
        TailPlacement::for_family(self.family())
    }
}

// ===== SPACING =====

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Spacing {
    pub x: f64,
    pub y: f64,
}

impl Spacing {
    /// Gap on the axis perpendicular to the attaching edge, zero on the other.
    /// Names outside the placement set get no gap at all.
    pub fn for_placement_name(name: &str) -> Self {
        if name.starts_with("left") || name.starts_with("right") {
            Spacing { x: TOOLTIP_GAP, y: 0.0 }
        } else if name.starts_with("top") || name.starts_with("bottom") {
            Spacing { x: 0.0, y: TOOLTIP_GAP }
        } else {
            Spacing::default()
        }
    }
}

// ===== TAIL =====

/// Tooltip edge the tail is attached to
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TailEdge {
    Top,
    Bottom,
    Left,
    Right,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TailPlacement {
    pub edge: TailEdge,
    pub rotation_deg: f64,
    /// Offset from the attaching edge, negative values move outside the tooltip
    pub edge_offset: f64,
    /// Whether the anchor-center offset shifts the tail horizontally
    pub follows_arrow_offset: bool,
}

impl TailPlacement {
    fn for_family(family: PlacementFamily) -> Self {
        // A 34x8 wedge rotated a quarter turn about its center spans 8x34, so
        // side tails shift by half the size difference plus one pixel overlap.
        let side_offset = TAIL_HEIGHT / 2.0 - TAIL_WIDTH / 2.0 - 1.0;
        match family {
            PlacementFamily::Top => TailPlacement {
                edge: TailEdge::Bottom,
                rotation_deg: 180.0,
                edge_offset: -(TAIL_HEIGHT - 1.0),
                follows_arrow_offset: true,
            },
            PlacementFamily::Bottom => TailPlacement {
                edge: TailEdge::Top,
                rotation_deg: 0.0,
                edge_offset: -(TAIL_HEIGHT - 1.0),
                follows_arrow_offset: true,
            },
            PlacementFamily::Left => TailPlacement {
                edge: TailEdge::Right,
                rotation_deg: 90.0,
                edge_offset: side_offset,
                follows_arrow_offset: false,
            },
            PlacementFamily::Right => TailPlacement {
                edge: TailEdge::Left,
                rotation_deg: -90.0,
                edge_offset: side_offset,
                follows_arrow_offset: false,
            },
        }
    }

    /// Tail geometry for a raw placement name; unknown names get none.
    pub fn for_placement_name(name: &str) -> Option<Self> {
        Placement::from_name(name).map(Placement::tail)
    }

    /// Absolute-position CSS properties, relative to the tooltip box.
    pub fn position_styles(&self) -> Vec<(&'static str, String)> {
        let offset = format!("{}px", self.edge_offset);
        match self.edge {
            TailEdge::Top => vec![
                ("top", offset),
                ("left", format!("calc(50% - {}px)", TAIL_WIDTH / 2.0)),
            ],
            TailEdge::Bottom => vec![
                ("bottom", offset),
                ("left", format!("calc(50% - {}px)", TAIL_WIDTH / 2.0)),
            ],
            TailEdge::Left => vec![
                ("right", format!("calc(100% + {offset})")),
                ("top", format!("calc(50% - {}px)", TAIL_HEIGHT / 2.0)),
            ],
            TailEdge::Right => vec![
                ("left", format!("calc(100% + {offset})")),
                ("top", format!("calc(50% - {}px)", TAIL_HEIGHT / 2.0)),
            ],
        }
    }

    /// CSS `transform` for the current arrow offset.
    pub fn transform(&self, arrow_offset: Option<f64>) -> String {
        let shift = if self.follows_arrow_offset {
            arrow_offset.unwrap_or(0.0)
        } else {
            0.0
        };
        format!("translateX({shift}px) rotate({}deg)", self.rotation_deg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spacing_axis_selection() {
        assert_eq!(Spacing::for_placement_name("left-start"), Spacing { x: 8.0, y: 0.0 });
        assert_eq!(Spacing::for_placement_name("right"), Spacing { x: 8.0, y: 0.0 });
        assert_eq!(Spacing::for_placement_name("top"), Spacing { x: 0.0, y: 8.0 });
        assert_eq!(Spacing::for_placement_name("bottom-end"), Spacing { x: 0.0, y: 8.0 });
        assert_eq!(Spacing::for_placement_name("unknown"), Spacing { x: 0.0, y: 0.0 });
    }

    #[test]
    fn test_every_placement_has_gap_on_one_axis() {
        for placement in Placement::ALL {
            let spacing = placement.spacing();
            match placement.family() {
                PlacementFamily::Left | PlacementFamily::Right => {
                    assert_eq!(spacing, Spacing { x: TOOLTIP_GAP, y: 0.0 })
                }
                PlacementFamily::Top | PlacementFamily::Bottom => {
                    assert_eq!(spacing, Spacing { x: 0.0, y: TOOLTIP_GAP })
                }
            }
        }
    }

    #[test]
    fn test_names_round_trip() {
        for placement in Placement::ALL {
            assert_eq!(Placement::from_name(placement.name()), Some(placement));
        }
        assert_eq!(Placement::from_name("middle"), None);
        assert_eq!(Placement::default(), Placement::Bottom);
    }

    #[test]
    fn test_alignment() {
        assert_eq!(Placement::TopStart.alignment(), EdgeAlignment::Start);
        assert_eq!(Placement::Left.alignment(), EdgeAlignment::Center);
        assert_eq!(Placement::RightEnd.alignment(), EdgeAlignment::End);
    }

    #[test]
    fn test_tail_per_family() {
        let top = Placement::TopEnd.tail();
        assert_eq!(top.edge, TailEdge::Bottom);
        assert_eq!(top.rotation_deg, 180.0);

        let bottom = Placement::Bottom.tail();
        assert_eq!(bottom.edge, TailEdge::Top);
        assert_eq!(bottom.rotation_deg, 0.0);
        assert_eq!(bottom.edge_offset, -7.0);

        let left = Placement::LeftStart.tail();
        assert_eq!(left.edge, TailEdge::Right);
        assert_eq!(left.rotation_deg, 90.0);

        let right = Placement::Right.tail();
        assert_eq!(right.edge, TailEdge::Left);
        assert_eq!(right.rotation_deg, -90.0);
        assert_eq!(left.edge_offset, right.edge_offset);
        assert_eq!(right.edge_offset, -14.0);
    }

    #[test]
    fn test_unknown_placement_has_no_tail() {
        assert!(TailPlacement::for_placement_name("diagonal").is_none());
        assert!(TailPlacement::for_placement_name("top-start").is_some());
    }

    #[test]
    fn test_tail_transform_follows_offset_only_vertically() {
        assert_eq!(
            Placement::Bottom.tail().transform(Some(-60.0)),
            "translateX(-60px) rotate(0deg)"
        );
        assert_eq!(
            Placement::Top.tail().transform(None),
            "translateX(0px) rotate(180deg)"
        );
        assert_eq!(
            Placement::Left.tail().transform(Some(25.0)),
            "translateX(0px) rotate(90deg)"
        );
    }

    #[test]
    fn test_tail_position_styles() {
        let styles = Placement::Bottom.tail().position_styles();
        assert_eq!(styles[0], ("top", "-7px".to_string()));
        assert_eq!(styles[1], ("left", "calc(50% - 17px)".to_string()));

        let styles = Placement::Left.tail().position_styles();
        assert_eq!(styles[0], ("left", "calc(100% + -14px)".to_string()));
    }
}
