use super::placement::Placement;
use std::rc::Rc;
use zoon::*;

// ===== GEOMETRY =====

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

/// Snapshot of an element's bounding client rect.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct BoundingBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl BoundingBox {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    /// `None` unless every coordinate is finite.
    pub fn measured(x: f64, y: f64, width: f64, height: f64) -> Option<Self> {
        [x, y, width, height]
            .iter()
            .all(|value| value.is_finite())
            .then(|| Self::new(x, y, width, height))
    }

    pub fn center_x(&self) -> f64 {
        self.x + self.width / 2.0
    }

    pub fn center_y(&self) -> f64 {
        self.y + self.height / 2.0
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    pub fn size(&self) -> Size {
        Size {
            width: self.width,
            height: self.height,
        }
    }

    pub fn at(origin: Point, size: Size) -> Self {
        Self::new(origin.x, origin.y, size.width, size.height)
    }
}

// ===== STATE =====

#[derive(Clone, Debug, PartialEq, Default)]
pub struct TooltipState {
    pub shown: bool,
    pub placement: Placement,
    /// Anchor center minus tooltip center, horizontally
    pub arrow_offset: Option<f64>,
}

impl TooltipState {
    pub fn new(placement: Placement) -> Self {
        Self {
            placement,
            ..Self::default()
        }
    }

    /// Whether the floating label should be visible and interactive.
    pub fn is_eligible(&self, title: &str, shortcut: &str) -> bool {
        self.shown && (!shortcut.is_empty() || !title.is_empty())
    }

    /// Recompute the tail offset; keeps the previous value if either box is missing.
    pub fn position_arrow(&mut self, anchor: Option<BoundingBox>, tooltip: Option<BoundingBox>) {
        let (Some(anchor), Some(tooltip)) = (anchor, tooltip) else {
            return;
        };
        let delta = anchor.center_x() - tooltip.center_x();
        if delta.is_finite() {
            self.arrow_offset = Some(delta);
        }
    }

    pub fn apply(&mut self, event: TooltipEventKind) {
        self.shown = match event {
            TooltipEventKind::PointerEnter | TooltipEventKind::FocusIn => true,
            TooltipEventKind::PointerLeave | TooltipEventKind::FocusOut => false,
        };
    }
}

// ===== EVENTS =====

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TooltipEventKind {
    PointerEnter,
    PointerLeave,
    FocusIn,
    FocusOut,
}

impl TooltipEventKind {
    pub const ALL: [TooltipEventKind; 4] = [
        TooltipEventKind::PointerEnter,
        TooltipEventKind::PointerLeave,
        TooltipEventKind::FocusIn,
        TooltipEventKind::FocusOut,
    ];

    /// DOM event type listened to on the anchor wrapper.
    pub fn dom_event_type(self) -> &'static str {
        match self {
            TooltipEventKind::PointerEnter => "mouseenter",
            TooltipEventKind::PointerLeave => "mouseleave",
            TooltipEventKind::FocusIn => "focusin",
            TooltipEventKind::FocusOut => "focusout",
        }
    }
}

pub type EventCallback<E> = Rc<dyn Fn(&E)>;

/// Updates the tooltip state, then forwards the untouched event to the
/// caller's callback. The state lock is released before forwarding.
pub struct ChainedHandler<E> {
    kind: TooltipEventKind,
    forward: Option<EventCallback<E>>,
}

impl<E> ChainedHandler<E> {
    pub fn new(kind: TooltipEventKind, forward: Option<EventCallback<E>>) -> Self {
        Self { kind, forward }
    }

    pub fn kind(&self) -> TooltipEventKind {
        self.kind
    }

    pub fn handle(&self, state: &Mutable<TooltipState>, event: &E) {
        state.lock_mut().apply(self.kind);
        if let Some(forward) = &self.forward {
            forward(event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[test]
    fn test_arrow_offset_is_center_delta() {
        let mut state = TooltipState::new(Placement::Bottom);
        let anchor = BoundingBox::new(100.0, 10.0, 40.0, 20.0);
        let tooltip = BoundingBox::new(80.0, 38.0, 200.0, 30.0);
        state.position_arrow(Some(anchor), Some(tooltip));
        assert_eq!(state.arrow_offset, Some(-60.0));
    }

    #[test]
    fn test_missing_box_keeps_previous_offset() {
        let mut state = TooltipState::new(Placement::Top);
        let anchor = BoundingBox::new(0.0, 0.0, 10.0, 10.0);
        state.position_arrow(Some(anchor), None);
        assert_eq!(state.arrow_offset, None);

        state.position_arrow(Some(anchor), Some(BoundingBox::new(5.0, 0.0, 10.0, 10.0)));
        assert_eq!(state.arrow_offset, Some(-5.0));

        state.position_arrow(None, Some(anchor));
        assert_eq!(state.arrow_offset, Some(-5.0));
        state.position_arrow(None, None);
        assert_eq!(state.arrow_offset, Some(-5.0));
    }

    #[test]
    fn test_unmeasurable_boxes_are_rejected() {
        assert!(BoundingBox::measured(f64::NAN, 0.0, 1.0, 1.0).is_none());
        assert!(BoundingBox::measured(0.0, 0.0, f64::INFINITY, 1.0).is_none());
        assert!(BoundingBox::measured(0.0, 0.0, 1.0, 1.0).is_some());

        let mut state = TooltipState::new(Placement::Bottom);
        state.arrow_offset = Some(3.0);
        let huge = BoundingBox::new(f64::MAX, 0.0, f64::MAX, 0.0);
        state.position_arrow(Some(huge), Some(BoundingBox::new(-f64::MAX, 0.0, 0.0, 0.0)));
        assert_eq!(state.arrow_offset, Some(3.0));
    }

    #[test]
    fn test_visibility_predicate() {
        let mut state = TooltipState::default();
        assert!(!state.is_eligible("Title", "Ctrl+B"));
        state.shown = true;
        assert!(!state.is_eligible("", ""));
        assert!(state.is_eligible("x", ""));
        assert!(state.is_eligible("", "Ctrl+B"));
    }

    #[test]
    fn test_events_toggle_shown() {
        let mut state = TooltipState::default();
        state.apply(TooltipEventKind::PointerEnter);
        assert!(state.shown);
        state.apply(TooltipEventKind::PointerLeave);
        assert!(!state.shown);
        state.apply(TooltipEventKind::FocusIn);
        assert!(state.shown);
        state.apply(TooltipEventKind::FocusOut);
        assert!(!state.shown);
    }

    #[test]
    fn test_chained_handler_updates_state_before_forwarding() {
        let state = Mutable::new(TooltipState::default());
        let seen: Rc<RefCell<Vec<(String, bool)>>> = Rc::new(RefCell::new(Vec::new()));

        for kind in TooltipEventKind::ALL {
            let handler = ChainedHandler::new(kind, Some(Rc::new({
                let state = state.clone();
                let seen = seen.clone();
                move |event: &String| {
                    seen.borrow_mut().push((event.clone(), state.lock_ref().shown));
                }
            }) as EventCallback<String>));
            handler.handle(&state, &kind.dom_event_type().to_string());
        }

        assert_eq!(
            *seen.borrow(),
            vec![
                ("mouseenter".to_string(), true),
                ("mouseleave".to_string(), false),
                ("focusin".to_string(), true),
                ("focusout".to_string(), false),
            ]
        );
    }

    #[test]
    fn test_chained_handler_without_callback() {
        let state = Mutable::new(TooltipState::default());
        ChainedHandler::<()>::new(TooltipEventKind::FocusIn, None).handle(&state, &());
        assert!(state.get_cloned().shown);
    }
}
