// Tooltip Component
// Floating label shown while its anchor is hovered or holds focus, with an
// optional tail pointing at the anchor's horizontal center.

mod placement;
mod positioner;
mod state;

pub use placement::*;
pub use positioner::*;
pub use state::*;

use crate::dom_listener::DomListener;
use crate::tokens::*;
use std::rc::{Rc, Weak};
use std::sync::atomic::{AtomicU32, Ordering};
use wasm_bindgen::JsCast;
use zoon::*;

static TOOLTIP_ID_COUNTER: AtomicU32 = AtomicU32::new(0);

pub struct TooltipBuilder<C> {
    child: C,
    title: String,
    shortcut: String,
    has_tail: bool,
    placement: Placement,
    on_pointer_enter: Option<EventCallback<web_sys::Event>>,
    on_pointer_leave: Option<EventCallback<web_sys::Event>>,
    on_focus: Option<EventCallback<web_sys::Event>>,
    on_blur: Option<EventCallback<web_sys::Event>>,
    on_position_update: Option<Rc<dyn Fn(Point)>>,
    positioner: Rc<dyn FloatingPositioner>,
}

impl<C: Element + 'static> TooltipBuilder<C> {
    pub fn new(child: C) -> Self {
        Self {
            child,
            title: String::new(),
            shortcut: String::new(),
            has_tail: false,
            placement: Placement::default(),
            on_pointer_enter: None,
            on_pointer_leave: None,
            on_focus: None,
            on_blur: None,
            on_position_update: None,
            positioner: Rc::new(EdgePositioner),
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Kept for API parity; shortcut text is not rendered.
    pub fn shortcut(mut self, shortcut: impl Into<String>) -> Self {
        self.shortcut = shortcut.into();
        self
    }

    pub fn has_tail(mut self, has_tail: bool) -> Self {
        self.has_tail = has_tail;
        self
    }

    pub fn placement(mut self, placement: Placement) -> Self {
        self.placement = placement;
        self
    }

    pub fn on_pointer_enter<F>(mut self, handler: F) -> Self
    where
        F: Fn(&web_sys::Event) + 'static,
    {
        self.on_pointer_enter = Some(Rc::new(handler));
        self
    }

    pub fn on_pointer_leave<F>(mut self, handler: F) -> Self
    where
        F: Fn(&web_sys::Event) + 'static,
    {
        self.on_pointer_leave = Some(Rc::new(handler));
        self
    }

    pub fn on_focus<F>(mut self, handler: F) -> Self
    where
        F: Fn(&web_sys::Event) + 'static,
    {
        self.on_focus = Some(Rc::new(handler));
        self
    }

    pub fn on_blur<F>(mut self, handler: F) -> Self
    where
        F: Fn(&web_sys::Event) + 'static,
    {
        self.on_blur = Some(Rc::new(handler));
        self
    }

    /// Called with the new top-left corner after every reposition.
    pub fn on_position_update<F>(mut self, handler: F) -> Self
    where
        F: Fn(Point) + 'static,
    {
        self.on_position_update = Some(Rc::new(handler));
        self
    }

    pub fn positioner(mut self, positioner: impl FloatingPositioner + 'static) -> Self {
        self.positioner = Rc::new(positioner);
        self
    }

    pub fn build(self) -> impl Element {
        let TooltipBuilder {
            child,
            title,
            shortcut,
            has_tail,
            placement,
            on_pointer_enter,
            on_pointer_leave,
            on_focus,
            on_blur,
            on_position_update,
            positioner,
        } = self;

        let tooltip_id = format!(
            "novyui-tooltip-{}",
            TOOLTIP_ID_COUNTER.fetch_add(1, Ordering::Relaxed)
        );

        let layout = Rc::new(TooltipLayout::new(placement, positioner, on_position_update));

        let handlers = vec![
            ChainedHandler::new(TooltipEventKind::PointerEnter, on_pointer_enter),
            ChainedHandler::new(TooltipEventKind::PointerLeave, on_pointer_leave),
            ChainedHandler::new(TooltipEventKind::FocusIn, on_focus),
            ChainedHandler::new(TooltipEventKind::FocusOut, on_blur),
        ];

        let floating = floating_label(&layout, title, shortcut, has_tail, tooltip_id.clone());

        El::new()
            .child(child)
            .update_raw_el({
                let layout = layout.clone();
                move |raw_el| {
                    let mut listeners = Vec::new();
                    if let Some(html_el) = raw_el.dom_element().dyn_ref::<web_sys::HtmlElement>() {
                        layout.anchor_element.set(Some(html_el.clone()));
                        listeners.extend(handlers.into_iter().filter_map(|handler| {
                            let weak_layout = Rc::downgrade(&layout);
                            DomListener::new(html_el, handler.kind().dom_event_type(), move |event| {
                                dispatch(&weak_layout, &handler, &event);
                            })
                        }));
                    }
                    listeners.extend(reposition_listeners(&layout));
                    raw_el.after_remove(move |_| drop(listeners))
                }
            })
            .after_insert(move |anchor| {
                let target = description_target(anchor.clone().into(), anchor.first_element_child());
                if target.set_attribute("aria-describedby", &tooltip_id).is_err() {
                    zoon::eprintln!("TOOLTIP: failed to describe anchor with '{}'", tooltip_id);
                }
            })
            .element_below(floating)
    }
}

pub fn tooltip<C: Element + 'static>(child: C) -> TooltipBuilder<C> {
    TooltipBuilder::new(child)
}

/// Element that gets `aria-describedby`: the wrapped child, which is the one
/// receiving focus, or the wrapper when the child has no element of its own.
fn description_target<T>(wrapper: T, first_child: Option<T>) -> T {
    first_child.unwrap_or(wrapper)
}

// ===== LAYOUT =====

struct TooltipLayout {
    state: Mutable<TooltipState>,
    anchor_element: Mutable<Option<web_sys::HtmlElement>>,
    floating_element: Mutable<Option<web_sys::HtmlElement>>,
    origin: Mutable<Option<Point>>,
    positioner: Rc<dyn FloatingPositioner>,
    on_position_update: Option<Rc<dyn Fn(Point)>>,
}

impl TooltipLayout {
    fn new(
        placement: Placement,
        positioner: Rc<dyn FloatingPositioner>,
        on_position_update: Option<Rc<dyn Fn(Point)>>,
    ) -> Self {
        Self {
            state: Mutable::new(TooltipState::new(placement)),
            anchor_element: Mutable::new(None),
            floating_element: Mutable::new(None),
            origin: Mutable::new(None),
            positioner,
            on_position_update,
        }
    }

    /// Reposition the floating label and recompute the tail offset.
    /// Skipped while either element is unmeasured.
    fn update(&self) {
        let anchor = self.anchor_element.lock_ref().as_ref().and_then(measure);
        let floating = self.floating_element.lock_ref().as_ref().and_then(measure);
        if let (Some(anchor), Some(floating)) = (anchor, floating) {
            self.apply_position(anchor, floating.size());
        }
    }

    /// Place the label for measured boxes, then update the tail offset and
    /// notify `on_position_update`.
    fn apply_position(&self, anchor: BoundingBox, floating: Size) -> Point {
        let placement = self.state.lock_ref().placement;
        let origin = self
            .positioner
            .position(anchor, floating, placement, placement.spacing());
        self.origin.set_neq(Some(origin));

        self.state
            .lock_mut()
            .position_arrow(Some(anchor), Some(BoundingBox::at(origin, floating)));

        if let Some(on_position_update) = &self.on_position_update {
            on_position_update(origin);
        }
        origin
    }

    fn update_if_shown(&self) {
        let shown = self.state.lock_ref().shown;
        if shown {
            self.update();
        }
    }
}

fn measure(element: &web_sys::HtmlElement) -> Option<BoundingBox> {
    let rect = element.get_bounding_client_rect();
    BoundingBox::measured(rect.x(), rect.y(), rect.width(), rect.height())
}

/// Run one anchor event through its handler. Events arriving after the
/// tooltip is gone are ignored.
fn dispatch<E>(layout: &Weak<TooltipLayout>, handler: &ChainedHandler<E>, event: &E) -> bool {
    let Some(layout) = layout.upgrade() else {
        return false;
    };
    handler.handle(&layout.state, event);
    layout.update_if_shown();
    true
}

/// Follow the anchor while the label is shown: window resizes and scrolling
/// of any ancestor move it without changing the label's size.
fn reposition_listeners(layout: &Rc<TooltipLayout>) -> Vec<DomListener> {
    let Some(window) = web_sys::window() else {
        return Vec::new();
    };
    let on_change = |layout: Weak<TooltipLayout>| {
        move |_event: web_sys::Event| {
            if let Some(layout) = layout.upgrade() {
                layout.update_if_shown();
            }
        }
    };
    [
        DomListener::new(&window, "resize", on_change(Rc::downgrade(layout))),
        DomListener::new_capturing(&window, "scroll", on_change(Rc::downgrade(layout))),
    ]
    .into_iter()
    .flatten()
    .collect()
}

// ===== VIEW =====

fn floating_label(
    layout: &Rc<TooltipLayout>,
    title: String,
    shortcut: String,
    has_tail: bool,
    tooltip_id: String,
) -> impl Element + use<> {
    let text = Text::new(&title);
    let eligible = {
        let state = layout.state.clone();
        move || {
            let title = title.clone();
            let shortcut = shortcut.clone();
            state.signal_ref(move |state| state.is_eligible(&title, &shortcut))
        }
    };

    let placement = layout.state.lock_ref().placement;
    let tail = has_tail.then(|| tail_element(placement.tail(), layout.state.clone()));

    Column::new()
        .s(Padding::new().x(SPACING_8).y(SPACING_6))
        .s(RoundedCorners::all(CORNER_RADIUS_4))
        .s(Background::new().color_signal(inverse_surface()))
        .s(Font::new()
            .size(FONT_SIZE_12)
            .weight(FontWeight::Medium)
            .color_signal(inverse_text())
            .no_wrap()
        )
        .s(transition_opacity())
        .item(text)
        .item(tail)
        .on_viewport_size_change({
            let layout = layout.clone();
            move |_width, _height| layout.update_if_shown()
        })
        .update_raw_el({
            let layout = layout.clone();
            move |raw_el| {
                if let Some(html_el) = raw_el.dom_element().dyn_ref::<web_sys::HtmlElement>() {
                    layout.floating_element.set(Some(html_el.clone()));
                }
                raw_el
                    .attr("id", &tooltip_id)
                    .attr("role", "tooltip")
                    .style("position", "fixed")
                    .style("z-index", "1000")
                    .style("box-shadow", &floating_shadow())
                    .style_signal("left", layout.origin.signal().map(|origin| {
                        format!("{}px", origin.map_or(-9999.0, |origin| origin.x))
                    }))
                    .style_signal("top", layout.origin.signal().map(|origin| {
                        format!("{}px", origin.map_or(-9999.0, |origin| origin.y))
                    }))
                    .style_signal("opacity", eligible().map_bool(|| OPACITY_OPAQUE, || OPACITY_NONE))
                    .style_signal("pointer-events", eligible().map_bool(|| "auto", || "none"))
                    .attr_signal("aria-hidden", eligible().map_bool(|| "false", || "true"))
            }
        })
}

fn tail_element(tail: TailPlacement, state: Mutable<TooltipState>) -> impl Element {
    El::new()
        .s(Width::exact(TAIL_WIDTH as u32))
        .s(Height::exact(TAIL_HEIGHT as u32))
        .s(Background::new().color_signal(inverse_surface()))
        .update_raw_el(move |raw_el| {
            let raw_el = raw_el
                .style("position", "absolute")
                .style("clip-path", TAIL_CLIP_PATH)
                .style("transform-origin", "center");
            tail.position_styles()
                .into_iter()
                .fold(raw_el, |raw_el, (property, value)| raw_el.style(property, &value))
                .style_signal(
                    "transform",
                    state.signal_ref(move |state| tail.transform(state.arrow_offset)),
                )
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};

    struct FixedPositioner(Point);

    impl FloatingPositioner for FixedPositioner {
        fn position(&self, _anchor: BoundingBox, _floating: Size, _placement: Placement, _spacing: Spacing) -> Point {
            self.0
        }
    }

    fn layout(positioner: impl FloatingPositioner + 'static, on_position_update: Option<Rc<dyn Fn(Point)>>) -> Rc<TooltipLayout> {
        Rc::new(TooltipLayout::new(Placement::Bottom, Rc::new(positioner), on_position_update))
    }

    #[test]
    fn test_position_update_moves_tail_and_notifies() {
        let reported: Rc<RefCell<Vec<Point>>> = Rc::new(RefCell::new(Vec::new()));
        let layout = layout(
            FixedPositioner(Point { x: 80.0, y: 38.0 }),
            Some(Rc::new({
                let reported = reported.clone();
                move |origin: Point| reported.borrow_mut().push(origin)
            })),
        );

        let anchor = BoundingBox::new(100.0, 10.0, 40.0, 20.0);
        let origin = layout.apply_position(anchor, Size { width: 200.0, height: 30.0 });

        assert_eq!(origin, Point { x: 80.0, y: 38.0 });
        assert_eq!(layout.origin.get(), Some(origin));
        assert_eq!(layout.state.lock_ref().arrow_offset, Some(-60.0));
        assert_eq!(*reported.borrow(), vec![origin]);
    }

    #[test]
    fn test_edge_positioner_centers_tail_on_anchor() {
        let layout = layout(EdgePositioner, None);
        let anchor = BoundingBox::new(100.0, 10.0, 40.0, 20.0);
        let origin = layout.apply_position(anchor, Size { width: 200.0, height: 30.0 });

        assert_eq!(origin, Point { x: 20.0, y: 30.0 + TOOLTIP_GAP });
        assert_eq!(layout.state.lock_ref().arrow_offset, Some(0.0));
    }

    #[test]
    fn test_events_after_tooltip_is_gone_are_ignored() {
        let forwarded = Rc::new(Cell::new(0));
        let handler = ChainedHandler::new(
            TooltipEventKind::PointerEnter,
            Some(Rc::new({
                let forwarded = forwarded.clone();
                move |_: &()| forwarded.set(forwarded.get() + 1)
            }) as EventCallback<()>),
        );

        let layout = layout(EdgePositioner, None);
        let weak_layout = Rc::downgrade(&layout);
        assert!(dispatch(&weak_layout, &handler, &()));
        assert!(layout.state.lock_ref().shown);
        assert_eq!(forwarded.get(), 1);

        drop(layout);
        assert!(!dispatch(&weak_layout, &handler, &()));
        assert_eq!(forwarded.get(), 1);
    }

    #[test]
    fn test_description_goes_to_wrapped_child() {
        assert_eq!(description_target("wrapper", Some("button")), "button");
        assert_eq!(description_target("wrapper", None), "wrapper");
    }
}
