use moonzoon_novyui::*;
use shared::roving::{NavigationKey, effective_focus, next_focus, tab_index};
use shared::text_sets::ITEMS_PER_ROW;
use shared::virtual_window::row_offset;
use shared::{PageUnits, TEXT_SET_SIZE, TextElement, TextSet, VirtualWindow, row_at, row_count, text_set_row_height};
use std::ops::Range;
use std::rc::Rc;
use std::sync::Arc;
use wasm_bindgen::JsCast;
use zoon::*;

use crate::debug_utils::debug_throttled;

// ===== SCROLL VIEWPORT =====
//
// Owned by the pane that hosts the scroll container. The pane writes scroll
// offset and height; the grid only reads them.

#[derive(Clone, Default)]
pub struct ScrollViewport {
    pub scroll_top: Mutable<f64>,
    pub height: Mutable<f64>,
}

impl ScrollViewport {
    pub fn window(&self, row_count: usize) -> VirtualWindow {
        VirtualWindow::for_text_sets(row_count, self.scroll_top.get(), self.height.get())
    }

    pub fn window_signal(&self, row_count: usize) -> impl Signal<Item = VirtualWindow> + use<> {
        map_ref! {
            let scroll_top = self.scroll_top.signal(),
            let height = self.height.signal() =>
            VirtualWindow::for_text_sets(row_count, *scroll_top, *height)
        }
    }
}

/// Bring `rows` to `target` while keeping rows that stay materialized.
fn sync_rendered_rows(rows: &MutableVec<usize>, target: Range<usize>) {
    let mut rows = rows.lock_mut();
    rows.retain(|row| target.contains(row));

    match (rows.first().copied(), rows.last().copied()) {
        (Some(first), Some(last)) => {
            for row in (target.start..first).rev() {
                rows.insert(0, row);
            }
            for row in (last + 1)..target.end {
                rows.push(row);
            }
        }
        _ => {
            for row in target {
                rows.push(row);
            }
        }
    }
}

// ===== GRID =====

struct GridContext {
    items: Arc<Vec<TextSet>>,
    focused: Mutable<usize>,
    window: Mutable<VirtualWindow>,
    container: Mutable<Option<web_sys::HtmlElement>>,
    on_activate: Rc<dyn Fn(&TextSet)>,
}

impl GridContext {
    fn rendered_items(&self) -> Range<usize> {
        self.window.lock_ref().item_range(ITEMS_PER_ROW, self.items.len())
    }

    fn focus_item(&self, index: usize) {
        self.focused.set_neq(index);
        let selector = format!("[data-text-set-index=\"{index}\"]");
        let card = self
            .container
            .lock_ref()
            .as_ref()
            .and_then(|container| container.query_selector(&selector).ok().flatten())
            .and_then(|card| card.dyn_into::<web_sys::HtmlElement>().ok());
        if let Some(card) = card {
            let _ = card.focus();
        }
    }

    fn activate(&self, index: usize) {
        if let Some(text_set) = self.items.get(index) {
            self.focused.set_neq(index);
            (self.on_activate)(text_set);
        }
    }
}

/// Two-column grid of text set previews; only rows near the viewport exist
/// in the DOM.
pub fn text_set_grid(
    items: Arc<Vec<TextSet>>,
    viewport: ScrollViewport,
    focused: Mutable<usize>,
    on_activate: Rc<dyn Fn(&TextSet)>,
) -> impl Element {
    let rows_total = row_count(items.len());
    let initial_window = viewport.window(rows_total);
    let total_height = initial_window.total_height.ceil() as u32;
    let rendered_rows = MutableVec::new_with_values(initial_window.rows.clone().collect());

    let grid = Rc::new(GridContext {
        items,
        focused,
        window: Mutable::new(initial_window),
        container: Mutable::new(None),
        on_activate,
    });

    let window_task = Task::start_droppable(viewport.window_signal(rows_total).for_each_sync({
        let rendered_rows = rendered_rows.clone();
        let window = grid.window.clone();
        move |next_window| {
            sync_rendered_rows(&rendered_rows, next_window.rows.clone());
            window.set_neq(next_window);
        }
    }));

    Stack::new()
        .s(Width::fill())
        .s(Height::exact(total_height))
        .layers_signal_vec(rendered_rows.signal_vec().map({
            let grid = grid.clone();
            move |row| text_set_row(row, &grid)
        }))
        .update_raw_el({
            let grid = grid.clone();
            move |raw_el| {
                if let Some(html_el) = raw_el.dom_element().dyn_ref::<web_sys::HtmlElement>() {
                    grid.container.set(Some(html_el.clone()));
                }
                raw_el
                    .attr("role", "grid")
                    .attr("aria-rowcount", &rows_total.to_string())
            }
        })
        .after_remove(move |_| {
            drop(window_task);
            grid.container.set(None);
        })
}

fn text_set_row(row: usize, grid: &Rc<GridContext>) -> impl Element + use<> {
    let cards: Vec<_> = row_at(&grid.items, row)
        .map(|text_set_row| {
            let first_index = text_set_row.first_item_index();
            std::iter::once((first_index, text_set_row.first.clone()))
                .chain(text_set_row.second.map(|second| (first_index + 1, second.clone())))
                .collect()
        })
        .unwrap_or_default();

    Row::new()
        .s(Gap::new().x(SPACING_12))
        .s(Height::exact(PageUnits::for_width(TEXT_SET_SIZE).page_height.round() as u32))
        .s(Transform::new().move_down(row_offset(row, text_set_row_height()).round() as i32))
        .items(cards.into_iter().map(|(index, text_set)| text_set_card(index, text_set, grid.clone())))
        .update_raw_el(move |raw_el| {
            raw_el
                .attr("role", "row")
                .attr("aria-rowindex", &(row + 1).to_string())
        })
}

fn text_set_card(index: usize, text_set: TextSet, grid: Rc<GridContext>) -> impl Element {
    let units = PageUnits::for_width(TEXT_SET_SIZE);
    let (hovered, hovered_signal) = Mutable::new_and_signal(false);
    let item_count = grid.items.len();

    let tab_index_signal = map_ref! {
        let focused = grid.focused.signal(),
        let window = grid.window.signal_cloned() =>
        effective_focus(*focused, window.item_range(ITEMS_PER_ROW, item_count))
            .map_or("-1", |owner| tab_index(index, owner))
    };

    let border = map_ref! {
        let hovered = hovered_signal,
        let hover_border = primary_6(),
        let idle_border = neutral_4() =>
        Border::new().width(1).color(if *hovered { *hover_border } else { *idle_border })
    };

    Stack::new()
        .s(Width::exact(TEXT_SET_SIZE as u32))
        .s(Height::exact(units.page_height.round() as u32))
        .s(RoundedCorners::all(CORNER_RADIUS_8))
        .s(Background::new().color_signal(neutral_1()))
        .s(Borders::all_signal(border))
        .s(Cursor::new(CursorIcon::Pointer))
        .s(transition_colors())
        .layers(text_set.elements.iter().map(|element| text_element_preview(element, units)))
        .on_hovered_change(move |is_hovered| hovered.set_neq(is_hovered))
        .on_click({
            let grid = grid.clone();
            move || grid.activate(index)
        })
        .update_raw_el(move |raw_el| {
            let keydown = DomListener::new(raw_el.dom_element().as_ref(), "keydown", {
                let grid = grid.clone();
                move |event| handle_card_key(&grid, index, &event)
            });
            raw_el
                .style("position", "relative")
                .style("overflow", "hidden")
                .attr("role", "gridcell")
                .attr("aria-label", &text_set.id)
                .attr("data-text-set-index", &index.to_string())
                .attr_signal("tabindex", tab_index_signal)
                .after_remove(move |_| drop(keydown))
        })
}

fn handle_card_key(grid: &GridContext, index: usize, event: &web_sys::Event) {
    let Some(event) = event.dyn_ref::<web_sys::KeyboardEvent>() else {
        return;
    };
    let key = event.key();

    if key == "Enter" || key == " " {
        event.prevent_default();
        grid.activate(index);
        return;
    }

    let Some(navigation) = NavigationKey::from_key_name(&key) else {
        return;
    };
    event.prevent_default();
    if let Some(target) = next_focus(index, navigation, grid.rendered_items()) {
        debug_throttled(&format!("TEXT_SETS: focus {index} -> {target}"));
        grid.focus_item(target);
    }
}

/// One text element of a preview, scaled from page data units.
pub fn text_element_preview(element: &TextElement, units: PageUnits) -> impl Element + use<> {
    let px = |value: f64| format!("{value:.2}px");
    let left = px(units.data_to_display_x(element.x));
    let top = px(units.data_to_display_y(element.y));
    let width = px(units.data_to_display_x(element.width));
    let height = px(units.data_to_display_y(element.height));
    let font_size = px(units.data_to_display_font_size(element.font_size));
    let font_weight = element.font_weight.to_string();

    El::new()
        .s(Font::new().color_signal(neutral_12()))
        .child(Text::new(&element.content))
        .update_raw_el(move |raw_el| {
            raw_el
                .style("position", "absolute")
                .style("left", &left)
                .style("top", &top)
                .style("width", &width)
                .style("height", &height)
                .style("font-size", &font_size)
                .style("font-weight", &font_weight)
                .style("line-height", "1.2")
                .style("overflow", "hidden")
                .style("pointer-events", "none")
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::StreamExt;

    fn rows(vec: &MutableVec<usize>) -> Vec<usize> {
        vec.lock_ref().to_vec()
    }

    #[test]
    fn test_sync_fills_empty_list() {
        let rendered = MutableVec::new();
        sync_rendered_rows(&rendered, 0..4);
        assert_eq!(rows(&rendered), vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_sync_scrolling_down_keeps_overlap() {
        let rendered = MutableVec::new_with_values(vec![0, 1, 2, 3]);
        sync_rendered_rows(&rendered, 2..6);
        assert_eq!(rows(&rendered), vec![2, 3, 4, 5]);
    }

    #[test]
    fn test_sync_scrolling_up_prepends_in_order() {
        let rendered = MutableVec::new_with_values(vec![5, 6, 7]);
        sync_rendered_rows(&rendered, 2..6);
        assert_eq!(rows(&rendered), vec![2, 3, 4, 5]);
    }

    #[test]
    fn test_sync_jump_without_overlap() {
        let rendered = MutableVec::new_with_values(vec![0, 1, 2]);
        sync_rendered_rows(&rendered, 40..43);
        assert_eq!(rows(&rendered), vec![40, 41, 42]);

        sync_rendered_rows(&rendered, 0..0);
        assert!(rows(&rendered).is_empty());
    }

    fn assert_static_builder<A, R: 'static>(_builder: impl FnMut(A) -> R + 'static) {}

    #[test]
    fn test_row_and_preview_builders_do_not_borrow_arguments() {
        let grid = Rc::new(GridContext {
            items: Arc::new(Vec::new()),
            focused: Mutable::new(0),
            window: Mutable::new(VirtualWindow::for_text_sets(0, 0.0, 0.0)),
            container: Mutable::new(None),
            on_activate: Rc::new(|_: &TextSet| {}),
        });
        assert_static_builder(move |row: usize| text_set_row(row, &grid));

        let units = PageUnits::for_width(TEXT_SET_SIZE);
        assert_static_builder(move |element: TextElement| text_element_preview(&element, units));
    }

    #[tokio::test]
    async fn test_viewport_window_follows_scroll() {
        let viewport = ScrollViewport::default();
        viewport.height.set(500.0);
        let mut windows = viewport.window_signal(100).to_stream();

        let window = windows.next().await.unwrap();
        assert_eq!(window.rows.start, 0);
        assert!((window.total_height - 100.0 * text_set_row_height()).abs() < 1e-6);

        viewport.scroll_top.set(20.5 * text_set_row_height());
        let window = windows.next().await.unwrap();
        assert_eq!(window.rows.start, 15);
        assert!(window.contains(20));
    }
}
