use moonzoon_novyui::*;
use shared::{TextSet, TextSetCatalog};
use std::rc::Rc;
use std::sync::Arc;
use zoon::*;

use crate::debug_utils::debug_throttled;
use crate::library::{LibraryState, TextSetsLibrary};
use crate::virtual_list::{ScrollViewport, text_set_grid};

/// Fits two previews, their gap and the pane padding next to a scrollbar.
pub const TEXT_SETS_PANEL_WIDTH: u32 = 360;

/// Browser state local to one pane. Nothing here is persisted.
#[derive(Clone, Default)]
pub struct TextSetBrowserState {
    pub selected_category: Mutable<Option<String>>,
    pub focused_index: Mutable<usize>,
}

impl TextSetBrowserState {
    /// Items shown for the current category, `None` until the catalog loads.
    pub fn visible_items_signal<S>(&self, catalog: S) -> impl Signal<Item = Option<Arc<Vec<TextSet>>>> + use<S>
    where
        S: Signal<Item = Option<Arc<TextSetCatalog>>> + 'static,
    {
        map_ref! {
            let catalog = catalog,
            let selected_category = self.selected_category.signal_cloned() =>
            catalog
                .as_ref()
                .map(|catalog| Arc::new(catalog.visible_items(selected_category.as_deref())))
        }
    }

    pub fn select_category(&self, category: Option<String>) {
        self.selected_category.set_neq(category);
        self.focused_index.set_neq(0);
    }
}

fn empty_state_hint(text: &'static str) -> impl Element {
    El::new()
        .s(Padding::all(SPACING_20))
        .s(Font::new().size(FONT_SIZE_14).color_signal(neutral_8()).italic())
        .child(text)
}

/// Pane listing every text set of the library, filterable by category.
/// `on_insert` receives the text set the user activated.
pub fn text_sets_panel(library: TextSetsLibrary, on_insert: Rc<dyn Fn(&TextSet)>) -> impl Element {
    let viewport = ScrollViewport::default();
    let browser = TextSetBrowserState::default();

    Column::new()
        .s(Width::exact(TEXT_SETS_PANEL_WIDTH))
        .s(Height::fill())
        .s(Background::new().color_signal(neutral_2()))
        .s(Borders::new().right_signal(neutral_4().map(|color| Border::new().width(1).color(color))))
        .item(panel_header())
        .item(category_pills(&library, &browser))
        .item(scroll_container(library.clone(), browser, viewport, on_insert))
        .after_insert(move |_| {
            if library.ensure_loaded() {
                zoon::println!("TEXT_SETS: loading library");
            }
        })
}

fn panel_header() -> impl Element {
    El::new()
        .s(Padding::new().x(SPACING_16).top(SPACING_16).bottom(SPACING_8))
        .s(Font::new().size(FONT_SIZE_16).weight(FontWeight::SemiBold).color_signal(neutral_12()))
        .child("Text sets")
}

fn category_pills(library: &TextSetsLibrary, browser: &TextSetBrowserState) -> impl Element + use<> {
    let browser = browser.clone();
    El::new()
        .s(Padding::new().x(SPACING_16).bottom(SPACING_12))
        .child_signal(library.catalog_signal().map(move |catalog| {
            let options = catalog?.category_options();
            if options.is_empty() {
                return None;
            }
            let browser = browser.clone();
            Some(
                pill_group(browser.selected_category.clone())
                    .aria_label("Text set categories")
                    .options(options.into_iter().map(|option| PillOption::new(option.id, option.label)))
                    .on_change(move |category| browser.select_category(category))
                    .build(),
            )
        }))
}

fn scroll_container(
    library: TextSetsLibrary,
    browser: TextSetBrowserState,
    viewport: ScrollViewport,
    on_insert: Rc<dyn Fn(&TextSet)>,
) -> impl Element {
    let items = browser.visible_items_signal(library.catalog_signal());

    El::new()
        .s(Width::fill())
        .s(Height::fill())
        .s(Scrollbars::y_and_clip_x())
        .on_viewport_size_change({
            let viewport = viewport.clone();
            move |_width, height| viewport.height.set_neq(height as f64)
        })
        .update_raw_el({
            let scroll_top = viewport.scroll_top.clone();
            move |raw_el| {
                let dom_element = raw_el.dom_element();
                let scroll = DomListener::new(dom_element.as_ref(), "scroll", {
                    let dom_element = dom_element.clone();
                    move |_event| {
                        let offset = dom_element.scroll_top() as f64;
                        debug_throttled(&format!("TEXT_SETS: scroll_top {offset}"));
                        scroll_top.set_neq(offset);
                    }
                });
                raw_el
                    .style("scrollbar-width", "thin")
                    .attr("data-scroll-container", "text-sets")
                    .after_remove(move |_| drop(scroll))
            }
        })
        .child_signal(map_ref! {
            let state = library.state_signal(),
            let items = items =>
            content(state, items.clone(), &browser, &viewport, &on_insert)
        })
}

fn content(
    state: &LibraryState,
    items: Option<Arc<Vec<TextSet>>>,
    browser: &TextSetBrowserState,
    viewport: &ScrollViewport,
    on_insert: &Rc<dyn Fn(&TextSet)>,
) -> RawElOrText {
    match (state, items) {
        (LibraryState::Failed(_), _) => empty_state_hint("Text sets could not be loaded").unify(),
        (LibraryState::Loaded(_), Some(items)) if items.is_empty() => {
            empty_state_hint("No text sets available").unify()
        }
        (LibraryState::Loaded(_), Some(items)) => El::new()
            .s(Width::fill())
            .s(Padding::new().x(SPACING_16).bottom(SPACING_16))
            .child(text_set_grid(
                items,
                viewport.clone(),
                browser.focused_index.clone(),
                on_insert.clone(),
            ))
            .unify(),
        _ => empty_state_hint("Loading text sets...").unify(),
    }
}
