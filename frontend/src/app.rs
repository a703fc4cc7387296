//! Editor shell: text sets pane on the left, toolbar and page on the right.

use moonzoon_novyui::*;
use shared::{PAGE_WIDTH, PageUnits, TextSet};
use std::rc::Rc;
use zoon::*;

use crate::config::EditorConfig;
use crate::library::TextSetsLibrary;
use crate::text_sets_panel::text_sets_panel;
use crate::virtual_list::text_element_preview;

pub struct EditorApp {
    pub config: EditorConfig,
    pub library: TextSetsLibrary,
    /// Last text set the user asked to insert
    pub inserted: Mutable<Option<TextSet>>,
}

impl EditorApp {
    pub fn new(config: EditorConfig) -> Self {
        Self {
            config,
            library: TextSetsLibrary::bundled(),
            inserted: Mutable::new(None),
        }
    }

    pub fn root(&self) -> impl Element + use<> {
        let inserted = self.inserted.clone();
        let on_insert: Rc<dyn Fn(&TextSet)> = Rc::new(move |text_set: &TextSet| {
            zoon::println!(
                "TEXT_SETS: insert '{}' ({} elements)",
                text_set.id,
                text_set.elements.len()
            );
            inserted.set(Some(text_set.clone()));
        });

        Row::new()
            .s(Height::screen())
            .s(Width::fill())
            .s(Background::new().color_signal(theme().map(|theme| match theme {
                Theme::Light => "rgb(255, 255, 255)",
                Theme::Dark => "rgb(13, 13, 13)",
            })))
            .s(font_sans())
            .s(Font::new().color_signal(neutral_12()))
            .item(text_sets_panel(self.library.clone(), on_insert))
            .item(
                Column::new()
                    .s(Width::fill())
                    .s(Height::fill())
                    .item(self.toolbar())
                    .item(self.page()),
            )
    }

    fn toolbar(&self) -> impl Element + use<> {
        let config = self.config.clone();
        let inserted = self.inserted.clone();

        El::new()
            .s(Width::fill())
            .s(Padding::new().x(SPACING_16).y(SPACING_8))
            .s(Borders::new().bottom_signal(neutral_4().map(|color| Border::new().width(1).color(color))))
            .child_signal(config.show_tooltip_tails_signal().map(move |has_tail| {
                let config = config.clone();
                let inserted = inserted.clone();
                Row::new()
                    .s(Gap::new().x(SPACING_8))
                    .item(
                        tooltip(toolbar_button("Theme", toggle_theme))
                            .title("Toggle theme")
                            .shortcut("Ctrl+Shift+L")
                            .placement(Placement::BottomStart)
                            .has_tail(has_tail)
                            .build(),
                    )
                    .item(
                        tooltip(toolbar_button("Tails", move || {
                            config.toggle_tooltip_tails();
                            config.save();
                        }))
                        .title(if has_tail { "Hide tooltip tails" } else { "Show tooltip tails" })
                        .has_tail(has_tail)
                        .build(),
                    )
                    .item(
                        tooltip(toolbar_button("Clear", move || inserted.set(None)))
                            .title("Clear page")
                            .placement(Placement::BottomEnd)
                            .has_tail(has_tail)
                            .build(),
                    )
            }))
    }

    fn page(&self) -> impl Element + use<> {
        let units = PageUnits::for_width(PAGE_WIDTH);

        El::new()
            .s(Width::fill())
            .s(Height::fill())
            .s(Scrollbars::both())
            .s(Padding::all(SPACING_20))
            .child(
                Stack::new()
                    .s(Align::new().center_x())
                    .s(Width::exact(units.page_width as u32))
                    .s(Height::exact(units.page_height as u32))
                    .s(RoundedCorners::all(CORNER_RADIUS_4))
                    .s(Background::new().color_signal(neutral_1()))
                    .s(Borders::all_signal(neutral_4().map(|color| Border::new().width(1).color(color))))
                    .update_raw_el(|raw_el| {
                        raw_el
                            .style("position", "relative")
                            .style("box-shadow", &floating_shadow())
                    })
                    .layers_signal_vec(
                        self.inserted
                            .signal_cloned()
                            .map(move |text_set| {
                                text_set.map(|text_set| text_set.elements).unwrap_or_default()
                            })
                            .to_signal_vec()
                            .map(move |element| text_element_preview(&element, units)),
                    ),
            )
    }
}

fn toolbar_button(label: &'static str, on_press: impl FnMut() + 'static) -> impl Element {
    let (hovered, hovered_signal) = Mutable::new_and_signal(false);
    let background = map_ref! {
        let hovered = hovered_signal,
        let hover_color = neutral_3(),
        let idle_color = neutral_2() =>
        if *hovered { *hover_color } else { *idle_color }
    };
    Button::new()
        .s(Padding::new().x(SPACING_12).y(SPACING_6))
        .s(RoundedCorners::all(CORNER_RADIUS_4))
        .s(Font::new().size(FONT_SIZE_14).weight(FontWeight::Medium))
        .s(transition_colors())
        .s(Background::new().color_signal(background))
        .s(Borders::all_signal(neutral_4().map(|color| Border::new().width(1).color(color))))
        .on_hovered_change(move |is_hovered| hovered.set_neq(is_hovered))
        .label(label)
        .on_press(on_press)
}
