// Pill Group Component
// Exclusive row of pill-shaped toggles; pressing the selected pill clears it

use crate::tokens::*;
use std::rc::Rc;
use zoon::*;

#[derive(Clone, Debug, PartialEq)]
pub struct PillOption {
    pub value: String,
    pub label: String,
}

impl PillOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// Next selection after `pressed` is clicked while `current` is selected.
pub fn toggle_selection(current: Option<&str>, pressed: &str) -> Option<String> {
    match current {
        Some(current) if current == pressed => None,
        _ => Some(pressed.to_string()),
    }
}

pub struct PillGroupBuilder {
    options: Vec<PillOption>,
    selected: Mutable<Option<String>>,
    aria_label: Option<String>,
    on_change: Option<Rc<dyn Fn(Option<String>)>>,
}

impl PillGroupBuilder {
    pub fn new(selected: Mutable<Option<String>>) -> Self {
        Self {
            options: Vec::new(),
            selected,
            aria_label: None,
            on_change: None,
        }
    }

    pub fn options(mut self, options: impl IntoIterator<Item = PillOption>) -> Self {
        self.options = options.into_iter().collect();
        self
    }

    pub fn aria_label(mut self, label: impl Into<String>) -> Self {
        self.aria_label = Some(label.into());
        self
    }

    pub fn on_change<F>(mut self, handler: F) -> Self
    where
        F: Fn(Option<String>) + 'static,
    {
        self.on_change = Some(Rc::new(handler));
        self
    }

    pub fn build(self) -> impl Element {
        let selected = self.selected;
        let on_change = self.on_change;
        let aria_label = self.aria_label.unwrap_or_else(|| "Options".to_string());

        Row::new()
            .s(Gap::both(SPACING_6))
            .multiline()
            .items(self.options.into_iter().map(|option| {
                pill(option, selected.clone(), on_change.clone())
            }))
            .update_raw_el(move |raw_el| {
                raw_el
                    .attr("role", "group")
                    .attr("aria-label", &aria_label)
            })
    }
}

fn pill(
    option: PillOption,
    selected: Mutable<Option<String>>,
    on_change: Option<Rc<dyn Fn(Option<String>)>>,
) -> impl Element {
    let (hovered, hovered_signal) = Mutable::new_and_signal(false);
    let is_selected = {
        let selected = selected.clone();
        let value = option.value.clone();
        move || {
            let value = value.clone();
            selected.signal_ref(move |selected| selected.as_deref() == Some(value.as_str()))
        }
    };

    let background = map_ref! {
        let is_selected = is_selected(),
        let hovered = hovered_signal,
        let selected_color = primary_7(),
        let hover_color = neutral_3(),
        let idle_color = neutral_2() =>
        if *is_selected {
            *selected_color
        } else if *hovered {
            *hover_color
        } else {
            *idle_color
        }
    };

    let text_color = map_ref! {
        let is_selected = is_selected(),
        let selected_text = neutral_1(),
        let idle_text = neutral_11() =>
        if *is_selected { *selected_text } else { *idle_text }
    };

    let border = map_ref! {
        let is_selected = is_selected(),
        let selected_border = primary_7(),
        let idle_border = neutral_4() =>
        Border::new().width(1).color(if *is_selected { *selected_border } else { *idle_border })
    };

    let value = option.value;
    Button::new()
        .s(Padding::new().x(SPACING_12).y(SPACING_4))
        .s(RoundedCorners::all_max())
        .s(Font::new().size(FONT_SIZE_12).weight(FontWeight::SemiBold).no_wrap())
        .s(transition_colors())
        .s(Background::new().color_signal(background))
        .s(Font::new().color_signal(text_color))
        .s(Borders::all_signal(border))
        .on_hovered_change(move |is_hovered| hovered.set_neq(is_hovered))
        .label(Text::new(&option.label))
        .on_press(move || {
            let next = toggle_selection(selected.lock_ref().as_deref(), &value);
            selected.set_neq(next.clone());
            if let Some(on_change) = &on_change {
                on_change(next);
            }
        })
        .update_raw_el(move |raw_el| {
            raw_el.attr_signal(
                "aria-pressed",
                is_selected().map_bool(|| "true", || "false"),
            )
        })
}

pub fn pill_group(selected: Mutable<Option<String>>) -> PillGroupBuilder {
    PillGroupBuilder::new(selected)
}
