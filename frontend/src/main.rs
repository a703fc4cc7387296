//! Text sets editor entry point

use zoon::*;

mod app;
mod config;
mod debug_utils;
mod library;
mod text_sets_panel;
mod virtual_list;

pub fn main() {
    let config = config::EditorConfig::load();
    config.init_theme();

    let app = app::EditorApp::new(config);
    let root_element = app.root();
    start_app("app", move || root_element);
}
