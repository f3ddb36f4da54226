// Homestead Explorer - ui/mod.rs
//
// UI layer: presentation only.
// Dependencies: app (state), core (scene graph), egui.
// Must NOT depend on: platform, direct I/O.

pub mod panels;
pub mod theme;

use crate::app::state::AppState;

/// Draw one frame of the explorer window.
///
/// Panel order matters to egui: the header and sidebar claim their space
/// before the central grid takes the remainder.
pub fn render(ctx: &egui::Context, state: &mut AppState) {
    let scene = &mut state.scene;
    panels::header::render(ctx, &scene.header);
    panels::sidebar::render(ctx, &mut scene.sidebar);
    panels::content::render(ctx, &scene.content, scene.background);
}
