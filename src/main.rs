// Homestead Explorer - main.rs
//
// Application entry point. Handles:
// 1. Logging initialisation (RUST_LOG only; command-line arguments are ignored)
// 2. Scene construction
// 3. eframe GUI launch

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod gui;

// Re-export modules from the library crate so that `gui.rs` can use
// `crate::app::...` and `crate::ui::...`.
pub use homestead_explorer::app;
pub use homestead_explorer::core;
pub use homestead_explorer::ui;
pub use homestead_explorer::util;

use util::constants;
use util::error::ExplorerError;

/// Edge length of the generated window icon.
const ICON_SIZE: u32 = 32;

/// Window icon: the header red with a white house outline, drawn in code so
/// the binary carries no image assets.
fn app_icon() -> egui::IconData {
    let red = core::model::palette::HEADER_RED;
    let size = ICON_SIZE as i32;
    let mut rgba = Vec::with_capacity((ICON_SIZE * ICON_SIZE * 4) as usize);

    for y in 0..size {
        for x in 0..size {
            // Roof: a triangle over the top half; walls: a square below.
            let roof = (6..16).contains(&y) && (x - size / 2).abs() <= y - 6;
            let walls = (16..26).contains(&y) && (9..23).contains(&x);
            let door = (19..26).contains(&y) && (14..18).contains(&x);
            let white = (roof || walls) && !door;
            if white {
                rgba.extend_from_slice(&[0xff, 0xff, 0xff, 0xff]);
            } else {
                rgba.extend_from_slice(&[red.r, red.g, red.b, 0xff]);
            }
        }
    }

    egui::IconData {
        rgba,
        width: ICON_SIZE,
        height: ICON_SIZE,
    }
}

fn run() -> Result<(), ExplorerError> {
    let state = app::state::AppState::new();
    let size = state.scene.size;

    tracing::info!(
        width = size.width,
        height = size.height,
        groups = state.scene.sidebar.groups.len(),
        panels = state.scene.content.panels.len(),
        "Ready to launch GUI"
    );

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(state.scene.title.clone())
            .with_inner_size([size.width, size.height])
            .with_icon(app_icon()),
        ..Default::default()
    };

    eframe::run_native(
        constants::APP_NAME,
        native_options,
        Box::new(move |cc| {
            ui::theme::apply(&cc.egui_ctx);
            Ok(Box::new(gui::ExplorerApp::new(state)))
        }),
    )?;

    tracing::info!("Window closed");
    Ok(())
}

fn main() {
    util::logging::init(false);

    tracing::info!(version = constants::APP_VERSION, "Homestead Explorer starting");

    if let Err(e) = run() {
        tracing::error!(error = %e, "Failed to launch GUI");
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
