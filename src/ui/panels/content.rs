// Homestead Explorer - ui/panels/content.rs
//
// Main content grid of placeholder panels. Each panel is a filled rounded
// rectangle with its title centred; nothing is drawn from data.

use crate::core::model::Rgb;
use crate::core::scene::{ContentGrid, Panel};
use crate::ui::theme::colour;

/// Render the grid into the central panel.
pub fn render(ctx: &egui::Context, grid: &ContentGrid, background: Rgb) {
    let frame = egui::Frame::default()
        .fill(colour(background))
        .inner_margin(grid.padding);

    egui::CentralPanel::default().frame(frame).show(ctx, |ui| {
        egui::ScrollArea::vertical()
            .id_salt("content_grid")
            .auto_shrink([false; 2])
            .show(ui, |ui| render_grid(ui, grid));
    });
}

fn render_grid(ui: &mut egui::Ui, grid: &ContentGrid) {
    let columns = grid.columns.max(1);
    let width = ui.available_width();
    let column_width = column_width(width, columns, grid.h_gap);

    for (r, row) in grid.rows().into_iter().enumerate() {
        if r > 0 {
            ui.add_space(grid.v_gap);
        }
        ui.horizontal(|ui| {
            ui.spacing_mut().item_spacing.x = grid.h_gap;
            for panel in row {
                let span = panel.cell.column_span.clamp(1, columns);
                let panel_width = column_width * span as f32 + grid.h_gap * (span - 1) as f32;
                render_panel(ui, panel, panel_width);
            }
        });
    }
}

/// Width of one grid column once the gaps are removed.
pub fn column_width(available: f32, columns: usize, gap: f32) -> f32 {
    let columns = columns.max(1);
    ((available - gap * (columns - 1) as f32) / columns as f32).max(0.0)
}

fn render_panel(ui: &mut egui::Ui, panel: &Panel, width: f32) {
    let (rect, _) =
        ui.allocate_exact_size(egui::vec2(width, panel.height), egui::Sense::hover());
    let painter = ui.painter();
    painter.rect_filled(rect, panel.corner_radius, colour(panel.background));
    painter.text(
        rect.center(),
        egui::Align2::CENTER_CENTER,
        &panel.title,
        egui::FontId::proportional(panel.title_size),
        colour(panel.text_colour),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_width_accounts_for_gaps() {
        assert_eq!(column_width(860.0, 2, 20.0), 420.0);
        assert_eq!(column_width(100.0, 1, 20.0), 100.0);
        assert_eq!(column_width(10.0, 2, 20.0), 0.0);
    }
}
