// Homestead Explorer - ui/panels/header.rs
//
// Red title bar. The title takes the remaining width; the action buttons sit
// at the right edge. Buttons are drawn but their responses are dropped.

use crate::core::scene::Header;
use crate::ui::theme::colour;

/// Render the header bar as a top panel.
pub fn render(ctx: &egui::Context, header: &Header) {
    let frame = egui::Frame::default()
        .fill(colour(header.background))
        .inner_margin(header.padding)
        .corner_radius(header.corner_radius);

    egui::TopBottomPanel::top("header")
        .frame(frame)
        .resizable(false)
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.spacing_mut().item_spacing.x = header.spacing;
                ui.label(
                    egui::RichText::new(&header.title)
                        .size(header.title_size)
                        .strong()
                        .color(colour(header.text_colour)),
                );

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.spacing_mut().item_spacing.x = header.button_spacing;
                    // Right-to-left layout: add in reverse to keep reading order.
                    for button in header.buttons.iter().rev() {
                        let (v, h) = button.padding;
                        ui.spacing_mut().button_padding = egui::vec2(h, v);
                        ui.add(
                            egui::Button::new(
                                egui::RichText::new(&button.label)
                                    .color(colour(button.text_colour)),
                            )
                            .fill(colour(button.background)),
                        );
                    }
                });
            });
        });
}
