// Homestead Explorer - ui/panels/sidebar.rs
//
// Filter sidebar. Each control binds to the widget state held in the scene
// graph; no control reports its changes anywhere.

use crate::core::scene::{Control, FilterGroup, RangeSlider, Select, Sidebar};
use crate::ui::theme::{colour, SIDEBAR_TEXT};

/// Height of the strip below the slider holding tick marks and labels.
const TICK_STRIP_HEIGHT: f32 = 22.0;
const TICK_LENGTH: f32 = 5.0;
const TICK_LABEL_SIZE: f32 = 9.0;

/// Render the sidebar as a fixed-width left panel.
pub fn render(ctx: &egui::Context, sidebar: &mut Sidebar) {
    let frame = egui::Frame::default()
        .fill(colour(sidebar.background))
        .inner_margin(sidebar.padding)
        .corner_radius(sidebar.corner_radius);

    egui::SidePanel::left("sidebar")
        .frame(frame)
        .exact_width(sidebar.width)
        .resizable(false)
        .show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .id_salt("sidebar_filters")
                .auto_shrink([false; 2])
                .show(ui, |ui| {
                    ui.visuals_mut().override_text_color = Some(SIDEBAR_TEXT);
                    let spacing = sidebar.spacing;
                    for (i, group) in sidebar.groups.iter_mut().enumerate() {
                        if i > 0 {
                            ui.add_space(spacing);
                        }
                        render_group(ui, group, i);
                    }
                });
        });
}

fn render_group(ui: &mut egui::Ui, group: &mut FilterGroup, index: usize) {
    ui.vertical(|ui| {
        ui.spacing_mut().item_spacing.y = group.spacing;
        ui.label(egui::RichText::new(&group.title).strong());
        for (j, control) in group.controls.iter_mut().enumerate() {
            match control {
                Control::Checkbox(cb) => {
                    ui.checkbox(&mut cb.checked, cb.label.as_str());
                }
                Control::Slider(slider) => render_slider(ui, slider),
                Control::Labels(labels) => {
                    ui.horizontal(|ui| {
                        ui.spacing_mut().item_spacing.x = group.spacing;
                        for label in labels.iter() {
                            ui.label(label.as_str());
                        }
                    });
                }
                Control::Select(select) => render_select(ui, select, (index, j)),
            }
        }
    });
}

fn render_slider(ui: &mut egui::Ui, slider: &mut RangeSlider) {
    let track_width = ui.available_width();
    ui.spacing_mut().slider_width = track_width;
    let response = ui.add(
        egui::Slider::new(&mut slider.value, slider.min..=slider.max).show_value(false),
    );

    if !(slider.show_ticks || slider.show_tick_labels) {
        return;
    }

    let ticks = slider.ticks();
    let span = slider.max - slider.min;
    if ticks.is_empty() || span <= 0.0 {
        return;
    }

    let track = response.rect;
    let (strip, _) = ui.allocate_exact_size(
        egui::vec2(track.width(), TICK_STRIP_HEIGHT),
        egui::Sense::hover(),
    );
    let painter = ui.painter_at(strip.expand(TICK_LABEL_SIZE));
    let stroke = egui::Stroke::new(1.0, SIDEBAR_TEXT);
    // The slider handle never travels past its own radius from either edge.
    let inset = track.height() / 2.0;
    let usable = (track.width() - 2.0 * inset).max(0.0);

    for tick in ticks {
        let x = track.left() + inset + usable * ((tick - slider.min) / span) as f32;
        if slider.show_ticks {
            painter.line_segment(
                [
                    egui::pos2(x, strip.top()),
                    egui::pos2(x, strip.top() + TICK_LENGTH),
                ],
                stroke,
            );
        }
        if slider.show_tick_labels {
            painter.text(
                egui::pos2(x, strip.top() + TICK_LENGTH + 1.0),
                egui::Align2::CENTER_TOP,
                compact_amount(tick),
                egui::FontId::proportional(TICK_LABEL_SIZE),
                SIDEBAR_TEXT,
            );
        }
    }
}

fn render_select(ui: &mut egui::Ui, select: &mut Select, id: (usize, usize)) {
    let Select { options, selected } = select;
    let text = options.get(*selected).cloned().unwrap_or_default();
    egui::ComboBox::from_id_salt(("sidebar_select", id))
        .selected_text(text)
        .width(ui.available_width() * 0.6)
        .show_index(ui, selected, options.len(), |i| options[i].clone());
}

/// Short tick label: 0, 100K, 1M, 2.5M.
pub fn compact_amount(value: f64) -> String {
    let abs = value.abs();
    let (scaled, suffix) = if abs >= 1_000_000.0 {
        (value / 1_000_000.0, "M")
    } else if abs >= 1_000.0 {
        (value / 1_000.0, "K")
    } else {
        (value, "")
    };
    if (scaled.fract()).abs() < 1e-9 {
        format!("{scaled:.0}{suffix}")
    } else {
        format!("{scaled:.1}{suffix}")
    }
}
