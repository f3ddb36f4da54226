// Homestead Explorer - ui/theme.rs
//
// Colour conversion and egui style helpers.
// No dependencies on app state.

use crate::core::model::Rgb;
use egui::Color32;

/// Convert a scene colour to an egui colour.
pub fn colour(rgb: Rgb) -> Color32 {
    Color32::from_rgb(rgb.r, rgb.g, rgb.b)
}

/// Text colour used on the white sidebar.
pub const SIDEBAR_TEXT: Color32 = Color32::from_rgb(31, 41, 55); // Gray 800

/// Apply the light visuals the layout is designed against.
///
/// The mockup has fixed light colours, so the OS dark-mode preference is
/// ignored.
pub fn apply(ctx: &egui::Context) {
    ctx.set_visuals(egui::Visuals::light());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::model::palette;

    #[test]
    fn test_colour_conversion() {
        assert_eq!(colour(palette::HEADER_RED), Color32::from_rgb(0xe4, 0x25, 0x24));
        assert_eq!(colour(Rgb::WHITE), Color32::WHITE);
    }
}
