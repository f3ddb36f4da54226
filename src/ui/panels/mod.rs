// Homestead Explorer - ui/panels/mod.rs
//
// One module per window region.

pub mod content;
pub mod header;
pub mod sidebar;
