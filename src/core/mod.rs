// Homestead Explorer - core/mod.rs
//
// Core logic layer: scene graph, window composer, tract data transforms.
// Dependencies: serde_json values, csv writers over `io::Write`.
// Must NOT depend on: ui, platform, app, or any file I/O.

pub mod export;
pub mod geojson;
pub mod layout;
pub mod model;
pub mod outreach;
pub mod scene;
pub mod tract;
