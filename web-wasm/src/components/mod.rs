//! UI components

pub mod all_types_modal;
pub mod header;
pub mod loading_spinner;
pub mod result_display;
pub mod upload_area;
