pub mod error_view;
pub mod export_buttons;
pub mod header;
pub mod poster_template;
pub mod processing;
pub mod upload_area;
