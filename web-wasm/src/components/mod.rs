pub mod header;
pub mod settings_panel;
pub mod upload_area;
pub mod error_banner;
pub mod analyze_button;
pub mod score_card;
pub mod result_view;
