pub mod header;
pub mod notes_panel;
pub mod reading_card;
pub mod settings_panel;
pub mod today_page;
pub mod week_page;
pub mod why_page;
