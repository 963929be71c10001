pub mod chat_page_view;
pub mod document_view;
pub mod mode_selector_view;
pub mod notice_view;
pub mod turn_view;
pub mod ui_lib;
