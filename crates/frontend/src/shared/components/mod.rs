pub mod export_buttons;
pub mod number_field;
pub mod page_header;
pub mod pagination_controls;
