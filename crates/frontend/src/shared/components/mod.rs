pub mod pagination_controls;
pub mod table_checkbox;
