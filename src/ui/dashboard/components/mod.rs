pub mod activity;
pub mod confirm;
pub mod footer;
pub mod form;
pub mod header;
pub mod stats;
pub mod table;
pub mod tabs;
pub mod toast;
