pub mod footer;
pub mod navigation;
pub mod whatsapp;
