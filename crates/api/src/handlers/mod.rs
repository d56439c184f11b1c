pub mod admin;
pub mod contact;
pub mod health;
pub mod page;
pub mod project;
pub mod service;
pub mod ui_block;
