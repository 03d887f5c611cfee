// src/presentation/http/controllers/mod.rs
pub mod articles;
pub mod auth;
pub mod editor;
pub mod journalist;
pub mod journalists;
pub mod publishers;
pub mod reader;
