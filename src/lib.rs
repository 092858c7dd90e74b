// src/lib.rs
// DOCUMENTATION: Library root shared by the server and the populate tool
// PURPOSE: Expose modules for binaries and integration tests

pub mod config;
pub mod db;
pub mod errors;
pub mod forms;
pub mod handlers;
pub mod models;
pub mod services;
pub mod templates;
