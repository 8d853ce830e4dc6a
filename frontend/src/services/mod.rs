pub mod api;
pub mod auth;
pub mod download;
pub mod logging;
pub mod reminder;
