pub mod api;
pub mod config;
pub mod data;
pub mod filter;
pub mod pages;
pub mod render;
pub mod session;
