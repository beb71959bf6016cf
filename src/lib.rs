// Library exports for testing

pub mod config;
pub mod guard;
pub mod session;
pub mod web;
