// src/services/mod.rs

pub mod resource;

pub use resource::{Page, ResourceManager};
