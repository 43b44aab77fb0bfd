// src/core/mod.rs

pub mod normalize;
pub mod sanitize;

pub use normalize::{normalize, normalize_class, ClassId};
