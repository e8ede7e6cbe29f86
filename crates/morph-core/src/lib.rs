//! Core of the morphing point-cloud engine: procedural target-shape
//! generation plus the per-frame recurrence that pulls a persistent
//! particle buffer toward the selected shape under gesture control.
//!
//! The crate has no rendering or device dependencies. Embedders poll a
//! gesture source, call [`engine::MorphEngine::tick`] once per frame, and
//! upload [`engine::MorphEngine::positions`] however they like.

pub mod config;
pub mod engine;
pub mod gesture;
pub mod math;
pub mod particle;
pub mod shapes;
