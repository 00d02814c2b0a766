//! Core conversion building blocks: parameters, color normalization and the
//! per-file decode/encode step. These are internal primitives consumed by the
//! high-level `api` module.
pub mod params;
pub mod processing;
