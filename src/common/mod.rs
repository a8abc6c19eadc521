//! Common types and utilities shared by the writer and reader layers.

// Submodule declarations
pub mod color;
pub mod unit;
pub mod xml;

// Re-exports for convenience
pub use color::RGBColor;
