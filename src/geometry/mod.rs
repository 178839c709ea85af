//! Geometry primitives for the screen model
//!
//! This module provides the two spatial building blocks:
//! - [`point`]: integer screen coordinates with Euclidean distance
//! - [`region`]: axis-aligned rectangles with inclusive containment
//!
//! # Determinism
//!
//! Distances are `f64` values derived from integer coordinates through exact
//! conversions, so equal inputs always compare equal. The screen model's
//! nearest-icon tie detection uses exact floating-point equality and relies
//! on this property.

pub mod point;
pub mod region;
