//! Roughboard Render Library
//!
//! The hand-drawn rendering collaborator for Roughboard: a seeded rough
//! generator producing sketch strokes, and surfaces that paint them.
//! The default surface records into a Vello scene.

mod rough;

#[cfg(feature = "vello-renderer")]
mod vello_impl;

pub use rough::{Primitive, RoughGenerator, Sketch};

#[cfg(feature = "vello-renderer")]
pub use vello_impl::VelloSurface;
