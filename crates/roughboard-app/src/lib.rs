//! Roughboard Application
//!
//! Host shells around the core: the browser entry point wiring the page's
//! canvas and toolbar, and a headless gesture replay used from the command
//! line.

mod replay;

pub use replay::{ReplayError, ReplayStep, parse_script, replay};

#[cfg(target_arch = "wasm32")]
mod canvas2d;

#[cfg(target_arch = "wasm32")]
mod web;

#[cfg(target_arch = "wasm32")]
pub use web::run_wasm;
