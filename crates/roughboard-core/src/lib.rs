//! Roughboard Core Library
//!
//! Platform-agnostic shape model, hit-testing and interaction state machine
//! for the Roughboard whiteboard.

pub mod canvas;
pub mod config;
pub mod element;
pub mod geometry;
pub mod input;
pub mod interaction;
pub mod render;
pub mod store;
pub mod tools;

pub use canvas::Canvas;
pub use config::{BoardConfig, ConfigError, SerializableColor, SketchStyle};
pub use element::{Element, ElementKind, Endpoints, Generator, create_element};
pub use geometry::{
    LINE_HIT_TOLERANCE, adjust_element_coordinates, distance, element_at_position, is_within_element, normalize,
};
pub use input::PointerEvent;
pub use interaction::{Action, CursorHint, InteractionState, Mutation, SelectedElement, Transition};
pub use render::{RenderLoop, StoreObserver, Surface};
pub use store::{ElementStore, StoreError, StoreResult};
pub use tools::{ToolError, ToolKind};
