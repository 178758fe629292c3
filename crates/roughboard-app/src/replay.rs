//! Headless replay of recorded gestures.
//!
//! A script is a JSON array of steps, each either a tool change or a pointer
//! event:
//!
//! ```json
//! [
//!   { "tool": "rectangle" },
//!   { "pointer": { "type": "down", "position": { "x": 60.0, "y": 60.0 } } },
//!   { "pointer": { "type": "move", "position": { "x": 10.0, "y": 10.0 } } },
//!   { "pointer": { "type": "up" } }
//! ]
//! ```

use roughboard_core::config::ConfigError;
use roughboard_core::element::Generator;
use roughboard_core::render::StoreObserver;
use roughboard_core::{Canvas, PointerEvent, ToolKind};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Replay errors.
#[derive(Debug, Error)]
pub enum ReplayError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid script: {0}")]
    Script(#[source] serde_json::Error),
    #[error("Serialization error: {0}")]
    Serialization(#[source] serde_json::Error),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("Usage: {0}")]
    Usage(String),
}

/// One recorded input step.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReplayStep {
    Tool(ToolKind),
    Pointer(PointerEvent),
}

/// Parse a JSON replay script.
pub fn parse_script(json: &str) -> Result<Vec<ReplayStep>, ReplayError> {
    serde_json::from_str(json).map_err(ReplayError::Script)
}

/// Feed every step to the canvas, in order.
pub fn replay<G, O>(canvas: &mut Canvas<G, O>, steps: &[ReplayStep])
where
    G: Generator,
    O: StoreObserver<G::Drawable>,
{
    for step in steps {
        match *step {
            ReplayStep::Tool(tool) => canvas.set_tool(tool),
            ReplayStep::Pointer(event) => {
                canvas.handle_pointer_event(event);
            }
        }
    }
    log::info!(
        "Replayed {} steps, {} elements",
        steps.len(),
        canvas.store().len()
    );
}
