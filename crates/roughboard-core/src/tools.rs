//! Tool system for the whiteboard.

use crate::element::ElementKind;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Tool errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ToolError {
    #[error("Unknown tool: {0}")]
    Unknown(String),
    #[error("Tool {0} does not create shapes")]
    NoShapeKind(ToolKind),
}

/// Available tools.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ToolKind {
    #[default]
    Line,
    Rectangle,
    Select,
}

impl ToolKind {
    /// All tools, in toolbar order.
    pub const ALL: [ToolKind; 3] = [ToolKind::Line, ToolKind::Rectangle, ToolKind::Select];

    /// Name used by the toolbar and configuration files.
    pub fn name(self) -> &'static str {
        match self {
            ToolKind::Line => "line",
            ToolKind::Rectangle => "rectangle",
            ToolKind::Select => "select",
        }
    }

    /// The element kind this tool draws, if it is a drawing tool.
    pub fn shape_kind(self) -> Option<ElementKind> {
        match self {
            ToolKind::Line => Some(ElementKind::Line),
            ToolKind::Rectangle => Some(ElementKind::Rectangle),
            ToolKind::Select => None,
        }
    }
}

impl fmt::Display for ToolKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ToolKind {
    type Err = ToolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ToolKind::ALL
            .into_iter()
            .find(|tool| tool.name() == s)
            .ok_or_else(|| ToolError::Unknown(s.to_string()))
    }
}

impl TryFrom<ToolKind> for ElementKind {
    type Error = ToolError;

    fn try_from(tool: ToolKind) -> Result<Self, Self::Error> {
        tool.shape_kind().ok_or(ToolError::NoShapeKind(tool))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_tool_is_line() {
        assert_eq!(ToolKind::default(), ToolKind::Line);
    }

    #[test]
    fn test_parse_tool_names() {
        for tool in ToolKind::ALL {
            assert_eq!(tool.name().parse::<ToolKind>(), Ok(tool));
        }
    }

    #[test]
    fn test_unknown_tool_rejected() {
        assert_eq!(
            "circle".parse::<ToolKind>(),
            Err(ToolError::Unknown("circle".to_string()))
        );
        assert!("Line".parse::<ToolKind>().is_err());
    }

    #[test]
    fn test_select_has_no_shape_kind() {
        assert_eq!(
            ElementKind::try_from(ToolKind::Select),
            Err(ToolError::NoShapeKind(ToolKind::Select))
        );
        assert_eq!(ElementKind::try_from(ToolKind::Rectangle), Ok(ElementKind::Rectangle));
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&ToolKind::Rectangle).unwrap();
        assert_eq!(json, "\"rectangle\"");
        let tool: ToolKind = serde_json::from_str("\"select\"").unwrap();
        assert_eq!(tool, ToolKind::Select);
    }
}
