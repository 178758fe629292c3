//! Interaction state machine.
//!
//! Pointer events are folded into an [`InteractionState`] by pure transition
//! functions. Each transition returns the next state together with at most
//! one store [`Mutation`]; applying the mutation is left to the owner of the
//! store (see [`crate::canvas::Canvas`]).

use crate::element::{Element, ElementKind, Endpoints};
use crate::geometry::{adjust_element_coordinates, element_at_position};
use crate::input::PointerEvent;
use crate::tools::ToolKind;
use kurbo::{Point, Vec2};

/// Element captured at the start of a move gesture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SelectedElement {
    pub id: usize,
    pub kind: ElementKind,
    /// Endpoints at grab time.
    pub endpoints: Endpoints,
    /// Pointer position relative to `(x1, y1)` at grab time.
    pub offset_x: f64,
    pub offset_y: f64,
}

impl SelectedElement {
    fn grab<D>(element: &Element<D>, pointer: Point) -> Self {
        Self {
            id: element.id,
            kind: element.kind,
            endpoints: element.endpoints(),
            offset_x: pointer.x - element.x1,
            offset_y: pointer.y - element.y1,
        }
    }

    /// Endpoints translated so the grabbed point follows `pointer`.
    fn dragged_to(&self, pointer: Point) -> Endpoints {
        let offset = Vec2::new(self.offset_x, self.offset_y);
        self.endpoints.with_origin(pointer - offset)
    }
}

/// Current gesture.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Action {
    #[default]
    Idle,
    Drawing,
    /// Moving carries the grabbed element, so a selection only exists mid-move.
    Moving(SelectedElement),
}

/// Presentation hint for the pointer cursor while the select tool hovers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorHint {
    Default,
    Move,
}

impl CursorHint {
    /// CSS cursor keyword.
    pub fn css(self) -> &'static str {
        match self {
            CursorHint::Default => "default",
            CursorHint::Move => "move",
        }
    }
}

/// Store change requested by a transition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Mutation {
    Append { kind: ElementKind, endpoints: Endpoints },
    Replace { id: usize, endpoints: Endpoints, kind: ElementKind },
}

/// Result of feeding one pointer event to the state machine.
#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    pub state: InteractionState,
    pub mutation: Option<Mutation>,
    pub cursor: Option<CursorHint>,
}

/// Tool and gesture state for one page session.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct InteractionState {
    pub tool: ToolKind,
    pub action: Action,
}

impl InteractionState {
    pub fn new(tool: ToolKind) -> Self {
        Self {
            tool,
            action: Action::Idle,
        }
    }

    /// Same state with another tool selected.
    ///
    /// A gesture in progress keeps running; the new tool applies from the
    /// next event on.
    pub fn with_tool(self, tool: ToolKind) -> Self {
        Self { tool, ..self }
    }

    /// The element grabbed by the current move gesture.
    pub fn selected(&self) -> Option<&SelectedElement> {
        match &self.action {
            Action::Moving(selected) => Some(selected),
            _ => None,
        }
    }

    pub fn is_idle(&self) -> bool {
        self.action == Action::Idle
    }

    /// Feed one pointer event, reading the current elements in store order.
    pub fn handle<D>(&self, event: PointerEvent, elements: &[Element<D>]) -> Transition {
        match event {
            PointerEvent::Down { position } => self.pointer_down(position, elements),
            PointerEvent::Move { position } => self.pointer_move(position, elements),
            PointerEvent::Up => self.pointer_up(elements),
        }
    }

    fn pointer_down<D>(&self, pointer: Point, elements: &[Element<D>]) -> Transition {
        match self.tool.shape_kind() {
            Some(kind) => Transition {
                state: Self {
                    action: Action::Drawing,
                    ..*self
                },
                mutation: Some(Mutation::Append {
                    kind,
                    endpoints: Endpoints::at(pointer),
                }),
                cursor: None,
            },
            None => match element_at_position(pointer.x, pointer.y, elements) {
                Some(element) => {
                    let selected = SelectedElement::grab(element, pointer);
                    log::debug!("Grabbed element {} at {:?}", element.id, pointer);
                    Transition {
                        state: Self {
                            action: Action::Moving(selected),
                            ..*self
                        },
                        mutation: None,
                        cursor: None,
                    }
                }
                None => self.unchanged(),
            },
        }
    }

    fn pointer_move<D>(&self, pointer: Point, elements: &[Element<D>]) -> Transition {
        let cursor = (self.tool == ToolKind::Select).then(|| {
            if element_at_position(pointer.x, pointer.y, elements).is_some() {
                CursorHint::Move
            } else {
                CursorHint::Default
            }
        });

        let mutation = match &self.action {
            Action::Idle => None,
            Action::Drawing => elements.last().map(|last| Mutation::Replace {
                id: last.id,
                endpoints: Endpoints::from_points(last.start(), pointer),
                kind: self.replacement_kind(last.kind),
            }),
            Action::Moving(selected) => Some(Mutation::Replace {
                id: selected.id,
                endpoints: selected.dragged_to(pointer),
                kind: self.replacement_kind(selected.kind),
            }),
        };

        Transition {
            state: *self,
            mutation,
            cursor,
        }
    }

    fn pointer_up<D>(&self, elements: &[Element<D>]) -> Transition {
        let mutation = match self.action {
            Action::Drawing => elements.last().map(|last| Mutation::Replace {
                id: last.id,
                endpoints: adjust_element_coordinates(last),
                kind: last.kind,
            }),
            Action::Idle | Action::Moving(_) => None,
        };
        Transition {
            state: Self {
                action: Action::Idle,
                ..*self
            },
            mutation,
            cursor: None,
        }
    }

    /// Kind for an element rebuilt mid-gesture.
    ///
    /// A drawing tool picked mid-gesture passes its kind through to the
    /// element. The select tool has no kind of its own, so the element keeps
    /// the one it has.
    fn replacement_kind(&self, current: ElementKind) -> ElementKind {
        self.tool.shape_kind().unwrap_or(current)
    }

    fn unchanged(&self) -> Transition {
        Transition {
            state: *self,
            mutation: None,
            cursor: None,
        }
    }
}
