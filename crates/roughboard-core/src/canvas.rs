//! Canvas state: element store, interaction state and the store observer.

use crate::config::BoardConfig;
use crate::element::Generator;
use crate::input::PointerEvent;
use crate::interaction::{Action, CursorHint, InteractionState, Mutation};
use crate::render::StoreObserver;
use crate::store::{ElementStore, StoreResult};
use crate::tools::ToolKind;

/// A whiteboard session.
///
/// Owns the element store and the interaction state, feeds pointer events
/// through the state machine and notifies the observer after every store
/// change. Each event is handled to completion, redraw included, before the
/// call returns.
pub struct Canvas<G: Generator, O> {
    store: ElementStore<G>,
    state: InteractionState,
    observer: O,
}

impl<G, O> Canvas<G, O>
where
    G: Generator,
    O: StoreObserver<G::Drawable>,
{
    /// Create an empty canvas with the default tool.
    pub fn new(generator: G, observer: O) -> Self {
        Self {
            store: ElementStore::new(generator),
            state: InteractionState::default(),
            observer,
        }
    }

    /// Create an empty canvas using the configured default tool.
    pub fn with_config(config: &BoardConfig, generator: G, observer: O) -> Self {
        let mut canvas = Self::new(generator, observer);
        canvas.state = InteractionState::new(config.default_tool);
        canvas
    }

    pub fn store(&self) -> &ElementStore<G> {
        &self.store
    }

    pub fn state(&self) -> &InteractionState {
        &self.state
    }

    pub fn tool(&self) -> ToolKind {
        self.state.tool
    }

    pub fn action(&self) -> &Action {
        &self.state.action
    }

    pub fn observer(&self) -> &O {
        &self.observer
    }

    pub fn observer_mut(&mut self) -> &mut O {
        &mut self.observer
    }

    /// Select a tool. Takes effect from the next pointer event.
    pub fn set_tool(&mut self, tool: ToolKind) {
        log::debug!("Tool set to {}", tool);
        self.state = self.state.with_tool(tool);
    }

    /// Handle one pointer event and return the hover cursor hint, if any.
    pub fn handle_pointer_event(&mut self, event: PointerEvent) -> Option<CursorHint> {
        let transition = self.state.handle(event, self.store.elements());
        if transition.state.action != self.state.action {
            log::debug!("{:?} -> {:?}", self.state.action, transition.state.action);
        }
        self.state = transition.state;

        if let Some(mutation) = transition.mutation {
            match self.apply(mutation) {
                Ok(()) => self.observer.store_changed(self.store.elements()),
                Err(err) => log::warn!("Ignoring {:?}: {}", mutation, err),
            }
        }
        transition.cursor
    }

    pub fn pointer_down(&mut self, x: f64, y: f64) -> Option<CursorHint> {
        self.handle_pointer_event(PointerEvent::down(x, y))
    }

    pub fn pointer_move(&mut self, x: f64, y: f64) -> Option<CursorHint> {
        self.handle_pointer_event(PointerEvent::moved(x, y))
    }

    pub fn pointer_up(&mut self) -> Option<CursorHint> {
        self.handle_pointer_event(PointerEvent::Up)
    }

    /// Redraw without a store change, e.g. after the surface was resized.
    pub fn refresh(&mut self) {
        self.observer.store_changed(self.store.elements());
    }

    fn apply(&mut self, mutation: Mutation) -> StoreResult<()> {
        match mutation {
            Mutation::Append { kind, endpoints } => {
                self.store.append(kind, endpoints);
                Ok(())
            }
            Mutation::Replace { id, endpoints, kind } => self.store.replace(id, endpoints, kind),
        }
    }
}
