//! Application state and event dispatch

use crate::drag::DragState;
use crate::views::{FormField, ProjectColumn, ProjectForm};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use driftboard::{Execute, MoveProject, ProjectId, ProjectStatus, ProjectStore, SharedProjectStore};
use ratatui::layout::{Position, Rect};

/// Generic re-entry prompt; the alert never carries field-level detail
const ALERT_MESSAGE: &str = "Invalid input - please enter again.";

/// Screen regions recorded while drawing, used to hit-test mouse events.
///
/// Rebuilt on every frame; coordinates are only valid for the frame they
/// were recorded in.
#[derive(Debug, Default, Clone)]
pub struct Regions {
    pub form: Rect,
    columns: Vec<(ProjectStatus, Rect)>,
    cards: Vec<(ProjectId, Rect)>,
}

impl Regions {
    pub fn clear(&mut self) {
        self.columns.clear();
        self.cards.clear();
    }

    pub fn record_column(&mut self, status: ProjectStatus, area: Rect) {
        self.columns.push((status, area));
    }

    pub fn record_card(&mut self, id: ProjectId, area: Rect) {
        self.cards.push((id, area));
    }

    /// The column under the given screen position, if any
    pub fn column_at(&self, x: u16, y: u16) -> Option<ProjectStatus> {
        self.columns
            .iter()
            .find(|(_, rect)| rect.contains(Position::new(x, y)))
            .map(|(status, _)| *status)
    }

    /// The card under the given screen position, if any
    pub fn card_at(&self, x: u16, y: u16) -> Option<&ProjectId> {
        self.cards
            .iter()
            .find(|(_, rect)| rect.contains(Position::new(x, y)))
            .map(|(id, _)| id)
    }

    /// The form field on the given row, when the position is inside the
    /// form. Field rows sit one per line inside the border.
    pub fn form_field_at(&self, x: u16, y: u16) -> Option<FormField> {
        if !self.form.contains(Position::new(x, y)) {
            return None;
        }
        match y.checked_sub(self.form.y + 1)? {
            0 => Some(FormField::Title),
            1 => Some(FormField::Description),
            2 => Some(FormField::People),
            _ => None,
        }
    }
}

/// Everything the event loop owns: the shared store, the views, the drag
/// machine, and the pending alert.
pub struct AppState {
    pub store: SharedProjectStore,
    pub form: ProjectForm,
    pub active: ProjectColumn,
    pub finished: ProjectColumn,
    pub drag: DragState,
    pub alert: Option<String>,
    pub should_quit: bool,
    pub regions: Regions,
}

impl AppState {
    /// Build the store and views and wire the column subscriptions
    pub fn new() -> Self {
        let store = ProjectStore::shared();
        let active = ProjectColumn::new(ProjectStatus::Active);
        let finished = ProjectColumn::new(ProjectStatus::Finished);
        active.configure(&store);
        finished.configure(&store);

        Self {
            store,
            form: ProjectForm::new(),
            active,
            finished,
            drag: DragState::default(),
            alert: None,
            should_quit: false,
            regions: Regions::default(),
        }
    }

    /// Handle a key press
    pub fn on_key(&mut self, key: KeyEvent) {
        // A visible alert is blocking: the next key dismisses it and does
        // nothing else.
        if self.alert.is_some() {
            self.alert = None;
            return;
        }

        match key.code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Enter => self.submit_form(),
            KeyCode::Tab | KeyCode::Down => self.form.focus_next(),
            KeyCode::BackTab | KeyCode::Up => self.form.focus_prev(),
            KeyCode::Backspace => self.form.backspace(),
            KeyCode::Char(c) => self.form.input(c),
            _ => {}
        }
    }

    /// Handle a mouse event: press picks up a card, motion tracks the drop
    /// target, release performs or cancels the move
    pub fn on_mouse(&mut self, mouse: MouseEvent) {
        if self.alert.is_some() {
            return;
        }

        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if let Some(id) = self.regions.card_at(mouse.column, mouse.row) {
                    tracing::debug!(id = %id, "drag started");
                    self.drag.start(id.clone());
                } else if let Some(field) = self.regions.form_field_at(mouse.column, mouse.row) {
                    self.form.set_focus(field);
                }
            }
            MouseEventKind::Drag(MouseButton::Left) => {
                if self.drag.is_dragging() {
                    let target = self.regions.column_at(mouse.column, mouse.row);
                    self.drag.drag_over(target);
                    self.sync_drop_highlight();
                }
            }
            MouseEventKind::Up(MouseButton::Left) => {
                if let Some((id, status)) = self.drag.release() {
                    tracing::debug!(id = %id, status = %status, "card dropped");
                    let result =
                        MoveProject::new(id, status).execute(&mut self.store.borrow_mut());
                    match result {
                        Ok(_) => tracing::debug!(
                            active = self.active.projects().len(),
                            finished = self.finished.projects().len(),
                            "columns updated"
                        ),
                        Err(err) => tracing::error!(error = %err, "move failed"),
                    }
                }
                self.sync_drop_highlight();
            }
            _ => {}
        }
    }

    fn submit_form(&mut self) {
        let result = self.form.submit(&mut self.store.borrow_mut());
        match result {
            Ok(value) => tracing::info!(id = %value["id"], "project submitted"),
            Err(err) if err.is_input_error() => {
                tracing::warn!(error = %err, "form submission rejected");
                self.alert = Some(ALERT_MESSAGE.to_string());
            }
            Err(err) => tracing::error!(error = %err, "form submission failed"),
        }
    }

    fn sync_drop_highlight(&mut self) {
        let over = self.drag.target();
        self.active
            .set_droppable(over == Some(ProjectStatus::Active));
        self.finished
            .set_droppable(over == Some(ProjectStatus::Finished));
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
