//! Project list column

use crate::state::Regions;
use crate::views::card::{project_card, CARD_HEIGHT};
use driftboard::{Project, ProjectStatus, SharedProjectStore};
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, Paragraph};
use ratatui::Frame;
use std::cell::RefCell;
use std::rc::Rc;

/// One board column, showing every project with its assigned status.
///
/// The item cache is rebuilt from scratch on every store notification -
/// no diffing. `droppable` marks the column as the current drop target
/// during a drag.
pub struct ProjectColumn {
    status: ProjectStatus,
    items: Rc<RefCell<Vec<Project>>>,
    droppable: bool,
}

impl ProjectColumn {
    pub fn new(status: ProjectStatus) -> Self {
        Self {
            status,
            items: Rc::new(RefCell::new(Vec::new())),
            droppable: false,
        }
    }

    /// Wire the store subscription: every notification replaces the item
    /// cache with the snapshot filtered on this column's status.
    pub fn configure(&self, store: &SharedProjectStore) {
        let status = self.status;
        let items = Rc::clone(&self.items);
        store.borrow_mut().subscribe(Box::new(move |snapshot| {
            *items.borrow_mut() = snapshot
                .iter()
                .filter(|p| p.has_status(status))
                .cloned()
                .collect();
        }));
    }

    pub fn set_droppable(&mut self, droppable: bool) {
        self.droppable = droppable;
    }

    pub fn is_droppable(&self) -> bool {
        self.droppable
    }

    /// Column heading, e.g. "ACTIVE PROJECTS"
    pub fn title(&self) -> String {
        format!("{} PROJECTS", self.status.as_str().to_uppercase())
    }

    /// Copy of the cached items, for assertions and hit-test callers
    pub fn projects(&self) -> Vec<Project> {
        self.items.borrow().clone()
    }

    /// Draw the column and record its hit regions for this frame
    pub fn render(&self, frame: &mut Frame, area: Rect, regions: &mut Regions) {
        let border_style = if self.droppable {
            Style::new().fg(Color::Yellow)
        } else {
            Style::new()
        };
        let block = Block::bordered()
            .title(self.title())
            .border_style(border_style);
        let inner = block.inner(area);
        frame.render_widget(block, area);
        regions.record_column(self.status, area);

        let items = self.items.borrow();
        let mut y = inner.y;
        for project in items.iter() {
            if y + CARD_HEIGHT > inner.bottom() {
                break;
            }
            let rect = Rect::new(inner.x, y, inner.width, CARD_HEIGHT);
            frame.render_widget(
                Paragraph::new(project_card(project)).block(Block::bordered()),
                rect,
            );
            regions.record_card(project.id.clone(), rect);
            y += CARD_HEIGHT;
        }
    }
}
