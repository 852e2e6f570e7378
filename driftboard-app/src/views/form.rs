//! Project input form

use driftboard::{AddProject, DriftboardError, Execute, ProjectStore};
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};
use ratatui::Frame;
use serde_json::Value;

/// Rendered form height including its border
pub const FORM_HEIGHT: u16 = 6;

/// The three input fields, in focus order
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FormField {
    #[default]
    Title,
    Description,
    People,
}

impl FormField {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Title => "Title",
            Self::Description => "Description",
            Self::People => "People",
        }
    }

    fn next(self) -> Self {
        match self {
            Self::Title => Self::Description,
            Self::Description => Self::People,
            Self::People => Self::Title,
        }
    }

    fn prev(self) -> Self {
        match self {
            Self::Title => Self::People,
            Self::Description => Self::Title,
            Self::People => Self::Description,
        }
    }
}

/// Three-field input form for new projects.
///
/// Holds the raw field text exactly as typed. Submission validates all
/// three fields; the fields are cleared only when the project was
/// actually added, so a rejected submission keeps what the user entered.
#[derive(Debug, Default)]
pub struct ProjectForm {
    pub title: String,
    pub description: String,
    pub people: String,
    focus: FormField,
}

impl ProjectForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn focus(&self) -> FormField {
        self.focus
    }

    pub fn set_focus(&mut self, field: FormField) {
        self.focus = field;
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    /// Append a typed character to the focused field
    pub fn input(&mut self, c: char) {
        if !c.is_control() {
            self.value_mut(self.focus).push(c);
        }
    }

    /// Delete the last character of the focused field
    pub fn backspace(&mut self) {
        self.value_mut(self.focus).pop();
    }

    pub fn value(&self, field: FormField) -> &str {
        match field {
            FormField::Title => &self.title,
            FormField::Description => &self.description,
            FormField::People => &self.people,
        }
    }

    fn value_mut(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::Title => &mut self.title,
            FormField::Description => &mut self.description,
            FormField::People => &mut self.people,
        }
    }

    /// Submit the raw field values as an AddProject command.
    ///
    /// On success the fields are cleared and the created project is
    /// returned; on a validation failure the store is untouched and the
    /// fields keep their contents.
    pub fn submit(&mut self, store: &mut ProjectStore) -> driftboard::Result<Value> {
        let people: u32 = self
            .people
            .trim()
            .parse()
            .map_err(|_| DriftboardError::invalid_value("people", "not a whole number"))?;

        let result = AddProject::new(self.title.clone())
            .with_description(self.description.clone())
            .with_people(people)
            .execute(store)?;

        self.clear();
        Ok(result)
    }

    /// Empty all three fields and reset focus
    pub fn clear(&mut self) {
        self.title.clear();
        self.description.clear();
        self.people.clear();
        self.focus = FormField::Title;
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let block = Block::bordered().title("New Project");
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let mut lines = Vec::new();
        for field in [FormField::Title, FormField::Description, FormField::People] {
            let focused = field == self.focus();
            let label_style = if focused {
                Style::new().fg(Color::Yellow).add_modifier(Modifier::BOLD)
            } else {
                Style::new()
            };

            let mut spans = vec![
                Span::styled(format!("{:<13}", format!("{}:", field.label())), label_style),
                Span::raw(self.value(field).to_string()),
            ];
            if focused {
                spans.push(Span::styled("\u{2588}", Style::new().fg(Color::Yellow)));
            }
            lines.push(Line::from(spans));
        }
        lines.push(Line::styled(
            "Enter adds the project - Tab switches fields - Esc quits",
            Style::new().fg(Color::DarkGray),
        ));

        frame.render_widget(Paragraph::new(lines), inner);
    }
}
