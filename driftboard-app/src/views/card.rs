//! Project card view

use driftboard::Project;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Text};

/// Rendered card height including its border
pub const CARD_HEIGHT: u16 = 5;

/// Build the three-line card body for a project record: title, team size,
/// description.
pub fn project_card(project: &Project) -> Text<'static> {
    Text::from(vec![
        Line::styled(
            project.title.clone(),
            Style::new().add_modifier(Modifier::BOLD),
        ),
        Line::from(format!("{} people assigned", project.people)),
        Line::from(project.description.clone()),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use driftboard::ProjectStore;

    fn line_text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_card_renders_all_three_slots() {
        let mut store = ProjectStore::new();
        let project = store.add_project("Build site", "design and build", 4);

        let card = project_card(&project);
        assert_eq!(card.lines.len(), 3);
        assert_eq!(line_text(&card.lines[0]), "Build site");
        assert_eq!(line_text(&card.lines[1]), "4 people assigned");
        assert_eq!(line_text(&card.lines[2]), "design and build");
    }
}
