use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Settings block: borders plus the language, mode and size rows
const SETTINGS_HEIGHT: u16 = 5;

/// Main layout structure
pub struct MainLayout {
    pub title_area: Rect,
    pub settings_area: Rect,
    pub idea_area: Rect,
    pub tags_area: Rect,
    pub combination_area: Rect,
    pub actions_area: Rect,
    pub swatch_area: Rect,
    pub history_area: Rect,
    pub footer_area: Rect,
    pub keybindings_area: Rect,
    pub status_area: Rect,
}

/// Create the main layout
/// - Top: title (1 row), settings block with one selector per row (5 rows)
/// - Middle: split horizontally
///   - Left (60%): idea, tags, combination fields, Combine/Copy buttons
///   - Right (40%): color swatches above the history
/// - Bottom: Clear/Reset footer (1 row), keybindings bar (1 row),
///   status notice (1 row)
pub fn create_layout(area: Rect) -> MainLayout {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),               // Title
            Constraint::Length(SETTINGS_HEIGHT), // Settings
            Constraint::Min(0),                  // Main content
            Constraint::Length(1),               // Clear/Reset footer
            Constraint::Length(1),               // Keybindings
            Constraint::Length(1),               // Status
        ])
        .split(area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(rows[2]);

    let fields = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),      // Idea (single line)
            Constraint::Percentage(45), // Tags
            Constraint::Min(3),         // Combination
            Constraint::Length(1),      // Action buttons
        ])
        .split(columns[0]);

    let side = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Swatches
            Constraint::Min(0),    // History
        ])
        .split(columns[1]);

    MainLayout {
        title_area: rows[0],
        settings_area: rows[1],
        idea_area: fields[0],
        tags_area: fields[1],
        combination_area: fields[2],
        actions_area: fields[3],
        swatch_area: side[0],
        history_area: side[1],
        footer_area: rows[3],
        keybindings_area: rows[4],
        status_area: rows[5],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_layout() {
        let area = Rect::new(0, 0, 100, 40);
        let layout = create_layout(area);

        assert_eq!(layout.title_area.height, 1);
        assert_eq!(layout.settings_area.height, SETTINGS_HEIGHT);
        assert_eq!(layout.idea_area.height, 3);
        assert!(layout.tags_area.height > 0);
        assert!(layout.combination_area.height >= 3);
        assert_eq!(layout.actions_area.height, 1);
        assert_eq!(layout.swatch_area.height, 3);
        assert!(layout.history_area.height > 0);
        assert_eq!(layout.footer_area.height, 1);
        assert_eq!(layout.footer_area.width, area.width);
        assert_eq!(layout.keybindings_area.height, 1);
        assert_eq!(layout.status_area.height, 1);

        assert!(layout.idea_area.width > layout.history_area.width);
        assert_eq!(layout.history_area.x, layout.swatch_area.x);
    }

    #[test]
    fn test_layout_stacks_fields() {
        let layout = create_layout(Rect::new(0, 0, 80, 30));
        assert!(layout.idea_area.y < layout.tags_area.y);
        assert!(layout.tags_area.y < layout.combination_area.y);
        assert!(layout.combination_area.y < layout.actions_area.y);
    }

    #[test]
    fn test_layout_fits_standard_terminal() {
        let layout = create_layout(Rect::new(0, 0, 80, 24));
        assert_eq!(layout.idea_area.height, 3);
        assert!(layout.tags_area.height >= 3);
        assert!(layout.combination_area.height >= 3);
        assert_eq!(layout.actions_area.height, 1);
        assert!(layout.history_area.height >= 3);
        assert_eq!(layout.status_area.y + layout.status_area.height, 24);
    }
}
