pub mod header;
pub mod icon_input;
pub mod layout;
pub mod mobile_menu;
pub mod progress_bar;
pub mod select;
pub mod theme;

use crate::app::state::AppState;
use icon_input::IconInput;
use progress_bar::ProgressBar;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Paragraph};
use select::Select;
use theme::Theme;

const LABEL_WIDTH: u16 = 10;
const HELP: &str = "m menu · ←/→ nav · +/- progress · p bar size · s sort · / search · i input size · q quit";

pub fn render(frame: &mut Frame, state: &AppState) {
    let area = frame.area();
    frame.render_widget(Block::default().style(Theme::page()), area);

    let app_layout = layout::compute_layout(area);
    header::render_super_header(frame, app_layout.super_header);
    header::render(frame, app_layout.header, state);
    render_body(frame, app_layout.body, state);

    // Drawn last so the backdrop covers the page
    mobile_menu::render(frame, state);
}

fn render_body(frame: &mut Frame, area: Rect, state: &AppState) {
    let inner = Rect::new(
        area.x + 2,
        area.y + 1,
        area.width.saturating_sub(4),
        area.height.saturating_sub(1),
    );
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Progress
            Constraint::Length(2), // Select
            Constraint::Length(3), // Search
            Constraint::Min(0),
            Constraint::Length(1), // Status
            Constraint::Length(1), // Help
        ])
        .split(inner);

    let progress_area = labelled(frame, rows[0], "Progress");
    frame.render_widget(
        ProgressBar::new(state.progress, state.progress_size),
        progress_area,
    );

    let select_area = labelled(frame, rows[1], &state.sort.label);
    frame.render_widget(Select::new(&state.sort), select_area);

    let search_area = labelled(frame, rows[2], "Search");
    let input = IconInput::new(&state.search, "Search…");
    let cursor = input.cursor_offset();
    let text_row = input.text_row();
    frame.render_widget(input, search_area);
    if state.search.focused && !state.menu.modal.is_visible() && search_area.width > 0 {
        let x = (search_area.x + cursor).min(search_area.right().saturating_sub(1));
        let y = (search_area.y + text_row).min(search_area.bottom().saturating_sub(1));
        frame.set_cursor_position((x, y));
    }

    frame.render_widget(
        Paragraph::new(format!(" {} ", state.status_line())).style(Theme::super_header()),
        rows[4],
    );
    frame.render_widget(Paragraph::new(HELP).style(Theme::muted()), rows[5]);
}

/// Draw a muted label at the left of `row` and return the space after it.
fn labelled(frame: &mut Frame, row: Rect, label: &str) -> Rect {
    let label_w = LABEL_WIDTH.min(row.width);
    frame.render_widget(
        Paragraph::new(Span::styled(label, Theme::muted())),
        Rect::new(row.x, row.y, label_w, 1.min(row.height)),
    );
    Rect::new(row.x + label_w, row.y, row.width - label_w, row.height)
}
