use crate::app::state::AppState;
use crate::modal::overlay;
use crate::ui::header::NAV_LINKS;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

pub const DISMISS_LABEL: &str = "Dismiss menu";
pub const LEGAL_LINKS: [&str; 3] = ["Terms and Conditions", "Privacy Policy", "Contact Us"];

/// Rows of the menu body: button, spacer, categories, spacer, legal links.
pub const CONTENT_HEIGHT: u16 = 1 + 1 + NAV_LINKS.len() as u16 + 1 + LEGAL_LINKS.len() as u16;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuItem {
    Dismiss,
    Category(&'static str),
    Legal(&'static str),
}

impl MenuItem {
    pub fn label(self) -> &'static str {
        match self {
            MenuItem::Dismiss => DISMISS_LABEL,
            MenuItem::Category(label) | MenuItem::Legal(label) => label,
        }
    }
}

pub fn items() -> Vec<MenuItem> {
    std::iter::once(MenuItem::Dismiss)
        .chain(NAV_LINKS.iter().map(|&l| MenuItem::Category(l)))
        .chain(LEGAL_LINKS.iter().map(|&l| MenuItem::Legal(l)))
        .collect()
}

/// Content row of item `index`, counting the spacers.
fn row_of(index: usize) -> u16 {
    let categories = NAV_LINKS.len();
    match index {
        0 => 0,
        i if i <= categories => 1 + i as u16,
        i => 2 + i as u16,
    }
}

/// Item under content row `row`, if any.
pub fn item_at_row(row: u16) -> Option<usize> {
    (0..items().len()).find(|&i| row_of(i) == row)
}

pub fn render(frame: &mut Frame, state: &AppState) {
    let view = state.menu.modal.view(frame.area());
    let selected = state.menu.selected;
    overlay::render(
        frame,
        &view,
        Some(|f: &mut Frame, area: Rect| render_content(f, area, selected)),
    );
}

fn render_content(frame: &mut Frame, area: Rect, selected: usize) {
    for (i, item) in items().into_iter().enumerate() {
        let row = row_of(i);
        if row >= area.height {
            break;
        }
        let rect = Rect::new(area.x, area.y + row, area.width, 1);
        let is_selected = i == selected;
        let paragraph = match item {
            MenuItem::Dismiss => {
                let style = if is_selected {
                    Theme::button_selected()
                } else {
                    Theme::button()
                };
                Paragraph::new(item.label())
                    .style(style)
                    .alignment(Alignment::Center)
            }
            MenuItem::Category(label) | MenuItem::Legal(label) => {
                let marker = if is_selected { "› " } else { "  " };
                Paragraph::new(format!("{}{}", marker, label)).style(Theme::menu_link(is_selected))
            }
        };
        frame.render_widget(paragraph, rect);
    }
}
