use crate::app::state::AppState;
use crate::ui::layout::{nav_spacing, Breakpoint};
use crate::ui::theme::{Theme, Weight};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};
use unicode_width::UnicodeWidthStr;

pub const LOGO: &str = "Sole&Ankle";
pub const NAV_LINKS: [&str; 6] = ["Sale", "New Releases", "Men", "Women", "Kids", "Collections"];
pub const MOBILE_ACTIONS: [&str; 3] = ["Bag", "Search", "Menu"];
const SUPER_HEADER_TEXT: &str = "Free shipping on domestic orders over $75!";
const MOBILE_ACTION_GAP: u16 = 2;

fn side_padding(bp: Breakpoint) -> u16 {
    if bp.matches(Breakpoint::Tablet) {
        2
    } else {
        4
    }
}

/// Row holding the logo, nav and actions.
fn content_row(area: Rect) -> Rect {
    let block = Block::default().borders(Borders::BOTTOM);
    let inner = block.inner(area);
    Rect::new(
        inner.x,
        inner.y + inner.height.saturating_sub(1) / 2,
        inner.width,
        1.min(inner.height),
    )
}

/// Hit boxes of the mobile action buttons, right-aligned. Empty above the
/// tablet breakpoint, where the actions are not shown.
pub fn mobile_action_areas(area: Rect) -> Vec<Rect> {
    let bp = Breakpoint::for_width(area.width);
    if !bp.matches(Breakpoint::Tablet) {
        return Vec::new();
    }
    let row = content_row(area);
    let mut right = row.right().saturating_sub(side_padding(bp));
    let mut rects: Vec<Rect> = MOBILE_ACTIONS
        .iter()
        .rev()
        .map(|label| {
            let w = label.width() as u16 + 2;
            let x = right.saturating_sub(w).max(row.x);
            right = x.saturating_sub(MOBILE_ACTION_GAP);
            Rect::new(x, row.y, w.min(row.right().saturating_sub(x)), row.height)
        })
        .collect();
    rects.reverse();
    rects
}

pub fn menu_button_area(area: Rect) -> Option<Rect> {
    mobile_action_areas(area).last().copied()
}

pub fn render_super_header(frame: &mut Frame, area: Rect) {
    let paragraph = Paragraph::new(SUPER_HEADER_TEXT)
        .style(Theme::super_header())
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let bp = Breakpoint::for_width(area.width);
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Theme::border())
        .style(Theme::page());
    frame.render_widget(block, area);

    let row = content_row(area);
    let pad = side_padding(bp);

    let logo_area = Rect::new(row.x + pad, row.y, LOGO.width() as u16, row.height);
    let logo_style = Style::default()
        .fg(Theme::gray900())
        .add_modifier(Weight::Bold.modifier());
    frame.render_widget(
        Paragraph::new(Span::styled(LOGO, logo_style)),
        logo_area.intersection(row),
    );

    if !bp.matches(Breakpoint::Phone) {
        let gap = " ".repeat(nav_spacing(area.width) as usize);
        let mut spans: Vec<Span> = Vec::new();
        for (i, link) in NAV_LINKS.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw(gap.clone()));
            }
            spans.push(Span::styled(
                link.to_uppercase(),
                Theme::nav_link(i == 0, state.nav_selected == i),
            ));
        }
        let nav_x = logo_area.right() + nav_spacing(area.width);
        let nav_area = Rect::new(nav_x, row.y, row.right().saturating_sub(nav_x), row.height);
        frame.render_widget(Paragraph::new(Line::from(spans)), nav_area.intersection(row));
    }

    for (label, rect) in MOBILE_ACTIONS.iter().zip(mobile_action_areas(area)) {
        frame.render_widget(
            Paragraph::new(format!(" {} ", label)).style(Theme::button()),
            rect,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::state::tests::test_state;
    use ratatui::backend::TestBackend;

    fn row_text(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width)
            .map(|x| buf[(x, y)].symbol().to_string())
            .collect()
    }

    fn draw(width: u16) -> Buffer {
        let (state, _rx) = test_state();
        let mut terminal = Terminal::new(TestBackend::new(width, 3)).unwrap();
        terminal
            .draw(|f| {
                let area = f.area();
                render(f, area, &state);
            })
            .unwrap();
        terminal.backend().buffer().clone()
    }

    #[test]
    fn desktop_shows_nav_without_mobile_actions() {
        let buf = draw(200);
        let text = row_text(&buf, 0);
        assert!(text.contains("SALE"));
        assert!(text.contains("COLLECTIONS"));
        assert!(!text.contains("Menu"));
        assert!(menu_button_area(Rect::new(0, 0, 200, 3)).is_none());
    }

    #[test]
    fn tablet_shows_nav_and_mobile_actions() {
        let buf = draw(110);
        let text = row_text(&buf, 0);
        assert!(text.contains("SALE"));
        assert!(text.contains("Menu"));
    }

    #[test]
    fn phone_hides_nav() {
        let buf = draw(60);
        let text = row_text(&buf, 0);
        assert!(text.contains(LOGO));
        assert!(!text.contains("SALE"));
        assert!(text.contains("Menu"));
    }

    #[test]
    fn menu_button_is_rightmost_action() {
        let area = Rect::new(0, 0, 60, 3);
        let rects = mobile_action_areas(area);
        assert_eq!(rects.len(), 3);
        let menu = menu_button_area(area).unwrap();
        assert_eq!(menu.right(), 58);
        assert_eq!(menu.width, "Menu".len() as u16 + 2);
        assert!(rects[0].right() < rects[1].x);
        assert!(rects[1].right() < rects[2].x);
    }
}
