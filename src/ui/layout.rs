use ratatui::layout::{Constraint, Direction, Layout, Rect};

use crate::modal::px_to_cols;

/// Width thresholds in pixels, matched with `max-width` semantics.
pub const PHONE_PX: u16 = 600;
pub const TABLET_PX: u16 = 950;
pub const LAPTOP_PX: u16 = 1300;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Breakpoint {
    Phone,
    Tablet,
    Laptop,
    Desktop,
}

impl Breakpoint {
    pub fn max_cols(self) -> Option<u16> {
        match self {
            Breakpoint::Phone => Some(px_to_cols(f64::from(PHONE_PX))),
            Breakpoint::Tablet => Some(px_to_cols(f64::from(TABLET_PX))),
            Breakpoint::Laptop => Some(px_to_cols(f64::from(LAPTOP_PX))),
            Breakpoint::Desktop => None,
        }
    }

    /// The narrowest breakpoint whose limit holds `cols`.
    pub fn for_width(cols: u16) -> Self {
        [Breakpoint::Phone, Breakpoint::Tablet, Breakpoint::Laptop]
            .into_iter()
            .find(|bp| bp.max_cols().is_some_and(|max| cols <= max))
            .unwrap_or(Breakpoint::Desktop)
    }

    /// Whether a `max-width` query for `query` applies at this width class.
    /// A phone-sized screen also matches the tablet and laptop queries.
    pub fn matches(self, query: Breakpoint) -> bool {
        self <= query
    }
}

pub struct AppLayout {
    pub super_header: Rect,
    pub header: Rect,
    pub body: Rect,
}

pub fn compute_layout(area: Rect) -> AppLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Super header
            Constraint::Length(3), // Main header
            Constraint::Min(3),    // Body
        ])
        .split(area);

    AppLayout {
        super_header: chunks[0],
        header: chunks[1],
        body: chunks[2],
    }
}

/// `clamp(min, 5vw - 1rem, max)` expressed in columns.
pub fn nav_spacing(width: u16) -> u16 {
    let min = px_to_cols(16.0);
    let max = px_to_cols(64.0);
    let five_percent = (u32::from(width) * 5 / 100) as u16;
    five_percent.saturating_sub(min).clamp(min, max)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn breakpoints_follow_pixel_thresholds() {
        assert_eq!(Breakpoint::Phone.max_cols(), Some(75));
        assert_eq!(Breakpoint::Tablet.max_cols(), Some(119));
        assert_eq!(Breakpoint::Laptop.max_cols(), Some(163));

        assert_eq!(Breakpoint::for_width(40), Breakpoint::Phone);
        assert_eq!(Breakpoint::for_width(75), Breakpoint::Phone);
        assert_eq!(Breakpoint::for_width(76), Breakpoint::Tablet);
        assert_eq!(Breakpoint::for_width(150), Breakpoint::Laptop);
        assert_eq!(Breakpoint::for_width(200), Breakpoint::Desktop);
    }

    #[test]
    fn queries_cascade_downward() {
        assert!(Breakpoint::Phone.matches(Breakpoint::Tablet));
        assert!(Breakpoint::Tablet.matches(Breakpoint::Tablet));
        assert!(!Breakpoint::Laptop.matches(Breakpoint::Tablet));
        assert!(!Breakpoint::Desktop.matches(Breakpoint::Laptop));
    }

    #[test]
    fn nav_spacing_is_clamped() {
        assert_eq!(nav_spacing(40), 2);
        assert_eq!(nav_spacing(100), 3);
        assert_eq!(nav_spacing(400), 8);
        assert_eq!(nav_spacing(u16::MAX), 8);
    }

    #[test]
    fn layout_stacks_header_over_body() {
        let layout = compute_layout(Rect::new(0, 0, 80, 24));
        assert_eq!(layout.super_header.height, 1);
        assert_eq!(layout.header.y, 1);
        assert_eq!(layout.body.y, 4);
        assert_eq!(layout.body.height, 20);
    }
}
