//! Backdrop and panel drawing for a visible modal.

use ratatui::buffer::{Buffer, Cell};
use ratatui::prelude::*;
use ratatui::widgets::block::Padding;
use ratatui::widgets::{Block, BorderType, Borders, Clear};

use super::controller::ModalProps;
use super::transition::TransitionFrame;
use super::{px_to_cols, px_to_rows};

/// Backdrop darkness when fully open.
pub const BACKDROP_ALPHA: f64 = 0.53;
pub const DEFAULT_MAX_WIDTH_PX: u16 = 600;
const PANEL_PADDING_X_PX: f64 = 20.0;
const PANEL_PADDING_Y_PX: f64 = 10.0;

const PANEL_BG: Color = Color::Rgb(255, 255, 255);
const PANEL_FG: Color = Color::Rgb(49, 50, 53);
const PANEL_BORDER: Color = Color::Rgb(200, 204, 205);
const BLACK: (u8, u8, u8) = (0, 0, 0);

/// Render result of a modal: draw nothing, or draw at these coordinates.
#[derive(Debug, Clone, PartialEq)]
pub enum ModalView {
    Hidden,
    Visible(ModalLayout),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ModalLayout {
    pub backdrop: Rect,
    pub panel: Rect,
    pub opacity: f64,
    pub padding: Padding,
    pub label: Option<String>,
}

impl ModalLayout {
    /// Centre the panel in `area`, shifted by the frame's vertical offset.
    pub fn compute(area: Rect, props: &ModalProps, frame: TransitionFrame) -> Self {
        let pad_x = px_to_cols(PANEL_PADDING_X_PX);
        let pad_y = px_to_rows(PANEL_PADDING_Y_PX).max(0) as u16;
        let padding = Padding::new(pad_x, pad_x, pad_y, pad_y);

        let max_width = px_to_cols(f64::from(props.max_width.unwrap_or(DEFAULT_MAX_WIDTH_PX)));
        let ninety_percent = (u32::from(area.width) * 9 / 10) as u16;
        let width = ninety_percent.min(max_width).max(area.width.min(12));
        let height = props
            .content_height
            .saturating_add(2 + pad_y * 2)
            .min(area.height);

        let x = area.x + area.width.saturating_sub(width) / 2;
        let centred_y = i32::from(area.y) + i32::from(area.height.saturating_sub(height) / 2);
        let lowest = i32::from(area.bottom().saturating_sub(height));
        let y = (centred_y + px_to_rows(frame.offset_y))
            .clamp(i32::from(area.y), lowest.max(i32::from(area.y)));

        Self {
            backdrop: area,
            panel: Rect::new(x, y as u16, width, height),
            opacity: frame.opacity.clamp(0.0, 1.0),
            padding,
            label: props.label.clone(),
        }
    }
}

/// Draw the backdrop and the panel, then hand the panel interior to `content`.
///
/// Missing content leaves an empty panel.
pub fn render<F>(frame: &mut Frame, view: &ModalView, content: Option<F>)
where
    F: FnOnce(&mut Frame, Rect),
{
    let ModalView::Visible(layout) = view else {
        return;
    };

    dim(frame.buffer_mut(), layout.backdrop, BACKDROP_ALPHA * layout.opacity);
    let under = snapshot(frame.buffer_mut(), layout.panel);
    frame.render_widget(Clear, layout.panel);

    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(PANEL_BORDER))
        .padding(layout.padding)
        .style(Style::default().fg(PANEL_FG).bg(PANEL_BG));
    if let Some(label) = &layout.label {
        block = block.title(format!(" {} ", label)).title_style(
            Style::default()
                .fg(PANEL_FG)
                .add_modifier(Modifier::BOLD),
        );
    }

    let inner = block.inner(layout.panel);
    frame.render_widget(block, layout.panel);
    if let Some(content) = content {
        content(frame, inner);
    }

    fade_in(frame.buffer_mut(), layout.panel, &under, layout.opacity);
}

fn snapshot(buf: &Buffer, area: Rect) -> Vec<Cell> {
    let area = area.intersection(buf.area);
    area.positions().map(|pos| buf[pos].clone()).collect()
}

/// Blend the freshly drawn panel over the cells that were beneath it.
///
/// Below half opacity the page keeps its symbols and only picks up the
/// panel's colours; at zero the page is left exactly as it was.
fn fade_in(buf: &mut Buffer, area: Rect, under: &[Cell], opacity: f64) {
    let opacity = opacity.clamp(0.0, 1.0);
    if opacity >= 1.0 {
        return;
    }
    let area = area.intersection(buf.area);
    for (pos, page) in area.positions().zip(under) {
        let Some(cell) = buf.cell_mut(pos) else {
            continue;
        };
        let (panel_fg, panel_bg) = (cell.fg, cell.bg);
        if opacity < 0.5 {
            *cell = page.clone();
        }
        cell.fg = mix(page.fg, panel_fg, opacity);
        cell.bg = mix(page.bg, panel_bg, opacity);
    }
}

/// Page colour moved toward the panel colour by `opacity`. Palette colours
/// cannot be mixed, so the stronger side wins.
fn mix(page: Color, panel: Color, opacity: f64) -> Color {
    let nearest = if opacity >= 0.5 { panel } else { page };
    match panel {
        Color::Rgb(r, g, b) => blend(page, (r, g, b), opacity).unwrap_or(nearest),
        _ => nearest,
    }
}

/// Darken every cell in `area` toward black by `amount` (0.0 = untouched).
fn dim(buf: &mut Buffer, area: Rect, amount: f64) {
    let amount = amount.clamp(0.0, 1.0);
    if amount <= 0.0 {
        return;
    }
    let area = area.intersection(buf.area);
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            let Some(cell) = buf.cell_mut((x, y)) else {
                continue;
            };
            let mut blended = true;
            match blend(cell.fg, BLACK, amount) {
                Some(fg) => {
                    cell.set_fg(fg);
                }
                None => blended = false,
            }
            match blend(cell.bg, BLACK, amount) {
                Some(bg) => {
                    cell.set_bg(bg);
                }
                None => blended = false,
            }
            if !blended && amount >= 0.25 {
                cell.modifier.insert(Modifier::DIM);
            }
        }
    }
}

/// Mix an RGB colour toward `toward`. Palette colours have no RGB value to
/// mix and return `None`.
pub fn blend(color: Color, toward: (u8, u8, u8), amount: f64) -> Option<Color> {
    let Color::Rgb(r, g, b) = color else {
        return None;
    };
    let mix = |from: u8, to: u8| -> u8 {
        (f64::from(from) + (f64::from(to) - f64::from(from)) * amount).round() as u8
    };
    Some(Color::Rgb(mix(r, toward.0), mix(g, toward.1), mix(b, toward.2)))
}
