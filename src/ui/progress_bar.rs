use crate::modal::{px_to_cols, PX_PER_ROW};
use crate::ui::theme::Theme;
use ratatui::prelude::*;

const BAR_WIDTH_PX: f64 = 186.0;
const BASE_BAR_HEIGHT_PX: u16 = 4;
const LARGE_PADDING_PX: f64 = 4.0;
/// Lower block glyphs by eighths of a cell, index 0 = 1/8.
const LOWER_BLOCKS: [&str; 8] = ["▁", "▂", "▃", "▄", "▅", "▆", "▇", "█"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProgressSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl ProgressSize {
    fn height_multiplier(self) -> u16 {
        match self {
            ProgressSize::Small => 2,
            ProgressSize::Medium => 3,
            ProgressSize::Large => 4,
        }
    }

    pub fn bar_height_px(self) -> u16 {
        BASE_BAR_HEIGHT_PX * self.height_multiplier()
    }

    /// A row is 16 px tall, so every size fits in one row and the bar
    /// height picks how many eighths of it the fill covers.
    fn fill_glyph(self) -> &'static str {
        let eighths = (f64::from(self.bar_height_px()) / PX_PER_ROW * 8.0).round() as usize;
        LOWER_BLOCKS[eighths.clamp(1, 8) - 1]
    }

    fn padding_cols(self) -> u16 {
        match self {
            ProgressSize::Large => px_to_cols(LARGE_PADDING_PX),
            _ => 0,
        }
    }

    pub fn next(self) -> Self {
        match self {
            ProgressSize::Small => ProgressSize::Medium,
            ProgressSize::Medium => ProgressSize::Large,
            ProgressSize::Large => ProgressSize::Small,
        }
    }
}

pub struct ProgressBar {
    value: u8,
    size: ProgressSize,
}

impl ProgressBar {
    pub fn new(value: u8, size: ProgressSize) -> Self {
        Self {
            value: value.min(100),
            size,
        }
    }

    pub fn label(&self) -> String {
        format!("{}%", self.value)
    }

    pub fn width() -> u16 {
        px_to_cols(BAR_WIDTH_PX)
    }

    /// Number of filled cells for a track of `track` cells.
    pub fn filled(&self, track: u16) -> u16 {
        (u32::from(track) * u32::from(self.value) / 100) as u16
    }
}

impl Widget for ProgressBar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let width = Self::width().min(area.width);
        if width == 0 || area.height == 0 {
            return;
        }
        let pad = self.size.padding_cols();
        let track_area = Rect::new(area.x, area.y, width, 1);
        let track = width.saturating_sub(pad * 2);
        let filled = self.filled(track);

        buf.set_style(track_area, Style::default().bg(Theme::gray100()));
        for i in 0..track {
            let x = track_area.x + pad + i;
            let (symbol, style) = if i < filled {
                (self.size.fill_glyph(), Style::default().fg(Theme::primary()))
            } else {
                (" ", Style::default())
            };
            if let Some(cell) = buf.cell_mut((x, track_area.y)) {
                cell.set_symbol(symbol);
                cell.set_style(style);
            }
        }

        let label = self.label();
        let label_x = track_area.right() + 1;
        if label_x + label.len() as u16 <= area.right() {
            buf.set_string(label_x, area.y, label, Theme::muted());
        }
    }
}
