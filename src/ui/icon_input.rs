use crate::modal::{px_to_cols, px_to_rows};
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use unicode_width::UnicodeWidthStr;

pub const DEFAULT_WIDTH_PX: u16 = 250;
const SEARCH_ICON: &str = "⌕";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputSize {
    #[default]
    Small,
    Large,
}

/// Pixel metrics per size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizeProps {
    pub icon_box: u16,
    pub padding_left: u16,
    pub font_size: u16,
    pub vertical_padding: u16,
}

impl InputSize {
    pub fn props(self) -> SizeProps {
        match self {
            InputSize::Small => SizeProps {
                icon_box: 14,
                padding_left: 21,
                font_size: 14,
                vertical_padding: 4,
            },
            InputSize::Large => SizeProps {
                icon_box: 18,
                padding_left: 34,
                font_size: 18,
                vertical_padding: 8,
            },
        }
    }

    pub fn toggle(self) -> Self {
        match self {
            InputSize::Small => InputSize::Large,
            InputSize::Large => InputSize::Small,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct IconInputState {
    pub text: String,
    pub focused: bool,
    pub size: InputSize,
}

impl IconInputState {
    pub fn insert_char(&mut self, c: char) {
        self.text.push(c);
    }

    pub fn delete_back(&mut self) {
        self.text.pop();
    }
}

/// Underlined text field with a leading icon.
pub struct IconInput<'a> {
    state: &'a IconInputState,
    placeholder: &'a str,
}

impl<'a> IconInput<'a> {
    pub fn new(state: &'a IconInputState, placeholder: &'a str) -> Self {
        Self { state, placeholder }
    }

    /// Text starts after the left padding, and never on top of the icon.
    fn text_column(&self) -> u16 {
        let props = self.state.size.props();
        let icon = px_to_cols(f64::from(props.icon_box)).max(1);
        px_to_cols(f64::from(props.padding_left)).max(icon + 1)
    }

    /// Rows of padding above the text.
    pub fn text_row(&self) -> u16 {
        px_to_rows(f64::from(self.state.size.props().vertical_padding)).max(0) as u16
    }

    /// Column where the cursor sits when focused, relative to the field.
    pub fn cursor_offset(&self) -> u16 {
        self.text_column() + self.state.text.width() as u16
    }

    /// Rows needed for padding, text and underline.
    pub fn height(&self) -> u16 {
        self.text_row() + 2
    }
}

impl Widget for IconInput<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height < self.height() || area.width == 0 {
            return;
        }
        let props = self.state.size.props();
        let width = px_to_cols(f64::from(DEFAULT_WIDTH_PX)).min(area.width);
        let text_x = area.x + self.text_column().min(width);
        let text_w = (area.x + width).saturating_sub(text_x) as usize;
        let text_y = area.y + self.text_row();

        buf.set_string(area.x, text_y, SEARCH_ICON, Style::default().fg(Theme::gray700()));

        let (text, style) = if self.state.text.is_empty() && !self.state.focused {
            (self.placeholder, Theme::muted())
        } else {
            let mut style = Style::default()
                .fg(Theme::gray700())
                .add_modifier(Modifier::BOLD);
            if props.font_size >= 18 {
                style = style.add_modifier(Modifier::UNDERLINED);
            }
            (self.state.text.as_str(), style)
        };
        buf.set_stringn(text_x, text_y, text, text_w, style);

        let underline = if self.state.focused {
            Style::default().fg(Theme::primary())
        } else {
            Style::default().fg(Theme::gray900())
        };
        buf.set_string(area.x, text_y + 1, "─".repeat(width as usize), underline);
    }
}
