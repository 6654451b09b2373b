use crate::ui::theme::Theme;
use ratatui::prelude::*;
use unicode_width::UnicodeWidthStr;

const CHEVRON: &str = "▾";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub display_name: String,
}

impl SelectOption {
    pub fn new(value: &str, display_name: &str) -> Self {
        Self {
            value: value.to_string(),
            display_name: display_name.to_string(),
        }
    }
}

/// Display name of the option holding `value`.
pub fn displayed_value<'a>(value: &str, options: &'a [SelectOption]) -> Option<&'a str> {
    options
        .iter()
        .find(|option| option.value == value)
        .map(|option| option.display_name.as_str())
}

#[derive(Debug, Clone)]
pub struct SelectState {
    pub label: String,
    pub value: String,
    pub options: Vec<SelectOption>,
}

impl SelectState {
    pub fn new(label: &str, options: Vec<SelectOption>) -> Self {
        let value = options
            .first()
            .map(|option| option.value.clone())
            .unwrap_or_default();
        Self {
            label: label.to_string(),
            value,
            options,
        }
    }

    /// Move to the option after the current one, wrapping around.
    pub fn cycle(&mut self) {
        if self.options.is_empty() {
            return;
        }
        let next = self
            .options
            .iter()
            .position(|option| option.value == self.value)
            .map(|i| (i + 1) % self.options.len())
            .unwrap_or(0);
        self.value = self.options[next].value.clone();
    }

    /// Falls back to the raw value when no option matches.
    pub fn display(&self) -> &str {
        displayed_value(&self.value, &self.options).unwrap_or(&self.value)
    }
}

pub struct Select<'a> {
    state: &'a SelectState,
}

impl<'a> Select<'a> {
    pub fn new(state: &'a SelectState) -> Self {
        Self { state }
    }
}

impl Widget for Select<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 {
            return;
        }
        // padding 12px 16px, 24px between text and chevron
        let text = format!("  {}   {} ", self.state.display(), CHEVRON);
        let width = (text.width() as u16).min(area.width);
        let field = Rect::new(area.x, area.y, width, 1);
        buf.set_style(field, Theme::field());
        buf.set_stringn(field.x, field.y, &text, width as usize, Theme::field());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sort_options() -> Vec<SelectOption> {
        vec![
            SelectOption::new("newest", "Newest Releases"),
            SelectOption::new("price", "Price"),
            SelectOption::new("curated", "Curated"),
        ]
    }

    #[test]
    fn displayed_value_finds_option() {
        let options = sort_options();
        assert_eq!(displayed_value("price", &options), Some("Price"));
        assert_eq!(displayed_value("missing", &options), None);
    }

    #[test]
    fn cycle_wraps() {
        let mut state = SelectState::new("Sort", sort_options());
        assert_eq!(state.display(), "Newest Releases");
        state.cycle();
        assert_eq!(state.value, "price");
        state.cycle();
        state.cycle();
        assert_eq!(state.value, "newest");
    }

    #[test]
    fn unknown_value_falls_back() {
        let mut state = SelectState::new("Sort", sort_options());
        state.value = "bogus".into();
        assert_eq!(state.display(), "bogus");
        state.cycle();
        assert_eq!(state.value, "newest");
    }

    #[test]
    fn empty_options_are_harmless() {
        let mut state = SelectState::new("Sort", Vec::new());
        state.cycle();
        assert_eq!(state.display(), "");
    }

    #[test]
    fn renders_display_name_and_chevron() {
        let state = SelectState::new("Sort", sort_options());
        let area = Rect::new(0, 0, 40, 1);
        let mut buf = Buffer::empty(area);
        Select::new(&state).render(area, &mut buf);
        let text: String = (0..40).map(|x| buf[(x, 0)].symbol().to_string()).collect();
        assert!(text.starts_with("  Newest Releases   ▾"));
    }
}
