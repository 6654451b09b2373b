use ratatui::style::{Color, Modifier, Style};

/// Convert an HSL triple (degrees, percent, percent) to a terminal RGB colour.
pub fn hsl(h: f64, s: f64, l: f64) -> Color {
    let s = (s / 100.0).clamp(0.0, 1.0);
    let l = (l / 100.0).clamp(0.0, 1.0);
    let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let hp = (h.rem_euclid(360.0)) / 60.0;
    let x = c * (1.0 - (hp % 2.0 - 1.0).abs());
    let (r, g, b) = match hp as u32 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };
    let m = l - c / 2.0;
    let to_u8 = |v: f64| ((v + m) * 255.0).round().clamp(0.0, 255.0) as u8;
    Color::Rgb(to_u8(r), to_u8(g), to_u8(b))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Weight {
    Medium,
    Bold,
}

impl Weight {
    pub fn modifier(self) -> Modifier {
        match self {
            Weight::Medium | Weight::Bold => Modifier::BOLD,
        }
    }
}

pub struct Theme;

impl Theme {
    pub fn white() -> Color {
        hsl(0.0, 0.0, 100.0)
    }

    pub fn gray100() -> Color {
        hsl(185.0, 5.0, 95.0)
    }

    pub fn gray300() -> Color {
        hsl(190.0, 5.0, 80.0)
    }

    pub fn gray500() -> Color {
        hsl(196.0, 4.0, 60.0)
    }

    pub fn gray700() -> Color {
        hsl(220.0, 5.0, 40.0)
    }

    pub fn gray900() -> Color {
        hsl(220.0, 3.0, 20.0)
    }

    pub fn primary() -> Color {
        hsl(340.0, 65.0, 47.0)
    }

    pub fn secondary() -> Color {
        hsl(240.0, 60.0, 63.0)
    }

    pub fn page() -> Style {
        Style::default().fg(Self::gray900()).bg(Self::white())
    }

    pub fn super_header() -> Style {
        Style::default().fg(Self::gray300()).bg(Self::gray900())
    }

    pub fn border() -> Style {
        Style::default().fg(Self::gray300())
    }

    pub fn nav_link(first: bool, selected: bool) -> Style {
        let fg = if first { Self::secondary() } else { Self::gray900() };
        let style = Style::default().fg(fg).add_modifier(Weight::Medium.modifier());
        if selected {
            style.add_modifier(Modifier::UNDERLINED)
        } else {
            style
        }
    }

    pub fn muted() -> Style {
        Style::default().fg(Self::gray500())
    }

    pub fn button() -> Style {
        Style::default().fg(Self::white()).bg(Self::primary())
    }

    pub fn button_selected() -> Style {
        Self::button().add_modifier(Modifier::BOLD | Modifier::REVERSED)
    }

    pub fn menu_link(selected: bool) -> Style {
        let style = Style::default()
            .fg(Self::gray900())
            .add_modifier(Weight::Medium.modifier());
        if selected {
            style.fg(Self::primary())
        } else {
            style
        }
    }

    pub fn field() -> Style {
        Style::default().fg(Self::gray700()).bg(Self::gray100())
    }
}
