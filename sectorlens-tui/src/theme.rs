//! Dashboard theme tokens for the SectorLens TUI.
//!
//! Chart colours come from the core palette (`Sector::color`, the alert and
//! P/E / ROE bar tokens); this module only maps them onto terminal colours and
//! adds the chrome around them.
//!
//! # Color Palette
//! - **Accent**: Blue (active tab, focus, titles)
//! - **Alert**: Red (negative values)
//! - **Muted**: Slate (hints, axis captions, secondary text)
//! - **Border**: Dark slate (inactive borders)
//!
//! With colour disabled every token maps to the terminal default and
//! emphasis falls back to bold / reversed modifiers.

use ratatui::style::{Color, Modifier, Style};

use sectorlens_core::insights::Accent;
use sectorlens_core::sector::ALERT_COLOR;
use sectorlens_core::{ColorToken, Sector};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    /// Emit RGB colours. False renders monochrome.
    pub color: bool,
    pub accent: Color,
    pub alert: Color,
    pub muted: Color,
    pub border: Color,
    pub text_primary: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dashboard()
    }
}

impl Theme {
    pub fn dashboard() -> Self {
        Self {
            color: true,
            accent: Color::Rgb(0x3B, 0x82, 0xF6),
            alert: rgb(ALERT_COLOR),
            muted: Color::Rgb(0x94, 0xA3, 0xB8),
            border: Color::Rgb(0x47, 0x55, 0x69),
            text_primary: Color::White,
        }
    }

    pub fn monochrome() -> Self {
        Self {
            color: false,
            accent: Color::Reset,
            alert: Color::Reset,
            muted: Color::Reset,
            border: Color::Reset,
            text_primary: Color::Reset,
        }
    }

    pub fn with_color(color: bool) -> Self {
        if color {
            Self::dashboard()
        } else {
            Self::monochrome()
        }
    }

    /// Map a palette token, honouring the colour switch.
    pub fn token(&self, token: ColorToken) -> Color {
        if self.color {
            rgb(token)
        } else {
            Color::Reset
        }
    }

    pub fn sector(&self, sector: Sector) -> Color {
        self.token(sector.color())
    }

    pub fn card(&self, accent: Accent) -> Color {
        self.token(accent.color())
    }

    /// Sector colour for non-negative values, alert colour below zero.
    pub fn signed(&self, sector: Sector, value: f64) -> Color {
        if value < 0.0 {
            self.alert
        } else {
            self.sector(sector)
        }
    }

    // ── Styles ──

    pub fn text(&self) -> Style {
        Style::default().fg(self.text_primary)
    }

    pub fn muted(&self) -> Style {
        Style::default().fg(self.muted)
    }

    pub fn accent(&self) -> Style {
        Style::default().fg(self.accent)
    }

    pub fn accent_bold(&self) -> Style {
        self.accent().add_modifier(Modifier::BOLD)
    }

    pub fn title(&self) -> Style {
        self.text().add_modifier(Modifier::BOLD)
    }

    pub fn border(&self) -> Style {
        Style::default().fg(self.border)
    }

    /// Highlight for the active tab. Reversed in monochrome so it stays visible.
    pub fn tab_active(&self) -> Style {
        if self.color {
            self.accent_bold().add_modifier(Modifier::UNDERLINED)
        } else {
            Style::default().add_modifier(Modifier::BOLD | Modifier::REVERSED)
        }
    }

    /// Fill style for a bar of the given colour; the printed value sits on
    /// top of it, so it is drawn reversed.
    pub fn bar(&self, color: Color) -> (Style, Style) {
        let bar = Style::default().fg(color);
        (bar, bar.add_modifier(Modifier::REVERSED))
    }
}

fn rgb(token: ColorToken) -> Color {
    let (r, g, b) = token.rgb();
    Color::Rgb(r, g, b)
}
