//! Styles for the stockroom CLI.
//!
//! Templates refer to styles by semantic name (`price`, `time`, `error`, ...);
//! the theme maps each name to a `console::Style`. Changing the look means
//! editing this file, never the templates.
//!
//! The `style` filter checks names even when color is off: an unknown name is
//! prefixed with [`MISSING_STYLE_INDICATOR`] so typos show up in plain output
//! and in tests.

use console::Style;
use once_cell::sync::Lazy;
use std::collections::HashMap;

pub const MISSING_STYLE_INDICATOR: &str = "(!?)";

/// Style identifiers shared between templates and renderers.
pub mod names {
    pub const HEADER: &str = "header";
    pub const TITLE: &str = "title";
    pub const LABEL: &str = "label";
    pub const MUTED: &str = "muted";
    pub const ID: &str = "id";
    pub const NAME: &str = "name";
    pub const CATEGORY: &str = "category";
    pub const PRICE: &str = "price";
    pub const STOCK: &str = "stock";
    pub const TIME: &str = "time";
    pub const PAGER: &str = "pager";
    pub const PAGER_CURRENT: &str = "pager-current";
    pub const COMMAND: &str = "command";
    pub const ERROR: &str = "error";
    pub const WARNING: &str = "warning";
    pub const SUCCESS: &str = "success";
    pub const INFO: &str = "info";
}

#[derive(Clone, Default)]
pub struct Theme {
    styles: HashMap<&'static str, Style>,
}

impl Theme {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(mut self, name: &'static str, style: Style) -> Self {
        self.styles.insert(name, style);
        self
    }

    pub fn apply(&self, name: &str, text: &str, use_color: bool) -> String {
        match self.styles.get(name) {
            Some(style) if use_color => style.apply_to(text).force_styling(true).to_string(),
            Some(_) => text.to_string(),
            None => format!("{} {}", MISSING_STYLE_INDICATOR, text),
        }
    }
}

pub static STOCKROOM_THEME: Lazy<Theme> = Lazy::new(|| {
    let muted = Style::new().color256(245);
    Theme::new()
        .add(names::HEADER, Style::new().bold().underlined())
        .add(names::TITLE, Style::new().bold())
        .add(names::LABEL, muted.clone())
        .add(names::MUTED, muted.clone())
        .add(names::ID, Style::new().yellow())
        .add(names::NAME, Style::new())
        .add(names::CATEGORY, Style::new().cyan())
        .add(names::PRICE, Style::new().green())
        .add(names::STOCK, Style::new())
        .add(names::TIME, muted.clone().italic())
        .add(names::PAGER, muted)
        .add(names::PAGER_CURRENT, Style::new().black().on_yellow())
        .add(names::COMMAND, Style::new().green())
        .add(names::ERROR, Style::new().red().bold())
        .add(names::WARNING, Style::new().yellow().bold())
        .add(names::SUCCESS, Style::new().green())
        .add(names::INFO, Style::new().color256(245))
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_mode_returns_text() {
        assert_eq!(STOCKROOM_THEME.apply(names::PRICE, "$1.00", false), "$1.00");
    }

    #[test]
    fn color_mode_wraps_in_ansi() {
        let out = STOCKROOM_THEME.apply(names::ERROR, "boom", true);
        assert!(out.contains("\u{1b}["));
        assert!(out.contains("boom"));
    }

    #[test]
    fn unknown_style_is_flagged() {
        assert_eq!(
            STOCKROOM_THEME.apply("nope", "text", false),
            "(!?) text"
        );
    }
}
