//! Terminal styling policy for the report.
//!
//! Colors and emoji are applied only when the terminal can show them, and can
//! be turned off with `--plain` or the usual `NO_COLOR` / `CLICOLOR` variables.

use colored::*;
use std::env;
use std::io::IsTerminal;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    Auto,   // Detect based on terminal
    Always, // Force colors on
    Never,  // Force colors off
}

impl ColorMode {
    pub fn should_use_color(&self) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::Auto => detect_color_support(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmojiMode {
    Auto,  // Use emoji if the terminal is interactive
    Never, // Never use emoji
}

impl EmojiMode {
    pub fn should_use_emoji(&self) -> bool {
        match self {
            Self::Never => false,
            Self::Auto => detect_color_support(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormattingConfig {
    pub color: ColorMode,
    pub emoji: EmojiMode,
}

impl Default for FormattingConfig {
    fn default() -> Self {
        Self {
            color: ColorMode::Auto,
            emoji: EmojiMode::Auto,
        }
    }
}

impl FormattingConfig {
    pub fn from_env() -> Self {
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Applies `NO_COLOR`, `CLICOLOR` and `CLICOLOR_FORCE` as read by `lookup`.
    pub fn from_vars<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        // https://no-color.org
        if lookup("NO_COLOR").is_some() {
            config.color = ColorMode::Never;
        }

        if lookup("CLICOLOR").as_deref() == Some("0") {
            config.color = ColorMode::Never;
        }

        if lookup("CLICOLOR_FORCE").as_deref() == Some("1") {
            config.color = ColorMode::Always;
        }

        config
    }

    /// ASCII-only output: no colors, no emoji.
    pub fn plain() -> Self {
        Self {
            color: ColorMode::Never,
            emoji: EmojiMode::Never,
        }
    }
}

pub trait OutputFormatter {
    fn header(&self, text: &str) -> String;
    fn emoji(&self, emoji: &str, fallback: &str) -> String;
    fn bold(&self, text: &str) -> String;
    fn dim(&self, text: &str) -> String;
    fn success(&self, text: &str) -> String;
}

pub struct ColoredFormatter {
    config: FormattingConfig,
}

impl ColoredFormatter {
    pub fn new(config: FormattingConfig) -> Self {
        colored::control::set_override(config.color.should_use_color());
        Self { config }
    }

    fn styled(&self, text: &str, style: impl FnOnce(&str) -> ColoredString) -> String {
        if self.config.color.should_use_color() {
            style(text).to_string()
        } else {
            text.to_string()
        }
    }
}

impl OutputFormatter for ColoredFormatter {
    fn header(&self, text: &str) -> String {
        self.styled(text, |t| t.blue().bold())
    }

    fn emoji(&self, emoji: &str, fallback: &str) -> String {
        if self.config.emoji.should_use_emoji() {
            emoji.to_string()
        } else {
            fallback.to_string()
        }
    }

    fn bold(&self, text: &str) -> String {
        self.styled(text, |t| t.bold())
    }

    fn dim(&self, text: &str) -> String {
        self.styled(text, |t| t.dimmed())
    }

    fn success(&self, text: &str) -> String {
        self.styled(text, |t| t.green())
    }
}

pub struct PlainFormatter;

impl OutputFormatter for PlainFormatter {
    fn header(&self, text: &str) -> String {
        text.to_string()
    }

    fn emoji(&self, _emoji: &str, fallback: &str) -> String {
        fallback.to_string()
    }

    fn bold(&self, text: &str) -> String {
        text.to_string()
    }

    fn dim(&self, text: &str) -> String {
        text.to_string()
    }

    fn success(&self, text: &str) -> String {
        text.to_string()
    }
}

/// Picks the formatter for a configuration.
pub fn formatter_for(config: FormattingConfig) -> Box<dyn OutputFormatter> {
    if config == FormattingConfig::plain() {
        Box::new(PlainFormatter)
    } else {
        Box::new(ColoredFormatter::new(config))
    }
}

fn detect_color_support() -> bool {
    if let Ok(term) = env::var("TERM") {
        if term == "dumb" {
            return false;
        }
    }

    std::io::stdout().is_terminal()
}

/// ASCII fallback for each section icon used in the report.
pub fn emoji_or_fallback(emoji: &str) -> (&str, &str) {
    match emoji {
        "📊" => ("📊", "[STATS]"),
        "📝" => ("📝", "[ANSWERS]"),
        "📢" => ("📢", "[PUBLISHED]"),
        "🗑️" => ("🗑️ ", "[DELETED]"),
        "🌍" => ("🌍", "[LANGUAGE]"),
        "📋" => ("📋", "[TYPE]"),
        "⚡" => ("⚡", "[DIFFICULTY]"),
        "🔄" => ("🔄", "[VERSIONS]"),
        "🧾" => ("🧾", "[SUMMARY]"),
        "💾" => ("💾", "[EXPORT]"),
        _ => (emoji, ""),
    }
}
