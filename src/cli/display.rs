// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal display utilities for the coursepick CLI.
//!
//! Pretty terminal output that respects your color scheme. OneDark for dark
//! terminals, One Light for light ones. The detection tries `COURSEPICK_THEME`
//! first (for explicit control), then `COLORFGBG` (set by some terminals),
//! then macOS system appearance, then defaults to dark because most developer
//! terminals are.
//!
//! Box drawing, term badges, rating/hours coloring, `<mark>` conversion - the
//! little touches that make result tables readable at a glance. Respects
//! `NO_COLOR` for the purists and non-TTY detection for pipelines.
//!
//! # Theme detection order
//!
//! 1. `COURSEPICK_THEME` env var ("dark" or "light")
//! 2. `COLORFGBG` env var (terminal background hint)
//! 3. macOS appearance (via defaults read)
//! 4. Default to dark theme

use std::sync::OnceLock;

use coursepick::types::{Level, Term};

// Width between │ and │, excluding the border chars.
pub const BOX_WIDTH: usize = 96;

// ═══════════════════════════════════════════════════════════════════════════
// THEME DETECTION
// ═══════════════════════════════════════════════════════════════════════════

/// Terminal color theme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

/// Cached theme detection result
static THEME: OnceLock<Theme> = OnceLock::new();

/// Detect terminal theme from environment
fn detect_theme() -> Theme {
    // 1. Explicit override via COURSEPICK_THEME
    if let Ok(theme) = std::env::var("COURSEPICK_THEME") {
        match theme.to_lowercase().as_str() {
            "light" | "l" => return Theme::Light,
            "dark" | "d" => return Theme::Dark,
            _ => {}
        }
    }

    // 2. COLORFGBG ("fg;bg" where bg 7+ usually means a light background)
    if let Ok(colorfgbg) = std::env::var("COLORFGBG") {
        if let Some(bg) = colorfgbg.split(';').next_back() {
            if let Ok(bg_num) = bg.parse::<u8>() {
                if bg_num >= 7 && bg_num != 8 {
                    return Theme::Light;
                }
            }
        }
    }

    // 3. macOS: system appearance
    #[cfg(target_os = "macos")]
    {
        if let Ok(output) = std::process::Command::new("defaults")
            .args(["read", "-g", "AppleInterfaceStyle"])
            .output()
        {
            // "Dark" means dark mode; absence or error means light mode
            let stdout = String::from_utf8_lossy(&output.stdout);
            if !stdout.contains("Dark") && output.status.success() {
                return Theme::Light;
            }
        }
    }

    // 4. Default to dark
    Theme::Dark
}

/// Get the current theme (cached)
pub fn theme() -> Theme {
    *THEME.get_or_init(detect_theme)
}

// ═══════════════════════════════════════════════════════════════════════════
// ONEDARK / ONE LIGHT COLOR PALETTES (True Color)
// ═══════════════════════════════════════════════════════════════════════════
//
// OneDark: https://github.com/joshdick/onedark.vim
// One Light: https://github.com/sonph/onehalf

/// True color escape sequence helper
fn rgb(r: u8, g: u8, b: u8) -> String {
    format!("\x1b[38;2;{};{};{}m", r, g, b)
}

pub mod colors {
    pub const RESET: &str = "\x1b[0m";
    pub const BOLD: &str = "\x1b[1m";
    pub const DIM: &str = "\x1b[2m";
}

pub use colors::*;

/// OneDark palette
mod onedark {
    pub const RED: (u8, u8, u8) = (224, 108, 117); // #e06c75
    pub const GREEN: (u8, u8, u8) = (152, 195, 121); // #98c379
    pub const YELLOW: (u8, u8, u8) = (229, 192, 123); // #e5c07b
    pub const BLUE: (u8, u8, u8) = (97, 175, 239); // #61afef
    pub const MAGENTA: (u8, u8, u8) = (198, 120, 221); // #c678dd
    pub const CYAN: (u8, u8, u8) = (86, 182, 194); // #56b6c2
    pub const GRAY: (u8, u8, u8) = (92, 99, 112); // #5c6370
    pub const BRIGHT_GREEN: (u8, u8, u8) = (166, 226, 46);
    pub const BRIGHT_YELLOW: (u8, u8, u8) = (255, 215, 0);
}

/// One Light palette
mod onelight {
    pub const RED: (u8, u8, u8) = (228, 86, 73); // #e45649
    pub const GREEN: (u8, u8, u8) = (80, 161, 79); // #50a14f
    pub const YELLOW: (u8, u8, u8) = (193, 132, 1); // #c18401
    pub const BLUE: (u8, u8, u8) = (64, 120, 242); // #4078f2
    pub const MAGENTA: (u8, u8, u8) = (166, 38, 164); // #a626a4
    pub const CYAN: (u8, u8, u8) = (1, 132, 188); // #0184bc
    pub const GRAY: (u8, u8, u8) = (160, 161, 167); // #a0a1a7
    pub const BRIGHT_GREEN: (u8, u8, u8) = (68, 140, 39);
    pub const BRIGHT_YELLOW: (u8, u8, u8) = (152, 104, 1);
}

// ═══════════════════════════════════════════════════════════════════════════
// THEME-AWARE COLOR ACCESSORS
// ═══════════════════════════════════════════════════════════════════════════

macro_rules! theme_color {
    ($name:ident) => {
        #[allow(non_snake_case)]
        pub fn $name() -> String {
            let (r, g, b) = match theme() {
                Theme::Dark => onedark::$name,
                Theme::Light => onelight::$name,
            };
            rgb(r, g, b)
        }
    };
}

theme_color!(RED);
theme_color!(GREEN);
theme_color!(YELLOW);
theme_color!(BLUE);
theme_color!(MAGENTA);
theme_color!(CYAN);
theme_color!(GRAY);
theme_color!(BRIGHT_GREEN);
theme_color!(BRIGHT_YELLOW);

// ═══════════════════════════════════════════════════════════════════════════
// CORE UTILITIES
// ═══════════════════════════════════════════════════════════════════════════

/// Check if colors should be used (TTY detection)
pub fn use_colors() -> bool {
    // Respect NO_COLOR standard
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    atty::is(atty::Stream::Stdout)
}

/// Apply multiple styles
pub fn styled(styles: &[&str], text: &str) -> String {
    if use_colors() {
        format!("{}{}{}", styles.join(""), text, RESET)
    } else {
        text.to_string()
    }
}

/// Apply theme color with optional modifiers
pub fn themed(color_fn: fn() -> String, modifiers: &[&str], text: &str) -> String {
    if use_colors() {
        format!("{}{}{}{}", modifiers.join(""), color_fn(), text, RESET)
    } else {
        text.to_string()
    }
}

/// Calculate visible length (excluding ANSI codes)
pub fn visible_len(s: &str) -> usize {
    let mut in_escape = false;
    let mut len = 0;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape && c == 'm' {
            in_escape = false;
        } else if !in_escape {
            len += 1;
        }
    }
    len
}

/// Left-pad a styled string to a fixed visible width
pub fn pad_left(s: &str, width: usize) -> String {
    let visible = visible_len(s);
    if visible >= width {
        s.to_string()
    } else {
        format!("{}{}", " ".repeat(width - visible), s)
    }
}

/// Right-pad a styled string to a fixed visible width
pub fn pad_right(s: &str, width: usize) -> String {
    let visible = visible_len(s);
    if visible >= width {
        s.to_string()
    } else {
        format!("{}{}", s, " ".repeat(width - visible))
    }
}

/// Truncate text to max_len visible chars, adding ... if needed
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() <= max_len {
        return text.to_string();
    }
    let kept: String = text.chars().take(max_len.saturating_sub(3)).collect();
    format!("{}...", kept.trim_end())
}

/// Truncate a styled string to max_len visible chars, keeping escapes intact
/// and closing any open style before the ellipsis
pub fn truncate_visible(s: &str, max_len: usize) -> String {
    if visible_len(s) <= max_len {
        return s.to_string();
    }
    let budget = max_len.saturating_sub(3);
    let mut out = String::new();
    let mut visible = 0;
    let mut in_escape = false;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
            out.push(c);
        } else if in_escape {
            if c == 'm' {
                in_escape = false;
            }
            out.push(c);
        } else {
            if visible == budget {
                break;
            }
            out.push(c);
            visible += 1;
        }
    }
    while out.ends_with(' ') {
        out.pop();
    }
    if out.contains('\x1b') {
        out.push_str(RESET);
    }
    format!("{}...", out)
}

// ═══════════════════════════════════════════════════════════════════════════
// BOX DRAWING
// ═══════════════════════════════════════════════════════════════════════════

/// Print a content line: │ content          │
pub fn row(content: &str) {
    let border = GRAY();
    let len = visible_len(content);
    let pad = BOX_WIDTH.saturating_sub(len);
    println!(
        "{}│{}{}{}{}│{}",
        border,
        RESET,
        content,
        " ".repeat(pad),
        border,
        RESET
    );
}

/// Print section header: ┌─ LABEL ──────────┐
pub fn section_top(label: &str) {
    let border = GRAY();
    let colored_label = themed(CYAN, &[BOLD], label);
    let label_part = format!("─ {} ", colored_label);
    let remaining = BOX_WIDTH.saturating_sub(visible_len(&label_part));
    println!(
        "{}┌{}{}{}{}┐{}",
        border,
        RESET,
        label_part,
        border,
        "─".repeat(remaining),
        RESET
    );
}

/// Print section divider: ├─ LABEL ──────────┤
pub fn section_mid(label: &str) {
    let border = GRAY();
    let colored_label = themed(CYAN, &[BOLD], label);
    let label_part = format!("─ {} ", colored_label);
    let remaining = BOX_WIDTH.saturating_sub(visible_len(&label_part));
    println!(
        "{}├{}{}{}{}┤{}",
        border,
        RESET,
        label_part,
        border,
        "─".repeat(remaining),
        RESET
    );
}

/// Print section footer: └──────────────────┘
pub fn section_bot() {
    let border = GRAY();
    println!("{}└{}┘{}", border, "─".repeat(BOX_WIDTH), RESET);
}

// ═══════════════════════════════════════════════════════════════════════════
// SEMANTIC FORMATTERS
// ═══════════════════════════════════════════════════════════════════════════

fn replace_marks(text: &str, open: &str, close: &str) -> String {
    text.replace("<mark>", open).replace("</mark>", close)
}

/// Convert `<mark>` annotations to terminal emphasis.
///
/// With colors off the markers are stripped; use the JSON output mode when
/// the markers themselves are wanted.
pub fn mark_to_ansi(text: &str) -> String {
    if use_colors() {
        let open = format!("{}{}", BOLD, BRIGHT_YELLOW());
        replace_marks(text, &open, RESET)
    } else {
        replace_marks(text, "", "")
    }
}

/// Color-coded term badge: FA / JA / SP / SU
pub fn term_badge(term: Term) -> String {
    let token = term.token();
    if !use_colors() {
        return token.to_string();
    }
    let color = match term {
        Term::Fall => YELLOW(),
        Term::January => CYAN(),
        Term::Spring => GREEN(),
        Term::Summer => MAGENTA(),
    };
    format!("{}{}{}", color, token, RESET)
}

/// All of a course's term badges in one fixed-width cell
pub fn terms_cell(terms: &[Term]) -> String {
    if terms.is_empty() {
        return themed(GRAY, &[], "-");
    }
    terms
        .iter()
        .map(|term| term_badge(*term))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Single-letter level label: U / G / blank
pub fn level_label(level: Option<Level>) -> String {
    match level {
        Some(Level::Undergraduate) => themed(BLUE, &[], "U"),
        Some(Level::Graduate) => themed(MAGENTA, &[], "G"),
        None => " ".to_string(),
    }
}

/// Lecture-lab-prep units, e.g. "5-0-7"
pub fn units_cell(units: [f32; 3]) -> String {
    fn component(value: f32) -> String {
        if value.fract() == 0.0 {
            format!("{:.0}", value)
        } else {
            format!("{:.1}", value)
        }
    }
    format!(
        "{}-{}-{}",
        component(units[0]),
        component(units[1]),
        component(units[2])
    )
}

/// Color-coded rating; zero is the no-data sentinel and renders gray
pub fn rating_value(rating: f32) -> String {
    if rating <= 0.0 {
        return themed(GRAY, &[], "  -");
    }
    let text = format!("{:>3.1}", rating);
    if !use_colors() {
        return text;
    }
    let color = if rating >= 6.0 {
        BRIGHT_GREEN()
    } else if rating >= 5.0 {
        GREEN()
    } else if rating >= 4.0 {
        YELLOW()
    } else {
        RED()
    };
    format!("{}{}{}", color, text, RESET)
}

/// Color-coded weekly hours (green=light, red=heavy); zero renders gray
pub fn hours_value(hours: f32) -> String {
    if hours <= 0.0 {
        return themed(GRAY, &[], "    -");
    }
    let text = format!("{:>4.1}h", hours);
    if !use_colors() {
        return text;
    }
    let color = if hours < 6.0 {
        GREEN()
    } else if hours < 12.0 {
        YELLOW()
    } else {
        RED()
    };
    format!("{}{}{}", color, text, RESET)
}

/// Color-coded relevance: the tier arithmetic makes 1000+ an exact or
/// multi-term match, 100+ a prefix match
pub fn score_value(score: f64) -> String {
    let text = format!("{:>7.0}", score);
    if !use_colors() {
        return text;
    }
    let color = if score >= 1000.0 {
        BRIGHT_GREEN()
    } else if score >= 100.0 {
        GREEN()
    } else if score >= 10.0 {
        YELLOW()
    } else {
        GRAY()
    };
    format!("{}{}{}", color, text, RESET)
}

/// Format a count as "n (pct%)" of a total, color-coded by coverage
pub fn coverage_colored(count: usize, total: usize) -> String {
    if total == 0 {
        return themed(GRAY, &[], "n/a");
    }
    let pct = count as f64 / total as f64 * 100.0;
    let text = format!("{:>5} ({:>3.0}%)", count, pct);
    if pct >= 75.0 {
        themed(GREEN, &[], &text)
    } else if pct >= 40.0 {
        themed(YELLOW, &[], &text)
    } else {
        themed(RED, &[], &text)
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// TESTS
// ═══════════════════════════════════════════════════════════════════════════
