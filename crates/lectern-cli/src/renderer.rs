//! Terminal rendering for markdown output
//!
//! Uses termimad for styled inline markdown, with a plain text fallback for
//! `--no-color` and for piping into other tools.

use std::io::{self, Write};

use anyhow::Result;
use termimad::{MadSkin, crossterm::style::Color};

const HEADER_COLOR: &str = "\x1b[34m";
const RESET: &str = "\x1b[0m";

/// Terminal renderer that can switch between rich and plain text output
pub struct TerminalRenderer {
    rich_enabled: bool,
    skin: MadSkin,
}

impl TerminalRenderer {
    /// Create a new terminal renderer
    pub fn new(rich_enabled: bool) -> Self {
        let mut skin = MadSkin::default();
        skin.bold.set_fg(Color::Yellow);
        skin.italic.set_fg(Color::Magenta);
        skin.inline_code.set_bg(Color::AnsiValue(238));

        Self { rich_enabled, skin }
    }

    /// Render markdown text to standard output
    pub fn render(&self, markdown: &str) -> Result<()> {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        self.render_to(&mut out, markdown)?;
        out.flush()?;
        Ok(())
    }

    /// Render markdown text into `out`.
    ///
    /// Header lines keep their `#` markers so the structure stays visible;
    /// every other line is styled inline.
    pub fn render_to<W: Write>(&self, out: &mut W, markdown: &str) -> io::Result<()> {
        if !self.rich_enabled {
            return out.write_all(markdown.as_bytes());
        }

        for line in markdown.lines() {
            if line.starts_with('#') {
                writeln!(out, "{HEADER_COLOR}{line}{RESET}")?;
            } else {
                writeln!(out, "{}", self.skin.inline(line))?;
            }
        }
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(renderer: &TerminalRenderer, markdown: &str) -> String {
        let mut out = Vec::new();
        renderer.render_to(&mut out, markdown).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_plain_renderer_passes_text_through() {
        let renderer = TerminalRenderer::new(false);
        let markdown = "# Progress\n\n- **1.01** Intro\n";
        assert_eq!(render(&renderer, markdown), markdown);
    }

    #[test]
    fn test_rich_renderer_colors_headers() {
        let renderer = TerminalRenderer::new(true);
        let output = render(&renderer, "## 2025-01-06 (Mon, weekday)\n");
        assert_eq!(output, "\x1b[34m## 2025-01-06 (Mon, weekday)\x1b[0m\n");
    }

    #[test]
    fn test_rich_renderer_keeps_body_text() {
        let renderer = TerminalRenderer::new(true);
        let output = render(&renderer, "- ○ **1.01** Intro\n");
        assert!(output.contains("1.01"));
        assert!(output.contains("Intro"));
    }

    #[test]
    fn test_default_is_rich() {
        assert!(TerminalRenderer::default().rich_enabled);
    }
}
