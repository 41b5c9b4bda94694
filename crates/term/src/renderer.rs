//! TerminalRenderer: flushes frames to a real terminal.
//!
//! Keeps the previous frame and only rewrites rows that differ from it. A
//! size change (or [`TerminalRenderer::invalidate`]) forces a full redraw.

use std::io::{self, Write};

use anyhow::Result;
use crossterm::{
    cursor,
    style::{
        Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
    },
    terminal, QueueableCommand,
};

use crate::frame::{Frame, Rgb, Style};

pub struct TerminalRenderer {
    stdout: io::Stdout,
    last: Option<Frame>,
    buf: Vec<u8>,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            last: None,
            buf: Vec::with_capacity(16 * 1024),
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(cursor::Hide)?;
        self.flush_buf()
    }

    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf.queue(ResetColor)?;
        self.buf.queue(SetAttribute(Attribute::Reset))?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        self.flush_buf()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Force the next draw to be a full redraw.
    pub fn invalidate(&mut self) {
        self.last = None;
    }

    pub fn draw(&mut self, frame: Frame) -> Result<()> {
        self.buf.clear();
        encode_into(self.last.as_ref(), &frame, &mut self.buf)?;
        self.flush_buf()?;
        self.last = Some(frame);
        Ok(())
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Rows of `next` that must be rewritten given the previously drawn frame.
pub fn dirty_rows(prev: Option<&Frame>, next: &Frame) -> Vec<u16> {
    let rows = 0..next.height();
    match prev {
        Some(prev) if same_size(prev, next) => {
            rows.filter(|&y| prev.row(y) != next.row(y)).collect()
        }
        _ => rows.collect(),
    }
}

fn same_size(a: &Frame, b: &Frame) -> bool {
    a.width() == b.width() && a.height() == b.height()
}

/// Encode the crossterm commands that bring the screen from `prev` to `next`.
pub fn encode_into(prev: Option<&Frame>, next: &Frame, out: &mut Vec<u8>) -> Result<()> {
    if !prev.is_some_and(|p| same_size(p, next)) {
        out.queue(terminal::Clear(terminal::ClearType::All))?;
    }

    let mut current: Option<Style> = None;
    for y in dirty_rows(prev, next) {
        out.queue(cursor::MoveTo(0, y))?;
        for glyph in next.row(y) {
            if current != Some(glyph.style) {
                apply_style(out, glyph.style)?;
                current = Some(glyph.style);
            }
            out.queue(Print(glyph.ch))?;
        }
    }

    out.queue(ResetColor)?;
    out.queue(SetAttribute(Attribute::Reset))?;
    Ok(())
}

fn apply_style(out: &mut Vec<u8>, style: Style) -> Result<()> {
    out.queue(SetAttribute(Attribute::Reset))?;
    out.queue(SetForegroundColor(rgb_to_color(style.fg)))?;
    out.queue(SetBackgroundColor(rgb_to_color(style.bg)))?;
    if style.bold {
        out.queue(SetAttribute(Attribute::Bold))?;
    }
    Ok(())
}

fn rgb_to_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_frame_is_fully_dirty() {
        let next = Frame::new(4, 3);
        assert_eq!(dirty_rows(None, &next), vec![0, 1, 2]);
    }

    #[test]
    fn only_changed_rows_are_dirty() {
        let prev = Frame::new(4, 3);
        let mut next = prev.clone();
        next.put(2, 1, 'x', Style::default());
        assert_eq!(dirty_rows(Some(&prev), &next), vec![1]);
    }

    #[test]
    fn resize_redraws_everything() {
        let prev = Frame::new(4, 3);
        let next = Frame::new(5, 2);
        assert_eq!(dirty_rows(Some(&prev), &next), vec![0, 1]);

        let mut out = Vec::new();
        encode_into(Some(&prev), &next, &mut out).unwrap();
        assert!(!out.is_empty());
    }

    #[test]
    fn unchanged_frame_encodes_only_a_reset() {
        let frame = Frame::new(4, 3);
        let mut diff = Vec::new();
        encode_into(Some(&frame), &frame, &mut diff).unwrap();

        let mut full = Vec::new();
        encode_into(None, &frame, &mut full).unwrap();
        assert!(diff.len() < full.len());
    }
}
