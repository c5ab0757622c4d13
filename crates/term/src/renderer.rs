//! TerminalRenderer: flushes a framebuffer to a real terminal.
//!
//! Every frame is a full redraw from the home position without clearing the
//! screen first, so the previous frame is simply overwritten in place.

use std::io::{self, Write};

use anyhow::{Context, Result};

use crossterm::{cursor, terminal, QueueableCommand};

use crate::fb::FrameBuffer;

/// Owns the output stream and the hidden-cursor state of the terminal.
///
/// Between [`enter`](Self::enter) and [`exit`](Self::exit) the cursor is
/// hidden. If the renderer is dropped without `exit` (early return, error,
/// unwinding) the terminal is restored in `Drop`.
pub struct TerminalRenderer<W: Write = io::Stdout> {
    out: W,
    buf: Vec<u8>,
    active: bool,
}

impl<W: Write> TerminalRenderer<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            buf: Vec::with_capacity(4 * 1024),
            active: false,
        }
    }

    /// Hide the cursor.
    pub fn enter(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf.queue(cursor::Hide)?;
        self.flush_buf().context("failed to hide cursor")?;
        self.active = true;
        Ok(())
    }

    /// Show the cursor, clear the screen and move home.
    ///
    /// Does nothing if the terminal was never entered or is already restored.
    pub fn exit(&mut self) -> Result<()> {
        if !self.active {
            return Ok(());
        }
        self.active = false;
        self.buf.clear();
        self.buf.queue(cursor::Show)?;
        self.buf.queue(cursor::MoveTo(0, 0))?;
        self.buf.queue(terminal::Clear(terminal::ClearType::FromCursorDown))?;
        self.buf.queue(cursor::MoveTo(0, 0))?;
        self.flush_buf().context("failed to restore terminal")?;
        Ok(())
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Draw a framebuffer as one write followed by a flush.
    pub fn draw(&mut self, fb: &FrameBuffer) -> Result<()> {
        self.buf.clear();
        encode_frame_into(fb, &mut self.buf)?;
        self.flush_buf().context("failed to write frame to terminal")?;
        Ok(())
    }

    /// Print the exit report. No trailing newline.
    pub fn report_highest_fps(&mut self, highest_fps: f64) -> Result<()> {
        write!(self.out, "The highest FPS reached were: {highest_fps:.6}")?;
        self.out.flush()?;
        Ok(())
    }

    pub fn get_ref(&self) -> &W {
        &self.out
    }

    fn flush_buf(&mut self) -> io::Result<()> {
        self.out.write_all(&self.buf)?;
        self.out.flush()
    }
}

impl<W: Write> Drop for TerminalRenderer<W> {
    fn drop(&mut self) {
        if self.active {
            let _ = self.exit();
        }
    }
}

/// Encode a full-frame redraw into `out`.
///
/// Cursor home, then every row followed by `\n`.
pub fn encode_frame_into(fb: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    out.queue(cursor::MoveTo(0, 0))?;
    for y in 0..fb.height() {
        out.extend_from_slice(fb.row(y));
        out.push(b'\n');
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const HOME: &str = "\x1b[1;1H";

    #[test]
    fn encode_frame_homes_then_writes_rows() {
        let mut fb = FrameBuffer::new(3, 2);
        fb.fill_row(0, b'-');
        fb.set(1, 1, b'O');

        let mut out = Vec::new();
        encode_frame_into(&fb, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), format!("{HOME}---\n O \n"));
    }

    #[test]
    fn encode_frame_does_not_clear_screen() {
        let fb = FrameBuffer::new(4, 4);
        let mut out = Vec::new();
        encode_frame_into(&fb, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(!text.contains("\x1b[J"));
        assert!(!text.contains("\x1b[2J"));
    }

    #[test]
    fn enter_hides_and_exit_restores() {
        let mut term = TerminalRenderer::new(Vec::new());
        term.enter().unwrap();
        assert!(term.is_active());
        term.exit().unwrap();
        assert!(!term.is_active());

        let text = String::from_utf8(term.get_ref().clone()).unwrap();
        assert_eq!(text, format!("\x1b[?25l\x1b[?25h{HOME}\x1b[J{HOME}"));
    }

    #[test]
    fn exit_is_idempotent() {
        let mut term = TerminalRenderer::new(Vec::new());
        term.enter().unwrap();
        term.exit().unwrap();
        let len = term.get_ref().len();
        term.exit().unwrap();
        assert_eq!(term.get_ref().len(), len);
    }

    #[test]
    fn exit_without_enter_writes_nothing() {
        let mut term = TerminalRenderer::new(Vec::new());
        term.exit().unwrap();
        assert!(term.get_ref().is_empty());
    }

    #[test]
    fn report_has_six_decimals_and_no_newline() {
        let mut term = TerminalRenderer::new(Vec::new());
        term.report_highest_fps(1.0).unwrap();
        assert_eq!(
            term.get_ref().as_slice(),
            b"The highest FPS reached were: 1.000000"
        );
    }
}
