//! Framebuffer for terminal rendering.
//!
//! One flat buffer of single-byte glyphs, indexed `row * width + col`.

use crate::types::EMPTY_GLYPH;

/// 2D grid of ASCII glyphs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    width: u16,
    height: u16,
    cells: Vec<u8>,
}

impl FrameBuffer {
    pub fn new(width: u16, height: u16) -> Self {
        let len = (width as usize) * (height as usize);
        Self {
            width,
            height,
            cells: vec![EMPTY_GLYPH; len],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Resize the framebuffer.
    ///
    /// This preserves the underlying allocation when possible.
    pub fn resize(&mut self, width: u16, height: u16) {
        if self.width == width && self.height == height {
            return;
        }
        self.width = width;
        self.height = height;
        let len = (width as usize) * (height as usize);
        self.cells.resize(len, EMPTY_GLYPH);
    }

    pub fn cells(&self) -> &[u8] {
        &self.cells
    }

    #[inline(always)]
    fn idx(&self, x: u16, y: u16) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    pub fn get(&self, x: u16, y: u16) -> Option<u8> {
        self.idx(x, y).map(|i| self.cells[i])
    }

    pub fn set(&mut self, x: u16, y: u16, glyph: u8) {
        if let Some(i) = self.idx(x, y) {
            self.cells[i] = glyph;
        }
    }

    pub fn clear(&mut self, glyph: u8) {
        self.cells.fill(glyph);
    }

    /// One row of glyphs, or an empty slice past the last row.
    pub fn row(&self, y: u16) -> &[u8] {
        if y >= self.height {
            return &[];
        }
        let w = self.width as usize;
        let start = (y as usize) * w;
        &self.cells[start..start + w]
    }

    pub fn fill_row(&mut self, y: u16, glyph: u8) {
        if y >= self.height {
            return;
        }
        let w = self.width as usize;
        let start = (y as usize) * w;
        self.cells[start..start + w].fill(glyph);
    }

    pub fn fill_col(&mut self, x: u16, glyph: u8) {
        for y in 0..self.height {
            self.set(x, y, glyph);
        }
    }

    /// Write `s` starting at column `x`, which may be negative.
    ///
    /// Bytes left of column 0 or right of the last column are dropped.
    pub fn put_str(&mut self, x: i32, y: u16, s: &str) {
        for (i, b) in s.bytes().enumerate() {
            let cx = x + i as i32;
            if cx < 0 {
                continue;
            }
            if cx >= i32::from(self.width) {
                break;
            }
            self.set(cx as u16, y, b);
        }
    }

    /// Write `s` so that its last byte lands in the last column of row `y`.
    pub fn put_str_right(&mut self, y: u16, s: &str) {
        let x = i32::from(self.width) - s.len() as i32;
        self.put_str(x, y, s);
    }

    /// Render the buffer as text, one `\n`-terminated line per row.
    pub fn to_text(&self) -> String {
        let mut out = String::with_capacity(self.cells.len() + self.height as usize);
        for y in 0..self.height {
            out.extend(self.row(y).iter().map(|&b| b as char));
            out.push('\n');
        }
        out
    }
}
