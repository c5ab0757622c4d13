//! BoxView: maps the ball and FPS counter into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use std::fmt::Write as _;

use arrayvec::ArrayString;

use crate::core::Ball;
use crate::fb::FrameBuffer;
use crate::types::{Config, BALL_GLYPH, EMPTY_GLYPH, HORIZONTAL_GLYPH, VERTICAL_GLYPH};

/// FPS label text, formatted without heap allocation.
pub type FpsLabel = ArrayString<64>;

/// Format the FPS counter shown in the top border.
///
/// `"12.3/60 FPS"` when a cap is configured, otherwise `"12.3 FPS"`.
pub fn fps_label(fps: f64, config: &Config) -> FpsLabel {
    let mut label = FpsLabel::new();
    let res = match config.max_fps {
        Some(max) => write!(label, "{fps:.1}/{max} FPS"),
        None => write!(label, "{fps:.1} FPS"),
    };
    debug_assert!(res.is_ok(), "fps label overflowed {} bytes", label.capacity());
    label
}

/// Renders the bouncing-ball box.
#[derive(Debug, Clone, Copy, Default)]
pub struct BoxView;

impl BoxView {
    pub fn new() -> Self {
        Self
    }

    /// Render one frame into an existing framebuffer.
    ///
    /// This is the allocation-free hot path. The framebuffer is resized to the
    /// box once and reused across frames.
    ///
    /// Draw order: blank, border, FPS label (overwrites the top border), ball.
    pub fn render_into(&self, ball: &Ball, fps: f64, config: &Config, fb: &mut FrameBuffer) {
        fb.resize(config.width, config.height);
        fb.clear(EMPTY_GLYPH);

        self.draw_border(fb);

        fb.put_str_right(0, &fps_label(fps, config));

        if let Some((x, y)) = ball.cell(fb.width(), fb.height()) {
            fb.set(x, y, BALL_GLYPH);
        }
    }

    /// Render one frame into a freshly allocated framebuffer.
    pub fn render(&self, ball: &Ball, fps: f64, config: &Config) -> FrameBuffer {
        let mut fb = FrameBuffer::new(config.width, config.height);
        self.render_into(ball, fps, config, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer) {
        let (w, h) = (fb.width(), fb.height());
        fb.fill_row(0, HORIZONTAL_GLYPH);
        fb.fill_row(h.saturating_sub(1), HORIZONTAL_GLYPH);
        fb.fill_col(0, VERTICAL_GLYPH);
        fb.fill_col(w.saturating_sub(1), VERTICAL_GLYPH);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::num::NonZeroU32;

    #[test]
    fn label_without_cap() {
        let config = Config::new(40, 20, None);
        assert_eq!(fps_label(59.96, &config).as_str(), "60.0 FPS");
    }

    #[test]
    fn label_with_cap() {
        let config = Config::new(40, 20, NonZeroU32::new(30));
        assert_eq!(fps_label(29.44, &config).as_str(), "29.4/30 FPS");
    }

    #[test]
    fn label_fits_largest_reachable_values() {
        let config = Config::new(40, 20, NonZeroU32::new(u32::MAX));
        assert_eq!(
            fps_label(8.6e9, &config).as_str(),
            "8600000000.0/4294967295 FPS"
        );
    }

    #[test]
    fn border_sides_use_vertical_glyph() {
        let config = Config::new(10, 5, None);
        let ball = Ball::new(4.0, 2.0, 1.0, 1.0);
        let fb = BoxView::new().render(&ball, 0.0, &config);

        assert_eq!(fb.row(0), b"|--0.0 FPS");
        assert_eq!(fb.row(1), b"|        |");
        assert_eq!(fb.row(2), b"|   O    |");
        assert_eq!(fb.row(4), b"|--------|");
    }

    #[test]
    fn ball_drawn_over_border_at_wall() {
        let config = Config::new(10, 5, None);
        let ball = Ball::new(9.0, 2.0, -1.0, 1.0);
        let fb = BoxView::new().render(&ball, 0.0, &config);
        assert_eq!(fb.get(9, 2), Some(b'O'));
    }
}
