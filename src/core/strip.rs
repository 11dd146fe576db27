//! Strip geometry — tick spacing constants and the position→index mapping.
//!
//! Everything here works in abstract horizontal units so the same math
//! serves any renderer; the TUI instantiates one-cell ticks with one-cell
//! gaps, while the defaults mirror the classic 350-unit strip.

/// Fixed geometry of the tick strip.
///
/// The tick count is a pure function of the constants and never changes
/// after construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StripLayout {
    /// Total mapped width of the strip.
    width: f64,
    /// Width of a single tick mark.
    tick_width: f64,
    /// Blank space between adjacent ticks.
    gap: f64,
}

impl Default for StripLayout {
    fn default() -> Self {
        Self::new(350.0, 2.0, 2.0)
    }
}

impl StripLayout {
    /// Build a layout, clamping the constants so at least one tick fits.
    pub fn new(width: f64, tick_width: f64, gap: f64) -> Self {
        let tick_width = tick_width.max(1.0);
        let gap = gap.max(0.0);
        let width = width.max(tick_width + gap);
        Self {
            width,
            tick_width,
            gap,
        }
    }

    /// Layout sized for exactly `n` ticks (`width = n * (tick_width + gap)`).
    pub fn for_ticks(n: usize, tick_width: f64, gap: f64) -> Self {
        let n = n.max(1);
        let tick_width = tick_width.max(1.0);
        let gap = gap.max(0.0);
        Self::new(n as f64 * (tick_width + gap), tick_width, gap)
    }

    /// Horizontal distance from one tick's left edge to the next.
    fn stride(&self) -> f64 {
        self.tick_width + self.gap
    }

    /// Number of selectable ticks: `floor(width / (tick_width + gap))`.
    pub fn num_ticks(&self) -> usize {
        ((self.width / self.stride()).floor() as usize).max(1)
    }

    /// Extent actually covered by tick marks — the trailing gap is not
    /// part of the drawing.
    pub fn span(&self) -> f64 {
        self.num_ticks() as f64 * self.stride() - self.gap
    }

    /// Left edge of tick `index`.
    pub fn x_of(&self, index: usize) -> f64 {
        index as f64 * self.stride()
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn tick_width(&self) -> f64 {
        self.tick_width
    }

    /// Map a pointer offset to the nearest tick index.
    ///
    /// The offset is clamped to `[0, width]`, mapped linearly onto
    /// `[0, num_ticks - 1]` and rounded. Out-of-bounds input lands on the
    /// boundary tick, never wraps.
    pub fn index_at(&self, x: f64) -> usize {
        let n = self.num_ticks();
        if n <= 1 {
            return 0;
        }
        let clamped = x.clamp(0.0, self.width);
        let raw = clamped / self.width * (n - 1) as f64;
        (raw.round() as usize).min(n - 1)
    }
}
