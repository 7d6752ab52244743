//! Fixed-metric text layout for hit testing.
//!
//! Labels need to map a pointer position to a byte offset to decide which
//! link range was clicked. Real shaping lives in the host renderer, so this
//! module measures with injected [`GlyphMetrics`] instead: the text is
//! split into grapheme clusters, each cluster gets an advance from the
//! metrics, and lines wrap greedily at cluster boundaries.
//! [`FixedAdvanceMetrics`] is the test double; hosts implement
//! `GlyphMetrics` over their actual font stack.

use std::ops::Range;

use unicode_segmentation::UnicodeSegmentation;

use crate::geometry::Point;
use crate::styled::StyledText;

/// Advance source for grapheme clusters.
pub trait GlyphMetrics {
    /// Advance width of a grapheme cluster at the given font size.
    fn advance(&self, grapheme: &str, font_size: f32) -> f32;

    /// Height of a line of text at the given font size.
    fn line_height(&self, font_size: f32) -> f32;
}

/// Metrics giving every cluster the same advance, monospace style.
///
/// Advances scale linearly with font size: a cluster is `advance_em` times
/// the font size wide, a line `line_height_em` times the font size tall.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedAdvanceMetrics {
    advance_em: f32,
    line_height_em: f32,
}

impl FixedAdvanceMetrics {
    /// Create metrics with the given per-em advance and line height factors.
    pub fn new(advance_em: f32, line_height_em: f32) -> Self {
        Self {
            advance_em,
            line_height_em,
        }
    }
}

impl Default for FixedAdvanceMetrics {
    fn default() -> Self {
        Self::new(0.5, 1.25)
    }
}

impl GlyphMetrics for FixedAdvanceMetrics {
    fn advance(&self, _grapheme: &str, font_size: f32) -> f32 {
        self.advance_em * font_size
    }

    fn line_height(&self, font_size: f32) -> f32 {
        self.line_height_em * font_size
    }
}

/// A measured grapheme cluster within a line.
#[derive(Debug, Clone, PartialEq)]
struct PositionedCluster {
    /// Byte range in the source text.
    cluster: Range<usize>,
    /// X position of the cluster's left edge, relative to the line.
    x: f32,
    /// Advance width.
    width: f32,
}

impl PositionedCluster {
    fn x_end(&self) -> f32 {
        self.x + self.width
    }

    fn contains_x(&self, x: f32) -> bool {
        x >= self.x && x < self.x_end()
    }
}

/// A single wrapped line of the layout.
#[derive(Debug, Clone, PartialEq)]
struct LayoutLine {
    /// The clusters on this line, in text order.
    clusters: Vec<PositionedCluster>,
    /// Y offset of the line's top from the layout origin.
    top_y: f32,
    /// Advance width of the line.
    width: f32,
    /// Byte range of the source text covered by this line.
    text_range: Range<usize>,
}

/// Measured cluster positions for a block of styled text.
///
/// Lines wrap greedily at grapheme-cluster boundaries when a maximum width
/// is given; `\n` forces a hard break. Positions are in layout-local
/// coordinates with the origin at the top-left of the first line.
#[derive(Debug, Clone, PartialEq)]
pub struct LineLayout {
    lines: Vec<LayoutLine>,
    line_height: f32,
    width: f32,
    text_len: usize,
}

impl LineLayout {
    /// Measure `text` with the given metrics, wrapping at `max_width`.
    ///
    /// `max_width` of `None` disables wrapping; a cluster wider than the
    /// maximum still occupies a line of its own rather than being dropped.
    pub fn new(
        text: &StyledText,
        metrics: &dyn GlyphMetrics,
        font_size: f32,
        max_width: Option<f32>,
    ) -> Self {
        let plain = text.plain_text();
        let line_height = metrics.line_height(font_size);

        let mut lines = Vec::new();
        let mut current: Vec<PositionedCluster> = Vec::new();
        let mut line_start = 0usize;
        let mut x = 0.0f32;

        let mut flush =
            |clusters: &mut Vec<PositionedCluster>, start: usize, end: usize, x: f32, lines: &mut Vec<LayoutLine>| {
                lines.push(LayoutLine {
                    clusters: std::mem::take(clusters),
                    top_y: lines.len() as f32 * line_height,
                    width: x,
                    text_range: start..end,
                });
            };

        for (start, grapheme) in plain.grapheme_indices(true) {
            if grapheme == "\n" {
                flush(&mut current, line_start, start, x, &mut lines);
                line_start = start + grapheme.len();
                x = 0.0;
                continue;
            }

            let advance = metrics.advance(grapheme, font_size);
            if let Some(max) = max_width {
                if !current.is_empty() && x + advance > max {
                    flush(&mut current, line_start, start, x, &mut lines);
                    line_start = start;
                    x = 0.0;
                }
            }
            current.push(PositionedCluster {
                cluster: start..start + grapheme.len(),
                x,
                width: advance,
            });
            x += advance;
        }
        flush(&mut current, line_start, plain.len(), x, &mut lines);

        let width = lines.iter().map(|l| l.width).fold(0.0f32, f32::max);
        Self {
            lines,
            line_height,
            width,
            text_len: plain.len(),
        }
    }

    /// Width of the widest line.
    pub fn width(&self) -> f32 {
        self.width
    }

    /// Total height of all lines.
    pub fn height(&self) -> f32 {
        self.lines.len() as f32 * self.line_height
    }

    /// Number of wrapped lines. Empty text still occupies one line.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Hit test a point against the measured clusters.
    ///
    /// Returns the byte offset of the cluster under `point`, or `None` when
    /// the point falls outside every cluster. Misses stay misses here so a
    /// click in trailing whitespace never lands on the last link.
    pub fn byte_offset_at(&self, point: Point) -> Option<usize> {
        if point.y < 0.0 {
            return None;
        }
        let line = self
            .lines
            .iter()
            .find(|l| point.y >= l.top_y && point.y < l.top_y + self.line_height)?;
        line.clusters
            .iter()
            .find(|c| c.contains_x(point.x))
            .map(|c| c.cluster.start)
    }

    /// Position of the left edge of the cluster at `offset`.
    ///
    /// Offsets at or past the end of the text map to the trailing edge of
    /// the last line.
    pub fn x_for_offset(&self, offset: usize) -> Point {
        let last = self.lines.len().saturating_sub(1);
        for (index, line) in self.lines.iter().enumerate() {
            if offset >= line.text_range.end && index != last {
                continue;
            }
            for cluster in &line.clusters {
                if cluster.cluster.start >= offset || cluster.cluster.contains(&offset) {
                    return Point::new(cluster.x, line.top_y);
                }
            }
            return Point::new(line.width, line.top_y);
        }
        match self.lines.last() {
            Some(line) => Point::new(line.width, line.top_y),
            None => Point::ZERO,
        }
    }

    /// Total length of the measured text in bytes.
    pub fn text_len(&self) -> usize {
        self.text_len
    }
}
