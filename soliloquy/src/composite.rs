// Copyright 2026 the Soliloquy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Outline and drop-shadow compositing.
//!
//! Rendering a layout is an ordered list of draw passes over the same glyph
//! stream: drop shadows first, then outline strokes, then exactly one fill
//! pass that uses each segment's own color. Later passes draw over earlier
//! ones, so the fill always sits visually on top.

use peniko::Color;
use tiny_skia::Pixmap;

use crate::embed::EmbedHost;
use crate::layout::{Glyph, RunData, RunSource};
use crate::style::{StyleSet, TextStyle};

/// One compositing draw of every glyph at a given stroke width, offset and
/// optional color override.
#[derive(Clone, Copy, PartialEq, Debug)]
pub(crate) struct DrawPass {
    /// Outline stroke width; zero for shadow and fill passes.
    pub(crate) width: f32,
    /// Color override; `None` means "use each segment's own color".
    pub(crate) color: Option<Color>,
    /// Horizontal offset of the pass.
    pub(crate) dx: f32,
    /// Vertical offset of the pass.
    pub(crate) dy: f32,
}

impl DrawPass {
    /// Whether this is the final fill pass.
    pub(crate) fn is_fill(&self) -> bool {
        self.width == 0.0 && self.color.is_none() && self.dx == 0.0 && self.dy == 0.0
    }
}

/// Extra pixel margins the pass list requires around the glyph-ink box:
/// wide outlines and offset shadows extend the image beyond it.
#[derive(Clone, Copy, Default, PartialEq, Debug)]
pub(crate) struct Borders {
    /// Margin on the left edge.
    pub(crate) left: f32,
    /// Margin on the right edge.
    pub(crate) right: f32,
    /// Margin on the top edge.
    pub(crate) top: f32,
    /// Margin on the bottom edge.
    pub(crate) bottom: f32,
}

impl Borders {
    /// Total horizontal margin.
    pub(crate) fn x(&self) -> f32 {
        self.left + self.right
    }

    /// Total vertical margin.
    pub(crate) fn y(&self) -> f32 {
        self.top + self.bottom
    }
}

/// Computes the ordered pass list for a style environment, together with the
/// border the union of all passes requires.
///
/// The list always ends with exactly one fill pass (override color `None`,
/// zero width and offset); with no outlines or shadows configured, that fill
/// pass is the whole list and the borders are zero.
pub(crate) fn figure_passes(styles: &StyleSet) -> (Vec<DrawPass>, Borders) {
    let fill = DrawPass {
        width: 0.0,
        color: None,
        dx: 0.0,
        dy: 0.0,
    };

    if styles.outlines.is_empty() && styles.drop_shadows.is_empty() {
        return (vec![fill], Borders::default());
    }

    let mut passes = Vec::new();
    for &(dx, dy) in &styles.drop_shadows {
        passes.push(DrawPass {
            width: 0.0,
            color: Some(styles.drop_shadow_color),
            dx,
            dy,
        });
    }
    for outline in &styles.outlines {
        passes.push(DrawPass {
            width: outline.width,
            color: outline.color,
            dx: outline.dx,
            dy: outline.dy,
        });
    }

    let mut left = 0.0_f32;
    let mut right = 0.0_f32;
    let mut top = 0.0_f32;
    let mut bottom = 0.0_f32;
    for pass in &passes {
        left = left.min(pass.dx - pass.width);
        right = right.max(pass.dx + pass.width);
        top = top.min(pass.dy - pass.width);
        bottom = bottom.max(pass.dy + pass.width);
    }

    passes.push(fill);
    (
        passes,
        Borders {
            left: -left,
            right,
            top: -top,
            bottom,
        },
    )
}

/// Executes the pass list in order, drawing every run's glyphs onto
/// `surface`. Embedded objects ignore shadow and outline passes.
pub(crate) fn draw_all(
    surface: &mut Pixmap,
    passes: &[DrawPass],
    borders: Borders,
    runs: &[RunData],
    glyphs: &[Glyph],
    segments: &[TextStyle],
    embeds: &dyn EmbedHost,
) {
    for pass in passes {
        for run in runs {
            match &run.source {
                RunSource::Styled {
                    font,
                    params,
                    style_index,
                } => {
                    let segment = &segments[*style_index as usize];
                    let color = pass.color.unwrap_or(if pass.width > 0.0 {
                        segment.outline_color
                    } else {
                        segment.color
                    });
                    let mut params = *params;
                    params.outline_width = pass.width;
                    // The stroker expands glyphs leftward by the stroke
                    // width; compensate so outlines stay centered.
                    font.draw(
                        surface,
                        borders.left + pass.dx - pass.width,
                        borders.top + pass.dy,
                        color,
                        &glyphs[run.glyphs.clone()],
                        &params,
                    );
                }
                RunSource::Embed(id) => {
                    if pass.is_fill() {
                        for glyph in &glyphs[run.glyphs.clone()] {
                            embeds.draw(
                                surface,
                                *id,
                                borders.left + glyph.x,
                                borders.top + glyph.y - glyph.ascent,
                            );
                        }
                    }
                }
            }
        }
    }
}
