// Copyright 2026 the Soliloquy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Glyph buffer types.

use core::ops::Range;
use std::sync::Arc;

use crate::embed::EmbedId;
use crate::shape::{FontInstance, ShapeParams};

/// Line-break eligibility of one glyph.
#[derive(Copy, Clone, Default, PartialEq, Eq, Debug)]
#[repr(u8)]
pub enum BreakClass {
    /// No break at this glyph.
    #[default]
    Keep,
    /// A space: a line may end here. When it does, the space hangs - its
    /// advance is excluded from the measured line width.
    Space,
    /// A line may begin with this glyph (break permitted before it).
    Before,
    /// A line always ends after this glyph.
    Mandatory,
}

/// What a glyph renders as.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum GlyphKind {
    /// A shaped character.
    Char(char),
    /// An embedded object, sitting on the baseline.
    Embed(EmbedId),
}

/// A shaped, positionable unit: a character or embedded object with advance
/// metrics, break classification and, after placement, a final position.
///
/// Glyphs preserve source order; bidirectional reordering is not performed.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Glyph {
    /// What this glyph renders as.
    pub kind: GlyphKind,
    /// Index into the layout's segment table. Only meaningful for
    /// [`GlyphKind::Char`] glyphs.
    pub style_index: u16,
    /// Horizontal advance in pixels.
    pub advance: f32,
    /// Distance from the baseline to the glyph's top extent.
    pub ascent: f32,
    /// Distance from the baseline to the glyph's bottom extent.
    pub descent: f32,
    /// Break eligibility assigned by the annotation pass.
    pub break_class: BreakClass,
    /// Final line index within the layout.
    pub line: u32,
    /// Final x position.
    pub x: f32,
    /// Final baseline y position.
    pub y: f32,
    /// Order in which the glyph becomes visible during staggered reveal;
    /// zero means "shown immediately".
    pub reveal_index: u32,
}

impl Glyph {
    pub(crate) fn new(
        kind: GlyphKind,
        style_index: u16,
        advance: f32,
        ascent: f32,
        descent: f32,
    ) -> Self {
        Self {
            kind,
            style_index,
            advance,
            ascent,
            descent,
            break_class: BreakClass::Keep,
            line: 0,
            x: 0.0,
            y: 0.0,
            reveal_index: 0,
        }
    }
}

/// How a run's glyphs are drawn.
pub(crate) enum RunSource {
    Styled {
        font: Arc<dyn FontInstance>,
        params: ShapeParams,
        style_index: u16,
    },
    Embed(EmbedId),
}

/// One segmenter run after shaping: a draw source plus the range of glyphs
/// it produced.
pub(crate) struct RunData {
    pub(crate) source: RunSource,
    pub(crate) glyphs: Range<usize>,
}
