// Copyright 2026 the Soliloquy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Layout types and orchestration.

mod data;
mod line_break;
mod place;

pub use data::{BreakClass, Glyph, GlyphKind};
pub(crate) use data::{RunData, RunSource};

use core::fmt;

use tiny_skia::Pixmap;
use tracing::{debug, warn};

use crate::composite;
use crate::embed::EmbedHost;
use crate::error::LayoutError;
use crate::resolve::{self, SegmentKind};
use crate::shape::{FontContext, ShapeParams};
use crate::style::{Alignment, StyleSet, TextStyle};
use crate::token::{self, Content};

/// A finished layout of one text object at one fixed (width, height) budget:
/// the rasterized image plus the glyph stream and metadata it was built
/// from.
///
/// A `Layout` is immutable after construction. Re-laying out for a new
/// budget means discarding it and building a fresh one; no partially built
/// layout is ever exposed.
pub struct Layout {
    requested: (u32, u32),
    image: Pixmap,
    segments: Vec<TextStyle>,
    runs: Vec<RunData>,
    glyphs: Vec<Glyph>,
    hyperlink_targets: Vec<String>,
    start_run: Option<usize>,
    line_count: u32,
}

impl Layout {
    /// Runs the full pipeline for `content` within a `width` x `height`
    /// pixel budget: tokenize, segment, shape, break, place, composite.
    ///
    /// `focused` is the id of the currently focused hyperlink, if any.
    /// Any failure aborts the whole layout; there is no partial recovery.
    pub fn new(
        content: &[Content],
        styles: &StyleSet,
        fonts: &FontContext,
        embeds: &dyn EmbedHost,
        focused: Option<u32>,
        width: u32,
        height: u32,
    ) -> Result<Self, LayoutError> {
        let (passes, borders) = composite::figure_passes(styles);
        // Outline and shadow margins come out of the width available for
        // line breaking, and each line is also charged its own indent.
        let max_advance = (width as f32 - borders.x()).max(1.0);
        let first_advance = (max_advance - styles.first_indent).max(1.0);
        let rest_advance = (max_advance - styles.rest_indent).max(1.0);

        let tokens = token::tokenize(content)?;
        let segmented = resolve::segment(&tokens, styles, focused)?;
        debug!(
            tokens = tokens.len(),
            paragraphs = segmented.paragraphs.len(),
            "segmented text"
        );

        let mut segments: Vec<TextStyle> = Vec::new();
        let mut runs: Vec<RunData> = Vec::new();
        let mut glyphs: Vec<Glyph> = Vec::new();
        let mut paragraph_bounds: Vec<(usize, usize)> = Vec::new();

        let justify = styles.alignment == Alignment::Justified;
        let paragraph_spacing = styles.paragraph_spacing.unwrap_or(styles.line_spacing);
        let mut maxx = 0.0_f32;
        let mut y = 0.0_f32;
        let mut line_base = 0_u32;

        for (index, paragraph) in segmented.paragraphs.iter().enumerate() {
            let paragraph_start = glyphs.len();

            for run in paragraph {
                let run_start = glyphs.len();
                let source = match &run.segment {
                    SegmentKind::Styled(style) => {
                        let font = fonts.get_font(&style.font)?;
                        let params = ShapeParams {
                            size: style.size,
                            bold: style.bold,
                            italic: style.italic,
                            outline_width: 0.0,
                        };
                        let style_index = segments.len() as u16;
                        segments.push(style.clone());
                        for shaped in font.shape(&params, &run.text) {
                            glyphs.push(Glyph::new(
                                GlyphKind::Char(shaped.ch),
                                style_index,
                                shaped.advance,
                                shaped.ascent,
                                shaped.descent,
                            ));
                        }
                        RunSource::Styled {
                            font,
                            params,
                            style_index,
                        }
                    }
                    SegmentKind::Embed(id) => {
                        let (w, h) = embeds.measure(*id).ok_or_else(|| {
                            LayoutError::UnsupportedContent(format!("embedded object {id:?}"))
                        })?;
                        glyphs.push(Glyph::new(GlyphKind::Embed(*id), 0, w, h, 0.0));
                        RunSource::Embed(*id)
                    }
                };
                runs.push(RunData {
                    source,
                    glyphs: run_start..glyphs.len(),
                });
            }

            let paragraph_glyphs = &mut glyphs[paragraph_start..];
            line_break::annotate_western(paragraph_glyphs);
            let lines = line_break::break_greedy(paragraph_glyphs, first_advance, rest_advance);
            let line_width = place::place_horizontal(
                paragraph_glyphs,
                styles.first_indent,
                styles.rest_indent,
                justify,
                max_advance,
            );
            maxx = maxx.max(line_width);

            if index > 0 {
                y += paragraph_spacing;
            }
            y = place::place_vertical(paragraph_glyphs, y, styles.line_spacing);

            for glyph in paragraph_glyphs.iter_mut() {
                glyph.line += line_base;
            }
            line_base += lines;
            paragraph_bounds.push((paragraph_start, glyphs.len()));
        }

        for &(start, end) in &paragraph_bounds {
            place::align_lines(&mut glyphs[start..end], styles.alignment, maxx);
        }

        // Number glyphs for staggered reveal: everything before the start
        // marker is shown instantly.
        let mut next_reveal = 1_u32;
        for (index, run) in runs.iter().enumerate() {
            let instant = segmented.start_run.is_some_and(|boundary| index < boundary);
            for glyph in &mut glyphs[run.glyphs.clone()] {
                glyph.reveal_index = if instant {
                    0
                } else {
                    let reveal = next_reveal;
                    next_reveal += 1;
                    reveal
                };
            }
        }

        let image_width = (maxx + borders.x()).ceil().max(1.0) as u32;
        let image_height = (y + borders.y()).ceil().max(1.0) as u32;
        if image_width > width || image_height > height {
            warn!(
                image_width,
                image_height, width, height, "laid out text overflows its size budget"
            );
        }
        let mut image = Pixmap::new(image_width, image_height).ok_or_else(|| {
            LayoutError::UnsupportedContent(format!(
                "a {image_width}x{image_height} pixel surface"
            ))
        })?;

        composite::draw_all(
            &mut image, &passes, borders, &runs, &glyphs, &segments, embeds,
        );
        debug!(
            width = image_width,
            height = image_height,
            lines = line_base,
            "layout complete"
        );

        Ok(Self {
            requested: (width, height),
            image,
            segments,
            runs,
            glyphs,
            hyperlink_targets: segmented.hyperlink_targets,
            start_run: segmented.start_run,
            line_count: line_base,
        })
    }

    /// The (width, height) budget this layout was built for.
    pub fn budget(&self) -> (u32, u32) {
        self.requested
    }

    /// Width of the finished image in pixels.
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    /// Height of the finished image in pixels.
    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// The rasterized image.
    pub fn image(&self) -> &Pixmap {
        &self.image
    }

    /// The positioned glyph stream, in source order.
    pub fn glyphs(&self) -> &[Glyph] {
        &self.glyphs
    }

    /// The segment table glyphs index into via [`Glyph::style_index`].
    pub fn segments(&self) -> &[TextStyle] {
        &self.segments
    }

    /// Number of lines across all paragraphs.
    pub fn line_count(&self) -> u32 {
        self.line_count
    }

    /// Hyperlink targets in id order; id `n` is at index `n - 1`.
    pub fn hyperlink_targets(&self) -> &[String] {
        &self.hyperlink_targets
    }

    /// Looks up a hyperlink target by id.
    pub fn hyperlink_target(&self, id: u32) -> Option<&str> {
        self.hyperlink_targets
            .get(id.checked_sub(1)? as usize)
            .map(String::as_str)
    }

    /// Count of runs revealed instantly before staggered reveal begins, if a
    /// `{_start}` marker was present.
    pub fn start_run(&self) -> Option<usize> {
        self.start_run
    }
}

impl fmt::Debug for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Layout")
            .field("requested", &self.requested)
            .field("size", &(self.width(), self.height()))
            .field("glyphs", &self.glyphs.len())
            .field("lines", &self.line_count)
            .field("hyperlink_targets", &self.hyperlink_targets)
            .field("start_run", &self.start_run)
            .finish_non_exhaustive()
    }
}
