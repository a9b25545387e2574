// Copyright 2026 the Soliloquy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared test fixtures: a deterministic fixed-metrics font service and a
//! recording embed host.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use peniko::Color;
use tiny_skia::Pixmap;

use crate::embed::{EmbedHost, EmbedId};
use crate::error::LayoutError;
use crate::layout::{Glyph, Layout};
use crate::shape::{FontContext, FontInstance, FontLoader, ShapeParams, ShapedGlyph};
use crate::style::StyleSet;
use crate::token::Content;

/// Advance of every glyph shaped by [`FixedFont`].
pub(crate) const ADVANCE: f32 = 10.0;
/// Ascent of every glyph shaped by [`FixedFont`].
pub(crate) const ASCENT: f32 = 8.0;
/// Descent of every glyph shaped by [`FixedFont`].
pub(crate) const DESCENT: f32 = 2.0;

/// One recorded `FontInstance::draw` invocation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct DrawCall {
    pub(crate) outline_width: f32,
    pub(crate) color: Color,
    pub(crate) x: f32,
    pub(crate) y: f32,
    pub(crate) glyphs: usize,
}

/// Fixed-metrics font: every glyph advances by [`ADVANCE`] with
/// [`ASCENT`]/[`DESCENT`] extents. Draw calls are recorded, not rasterized.
#[derive(Default)]
pub(crate) struct FixedFont {
    pub(crate) calls: Mutex<Vec<DrawCall>>,
}

impl FontInstance for FixedFont {
    fn shape(&self, _params: &ShapeParams, text: &str) -> Vec<ShapedGlyph> {
        text.chars()
            .map(|ch| ShapedGlyph {
                ch,
                advance: ADVANCE,
                ascent: ASCENT,
                descent: DESCENT,
            })
            .collect()
    }

    fn draw(
        &self,
        _surface: &mut Pixmap,
        x: f32,
        y: f32,
        color: Color,
        glyphs: &[Glyph],
        params: &ShapeParams,
    ) {
        self.calls.lock().unwrap().push(DrawCall {
            outline_width: params.outline_width,
            color,
            x,
            y,
            glyphs: glyphs.len(),
        });
    }
}

/// Loader serving one shared [`FixedFont`] for every identifier, counting
/// how many times it is actually invoked.
#[derive(Clone, Default)]
pub(crate) struct TestFonts {
    pub(crate) font: Arc<FixedFont>,
    pub(crate) loads: Arc<AtomicUsize>,
}

impl TestFonts {
    pub(crate) fn load_count(&self) -> usize {
        self.loads.load(Ordering::SeqCst)
    }
}

impl FontLoader for TestFonts {
    fn load(&self, _id: &str) -> Result<Arc<dyn FontInstance>, LayoutError> {
        self.loads.fetch_add(1, Ordering::SeqCst);
        Ok(self.font.clone())
    }
}

/// A fresh font cache plus a handle onto its backing loader and font.
pub(crate) fn font_context() -> (FontContext, TestFonts) {
    let fonts = TestFonts::default();
    (FontContext::new(fonts.clone()), fonts)
}

/// Embed host that reports a fixed size for every object and records draws.
#[derive(Default)]
pub(crate) struct FixedEmbeds {
    pub(crate) size: (f32, f32),
    pub(crate) draws: Mutex<Vec<(EmbedId, f32, f32)>>,
}

impl FixedEmbeds {
    pub(crate) fn new(width: f32, height: f32) -> Self {
        Self {
            size: (width, height),
            draws: Mutex::default(),
        }
    }
}

impl EmbedHost for FixedEmbeds {
    fn measure(&self, _id: EmbedId) -> Option<(f32, f32)> {
        Some(self.size)
    }

    fn draw(&self, _surface: &mut Pixmap, id: EmbedId, x: f32, y: f32) {
        self.draws.lock().unwrap().push((id, x, y));
    }
}

/// Lays out a single markup string with default styles and ample height.
pub(crate) fn layout_markup(markup: &str, width: u32) -> Layout {
    let (fonts, _) = font_context();
    Layout::new(
        &[Content::Markup(markup.into())],
        &StyleSet::default(),
        &fonts,
        &crate::embed::NoEmbeds,
        None,
        width,
        1000,
    )
    .unwrap()
}
