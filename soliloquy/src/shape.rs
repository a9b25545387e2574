// Copyright 2026 the Soliloquy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Font service interface and the shared font cache.

use core::fmt;
use std::sync::{Arc, Mutex, PoisonError};

use hashbrown::HashMap;
use peniko::Color;
use tiny_skia::Pixmap;

use crate::error::LayoutError;
use crate::layout::Glyph;

/// Parameters a font needs to shape or draw a run.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct ShapeParams {
    /// Font size.
    pub size: i32,
    /// Bold synthesis/selection.
    pub bold: bool,
    /// Italic synthesis/selection.
    pub italic: bool,
    /// Stroke width for outline passes; zero for shaping and fill drawing.
    pub outline_width: f32,
}

/// A single shaped glyph as returned by the font service.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct ShapedGlyph {
    /// The character this glyph renders.
    pub ch: char,
    /// Horizontal advance in pixels.
    pub advance: f32,
    /// Distance from the baseline to the glyph's top extent.
    pub ascent: f32,
    /// Distance from the baseline to the glyph's bottom extent.
    pub descent: f32,
}

/// External font collaborator: shapes strings and rasterizes placed glyphs.
///
/// Implementations wrap whatever font stack the host uses; the layout engine
/// only needs per-glyph advances and vertical extents, and the ability to
/// draw glyphs it has already positioned.
pub trait FontInstance: Send + Sync {
    /// Shapes `text` with the given parameters, one record per character.
    fn shape(&self, params: &ShapeParams, text: &str) -> Vec<ShapedGlyph>;

    /// Draws already-placed glyphs onto `surface`. Each glyph's (x, y) is a
    /// baseline position; `(x, y)` here is a whole-run offset added on top.
    /// `params.outline_width` selects stroked rendering for outline passes.
    fn draw(
        &self,
        surface: &mut Pixmap,
        x: f32,
        y: f32,
        color: Color,
        glyphs: &[Glyph],
        params: &ShapeParams,
    );
}

/// Loads fonts by identifier on cache miss.
pub trait FontLoader: Send + Sync {
    /// Loads the font named by `id`.
    fn load(&self, id: &str) -> Result<Arc<dyn FontInstance>, LayoutError>;
}

impl<F> FontLoader for F
where
    F: Fn(&str) -> Result<Arc<dyn FontInstance>, LayoutError> + Send + Sync,
{
    fn load(&self, id: &str) -> Result<Arc<dyn FontInstance>, LayoutError> {
        self(id)
    }
}

/// A font cache designed to be a single per-process resource shared by
/// concurrent layouts.
///
/// Fonts are keyed by identifier, populated lazily on first use and never
/// evicted here; eviction, if any, belongs to the font service. The lock is
/// held across the loader call so lookup-or-insert is atomic per key and two
/// racing layouts cannot load the same font twice.
pub struct FontContext {
    loader: Box<dyn FontLoader>,
    cache: Mutex<HashMap<String, Arc<dyn FontInstance>>>,
}

impl FontContext {
    /// Creates a font cache backed by the given loader.
    pub fn new(loader: impl FontLoader + 'static) -> Self {
        Self {
            loader: Box::new(loader),
            cache: Mutex::new(HashMap::new()),
        }
    }

    /// Returns the cached font for `id`, loading it on first use.
    pub fn get_font(&self, id: &str) -> Result<Arc<dyn FontInstance>, LayoutError> {
        let mut cache = self.cache.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(font) = cache.get(id) {
            return Ok(font.clone());
        }
        let font = self.loader.load(id)?;
        cache.insert(id.to_owned(), font.clone());
        Ok(font)
    }

    /// Drops every cached font. Intended for tests.
    pub fn clear(&self) {
        self.cache
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}

impl fmt::Debug for FontContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cached = self
            .cache
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len();
        f.debug_struct("FontContext")
            .field("cached", &cached)
            .finish_non_exhaustive()
    }
}
