// Copyright 2026 the Soliloquy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Embedded inline objects.

use tiny_skia::Pixmap;

/// Opaque handle to an embedded object owned by the host application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EmbedId(pub u64);

/// Host-side collaborator that measures and draws embedded objects.
///
/// The engine treats embeds as single glyphs whose advance is the object's
/// width and whose ascent is the object's height (the bottom of the object
/// sits on the text baseline).
pub trait EmbedHost {
    /// Returns the (width, height) of the object, or `None` if the host does
    /// not know how to render it inline. Unknown objects fail layout with
    /// [`LayoutError::UnsupportedContent`](crate::LayoutError::UnsupportedContent).
    fn measure(&self, id: EmbedId) -> Option<(f32, f32)>;

    /// Draws the object onto `surface` with its top-left corner at (x, y).
    fn draw(&self, surface: &mut Pixmap, id: EmbedId, x: f32, y: f32);
}

/// An [`EmbedHost`] for text-only content; it knows no objects.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoEmbeds;

impl EmbedHost for NoEmbeds {
    fn measure(&self, _id: EmbedId) -> Option<(f32, f32)> {
        None
    }

    fn draw(&self, _surface: &mut Pixmap, _id: EmbedId, _x: f32, _y: f32) {}
}
