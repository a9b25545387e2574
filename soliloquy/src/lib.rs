// Copyright 2026 the Soliloquy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rich text layout for tagged dialogue.
//!
//! Soliloquy converts a list of tagged text fragments (plain text
//! interleaved with inline markup and embeddable objects) into a fully
//! positioned glyph stream and a rasterized image. Data flows strictly
//! forward through a small pipeline:
//!
//! 1. [Tokenization](Content) of markup into typed [`Token`]s.
//! 2. Segmentation of the token stream into styled paragraphs via a
//!    style-inheritance stack, producing [`TextStyle`] snapshots, the
//!    hyperlink target map and the instant-reveal marker.
//! 3. Shaping of each (style, text) run through an external
//!    [`FontInstance`], cached per font identifier by [`FontContext`].
//! 4. Greedy [line breaking](layout) and horizontal/vertical placement
//!    (indentation, justification, line spacing).
//! 5. Compositing: drop shadows, outlines and a final fill pass drawn in
//!    order onto a [`tiny_skia::Pixmap`].
//!
//! The whole pipeline runs inside [`Layout::new`]; a failed layout never
//! exposes partial state. [`Text`] caches one layout per (width, height)
//! budget the way an outer displayable would.
//!
//! Font rasterization, glyph metrics and GPU upload are external
//! collaborators, reached through the [`FontInstance`], [`FontLoader`] and
//! [`EmbedHost`] traits.

pub use peniko;
pub use tiny_skia;

mod composite;
mod embed;
mod error;
mod resolve;
mod shape;
mod text;
mod token;

pub mod layout;
pub mod style;

#[cfg(test)]
mod tests;

pub use embed::{EmbedHost, EmbedId, NoEmbeds};
pub use error::LayoutError;
pub use layout::Layout;
pub use shape::{FontContext, FontInstance, FontLoader, ShapeParams, ShapedGlyph};
pub use style::{Alignment, LinkStyle, Outline, StyleSet, TextStyle};
pub use text::Text;
pub use token::{Content, Token};
