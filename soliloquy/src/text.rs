// Copyright 2026 the Soliloquy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A displayable-style wrapper that caches one layout per size budget.

use core::fmt;

use crate::embed::EmbedHost;
use crate::error::LayoutError;
use crate::layout::Layout;
use crate::shape::FontContext;
use crate::style::StyleSet;
use crate::token::Content;

/// Owns a content list and its style environment, and caches the [`Layout`]
/// for the most recent (width, height) budget.
///
/// A size change discards the cached layout wholesale and rebuilds from
/// scratch; there is no incremental relayout.
pub struct Text {
    content: Vec<Content>,
    styles: StyleSet,
    layout: Option<Layout>,
}

impl Text {
    /// Creates a text object from a content list.
    pub fn new(content: Vec<Content>, styles: StyleSet) -> Self {
        Self {
            content,
            styles,
            layout: None,
        }
    }

    /// Convenience constructor for a single markup string.
    pub fn from_markup(markup: impl Into<String>, styles: StyleSet) -> Self {
        Self::new(vec![Content::Markup(markup.into())], styles)
    }

    /// The style environment used for layout.
    pub fn styles(&self) -> &StyleSet {
        &self.styles
    }

    /// Returns the layout for the given size budget, rebuilding it only when
    /// the budget differs from the cached one.
    pub fn render(
        &mut self,
        width: u32,
        height: u32,
        fonts: &FontContext,
        embeds: &dyn EmbedHost,
        focused: Option<u32>,
    ) -> Result<&Layout, LayoutError> {
        let stale = self
            .layout
            .as_ref()
            .is_none_or(|layout| layout.budget() != (width, height));
        if stale {
            self.layout = Some(Layout::new(
                &self.content,
                &self.styles,
                fonts,
                embeds,
                focused,
                width,
                height,
            )?);
        }
        Ok(self.layout.as_ref().expect("layout was just computed"))
    }
}

impl fmt::Debug for Text {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Text")
            .field("content", &self.content)
            .field("layout", &self.layout)
            .finish_non_exhaustive()
    }
}
