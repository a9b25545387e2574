// Copyright 2026 the Soliloquy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use hashbrown::HashMap;
use peniko::Color;
use peniko::color::palette;

use super::{Alignment, Outline, TextStyle};

/// Idle/hover style pair resolved for one hyperlink target.
#[derive(Clone, PartialEq, Debug)]
pub struct LinkStyle {
    /// Style applied while the link is not focused.
    pub idle: TextStyle,
    /// Style applied while the link is the focused one.
    pub hover: TextStyle,
}

type HyperlinkStyler = dyn Fn(&str) -> LinkStyle + Send + Sync;

/// Style environment for one text object: the default segment style, named
/// presets, paragraph-level placement options and the outline/drop-shadow
/// configuration.
pub struct StyleSet {
    default: TextStyle,
    presets: HashMap<String, TextStyle>,
    hyperlink_styler: Option<Box<HyperlinkStyler>>,
    /// Horizontal alignment of lines.
    pub alignment: Alignment,
    /// Indentation of the first line of each paragraph.
    pub first_indent: f32,
    /// Indentation of every subsequent line.
    pub rest_indent: f32,
    /// Extra vertical space between lines.
    pub line_spacing: f32,
    /// Extra vertical space between paragraphs; defaults to `line_spacing`
    /// when unset, so paragraph spacing is uniform with line spacing.
    pub paragraph_spacing: Option<f32>,
    /// Outline strokes drawn beneath the final fill pass.
    pub outlines: Vec<Outline>,
    /// Drop shadow offsets, drawn beneath the outlines.
    pub drop_shadows: Vec<(f32, f32)>,
    /// Color of every drop shadow.
    pub drop_shadow_color: Color,
}

impl StyleSet {
    /// Creates a style set with the given default segment style.
    pub fn new(default: TextStyle) -> Self {
        Self {
            default,
            presets: HashMap::new(),
            hyperlink_styler: None,
            alignment: Alignment::Start,
            first_indent: 0.0,
            rest_indent: 0.0,
            line_spacing: 0.0,
            paragraph_spacing: None,
            outlines: Vec::new(),
            drop_shadows: Vec::new(),
            drop_shadow_color: palette::css::BLACK,
        }
    }

    /// The style applied to all text unless overridden by markup.
    pub fn default_style(&self) -> &TextStyle {
        &self.default
    }

    /// Registers a named preset, selectable with a bare `{name}` tag.
    pub fn add_preset(&mut self, name: impl Into<String>, style: TextStyle) {
        self.presets.insert(name.into(), style);
    }

    /// Looks up a named preset.
    pub fn preset(&self, name: &str) -> Option<&TextStyle> {
        self.presets.get(name)
    }

    /// Installs the hyperlink style resolver consulted for every `a=` tag.
    pub fn set_hyperlink_styler(
        &mut self,
        styler: impl Fn(&str) -> LinkStyle + Send + Sync + 'static,
    ) {
        self.hyperlink_styler = Some(Box::new(styler));
    }

    /// Resolves the idle/hover styles for a link target, falling back to the
    /// ambient segment style when no styler is configured.
    pub(crate) fn link_style(&self, target: &str, ambient: &TextStyle) -> LinkStyle {
        match &self.hyperlink_styler {
            Some(styler) => styler(target),
            None => LinkStyle {
                idle: ambient.clone(),
                hover: ambient.clone(),
            },
        }
    }
}

impl Default for StyleSet {
    fn default() -> Self {
        Self::new(TextStyle::default())
    }
}

impl fmt::Debug for StyleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StyleSet")
            .field("default", &self.default)
            .field("presets", &self.presets)
            .field("alignment", &self.alignment)
            .field("first_indent", &self.first_indent)
            .field("rest_indent", &self.rest_indent)
            .field("line_spacing", &self.line_spacing)
            .field("paragraph_spacing", &self.paragraph_spacing)
            .field("outlines", &self.outlines)
            .field("drop_shadows", &self.drop_shadows)
            .field("drop_shadow_color", &self.drop_shadow_color)
            .finish_non_exhaustive()
    }
}
