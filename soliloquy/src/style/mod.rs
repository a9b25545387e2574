// Copyright 2026 the Soliloquy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rich styling support.

mod set;

pub use set::{LinkStyle, StyleSet};

use peniko::Color;
use peniko::color::palette;

/// Horizontal alignment of lines.
#[derive(Copy, Clone, Default, PartialEq, Eq, Debug)]
#[repr(u8)]
pub enum Alignment {
    /// Align each line to the left edge.
    #[default]
    Start,
    /// Align each line centered within the widest line.
    Middle,
    /// Align each line to the right edge.
    End,
    /// Justify each line by stretching inter-word spaces, except for the
    /// last line of a paragraph.
    Justified,
}

/// One outline stroke: width, optional override color and (x, y) offset.
///
/// A `color` of `None` means "use each segment's own outline color".
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Outline {
    /// Stroke width in pixels.
    pub width: f32,
    /// Override color for this stroke.
    pub color: Option<Color>,
    /// Horizontal offset of the stroke.
    pub dx: f32,
    /// Vertical offset of the stroke.
    pub dy: f32,
}

/// A snapshot of every attribute that affects how a run of text is shaped
/// and drawn.
///
/// Segments form a logical stack during segmentation: pushing copies the
/// current top and overrides individual fields, popping reverts to the
/// parent. Snapshots are never mutated after they are attached to a run, so
/// sibling runs cannot alias each other's styles.
#[derive(Clone, PartialEq, Debug)]
pub struct TextStyle {
    /// Font identifier, resolved by the font service.
    pub font: String,
    /// Font size.
    pub size: i32,
    /// Bold synthesis/selection.
    pub bold: bool,
    /// Italic synthesis/selection.
    pub italic: bool,
    /// Underline decoration.
    pub underline: bool,
    /// Strikethrough decoration.
    pub strikethrough: bool,
    /// Fill color.
    pub color: Color,
    /// Color used for outline passes that carry no override color.
    pub outline_color: Color,
    /// Hyperlink id, `None` when this segment is not part of a link.
    pub hyperlink: Option<u32>,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            font: String::from("sans-serif"),
            size: 16,
            bold: false,
            italic: false,
            underline: false,
            strikethrough: false,
            color: palette::css::WHITE,
            outline_color: palette::css::BLACK,
            hyperlink: None,
        }
    }
}
