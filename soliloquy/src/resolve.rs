// Copyright 2026 the Soliloquy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Segmentation: token stream to styled paragraphs.
//!
//! The segmenter consumes the token sequence once, left to right, keeping a
//! stack of [`TextStyle`] snapshots. Style tags push a copy of the current
//! top with the controlled fields overridden; closing tags pop. Popping the
//! base segment is an unbalanced-tag error.

use peniko::color::{Srgb, parse_color};

use crate::embed::EmbedId;
use crate::error::LayoutError;
use crate::style::{StyleSet, TextStyle};
use crate::token::Token;

/// What a run is made of: a styled text segment or an embedded object.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum SegmentKind {
    Styled(TextStyle),
    Embed(EmbedId),
}

/// A contiguous run of content governed by a single segment.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Run {
    pub(crate) segment: SegmentKind,
    /// Text of the run; empty for embeds.
    pub(crate) text: String,
}

pub(crate) type Paragraph = Vec<Run>;

/// Output of one segmentation pass.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Segmented {
    pub(crate) paragraphs: Vec<Paragraph>,
    /// Hyperlink targets; id `n` maps to index `n - 1`. Ids are dense and
    /// assigned in first-occurrence order, never reused within one layout.
    pub(crate) hyperlink_targets: Vec<String>,
    /// Count of runs emitted before the `{_start}` marker, if any. Runs
    /// before the marker are revealed instantly.
    pub(crate) start_run: Option<usize>,
}

fn push_with(stack: &mut Vec<TextStyle>, f: impl FnOnce(&mut TextStyle)) {
    let mut style = stack.last().expect("style stack is never empty").clone();
    f(&mut style);
    stack.push(style);
}

fn close_paragraph(paragraphs: &mut Vec<Paragraph>, line: &mut Paragraph, top: &TextStyle) {
    // A paragraph must never be empty, or downstream line metrics would be
    // undefined. Normalize to a single blank-space run.
    if line.is_empty() {
        line.push(Run {
            segment: SegmentKind::Styled(top.clone()),
            text: String::from(" "),
        });
    }
    paragraphs.push(core::mem::take(line));
}

fn required_value(name: &str, value: Option<&str>) -> Result<String, LayoutError> {
    value
        .map(str::to_owned)
        .ok_or_else(|| LayoutError::MalformedAttribute {
            tag: name.to_owned(),
            value: String::new(),
        })
}

/// Consumes the token stream and produces the paragraph list, the hyperlink
/// map and the instant-reveal marker.
///
/// `focused` is the id of the currently focused hyperlink, if any; it
/// selects the hover style variant while segmenting `a=` tags.
pub(crate) fn segment(
    tokens: &[Token],
    styles: &StyleSet,
    focused: Option<u32>,
) -> Result<Segmented, LayoutError> {
    let mut paragraphs: Vec<Paragraph> = Vec::new();
    let mut line: Paragraph = Vec::new();
    let mut hyperlink_targets: Vec<String> = Vec::new();
    let mut start_run: Option<usize> = None;

    let mut stack: Vec<TextStyle> = vec![styles.default_style().clone()];

    for token in tokens {
        match token {
            Token::ParagraphBreak => {
                let top = stack.last().expect("style stack is never empty");
                close_paragraph(&mut paragraphs, &mut line, top);
            }
            Token::Text(text) => {
                let top = stack.last().expect("style stack is never empty");
                line.push(Run {
                    segment: SegmentKind::Styled(top.clone()),
                    text: text.clone(),
                });
            }
            Token::Embed(id) => {
                line.push(Run {
                    segment: SegmentKind::Embed(*id),
                    text: String::new(),
                });
            }
            Token::Tag { name, value } => {
                apply_tag(
                    name,
                    value.as_deref(),
                    styles,
                    focused,
                    &mut stack,
                    &mut paragraphs,
                    &mut line,
                    &mut hyperlink_targets,
                    &mut start_run,
                )?;
            }
        }
    }

    // Close the final paragraph. An entirely empty input still yields one
    // normalized paragraph so the layout always has a line.
    if !line.is_empty() || paragraphs.is_empty() {
        let top = stack.last().expect("style stack is never empty");
        close_paragraph(&mut paragraphs, &mut line, top);
    }

    Ok(Segmented {
        paragraphs,
        hyperlink_targets,
        start_run,
    })
}

fn apply_tag(
    name: &str,
    value: Option<&str>,
    styles: &StyleSet,
    focused: Option<u32>,
    stack: &mut Vec<TextStyle>,
    paragraphs: &mut Vec<Paragraph>,
    line: &mut Paragraph,
    hyperlink_targets: &mut Vec<String>,
    start_run: &mut Option<usize>,
) -> Result<(), LayoutError> {
    if let Some(closed) = name.strip_prefix('/') {
        // Closing tags pop whatever is on top; names are not matched
        // against the opening tag.
        stack.pop();
        if stack.is_empty() {
            return Err(LayoutError::UnbalancedTag(closed.to_owned()));
        }
        return Ok(());
    }

    match name {
        "p" => {
            let top = stack.last().expect("style stack is never empty");
            close_paragraph(paragraphs, line, top);
        }
        // Timing tags: they affect glyph reveal pacing in the consuming
        // displayable, not geometry.
        "w" | "fast" | "nw" => {}
        "_start" => {
            // Mark the current depth as the instant-reveal boundary without
            // altering the stack. Last occurrence wins.
            let emitted: usize = paragraphs.iter().map(Vec::len).sum::<usize>() + line.len();
            *start_run = Some(emitted);
        }
        "a" => {
            let target = required_value(name, value)?;
            let ambient = stack.last().expect("style stack is never empty").clone();
            let link = styles.link_style(&target, &ambient);
            let id = hyperlink_targets.len() as u32 + 1;
            hyperlink_targets.push(target);
            let mut style = if focused == Some(id) {
                link.hover
            } else {
                link.idle
            };
            style.hyperlink = Some(id);
            stack.push(style);
        }
        "b" => push_with(stack, |s| s.bold = true),
        "i" => push_with(stack, |s| s.italic = true),
        "u" => push_with(stack, |s| s.underline = true),
        "s" => push_with(stack, |s| s.strikethrough = true),
        "plain" => push_with(stack, |s| {
            s.bold = false;
            s.italic = false;
            s.underline = false;
            s.strikethrough = false;
        }),
        "font" => {
            let font = required_value(name, value)?;
            push_with(stack, |s| s.font = font);
        }
        "size" => {
            let raw = required_value(name, value)?;
            let malformed = || LayoutError::MalformedAttribute {
                tag: name.to_owned(),
                value: raw.clone(),
            };
            if raw.starts_with('+') || raw.starts_with('-') {
                let delta: i32 = raw.parse().map_err(|_| malformed())?;
                push_with(stack, |s| s.size += delta);
            } else {
                let size: i32 = raw.parse().map_err(|_| malformed())?;
                push_with(stack, |s| s.size = size);
            }
        }
        "color" => {
            let raw = required_value(name, value)?;
            let color = parse_color(&raw)
                .map_err(|_| LayoutError::MalformedAttribute {
                    tag: name.to_owned(),
                    value: raw.clone(),
                })?
                .to_alpha_color::<Srgb>();
            push_with(stack, |s| s.color = color);
        }
        _ => {
            // A bare tag may name a registered style preset.
            if value.is_none() {
                if let Some(preset) = styles.preset(name) {
                    let preset = preset.clone();
                    stack.push(preset);
                    return Ok(());
                }
            }
            return Err(LayoutError::UnknownTag(name.to_owned()));
        }
    }
    Ok(())
}
