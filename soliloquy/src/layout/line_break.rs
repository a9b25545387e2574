// Copyright 2026 the Soliloquy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Break annotation and greedy line breaking.

use super::data::{BreakClass, Glyph, GlyphKind};

/// Characters that must not begin a line when word-boundary breaking is in
/// use; a space followed by one of these is not a break opportunity.
const NO_LINE_START: &[char] = &['.', ',', ';', ':', '!', '?', ')', ']', '}'];

/// Tags each glyph with its break eligibility, using word-boundary rules for
/// left-to-right scripts: spaces are break opportunities (and hang at line
/// ends), embeds permit a break on either side, everything else is kept.
pub(crate) fn annotate_western(glyphs: &mut [Glyph]) {
    for i in 0..glyphs.len() {
        glyphs[i].break_class = match glyphs[i].kind {
            GlyphKind::Char(' ') => BreakClass::Space,
            GlyphKind::Embed(_) => BreakClass::Before,
            GlyphKind::Char(_) => {
                if i > 0 && matches!(glyphs[i - 1].kind, GlyphKind::Embed(_)) {
                    BreakClass::Before
                } else {
                    BreakClass::Keep
                }
            }
        };
    }
    // A space only counts as an opportunity if the next glyph may start a
    // line; leading punctuation must not be orphaned.
    for i in 0..glyphs.len().saturating_sub(1) {
        if glyphs[i].break_class == BreakClass::Space {
            if let GlyphKind::Char(c) = glyphs[i + 1].kind {
                if NO_LINE_START.contains(&c) {
                    glyphs[i].break_class = BreakClass::Keep;
                }
            }
        }
    }
}

/// Greedily partitions one paragraph's glyphs into lines, writing each
/// glyph's line index. Returns the line count.
///
/// The first line is at most `first_advance` wide and every later line at
/// most `rest_advance`, so callers can charge indentation against the line
/// it applies to. Glyphs accumulate onto the current line until the next
/// would overflow; the breaker then backs up to the most recent eligible
/// break point, or breaks immediately before the overflowing glyph if there
/// is none. A single glyph wider than the budget occupies its own line.
/// Trailing spaces hang and never force a break. The partition is a
/// deterministic function of advances, classes and widths, so re-breaking an
/// already broken paragraph reproduces identical boundaries.
pub(crate) fn break_greedy(glyphs: &mut [Glyph], first_advance: f32, rest_advance: f32) -> u32 {
    let mut max_advance = first_advance;
    let mut line: u32 = 0;
    // First glyph of the line being built.
    let mut line_start: usize = 0;
    // Where the next line would start if we broke at the most recent
    // eligible break point.
    let mut candidate: Option<usize> = None;
    let mut x = 0.0_f32;
    let mut i = 0;

    while i < glyphs.len() {
        match glyphs[i].break_class {
            BreakClass::Mandatory => {
                glyphs[i].line = line;
                line += 1;
                line_start = i + 1;
                candidate = None;
                x = 0.0;
                max_advance = rest_advance;
                i += 1;
            }
            BreakClass::Space => {
                // Spaces always fit: a space ending a line hangs past the
                // limit rather than wrapping.
                glyphs[i].line = line;
                x += glyphs[i].advance;
                candidate = Some(i + 1);
                i += 1;
            }
            class => {
                if class == BreakClass::Before && i > line_start {
                    candidate = Some(i);
                }
                let next_x = x + glyphs[i].advance;
                if next_x <= max_advance || i == line_start {
                    // Fits, or is an oversized glyph at the start of its
                    // line and gets the line to itself.
                    glyphs[i].line = line;
                    x = next_x;
                    i += 1;
                } else if let Some(start) = candidate.take() {
                    // Back up to the break point and re-lay the glyphs after
                    // it onto a fresh line.
                    line += 1;
                    line_start = start;
                    x = 0.0;
                    max_advance = rest_advance;
                    i = start;
                } else {
                    // No eligible break point on this line: break
                    // immediately before the overflowing glyph.
                    line += 1;
                    line_start = i;
                    x = 0.0;
                    max_advance = rest_advance;
                }
            }
        }
    }

    // A trailing mandatory break leaves `line` pointing past the last glyph;
    // count only the lines that received one.
    match glyphs.last() {
        Some(last) => last.line + 1,
        None => 0,
    }
}
