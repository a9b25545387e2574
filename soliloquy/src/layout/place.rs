// Copyright 2026 the Soliloquy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Horizontal and vertical glyph placement.
//!
//! Both passes operate on one paragraph whose glyphs already carry
//! paragraph-local line indices from the breaker. Alignment offsets are
//! applied separately by [`align_lines`] once the widest line of the whole
//! layout is known.

use super::data::{BreakClass, Glyph};
use crate::style::Alignment;

/// Returns the end index (within `glyphs`) of the line starting at `start`.
fn line_end(glyphs: &[Glyph], start: usize) -> usize {
    let line = glyphs[start].line;
    let mut end = start;
    while end < glyphs.len() && glyphs[end].line == line {
        end += 1;
    }
    end
}

/// Returns the index just past the last non-hanging glyph of a line slice.
fn measured_end(line: &[Glyph]) -> usize {
    let mut end = line.len();
    while end > 0 && line[end - 1].break_class == BreakClass::Space {
        end -= 1;
    }
    end
}

/// Assigns x coordinates: per-glyph advance accumulation with first-line
/// indentation and, for justified paragraphs, inter-word stretch toward
/// `max_advance` on every line but the paragraph's last. Returns the maximum
/// measured line width (hanging trailing spaces excluded).
pub(crate) fn place_horizontal(
    glyphs: &mut [Glyph],
    first_indent: f32,
    rest_indent: f32,
    justify: bool,
    max_advance: f32,
) -> f32 {
    let Some(last) = glyphs.last() else {
        return 0.0;
    };
    let line_count = last.line + 1;

    let mut maxx = 0.0_f32;
    let mut start = 0;
    while start < glyphs.len() {
        let end = line_end(glyphs, start);
        let line = glyphs[start].line;
        let indent = if line == 0 { first_indent } else { rest_indent };

        let mut x = indent;
        for glyph in &mut glyphs[start..end] {
            glyph.x = x;
            x += glyph.advance;
        }

        let measured = start + measured_end(&glyphs[start..end]);
        let mut width = if measured == start {
            indent
        } else {
            glyphs[measured - 1].x + glyphs[measured - 1].advance
        };

        // Justification never stretches the last line of a paragraph, nor a
        // line without inter-word gaps.
        if justify && line + 1 != line_count && width < max_advance {
            let spaces = glyphs[start..measured]
                .iter()
                .filter(|g| g.break_class == BreakClass::Space)
                .count();
            if spaces > 0 {
                let adjustment = (max_advance - width) / spaces as f32;
                let mut shift = 0.0;
                for i in start..end {
                    glyphs[i].x += shift;
                    if i < measured && glyphs[i].break_class == BreakClass::Space {
                        shift += adjustment;
                    }
                }
                width = max_advance;
            }
        }

        maxx = maxx.max(width);
        start = end;
    }
    maxx
}

/// Shifts each line by a uniform offset so it is centered or end-aligned
/// within `width` (the widest measured line of the layout). Start-aligned
/// and justified text needs no offset.
pub(crate) fn align_lines(glyphs: &mut [Glyph], alignment: Alignment, width: f32) {
    if matches!(alignment, Alignment::Start | Alignment::Justified) {
        return;
    }
    let mut start = 0;
    while start < glyphs.len() {
        let end = line_end(glyphs, start);
        let measured = start + measured_end(&glyphs[start..end]);
        let line_width = if measured == start {
            0.0
        } else {
            glyphs[measured - 1].x + glyphs[measured - 1].advance
        };
        let free = (width - line_width).max(0.0);
        let offset = match alignment {
            Alignment::Middle => free * 0.5,
            Alignment::End => free,
            Alignment::Start | Alignment::Justified => 0.0,
        };
        for glyph in &mut glyphs[start..end] {
            glyph.x += offset;
        }
        start = end;
    }
}

/// Assigns baseline y coordinates starting at `y`: each line is as tall as
/// its tallest glyph (ascent + descent), with `line_spacing` between lines.
/// Returns the y coordinate of the paragraph's bottom edge.
pub(crate) fn place_vertical(glyphs: &mut [Glyph], y: f32, line_spacing: f32) -> f32 {
    let mut y = y;
    let mut start = 0;
    while start < glyphs.len() {
        let end = line_end(glyphs, start);

        let mut ascent = 0.0_f32;
        let mut descent = 0.0_f32;
        for glyph in &glyphs[start..end] {
            ascent = ascent.max(glyph.ascent);
            descent = descent.max(glyph.descent);
        }

        let baseline = y + ascent;
        for glyph in &mut glyphs[start..end] {
            glyph.y = baseline;
        }

        y = baseline + descent;
        if end < glyphs.len() {
            y += line_spacing;
        }
        start = end;
    }
    y
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::data::GlyphKind;
    use crate::layout::line_break::{annotate_western, break_greedy};

    fn broken(text: &str, max_advance: f32) -> Vec<Glyph> {
        let mut glyphs: Vec<Glyph> = text
            .chars()
            .map(|c| Glyph::new(GlyphKind::Char(c), 0, 10.0, 8.0, 2.0))
            .collect();
        annotate_western(&mut glyphs);
        break_greedy(&mut glyphs, max_advance, max_advance);
        glyphs
    }

    #[test]
    fn accumulates_advances_with_indent() {
        let mut glyphs = broken("abc", 100.0);
        let maxx = place_horizontal(&mut glyphs, 5.0, 0.0, false, 100.0);
        assert_eq!(glyphs[0].x, 5.0);
        assert_eq!(glyphs[1].x, 15.0);
        assert_eq!(glyphs[2].x, 25.0);
        assert_eq!(maxx, 35.0);
    }

    #[test]
    fn rest_indent_applies_after_the_first_line() {
        let mut glyphs = broken("aa bb", 25.0);
        place_horizontal(&mut glyphs, 0.0, 7.0, false, 25.0);
        // "bb" landed on line 1 and starts at the rest indent.
        assert_eq!(glyphs[3].line, 1);
        assert_eq!(glyphs[3].x, 7.0);
    }

    #[test]
    fn trailing_space_is_excluded_from_width() {
        let mut glyphs = broken("ab ", 100.0);
        let maxx = place_horizontal(&mut glyphs, 0.0, 0.0, false, 100.0);
        assert_eq!(maxx, 20.0);
    }

    #[test]
    fn justification_stretches_every_line_but_the_last() {
        let mut glyphs = broken("aa bb cc", 55.0);
        let maxx = place_horizontal(&mut glyphs, 0.0, 0.0, true, 55.0);
        assert_eq!(maxx, 55.0);
        // Line 0 is "aa bb " measured at 50; the single inter-word space
        // stretches by 5, shifting "bb" right.
        assert_eq!(glyphs[3].x, 35.0);
        // The last line is never stretched.
        assert_eq!(glyphs[6].x, 0.0);
        assert_eq!(glyphs[7].x, 10.0);
    }

    #[test]
    fn middle_and_end_alignment_offset_short_lines() {
        let mut glyphs = broken("aaaa b", 45.0);
        place_horizontal(&mut glyphs, 0.0, 0.0, false, 45.0);
        let mut centered = glyphs.clone();
        align_lines(&mut centered, Alignment::Middle, 40.0);
        // Line 1 is "b", 10 wide; centered in 40 it starts at 15.
        assert_eq!(centered[5].x, 15.0);
        let mut ended = glyphs;
        align_lines(&mut ended, Alignment::End, 40.0);
        assert_eq!(ended[5].x, 30.0);
    }

    #[test]
    fn vertical_placement_is_monotonic() {
        let mut glyphs = broken("aa bb cc dd", 25.0);
        place_vertical(&mut glyphs, 0.0, 3.0);
        let mut last_y = f32::MIN;
        let mut last_line = u32::MAX;
        for g in &glyphs {
            if g.line != last_line {
                assert!(g.y > last_y, "line {} does not descend", g.line);
                last_y = g.y;
                last_line = g.line;
            }
        }
    }

    #[test]
    fn line_height_is_the_tallest_glyph() {
        let mut glyphs = broken("ab cd", 25.0);
        glyphs[1].ascent = 20.0;
        let bottom = place_vertical(&mut glyphs, 0.0, 4.0);
        // Line 0 baseline at its max ascent.
        assert_eq!(glyphs[0].y, 20.0);
        // Line 1 starts after line 0's descent plus spacing.
        assert_eq!(glyphs[3].y, 20.0 + 2.0 + 4.0 + 8.0);
        assert_eq!(bottom, 20.0 + 2.0 + 4.0 + 8.0 + 2.0);
    }
}
