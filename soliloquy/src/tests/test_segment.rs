// Copyright 2026 the Soliloquy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for style-stack segmentation.

use peniko::color::{palette, parse_color, Srgb};

use crate::error::LayoutError;
use crate::resolve::{segment, Run, SegmentKind, Segmented};
use crate::style::{LinkStyle, StyleSet, TextStyle};
use crate::token::{tokenize, Content};

fn seg_with(markup: &str, styles: &StyleSet, focused: Option<u32>) -> Segmented {
    let tokens = tokenize(&[Content::Markup(markup.into())]).unwrap();
    segment(&tokens, styles, focused).unwrap()
}

fn seg(markup: &str) -> Segmented {
    seg_with(markup, &StyleSet::default(), None)
}

fn seg_err(markup: &str) -> LayoutError {
    let tokens = tokenize(&[Content::Markup(markup.into())]).unwrap();
    segment(&tokens, &StyleSet::default(), None).unwrap_err()
}

fn style_of(run: &Run) -> &TextStyle {
    match &run.segment {
        SegmentKind::Styled(style) => style,
        SegmentKind::Embed(_) => panic!("expected a styled run"),
    }
}

#[test]
fn style_changes_split_runs() {
    let out = seg("Hello {b}world{/b}!");
    assert_eq!(out.paragraphs.len(), 1);
    let runs = &out.paragraphs[0];
    assert_eq!(runs.len(), 3);
    assert_eq!(runs[0].text, "Hello ");
    assert!(!style_of(&runs[0]).bold);
    assert_eq!(runs[1].text, "world");
    assert!(style_of(&runs[1]).bold);
    assert_eq!(runs[2].text, "!");
    assert!(!style_of(&runs[2]).bold);
}

#[test]
fn closing_reverts_to_the_parent_snapshot() {
    let out = seg("{b}{i}x{/i}{/b}y");
    let runs = &out.paragraphs[0];
    let inner = style_of(&runs[0]);
    assert!(inner.bold && inner.italic);
    assert_eq!(style_of(&runs[1]), &TextStyle::default());
}

#[test]
fn empty_paragraphs_are_normalized_to_a_space() {
    let out = seg("a\n\nb");
    assert_eq!(out.paragraphs.len(), 3);
    assert_eq!(out.paragraphs[1].len(), 1);
    assert_eq!(out.paragraphs[1][0].text, " ");
}

#[test]
fn p_tag_matches_a_newline() {
    assert_eq!(seg("a{p}b"), seg("a\nb"));
}

#[test]
fn empty_input_yields_one_blank_paragraph() {
    let out = segment(&[], &StyleSet::default(), None).unwrap();
    assert_eq!(out.paragraphs.len(), 1);
    assert_eq!(out.paragraphs[0][0].text, " ");
}

#[test]
fn hyperlink_ids_are_dense_and_ordered() {
    let out = seg("{a=one}x{/a} {a=two}y{/a}");
    assert_eq!(out.hyperlink_targets, vec!["one", "two"]);
    let runs = &out.paragraphs[0];
    assert_eq!(style_of(&runs[0]).hyperlink, Some(1));
    assert_eq!(style_of(&runs[1]).hyperlink, None);
    assert_eq!(style_of(&runs[2]).hyperlink, Some(2));
}

#[test]
fn focused_link_takes_the_hover_variant() {
    let mut styles = StyleSet::default();
    styles.set_hyperlink_styler(|_| LinkStyle {
        idle: TextStyle {
            color: palette::css::RED,
            ..TextStyle::default()
        },
        hover: TextStyle {
            color: palette::css::BLUE,
            ..TextStyle::default()
        },
    });
    let out = seg_with("{a=one}x{/a}{a=two}y{/a}", &styles, Some(2));
    let runs = &out.paragraphs[0];
    assert_eq!(style_of(&runs[0]).color, palette::css::RED);
    assert_eq!(style_of(&runs[1]).color, palette::css::BLUE);
}

#[test]
fn text_after_a_link_is_unstyled() {
    let out = seg("{a=one}x{/a}tail");
    let runs = &out.paragraphs[0];
    assert_eq!(style_of(&runs[1]), &TextStyle::default());
}

#[test]
fn popping_the_base_style_is_unbalanced() {
    assert_eq!(
        seg_err("{b}bold{/b}{/b}"),
        LayoutError::UnbalancedTag("b".into())
    );
}

#[test]
fn unknown_tags_are_rejected() {
    assert_eq!(seg_err("{frob}x{/frob}"), LayoutError::UnknownTag("frob".into()));
}

#[test]
fn bare_tags_select_presets() {
    let mut styles = StyleSet::default();
    let shout = TextStyle {
        bold: true,
        size: 28,
        ..TextStyle::default()
    };
    styles.add_preset("shout", shout.clone());
    let out = seg_with("{shout}HI{/shout}ok", &styles, None);
    let runs = &out.paragraphs[0];
    assert_eq!(style_of(&runs[0]), &shout);
    assert_eq!(style_of(&runs[1]), &TextStyle::default());
}

#[test]
fn relative_sizes_nest_and_revert() {
    let out = seg("{size=24}a{size=+4}b{size=-4}c{/size}{/size}{/size}d");
    let runs = &out.paragraphs[0];
    assert_eq!(style_of(&runs[0]).size, 24);
    assert_eq!(style_of(&runs[1]).size, 28);
    assert_eq!(style_of(&runs[2]).size, 24);
    assert_eq!(style_of(&runs[3]).size, TextStyle::default().size);
}

#[test]
fn malformed_sizes_are_rejected() {
    assert_eq!(
        seg_err("{size=big}"),
        LayoutError::MalformedAttribute {
            tag: "size".into(),
            value: "big".into(),
        }
    );
}

#[test]
fn valueless_attribute_tags_are_rejected() {
    assert_eq!(
        seg_err("{font}"),
        LayoutError::MalformedAttribute {
            tag: "font".into(),
            value: String::new(),
        }
    );
}

#[test]
fn color_values_are_parsed_as_css() {
    let out = seg("{color=#ff0000}x{/color}");
    let expected = parse_color("#ff0000").unwrap().to_alpha_color::<Srgb>();
    assert_eq!(style_of(&out.paragraphs[0][0]).color, expected);
}

#[test]
fn malformed_colors_are_rejected() {
    assert_eq!(
        seg_err("{color=notacolor}"),
        LayoutError::MalformedAttribute {
            tag: "color".into(),
            value: "notacolor".into(),
        }
    );
}

#[test]
fn plain_clears_decorations_but_keeps_the_rest() {
    let out = seg("{color=#00f}{b}{i}{plain}x{/plain}{/i}{/b}{/color}");
    let style = style_of(&out.paragraphs[0][0]);
    assert!(!style.bold && !style.italic && !style.underline && !style.strikethrough);
    let blue = parse_color("#00f").unwrap().to_alpha_color::<Srgb>();
    assert_eq!(style.color, blue);
}

#[test]
fn start_marker_counts_emitted_runs() {
    let out = seg("ab {_start}cd");
    assert_eq!(out.start_run, Some(1));
    // The marker leaves the style stack alone.
    assert_eq!(style_of(&out.paragraphs[0][1]), &TextStyle::default());
}

#[test]
fn last_start_marker_wins() {
    let out = seg("a{_start}b{_start}c");
    assert_eq!(out.start_run, Some(2));
}

#[test]
fn start_marker_counts_across_paragraphs() {
    let out = seg("a\nb{_start}c");
    assert_eq!(out.start_run, Some(2));
}

#[test]
fn timing_tags_are_geometry_neutral() {
    let out = seg("{w}a{fast}b{nw}");
    let runs = &out.paragraphs[0];
    assert_eq!(runs.len(), 2);
    assert_eq!(style_of(&runs[0]), &TextStyle::default());
    assert_eq!(style_of(&runs[1]), &TextStyle::default());
}

#[test]
fn decoration_tags_stack() {
    let out = seg("{u}{s}x{/s}{/u}");
    let style = style_of(&out.paragraphs[0][0]);
    assert!(style.underline && style.strikethrough);
}
