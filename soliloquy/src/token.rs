// Copyright 2026 the Soliloquy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tokenization of tagged text into a flat token stream.
//!
//! Tokenization is a pure function of its input: no shared state, no side
//! effects. Order is significant and preserved.

use crate::embed::EmbedId;
use crate::error::LayoutError;

/// One item of a text object's content list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Content {
    /// Text scanned for `{...}` markup tags. `{{` escapes a literal brace.
    Markup(String),
    /// Text rendered verbatim; `{` has no special meaning.
    Plain(String),
    /// An embedded object to be laid out inline.
    Embed(EmbedId),
}

/// Atomic unit of the tag-parsed input stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// A run of text to which the current style applies.
    Text(String),
    /// An explicit paragraph boundary.
    ParagraphBreak,
    /// An embedded object, referenced by handle.
    Embed(EmbedId),
    /// A markup tag, split into its name and optional `=` payload.
    Tag {
        /// Tag name, including a leading `/` for closing tags.
        name: String,
        /// Payload after `=`, if any.
        value: Option<String>,
    },
}

/// Converts an ordered content list into an ordered token sequence.
pub fn tokenize(content: &[Content]) -> Result<Vec<Token>, LayoutError> {
    let mut tokens = Vec::new();
    for item in content {
        match item {
            Content::Markup(text) => tokenize_markup(text, &mut tokens)?,
            Content::Plain(text) => tokenize_plain(text, &mut tokens),
            Content::Embed(id) => tokens.push(Token::Embed(*id)),
        }
    }
    Ok(tokens)
}

fn flush(run: &mut String, tokens: &mut Vec<Token>) {
    if !run.is_empty() {
        tokens.push(Token::Text(core::mem::take(run)));
    }
}

/// Scans `text` for `{tag}`, `{tag=value}` and `{/tag}` delimiters, yielding
/// interleaved text and tag tokens. Newlines yield paragraph breaks.
fn tokenize_markup(text: &str, tokens: &mut Vec<Token>) -> Result<(), LayoutError> {
    let mut run = String::new();
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '\n' => {
                flush(&mut run, tokens);
                tokens.push(Token::ParagraphBreak);
            }
            '{' => {
                if chars.peek() == Some(&'{') {
                    chars.next();
                    run.push('{');
                    continue;
                }
                flush(&mut run, tokens);
                let mut tag = String::new();
                let mut closed = false;
                for c in chars.by_ref() {
                    if c == '}' {
                        closed = true;
                        break;
                    }
                    tag.push(c);
                }
                if !closed {
                    return Err(LayoutError::UnterminatedTag(tag));
                }
                let (name, value) = match tag.split_once('=') {
                    Some((name, value)) => (name.to_owned(), Some(value.to_owned())),
                    None => (tag, None),
                };
                tokens.push(Token::Tag { name, value });
            }
            _ => run.push(c),
        }
    }
    flush(&mut run, tokens);
    Ok(())
}

/// Yields only text and paragraph-break tokens; braces are literal.
fn tokenize_plain(text: &str, tokens: &mut Vec<Token>) {
    let mut run = String::new();
    for c in text.chars() {
        if c == '\n' {
            flush(&mut run, tokens);
            tokens.push(Token::ParagraphBreak);
        } else {
            run.push(c);
        }
    }
    flush(&mut run, tokens);
}
