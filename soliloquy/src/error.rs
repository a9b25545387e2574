// Copyright 2026 the Soliloquy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Layout errors.

use thiserror::Error;

/// Errors produced while turning tagged text into a [`Layout`](crate::Layout).
///
/// Every variant is fatal to the current layout attempt. There is no partial
/// rendering of malformed markup: content is expected to be fixed at
/// authoring time, so the engine fails fast and never logs-and-swallows.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum LayoutError {
    /// An input item that is neither renderable text nor an embeddable
    /// object known to the host.
    #[error("cannot display {0} as text")]
    UnsupportedContent(String),
    /// A closing tag with no matching open tag.
    #[error("{{/{0}}} closes a text tag that isn't open")]
    UnbalancedTag(String),
    /// A tag name the engine does not recognize.
    #[error("unknown text tag {0:?}")]
    UnknownTag(String),
    /// A tag payload that failed to parse, or a missing payload on a tag
    /// that requires one.
    #[error("malformed {tag} tag value {value:?}")]
    MalformedAttribute {
        /// The offending tag name.
        tag: String,
        /// The raw payload, empty when the payload was missing entirely.
        value: String,
    },
    /// A `{` in markup text with no matching `}`.
    #[error("text tag {0:?} is never closed")]
    UnterminatedTag(String),
    /// The font service failed to provide a font.
    #[error("failed to load font {id:?}: {reason}")]
    FontLoad {
        /// The font identifier that was requested.
        id: String,
        /// The font service's description of the failure.
        reason: String,
    },
}
