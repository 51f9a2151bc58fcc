//! Selection ranges over blocks.

use serde::{Deserialize, Serialize};

/// An anchor/focus position pair over blocks: the cursor or a
/// highlighted range.
///
/// The anchor is where the selection started, the focus where it
/// currently ends; `is_backward` records that the focus precedes the
/// anchor in document order. Empty keys mean the selection is not
/// bound to any block.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionState {
    anchor_key: String,
    anchor_offset: usize,
    focus_key: String,
    focus_offset: usize,
    is_backward: bool,
    has_focus: bool,
}

impl SelectionState {
    /// A selection spanning from anchor to focus.
    #[must_use]
    pub fn new(
        anchor_key: impl Into<String>,
        anchor_offset: usize,
        focus_key: impl Into<String>,
        focus_offset: usize,
        is_backward: bool,
    ) -> Self {
        Self {
            anchor_key: anchor_key.into(),
            anchor_offset,
            focus_key: focus_key.into(),
            focus_offset,
            is_backward,
            has_focus: false,
        }
    }

    /// A collapsed selection at offset 0 of `key`.
    #[must_use]
    pub fn collapsed_at(key: impl Into<String>) -> Self {
        let key = key.into();
        Self {
            anchor_key: key.clone(),
            focus_key: key,
            ..Self::default()
        }
    }

    /// Key of the block holding the anchor.
    #[must_use]
    pub fn anchor_key(&self) -> &str {
        &self.anchor_key
    }

    /// Character offset of the anchor within its block.
    #[must_use]
    pub fn anchor_offset(&self) -> usize {
        self.anchor_offset
    }

    /// Key of the block holding the focus.
    #[must_use]
    pub fn focus_key(&self) -> &str {
        &self.focus_key
    }

    /// Character offset of the focus within its block.
    #[must_use]
    pub fn focus_offset(&self) -> usize {
        self.focus_offset
    }

    /// Whether the focus precedes the anchor in document order.
    #[must_use]
    pub fn is_backward(&self) -> bool {
        self.is_backward
    }

    /// Whether the editing surface currently holds focus.
    #[must_use]
    pub fn has_focus(&self) -> bool {
        self.has_focus
    }

    /// Whether anchor and focus coincide.
    #[must_use]
    pub fn is_collapsed(&self) -> bool {
        self.anchor_key == self.focus_key && self.anchor_offset == self.focus_offset
    }

    /// Key of the document-order start of the range.
    #[must_use]
    pub fn start_key(&self) -> &str {
        if self.is_backward {
            &self.focus_key
        } else {
            &self.anchor_key
        }
    }

    /// Offset of the document-order start of the range.
    #[must_use]
    pub fn start_offset(&self) -> usize {
        if self.is_backward {
            self.focus_offset
        } else {
            self.anchor_offset
        }
    }

    /// Key of the document-order end of the range.
    #[must_use]
    pub fn end_key(&self) -> &str {
        if self.is_backward {
            &self.anchor_key
        } else {
            &self.focus_key
        }
    }

    /// Offset of the document-order end of the range.
    #[must_use]
    pub fn end_offset(&self) -> usize {
        if self.is_backward {
            self.anchor_offset
        } else {
            self.focus_offset
        }
    }

    /// Returns a copy with focus granted or revoked.
    #[must_use]
    pub fn with_focus(&self, has_focus: bool) -> Self {
        let mut next = self.clone();
        next.has_focus = has_focus;
        next
    }
}
