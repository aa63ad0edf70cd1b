//! Typed editing surface for brick configuration.
//!
//! A host UI asks a brick for its [`EditorField`] list, lets the user edit
//! one value in a numeric popup, and hands the result back as a
//! [`FieldEdit`]. The edit is tagged with the [`BrickField`] it belongs to
//! and dispatched through the brick's single typed handler — no widget-type
//! inspection anywhere.

use serde::{Deserialize, Serialize};

// ── Field identity ──────────────────────────────────────────────────────────

/// Identifies one editable field of a brick.
///
/// The set is shared across brick kinds; each brick owns a subset. Handing
/// a brick an edit for a field it does not own is an editor wiring bug and
/// panics in [`Brick::apply_edit`](crate::Brick::apply_edit).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BrickField {
    /// Destination X coordinate, in integer stage units.
    DestinationX,
    /// Destination Y coordinate, in integer stage units.
    DestinationY,
    /// Duration in decimal seconds (stored by bricks as milliseconds).
    DurationSeconds,
}

// ── Values, fields, edits ───────────────────────────────────────────────────

/// A numeric field value, as the editor popups produce them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum FieldValue {
    /// Whole-number value from the integer popup.
    Integer(i32),
    /// Decimal value from the decimal popup.
    Decimal(f64),
}

/// One field as presented to the host UI: identity plus current value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EditorField {
    /// Which field this is.
    pub field: BrickField,
    /// The field's current value, formatted for display.
    pub value: FieldValue,
}

/// The result of a completed edit, tagged with the field it belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FieldEdit {
    /// Which field was edited.
    pub field: BrickField,
    /// The edited value.
    pub value: FieldValue,
}

impl EditorField {
    /// An integer field with its current value.
    #[must_use]
    pub fn integer(field: BrickField, value: i32) -> Self {
        Self {
            field,
            value: FieldValue::Integer(value),
        }
    }

    /// A decimal field with its current value.
    #[must_use]
    pub fn decimal(field: BrickField, value: f64) -> Self {
        Self {
            field,
            value: FieldValue::Decimal(value),
        }
    }
}

impl FieldEdit {
    /// An integer edit result.
    #[must_use]
    pub fn integer(field: BrickField, value: i32) -> Self {
        Self {
            field,
            value: FieldValue::Integer(value),
        }
    }

    /// A decimal edit result.
    #[must_use]
    pub fn decimal(field: BrickField, value: f64) -> Self {
        Self {
            field,
            value: FieldValue::Decimal(value),
        }
    }
}
