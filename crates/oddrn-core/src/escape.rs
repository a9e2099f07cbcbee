//! Delimiter escaping for free-form path values.
//!
//! Values such as object-store keys or filesystem paths may contain the
//! path delimiter. They are escaped once when they enter a `PathState` so the
//! rendered identifier keeps exactly one segment per declared level.

use std::borrow::Cow;

/// Segment delimiter of the wire format.
pub const DELIMITER: char = '/';

/// Reserved token substituted for each delimiter inside a value.
pub const ESCAPED_DELIMITER: &str = "\\\\";

/// Replace every delimiter in `value` with the escape token.
#[must_use]
pub fn escape(value: &str) -> Cow<'_, str> {
    if value.contains(DELIMITER) {
        Cow::Owned(value.replace(DELIMITER, ESCAPED_DELIMITER))
    } else {
        Cow::Borrowed(value)
    }
}

/// Inverse of [`escape`].
#[must_use]
pub fn unescape(value: &str) -> Cow<'_, str> {
    if value.contains(ESCAPED_DELIMITER) {
        Cow::Owned(value.replace(ESCAPED_DELIMITER, DELIMITER.encode_utf8(&mut [0; 4])))
    } else {
        Cow::Borrowed(value)
    }
}
