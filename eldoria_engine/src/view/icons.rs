//! module Icons
//!
//! Unicode icons used for the various message types.

pub(crate) const ICON_ERROR: &str = "⚠︎"; // U+26A0 U+FE0E
pub(crate) const ICON_ENGINE: &str = "⚙";
pub(crate) const ICON_EVENT: &str = "⚡︎"; // U+26A1 U+FE0E
pub(crate) const ICON_ITEM: &str = "➕";
pub(crate) const ICON_HARMED: &str = "\u{2623}"; // biohazard sign
pub(crate) const ICON_HEALED: &str = "\u{2624}"; // caduceus
pub(crate) const ICON_STRIKE: &str = "⚔";
pub(crate) const ICON_DEATH: &str = "☠";
pub(crate) const ICON_CELEBRATE: &str = "🎉"; // U+1F389
