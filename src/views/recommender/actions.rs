//! Semantic action IDs for Skill Recommender click targets.

// ── Picker ───────────────────────────────────────────────────
/// Autocomplete option: +index into the filtered suggestions.
pub const SUGGESTION_BASE: u16 = 10;
pub const SUGGESTION_SLOTS: u16 = 50;

// ── Selected chips ───────────────────────────────────────────
/// Chip delete: +index in selection order (0..5).
pub const CHIP_BASE: u16 = 70;

// ── Controls ─────────────────────────────────────────────────
pub const RESET: u16 = 80;
pub const START_OVER: u16 = 81;

// ── Notice popup ─────────────────────────────────────────────
pub const DISMISS_NOTICE: u16 = 90;
