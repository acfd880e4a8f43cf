//! Spacing constants for consistent layout.
//!
//! All values are in pixels (f32) and follow a consistent scale.

/// Extra small spacing - tight gaps between related elements
pub const SPACING_XS: f32 = 4.0;

/// Small spacing - small gaps, icon margins
pub const SPACING_SM: f32 = 8.0;

/// Medium spacing - default padding, standard gaps
pub const SPACING_MD: f32 = 16.0;

/// Large spacing - section padding, major gaps
pub const SPACING_LG: f32 = 24.0;

/// Extra large spacing - page margins, large separations
pub const SPACING_XL: f32 = 32.0;

/// Small radius - buttons, inputs, chips
pub const BORDER_RADIUS_SM: f32 = 4.0;

/// Medium radius - cards, panels
pub const BORDER_RADIUS_MD: f32 = 6.0;

/// Large radius - modals, dialogs
pub const BORDER_RADIUS_LG: f32 = 8.0;

/// Full/pill radius - type badges and chips
pub const BORDER_RADIUS_FULL: f32 = 9999.0;

/// Card sprite edge length
pub const SPRITE_SIZE: f32 = 96.0;

/// Detail overlay artwork edge length
pub const ARTWORK_SIZE: f32 = 180.0;

/// Detail overlay width
pub const MODAL_WIDTH: f32 = 460.0;
