//! canlab - interactive headphone configurator core.
//!
//! The crate owns the part-selection and material-coloring state machine for
//! a customizable headphone model, plus the pieces that feed it:
//!
//! - [`theme`]: the preset catalog and the four semantic color roles.
//! - [`slots`]: the closed set of colorable surface regions, the static
//!   slot-to-role table, and theme-to-color derivation.
//! - [`registry`]: load-time binding of the model's part names to slots,
//!   validated exhaustively at startup.
//! - [`interaction`]: the state machine consuming pointer/theme/edit-mode/
//!   picker events and producing per-slot `(color, opacity)` directives.
//! - [`motion`]: the per-frame idle sway of the whole model.
//! - [`cursor`]: the hover feedback cursor projection.
//!
//! Windowing, rendering, asset loading and the control panel are external
//! hosts; they talk to this crate only through the types above.

pub mod cursor;
pub mod interaction;
pub mod motion;
pub mod registry;
pub mod slots;
pub mod theme;
