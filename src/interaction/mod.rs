//! The part-selection and material-coloring state machine.
//!
//! [`Configurator`] is the single owner of interaction state: hovered slot,
//! selected slot, edit-mode flag, the externally observed picker color, and
//! the live per-slot color/opacity directives the render host applies each
//! frame. All transitions are synchronous event handlers that run to
//! completion; there is exactly one event source (the host's pointer/UI
//! stream), so no handler ever observes a half-applied transition.
//!
//! The live color mapping always stays total: it starts as the derived
//! mapping of the injected initial theme and only ever changes through
//! whole-mapping resets ([`Configurator::theme_changed`]) or single-slot
//! overrides ([`Configurator::color_picked`]).

use crate::cursor::{cursor_for, CursorRequest};
use crate::slots::{derive_colors, ColorMapping, MaterialSlot};
use crate::theme::{Color, Theme};

/// Opacity of demoted parts while edit mode is active.
pub const DIMMED_OPACITY: f32 = 0.6;
/// Opacity of the selected part and of all parts outside edit mode.
pub const FULL_OPACITY: f32 = 1.0;

const INITIAL_PICKER_COLOR: Color = Color::rgb(0xff, 0xff, 0xff);

/// Per-slot render directive: color plus opacity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlotStyle {
    pub color: Color,
    pub opacity: f32,
}

pub struct Configurator {
    hovered: Option<MaterialSlot>,
    selected: Option<MaterialSlot>,
    edit_mode: bool,
    picker_color: Color,
    live: ColorMapping,
    opacity: [f32; MaterialSlot::COUNT],
}

impl Configurator {
    /// Initial state: edit mode off, nothing hovered or selected, colors
    /// seeded from the injected theme, everything fully opaque.
    pub fn new(initial_theme: &Theme) -> Self {
        Self {
            hovered: None,
            selected: None,
            edit_mode: false,
            picker_color: INITIAL_PICKER_COLOR,
            live: derive_colors(initial_theme),
            opacity: [FULL_OPACITY; MaterialSlot::COUNT],
        }
    }

    /// Theme switch is a full reset: the live mapping becomes the derived
    /// mapping of the new theme and every prior override is discarded, so a
    /// fresh palette previews without stale edits. Hover, selection and
    /// opacities are untouched.
    pub fn theme_changed(&mut self, theme: &Theme) {
        self.live = derive_colors(theme);
        log::info!("theme changed to {:?}, overrides discarded", theme.name);
    }

    /// Pointer entered a part. Idempotent; never touches color or opacity.
    pub fn pointer_over(&mut self, slot: MaterialSlot) {
        self.hovered = Some(slot);
    }

    /// Pointer left a part. Hover clears only when the pointer no longer
    /// intersects any part of the model; crossing an internal boundary
    /// (overlapping geometry) leaves the hover in place. Which part was
    /// left does not matter for the transition, only the remaining
    /// intersection count.
    pub fn pointer_out(&mut self, _slot: MaterialSlot, remaining_intersections: usize) {
        if remaining_intersections == 0 {
            self.hovered = None;
        }
    }

    /// Click on a part. Outside edit mode this is a no-op for coloring
    /// (pointer semantics belong to the host's camera controls). In edit
    /// mode: demote every part to the dimmed opacity, restore the target to
    /// fully opaque, select it, and seed the picker with its current live
    /// color so the color-picker control opens on the part's existing color.
    pub fn pointer_down(&mut self, slot: MaterialSlot) {
        if !self.edit_mode {
            return;
        }
        self.set_all_opacities(DIMMED_OPACITY);
        self.opacity[slot as usize] = FULL_OPACITY;
        self.selected = Some(slot);
        self.picker_color = self.live.get(slot);
        log::debug!("selected {:?}", slot);
    }

    /// Toggle edit mode. Entering dims every part, leaving restores full
    /// opacity. Selection deliberately survives the toggle, but re-entering
    /// does not re-highlight it: a retained selection stays dimmed until the
    /// next click.
    pub fn set_edit_mode(&mut self, on: bool) {
        self.edit_mode = on;
        self.set_all_opacities(if on { DIMMED_OPACITY } else { FULL_OPACITY });
        log::debug!("edit mode {}", if on { "on" } else { "off" });
    }

    /// Picker value changed. Overrides the selected slot's live color; with
    /// no selection the event is dropped, not queued.
    pub fn color_picked(&mut self, color: Color) {
        if let Some(slot) = self.selected {
            self.live.set(slot, color);
            self.picker_color = color;
        }
    }

    pub fn hovered(&self) -> Option<MaterialSlot> {
        self.hovered
    }

    pub fn selected(&self) -> Option<MaterialSlot> {
        self.selected
    }

    pub fn edit_mode(&self) -> bool {
        self.edit_mode
    }

    /// The value any external color-picker control should display.
    pub fn picker_color(&self) -> Color {
        self.picker_color
    }

    pub fn live_color(&self, slot: MaterialSlot) -> Color {
        self.live.get(slot)
    }

    pub fn slot_style(&self, slot: MaterialSlot) -> SlotStyle {
        SlotStyle {
            color: self.live.get(slot),
            opacity: self.opacity[slot as usize],
        }
    }

    /// Per-slot render directives, one entry per slot.
    pub fn styles(&self) -> impl Iterator<Item = (MaterialSlot, SlotStyle)> + '_ {
        MaterialSlot::ALL
            .into_iter()
            .map(move |slot| (slot, self.slot_style(slot)))
    }

    pub fn cursor_request(&self) -> CursorRequest {
        cursor_for(self.hovered, &self.live)
    }

    fn set_all_opacities(&mut self, opacity: f32) {
        self.opacity = [opacity; MaterialSlot::COUNT];
    }
}
