//! Hover feedback cursor projection.
//!
//! A pure view over the hover state and the live color mapping: while a part
//! is hovered the host is asked to show a cursor carrying the part's label
//! and current color, otherwise the default cursor. How the host renders the
//! request (SVG, native cursor, tooltip) is its own business.

use crate::slots::{ColorMapping, MaterialSlot};
use crate::theme::Color;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CursorRequest {
    Default,
    Part { label: &'static str, color: Color },
}

pub fn cursor_for(hovered: Option<MaterialSlot>, live: &ColorMapping) -> CursorRequest {
    match hovered {
        Some(slot) => CursorRequest::Part {
            label: slot.name(),
            color: live.get(slot),
        },
        None => CursorRequest::Default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::slots::derive_colors;
    use crate::theme::ThemeCatalog;

    #[test]
    fn default_cursor_when_nothing_hovered() {
        let live = derive_colors(ThemeCatalog::builtin().default_theme());
        assert_eq!(cursor_for(None, &live), CursorRequest::Default);
    }

    #[test]
    fn hovered_cursor_carries_label_and_live_color() {
        let mut live = derive_colors(ThemeCatalog::builtin().default_theme());
        assert_eq!(
            cursor_for(Some(MaterialSlot::Headband), &live),
            CursorRequest::Part {
                label: "headband",
                color: Color::from_hex("#b98527").unwrap(),
            }
        );

        // Overrides show through: the cursor reflects the live mapping.
        live.set(MaterialSlot::Headband, Color::rgb(0x12, 0x34, 0x56));
        assert_eq!(
            cursor_for(Some(MaterialSlot::Headband), &live),
            CursorRequest::Part {
                label: "headband",
                color: Color::rgb(0x12, 0x34, 0x56),
            }
        );
    }
}
