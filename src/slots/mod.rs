//! Material slots of the headphone model and per-slot color mappings.
//!
//! Every independently colorable surface region of the model is one
//! [`MaterialSlot`]. The slot set is closed: it matches the material names
//! the asset exports, one entry per region. Each slot owns exactly one
//! [`Role`] through the static table in [`MaterialSlot::role`]; the table is
//! exhaustive by construction because it is a match over the closed enum.

use crate::theme::{Color, Role, Theme};

/// Closed enumeration of the model's colorable surface regions.
///
/// Discriminants index [`ColorMapping`] storage, so the declaration order
/// here and in [`MaterialSlot::ALL`] must stay in sync.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MaterialSlot {
    SocketSecond,
    SocketFirst,
    BandLower,
    Caps,
    Rings,
    RodLower,
    RodUpper,
    Screws,
    BandUpper,
    GridLower,
    Speakers,
    DriverLeft,
    DriverRight,
    GridUpper,
    Pads,
    Headband,
}

impl MaterialSlot {
    pub const COUNT: usize = 16;

    pub const ALL: [MaterialSlot; Self::COUNT] = [
        Self::SocketSecond,
        Self::SocketFirst,
        Self::BandLower,
        Self::Caps,
        Self::Rings,
        Self::RodLower,
        Self::RodUpper,
        Self::Screws,
        Self::BandUpper,
        Self::GridLower,
        Self::Speakers,
        Self::DriverLeft,
        Self::DriverRight,
        Self::GridUpper,
        Self::Pads,
        Self::Headband,
    ];

    /// The part/material name as exported in the model asset.
    pub fn name(self) -> &'static str {
        match self {
            Self::SocketSecond => "socketSecond",
            Self::SocketFirst => "socketFirst",
            Self::BandLower => "bandLower",
            Self::Caps => "caps",
            Self::Rings => "rings",
            Self::RodLower => "rodLower",
            Self::RodUpper => "rodUpper",
            Self::Screws => "screws",
            Self::BandUpper => "bandUpper",
            Self::GridLower => "gridLower",
            Self::Speakers => "speakers",
            Self::DriverLeft => "driverLeft",
            Self::DriverRight => "driverRight",
            Self::GridUpper => "gridUpper",
            Self::Pads => "pads",
            Self::Headband => "headband",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|slot| slot.name() == name)
    }

    /// Static slot-to-role table. Fixed at design time, not user-editable.
    pub fn role(self) -> Role {
        match self {
            Self::Headband | Self::DriverLeft | Self::DriverRight => Role::Accent,
            Self::BandUpper | Self::Pads => Role::Primary,
            Self::GridLower | Self::Speakers | Self::GridUpper => Role::Details,
            Self::SocketSecond
            | Self::SocketFirst
            | Self::BandLower
            | Self::Caps
            | Self::Rings
            | Self::RodLower
            | Self::RodUpper
            | Self::Screws => Role::Body,
        }
    }
}

/// Total mapping from slot to color. Backed by an array over the closed
/// enum, so every slot always has an entry.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorMapping {
    colors: [Color; MaterialSlot::COUNT],
}

impl ColorMapping {
    pub fn get(&self, slot: MaterialSlot) -> Color {
        self.colors[slot as usize]
    }

    pub fn set(&mut self, slot: MaterialSlot, color: Color) {
        self.colors[slot as usize] = color;
    }

    pub fn iter(&self) -> impl Iterator<Item = (MaterialSlot, Color)> + '_ {
        MaterialSlot::ALL
            .into_iter()
            .map(move |slot| (slot, self.get(slot)))
    }
}

/// Derive the full per-slot color mapping for a theme: each slot takes the
/// theme color of its role. Pure and deterministic.
pub fn derive_colors(theme: &Theme) -> ColorMapping {
    let mut colors = [theme.color(Role::Body); MaterialSlot::COUNT];
    for slot in MaterialSlot::ALL {
        colors[slot as usize] = theme.color(slot.role());
    }
    ColorMapping { colors }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::ThemeCatalog;

    #[test]
    fn all_covers_every_discriminant_in_order() {
        for (index, slot) in MaterialSlot::ALL.into_iter().enumerate() {
            assert_eq!(slot as usize, index);
        }
        assert_eq!(MaterialSlot::ALL.len(), MaterialSlot::COUNT);
    }

    #[test]
    fn part_names_roundtrip() {
        for slot in MaterialSlot::ALL {
            assert_eq!(MaterialSlot::from_name(slot.name()), Some(slot));
        }
        assert_eq!(MaterialSlot::from_name("holder"), None);
        assert_eq!(MaterialSlot::from_name("Headband"), None);
    }

    #[test]
    fn role_table_matches_the_model() {
        use MaterialSlot::*;
        let accents: Vec<_> = MaterialSlot::ALL
            .into_iter()
            .filter(|slot| slot.role() == Role::Accent)
            .collect();
        assert_eq!(accents, vec![DriverLeft, DriverRight, Headband]);

        let primaries: Vec<_> = MaterialSlot::ALL
            .into_iter()
            .filter(|slot| slot.role() == Role::Primary)
            .collect();
        assert_eq!(primaries, vec![BandUpper, Pads]);

        let details = MaterialSlot::ALL
            .into_iter()
            .filter(|slot| slot.role() == Role::Details)
            .count();
        assert_eq!(details, 3);

        let bodies = MaterialSlot::ALL
            .into_iter()
            .filter(|slot| slot.role() == Role::Body)
            .count();
        assert_eq!(bodies, 8);
    }

    #[test]
    fn derivation_is_total_for_every_builtin_theme() {
        let catalog = ThemeCatalog::builtin();
        for theme in catalog.themes() {
            let mapping = derive_colors(theme);
            for slot in MaterialSlot::ALL {
                assert_eq!(mapping.get(slot), theme.color(slot.role()));
            }
            assert_eq!(mapping.iter().count(), MaterialSlot::COUNT);
        }
    }

    #[test]
    fn derivation_is_deterministic() {
        let catalog = ThemeCatalog::builtin();
        let theme = catalog.get("dark").unwrap();
        assert_eq!(derive_colors(theme), derive_colors(theme));
    }

    #[test]
    fn default_theme_spot_values() {
        let catalog = ThemeCatalog::builtin();
        let mapping = derive_colors(catalog.default_theme());
        assert_eq!(mapping.get(MaterialSlot::Headband).to_hex(), "#b98527");
        assert_eq!(mapping.get(MaterialSlot::Pads).to_hex(), "#fed7d7");
        assert_eq!(mapping.get(MaterialSlot::Caps).to_hex(), "#f0f0f0");
        assert_eq!(mapping.get(MaterialSlot::Speakers).to_hex(), "#56443c");
    }

    #[test]
    fn mapping_set_changes_only_that_slot() {
        let catalog = ThemeCatalog::builtin();
        let mut mapping = derive_colors(catalog.default_theme());
        let before = mapping.clone();
        mapping.set(MaterialSlot::Rings, Color::rgb(1, 2, 3));
        for slot in MaterialSlot::ALL {
            if slot == MaterialSlot::Rings {
                assert_eq!(mapping.get(slot), Color::rgb(1, 2, 3));
            } else {
                assert_eq!(mapping.get(slot), before.get(slot));
            }
        }
    }
}
