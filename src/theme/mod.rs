//! Theme presets and the colors they carry.
//!
//! A [`Theme`] is an immutable set of four semantic colors (primary, accent,
//! body, details). The [`ThemeCatalog`] is the ordered list of presets the
//! host's theme selector surfaces; the first entry is the default theme a
//! fresh configurator starts from.

pub mod serialization;

/// Opaque RGB color, expressible as a `#rrggbb` hex string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    r: u8,
    g: u8,
    b: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid hex color {input:?}")]
pub struct ColorParseError {
    input: String,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a `#rrggbb` string. The leading `#` is optional.
    pub fn from_hex(hex: &str) -> Result<Self, ColorParseError> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 || !digits.is_ascii() {
            return Err(ColorParseError {
                input: hex.to_string(),
            });
        }
        let channel = |range| {
            u8::from_str_radix(&digits[range], 16).map_err(|_| ColorParseError {
                input: hex.to_string(),
            })
        };
        Ok(Self {
            r: channel(0..2)?,
            g: channel(2..4)?,
            b: channel(4..6)?,
        })
    }

    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Normalized RGBA for the render host, alpha fixed at 1.0.
    pub fn to_rgba_f32(self) -> [f32; 4] {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
            1.0,
        ]
    }
}

impl TryFrom<String> for Color {
    type Error = ColorParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_hex(&value)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_hex()
    }
}

/// Semantic color category a material slot is statically bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Primary,
    Accent,
    Body,
    Details,
}

/// Named color preset. Immutable once constructed.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Theme {
    pub name: String,
    pub primary: Color,
    pub accent: Color,
    pub body: Color,
    pub details: Color,
}

impl Theme {
    pub fn color(&self, role: Role) -> Color {
        match role {
            Role::Primary => self.primary,
            Role::Accent => self.accent,
            Role::Body => self.body,
            Role::Details => self.details,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("theme catalog is empty")]
    Empty,
    #[error("duplicate theme name {0:?}")]
    DuplicateName(String),
}

/// Ordered, immutable list of theme presets with unique names.
#[derive(Debug, Clone, PartialEq)]
pub struct ThemeCatalog {
    themes: Vec<Theme>,
}

impl ThemeCatalog {
    pub fn new(themes: Vec<Theme>) -> Result<Self, CatalogError> {
        if themes.is_empty() {
            return Err(CatalogError::Empty);
        }
        for (index, theme) in themes.iter().enumerate() {
            if themes[..index].iter().any(|other| other.name == theme.name) {
                return Err(CatalogError::DuplicateName(theme.name.clone()));
            }
        }
        Ok(Self { themes })
    }

    /// The factory presets shipped with the headphone model.
    pub fn builtin() -> Self {
        let themes = vec![
            Theme {
                name: "default".to_string(),
                primary: Color::rgb(0xfe, 0xd7, 0xd7),
                accent: Color::rgb(0xb9, 0x85, 0x27),
                body: Color::rgb(0xf0, 0xf0, 0xf0),
                details: Color::rgb(0x56, 0x44, 0x3c),
            },
            Theme {
                name: "dark".to_string(),
                primary: Color::rgb(0x45, 0x3a, 0x49),
                accent: Color::rgb(0xce, 0x5c, 0x0c),
                body: Color::rgb(0x19, 0x1d, 0x32),
                details: Color::rgb(0x28, 0x2f, 0x44),
            },
            Theme {
                name: "nature".to_string(),
                primary: Color::rgb(0xa1, 0xc1, 0x81),
                accent: Color::rgb(0xfc, 0xca, 0x46),
                body: Color::rgb(0x23, 0x3d, 0x4d),
                details: Color::rgb(0xfe, 0x7f, 0x2d),
            },
            Theme {
                name: "soil".to_string(),
                primary: Color::rgb(0x72, 0x00, 0x26),
                accent: Color::rgb(0xff, 0x7f, 0x51),
                body: Color::rgb(0x4f, 0x00, 0x0b),
                details: Color::rgb(0xce, 0x42, 0x57),
            },
            Theme {
                name: "ocean".to_string(),
                primary: Color::rgb(0x21, 0x9e, 0xbc),
                accent: Color::rgb(0xff, 0xb7, 0x03),
                body: Color::rgb(0x8e, 0xca, 0xe6),
                details: Color::rgb(0x02, 0x30, 0x47),
            },
            Theme {
                name: "night".to_string(),
                primary: Color::rgb(0x1b, 0x2a, 0x41),
                accent: Color::rgb(0x6e, 0x44, 0xff),
                body: Color::rgb(0x32, 0x4a, 0x5f),
                details: Color::rgb(0xb8, 0x92, 0xff),
            },
        ];
        Self { themes }
    }

    pub fn themes(&self) -> &[Theme] {
        &self.themes
    }

    pub fn theme_names(&self) -> Vec<&str> {
        self.themes.iter().map(|theme| theme.name.as_str()).collect()
    }

    pub fn get(&self, name: &str) -> Option<&Theme> {
        self.themes.iter().find(|theme| theme.name == name)
    }

    /// The theme a fresh configurator seeds its colors from.
    pub fn default_theme(&self) -> &Theme {
        &self.themes[0]
    }
}
