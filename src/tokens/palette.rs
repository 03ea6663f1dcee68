//! Design-token palette: semantic colour tokens and their concrete values.
//!
//! Components never reference literal colours. They resolve to a
//! [`ColorToken`], and a [`Palette`] maps each token to a [`Color`]. The
//! default palette carries a value for every token, so lookups never fail.

use std::fmt;

use crate::style::{BorderSpec, Paint, StyleDescriptor};
use crate::tokens::parser::{parse_token_sheet, TokenSheetError};

// ---------------------------------------------------------------------------
// ColorToken
// ---------------------------------------------------------------------------

/// A named semantic colour from the design system.
///
/// Each token corresponds to a CSS custom property (`--button-primary`, ...)
/// so the same names can be overridden from a token sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ColorToken {
    // Button
    ButtonPrimary,
    ButtonPrimaryHover,
    ButtonPrimaryActive,
    ButtonPrimaryDisabled,
    ButtonDisabled,
    ButtonOnColor,
    ButtonSecondaryHover,
    ButtonSecondaryActive,
    ButtonSecondaryAlt,
    ButtonTertiary,
    ButtonTertiaryHover,
    ButtonTertiaryActive,
    ButtonTertiaryAlt,
    ButtonDanger,
    ButtonDangerHover,
    ButtonDangerActive,
    ButtonSuccess,
    ButtonSuccessHover,
    ButtonSuccessActive,

    // Text field
    TextFieldBorder,
    TextFieldBorderHover,
    TextFieldBorderSelected,
    TextFieldBorderError,
    TextFieldBorderSuccess,
    TextFieldBorderDisabled,
    TextFieldBg,
    TextFieldBgDisabled,
    TextFieldText,
    TextFieldLabel,
    TextFieldLabelSelected,
    TextFieldLabelError,
    TextFieldLabelSuccess,
    TextFieldErrorText,
}

impl ColorToken {
    /// Number of tokens in the design system.
    pub const COUNT: usize = 33;

    /// Every token, in declaration order.
    pub const ALL: [ColorToken; Self::COUNT] = [
        ColorToken::ButtonPrimary,
        ColorToken::ButtonPrimaryHover,
        ColorToken::ButtonPrimaryActive,
        ColorToken::ButtonPrimaryDisabled,
        ColorToken::ButtonDisabled,
        ColorToken::ButtonOnColor,
        ColorToken::ButtonSecondaryHover,
        ColorToken::ButtonSecondaryActive,
        ColorToken::ButtonSecondaryAlt,
        ColorToken::ButtonTertiary,
        ColorToken::ButtonTertiaryHover,
        ColorToken::ButtonTertiaryActive,
        ColorToken::ButtonTertiaryAlt,
        ColorToken::ButtonDanger,
        ColorToken::ButtonDangerHover,
        ColorToken::ButtonDangerActive,
        ColorToken::ButtonSuccess,
        ColorToken::ButtonSuccessHover,
        ColorToken::ButtonSuccessActive,
        ColorToken::TextFieldBorder,
        ColorToken::TextFieldBorderHover,
        ColorToken::TextFieldBorderSelected,
        ColorToken::TextFieldBorderError,
        ColorToken::TextFieldBorderSuccess,
        ColorToken::TextFieldBorderDisabled,
        ColorToken::TextFieldBg,
        ColorToken::TextFieldBgDisabled,
        ColorToken::TextFieldText,
        ColorToken::TextFieldLabel,
        ColorToken::TextFieldLabelSelected,
        ColorToken::TextFieldLabelError,
        ColorToken::TextFieldLabelSuccess,
        ColorToken::TextFieldErrorText,
    ];

    /// The custom property name, without the leading `--`.
    pub fn name(self) -> &'static str {
        match self {
            ColorToken::ButtonPrimary => "button-primary",
            ColorToken::ButtonPrimaryHover => "button-primary-hover",
            ColorToken::ButtonPrimaryActive => "button-primary-active",
            ColorToken::ButtonPrimaryDisabled => "button-primary-disabled",
            ColorToken::ButtonDisabled => "button-disabled",
            ColorToken::ButtonOnColor => "button-on-color",
            ColorToken::ButtonSecondaryHover => "button-secondary-hover",
            ColorToken::ButtonSecondaryActive => "button-secondary-active",
            ColorToken::ButtonSecondaryAlt => "button-secondary-alt",
            ColorToken::ButtonTertiary => "button-tertiary",
            ColorToken::ButtonTertiaryHover => "button-tertiary-hover",
            ColorToken::ButtonTertiaryActive => "button-tertiary-active",
            ColorToken::ButtonTertiaryAlt => "button-tertiary-alt",
            ColorToken::ButtonDanger => "button-danger",
            ColorToken::ButtonDangerHover => "button-danger-hover",
            ColorToken::ButtonDangerActive => "button-danger-active",
            ColorToken::ButtonSuccess => "button-success",
            ColorToken::ButtonSuccessHover => "button-success-hover",
            ColorToken::ButtonSuccessActive => "button-success-active",
            ColorToken::TextFieldBorder => "textfield-border",
            ColorToken::TextFieldBorderHover => "textfield-border-hover",
            ColorToken::TextFieldBorderSelected => "textfield-border-selected",
            ColorToken::TextFieldBorderError => "textfield-border-error",
            ColorToken::TextFieldBorderSuccess => "textfield-border-success",
            ColorToken::TextFieldBorderDisabled => "textfield-border-disabled",
            ColorToken::TextFieldBg => "textfield-bg",
            ColorToken::TextFieldBgDisabled => "textfield-bg-disabled",
            ColorToken::TextFieldText => "textfield-text",
            ColorToken::TextFieldLabel => "textfield-label",
            ColorToken::TextFieldLabelSelected => "textfield-label-selected",
            ColorToken::TextFieldLabelError => "textfield-label-error",
            ColorToken::TextFieldLabelSuccess => "textfield-label-success",
            ColorToken::TextFieldErrorText => "textfield-error-text",
        }
    }

    /// Look up a token by its custom property name (with or without `--`).
    pub fn from_name(name: &str) -> Option<ColorToken> {
        let name = name.strip_prefix("--").unwrap_or(name);
        Self::ALL.iter().copied().find(|token| token.name() == name)
    }

    /// CSS reference to this token: `var(--button-primary)`.
    pub fn css_var(self) -> String {
        format!("var(--{})", self.name())
    }

    /// Value used when no token sheet overrides this token.
    pub fn default_color(self) -> Color {
        match self {
            ColorToken::ButtonPrimary => Color::rgb(0x55, 0x68, 0xf2),
            ColorToken::ButtonPrimaryHover => Color::rgb(0x44, 0x57, 0xe0),
            ColorToken::ButtonPrimaryActive => Color::rgb(0x33, 0x45, 0xc7),
            ColorToken::ButtonPrimaryDisabled => Color::rgb(0xef, 0xf1, 0xff),
            ColorToken::ButtonDisabled => Color::rgb(0xc9, 0xcf, 0xff),
            ColorToken::ButtonOnColor => Color::rgb(0xff, 0xff, 0xff),
            ColorToken::ButtonSecondaryHover => Color::rgb(0x44, 0x57, 0xe0),
            ColorToken::ButtonSecondaryActive => Color::rgb(0x33, 0x45, 0xc7),
            ColorToken::ButtonSecondaryAlt => Color::rgb(0x23, 0x23, 0x23),
            ColorToken::ButtonTertiary => Color::rgb(0x55, 0x68, 0xf2),
            ColorToken::ButtonTertiaryHover => Color::rgb(0x44, 0x57, 0xe0),
            ColorToken::ButtonTertiaryActive => Color::rgb(0x33, 0x45, 0xc7),
            ColorToken::ButtonTertiaryAlt => Color::rgb(0x23, 0x23, 0x23),
            ColorToken::ButtonDanger => Color::rgb(0xef, 0x57, 0x6b),
            ColorToken::ButtonDangerHover => Color::rgb(0xcf, 0x45, 0x5c),
            ColorToken::ButtonDangerActive => Color::rgb(0xb0, 0x3a, 0x4e),
            ColorToken::ButtonSuccess => Color::rgb(0x00, 0xa0, 0x78),
            ColorToken::ButtonSuccessHover => Color::rgb(0x00, 0x85, 0x63),
            ColorToken::ButtonSuccessActive => Color::rgb(0x00, 0x6b, 0x50),
            ColorToken::TextFieldBorder => Color::rgb(0x23, 0x23, 0x23),
            ColorToken::TextFieldBorderHover => Color::rgb(0x5a, 0x6e, 0xff),
            ColorToken::TextFieldBorderSelected => Color::rgb(0x55, 0x68, 0xf2),
            ColorToken::TextFieldBorderError => Color::rgb(0xef, 0x57, 0x6b),
            ColorToken::TextFieldBorderSuccess => Color::rgb(0x00, 0xa0, 0x78),
            ColorToken::TextFieldBorderDisabled => Color::rgb(0xc9, 0xcf, 0xff),
            ColorToken::TextFieldBg => Color::rgb(0xff, 0xff, 0xff),
            ColorToken::TextFieldBgDisabled => Color::rgb(0xef, 0xf1, 0xff),
            ColorToken::TextFieldText => Color::rgb(0x23, 0x23, 0x23),
            ColorToken::TextFieldLabel => Color::rgb(0x23, 0x23, 0x23),
            ColorToken::TextFieldLabelSelected => Color::rgb(0x55, 0x68, 0xf2),
            ColorToken::TextFieldLabelError => Color::rgb(0xcf, 0x45, 0x5c),
            ColorToken::TextFieldLabelSuccess => Color::rgb(0x00, 0x85, 0x63),
            ColorToken::TextFieldErrorText => Color::rgb(0xcf, 0x45, 0x5c),
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for ColorToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ---------------------------------------------------------------------------
// Color
// ---------------------------------------------------------------------------

/// An sRGB colour with alpha.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    /// Fully transparent black.
    pub const TRANSPARENT: Color = Color::rgba(0, 0, 0, 0);

    /// Opaque colour from components.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 0xff }
    }

    /// Colour from components including alpha.
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Parse `#rgb`, `#rgba`, `#rrggbb` or `#rrggbbaa`. The `#` is optional.
    pub fn from_hex(input: &str) -> Option<Color> {
        let hex = input.strip_prefix('#').unwrap_or(input);
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }

        // Short forms double each digit: `f` -> `ff`.
        let short = |i: usize| u8::from_str_radix(&hex[i..i + 1], 16).ok().map(|v| v * 17);
        let long = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();

        match hex.len() {
            3 => Some(Color::rgb(short(0)?, short(1)?, short(2)?)),
            4 => Some(Color::rgba(short(0)?, short(1)?, short(2)?, short(3)?)),
            6 => Some(Color::rgb(long(0)?, long(2)?, long(4)?)),
            8 => Some(Color::rgba(long(0)?, long(2)?, long(4)?, long(6)?)),
            _ => None,
        }
    }

    /// Whether the colour is fully opaque.
    pub fn is_opaque(&self) -> bool {
        self.a == 0xff
    }
}

impl fmt::Display for Color {
    /// Lowercase hex; the alpha pair is only written when not opaque.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)?;
        if !self.is_opaque() {
            write!(f, "{:02x}", self.a)?;
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Palette
// ---------------------------------------------------------------------------

/// Concrete colours for every [`ColorToken`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: [Color; ColorToken::COUNT],
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            colors: ColorToken::ALL.map(ColorToken::default_color),
        }
    }
}

impl Palette {
    /// The default design-system palette.
    pub fn new() -> Self {
        Self::default()
    }

    /// Colour for a token.
    pub fn get(&self, token: ColorToken) -> Color {
        self.colors[token.index()]
    }

    /// Override one token.
    pub fn set(&mut self, token: ColorToken, color: Color) {
        self.colors[token.index()] = color;
    }

    /// Override one token (builder).
    pub fn with(mut self, token: ColorToken, color: Color) -> Self {
        self.set(token, color);
        self
    }

    /// Concrete colour for a paint. `None` means transparent.
    pub fn paint(&self, paint: Paint) -> Option<Color> {
        match paint {
            Paint::Transparent => None,
            Paint::Token(token) => Some(self.get(token)),
        }
    }

    /// Replace every token reference in a descriptor with its colour.
    pub fn resolve(&self, style: &StyleDescriptor) -> ResolvedStyle {
        ResolvedStyle {
            background: self.paint(style.background),
            foreground: self.paint(style.foreground),
            border: match style.border {
                BorderSpec::None => None,
                BorderSpec::Line { width, color, .. } => Some((width, self.get(color))),
            },
        }
    }

    /// The default palette with a token sheet applied on top.
    pub fn from_sheet(input: &str) -> Result<Self, TokenSheetError> {
        let mut palette = Self::default();
        palette.apply_sheet(input)?;
        Ok(palette)
    }

    /// Apply a token sheet's declarations in source order, so later
    /// declarations win. Unknown names are skipped. Returns how many
    /// declarations were applied.
    ///
    /// The palette is left untouched when the sheet fails to parse.
    pub fn apply_sheet(&mut self, input: &str) -> Result<usize, TokenSheetError> {
        let sheet = parse_token_sheet(input)?;
        let mut applied = 0;

        for decl in sheet.declarations {
            match ColorToken::from_name(&decl.name) {
                Some(token) => {
                    self.set(token, decl.value);
                    applied += 1;
                }
                None => log::warn!("ignoring unknown design token --{}", decl.name),
            }
        }

        log::debug!("applied {applied} design token override(s)");
        Ok(applied)
    }

    /// Iterate over `(token, colour)` pairs in token order.
    pub fn iter(&self) -> impl Iterator<Item = (ColorToken, Color)> + '_ {
        ColorToken::ALL.iter().map(move |&token| (token, self.get(token)))
    }
}

/// A [`StyleDescriptor`] with token references replaced by concrete colours.
///
/// `None` for background/foreground means transparent; `None` for the border
/// means no border. Borders are `(width_px, colour)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedStyle {
    pub background: Option<Color>,
    pub foreground: Option<Color>,
    pub border: Option<(u8, Color)>,
}
