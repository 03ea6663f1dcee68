//! Resolved style descriptors.
//!
//! A [`StyleDescriptor`] is what a resolver hands to the rendering layer:
//! background, foreground and border, each expressed as design tokens rather
//! than literal colours. [`Palette::resolve`](crate::tokens::Palette::resolve)
//! turns one into concrete colours.

use std::fmt;

use crate::tokens::ColorToken;

/// A fill: either nothing, or a design token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Paint {
    Transparent,
    Token(ColorToken),
}

impl Paint {
    /// The token, if this paint has one.
    pub fn token(self) -> Option<ColorToken> {
        match self {
            Paint::Transparent => None,
            Paint::Token(token) => Some(token),
        }
    }
}

impl From<ColorToken> for Paint {
    fn from(token: ColorToken) -> Self {
        Paint::Token(token)
    }
}

impl fmt::Display for Paint {
    /// CSS value: `transparent` or `var(--token)`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Paint::Transparent => f.write_str("transparent"),
            Paint::Token(token) => f.write_str(&token.css_var()),
        }
    }
}

/// Border line style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineStyle {
    Solid,
}

impl LineStyle {
    pub fn as_str(self) -> &'static str {
        match self {
            LineStyle::Solid => "solid",
        }
    }
}

/// A border: absent, or a line of a given pixel width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BorderSpec {
    None,
    Line {
        width: u8,
        style: LineStyle,
        color: ColorToken,
    },
}

impl BorderSpec {
    /// A solid border `width` pixels wide.
    pub const fn solid(width: u8, color: ColorToken) -> Self {
        BorderSpec::Line {
            width,
            style: LineStyle::Solid,
            color,
        }
    }

    /// Border width in pixels; 0 when there is no border.
    pub fn width(&self) -> u8 {
        match self {
            BorderSpec::None => 0,
            BorderSpec::Line { width, .. } => *width,
        }
    }

    /// Border colour token, if any.
    pub fn color(&self) -> Option<ColorToken> {
        match self {
            BorderSpec::None => None,
            BorderSpec::Line { color, .. } => Some(*color),
        }
    }
}

impl fmt::Display for BorderSpec {
    /// CSS value: `none` or `1px solid var(--token)`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BorderSpec::None => f.write_str("none"),
            BorderSpec::Line { width, style, color } => {
                write!(f, "{width}px {} {}", style.as_str(), color.css_var())
            }
        }
    }
}

/// The visual attributes a resolver derives from a set of variant flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StyleDescriptor {
    pub background: Paint,
    pub foreground: Paint,
    pub border: BorderSpec,
}

impl StyleDescriptor {
    pub fn new(background: impl Into<Paint>, foreground: impl Into<Paint>, border: BorderSpec) -> Self {
        Self {
            background: background.into(),
            foreground: foreground.into(),
            border,
        }
    }

    /// Inline CSS declarations, in `background`, `color`, `border` order.
    pub fn to_css(&self) -> String {
        format!(
            "background: {}; color: {}; border: {};",
            self.background, self.foreground, self.border
        )
    }
}
