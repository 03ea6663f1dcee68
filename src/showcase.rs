//! Showcase struct: configuration, palette and playground.
//!
//! [`Showcase`] compiles the configured token sheet into a [`Palette`] and
//! mounts a [`Playground`]. It is the one object a rendering layer needs.

use std::time::Duration;

use crate::components::ButtonVariantFlags;
use crate::playground::{Playground, DEFAULT_COPY_NOTICE};
use crate::style::StyleDescriptor;
use crate::tokens::{Palette, ResolvedStyle, TokenSheetError};

/// Errors from building a showcase.
#[derive(Debug, thiserror::Error)]
pub enum ShowcaseError {
    #[error("invalid token sheet: {0}")]
    TokenSheet(#[from] TokenSheetError),
}

// ---------------------------------------------------------------------------
// ShowcaseConfig
// ---------------------------------------------------------------------------

/// Configuration for the showcase.
#[derive(Debug, Clone)]
pub struct ShowcaseConfig {
    /// Optional page title.
    pub title: Option<String>,
    /// Optional token sheet applied over the default palette.
    pub token_sheet: Option<String>,
    /// How long the "Copied!" notice stays up.
    pub copy_notice: Duration,
    /// Button the playground starts with.
    pub initial_flags: ButtonVariantFlags,
}

impl Default for ShowcaseConfig {
    fn default() -> Self {
        Self {
            title: None,
            token_sheet: None,
            copy_notice: DEFAULT_COPY_NOTICE,
            initial_flags: ButtonVariantFlags::default(),
        }
    }
}

impl ShowcaseConfig {
    /// Create a new default config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the title (builder).
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the token sheet (builder).
    pub fn with_token_sheet(mut self, sheet: impl Into<String>) -> Self {
        self.token_sheet = Some(sheet.into());
        self
    }

    /// Set the copy notice duration (builder).
    pub fn with_copy_notice(mut self, duration: Duration) -> Self {
        self.copy_notice = duration;
        self
    }

    /// Set the playground's starting button (builder).
    pub fn with_initial_flags(mut self, flags: ButtonVariantFlags) -> Self {
        self.initial_flags = flags;
        self
    }
}

// ---------------------------------------------------------------------------
// Showcase
// ---------------------------------------------------------------------------

/// A configured component showcase.
#[derive(Debug, Clone)]
pub struct Showcase {
    config: ShowcaseConfig,
    palette: Palette,
    playground: Playground,
}

impl Showcase {
    /// Build a showcase, compiling the token sheet if one is configured.
    pub fn new(config: ShowcaseConfig) -> Result<Self, ShowcaseError> {
        let palette = match &config.token_sheet {
            Some(sheet) => Palette::from_sheet(sheet)?,
            None => Palette::default(),
        };
        let playground = Playground::new(config.initial_flags.clone(), config.copy_notice);

        log::debug!(
            "showcase '{}' mounted",
            config.title.as_deref().unwrap_or("untitled")
        );

        Ok(Self {
            config,
            palette,
            playground,
        })
    }

    pub fn config(&self) -> &ShowcaseConfig {
        &self.config
    }

    pub fn title(&self) -> Option<&str> {
        self.config.title.as_deref()
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn playground(&self) -> &Playground {
        &self.playground
    }

    pub fn playground_mut(&mut self) -> &mut Playground {
        &mut self.playground
    }

    /// Concrete colours for a descriptor under this showcase's palette.
    pub fn colors(&self, style: &StyleDescriptor) -> ResolvedStyle {
        self.palette.resolve(style)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::{ButtonState, Hierarchy};
    use crate::tokens::{Color, ColorToken};

    #[test]
    fn config_builder() {
        let config = ShowcaseConfig::new()
            .with_title("Components")
            .with_token_sheet(":root {}")
            .with_copy_notice(Duration::from_secs(2))
            .with_initial_flags(ButtonVariantFlags::new().danger(true));
        assert_eq!(config.title.as_deref(), Some("Components"));
        assert_eq!(config.token_sheet.as_deref(), Some(":root {}"));
        assert_eq!(config.copy_notice, Duration::from_secs(2));
        assert!(config.initial_flags.danger);
    }

    #[test]
    fn default_config() {
        let config = ShowcaseConfig::default();
        assert!(config.title.is_none());
        assert!(config.token_sheet.is_none());
        assert_eq!(config.copy_notice, Duration::from_millis(1200));
    }

    #[test]
    fn showcase_without_sheet_uses_default_palette() {
        let showcase = Showcase::new(ShowcaseConfig::new()).unwrap();
        assert_eq!(showcase.palette(), &Palette::default());
        assert_eq!(showcase.title(), None);
    }

    #[test]
    fn showcase_applies_token_sheet() {
        let showcase = Showcase::new(
            ShowcaseConfig::new().with_token_sheet(":root { --button-primary: #000000; }"),
        )
        .unwrap();
        let style = showcase.playground().preview().style;
        let colors = showcase.colors(&style);
        assert_eq!(colors.background, Some(Color::rgb(0, 0, 0)));
        assert_eq!(
            colors.foreground,
            Some(ColorToken::ButtonOnColor.default_color())
        );
    }

    #[test]
    fn showcase_rejects_bad_sheet() {
        let err = Showcase::new(ShowcaseConfig::new().with_token_sheet(":root { --a: red; }"))
            .unwrap_err();
        assert!(matches!(err, ShowcaseError::TokenSheet(TokenSheetError::InvalidColor { .. })));
        assert!(err.to_string().starts_with("invalid token sheet"));
    }

    #[test]
    fn conflicting_initial_flags_keep_danger() {
        let showcase = Showcase::new(
            ShowcaseConfig::new()
                .with_initial_flags(ButtonVariantFlags::new().danger(true).success(true)),
        )
        .unwrap();
        let flags = showcase.playground().flags();
        assert!(flags.danger && !flags.success);
    }

    #[test]
    fn playground_starts_with_configured_flags() {
        let flags = ButtonVariantFlags::new()
            .with_hierarchy(Hierarchy::Tertiary)
            .with_state(ButtonState::Hover);
        let mut showcase =
            Showcase::new(ShowcaseConfig::new().with_initial_flags(flags.clone())).unwrap();
        assert_eq!(showcase.playground().flags(), &flags);
        showcase.playground_mut().select_tab(crate::playground::Tab::Matrix);
        assert_eq!(showcase.playground().tab(), crate::playground::Tab::Matrix);
    }
}
