//! Markup generation for the "Show Code" tab.

use crate::components::ButtonVariantFlags;

/// Render the component markup equivalent to a button's flags.
///
/// One attribute per line; the `label` attribute is left out for icon-only
/// buttons since they have no visible label.
///
/// # Examples
///
/// ```
/// use variant_showcase::components::ButtonVariantFlags;
/// use variant_showcase::playground::button_markup;
///
/// let code = button_markup(&ButtonVariantFlags::new().icon_only(true));
/// assert!(code.starts_with("<Button\n"));
/// assert!(!code.contains("label="));
/// ```
pub fn button_markup(flags: &ButtonVariantFlags) -> String {
    let mut code = String::from("<Button\n");
    code.push_str(&format!("  hierarchy=\"{}\"\n", flags.hierarchy));
    code.push_str(&format!("  iconOnly={{{}}}\n", flags.icon_only));
    code.push_str(&format!("  alternative={{{}}}\n", flags.alternative));
    code.push_str(&format!("  state=\"{}\"\n", flags.state));
    code.push_str(&format!("  danger={{{}}}\n", flags.danger));
    code.push_str(&format!("  success={{{}}}\n", flags.success));
    if !flags.icon_only {
        code.push_str(&format!("  label=\"{}\"\n", flags.label));
    }
    code.push_str(&format!("  showDropdown={{{}}}\n", flags.show_dropdown));
    code.push_str("/>");

    code
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::{ButtonState, Hierarchy};

    #[test]
    fn default_button_markup() {
        insta::assert_snapshot!(button_markup(&ButtonVariantFlags::new()), @r#"
        <Button
          hierarchy="Primary"
          iconOnly={false}
          alternative={false}
          state="Default"
          danger={false}
          success={false}
          label="Button"
          showDropdown={true}
        />
        "#);
    }

    #[test]
    fn icon_only_markup_omits_label() {
        let flags = ButtonVariantFlags::new()
            .with_hierarchy(Hierarchy::Tertiary)
            .with_state(ButtonState::Focus)
            .icon_only(true)
            .danger(true)
            .show_dropdown(false);
        insta::assert_snapshot!(button_markup(&flags), @r#"
        <Button
          hierarchy="Tertiary"
          iconOnly={true}
          alternative={false}
          state="Focus"
          danger={true}
          success={false}
          showDropdown={false}
        />
        "#);
    }

    #[test]
    fn custom_label_is_written_verbatim() {
        let code = button_markup(&ButtonVariantFlags::new().with_label("Save draft"));
        assert!(code.contains("  label=\"Save draft\"\n"));
        assert!(code.ends_with("/>"));
    }
}
