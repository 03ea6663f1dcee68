//! Integration tests for variant-showcase.
//!
//! These tests exercise the public API from outside the crate, verifying that
//! the resolvers, matrix, playground and showcase agree with each other.

use std::collections::HashSet;
use std::time::{Duration, Instant};

use pretty_assertions::assert_eq;

use variant_showcase::components::*;
use variant_showcase::matrix::{enumerate, ComponentKind, Matrix};
use variant_showcase::playground::{ControlChange, ControlId, PlaygroundError, Tab};
use variant_showcase::showcase::{Showcase, ShowcaseConfig};
use variant_showcase::style::{BorderSpec, Paint};
use variant_showcase::testing::{button_matrix_to_string, text_field_matrix_to_string};
use variant_showcase::tokens::{Color, ColorToken, Palette};
use variant_showcase::{enumerate_button_matrix, enumerate_text_field_matrix};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn every_button_combination() -> impl Iterator<Item = ButtonVariantFlags> {
    Hierarchy::ALL.into_iter().flat_map(|h| {
        ButtonState::ALL.into_iter().flat_map(move |s| {
            (0..16u8).map(move |bits| {
                ButtonVariantFlags::new()
                    .with_hierarchy(h)
                    .with_state(s)
                    .icon_only(bits & 1 != 0)
                    .alternative(bits & 2 != 0)
                    .danger(bits & 4 != 0)
                    .success(bits & 8 != 0)
            })
        })
    })
}

// ---------------------------------------------------------------------------
// Button resolver
// ---------------------------------------------------------------------------

#[test]
fn test_disabled_foreground_is_disabled_token() {
    for flags in every_button_combination().filter(|f| f.state == ButtonState::Disabled) {
        assert_eq!(
            resolve_button_style(&flags).foreground,
            Paint::Token(ColorToken::ButtonDisabled)
        );
    }
}

#[test]
fn test_danger_preferred_over_success_at_every_state() {
    for state in ButtonState::ALL {
        for hierarchy in Hierarchy::ALL {
            let both = ButtonVariantFlags::new()
                .with_hierarchy(hierarchy)
                .with_state(state)
                .danger(true)
                .success(true);
            let danger = both.clone().success(false);
            assert_eq!(resolve_button_style(&both), resolve_button_style(&danger));
        }
    }
}

#[test]
fn test_button_resolution_is_idempotent() {
    for flags in every_button_combination() {
        assert_eq!(resolve_button_style(&flags), resolve_button_style(&flags));
    }
}

#[test]
fn test_button_css_output() {
    let flags = ButtonVariantFlags::new()
        .with_hierarchy(Hierarchy::Tertiary)
        .with_state(ButtonState::Focus);
    assert_eq!(
        resolve_button_style(&flags).to_css(),
        "background: transparent; color: var(--button-tertiary); \
         border: 2px solid var(--button-tertiary);"
    );
}

// ---------------------------------------------------------------------------
// TextField resolver
// ---------------------------------------------------------------------------

#[test]
fn test_text_field_disabled_state_forces_flag() {
    let flags = TextFieldVariantFlags::new()
        .with_state(TextFieldState::Disabled)
        .with_value("x")
        .disabled(false);
    let style = resolve_text_field_style(&flags);
    assert!(style.disabled);
    assert_eq!(
        style.descriptor.background,
        Paint::Token(ColorToken::TextFieldBgDisabled)
    );
    assert_eq!(
        style.descriptor.border,
        BorderSpec::solid(1, ColorToken::TextFieldBorderDisabled)
    );
}

#[test]
fn test_floating_label_visibility() {
    let empty = TextFieldVariantFlags::new().floating_label(true).with_value("");
    assert!(!resolve_text_field_style(&empty).show_floating_label);

    let filled = TextFieldVariantFlags::new().floating_label(true).with_value("abc");
    assert!(resolve_text_field_style(&filled).show_floating_label);
}

// ---------------------------------------------------------------------------
// Matrix
// ---------------------------------------------------------------------------

#[test]
fn test_button_matrix_count_and_exclusion() {
    let rows = enumerate_button_matrix();
    assert_eq!(rows.len(), 180);
    assert!(rows.iter().all(|r| !(r.flags.danger && r.flags.success)));
}

#[test]
fn test_button_matrix_reproducible() {
    assert_eq!(enumerate_button_matrix(), enumerate_button_matrix());
    assert_eq!(
        button_matrix_to_string(&enumerate_button_matrix()),
        button_matrix_to_string(&enumerate_button_matrix())
    );
}

#[test]
fn test_text_field_matrix_covers_states_once() {
    let rows = enumerate_text_field_matrix();
    assert_eq!(rows.len(), 14);
    let seen: HashSet<_> = rows
        .iter()
        .map(|r| (r.flags.state, r.flags.floating_label))
        .collect();
    for state in TextFieldState::ALL {
        assert!(seen.contains(&(state, false)));
        assert!(seen.contains(&(state, true)));
    }
}

#[test]
fn test_enumerate_by_kind_matches_direct_calls() {
    match enumerate(ComponentKind::Button) {
        Matrix::Button(rows) => assert_eq!(rows, enumerate_button_matrix()),
        other => panic!("expected button matrix, got {:?}", other.kind()),
    }
    match enumerate(ComponentKind::TextField) {
        Matrix::TextField(rows) => assert_eq!(rows, enumerate_text_field_matrix()),
        other => panic!("expected text field matrix, got {:?}", other.kind()),
    }
}

#[test]
fn test_text_field_table_lists_every_row() {
    let output = text_field_matrix_to_string(&enumerate_text_field_matrix());
    assert_eq!(output.lines().count(), 16);
    assert!(output.contains("textfield-bg-disabled"));
}

// ---------------------------------------------------------------------------
// Playground
// ---------------------------------------------------------------------------

#[test]
fn test_preview_and_matrix_never_diverge() {
    let mut showcase = Showcase::new(ShowcaseConfig::new()).unwrap();
    let playground = showcase.playground_mut();
    playground
        .apply(ControlChange::Hierarchy(Hierarchy::Secondary))
        .unwrap();
    playground.apply(ControlChange::State(ButtonState::Active)).unwrap();
    playground.apply(ControlChange::Alternative(true)).unwrap();

    let preview = playground.preview();
    let row = playground
        .matrix()
        .iter()
        .find(|r| {
            r.flags.hierarchy == preview.flags.hierarchy
                && r.flags.state == preview.flags.state
                && r.flags.icon_only == preview.flags.icon_only
                && r.flags.alternative == preview.flags.alternative
                && r.flags.danger == preview.flags.danger
                && r.flags.success == preview.flags.success
        })
        .expect("matrix row for preview flags");
    assert_eq!(row.style, preview.style);
}

#[test]
fn test_playground_control_locking() {
    let mut showcase = Showcase::new(ShowcaseConfig::new()).unwrap();
    let playground = showcase.playground_mut();

    playground.apply(ControlChange::Success(true)).unwrap();
    assert_eq!(
        playground.apply(ControlChange::Danger(true)),
        Err(PlaygroundError::ControlDisabled {
            control: ControlId::Danger
        })
    );
    let danger = playground
        .controls()
        .into_iter()
        .find(|c| c.id == ControlId::Danger)
        .unwrap();
    assert!(!danger.enabled);
}

#[test]
fn test_playground_code_tab_and_copy() {
    let mut showcase = Showcase::new(
        ShowcaseConfig::new().with_copy_notice(Duration::from_millis(500)),
    )
    .unwrap();
    let playground = showcase.playground_mut();
    playground.apply(ControlChange::IconOnly(true)).unwrap();
    playground.select_tab(Tab::Code);
    assert_eq!(playground.tab().title(), "Show Code");

    let now = Instant::now();
    let code = playground.copy_code(now);
    assert!(code.contains("iconOnly={true}"));
    assert!(!code.contains("label="));
    assert_eq!(playground.copy_notice(now), Some("Copied!"));
    assert_eq!(playground.copy_notice(now + Duration::from_millis(500)), None);
}

// ---------------------------------------------------------------------------
// Palette and token sheets
// ---------------------------------------------------------------------------

#[test]
fn test_showcase_palette_from_token_sheet() {
    let sheet = "
        /* brand overrides */
        :root {
            --button-danger: #ff0000;
            --button-on-color: #000;
        }
    ";
    let showcase = Showcase::new(
        ShowcaseConfig::new()
            .with_title("Components")
            .with_token_sheet(sheet),
    )
    .unwrap();
    assert_eq!(showcase.title(), Some("Components"));

    let style = resolve_button_style(&ButtonVariantFlags::new().danger(true));
    let colors = showcase.colors(&style);
    assert_eq!(colors.background, Some(Color::rgb(255, 0, 0)));
    assert_eq!(colors.foreground, Some(Color::rgb(0, 0, 0)));
    assert_eq!(colors.border, None);
}

#[test]
fn test_transparent_paint_resolves_to_none() {
    let style = resolve_button_style(&ButtonVariantFlags::new().with_hierarchy(Hierarchy::Tertiary));
    let colors = Palette::default().resolve(&style);
    assert_eq!(colors.background, None);
    assert_eq!(colors.foreground, Some(ColorToken::ButtonTertiary.default_color()));
}

#[test]
fn test_invalid_sheet_is_an_error() {
    assert!(Showcase::new(ShowcaseConfig::new().with_token_sheet(":root { --a: ; }")).is_err());
}

#[test]
fn test_malformed_colour_leaves_palette_unchanged() {
    let mut palette = Palette::default();
    for sheet in [
        ":root { --button-primary: #ffffff999; }",
        ":root { --button-primary: 1#000; }",
        ":root { --button-primary: #fff%; }",
    ] {
        assert!(palette.apply_sheet(sheet).is_err(), "accepted {sheet}");
    }
    assert_eq!(palette, Palette::default());
}
