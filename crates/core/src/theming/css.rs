//! Variable projection and stylesheet generation.
//!
//! Flattens a [`ResolvedTheme`] into an ordered map of style variables and
//! a block of utility rules written in terms of those variables. Variable
//! names are stable across releases; consuming stylesheets depend on them.
//!
//! ```text
//! color-<scale>-<step>     color-bg-<key>   color-text-<key>   color-border-<key>
//! gradient-<key>           ui-<group>-<key>
//! font-sans|serif|mono     text-<size>      font-<weight>      leading-<key>   tracking-<key>
//! spacing-<step>           container-<key>
//! radius-<key>             border-<width>   shadow-<key>
//! ```

use std::fmt::Write;

use indexmap::IndexMap;

use crate::theming::resolve::ResolvedTheme;
use crate::theming::schema::TokenGroup;

/// Element id of the pre-paint `<style>` tag.
pub const PREPAINT_STYLE_ID: &str = "theme-variables";

/// Flat variable namespace: name (without the leading `--`) to value, in
/// schema order.
pub type ThemeVariables = IndexMap<String, String>;

/// Project every field of `theme` into its style variable.
pub fn project_variables(theme: &ResolvedTheme) -> ThemeVariables {
    let def = &theme.definition;
    let scheme = &def.color_scheme;
    let mut vars = ThemeVariables::new();

    for (section, scale) in scheme.scales() {
        push_group(&mut vars, &format!("color-{section}"), scale);
    }
    push_group(&mut vars, "color-bg", &scheme.background);
    push_group(&mut vars, "color-text", &scheme.text);
    push_group(&mut vars, "color-border", &scheme.border);
    push_group(&mut vars, "gradient", &scheme.gradients);
    for (group, tokens) in scheme.ui.groups() {
        push_group(&mut vars, &format!("ui-{group}"), tokens);
    }

    for (family, stack) in def.typography.font_family.entries() {
        vars.insert(format!("font-{family}"), stack.join(", "));
    }
    push_group(&mut vars, "text", &def.typography.font_size);
    push_group(&mut vars, "font", &def.typography.font_weight);
    push_group(&mut vars, "leading", &def.typography.line_height);
    push_group(&mut vars, "tracking", &def.typography.letter_spacing);

    push_group(&mut vars, "spacing", &def.spacing.scale);
    push_group(&mut vars, "container", &def.spacing.container);

    push_group(&mut vars, "radius", &def.borders.radius);
    push_group(&mut vars, "border", &def.borders.width);
    push_group(&mut vars, "shadow", &def.borders.shadow);

    vars
}

fn push_group(vars: &mut ThemeVariables, prefix: &str, group: &dyn TokenGroup) {
    for (key, value) in group.entries() {
        vars.insert(format!("{prefix}-{key}"), value.to_string());
    }
}

/// Utility rules referencing the projected variables.
///
/// The rules only use `var(--...)` references, so they stay valid when the
/// variables are swapped for another theme.
pub fn utility_rules() -> String {
    const RULES: &[(&str, &[(&str, &str)])] = &[
        (
            ".bg-gradient-primary",
            &[("background", "var(--gradient-primary)")],
        ),
        (
            ".bg-gradient-secondary",
            &[("background", "var(--gradient-secondary)")],
        ),
        (".bg-gradient-hero", &[("background", "var(--gradient-hero)")]),
        (
            ".btn-primary",
            &[
                ("background", "var(--gradient-button)"),
                ("color", "var(--color-text-inverse)"),
                ("border-radius", "var(--radius-md)"),
                ("font-weight", "var(--font-semibold)"),
            ],
        ),
        (".btn-primary:hover", &[("background", "var(--color-primary-600)")]),
        (".btn-primary:active", &[("background", "var(--color-primary-700)")]),
        (
            ".container",
            &[
                ("max-width", "var(--container-xl)"),
                ("margin-left", "auto"),
                ("margin-right", "auto"),
                ("padding-left", "var(--spacing-4)"),
                ("padding-right", "var(--spacing-4)"),
            ],
        ),
        (
            ".card",
            &[
                ("background", "var(--ui-card-background)"),
                ("border", "var(--border-1) solid var(--ui-card-border)"),
                ("border-radius", "var(--radius-lg)"),
                ("box-shadow", "var(--shadow-md)"),
            ],
        ),
        (".card:hover", &[("background", "var(--ui-card-hover)")]),
        (
            ".badge-sale",
            &[
                ("background", "var(--ui-badge-sale)"),
                ("color", "var(--color-text-inverse)"),
            ],
        ),
        (
            ".badge-new",
            &[
                ("background", "var(--ui-badge-new)"),
                ("color", "var(--color-text-inverse)"),
            ],
        ),
        (".alert-success", &[("background", "var(--ui-alert-successBackground)")]),
        (".alert-error", &[("background", "var(--ui-alert-errorBackground)")]),
        (".alert-warning", &[("background", "var(--ui-alert-warningBackground)")]),
        (".alert-info", &[("background", "var(--ui-alert-infoBackground)")]),
    ];

    let mut out = String::new();
    for (selector, declarations) in RULES {
        let _ = writeln!(out, "{selector} {{");
        for (property, value) in *declarations {
            let _ = writeln!(out, "  {property}: {value};");
        }
        out.push_str("}\n");
    }
    out
}

/// Render `vars` as a `:root` custom-property block.
pub fn render_root_block(vars: &ThemeVariables) -> String {
    let mut out = String::from(":root {\n");
    for (name, value) in vars {
        let _ = writeln!(out, "  --{name}: {value};");
    }
    out.push_str("}\n");
    out
}

/// The full stylesheet for `theme`: variables followed by utility rules.
pub fn render_stylesheet(theme: &ResolvedTheme) -> String {
    let mut css = render_root_block(&project_variables(theme));
    css.push('\n');
    css.push_str(&utility_rules());
    css
}

/// A `<style>` tag carrying only the variables, for injection into the
/// document head before the client hydrates.
pub fn render_prepaint_tag(vars: &ThemeVariables) -> String {
    format!(
        "<style id=\"{PREPAINT_STYLE_ID}\">\n{}</style>",
        render_root_block(vars)
    )
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
