//! The canonical default theme.
//!
//! Every hole left by a partially specified theme is filled from
//! [`default_definition`]. The instance is complete by construction: each
//! group below is a resolved struct, so a missing key is a compile error.

use std::sync::LazyLock;

use crate::theming::schema::*;

/// Slug of the built-in default theme.
pub const DEFAULT_THEME_SLUG: &str = "default";

/// Display name of the built-in default theme.
pub const DEFAULT_THEME_NAME: &str = "Default";

/// Version string stamped on the built-in default theme.
pub const DEFAULT_THEME_VERSION: &str = "1.0.0";

/// Base colour of the default primary palette; also the `color_at` fallback.
pub const DEFAULT_PRIMARY_BASE: &str = "#70843d";

static DEFAULT_DEFINITION: LazyLock<ThemeDefinition> = LazyLock::new(build_default_definition);

/// The complete default theme definition.
pub fn default_definition() -> &'static ThemeDefinition {
    &DEFAULT_DEFINITION
}

/// The default theme as a draft document, used to seed the store and as
/// the validator self-test.
pub fn default_theme_draft() -> ThemeDraft {
    ThemeDraft {
        name: Some(DEFAULT_THEME_NAME.to_string()),
        slug: Some(DEFAULT_THEME_SLUG.to_string()),
        description: Some("Built-in storefront theme".to_string()),
        version: Some(DEFAULT_THEME_VERSION.to_string()),
        tags: vec!["system".to_string(), "light".to_string()],
        preview: None,
        is_active: Some(true),
        is_default: Some(true),
        overrides: default_definition().to_overrides(),
    }
}

fn s(value: &str) -> String {
    value.to_string()
}

fn scale(values: [&str; 11]) -> ColorScale {
    ColorScale::from_steps(values.map(s))
}

fn families(names: &[&str]) -> Vec<String> {
    names.iter().map(|n| s(n)).collect()
}

fn build_default_definition() -> ThemeDefinition {
    ThemeDefinition {
        color_scheme: default_color_scheme(),
        typography: default_typography(),
        spacing: default_spacing(),
        borders: default_borders(),
    }
}

fn default_color_scheme() -> ColorScheme {
    ColorScheme {
        primary: scale([
            "#f1f3ec", "#e2e6d8", "#c6ceb1", "#a9b58b", "#8d9d64", "#70843d", "#5c6d32",
            "#485527", "#343e1c", "#202612", "#161a0c",
        ]),
        secondary: scale([
            "#f8f3ef", "#f0e6de", "#e1cdbd", "#d3b59c", "#c49c7b", "#b5835a", "#956c4a",
            "#75543a", "#543d2a", "#34261a", "#241a12",
        ]),
        neutral: scale([
            "#f1f1f1", "#e3e3e3", "#c7c7c7", "#ababab", "#8f8f8f", "#737373", "#5f5f5f",
            "#4a4a4a", "#363636", "#212121", "#171717",
        ]),
        success: scale([
            "#e9f9ef", "#d3f3df", "#a7e8bf", "#7adc9e", "#4ed17e", "#22c55e", "#1ca24d",
            "#167f3d", "#105c2c", "#0a391b", "#072713",
        ]),
        error: scale([
            "#fdecec", "#fcdada", "#f9b4b4", "#f58f8f", "#f26969", "#ef4444", "#c53838",
            "#9a2c2c", "#702020", "#451414", "#300e0e",
        ]),
        warning: scale([
            "#fef5e7", "#fdecce", "#fbd89d", "#f9c56d", "#f7b13c", "#f59e0b", "#c98209",
            "#9e6607", "#724a05", "#472e03", "#312002",
        ]),
        info: scale([
            "#ebf3fe", "#d8e6fd", "#b1cdfb", "#89b4fa", "#629bf8", "#3b82f6", "#316bca",
            "#26549f", "#1c3d73", "#112647", "#0c1a31",
        ]),
        background: BackgroundColors {
            primary: s("#ffffff"),
            secondary: s("#f9faf7"),
            tertiary: s("#f1f3ec"),
            inverse: s("#202612"),
            overlay: s("rgba(22, 26, 12, 0.6)"),
        },
        text: TextColors {
            primary: s("#212121"),
            secondary: s("#4a4a4a"),
            tertiary: s("#737373"),
            muted: s("#8f8f8f"),
            inverse: s("#ffffff"),
            link: s("#5c6d32"),
            link_hover: s("#485527"),
        },
        border: BorderColors {
            light: s("#e3e3e3"),
            medium: s("#c7c7c7"),
            dark: s("#8f8f8f"),
            focus: s("#70843d"),
        },
        gradients: Gradients {
            primary: s("linear-gradient(135deg, #70843d 0%, #485527 100%)"),
            secondary: s("linear-gradient(135deg, #b5835a 0%, #75543a 100%)"),
            accent: s("linear-gradient(90deg, #8d9d64 0%, #c49c7b 100%)"),
            hero: s("linear-gradient(180deg, rgba(32, 38, 18, 0.2) 0%, rgba(32, 38, 18, 0.8) 100%)"),
            button: s("linear-gradient(135deg, #8d9d64 0%, #70843d 100%)"),
            card: s("linear-gradient(180deg, #ffffff 0%, #f9faf7 100%)"),
            overlay: s("linear-gradient(180deg, rgba(0, 0, 0, 0) 0%, rgba(0, 0, 0, 0.6) 100%)"),
        },
        ui: UiColors {
            badge: BadgeColors {
                sale: s("#ef4444"),
                new: s("#70843d"),
                featured: s("#b5835a"),
                discount: s("#f59e0b"),
            },
            rating: RatingColors {
                star: s("#f59e0b"),
                star_empty: s("#e3e3e3"),
            },
            status: StatusColors {
                in_stock: s("#22c55e"),
                low_stock: s("#f59e0b"),
                out_of_stock: s("#ef4444"),
                preorder: s("#3b82f6"),
            },
            interactive: InteractiveColors {
                hover: s("#5c6d32"),
                active: s("#485527"),
                focus: s("#8d9d64"),
                disabled: s("#c7c7c7"),
            },
            card: CardColors {
                background: s("#ffffff"),
                border: s("#e3e3e3"),
                hover: s("#f9faf7"),
                shadow: s("rgba(0, 0, 0, 0.08)"),
            },
            form: FormColors {
                input_background: s("#ffffff"),
                input_border: s("#c7c7c7"),
                input_focus: s("#70843d"),
                placeholder: s("#8f8f8f"),
                label: s("#4a4a4a"),
            },
            nav: NavColors {
                background: s("#ffffff"),
                text: s("#212121"),
                hover: s("#70843d"),
                active: s("#5c6d32"),
            },
            footer: FooterColors {
                background: s("#202612"),
                text: s("#e2e6d8"),
                link: s("#c6ceb1"),
                link_hover: s("#ffffff"),
            },
            hero: HeroColors {
                background: s("#343e1c"),
                overlay: s("rgba(22, 26, 12, 0.5)"),
                text: s("#ffffff"),
                accent: s("#d3b59c"),
            },
            pagination: PaginationColors {
                background: s("#ffffff"),
                text: s("#4a4a4a"),
                active: s("#70843d"),
                hover: s("#f1f3ec"),
            },
            loading: LoadingColors {
                spinner: s("#70843d"),
                skeleton: s("#e3e3e3"),
                skeleton_highlight: s("#f1f1f1"),
            },
            alert: AlertColors {
                success_background: s("#e9f9ef"),
                error_background: s("#fdecec"),
                warning_background: s("#fef5e7"),
                info_background: s("#ebf3fe"),
            },
        },
    }
}

fn default_typography() -> Typography {
    Typography {
        font_family: FontFamilies {
            sans: families(&["Inter", "system-ui", "-apple-system", "Segoe UI", "sans-serif"]),
            serif: families(&["Merriweather", "Georgia", "Cambria", "serif"]),
            mono: families(&["JetBrains Mono", "Menlo", "Consolas", "monospace"]),
        },
        font_size: FontSizes {
            xs: s("0.75rem"),
            sm: s("0.875rem"),
            base: s("1rem"),
            lg: s("1.125rem"),
            xl: s("1.25rem"),
            xl2: s("1.5rem"),
            xl3: s("1.875rem"),
            xl4: s("2.25rem"),
            xl5: s("3rem"),
            xl6: s("3.75rem"),
        },
        font_weight: FontWeights {
            light: s("300"),
            normal: s("400"),
            medium: s("500"),
            semibold: s("600"),
            bold: s("700"),
            extrabold: s("800"),
        },
        line_height: LineHeights {
            none: s("1"),
            tight: s("1.25"),
            snug: s("1.375"),
            normal: s("1.5"),
            relaxed: s("1.625"),
            loose: s("2"),
        },
        letter_spacing: LetterSpacings {
            tighter: s("-0.05em"),
            tight: s("-0.025em"),
            normal: s("0em"),
            wide: s("0.025em"),
            wider: s("0.05em"),
            widest: s("0.1em"),
        },
    }
}

fn default_spacing() -> Spacing {
    Spacing {
        scale: SpacingScale {
            s0: s("0"),
            s1: s("0.25rem"),
            s2: s("0.5rem"),
            s3: s("0.75rem"),
            s4: s("1rem"),
            s5: s("1.25rem"),
            s6: s("1.5rem"),
            s8: s("2rem"),
            s10: s("2.5rem"),
            s12: s("3rem"),
            s16: s("4rem"),
            s20: s("5rem"),
            s24: s("6rem"),
            s32: s("8rem"),
            s40: s("10rem"),
            s48: s("12rem"),
            s56: s("14rem"),
            s64: s("16rem"),
        },
        container: Containers {
            sm: s("640px"),
            md: s("768px"),
            lg: s("1024px"),
            xl: s("1280px"),
            xl2: s("1536px"),
        },
    }
}

fn default_borders() -> Borders {
    Borders {
        radius: Radii {
            none: s("0"),
            sm: s("0.125rem"),
            base: s("0.25rem"),
            md: s("0.375rem"),
            lg: s("0.5rem"),
            xl: s("0.75rem"),
            xl2: s("1rem"),
            full: s("9999px"),
        },
        width: BorderWidths {
            w0: s("0"),
            w1: s("1px"),
            w2: s("2px"),
            w4: s("4px"),
            w8: s("8px"),
        },
        shadow: Shadows {
            none: s("none"),
            sm: s("0 1px 2px 0 rgba(0, 0, 0, 0.05)"),
            base: s("0 1px 3px 0 rgba(0, 0, 0, 0.1), 0 1px 2px 0 rgba(0, 0, 0, 0.06)"),
            md: s("0 4px 6px -1px rgba(0, 0, 0, 0.1), 0 2px 4px -1px rgba(0, 0, 0, 0.06)"),
            lg: s("0 10px 15px -3px rgba(0, 0, 0, 0.1), 0 4px 6px -2px rgba(0, 0, 0, 0.05)"),
            xl: s("0 20px 25px -5px rgba(0, 0, 0, 0.1), 0 10px 10px -5px rgba(0, 0, 0, 0.04)"),
            xl2: s("0 25px 50px -12px rgba(0, 0, 0, 0.25)"),
            inner: s("inset 0 2px 4px 0 rgba(0, 0, 0, 0.06)"),
        },
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
