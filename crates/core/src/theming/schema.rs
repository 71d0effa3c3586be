//! The closed theme schema.
//!
//! Every section exists in two forms: a resolved form where each key holds
//! a value, and a partial twin where each key is optional. Resolution
//! (see [`super::resolve`]) turns partials into resolved values by merging
//! key-by-key over the defaults. Unknown JSON keys are ignored on input.
//!
//! Fixed-key string groups are declared through [`token_group!`], which
//! also emits the ordered key table used by the variable projection.

use serde::{Deserialize, Serialize};
use validator::Validate;

// ---------------------------------------------------------------------------
// Token groups
// ---------------------------------------------------------------------------

/// Read access shared by every fixed-key string group.
pub trait TokenGroup {
    /// Schema keys in declaration order.
    fn keys(&self) -> &'static [&'static str];

    /// Value stored under `key`, or `None` if the key is not in the schema.
    fn lookup(&self, key: &str) -> Option<&str>;

    /// `(key, value)` pairs in declaration order.
    fn entries(&self) -> Vec<(&'static str, &str)>;
}

/// Declare a resolved group struct, its partial twin and the merge between
/// them. Keys are the literal JSON names.
macro_rules! token_group {
    (
        $(#[$meta:meta])*
        $name:ident / $partial:ident {
            $( $field:ident => $key:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
        pub struct $name {
            $(
                #[serde(rename = $key)]
                pub $field: String,
            )+
        }

        #[doc = concat!("Partially specified [`", stringify!($name), "`].")]
        #[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
        #[serde(default)]
        pub struct $partial {
            $(
                #[serde(rename = $key, skip_serializing_if = "Option::is_none")]
                pub $field: Option<String>,
            )+
        }

        impl $name {
            pub const KEYS: &'static [&'static str] = &[$($key),+];

            /// Overlay the keys present in `overlay`; every other key keeps
            /// its current value.
            pub fn merged(&self, overlay: &$partial) -> Self {
                Self {
                    $(
                        $field: overlay
                            .$field
                            .clone()
                            .unwrap_or_else(|| self.$field.clone()),
                    )+
                }
            }

            pub fn to_partial(&self) -> $partial {
                $partial {
                    $( $field: Some(self.$field.clone()), )+
                }
            }
        }

        impl TokenGroup for $name {
            fn keys(&self) -> &'static [&'static str] {
                Self::KEYS
            }

            fn lookup(&self, key: &str) -> Option<&str> {
                match key {
                    $( $key => Some(self.$field.as_str()), )+
                    _ => None,
                }
            }

            fn entries(&self) -> Vec<(&'static str, &str)> {
                vec![$( ($key, self.$field.as_str()) ),+]
            }
        }

        impl $partial {
            pub fn lookup(&self, key: &str) -> Option<&str> {
                match key {
                    $( $key => self.$field.as_deref(), )+
                    _ => None,
                }
            }

            /// `true` when no key is set.
            pub fn is_empty(&self) -> bool {
                true $( && self.$field.is_none() )+
            }
        }
    };
}

// ---------------------------------------------------------------------------
// Colours
// ---------------------------------------------------------------------------

token_group! {
    /// An 11-step tint-to-shade progression of one colour family.
    ColorScale / PartialColorScale {
        s50 => "50",
        s100 => "100",
        s200 => "200",
        s300 => "300",
        s400 => "400",
        s500 => "500",
        s600 => "600",
        s700 => "700",
        s800 => "800",
        s900 => "900",
        s950 => "950",
    }
}

/// Numeric step values of a [`ColorScale`], in key order.
pub const SCALE_STEPS: [u16; 11] = [50, 100, 200, 300, 400, 500, 600, 700, 800, 900, 950];

impl ColorScale {
    /// Build a scale from 11 values ordered like [`SCALE_STEPS`].
    pub fn from_steps(values: [String; 11]) -> Self {
        let [s50, s100, s200, s300, s400, s500, s600, s700, s800, s900, s950] = values;
        Self {
            s50,
            s100,
            s200,
            s300,
            s400,
            s500,
            s600,
            s700,
            s800,
            s900,
            s950,
        }
    }
}

token_group! {
    /// Page and surface backgrounds.
    BackgroundColors / PartialBackgroundColors {
        primary => "primary",
        secondary => "secondary",
        tertiary => "tertiary",
        inverse => "inverse",
        overlay => "overlay",
    }
}

token_group! {
    /// Foreground text colours.
    TextColors / PartialTextColors {
        primary => "primary",
        secondary => "secondary",
        tertiary => "tertiary",
        muted => "muted",
        inverse => "inverse",
        link => "link",
        link_hover => "linkHover",
    }
}

token_group! {
    BorderColors / PartialBorderColors {
        light => "light",
        medium => "medium",
        dark => "dark",
        focus => "focus",
    }
}

token_group! {
    /// Named CSS gradients.
    Gradients / PartialGradients {
        primary => "primary",
        secondary => "secondary",
        accent => "accent",
        hero => "hero",
        button => "button",
        card => "card",
        overlay => "overlay",
    }
}

token_group! {
    BadgeColors / PartialBadgeColors {
        sale => "sale",
        new => "new",
        featured => "featured",
        discount => "discount",
    }
}

token_group! {
    RatingColors / PartialRatingColors {
        star => "star",
        star_empty => "starEmpty",
    }
}

token_group! {
    /// Stock and availability indicators.
    StatusColors / PartialStatusColors {
        in_stock => "inStock",
        low_stock => "lowStock",
        out_of_stock => "outOfStock",
        preorder => "preorder",
    }
}

token_group! {
    InteractiveColors / PartialInteractiveColors {
        hover => "hover",
        active => "active",
        focus => "focus",
        disabled => "disabled",
    }
}

token_group! {
    CardColors / PartialCardColors {
        background => "background",
        border => "border",
        hover => "hover",
        shadow => "shadow",
    }
}

token_group! {
    FormColors / PartialFormColors {
        input_background => "inputBackground",
        input_border => "inputBorder",
        input_focus => "inputFocus",
        placeholder => "placeholder",
        label => "label",
    }
}

token_group! {
    NavColors / PartialNavColors {
        background => "background",
        text => "text",
        hover => "hover",
        active => "active",
    }
}

token_group! {
    FooterColors / PartialFooterColors {
        background => "background",
        text => "text",
        link => "link",
        link_hover => "linkHover",
    }
}

token_group! {
    HeroColors / PartialHeroColors {
        background => "background",
        overlay => "overlay",
        text => "text",
        accent => "accent",
    }
}

token_group! {
    PaginationColors / PartialPaginationColors {
        background => "background",
        text => "text",
        active => "active",
        hover => "hover",
    }
}

token_group! {
    LoadingColors / PartialLoadingColors {
        spinner => "spinner",
        skeleton => "skeleton",
        skeleton_highlight => "skeletonHighlight",
    }
}

token_group! {
    AlertColors / PartialAlertColors {
        success_background => "successBackground",
        error_background => "errorBackground",
        warning_background => "warningBackground",
        info_background => "infoBackground",
    }
}

/// Declare the `ui` role-group aggregate and its partial twin.
macro_rules! ui_roles {
    ( $( $field:ident : $group:ident / $partial:ident => $key:literal ),+ $(,)? ) => {
        /// Colours for individual storefront UI roles.
        #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
        pub struct UiColors {
            $(
                #[serde(rename = $key)]
                pub $field: $group,
            )+
        }

        /// Partially specified [`UiColors`].
        #[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
        #[serde(default)]
        pub struct PartialUiColors {
            $(
                #[serde(rename = $key, skip_serializing_if = "Option::is_none")]
                pub $field: Option<$partial>,
            )+
        }

        impl UiColors {
            /// Role-group names in declaration order.
            pub const GROUPS: &'static [&'static str] = &[$($key),+];

            pub fn merged(&self, overlay: &PartialUiColors) -> Self {
                Self {
                    $(
                        $field: match &overlay.$field {
                            Some(partial) => self.$field.merged(partial),
                            None => self.$field.clone(),
                        },
                    )+
                }
            }

            pub fn to_partial(&self) -> PartialUiColors {
                PartialUiColors {
                    $( $field: Some(self.$field.to_partial()), )+
                }
            }

            /// Look up a role group by its JSON name.
            pub fn group(&self, name: &str) -> Option<&dyn TokenGroup> {
                match name {
                    $( $key => Some(&self.$field as &dyn TokenGroup), )+
                    _ => None,
                }
            }

            /// `(name, group)` pairs in declaration order.
            pub fn groups(&self) -> Vec<(&'static str, &dyn TokenGroup)> {
                vec![$( ($key, &self.$field as &dyn TokenGroup) ),+]
            }
        }
    };
}

ui_roles! {
    badge: BadgeColors / PartialBadgeColors => "badge",
    rating: RatingColors / PartialRatingColors => "rating",
    status: StatusColors / PartialStatusColors => "status",
    interactive: InteractiveColors / PartialInteractiveColors => "interactive",
    card: CardColors / PartialCardColors => "card",
    form: FormColors / PartialFormColors => "form",
    nav: NavColors / PartialNavColors => "nav",
    footer: FooterColors / PartialFooterColors => "footer",
    hero: HeroColors / PartialHeroColors => "hero",
    pagination: PaginationColors / PartialPaginationColors => "pagination",
    loading: LoadingColors / PartialLoadingColors => "loading",
    alert: AlertColors / PartialAlertColors => "alert",
}

/// Names of the seven colour scales, in declaration order.
pub const SCALE_SECTIONS: [&str; 7] = [
    "primary",
    "secondary",
    "neutral",
    "success",
    "error",
    "warning",
    "info",
];

/// The complete colour configuration of a theme.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorScheme {
    pub primary: ColorScale,
    pub secondary: ColorScale,
    pub neutral: ColorScale,
    pub success: ColorScale,
    pub error: ColorScale,
    pub warning: ColorScale,
    pub info: ColorScale,
    pub background: BackgroundColors,
    pub text: TextColors,
    pub border: BorderColors,
    pub gradients: Gradients,
    pub ui: UiColors,
}

/// Partially specified [`ColorScheme`], as stored or imported.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PartialColorScheme {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary: Option<PartialColorScale>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary: Option<PartialColorScale>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub neutral: Option<PartialColorScale>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub success: Option<PartialColorScale>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<PartialColorScale>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<PartialColorScale>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub info: Option<PartialColorScale>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background: Option<PartialBackgroundColors>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<PartialTextColors>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border: Option<PartialBorderColors>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gradients: Option<PartialGradients>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ui: Option<PartialUiColors>,
}

impl ColorScheme {
    /// The seven colour scales paired with their section names.
    pub fn scales(&self) -> [(&'static str, &ColorScale); 7] {
        [
            ("primary", &self.primary),
            ("secondary", &self.secondary),
            ("neutral", &self.neutral),
            ("success", &self.success),
            ("error", &self.error),
            ("warning", &self.warning),
            ("info", &self.info),
        ]
    }

    pub fn scale(&self, section: &str) -> Option<&ColorScale> {
        self.scales()
            .into_iter()
            .find(|(name, _)| *name == section)
            .map(|(_, scale)| scale)
    }

    pub fn merged(&self, overlay: &PartialColorScheme) -> Self {
        fn merge<T: Clone, P>(base: &T, overlay: Option<&P>, f: impl Fn(&T, &P) -> T) -> T {
            match overlay {
                Some(partial) => f(base, partial),
                None => base.clone(),
            }
        }

        Self {
            primary: merge(&self.primary, overlay.primary.as_ref(), ColorScale::merged),
            secondary: merge(&self.secondary, overlay.secondary.as_ref(), ColorScale::merged),
            neutral: merge(&self.neutral, overlay.neutral.as_ref(), ColorScale::merged),
            success: merge(&self.success, overlay.success.as_ref(), ColorScale::merged),
            error: merge(&self.error, overlay.error.as_ref(), ColorScale::merged),
            warning: merge(&self.warning, overlay.warning.as_ref(), ColorScale::merged),
            info: merge(&self.info, overlay.info.as_ref(), ColorScale::merged),
            background: merge(
                &self.background,
                overlay.background.as_ref(),
                BackgroundColors::merged,
            ),
            text: merge(&self.text, overlay.text.as_ref(), TextColors::merged),
            border: merge(&self.border, overlay.border.as_ref(), BorderColors::merged),
            gradients: merge(&self.gradients, overlay.gradients.as_ref(), Gradients::merged),
            ui: merge(&self.ui, overlay.ui.as_ref(), UiColors::merged),
        }
    }

    pub fn to_partial(&self) -> PartialColorScheme {
        PartialColorScheme {
            primary: Some(self.primary.to_partial()),
            secondary: Some(self.secondary.to_partial()),
            neutral: Some(self.neutral.to_partial()),
            success: Some(self.success.to_partial()),
            error: Some(self.error.to_partial()),
            warning: Some(self.warning.to_partial()),
            info: Some(self.info.to_partial()),
            background: Some(self.background.to_partial()),
            text: Some(self.text.to_partial()),
            border: Some(self.border.to_partial()),
            gradients: Some(self.gradients.to_partial()),
            ui: Some(self.ui.to_partial()),
        }
    }
}

impl PartialColorScheme {
    pub fn scale(&self, section: &str) -> Option<&PartialColorScale> {
        match section {
            "primary" => self.primary.as_ref(),
            "secondary" => self.secondary.as_ref(),
            "neutral" => self.neutral.as_ref(),
            "success" => self.success.as_ref(),
            "error" => self.error.as_ref(),
            "warning" => self.warning.as_ref(),
            "info" => self.info.as_ref(),
            _ => None,
        }
    }

    /// Whether a top-level section is present at all (even if empty).
    pub fn has_section(&self, section: &str) -> bool {
        match section {
            "background" => self.background.is_some(),
            "text" => self.text.is_some(),
            "border" => self.border.is_some(),
            "gradients" => self.gradients.is_some(),
            "ui" => self.ui.is_some(),
            other => self.scale(other).is_some(),
        }
    }
}

// ---------------------------------------------------------------------------
// Typography
// ---------------------------------------------------------------------------

/// Font family stacks; the first entry of each list is preferred.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FontFamilies {
    pub sans: Vec<String>,
    pub serif: Vec<String>,
    pub mono: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PartialFontFamilies {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sans: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub serif: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mono: Option<Vec<String>>,
}

impl FontFamilies {
    pub const KEYS: &'static [&'static str] = &["sans", "serif", "mono"];

    /// A supplied family list replaces the default list; an empty list is
    /// treated as absent.
    pub fn merged(&self, overlay: &PartialFontFamilies) -> Self {
        let pick = |base: &Vec<String>, over: &Option<Vec<String>>| match over {
            Some(list) if !list.is_empty() => list.clone(),
            _ => base.clone(),
        };
        Self {
            sans: pick(&self.sans, &overlay.sans),
            serif: pick(&self.serif, &overlay.serif),
            mono: pick(&self.mono, &overlay.mono),
        }
    }

    pub fn to_partial(&self) -> PartialFontFamilies {
        PartialFontFamilies {
            sans: Some(self.sans.clone()),
            serif: Some(self.serif.clone()),
            mono: Some(self.mono.clone()),
        }
    }

    pub fn entries(&self) -> [(&'static str, &[String]); 3] {
        [
            ("sans", self.sans.as_slice()),
            ("serif", self.serif.as_slice()),
            ("mono", self.mono.as_slice()),
        ]
    }
}

token_group! {
    FontSizes / PartialFontSizes {
        xs => "xs",
        sm => "sm",
        base => "base",
        lg => "lg",
        xl => "xl",
        xl2 => "2xl",
        xl3 => "3xl",
        xl4 => "4xl",
        xl5 => "5xl",
        xl6 => "6xl",
    }
}

token_group! {
    FontWeights / PartialFontWeights {
        light => "light",
        normal => "normal",
        medium => "medium",
        semibold => "semibold",
        bold => "bold",
        extrabold => "extrabold",
    }
}

token_group! {
    LineHeights / PartialLineHeights {
        none => "none",
        tight => "tight",
        snug => "snug",
        normal => "normal",
        relaxed => "relaxed",
        loose => "loose",
    }
}

token_group! {
    LetterSpacings / PartialLetterSpacings {
        tighter => "tighter",
        tight => "tight",
        normal => "normal",
        wide => "wide",
        wider => "wider",
        widest => "widest",
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Typography {
    pub font_family: FontFamilies,
    pub font_size: FontSizes,
    pub font_weight: FontWeights,
    pub line_height: LineHeights,
    pub letter_spacing: LetterSpacings,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PartialTypography {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_family: Option<PartialFontFamilies>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<PartialFontSizes>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<PartialFontWeights>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_height: Option<PartialLineHeights>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub letter_spacing: Option<PartialLetterSpacings>,
}

impl Typography {
    pub fn merged(&self, overlay: &PartialTypography) -> Self {
        Self {
            font_family: overlay
                .font_family
                .as_ref()
                .map_or_else(|| self.font_family.clone(), |p| self.font_family.merged(p)),
            font_size: overlay
                .font_size
                .as_ref()
                .map_or_else(|| self.font_size.clone(), |p| self.font_size.merged(p)),
            font_weight: overlay
                .font_weight
                .as_ref()
                .map_or_else(|| self.font_weight.clone(), |p| self.font_weight.merged(p)),
            line_height: overlay
                .line_height
                .as_ref()
                .map_or_else(|| self.line_height.clone(), |p| self.line_height.merged(p)),
            letter_spacing: overlay.letter_spacing.as_ref().map_or_else(
                || self.letter_spacing.clone(),
                |p| self.letter_spacing.merged(p),
            ),
        }
    }

    pub fn to_partial(&self) -> PartialTypography {
        PartialTypography {
            font_family: Some(self.font_family.to_partial()),
            font_size: Some(self.font_size.to_partial()),
            font_weight: Some(self.font_weight.to_partial()),
            line_height: Some(self.line_height.to_partial()),
            letter_spacing: Some(self.letter_spacing.to_partial()),
        }
    }
}

// ---------------------------------------------------------------------------
// Spacing
// ---------------------------------------------------------------------------

token_group! {
    SpacingScale / PartialSpacingScale {
        s0 => "0",
        s1 => "1",
        s2 => "2",
        s3 => "3",
        s4 => "4",
        s5 => "5",
        s6 => "6",
        s8 => "8",
        s10 => "10",
        s12 => "12",
        s16 => "16",
        s20 => "20",
        s24 => "24",
        s32 => "32",
        s40 => "40",
        s48 => "48",
        s56 => "56",
        s64 => "64",
    }
}

token_group! {
    /// Maximum container widths per breakpoint.
    Containers / PartialContainers {
        sm => "sm",
        md => "md",
        lg => "lg",
        xl => "xl",
        xl2 => "2xl",
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Spacing {
    pub scale: SpacingScale,
    pub container: Containers,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PartialSpacing {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale: Option<PartialSpacingScale>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub container: Option<PartialContainers>,
}

impl Spacing {
    pub fn merged(&self, overlay: &PartialSpacing) -> Self {
        Self {
            scale: overlay
                .scale
                .as_ref()
                .map_or_else(|| self.scale.clone(), |p| self.scale.merged(p)),
            container: overlay
                .container
                .as_ref()
                .map_or_else(|| self.container.clone(), |p| self.container.merged(p)),
        }
    }

    pub fn to_partial(&self) -> PartialSpacing {
        PartialSpacing {
            scale: Some(self.scale.to_partial()),
            container: Some(self.container.to_partial()),
        }
    }
}

// ---------------------------------------------------------------------------
// Borders
// ---------------------------------------------------------------------------

token_group! {
    Radii / PartialRadii {
        none => "none",
        sm => "sm",
        base => "base",
        md => "md",
        lg => "lg",
        xl => "xl",
        xl2 => "2xl",
        full => "full",
    }
}

token_group! {
    BorderWidths / PartialBorderWidths {
        w0 => "0",
        w1 => "1",
        w2 => "2",
        w4 => "4",
        w8 => "8",
    }
}

token_group! {
    Shadows / PartialShadows {
        none => "none",
        sm => "sm",
        base => "base",
        md => "md",
        lg => "lg",
        xl => "xl",
        xl2 => "2xl",
        inner => "inner",
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Borders {
    pub radius: Radii,
    pub width: BorderWidths,
    pub shadow: Shadows,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PartialBorders {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub radius: Option<PartialRadii>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<PartialBorderWidths>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shadow: Option<PartialShadows>,
}

impl Borders {
    pub fn merged(&self, overlay: &PartialBorders) -> Self {
        Self {
            radius: overlay
                .radius
                .as_ref()
                .map_or_else(|| self.radius.clone(), |p| self.radius.merged(p)),
            width: overlay
                .width
                .as_ref()
                .map_or_else(|| self.width.clone(), |p| self.width.merged(p)),
            shadow: overlay
                .shadow
                .as_ref()
                .map_or_else(|| self.shadow.clone(), |p| self.shadow.merged(p)),
        }
    }

    pub fn to_partial(&self) -> PartialBorders {
        PartialBorders {
            radius: Some(self.radius.to_partial()),
            width: Some(self.width.to_partial()),
            shadow: Some(self.shadow.to_partial()),
        }
    }
}

// ---------------------------------------------------------------------------
// Whole-theme shapes
// ---------------------------------------------------------------------------

/// The four structural blocks of a theme, fully populated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeDefinition {
    pub color_scheme: ColorScheme,
    pub typography: Typography,
    pub spacing: Spacing,
    pub borders: Borders,
}

impl ThemeDefinition {
    /// Express every field as an explicit override.
    pub fn to_overrides(&self) -> ThemeOverrides {
        ThemeOverrides {
            color_scheme: Some(self.color_scheme.to_partial()),
            typography: Some(self.typography.to_partial()),
            spacing: Some(self.spacing.to_partial()),
            borders: Some(self.borders.to_partial()),
        }
    }
}

/// The structural blocks of a theme as supplied by a caller; any block or
/// key may be missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ThemeOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color_scheme: Option<PartialColorScheme>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub typography: Option<PartialTypography>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spacing: Option<PartialSpacing>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub borders: Option<PartialBorders>,
}

/// An untrusted theme document: an admin submission or one entry of an
/// import file. Shape is checked by [`super::validation::validate_theme`],
/// field lengths by the derived [`Validate`] impl.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(default, rename_all = "camelCase")]
pub struct ThemeDraft {
    #[validate(length(max = 120))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[validate(length(max = 120))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[validate(length(max = 2000))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[validate(length(max = 40))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[validate(length(max = 32))]
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preview: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_default: Option<bool>,
    #[serde(flatten)]
    pub overrides: ThemeOverrides,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
