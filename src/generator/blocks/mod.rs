//! Per-component renderers.
//!
//! Every supported [`ComponentKind`] maps to one typed property record that
//! knows how to read itself from a loose [`Properties`] bag and how to emit a
//! markup fragment and a stylesheet fragment. [`Block`] is the closed registry
//! over those records; adding a kind means adding a record and one line to the
//! `blocks!` table below.

pub mod contact;
pub mod hero;
pub mod marketing;
pub mod media;
pub mod navigation;

use std::fmt::Write as _;

use serde::{Serialize, Serializer};
use serde_json::Value;

use super::escape;
use crate::models::{Component, ComponentKind, ComponentStyle, Properties, Record};

use contact::{ContactProps, FaqProps};
use hero::{CtaProps, HeadlineProps, HeroProps, SubheadingProps, TextProps};
use marketing::{
    AboutProps, FeaturesProps, PricingProps, StatsProps, TeamProps, TestimonialsProps,
    TrustSignalsProps, ValuePropositionProps,
};
use media::{
    ClientLogosProps, GalleryProps, ImagesProps, LogosProps, SocialProofProps, VideoProps,
};
use navigation::{FooterProps, HeaderProps, NavbarProps};

/// Typed property record of one component kind.
///
/// `Default` is the single source of default values: the palette serializes
/// it, and `from_properties` falls back to it field by field.
pub trait BlockProps: Default + Serialize {
    /// Reads the record from a property bag, substituting defaults for
    /// missing or unusable values.
    fn from_properties(properties: &Properties) -> Self;

    /// PHP/HTML fragment placed inside `<main>`.
    fn markup(&self) -> String;

    /// CSS fragment appended to `style.css`.
    fn style(&self) -> String;
}

// ============================================================================
// Registry
// ============================================================================

macro_rules! blocks {
    ($($variant:ident => $props:ty),* $(,)?) => {
        /// A component resolved into its typed property record.
        #[derive(Debug, Clone, PartialEq, Eq)]
        pub enum Block {
            $(
                #[doc = concat!("Resolved `", stringify!($variant), "` component")]
                $variant($props),
            )*
            /// Kind without a renderer, carrying its wire name
            Unknown(String),
        }

        impl Block {
            /// Resolves a kind and its property bag into a typed block.
            pub fn from_parts(kind: &ComponentKind, properties: &Properties) -> Self {
                match kind {
                    $(ComponentKind::$variant => Self::$variant(<$props>::from_properties(properties)),)*
                    ComponentKind::Other(name) => Self::Unknown(name.clone()),
                }
            }

            /// The block of `kind` with every property at its default.
            pub fn default_for(kind: &ComponentKind) -> Self {
                match kind {
                    $(ComponentKind::$variant => Self::$variant(<$props>::default()),)*
                    ComponentKind::Other(name) => Self::Unknown(name.clone()),
                }
            }

            /// Serializes the resolved record back into a property bag.
            ///
            /// Unknown blocks have no properties.
            pub fn to_properties(&self) -> Properties {
                match self {
                    $(Self::$variant(props) => to_properties(props),)*
                    Self::Unknown(_) => Properties::new(),
                }
            }

            /// Markup fragment of the block.
            pub fn markup(&self) -> String {
                match self {
                    $(Self::$variant(props) => props.markup(),)*
                    Self::Unknown(name) => {
                        tracing::warn!(kind = %name, "No renderer for component type");
                        format!(
                            "\n    <!-- Unknown component type: {} -->\n",
                            escape::html_comment(name)
                        )
                    }
                }
            }

            /// Style fragment of the block; empty for unknown kinds.
            pub fn style(&self) -> String {
                match self {
                    $(Self::$variant(props) => props.style(),)*
                    Self::Unknown(_) => String::new(),
                }
            }
        }
    };
}

blocks! {
    Navbar => NavbarProps,
    Header => HeaderProps,
    Hero => HeroProps,
    Gallery => GalleryProps,
    Faq => FaqProps,
    Contact => ContactProps,
    Footer => FooterProps,
    SocialProof => SocialProofProps,
    Cta => CtaProps,
    ValueProposition => ValuePropositionProps,
    ClientLogos => ClientLogosProps,
    Pricing => PricingProps,
    TrustSignals => TrustSignalsProps,
    Video => VideoProps,
    Images => ImagesProps,
    Logos => LogosProps,
    Features => FeaturesProps,
    Text => TextProps,
    Headline => HeadlineProps,
    Subheading => SubheadingProps,
    Team => TeamProps,
    Testimonials => TestimonialsProps,
    Stats => StatsProps,
    About => AboutProps,
}

fn to_properties<T: Serialize>(props: &T) -> Properties {
    match serde_json::to_value(props) {
        Ok(Value::Object(map)) => map.into(),
        Ok(_) => Properties::new(),
        Err(e) => {
            tracing::warn!("Failed to serialize block properties: {}", e);
            Properties::new()
        }
    }
}

/// Renders the markup fragment of a kind with the given properties.
pub fn render_markup(kind: &ComponentKind, properties: &Properties) -> String {
    Block::from_parts(kind, properties).markup()
}

/// Renders the style fragment of a kind with the given properties.
pub fn render_style(kind: &ComponentKind, properties: &Properties) -> String {
    Block::from_parts(kind, properties).style()
}

/// Renders a component's markup, wrapped according to its style record.
pub fn render_component(component: &Component) -> String {
    wrap_with_style(
        &render_markup(&component.kind, &component.properties),
        component.style.as_ref(),
    )
}

/// Wraps a fragment in a `tw-block` container carrying the visibility and
/// custom classes of `style`. Fragments without an effective style are
/// returned unchanged.
pub fn wrap_with_style(fragment: &str, style: Option<&ComponentStyle>) -> String {
    let Some(style) = style.filter(|s| !s.is_noop()) else {
        return fragment.to_string();
    };

    let mut classes = vec!["tw-block".to_string()];
    if style.hide_on_mobile {
        classes.push("hide-on-mobile".to_string());
    }
    if style.hide_on_tablet {
        classes.push("hide-on-tablet".to_string());
    }
    if let Some(custom) = &style.class_name {
        classes.extend(escape::class_list(custom));
    }

    let mut out = String::new();
    let _ = write!(
        out,
        "\n    <div class=\"{}\">{}    </div>\n",
        classes.join(" "),
        fragment
    );
    out
}

// ============================================================================
// Shared property readers
// ============================================================================

/// Horizontal text alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    /// Left aligned
    Left,
    /// Centered
    Center,
    /// Right aligned
    Right,
}

impl TextAlign {
    /// Reads an alignment, ignoring case. Unknown values yield `None`.
    pub fn read(p: &Properties, key: &str) -> Option<Self> {
        match p.text(key)?.trim().to_ascii_lowercase().as_str() {
            "left" => Some(Self::Left),
            "center" | "centre" => Some(Self::Center),
            "right" => Some(Self::Right),
            _ => None,
        }
    }

    /// CSS `text-align` value.
    pub fn as_css(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Center => "center",
            Self::Right => "right",
        }
    }
}

/// Reads a color through the CSS allow-list, falling back to `fallback`.
pub(crate) fn color(p: &Properties, key: &str, fallback: String) -> String {
    p.text(key)
        .and_then(|value| escape::css_color(&value))
        .unwrap_or(fallback)
}

/// Reads a padding in pixels (0-400), falling back to `fallback`.
pub(crate) fn padding(p: &Properties, key: &str, fallback: i64) -> i64 {
    p.int_in(key, 0..=400).unwrap_or(fallback)
}

/// Reads a record list and maps each record through `build`.
pub(crate) fn record_list<T>(
    p: &Properties,
    key: &str,
    fields: &[&str],
    build: impl Fn(&Record) -> T,
) -> Option<Vec<T>> {
    p.records(key, fields)
        .map(|records| records.iter().map(build).collect())
}

/// Serializes a list property as the comma-delimited string the editor uses.
#[allow(clippy::ptr_arg)]
pub(crate) fn comma_list<S: Serializer>(items: &Vec<String>, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(&items.join(","))
}
