//! Component data model.
//!
//! A component is one content block on a page: a kind, a property bag and an
//! optional cross-cutting style record.

use std::fmt;

use chrono::Utc;
use serde::{Deserialize, Serialize};

use super::properties::Properties;

/// Kind of a component.
///
/// The set of supported kinds is closed. Anything else read from stored or
/// imported data is kept verbatim in [`ComponentKind::Other`] so it survives a
/// round-trip and renders as a placeholder.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ComponentKind {
    /// Top navigation bar
    Navbar,
    /// Page header section
    Header,
    /// Main banner area
    Hero,
    /// Image showcase grid
    Gallery,
    /// Frequently asked questions
    Faq,
    /// Contact information and form
    Contact,
    /// Bottom page section
    Footer,
    /// Customer logos and metrics
    SocialProof,
    /// Call to action
    Cta,
    /// Key benefits highlight
    ValueProposition,
    /// Company logos showcase
    ClientLogos,
    /// Pricing plans
    Pricing,
    /// Security badges and certifications
    TrustSignals,
    /// Embedded video
    Video,
    /// Single or multiple images
    Images,
    /// Partner logo strip
    Logos,
    /// Features grid
    Features,
    /// Rich text block
    Text,
    /// Large title
    Headline,
    /// Supporting text under headlines
    Subheading,
    /// Team member profiles
    Team,
    /// Customer quotes
    Testimonials,
    /// Key numbers
    Stats,
    /// Company information
    About,
    /// Unsupported kind, preserved as written
    Other(String),
}

/// Palette category a component kind is listed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PaletteCategory {
    /// Page chrome: navigation, header, footer
    Layout,
    /// Hero and heading blocks
    #[serde(rename = "Hero & Headers")]
    HeroAndHeaders,
    /// Textual content sections
    Content,
    /// Image and video sections
    Visual,
    /// Logos, quotes and numbers
    #[serde(rename = "Social Proof")]
    SocialProof,
    /// Pricing, calls to action, contact
    Business,
    /// Badges and team
    #[serde(rename = "Trust & Team")]
    TrustAndTeam,
}

impl fmt::Display for PaletteCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Layout => "Layout",
            Self::HeroAndHeaders => "Hero & Headers",
            Self::Content => "Content",
            Self::Visual => "Visual",
            Self::SocialProof => "Social Proof",
            Self::Business => "Business",
            Self::TrustAndTeam => "Trust & Team",
        };
        f.write_str(label)
    }
}

impl ComponentKind {
    /// Every supported kind, in palette order.
    pub fn all() -> [Self; 24] {
        [
            Self::Navbar,
            Self::Header,
            Self::Footer,
            Self::Hero,
            Self::Headline,
            Self::Subheading,
            Self::Text,
            Self::Features,
            Self::About,
            Self::Faq,
            Self::Gallery,
            Self::Video,
            Self::Images,
            Self::Testimonials,
            Self::SocialProof,
            Self::ClientLogos,
            Self::Logos,
            Self::Stats,
            Self::Pricing,
            Self::Cta,
            Self::Contact,
            Self::ValueProposition,
            Self::TrustSignals,
            Self::Team,
        ]
    }

    /// Wire name of the kind (`"social-proof"`, `"cta"`, ...).
    pub fn as_str(&self) -> &str {
        match self {
            Self::Navbar => "navbar",
            Self::Header => "header",
            Self::Hero => "hero",
            Self::Gallery => "gallery",
            Self::Faq => "faq",
            Self::Contact => "contact",
            Self::Footer => "footer",
            Self::SocialProof => "social-proof",
            Self::Cta => "cta",
            Self::ValueProposition => "value-proposition",
            Self::ClientLogos => "client-logos",
            Self::Pricing => "pricing",
            Self::TrustSignals => "trust-signals",
            Self::Video => "video",
            Self::Images => "images",
            Self::Logos => "logos",
            Self::Features => "features",
            Self::Text => "text",
            Self::Headline => "headline",
            Self::Subheading => "subheading",
            Self::Team => "team",
            Self::Testimonials => "testimonials",
            Self::Stats => "stats",
            Self::About => "about",
            Self::Other(name) => name,
        }
    }

    /// Parses a wire name. Unknown names become [`ComponentKind::Other`].
    pub fn parse(name: &str) -> Self {
        Self::all()
            .into_iter()
            .find(|kind| kind.as_str() == name)
            .unwrap_or_else(|| Self::Other(name.to_string()))
    }

    /// True for every kind except [`ComponentKind::Other`].
    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Other(_))
    }

    /// Human-readable palette name.
    pub fn display_name(&self) -> &str {
        match self {
            Self::Navbar => "Navigation Bar",
            Self::Header => "Page Header",
            Self::Hero => "Hero Section",
            Self::Gallery => "Gallery",
            Self::Faq => "FAQ Section",
            Self::Contact => "Contact Form",
            Self::Footer => "Footer",
            Self::SocialProof => "Social Proof",
            Self::Cta => "Call to Action",
            Self::ValueProposition => "Value Proposition",
            Self::ClientLogos => "Client Logos",
            Self::Pricing => "Pricing Tables",
            Self::TrustSignals => "Trust Signals",
            Self::Video => "Video Player",
            Self::Images => "Image Block",
            Self::Logos => "Logo Strip",
            Self::Features => "Features",
            Self::Text => "Text Block",
            Self::Headline => "Headline",
            Self::Subheading => "Subheading",
            Self::Team => "Team Section",
            Self::Testimonials => "Testimonials",
            Self::Stats => "Statistics",
            Self::About => "About Section",
            Self::Other(name) => name,
        }
    }

    /// Short palette description.
    pub fn description(&self) -> &'static str {
        match self {
            Self::Navbar => "Header navigation menu",
            Self::Header => "Page header section",
            Self::Hero => "Main banner area",
            Self::Gallery => "Image showcase grid",
            Self::Faq => "Frequently asked questions",
            Self::Contact => "Contact information and forms",
            Self::Footer => "Bottom page section",
            Self::SocialProof => "Customer logos and metrics",
            Self::Cta => "Action buttons and forms",
            Self::ValueProposition => "Key benefits highlight",
            Self::ClientLogos => "Company logos showcase",
            Self::Pricing => "Service pricing plans",
            Self::TrustSignals => "Security badges and certifications",
            Self::Video => "Embedded video content",
            Self::Images => "Single or multiple images",
            Self::Logos => "Partner and press logo strip",
            Self::Features => "Product/service features grid",
            Self::Text => "Rich text content",
            Self::Headline => "Large attention-grabbing title",
            Self::Subheading => "Supporting text under headlines",
            Self::Team => "Team member profiles",
            Self::Testimonials => "Customer reviews and quotes",
            Self::Stats => "Key numbers and metrics",
            Self::About => "Company information",
            Self::Other(_) => "Unsupported component",
        }
    }

    /// Palette category, `None` for unsupported kinds.
    pub fn category(&self) -> Option<PaletteCategory> {
        let category = match self {
            Self::Navbar | Self::Header | Self::Footer => PaletteCategory::Layout,
            Self::Hero | Self::Headline | Self::Subheading => PaletteCategory::HeroAndHeaders,
            Self::Text | Self::Features | Self::About | Self::Faq => PaletteCategory::Content,
            Self::Gallery | Self::Video | Self::Images => PaletteCategory::Visual,
            Self::Testimonials
            | Self::SocialProof
            | Self::ClientLogos
            | Self::Logos
            | Self::Stats => PaletteCategory::SocialProof,
            Self::Pricing | Self::Cta | Self::Contact | Self::ValueProposition => {
                PaletteCategory::Business
            }
            Self::TrustSignals | Self::Team => PaletteCategory::TrustAndTeam,
            Self::Other(_) => return None,
        };
        Some(category)
    }

    /// Palette kinds whose name, description or category contain `term`,
    /// ignoring case. A missing or blank term matches every kind.
    pub fn search(term: Option<&str>) -> Vec<Self> {
        let needle = term
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_lowercase);

        Self::all()
            .into_iter()
            .filter(|kind| {
                let Some(needle) = &needle else {
                    return true;
                };
                let category = kind.category().map(|c| c.to_string()).unwrap_or_default();
                [kind.display_name(), kind.description(), category.as_str()]
                    .iter()
                    .any(|field| field.to_lowercase().contains(needle.as_str()))
            })
            .collect()
    }
}

impl From<String> for ComponentKind {
    fn from(name: String) -> Self {
        Self::parse(&name)
    }
}

impl From<&str> for ComponentKind {
    fn from(name: &str) -> Self {
        Self::parse(name)
    }
}

impl From<ComponentKind> for String {
    fn from(kind: ComponentKind) -> Self {
        match kind {
            ComponentKind::Other(name) => name,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Presentation options that apply to any component kind.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentStyle {
    /// Extra CSS classes, space separated
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class_name: Option<String>,
    /// Hide the block below the mobile breakpoint
    #[serde(default)]
    pub hide_on_mobile: bool,
    /// Hide the block between the mobile and tablet breakpoints
    #[serde(default)]
    pub hide_on_tablet: bool,
}

impl ComponentStyle {
    /// True when the style carries nothing that changes the output.
    pub fn is_noop(&self) -> bool {
        !self.hide_on_mobile
            && !self.hide_on_tablet
            && self
                .class_name
                .as_deref()
                .map_or(true, |c| c.trim().is_empty())
    }
}

/// A content block placed on a page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Component {
    /// Identifier, unique within its page
    pub id: String,
    /// Component kind; fixed once the component exists
    #[serde(rename = "type")]
    pub kind: ComponentKind,
    /// Property bag
    #[serde(default)]
    pub properties: Properties,
    /// Optional presentation options
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<ComponentStyle>,
}

impl Component {
    /// Creates a component of `kind` with its default properties attached.
    pub fn new(kind: ComponentKind) -> Self {
        let properties = crate::generator::defaults_for(&kind);
        Self {
            id: Self::generate_id(&kind),
            kind,
            properties,
            style: None,
        }
    }

    /// Creates a component with explicit properties.
    pub fn with_properties(kind: ComponentKind, properties: Properties) -> Self {
        Self {
            id: Self::generate_id(&kind),
            kind,
            properties,
            style: None,
        }
    }

    /// Generates an identifier of the form `<kind>-<unix millis>-<8 hex>`.
    pub fn generate_id(kind: &ComponentKind) -> String {
        let millis = Utc::now().timestamp_millis();
        let suffix = uuid::Uuid::new_v4().simple().to_string();
        format!("{}-{}-{}", kind.as_str(), millis, &suffix[..8])
    }
}
