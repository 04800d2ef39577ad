//! Banner and heading blocks: hero, call to action, headline, subheading and
//! free text.

use serde::Serialize;

use super::{color, padding, BlockProps, TextAlign};
use crate::generator::css::{vertical_padding, CssFragment};
use crate::generator::escape;
use crate::models::Properties;

// ============================================================================
// Hero
// ============================================================================

/// How the hero background is painted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BackgroundType {
    /// Left-to-right gradient between two colors
    Gradient,
    /// Solid color
    Color,
    /// Cover image
    Image,
}

impl BackgroundType {
    fn read(p: &Properties, key: &str) -> Option<Self> {
        match p.text(key)?.trim().to_ascii_lowercase().as_str() {
            "gradient" => Some(Self::Gradient),
            "color" | "solid" => Some(Self::Color),
            "image" => Some(Self::Image),
            _ => None,
        }
    }
}

/// Main banner with title, subtitle and a call-to-action button.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HeroProps {
    /// Headline
    pub title: String,
    /// Line under the headline
    pub subtitle: String,
    /// Button label
    pub button_text: String,
    /// Button target
    pub button_link: String,
    /// Whether the button is rendered
    pub show_button: bool,
    /// Background mode
    pub background_type: BackgroundType,
    /// Gradient start
    pub start_color: String,
    /// Gradient end
    pub end_color: String,
    /// Solid background
    pub background_color: String,
    /// Cover image URL (image mode)
    pub background_image: String,
    /// Text color
    pub text_color: String,
    /// Top padding in pixels
    pub padding_top: i64,
    /// Bottom padding in pixels
    pub padding_bottom: i64,
}

impl Default for HeroProps {
    fn default() -> Self {
        Self {
            title: "Welcome to Our Site".to_string(),
            subtitle: "Create amazing experiences with our platform".to_string(),
            button_text: "Get Started".to_string(),
            button_link: "#".to_string(),
            show_button: true,
            background_type: BackgroundType::Gradient,
            start_color: "#2563eb".to_string(),
            end_color: "#7c3aed".to_string(),
            background_color: "#2563eb".to_string(),
            background_image: String::new(),
            text_color: "#ffffff".to_string(),
            padding_top: 80,
            padding_bottom: 80,
        }
    }
}

impl HeroProps {
    fn background(&self) -> String {
        let gradient = format!(
            "linear-gradient(to right, {}, {})",
            self.start_color, self.end_color
        );
        match self.background_type {
            BackgroundType::Gradient => gradient,
            BackgroundType::Color => self.background_color.clone(),
            BackgroundType::Image => match escape::css_url(&self.background_image) {
                Some(url) => format!("{url} center / cover no-repeat"),
                None => gradient,
            },
        }
    }
}

impl BlockProps for HeroProps {
    fn from_properties(p: &Properties) -> Self {
        let d = Self::default();
        Self {
            title: p.text("title").unwrap_or(d.title),
            subtitle: p.text("subtitle").unwrap_or(d.subtitle),
            button_text: p.text("buttonText").unwrap_or(d.button_text),
            button_link: p.text("buttonLink").unwrap_or(d.button_link),
            show_button: p.flag("showButton").unwrap_or(d.show_button),
            background_type: BackgroundType::read(p, "backgroundType")
                .unwrap_or(d.background_type),
            start_color: color(p, "startColor", d.start_color),
            end_color: color(p, "endColor", d.end_color),
            background_color: color(p, "backgroundColor", d.background_color),
            background_image: p.text("backgroundImage").unwrap_or(d.background_image),
            text_color: color(p, "textColor", d.text_color),
            padding_top: padding(p, "paddingTop", d.padding_top),
            padding_bottom: padding(p, "paddingBottom", d.padding_bottom),
        }
    }

    fn markup(&self) -> String {
        let button = if self.show_button {
            format!(
                "\n            <a href=\"{}\" class=\"hero-button\">{}</a>",
                escape::echo_url(&self.button_link),
                escape::echo_html(&self.button_text)
            )
        } else {
            String::new()
        };

        format!(
            r#"
    <!-- Hero Section -->
    <section class="hero-section">
        <div class="container">
            <h1 class="hero-title">{title}</h1>
            <p class="hero-subtitle">{subtitle}</p>{button}
        </div>
    </section>
"#,
            title = escape::echo_html(&self.title),
            subtitle = escape::echo_html(&self.subtitle),
        )
    }

    fn style(&self) -> String {
        CssFragment::new("Hero Section")
            .rule(
                ".hero-section",
                &[
                    ("background", &self.background()),
                    ("color", &self.text_color),
                    (
                        "padding",
                        &vertical_padding(self.padding_top, self.padding_bottom),
                    ),
                    ("text-align", "center"),
                ],
            )
            .rule(
                ".hero-title",
                &[
                    ("font-size", "3rem"),
                    ("font-weight", "bold"),
                    ("margin-bottom", "1.5rem"),
                ],
            )
            .rule(
                ".hero-subtitle",
                &[
                    ("font-size", "1.25rem"),
                    ("margin-bottom", "2rem"),
                    ("opacity", "0.9"),
                ],
            )
            .rule(
                ".hero-button",
                &[
                    ("display", "inline-block"),
                    ("background", "#ffffff"),
                    ("color", "#2563eb"),
                    ("padding", "0.75rem 2rem"),
                    ("text-decoration", "none"),
                    ("border-radius", "0.5rem"),
                    ("font-weight", "600"),
                    ("transition", "background-color 0.3s"),
                ],
            )
            .rule(".hero-button:hover", &[("background", "#f3f4f6")])
            .media(
                768,
                &[
                    (".hero-title", &[("font-size", "2rem")]),
                    (".hero-subtitle", &[("font-size", "1rem")]),
                ],
            )
            .finish()
    }
}

// ============================================================================
// Call to action
// ============================================================================

/// Colored band with a primary and a secondary button.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CtaProps {
    /// Headline
    pub title: String,
    /// Supporting line
    pub subtitle: String,
    /// Primary button label
    pub primary_button: String,
    /// Primary button target
    pub primary_link: String,
    /// Secondary button label
    pub secondary_button: String,
    /// Secondary button target
    pub secondary_link: String,
    /// Band background
    pub background_color: String,
    /// Text color
    pub text_color: String,
    /// Top padding in pixels
    pub padding_top: i64,
    /// Bottom padding in pixels
    pub padding_bottom: i64,
}

impl Default for CtaProps {
    fn default() -> Self {
        Self {
            title: "Ready to Get Started?".to_string(),
            subtitle: "Join thousands of satisfied customers today".to_string(),
            primary_button: "Get Started Free".to_string(),
            primary_link: "#".to_string(),
            secondary_button: "Learn More".to_string(),
            secondary_link: "#".to_string(),
            background_color: "#2563eb".to_string(),
            text_color: "#ffffff".to_string(),
            padding_top: 64,
            padding_bottom: 64,
        }
    }
}

impl BlockProps for CtaProps {
    fn from_properties(p: &Properties) -> Self {
        let d = Self::default();
        Self {
            title: p.text("title").unwrap_or(d.title),
            subtitle: p.text("subtitle").unwrap_or(d.subtitle),
            primary_button: p.text("primaryButton").unwrap_or(d.primary_button),
            primary_link: p.text("primaryLink").unwrap_or(d.primary_link),
            secondary_button: p.text("secondaryButton").unwrap_or(d.secondary_button),
            secondary_link: p.text("secondaryLink").unwrap_or(d.secondary_link),
            background_color: color(p, "backgroundColor", d.background_color),
            text_color: color(p, "textColor", d.text_color),
            padding_top: padding(p, "paddingTop", d.padding_top),
            padding_bottom: padding(p, "paddingBottom", d.padding_bottom),
        }
    }

    fn markup(&self) -> String {
        format!(
            r#"
    <!-- Call to Action -->
    <section class="cta-section">
        <div class="container">
            <h2 class="cta-title">{title}</h2>
            <p class="cta-subtitle">{subtitle}</p>
            <div class="cta-buttons">
                <a href="{primary_link}" class="cta-button cta-button-primary">{primary}</a>
                <a href="{secondary_link}" class="cta-button cta-button-secondary">{secondary}</a>
            </div>
        </div>
    </section>
"#,
            title = escape::echo_html(&self.title),
            subtitle = escape::echo_html(&self.subtitle),
            primary_link = escape::echo_url(&self.primary_link),
            primary = escape::echo_html(&self.primary_button),
            secondary_link = escape::echo_url(&self.secondary_link),
            secondary = escape::echo_html(&self.secondary_button),
        )
    }

    fn style(&self) -> String {
        CssFragment::new("Call to Action")
            .rule(
                ".cta-section",
                &[
                    ("background-color", &self.background_color),
                    ("color", &self.text_color),
                    (
                        "padding",
                        &vertical_padding(self.padding_top, self.padding_bottom),
                    ),
                    ("text-align", "center"),
                ],
            )
            .rule(
                ".cta-title",
                &[
                    ("font-size", "2.25rem"),
                    ("font-weight", "bold"),
                    ("margin-bottom", "1rem"),
                ],
            )
            .rule(
                ".cta-subtitle",
                &[
                    ("font-size", "1.25rem"),
                    ("margin-bottom", "2rem"),
                    ("opacity", "0.9"),
                ],
            )
            .rule(
                ".cta-buttons",
                &[
                    ("display", "flex"),
                    ("gap", "1rem"),
                    ("justify-content", "center"),
                    ("flex-wrap", "wrap"),
                ],
            )
            .rule(
                ".cta-button",
                &[
                    ("display", "inline-block"),
                    ("padding", "0.75rem 2rem"),
                    ("border-radius", "0.5rem"),
                    ("font-weight", "600"),
                    ("text-decoration", "none"),
                ],
            )
            .rule(
                ".cta-button-primary",
                &[("background", "#ffffff"), ("color", &self.background_color)],
            )
            .rule(
                ".cta-button-secondary",
                &[("border", "2px solid currentColor"), ("color", "inherit")],
            )
            .finish()
    }
}

// ============================================================================
// Headline / subheading
// ============================================================================

/// Large standalone title.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HeadlineProps {
    /// Headline text
    pub text: String,
    /// Font size in pixels
    pub font_size: i64,
    /// Text color
    pub text_color: String,
    /// Text alignment
    pub alignment: TextAlign,
}

impl Default for HeadlineProps {
    fn default() -> Self {
        Self {
            text: "Your Amazing Headline".to_string(),
            font_size: 48,
            text_color: "#1f2937".to_string(),
            alignment: TextAlign::Center,
        }
    }
}

impl BlockProps for HeadlineProps {
    fn from_properties(p: &Properties) -> Self {
        let d = Self::default();
        Self {
            text: p.text("text").unwrap_or(d.text),
            font_size: p.int_in("fontSize", 8..=200).unwrap_or(d.font_size),
            text_color: color(p, "textColor", d.text_color),
            alignment: TextAlign::read(p, "alignment").unwrap_or(d.alignment),
        }
    }

    fn markup(&self) -> String {
        format!(
            r#"
    <!-- Headline -->
    <section class="headline-section">
        <div class="container">
            <h2 class="headline">{text}</h2>
        </div>
    </section>
"#,
            text = escape::echo_html(&self.text),
        )
    }

    fn style(&self) -> String {
        CssFragment::new("Headline")
            .rule(".headline-section", &[("padding", "2rem 0")])
            .rule(
                ".headline",
                &[
                    ("font-size", &format!("{}px", self.font_size)),
                    ("font-weight", "bold"),
                    ("line-height", "1.2"),
                    ("color", &self.text_color),
                    ("text-align", self.alignment.as_css()),
                ],
            )
            .media(
                768,
                &[(
                    ".headline",
                    &[("font-size", &format!("{}px", (self.font_size * 2 / 3).max(8)))],
                )],
            )
            .finish()
    }
}

/// Supporting line under a headline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubheadingProps {
    /// Subheading text
    pub text: String,
    /// Font size in pixels
    pub font_size: i64,
    /// Text color
    pub text_color: String,
    /// Text alignment
    pub alignment: TextAlign,
}

impl Default for SubheadingProps {
    fn default() -> Self {
        Self {
            text: "Supporting text that provides additional context and information".to_string(),
            font_size: 20,
            text_color: "#6b7280".to_string(),
            alignment: TextAlign::Center,
        }
    }
}

impl BlockProps for SubheadingProps {
    fn from_properties(p: &Properties) -> Self {
        let d = Self::default();
        Self {
            text: p.text("text").unwrap_or(d.text),
            font_size: p.int_in("fontSize", 8..=200).unwrap_or(d.font_size),
            text_color: color(p, "textColor", d.text_color),
            alignment: TextAlign::read(p, "alignment").unwrap_or(d.alignment),
        }
    }

    fn markup(&self) -> String {
        format!(
            r#"
    <!-- Subheading -->
    <section class="subheading-section">
        <div class="container">
            <p class="subheading">{text}</p>
        </div>
    </section>
"#,
            text = escape::echo_html(&self.text),
        )
    }

    fn style(&self) -> String {
        CssFragment::new("Subheading")
            .rule(".subheading-section", &[("padding", "0.5rem 0 1.5rem 0")])
            .rule(
                ".subheading",
                &[
                    ("font-size", &format!("{}px", self.font_size)),
                    ("color", &self.text_color),
                    ("text-align", self.alignment.as_css()),
                    ("max-width", "48rem"),
                    ("margin", "0 auto"),
                ],
            )
            .finish()
    }
}

// ============================================================================
// Text block
// ============================================================================

/// Title plus paragraphs of free text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TextProps {
    /// Block title
    pub title: String,
    /// Body text; blank lines separate paragraphs
    pub content: String,
    /// Text alignment
    pub alignment: TextAlign,
}

impl Default for TextProps {
    fn default() -> Self {
        Self {
            title: "Your Content Title".to_string(),
            content: "Your content goes here. This is a flexible text block that can contain any type of content you want to display on your website. You can customize the text, formatting, and styling through the properties panel.".to_string(),
            alignment: TextAlign::Left,
        }
    }
}

impl BlockProps for TextProps {
    fn from_properties(p: &Properties) -> Self {
        let d = Self::default();
        Self {
            title: p.text("title").unwrap_or(d.title),
            content: p.text("content").unwrap_or(d.content),
            alignment: TextAlign::read(p, "alignment").unwrap_or(d.alignment),
        }
    }

    fn markup(&self) -> String {
        let paragraphs: String = self
            .content
            .split("\n\n")
            .map(str::trim)
            .filter(|para| !para.is_empty())
            .map(|para| {
                format!(
                    "            <p>{}</p>\n",
                    escape::echo_html(&para.replace('\n', " "))
                )
            })
            .collect();

        format!(
            r#"
    <!-- Text Block -->
    <section class="text-section">
        <div class="container">
            <h2 class="text-title">{title}</h2>
{paragraphs}        </div>
    </section>
"#,
            title = escape::echo_html(&self.title),
        )
    }

    fn style(&self) -> String {
        CssFragment::new("Text Block")
            .rule(
                ".text-section",
                &[("padding", "3rem 0"), ("text-align", self.alignment.as_css())],
            )
            .rule(
                ".text-title",
                &[
                    ("font-size", "2rem"),
                    ("font-weight", "bold"),
                    ("margin-bottom", "1.5rem"),
                    ("color", "#111827"),
                ],
            )
            .rule(
                ".text-section p",
                &[
                    ("color", "#4b5563"),
                    ("margin-bottom", "1rem"),
                    ("max-width", "48rem"),
                ],
            )
            .finish()
    }
}
