//! Image, video and logo blocks.

use serde::Serialize;

use super::{comma_list, padding, BlockProps};
use crate::generator::css::{vertical_padding, CssFragment};
use crate::generator::escape;
use crate::models::Properties;

const PLACEHOLDER_IMAGE: &str = "https://via.placeholder.com/400x250";

fn image_tags(urls: &[String], alt: &str, indent: &str, class: &str) -> String {
    urls.iter()
        .map(|url| {
            format!(
                "{indent}<div class=\"{class}\">\n{indent}    <img src=\"{}\" alt=\"{}\">\n{indent}</div>\n",
                escape::echo_url(url),
                escape::html(alt)
            )
        })
        .collect()
}

// ============================================================================
// Gallery
// ============================================================================

/// Image grid fed by the `gallery_images` ACF field, with placeholders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GalleryProps {
    /// Section title
    pub title: String,
    /// Grid columns (1-6)
    pub columns: i64,
    /// Static image URLs used when the ACF field is empty
    #[serde(serialize_with = "comma_list")]
    pub images: Vec<String>,
    /// Top padding in pixels
    pub padding_top: i64,
    /// Bottom padding in pixels
    pub padding_bottom: i64,
}

impl Default for GalleryProps {
    fn default() -> Self {
        Self {
            title: "Our Gallery".to_string(),
            columns: 3,
            images: Vec::new(),
            padding_top: 60,
            padding_bottom: 60,
        }
    }
}

impl BlockProps for GalleryProps {
    fn from_properties(p: &Properties) -> Self {
        let d = Self::default();
        Self {
            title: p.text("title").unwrap_or(d.title),
            columns: p.int_in("columns", 1..=6).unwrap_or(d.columns),
            images: p.list("images").unwrap_or(d.images),
            padding_top: padding(p, "paddingTop", d.padding_top),
            padding_bottom: padding(p, "paddingBottom", d.padding_bottom),
        }
    }

    fn markup(&self) -> String {
        let fallback = if self.images.is_empty() {
            format!(
                r#"                    // Display placeholder images
                    for ($i = 0; $i < {columns}; $i++):
                ?>
                <div class="gallery-item">
                    <img src="{PLACEHOLDER_IMAGE}" alt="Gallery Image">
                </div>
                <?php
                    endfor;
"#,
                columns = self.columns,
            )
        } else {
            format!(
                "                ?>\n{}                <?php\n",
                image_tags(&self.images, "Gallery Image", "                ", "gallery-item")
            )
        };

        format!(
            r#"
    <!-- Gallery Section -->
    <section class="gallery-section">
        <div class="container">
            <h2>{title}</h2>
            <div class="gallery-grid">
                <?php
                $images = function_exists('get_field') ? get_field('gallery_images') : array();
                if ($images):
                    foreach ($images as $image):
                ?>
                <div class="gallery-item">
                    <img src="<?php echo esc_url($image['url']); ?>" alt="<?php echo esc_attr($image['alt']); ?>">
                </div>
                <?php
                    endforeach;
                else:
{fallback}                endif;
                ?>
            </div>
        </div>
    </section>
"#,
            title = escape::echo_html(&self.title),
        )
    }

    fn style(&self) -> String {
        CssFragment::new("Gallery Section")
            .rule(
                ".gallery-section",
                &[
                    (
                        "padding",
                        &vertical_padding(self.padding_top, self.padding_bottom),
                    ),
                    ("background", "#f9fafb"),
                ],
            )
            .rule(
                ".gallery-section h2",
                &[
                    ("text-align", "center"),
                    ("font-size", "2rem"),
                    ("margin-bottom", "3rem"),
                ],
            )
            .rule(
                ".gallery-grid",
                &[
                    ("display", "grid"),
                    (
                        "grid-template-columns",
                        &format!("repeat({}, 1fr)", self.columns),
                    ),
                    ("gap", "1.5rem"),
                ],
            )
            .rule(
                ".gallery-item img",
                &[
                    ("width", "100%"),
                    ("height", "250px"),
                    ("object-fit", "cover"),
                    ("border-radius", "0.5rem"),
                ],
            )
            .media(
                768,
                &[(".gallery-grid", &[("grid-template-columns", "repeat(2, 1fr)")])],
            )
            .media(
                480,
                &[(".gallery-grid", &[("grid-template-columns", "1fr")])],
            )
            .finish()
    }
}

// ============================================================================
// Images
// ============================================================================

/// Simple image grid with an optional title.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImagesProps {
    /// Optional title, omitted when blank
    pub title: String,
    /// Number of placeholder images (1-12)
    pub image_count: i64,
    /// Image URLs; replace the placeholders when present
    #[serde(serialize_with = "comma_list")]
    pub images: Vec<String>,
}

impl Default for ImagesProps {
    fn default() -> Self {
        Self {
            title: String::new(),
            image_count: 3,
            images: Vec::new(),
        }
    }
}

impl BlockProps for ImagesProps {
    fn from_properties(p: &Properties) -> Self {
        let d = Self::default();
        Self {
            title: p.text("title").unwrap_or(d.title),
            image_count: p.int_in("imageCount", 1..=12).unwrap_or(d.image_count),
            images: p.list("images").unwrap_or(d.images),
        }
    }

    fn markup(&self) -> String {
        let title = if self.title.trim().is_empty() {
            String::new()
        } else {
            format!(
                "            <h2 class=\"images-title\">{}</h2>\n",
                escape::echo_html(&self.title)
            )
        };
        let urls: Vec<String> = if self.images.is_empty() {
            (0..self.image_count)
                .map(|_| "https://via.placeholder.com/600x600".to_string())
                .collect()
        } else {
            self.images.clone()
        };

        format!(
            r#"
    <!-- Image Block -->
    <section class="images-section">
        <div class="container">
{title}            <div class="images-grid">
{images}            </div>
        </div>
    </section>
"#,
            images = image_tags(&urls, "Image", "                ", "images-item"),
        )
    }

    fn style(&self) -> String {
        CssFragment::new("Image Block")
            .rule(".images-section", &[("padding", "4rem 0")])
            .rule(
                ".images-title",
                &[
                    ("text-align", "center"),
                    ("font-size", "2rem"),
                    ("margin-bottom", "3rem"),
                ],
            )
            .rule(
                ".images-grid",
                &[
                    ("display", "grid"),
                    ("grid-template-columns", "repeat(auto-fit, minmax(240px, 1fr))"),
                    ("gap", "1.5rem"),
                ],
            )
            .rule(
                ".images-item img",
                &[
                    ("width", "100%"),
                    ("aspect-ratio", "1 / 1"),
                    ("object-fit", "cover"),
                    ("border-radius", "0.5rem"),
                ],
            )
            .finish()
    }
}

// ============================================================================
// Video
// ============================================================================

/// Embedded video with title and subtitle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoProps {
    /// Section title
    pub title: String,
    /// Line under the title
    pub subtitle: String,
    /// oEmbed-capable video URL; a placeholder is shown when blank
    pub video_url: String,
}

impl Default for VideoProps {
    fn default() -> Self {
        Self {
            title: "Watch Our Demo".to_string(),
            subtitle: "See how our solution works in action".to_string(),
            video_url: String::new(),
        }
    }
}

impl BlockProps for VideoProps {
    fn from_properties(p: &Properties) -> Self {
        let d = Self::default();
        Self {
            title: p.text("title").unwrap_or(d.title),
            subtitle: p.text("subtitle").unwrap_or(d.subtitle),
            video_url: p.text("videoUrl").unwrap_or(d.video_url),
        }
    }

    fn markup(&self) -> String {
        let player = if self.video_url.trim().is_empty() {
            "                <div class=\"video-placeholder\"><span class=\"video-play\" aria-hidden=\"true\">&#9654;</span></div>\n".to_string()
        } else {
            format!(
                "                <?php echo wp_oembed_get(esc_url_raw({})); ?>\n",
                escape::php_string(&self.video_url)
            )
        };

        format!(
            r#"
    <!-- Video Section -->
    <section class="video-section">
        <div class="container">
            <h2 class="video-title">{title}</h2>
            <p class="video-subtitle">{subtitle}</p>
            <div class="video-wrapper">
{player}            </div>
        </div>
    </section>
"#,
            title = escape::echo_html(&self.title),
            subtitle = escape::echo_html(&self.subtitle),
        )
    }

    fn style(&self) -> String {
        CssFragment::new("Video Section")
            .rule(
                ".video-section",
                &[
                    ("padding", "4rem 0"),
                    ("background", "#f9fafb"),
                    ("text-align", "center"),
                ],
            )
            .rule(
                ".video-title",
                &[("font-size", "2rem"), ("margin-bottom", "1rem")],
            )
            .rule(
                ".video-subtitle",
                &[("color", "#4b5563"), ("margin-bottom", "2rem")],
            )
            .rule(
                ".video-wrapper",
                &[
                    ("max-width", "56rem"),
                    ("margin", "0 auto"),
                    ("aspect-ratio", "16 / 9"),
                ],
            )
            .rule(
                ".video-wrapper iframe",
                &[("width", "100%"), ("height", "100%")],
            )
            .rule(
                ".video-placeholder",
                &[
                    ("display", "flex"),
                    ("align-items", "center"),
                    ("justify-content", "center"),
                    ("height", "100%"),
                    ("background", "#1f2937"),
                    ("border-radius", "0.5rem"),
                ],
            )
            .rule(
                ".video-play",
                &[("color", "#ffffff"), ("font-size", "3rem")],
            )
            .finish()
    }
}

// ============================================================================
// Logo rows (logos, client logos, social proof)
// ============================================================================

fn logo_items(names: &[String], class: &str) -> String {
    names
        .iter()
        .map(|name| {
            format!(
                "                <div class=\"{class}\">{}</div>\n",
                escape::html(name)
            )
        })
        .collect()
}

fn placeholder_names(prefix: &str, count: i64) -> Vec<String> {
    (1..=count).map(|n| format!("{prefix} {n}")).collect()
}

/// Strip of partner or press logos.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LogosProps {
    /// Caption above the strip
    pub title: String,
    /// Logo names
    #[serde(serialize_with = "comma_list")]
    pub logos: Vec<String>,
}

impl Default for LogosProps {
    fn default() -> Self {
        Self {
            title: "As featured in".to_string(),
            logos: ["Partner One", "Partner Two", "Partner Three", "Partner Four"]
                .map(String::from)
                .to_vec(),
        }
    }
}

impl BlockProps for LogosProps {
    fn from_properties(p: &Properties) -> Self {
        let d = Self::default();
        Self {
            title: p.text("title").unwrap_or(d.title),
            logos: p.list("logos").unwrap_or(d.logos),
        }
    }

    fn markup(&self) -> String {
        format!(
            r#"
    <!-- Logo Strip -->
    <section class="logos-section">
        <div class="container">
            <p class="logos-title">{title}</p>
            <div class="logos-row">
{items}            </div>
        </div>
    </section>
"#,
            title = escape::echo_html(&self.title),
            items = logo_items(&self.logos, "logos-item"),
        )
    }

    fn style(&self) -> String {
        CssFragment::new("Logo Strip")
            .rule(
                ".logos-section",
                &[("padding", "2.5rem 0"), ("text-align", "center")],
            )
            .rule(
                ".logos-title",
                &[
                    ("color", "#6b7280"),
                    ("text-transform", "uppercase"),
                    ("letter-spacing", "0.05em"),
                    ("margin-bottom", "1.5rem"),
                ],
            )
            .rule(
                ".logos-row",
                &[
                    ("display", "flex"),
                    ("flex-wrap", "wrap"),
                    ("justify-content", "center"),
                    ("gap", "2.5rem"),
                ],
            )
            .rule(
                ".logos-item",
                &[
                    ("font-weight", "600"),
                    ("color", "#9ca3af"),
                    ("font-size", "1.125rem"),
                ],
            )
            .finish()
    }
}

/// Grid of client logo tiles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientLogosProps {
    /// Caption above the grid
    pub title: String,
    /// Number of placeholder tiles (1-12)
    pub logo_count: i64,
    /// Client names; replace the placeholders when present
    #[serde(serialize_with = "comma_list")]
    pub logos: Vec<String>,
}

impl Default for ClientLogosProps {
    fn default() -> Self {
        Self {
            title: "Trusted by leading companies".to_string(),
            logo_count: 6,
            logos: Vec::new(),
        }
    }
}

impl BlockProps for ClientLogosProps {
    fn from_properties(p: &Properties) -> Self {
        let d = Self::default();
        Self {
            title: p.text("title").unwrap_or(d.title),
            logo_count: p.int_in("logoCount", 1..=12).unwrap_or(d.logo_count),
            logos: p.list("logos").unwrap_or(d.logos),
        }
    }

    fn markup(&self) -> String {
        let names = if self.logos.is_empty() {
            placeholder_names("CLIENT", self.logo_count)
        } else {
            self.logos.clone()
        };

        format!(
            r#"
    <!-- Client Logos -->
    <section class="client-logos-section">
        <div class="container">
            <h3 class="client-logos-title">{title}</h3>
            <div class="client-logos-grid">
{items}            </div>
        </div>
    </section>
"#,
            title = escape::echo_html(&self.title),
            items = logo_items(&names, "client-logo"),
        )
    }

    fn style(&self) -> String {
        CssFragment::new("Client Logos")
            .rule(".client-logos-section", &[("padding", "3rem 0")])
            .rule(
                ".client-logos-title",
                &[
                    ("text-align", "center"),
                    ("color", "#4b5563"),
                    ("font-size", "1.125rem"),
                    ("margin-bottom", "2rem"),
                ],
            )
            .rule(
                ".client-logos-grid",
                &[
                    ("display", "grid"),
                    ("grid-template-columns", "repeat(auto-fit, minmax(120px, 1fr))"),
                    ("gap", "2rem"),
                ],
            )
            .rule(
                ".client-logo",
                &[
                    ("background", "#f3f4f6"),
                    ("height", "4rem"),
                    ("border-radius", "0.25rem"),
                    ("display", "flex"),
                    ("align-items", "center"),
                    ("justify-content", "center"),
                    ("color", "#9ca3af"),
                    ("font-weight", "600"),
                    ("font-size", "0.875rem"),
                ],
            )
            .finish()
    }
}

/// Line of social proof above a row of logos.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialProofProps {
    /// Claim shown above the logos
    pub subtitle: String,
    /// Number of placeholder logos (1-12)
    pub logo_count: i64,
    /// Logo names; replace the placeholders when present
    #[serde(serialize_with = "comma_list")]
    pub logos: Vec<String>,
}

impl Default for SocialProofProps {
    fn default() -> Self {
        Self {
            subtitle: "Trusted by thousands of companies worldwide".to_string(),
            logo_count: 5,
            logos: Vec::new(),
        }
    }
}

impl BlockProps for SocialProofProps {
    fn from_properties(p: &Properties) -> Self {
        let d = Self::default();
        Self {
            subtitle: p.text("subtitle").unwrap_or(d.subtitle),
            logo_count: p.int_in("logoCount", 1..=12).unwrap_or(d.logo_count),
            logos: p.list("logos").unwrap_or(d.logos),
        }
    }

    fn markup(&self) -> String {
        let names = if self.logos.is_empty() {
            placeholder_names("LOGO", self.logo_count)
        } else {
            self.logos.clone()
        };

        format!(
            r#"
    <!-- Social Proof -->
    <section class="social-proof-section">
        <div class="container">
            <p class="social-proof-subtitle">{subtitle}</p>
            <div class="social-proof-logos">
{items}            </div>
        </div>
    </section>
"#,
            subtitle = escape::echo_html(&self.subtitle),
            items = logo_items(&names, "social-proof-logo"),
        )
    }

    fn style(&self) -> String {
        CssFragment::new("Social Proof")
            .rule(
                ".social-proof-section",
                &[("padding", "4rem 0"), ("text-align", "center")],
            )
            .rule(
                ".social-proof-subtitle",
                &[("color", "#4b5563"), ("margin-bottom", "2rem")],
            )
            .rule(
                ".social-proof-logos",
                &[
                    ("display", "grid"),
                    ("grid-template-columns", "repeat(auto-fit, minmax(140px, 1fr))"),
                    ("gap", "2rem"),
                    ("align-items", "center"),
                    ("opacity", "0.6"),
                ],
            )
            .rule(
                ".social-proof-logo",
                &[
                    ("background", "#e5e7eb"),
                    ("height", "3rem"),
                    ("border-radius", "0.25rem"),
                    ("display", "flex"),
                    ("align-items", "center"),
                    ("justify-content", "center"),
                    ("color", "#6b7280"),
                    ("font-weight", "600"),
                ],
            )
            .finish()
    }
}
