//! Page chrome: navigation bar, page header and footer.

use serde::Serialize;

use super::{color, comma_list, padding, BlockProps, TextAlign};
use crate::generator::css::{vertical_padding, CssFragment};
use crate::generator::escape;
use crate::models::Properties;

// ============================================================================
// Navbar
// ============================================================================

/// Top navigation bar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NavbarProps {
    /// Brand text
    pub title: String,
    /// Fallback menu entries used when no WordPress menu is assigned
    #[serde(serialize_with = "comma_list")]
    pub menu_items: Vec<String>,
    /// Bar background
    pub background_color: String,
    /// Link and brand color
    pub text_color: String,
}

impl Default for NavbarProps {
    fn default() -> Self {
        Self {
            title: "Your Site".to_string(),
            menu_items: ["Home", "About", "Services", "Contact"]
                .map(String::from)
                .to_vec(),
            background_color: "#ffffff".to_string(),
            text_color: "#333333".to_string(),
        }
    }
}

impl BlockProps for NavbarProps {
    fn from_properties(p: &Properties) -> Self {
        let d = Self::default();
        Self {
            title: p.text("title").unwrap_or(d.title),
            menu_items: p.list("menuItems").unwrap_or(d.menu_items),
            background_color: color(p, "backgroundColor", d.background_color),
            text_color: color(p, "textColor", d.text_color),
        }
    }

    fn markup(&self) -> String {
        let items: String = self
            .menu_items
            .iter()
            .map(|item| {
                let path = escape::menu_path(item);
                format!(
                    "                <li><a href=\"<?php echo esc_url(home_url({})); ?>\">{}</a></li>\n",
                    escape::php_string(&path),
                    escape::html(item)
                )
            })
            .collect();

        format!(
            r#"
    <!-- Navigation Bar -->
    <nav class="navbar">
        <div class="container">
            <div class="nav-brand">
                <a href="<?php echo esc_url(home_url('/')); ?>">{title}</a>
            </div>
            <?php if (has_nav_menu('primary')): ?>
            <?php
            wp_nav_menu(array(
                'theme_location' => 'primary',
                'menu_class' => 'nav-menu',
                'container' => false
            ));
            ?>
            <?php else: ?>
            <ul class="nav-menu">
{items}            </ul>
            <?php endif; ?>
        </div>
    </nav>
"#,
            title = escape::echo_html(&self.title),
        )
    }

    fn style(&self) -> String {
        CssFragment::new("Navigation Bar")
            .rule(
                ".navbar",
                &[
                    ("background-color", &self.background_color),
                    ("color", &self.text_color),
                    ("padding", "1rem 0"),
                    ("border-bottom", "1px solid #e5e7eb"),
                ],
            )
            .rule(
                ".navbar .container",
                &[
                    ("display", "flex"),
                    ("align-items", "center"),
                    ("justify-content", "space-between"),
                ],
            )
            .rule(
                ".nav-brand a",
                &[
                    ("font-size", "1.5rem"),
                    ("font-weight", "bold"),
                    ("text-decoration", "none"),
                    ("color", "inherit"),
                ],
            )
            .rule(
                ".nav-menu",
                &[("display", "flex"), ("list-style", "none"), ("gap", "2rem")],
            )
            .rule(
                ".nav-menu a",
                &[
                    ("text-decoration", "none"),
                    ("color", "inherit"),
                    ("transition", "color 0.3s"),
                ],
            )
            .rule(".nav-menu a:hover", &[("color", "#2563eb")])
            .media(768, &[(".nav-menu", &[("display", "none")])])
            .finish()
    }
}

// ============================================================================
// Page header
// ============================================================================

/// Title band at the top of a page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HeaderProps {
    /// Page title
    pub title: String,
    /// Introductory line under the title
    pub subtitle: String,
    /// Band background
    pub background_color: String,
    /// Text color
    pub text_color: String,
    /// Text alignment
    pub alignment: TextAlign,
    /// Top padding in pixels
    pub padding_top: i64,
    /// Bottom padding in pixels
    pub padding_bottom: i64,
}

impl Default for HeaderProps {
    fn default() -> Self {
        Self {
            title: "Page Title".to_string(),
            subtitle: "A brief introduction to this page".to_string(),
            background_color: "#f9fafb".to_string(),
            text_color: "#1f2937".to_string(),
            alignment: TextAlign::Center,
            padding_top: 48,
            padding_bottom: 48,
        }
    }
}

impl BlockProps for HeaderProps {
    fn from_properties(p: &Properties) -> Self {
        let d = Self::default();
        Self {
            title: p.text("title").unwrap_or(d.title),
            subtitle: p.text("subtitle").unwrap_or(d.subtitle),
            background_color: color(p, "backgroundColor", d.background_color),
            text_color: color(p, "textColor", d.text_color),
            alignment: TextAlign::read(p, "alignment").unwrap_or(d.alignment),
            padding_top: padding(p, "paddingTop", d.padding_top),
            padding_bottom: padding(p, "paddingBottom", d.padding_bottom),
        }
    }

    fn markup(&self) -> String {
        format!(
            r#"
    <!-- Page Header -->
    <header class="page-header">
        <div class="container">
            <h1 class="page-header-title">{title}</h1>
            <p class="page-header-subtitle">{subtitle}</p>
        </div>
    </header>
"#,
            title = escape::echo_html(&self.title),
            subtitle = escape::echo_html(&self.subtitle),
        )
    }

    fn style(&self) -> String {
        CssFragment::new("Page Header")
            .rule(
                ".page-header",
                &[
                    ("background-color", &self.background_color),
                    ("color", &self.text_color),
                    (
                        "padding",
                        &vertical_padding(self.padding_top, self.padding_bottom),
                    ),
                    ("text-align", self.alignment.as_css()),
                ],
            )
            .rule(
                ".page-header-title",
                &[
                    ("font-size", "2.5rem"),
                    ("font-weight", "bold"),
                    ("margin-bottom", "0.75rem"),
                ],
            )
            .rule(
                ".page-header-subtitle",
                &[("font-size", "1.125rem"), ("opacity", "0.8")],
            )
            .media(768, &[(".page-header-title", &[("font-size", "1.75rem")])])
            .finish()
    }
}

// ============================================================================
// Footer
// ============================================================================

/// Site footer with blog info, footer menu and a copyright line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FooterProps {
    /// Copyright line
    pub text: String,
    /// Footer background
    pub background_color: String,
    /// Footer text color
    pub text_color: String,
    /// Top padding in pixels
    pub padding_top: i64,
    /// Bottom padding in pixels
    pub padding_bottom: i64,
}

impl Default for FooterProps {
    fn default() -> Self {
        Self {
            text: "\u{a9} 2024 Your Company. All rights reserved.".to_string(),
            background_color: "#1f2937".to_string(),
            text_color: "#ffffff".to_string(),
            padding_top: 40,
            padding_bottom: 40,
        }
    }
}

impl BlockProps for FooterProps {
    fn from_properties(p: &Properties) -> Self {
        let d = Self::default();
        Self {
            text: p.text("text").unwrap_or(d.text),
            background_color: color(p, "backgroundColor", d.background_color),
            text_color: color(p, "textColor", d.text_color),
            padding_top: padding(p, "paddingTop", d.padding_top),
            padding_bottom: padding(p, "paddingBottom", d.padding_bottom),
        }
    }

    fn markup(&self) -> String {
        format!(
            r#"
    <!-- Footer Section -->
    <footer class="site-footer">
        <div class="container">
            <div class="footer-content">
                <div class="footer-section">
                    <h3><?php bloginfo('name'); ?></h3>
                    <p><?php bloginfo('description'); ?></p>
                </div>
                <div class="footer-section">
                    <h4>Quick Links</h4>
                    <?php
                    wp_nav_menu(array(
                        'theme_location' => 'footer',
                        'menu_class' => 'footer-menu',
                        'container' => false,
                        'fallback_cb' => false
                    ));
                    ?>
                </div>
            </div>
            <div class="footer-bottom">
                <p>{text}</p>
            </div>
        </div>
    </footer>
"#,
            text = escape::echo_html(&self.text),
        )
    }

    fn style(&self) -> String {
        CssFragment::new("Footer Section")
            .rule(
                ".site-footer",
                &[
                    ("background", &self.background_color),
                    ("color", &self.text_color),
                    (
                        "padding",
                        &vertical_padding(self.padding_top, self.padding_bottom),
                    ),
                ],
            )
            .rule(
                ".footer-content",
                &[
                    ("display", "grid"),
                    ("grid-template-columns", "repeat(auto-fit, minmax(250px, 1fr))"),
                    ("gap", "2rem"),
                    ("margin-bottom", "2rem"),
                ],
            )
            .rule(
                ".footer-section h3,\n.footer-section h4",
                &[("margin-bottom", "1rem")],
            )
            .rule(".footer-menu", &[("list-style", "none")])
            .rule(
                ".footer-menu a",
                &[
                    ("color", "#d1d5db"),
                    ("text-decoration", "none"),
                    ("transition", "color 0.3s"),
                ],
            )
            .rule(".footer-menu a:hover", &[("color", "white")])
            .rule(
                ".footer-bottom",
                &[
                    ("text-align", "center"),
                    ("padding-top", "2rem"),
                    ("border-top", "1px solid #374151"),
                    ("color", "#9ca3af"),
                ],
            )
            .finish()
    }
}
