//! File assembler: turns pages of components into the theme file set.
//!
//! Output is a pure function of the input. Nothing here reads the clock, the
//! environment or the file system, so assembling the same pages twice yields
//! byte-identical files.

use std::collections::{BTreeMap, HashSet};
use std::fmt::Write as _;

use serde::Serialize;

use super::blocks::{render_component, render_style};
use super::escape;
use crate::config::GeneratorConfig;
use crate::models::{Component, PageContent, TemplateDocument, TemplateMeta};

const DEFAULT_DESCRIPTION: &str = "A custom WordPress theme generated with Template Builder";

/// Generated theme files, ordered by file name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ThemeFiles(BTreeMap<String, String>);

impl ThemeFiles {
    /// Returns the content of a file.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    /// Iterates `(name, content)` pairs in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// File names in order.
    pub fn names(&self) -> Vec<String> {
        self.0.keys().cloned().collect()
    }

    /// Number of files.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when no file was generated.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Consumes the set, returning the underlying map.
    pub fn into_inner(self) -> BTreeMap<String, String> {
        self.0
    }

    fn insert(&mut self, name: impl Into<String>, content: String) {
        self.0.insert(name.into(), content);
    }
}

/// Assembles a single-page theme with default settings.
///
/// The components form the home page and render into `index.php`.
pub fn assemble(components: &[Component], meta: &TemplateMeta) -> ThemeFiles {
    ThemeGenerator::default().assemble(components, meta)
}

/// Theme generator configured with container width and text domain.
#[derive(Debug, Clone, Default)]
pub struct ThemeGenerator {
    config: GeneratorConfig,
}

impl ThemeGenerator {
    /// Creates a generator from configuration.
    pub fn new(config: &GeneratorConfig) -> Self {
        Self {
            config: config.clone(),
        }
    }

    /// Assembles a theme whose only page holds `components`.
    pub fn assemble(&self, components: &[Component], meta: &TemplateMeta) -> ThemeFiles {
        let document = TemplateDocument::single_page(meta.clone(), components.to_vec());
        self.assemble_document(&document)
    }

    /// Assembles a theme from a template document.
    pub fn assemble_document(&self, document: &TemplateDocument) -> ThemeFiles {
        self.assemble_pages(&document.meta, &document.pages)
    }

    /// Assembles a theme from metadata and pages.
    ///
    /// The first page flagged as home (or the first page when none is
    /// flagged) renders into `index.php`; every other page renders into
    /// `page-<slug>.php`, with `-2`, `-3`, ... appended to repeated slugs.
    pub fn assemble_pages(&self, meta: &TemplateMeta, pages: &[PageContent]) -> ThemeFiles {
        let component_count: usize = pages.iter().map(|p| p.components.len()).sum();
        tracing::debug!(
            "Assembling theme '{}': {} pages, {} components",
            meta.name,
            pages.len(),
            component_count
        );

        let mut files = ThemeFiles::default();
        files.insert("style.css", self.style_css(meta, pages));
        files.insert("functions.php", self.functions_php(meta));
        files.insert("header.php", header_php());
        files.insert("footer.php", footer_php());
        files.insert("js/main.js", main_js());

        let home = pages
            .iter()
            .position(|p| p.is_home_page)
            .or_else(|| (!pages.is_empty()).then_some(0));

        match home {
            Some(idx) => files.insert("index.php", page_php(&pages[idx].components)),
            None => files.insert("index.php", page_php(&[])),
        }

        let mut used = HashSet::new();
        for (idx, page) in pages.iter().enumerate() {
            if Some(idx) == home {
                continue;
            }
            let base = escape::slug(&page.slug);
            let mut slug = base.clone();
            let mut n = 2;
            while !used.insert(slug.clone()) {
                slug = format!("{base}-{n}");
                n += 1;
            }
            files.insert(format!("page-{slug}.php"), page_php(&page.components));
        }

        files
    }

    fn text_domain(&self, meta: &TemplateMeta) -> String {
        self.config
            .text_domain
            .clone()
            .unwrap_or_else(|| escape::text_domain(&meta.name))
    }

    fn style_css(&self, meta: &TemplateMeta, pages: &[PageContent]) -> String {
        let mut css = String::from("/*\n");
        let _ = writeln!(css, "Theme Name: {}", escape::css_comment(&meta.name));
        let description = meta
            .description
            .as_deref()
            .filter(|d| !d.trim().is_empty())
            .unwrap_or(DEFAULT_DESCRIPTION);
        let _ = writeln!(css, "Description: {}", escape::css_comment(description));
        if let Some(author) = meta.author.as_deref().filter(|a| !a.trim().is_empty()) {
            let _ = writeln!(css, "Author: {}", escape::css_comment(author));
        }
        let _ = writeln!(css, "Version: {}", escape::css_comment(&meta.version));
        if !meta.tags.is_empty() {
            let _ = writeln!(css, "Tags: {}", escape::css_comment(&meta.tags.join(", ")));
        }
        let _ = writeln!(css, "Text Domain: {}", self.text_domain(meta));
        css.push_str("*/\n");

        let _ = write!(
            css,
            r"
/* Reset and base styles */
* {{
  margin: 0;
  padding: 0;
  box-sizing: border-box;
}}

body {{
  font-family: 'Inter', -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
  line-height: 1.6;
  color: #333;
}}

.container {{
  max-width: {width}px;
  margin: 0 auto;
  padding: 0 1rem;
}}

/* Responsive visibility */
@media (max-width: 767px) {{
  .hide-on-mobile {{
    display: none;
  }}
}}

@media (min-width: 768px) and (max-width: 1023px) {{
  .hide-on-tablet {{
    display: none;
  }}
}}

/* Component styles */
",
            width = self.config.container_width,
        );

        for component in pages.iter().flat_map(|p| &p.components) {
            css.push_str(&render_style(&component.kind, &component.properties));
        }
        css
    }

    fn functions_php(&self, meta: &TemplateMeta) -> String {
        let ident = escape::identifier(&meta.name);
        let domain = escape::php_string(&self.text_domain(meta));
        format!(
            r#"<?php
/**
 * Theme functions for {name}.
 */

function {ident}_theme_setup() {{
    // Add theme support
    add_theme_support('title-tag');
    add_theme_support('post-thumbnails');
    add_theme_support('html5', array('search-form', 'comment-form', 'comment-list', 'gallery', 'caption'));

    // Register navigation menus
    register_nav_menus(array(
        'primary' => __('Primary Menu', {domain}),
        'footer' => __('Footer Menu', {domain}),
    ));
}}
add_action('after_setup_theme', '{ident}_theme_setup');

function {ident}_scripts() {{
    wp_enqueue_style('theme-style', get_stylesheet_uri());
    wp_enqueue_style('google-fonts', 'https://fonts.googleapis.com/css2?family=Inter:wght@400;500;600;700&display=swap');
    wp_enqueue_script('theme-script', get_template_directory_uri() . '/js/main.js', array(), null, true);
}}
add_action('wp_enqueue_scripts', '{ident}_scripts');

// Handle contact form submission
function {ident}_handle_contact_form() {{
    if (!isset($_POST['contact_nonce']) || !wp_verify_nonce($_POST['contact_nonce'], 'contact_form')) {{
        wp_die(__('Invalid form submission.', {domain}), '', array('response' => 400));
    }}

    if (isset($_POST['name']) && isset($_POST['email']) && isset($_POST['message'])) {{
        $name = sanitize_text_field(wp_unslash($_POST['name']));
        $email = sanitize_email(wp_unslash($_POST['email']));
        $message = sanitize_textarea_field(wp_unslash($_POST['message']));

        $to = get_option('admin_email');
        $subject = 'Contact Form Submission from ' . $name;
        $body = "Name: $name\nEmail: $email\nMessage: $message";
        $headers = array('Content-Type: text/plain; charset=UTF-8', 'Reply-To: ' . $email);

        wp_mail($to, $subject, $body, $headers);
    }}

    $back = wp_get_referer() ? wp_get_referer() : home_url('/');
    wp_safe_redirect(add_query_arg('contact', 'sent', $back));
    exit;
}}
add_action('admin_post_nopriv_contact_form', '{ident}_handle_contact_form');
add_action('admin_post_contact_form', '{ident}_handle_contact_form');
"#,
            name = escape::css_comment(&meta.name),
        )
    }
}

fn page_php(components: &[Component]) -> String {
    let mut php = String::from("<?php get_header(); ?>\n\n<main id=\"main\" class=\"site-main\">\n");
    for component in components {
        php.push_str(&render_component(component));
    }
    php.push_str("\n</main>\n\n<?php get_footer(); ?>\n");
    php
}

fn header_php() -> String {
    r#"<!DOCTYPE html>
<html <?php language_attributes(); ?>>
<head>
    <meta charset="<?php bloginfo('charset'); ?>">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <?php wp_head(); ?>
</head>
<body <?php body_class(); ?>>
<?php wp_body_open(); ?>
"#
    .to_string()
}

fn footer_php() -> String {
    "\n<?php wp_footer(); ?>\n</body>\n</html>\n".to_string()
}

fn main_js() -> String {
    r"document.addEventListener('DOMContentLoaded', function () {
    console.log('Theme loaded');
});
"
    .to_string()
}
