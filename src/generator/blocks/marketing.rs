//! Persuasion blocks: value proposition, pricing, trust signals, features,
//! team, testimonials, stats and about.

use serde::Serialize;

use super::{color, comma_list, record_list, BlockProps};
use crate::generator::css::CssFragment;
use crate::generator::escape;
use crate::models::{Properties, Record};

fn owned<const N: usize>(items: [&str; N]) -> Vec<String> {
    items.map(String::from).to_vec()
}

/// Centered section heading with an optional subtitle.
fn section_heading(class: &str, title: &str, subtitle: Option<&str>) -> String {
    let mut out = format!(
        "            <div class=\"{class}-header\">\n                <h2>{}</h2>\n",
        escape::echo_html(title)
    );
    if let Some(subtitle) = subtitle {
        out.push_str(&format!(
            "                <p>{}</p>\n",
            escape::echo_html(subtitle)
        ));
    }
    out.push_str("            </div>\n");
    out
}

/// Shared heading rules for the `<class>-header` block.
fn heading_rules(css: &mut CssFragment, class: &str) {
    css.rule(
        &format!(".{class}-header"),
        &[("text-align", "center"), ("margin-bottom", "3rem")],
    )
    .rule(
        &format!(".{class}-header h2"),
        &[
            ("font-size", "2rem"),
            ("font-weight", "bold"),
            ("margin-bottom", "1rem"),
        ],
    )
    .rule(
        &format!(".{class}-header p"),
        &[("font-size", "1.25rem"), ("color", "#4b5563")],
    );
}

// ============================================================================
// Value proposition
// ============================================================================

/// One benefit card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Benefit {
    /// Card heading
    pub title: String,
    /// Card text
    pub description: String,
}

impl Benefit {
    fn new(title: &str, description: &str) -> Self {
        Self {
            title: title.to_string(),
            description: description.to_string(),
        }
    }

    fn from_record(r: &Record) -> Self {
        Self::new(r.field_or("title", ""), r.field_or("description", ""))
    }
}

/// "Why choose us" section with benefit cards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValuePropositionProps {
    /// Section title
    pub title: String,
    /// Line under the title
    pub subtitle: String,
    /// Benefit cards
    pub benefits: Vec<Benefit>,
}

impl Default for ValuePropositionProps {
    fn default() -> Self {
        Self {
            title: "Why Choose Us?".to_string(),
            subtitle: "Discover the benefits that set us apart".to_string(),
            benefits: vec![
                Benefit::new("Fast & Reliable", "Lightning-fast performance you can count on"),
                Benefit::new("Easy to Use", "Intuitive interface that anyone can master"),
                Benefit::new("24/7 Support", "Round-the-clock assistance when you need it"),
            ],
        }
    }
}

impl BlockProps for ValuePropositionProps {
    fn from_properties(p: &Properties) -> Self {
        let d = Self::default();
        Self {
            title: p.text("title").unwrap_or(d.title),
            subtitle: p.text("subtitle").unwrap_or(d.subtitle),
            benefits: record_list(p, "benefits", &["title", "description"], Benefit::from_record)
                .unwrap_or(d.benefits),
        }
    }

    fn markup(&self) -> String {
        let cards: String = self
            .benefits
            .iter()
            .map(|b| {
                format!(
                    r#"                <div class="value-card">
                    <div class="value-icon" aria-hidden="true">&#10003;</div>
                    <h3>{}</h3>
                    <p>{}</p>
                </div>
"#,
                    escape::html(&b.title),
                    escape::html(&b.description)
                )
            })
            .collect();

        format!(
            r#"
    <!-- Value Proposition -->
    <section class="value-section">
        <div class="container">
{heading}            <div class="value-grid">
{cards}            </div>
        </div>
    </section>
"#,
            heading = section_heading("value", &self.title, Some(&self.subtitle)),
        )
    }

    fn style(&self) -> String {
        let mut css = CssFragment::new("Value Proposition");
        css.rule(
            ".value-section",
            &[("padding", "4rem 0"), ("background", "#f9fafb")],
        );
        heading_rules(&mut css, "value");
        css.rule(
            ".value-grid",
            &[
                ("display", "grid"),
                ("grid-template-columns", "repeat(auto-fit, minmax(250px, 1fr))"),
                ("gap", "2rem"),
            ],
        )
        .rule(".value-card", &[("text-align", "center")])
        .rule(
            ".value-icon",
            &[
                ("width", "4rem"),
                ("height", "4rem"),
                ("margin", "0 auto 1rem"),
                ("border-radius", "9999px"),
                ("background", "#dbeafe"),
                ("color", "#2563eb"),
                ("display", "flex"),
                ("align-items", "center"),
                ("justify-content", "center"),
                ("font-size", "1.5rem"),
            ],
        )
        .rule(
            ".value-card h3",
            &[
                ("font-size", "1.25rem"),
                ("font-weight", "600"),
                ("margin-bottom", "0.5rem"),
            ],
        )
        .rule(".value-card p", &[("color", "#4b5563")])
        .finish()
    }
}

// ============================================================================
// Pricing
// ============================================================================

/// One pricing plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Plan {
    /// Plan name
    pub name: String,
    /// Monthly price, as displayed
    pub price: String,
    /// Included features
    pub features: Vec<String>,
    /// Highlighted as the recommended plan
    pub popular: bool,
}

impl Plan {
    fn new(name: &str, price: &str, features: &[&str], popular: bool) -> Self {
        Self {
            name: name.to_string(),
            price: price.to_string(),
            features: features.iter().map(|f| (*f).to_string()).collect(),
            popular,
        }
    }

    fn from_record(r: &Record) -> Self {
        let popular = matches!(
            r.field_or("popular", "").trim().to_ascii_lowercase().as_str(),
            "true" | "yes" | "1" | "popular"
        );
        Self {
            name: r.field_or("name", "").to_string(),
            price: r.field_or("price", "").to_string(),
            features: r
                .field_or("features", "")
                .split(',')
                .map(str::trim)
                .filter(|f| !f.is_empty())
                .map(String::from)
                .collect(),
            popular,
        }
    }
}

/// Pricing table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingProps {
    /// Section title
    pub title: String,
    /// Line under the title
    pub subtitle: String,
    /// Plans, left to right
    pub plans: Vec<Plan>,
}

impl Default for PricingProps {
    fn default() -> Self {
        Self {
            title: "Simple, Transparent Pricing".to_string(),
            subtitle: "Choose the plan that's right for you".to_string(),
            plans: vec![
                Plan::new("Basic", "$9", &["Feature 1", "Feature 2", "Feature 3"], false),
                Plan::new(
                    "Pro",
                    "$29",
                    &["All Basic features", "Feature 4", "Feature 5", "Priority Support"],
                    true,
                ),
                Plan::new(
                    "Enterprise",
                    "$99",
                    &["All Pro features", "Custom integrations", "Dedicated support"],
                    false,
                ),
            ],
        }
    }
}

impl BlockProps for PricingProps {
    fn from_properties(p: &Properties) -> Self {
        let d = Self::default();
        Self {
            title: p.text("title").unwrap_or(d.title),
            subtitle: p.text("subtitle").unwrap_or(d.subtitle),
            plans: record_list(
                p,
                "plans",
                &["name", "price", "features", "popular"],
                Plan::from_record,
            )
            .unwrap_or(d.plans),
        }
    }

    fn markup(&self) -> String {
        let cards: String = self
            .plans
            .iter()
            .map(|plan| {
                let (class, badge) = if plan.popular {
                    (
                        "pricing-card popular",
                        "                    <span class=\"pricing-badge\">Most Popular</span>\n",
                    )
                } else {
                    ("pricing-card", "")
                };
                let features: String = plan
                    .features
                    .iter()
                    .map(|f| format!("                        <li>{}</li>\n", escape::html(f)))
                    .collect();
                format!(
                    r##"                <div class="{class}">
{badge}                    <h3>{name}</h3>
                    <div class="pricing-price"><span>{price}</span>/month</div>
                    <ul class="pricing-features">
{features}                    </ul>
                    <a href="#" class="pricing-button">Get Started</a>
                </div>
"##,
                    name = escape::html(&plan.name),
                    price = escape::html(&plan.price),
                )
            })
            .collect();

        format!(
            r#"
    <!-- Pricing Section -->
    <section class="pricing-section">
        <div class="container">
{heading}            <div class="pricing-grid">
{cards}            </div>
        </div>
    </section>
"#,
            heading = section_heading("pricing", &self.title, Some(&self.subtitle)),
        )
    }

    fn style(&self) -> String {
        let mut css = CssFragment::new("Pricing Section");
        css.rule(
            ".pricing-section",
            &[("padding", "4rem 0"), ("background", "#f9fafb")],
        );
        heading_rules(&mut css, "pricing");
        css.rule(
            ".pricing-grid",
            &[
                ("display", "grid"),
                ("grid-template-columns", "repeat(auto-fit, minmax(260px, 1fr))"),
                ("gap", "2rem"),
            ],
        )
        .rule(
            ".pricing-card",
            &[
                ("position", "relative"),
                ("background", "#ffffff"),
                ("border-radius", "0.5rem"),
                ("padding", "2rem"),
                ("text-align", "center"),
                ("box-shadow", "0 1px 3px rgba(0, 0, 0, 0.1)"),
            ],
        )
        .rule(".pricing-card.popular", &[("border", "2px solid #3b82f6")])
        .rule(
            ".pricing-badge",
            &[
                ("position", "absolute"),
                ("top", "-0.75rem"),
                ("left", "50%"),
                ("transform", "translateX(-50%)"),
                ("background", "#3b82f6"),
                ("color", "#ffffff"),
                ("padding", "0.25rem 1rem"),
                ("border-radius", "9999px"),
                ("font-size", "0.875rem"),
                ("font-weight", "600"),
            ],
        )
        .rule(
            ".pricing-price",
            &[("color", "#4b5563"), ("margin", "1rem 0 1.5rem")],
        )
        .rule(
            ".pricing-price span",
            &[
                ("font-size", "2.25rem"),
                ("font-weight", "bold"),
                ("color", "#111827"),
            ],
        )
        .rule(
            ".pricing-features",
            &[
                ("list-style", "none"),
                ("margin-bottom", "2rem"),
                ("color", "#4b5563"),
            ],
        )
        .rule(".pricing-features li", &[("padding", "0.375rem 0")])
        .rule(
            ".pricing-button",
            &[
                ("display", "block"),
                ("padding", "0.75rem 1.5rem"),
                ("border-radius", "0.5rem"),
                ("background", "#f3f4f6"),
                ("color", "#111827"),
                ("text-decoration", "none"),
                ("font-weight", "600"),
            ],
        )
        .rule(
            ".pricing-card.popular .pricing-button",
            &[("background", "#3b82f6"), ("color", "#ffffff")],
        )
        .finish()
    }
}

// ============================================================================
// Trust signals
// ============================================================================

/// Row of reassurance badges.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrustSignalsProps {
    /// Badge labels
    #[serde(serialize_with = "comma_list")]
    pub badges: Vec<String>,
}

impl Default for TrustSignalsProps {
    fn default() -> Self {
        Self {
            badges: owned([
                "SSL Secured",
                "Money Back Guarantee",
                "24/7 Support",
                "99.9% Uptime",
            ]),
        }
    }
}

impl BlockProps for TrustSignalsProps {
    fn from_properties(p: &Properties) -> Self {
        Self {
            badges: p.list("badges").unwrap_or_else(|| Self::default().badges),
        }
    }

    fn markup(&self) -> String {
        let badges: String = self
            .badges
            .iter()
            .map(|badge| {
                format!(
                    "                <div class=\"trust-badge\">\n                    <div class=\"trust-icon\" aria-hidden=\"true\">&#10003;</div>\n                    <span>{}</span>\n                </div>\n",
                    escape::html(badge)
                )
            })
            .collect();

        format!(
            r#"
    <!-- Trust Signals -->
    <section class="trust-section">
        <div class="container">
            <div class="trust-grid">
{badges}            </div>
        </div>
    </section>
"#
        )
    }

    fn style(&self) -> String {
        CssFragment::new("Trust Signals")
            .rule(".trust-section", &[("padding", "3rem 0")])
            .rule(
                ".trust-grid",
                &[
                    ("display", "grid"),
                    ("grid-template-columns", "repeat(4, 1fr)"),
                    ("gap", "2rem"),
                    ("text-align", "center"),
                ],
            )
            .rule(
                ".trust-badge",
                &[
                    ("display", "flex"),
                    ("flex-direction", "column"),
                    ("align-items", "center"),
                ],
            )
            .rule(
                ".trust-icon",
                &[
                    ("width", "4rem"),
                    ("height", "4rem"),
                    ("border-radius", "9999px"),
                    ("background", "#dcfce7"),
                    ("color", "#16a34a"),
                    ("display", "flex"),
                    ("align-items", "center"),
                    ("justify-content", "center"),
                    ("font-size", "1.25rem"),
                    ("margin-bottom", "0.75rem"),
                ],
            )
            .rule(
                ".trust-badge span",
                &[
                    ("font-size", "0.875rem"),
                    ("font-weight", "600"),
                    ("color", "#374151"),
                ],
            )
            .media(
                768,
                &[(".trust-grid", &[("grid-template-columns", "repeat(2, 1fr)")])],
            )
            .finish()
    }
}

// ============================================================================
// Features
// ============================================================================

/// Feature grid. Entries reuse [`Benefit`] (title and description).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeaturesProps {
    /// Section title
    pub title: String,
    /// Line under the title
    pub subtitle: String,
    /// Feature entries
    pub features: Vec<Benefit>,
}

impl Default for FeaturesProps {
    fn default() -> Self {
        Self {
            title: "Powerful Features".to_string(),
            subtitle: "Everything you need to succeed".to_string(),
            features: vec![
                Benefit::new("Advanced Analytics", "Get detailed insights into your performance"),
                Benefit::new("Team Collaboration", "Work together seamlessly with your team"),
                Benefit::new("Custom Integrations", "Connect with your favorite tools"),
                Benefit::new("Mobile Optimized", "Perfect experience on any device"),
                Benefit::new("Security First", "Enterprise-grade security for your data"),
                Benefit::new("24/7 Support", "Round-the-clock assistance when you need it"),
            ],
        }
    }
}

impl BlockProps for FeaturesProps {
    fn from_properties(p: &Properties) -> Self {
        let d = Self::default();
        Self {
            title: p.text("title").unwrap_or(d.title),
            subtitle: p.text("subtitle").unwrap_or(d.subtitle),
            features: record_list(p, "features", &["title", "description"], Benefit::from_record)
                .unwrap_or(d.features),
        }
    }

    fn markup(&self) -> String {
        let items: String = self
            .features
            .iter()
            .map(|f| {
                format!(
                    "                <div class=\"feature-item\">\n                    <h3>{}</h3>\n                    <p>{}</p>\n                </div>\n",
                    escape::html(&f.title),
                    escape::html(&f.description)
                )
            })
            .collect();

        format!(
            r#"
    <!-- Features Section -->
    <section class="features-section">
        <div class="container">
{heading}            <div class="features-grid">
{items}            </div>
        </div>
    </section>
"#,
            heading = section_heading("features", &self.title, Some(&self.subtitle)),
        )
    }

    fn style(&self) -> String {
        let mut css = CssFragment::new("Features Section");
        css.rule(".features-section", &[("padding", "4rem 0")]);
        heading_rules(&mut css, "features");
        css.rule(
            ".features-grid",
            &[
                ("display", "grid"),
                ("grid-template-columns", "repeat(3, 1fr)"),
                ("gap", "2rem"),
            ],
        )
        .rule(
            ".feature-item h3",
            &[
                ("font-size", "1.25rem"),
                ("font-weight", "600"),
                ("margin-bottom", "0.5rem"),
            ],
        )
        .rule(".feature-item p", &[("color", "#4b5563")])
        .media(
            1024,
            &[(".features-grid", &[("grid-template-columns", "repeat(2, 1fr)")])],
        )
        .media(
            640,
            &[(".features-grid", &[("grid-template-columns", "1fr")])],
        )
        .finish()
    }
}

// ============================================================================
// Team
// ============================================================================

/// One team member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Member {
    /// Full name
    pub name: String,
    /// Job title
    pub role: String,
    /// Portrait URL; initials are shown when blank
    pub image: String,
}

impl Member {
    fn new(name: &str, role: &str) -> Self {
        Self {
            name: name.to_string(),
            role: role.to_string(),
            image: String::new(),
        }
    }

    fn from_record(r: &Record) -> Self {
        Self {
            name: r.field_or("name", "").to_string(),
            role: r.field_or("role", "").to_string(),
            image: r.field_or("image", "").to_string(),
        }
    }

    fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .take(2)
            .flat_map(char::to_uppercase)
            .collect()
    }
}

/// Team member grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamProps {
    /// Section title
    pub title: String,
    /// Line under the title
    pub subtitle: String,
    /// Members, in display order
    pub members: Vec<Member>,
}

impl Default for TeamProps {
    fn default() -> Self {
        Self {
            title: "Meet Our Team".to_string(),
            subtitle: "The talented people behind our success".to_string(),
            members: vec![
                Member::new("John Doe", "CEO & Founder"),
                Member::new("Jane Smith", "CTO"),
                Member::new("Mike Johnson", "Lead Designer"),
                Member::new("Sarah Wilson", "Marketing Director"),
            ],
        }
    }
}

impl BlockProps for TeamProps {
    fn from_properties(p: &Properties) -> Self {
        let d = Self::default();
        Self {
            title: p.text("title").unwrap_or(d.title),
            subtitle: p.text("subtitle").unwrap_or(d.subtitle),
            members: record_list(p, "members", &["name", "role", "image"], Member::from_record)
                .unwrap_or(d.members),
        }
    }

    fn markup(&self) -> String {
        let members: String = self
            .members
            .iter()
            .map(|m| {
                let portrait = if m.image.trim().is_empty() {
                    format!(
                        "<div class=\"team-avatar\">{}</div>",
                        escape::html(&m.initials())
                    )
                } else {
                    format!(
                        "<img class=\"team-avatar\" src=\"{}\" alt=\"{}\">",
                        escape::echo_url(&m.image),
                        escape::html(&m.name)
                    )
                };
                format!(
                    "                <div class=\"team-member\">\n                    {portrait}\n                    <h3>{}</h3>\n                    <p>{}</p>\n                </div>\n",
                    escape::html(&m.name),
                    escape::html(&m.role)
                )
            })
            .collect();

        format!(
            r#"
    <!-- Team Section -->
    <section class="team-section">
        <div class="container">
{heading}            <div class="team-grid">
{members}            </div>
        </div>
    </section>
"#,
            heading = section_heading("team", &self.title, Some(&self.subtitle)),
        )
    }

    fn style(&self) -> String {
        let mut css = CssFragment::new("Team Section");
        css.rule(
            ".team-section",
            &[("padding", "4rem 0"), ("background", "#f9fafb")],
        );
        heading_rules(&mut css, "team");
        css.rule(
            ".team-grid",
            &[
                ("display", "grid"),
                ("grid-template-columns", "repeat(auto-fit, minmax(200px, 1fr))"),
                ("gap", "2rem"),
            ],
        )
        .rule(".team-member", &[("text-align", "center")])
        .rule(
            ".team-avatar",
            &[
                ("width", "8rem"),
                ("height", "8rem"),
                ("margin", "0 auto 1rem"),
                ("border-radius", "9999px"),
                ("background", "#d1d5db"),
                ("color", "#4b5563"),
                ("display", "flex"),
                ("align-items", "center"),
                ("justify-content", "center"),
                ("font-size", "2rem"),
                ("font-weight", "bold"),
                ("object-fit", "cover"),
            ],
        )
        .rule(
            ".team-member h3",
            &[("font-size", "1.25rem"), ("font-weight", "600")],
        )
        .rule(".team-member p", &[("color", "#4b5563")])
        .finish()
    }
}

// ============================================================================
// Testimonials
// ============================================================================

/// One customer quote.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Quote {
    /// Quote text, without quotation marks
    pub quote: String,
    /// Person quoted
    pub author: String,
    /// Author's company
    pub company: String,
}

impl Quote {
    fn new(quote: &str, author: &str, company: &str) -> Self {
        Self {
            quote: quote.to_string(),
            author: author.to_string(),
            company: company.to_string(),
        }
    }

    fn from_record(r: &Record) -> Self {
        Self::new(
            r.field_or("quote", ""),
            r.field_or("author", ""),
            r.field_or("company", ""),
        )
    }
}

/// Customer quotes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TestimonialsProps {
    /// Section title
    pub title: String,
    /// Quotes, in display order
    pub testimonials: Vec<Quote>,
}

impl Default for TestimonialsProps {
    fn default() -> Self {
        Self {
            title: "What Our Customers Say".to_string(),
            testimonials: vec![
                Quote::new(
                    "This product has transformed our business completely.",
                    "John Smith",
                    "Tech Corp",
                ),
                Quote::new(
                    "Outstanding support and amazing features.",
                    "Sarah Johnson",
                    "StartupXYZ",
                ),
                Quote::new(
                    "Best investment we've made this year.",
                    "Mike Brown",
                    "Growth Inc",
                ),
            ],
        }
    }
}

impl BlockProps for TestimonialsProps {
    fn from_properties(p: &Properties) -> Self {
        let d = Self::default();
        Self {
            title: p.text("title").unwrap_or(d.title),
            testimonials: record_list(
                p,
                "testimonials",
                &["quote", "author", "company"],
                Quote::from_record,
            )
            .unwrap_or(d.testimonials),
        }
    }

    fn markup(&self) -> String {
        let quotes: String = self
            .testimonials
            .iter()
            .map(|q| {
                format!(
                    r#"                <figure class="testimonial">
                    <div class="testimonial-stars" aria-hidden="true">&#9733;&#9733;&#9733;&#9733;&#9733;</div>
                    <blockquote>&ldquo;{}&rdquo;</blockquote>
                    <figcaption>
                        <strong>{}</strong>
                        <span>{}</span>
                    </figcaption>
                </figure>
"#,
                    escape::html(&q.quote),
                    escape::html(&q.author),
                    escape::html(&q.company)
                )
            })
            .collect();

        format!(
            r#"
    <!-- Testimonials Section -->
    <section class="testimonials-section">
        <div class="container">
{heading}            <div class="testimonials-grid">
{quotes}            </div>
        </div>
    </section>
"#,
            heading = section_heading("testimonials", &self.title, None),
        )
    }

    fn style(&self) -> String {
        let mut css = CssFragment::new("Testimonials Section");
        css.rule(".testimonials-section", &[("padding", "4rem 0")]);
        heading_rules(&mut css, "testimonials");
        css.rule(
            ".testimonials-grid",
            &[
                ("display", "grid"),
                ("grid-template-columns", "repeat(auto-fit, minmax(280px, 1fr))"),
                ("gap", "2rem"),
            ],
        )
        .rule(
            ".testimonial",
            &[
                ("background", "#f9fafb"),
                ("border-radius", "0.5rem"),
                ("padding", "1.5rem"),
            ],
        )
        .rule(
            ".testimonial-stars",
            &[("color", "#facc15"), ("margin-bottom", "1rem")],
        )
        .rule(
            ".testimonial blockquote",
            &[
                ("font-style", "italic"),
                ("color", "#374151"),
                ("margin-bottom", "1rem"),
            ],
        )
        .rule(
            ".testimonial figcaption span",
            &[
                ("display", "block"),
                ("font-size", "0.875rem"),
                ("color", "#4b5563"),
            ],
        )
        .finish()
    }
}

// ============================================================================
// Stats
// ============================================================================

/// One headline number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Stat {
    /// Figure, as displayed ("10K+")
    pub number: String,
    /// Caption under the figure
    pub label: String,
}

impl Stat {
    fn new(number: &str, label: &str) -> Self {
        Self {
            number: number.to_string(),
            label: label.to_string(),
        }
    }

    fn from_record(r: &Record) -> Self {
        Self::new(r.field_or("number", ""), r.field_or("label", ""))
    }
}

/// Band of headline numbers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsProps {
    /// Figures, left to right
    pub stats: Vec<Stat>,
    /// Band background
    pub background_color: String,
    /// Text color
    pub text_color: String,
}

impl Default for StatsProps {
    fn default() -> Self {
        Self {
            stats: vec![
                Stat::new("10K+", "Happy Customers"),
                Stat::new("99.9%", "Uptime"),
                Stat::new("24/7", "Support"),
                Stat::new("50+", "Countries"),
            ],
            background_color: "#2563eb".to_string(),
            text_color: "#ffffff".to_string(),
        }
    }
}

impl BlockProps for StatsProps {
    fn from_properties(p: &Properties) -> Self {
        let d = Self::default();
        Self {
            stats: record_list(p, "stats", &["number", "label"], Stat::from_record)
                .unwrap_or(d.stats),
            background_color: color(p, "backgroundColor", d.background_color),
            text_color: color(p, "textColor", d.text_color),
        }
    }

    fn markup(&self) -> String {
        let stats: String = self
            .stats
            .iter()
            .map(|s| {
                format!(
                    "                <div class=\"stat-item\">\n                    <div class=\"stat-number\">{}</div>\n                    <div class=\"stat-label\">{}</div>\n                </div>\n",
                    escape::html(&s.number),
                    escape::html(&s.label)
                )
            })
            .collect();

        format!(
            r#"
    <!-- Stats Section -->
    <section class="stats-section">
        <div class="container">
            <div class="stats-grid">
{stats}            </div>
        </div>
    </section>
"#
        )
    }

    fn style(&self) -> String {
        CssFragment::new("Stats Section")
            .rule(
                ".stats-section",
                &[
                    ("background", &self.background_color),
                    ("color", &self.text_color),
                    ("padding", "4rem 0"),
                ],
            )
            .rule(
                ".stats-grid",
                &[
                    ("display", "grid"),
                    ("grid-template-columns", "repeat(4, 1fr)"),
                    ("gap", "2rem"),
                    ("text-align", "center"),
                ],
            )
            .rule(
                ".stat-number",
                &[
                    ("font-size", "2.25rem"),
                    ("font-weight", "bold"),
                    ("margin-bottom", "0.5rem"),
                ],
            )
            .rule(".stat-label", &[("opacity", "0.8")])
            .media(
                768,
                &[(".stats-grid", &[("grid-template-columns", "repeat(2, 1fr)")])],
            )
            .finish()
    }
}

// ============================================================================
// About
// ============================================================================

/// Company introduction with a list of highlights.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AboutProps {
    /// Section title
    pub title: String,
    /// Introductory paragraph
    pub description: String,
    /// Check-marked highlights
    #[serde(serialize_with = "comma_list")]
    pub highlights: Vec<String>,
    /// Side image URL; a placeholder is shown when blank
    pub image: String,
}

impl Default for AboutProps {
    fn default() -> Self {
        Self {
            title: "About Our Company".to_string(),
            description: "We are a forward-thinking company dedicated to providing innovative \
                          solutions that help businesses thrive in the digital age. Our team \
                          combines expertise with passion to deliver exceptional results."
                .to_string(),
            highlights: owned([
                "Innovation at our core",
                "Customer-focused approach",
                "Proven track record",
            ]),
            image: String::new(),
        }
    }
}

impl BlockProps for AboutProps {
    fn from_properties(p: &Properties) -> Self {
        let d = Self::default();
        Self {
            title: p.text("title").unwrap_or(d.title),
            description: p.text("description").unwrap_or(d.description),
            highlights: p.list("highlights").unwrap_or(d.highlights),
            image: p.text("image").unwrap_or(d.image),
        }
    }

    fn markup(&self) -> String {
        let highlights: String = self
            .highlights
            .iter()
            .map(|h| format!("                    <li>{}</li>\n", escape::html(h)))
            .collect();
        let media = if self.image.trim().is_empty() {
            "<div class=\"about-image placeholder\"></div>".to_string()
        } else {
            format!(
                "<img class=\"about-image\" src=\"{}\" alt=\"{}\">",
                escape::echo_url(&self.image),
                escape::html(&self.title)
            )
        };

        format!(
            r#"
    <!-- About Section -->
    <section class="about-section">
        <div class="container about-grid">
            <div class="about-text">
                <h2>{title}</h2>
                <p>{description}</p>
                <ul class="about-highlights">
{highlights}                </ul>
            </div>
            {media}
        </div>
    </section>
"#,
            title = escape::echo_html(&self.title),
            description = escape::echo_html(&self.description),
        )
    }

    fn style(&self) -> String {
        CssFragment::new("About Section")
            .rule(".about-section", &[("padding", "4rem 0")])
            .rule(
                ".about-grid",
                &[
                    ("display", "grid"),
                    ("grid-template-columns", "1fr 1fr"),
                    ("gap", "3rem"),
                    ("align-items", "center"),
                ],
            )
            .rule(
                ".about-text h2",
                &[
                    ("font-size", "2rem"),
                    ("font-weight", "bold"),
                    ("margin-bottom", "1.5rem"),
                ],
            )
            .rule(
                ".about-text p",
                &[
                    ("color", "#4b5563"),
                    ("line-height", "1.7"),
                    ("margin-bottom", "1.5rem"),
                ],
            )
            .rule(".about-highlights", &[("list-style", "none")])
            .rule(
                ".about-highlights li",
                &[("padding", "0.5rem 0"), ("color", "#374151")],
            )
            .rule(
                ".about-highlights li::before",
                &[
                    ("content", "'\\2713'"),
                    ("color", "#22c55e"),
                    ("margin-right", "0.75rem"),
                ],
            )
            .rule(
                ".about-image",
                &[
                    ("width", "100%"),
                    ("aspect-ratio", "1 / 1"),
                    ("border-radius", "0.5rem"),
                    ("object-fit", "cover"),
                ],
            )
            .rule(".about-image.placeholder", &[("background", "#e5e7eb")])
            .media(768, &[(".about-grid", &[("grid-template-columns", "1fr")])])
            .finish()
    }
}
