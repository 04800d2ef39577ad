//! Contact form and FAQ blocks.

use serde::Serialize;

use super::{padding, record_list, BlockProps};
use crate::generator::css::{vertical_padding, CssFragment};
use crate::generator::escape;
use crate::models::{Properties, Record};

// ============================================================================
// Contact
// ============================================================================

/// Contact form posting to `admin-post.php`, next to the business details.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactProps {
    /// Section title
    pub title: String,
    /// Postal address
    pub address: String,
    /// Phone number
    pub phone: String,
    /// Contact e-mail
    pub email: String,
    /// Whether the form column is rendered
    pub show_form: bool,
    /// Top padding in pixels
    pub padding_top: i64,
    /// Bottom padding in pixels
    pub padding_bottom: i64,
}

impl Default for ContactProps {
    fn default() -> Self {
        Self {
            title: "Contact Us".to_string(),
            address: "123 Business St, City, State 12345".to_string(),
            phone: "(555) 123-4567".to_string(),
            email: "contact@example.com".to_string(),
            show_form: true,
            padding_top: 60,
            padding_bottom: 60,
        }
    }
}

impl BlockProps for ContactProps {
    fn from_properties(p: &Properties) -> Self {
        let d = Self::default();
        Self {
            title: p.text("title").unwrap_or(d.title),
            address: p.text("address").unwrap_or(d.address),
            phone: p.text("phone").unwrap_or(d.phone),
            email: p.text("email").unwrap_or(d.email),
            show_form: p.flag("showForm").unwrap_or(d.show_form),
            padding_top: padding(p, "paddingTop", d.padding_top),
            padding_bottom: padding(p, "paddingBottom", d.padding_bottom),
        }
    }

    fn markup(&self) -> String {
        let form = if self.show_form {
            r#"                <div class="contact-form">
                    <?php if (isset($_GET['contact']) && $_GET['contact'] === 'sent'): ?>
                    <p class="contact-notice">Thank you, your message has been sent.</p>
                    <?php endif; ?>
                    <form method="post" action="<?php echo esc_url(admin_url('admin-post.php')); ?>">
                        <input type="hidden" name="action" value="contact_form">
                        <?php wp_nonce_field('contact_form', 'contact_nonce'); ?>
                        <input type="text" name="name" placeholder="Your Name" required>
                        <input type="email" name="email" placeholder="Your Email" required>
                        <textarea name="message" placeholder="Your Message" rows="5" required></textarea>
                        <button type="submit">Send Message</button>
                    </form>
                </div>
"#
        } else {
            ""
        };

        format!(
            r#"
    <!-- Contact Section -->
    <section class="contact-section">
        <div class="container">
            <h2>{title}</h2>
            <div class="contact-content">
{form}                <div class="contact-info">
                    <div class="contact-item">
                        <h4>Address</h4>
                        <p>{address}</p>
                    </div>
                    <div class="contact-item">
                        <h4>Phone</h4>
                        <p>{phone}</p>
                    </div>
                    <div class="contact-item">
                        <h4>Email</h4>
                        <p>{email}</p>
                    </div>
                </div>
            </div>
        </div>
    </section>
"#,
            title = escape::echo_html(&self.title),
            address = escape::echo_html(&self.address),
            phone = escape::echo_html(&self.phone),
            email = escape::echo_html(&self.email),
        )
    }

    fn style(&self) -> String {
        let columns = if self.show_form { "1fr 1fr" } else { "1fr" };
        CssFragment::new("Contact Section")
            .rule(
                ".contact-section",
                &[(
                    "padding",
                    &vertical_padding(self.padding_top, self.padding_bottom),
                )],
            )
            .rule(
                ".contact-section h2",
                &[
                    ("text-align", "center"),
                    ("font-size", "2rem"),
                    ("margin-bottom", "3rem"),
                ],
            )
            .rule(
                ".contact-content",
                &[
                    ("display", "grid"),
                    ("grid-template-columns", columns),
                    ("gap", "3rem"),
                ],
            )
            .rule(
                ".contact-form input,\n.contact-form textarea",
                &[
                    ("width", "100%"),
                    ("padding", "0.75rem"),
                    ("border", "1px solid #d1d5db"),
                    ("border-radius", "0.5rem"),
                    ("margin-bottom", "1rem"),
                ],
            )
            .rule(
                ".contact-form button",
                &[
                    ("width", "100%"),
                    ("background", "#2563eb"),
                    ("color", "white"),
                    ("padding", "0.75rem"),
                    ("border", "none"),
                    ("border-radius", "0.5rem"),
                    ("font-weight", "600"),
                    ("cursor", "pointer"),
                ],
            )
            .rule(
                ".contact-notice",
                &[
                    ("background", "#dcfce7"),
                    ("color", "#166534"),
                    ("padding", "0.75rem"),
                    ("border-radius", "0.5rem"),
                    ("margin-bottom", "1rem"),
                ],
            )
            .rule(".contact-item", &[("margin-bottom", "1.5rem")])
            .rule(
                ".contact-item h4",
                &[("font-weight", "600"), ("margin-bottom", "0.5rem")],
            )
            .media(
                768,
                &[(".contact-content", &[("grid-template-columns", "1fr")])],
            )
            .finish()
    }
}

// ============================================================================
// FAQ
// ============================================================================

/// One question and its answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FaqItem {
    /// Question text
    pub question: String,
    /// Answer text
    pub answer: String,
}

impl FaqItem {
    fn new(question: &str, answer: &str) -> Self {
        Self {
            question: question.to_string(),
            answer: answer.to_string(),
        }
    }

    fn from_record(r: &Record) -> Self {
        Self::new(r.field_or("question", ""), r.field_or("answer", ""))
    }
}

/// Question list fed by the `faq_items` ACF field, with static fallbacks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FaqProps {
    /// Section title
    pub title: String,
    /// Fallback items used when the ACF field is empty
    pub items: Vec<FaqItem>,
    /// Top padding in pixels
    pub padding_top: i64,
    /// Bottom padding in pixels
    pub padding_bottom: i64,
}

impl Default for FaqProps {
    fn default() -> Self {
        Self {
            title: "Frequently Asked Questions".to_string(),
            items: vec![
                FaqItem::new(
                    "How do I get started?",
                    "Simply sign up for an account and follow our easy setup wizard.",
                ),
                FaqItem::new(
                    "What payment methods do you accept?",
                    "We accept all major credit cards and PayPal.",
                ),
                FaqItem::new(
                    "Can I cancel my subscription?",
                    "Yes, you can cancel your subscription at any time from your account settings.",
                ),
            ],
            padding_top: 60,
            padding_bottom: 60,
        }
    }
}

impl BlockProps for FaqProps {
    fn from_properties(p: &Properties) -> Self {
        let d = Self::default();
        Self {
            title: p.text("title").unwrap_or(d.title),
            items: record_list(p, "items", &["question", "answer"], FaqItem::from_record)
                .unwrap_or(d.items),
            padding_top: padding(p, "paddingTop", d.padding_top),
            padding_bottom: padding(p, "paddingBottom", d.padding_bottom),
        }
    }

    fn markup(&self) -> String {
        let items: String = self
            .items
            .iter()
            .map(|item| {
                format!(
                    "                <div class=\"faq-item\">\n                    <h3 class=\"faq-question\">{}</h3>\n                    <div class=\"faq-answer\">{}</div>\n                </div>\n",
                    escape::html(&item.question),
                    escape::html(&item.answer)
                )
            })
            .collect();

        format!(
            r#"
    <!-- FAQ Section -->
    <section class="faq-section">
        <div class="container">
            <h2>{title}</h2>
            <div class="faq-list">
                <?php
                $faqs = function_exists('get_field') ? get_field('faq_items') : array();
                if ($faqs):
                    foreach ($faqs as $faq):
                ?>
                <div class="faq-item">
                    <h3 class="faq-question"><?php echo esc_html($faq['question']); ?></h3>
                    <div class="faq-answer"><?php echo wp_kses_post($faq['answer']); ?></div>
                </div>
                <?php
                    endforeach;
                else:
                ?>
{items}                <?php endif; ?>
            </div>
        </div>
    </section>
"#,
            title = escape::echo_html(&self.title),
        )
    }

    fn style(&self) -> String {
        CssFragment::new("FAQ Section")
            .rule(
                ".faq-section",
                &[
                    (
                        "padding",
                        &vertical_padding(self.padding_top, self.padding_bottom),
                    ),
                    ("background", "#f9fafb"),
                ],
            )
            .rule(
                ".faq-section h2",
                &[
                    ("text-align", "center"),
                    ("font-size", "2rem"),
                    ("margin-bottom", "3rem"),
                ],
            )
            .rule(
                ".faq-item",
                &[
                    ("background", "white"),
                    ("border-radius", "0.5rem"),
                    ("padding", "1.5rem"),
                    ("margin-bottom", "1rem"),
                    ("box-shadow", "0 1px 3px rgba(0, 0, 0, 0.1)"),
                ],
            )
            .rule(
                ".faq-question",
                &[
                    ("font-weight", "600"),
                    ("margin-bottom", "0.5rem"),
                    ("cursor", "pointer"),
                ],
            )
            .rule(".faq-answer", &[("color", "#6b7280")])
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn props(value: serde_json::Value) -> Properties {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_contact_form_has_nonce() {
        let markup = ContactProps::default().markup();
        assert!(markup.contains("admin_url('admin-post.php')"));
        assert!(markup.contains("name=\"action\" value=\"contact_form\""));
        assert!(markup.contains("wp_nonce_field('contact_form', 'contact_nonce')"));
    }

    #[test]
    fn test_contact_without_form() {
        let contact = ContactProps::from_properties(&props(json!({"showForm": "no"})));
        assert!(!contact.markup().contains("<form"));
        assert!(contact.style().contains("grid-template-columns: 1fr;"));
    }

    #[test]
    fn test_contact_details_are_php_safe() {
        let contact = ContactProps::from_properties(&props(json!({"phone": "555'); phpinfo(); //"})));
        assert!(contact
            .markup()
            .contains(r"esc_html('555\'); phpinfo(); //')"));
    }

    #[test]
    fn test_faq_static_items() {
        let faq = FaqProps::from_properties(&Properties::new());
        let markup = faq.markup();
        assert!(markup.contains("get_field('faq_items')"));
        assert!(markup.contains("Can I cancel my subscription?"));
        assert_eq!(markup.matches("<div class=\"faq-item\">").count(), 4);

        let faq = FaqProps::from_properties(&props(json!({
            "items": [{"question": "Why <b>?", "answer": "Because"}]
        })));
        let markup = faq.markup();
        assert!(markup.contains("Why &lt;b&gt;?"));
        assert!(!markup.contains("How do I get started?"));
    }
}
