//! Small builder for stylesheet fragments.
//!
//! Produces the layout used throughout `style.css`: a labelled comment,
//! rules separated by blank lines, two-space indented declarations.

use super::escape;

/// A list of `property: value` declarations.
pub type Declarations<'a> = &'a [(&'a str, &'a str)];

/// Stylesheet fragment under construction.
#[derive(Debug)]
pub struct CssFragment {
    out: String,
    empty: bool,
}

impl CssFragment {
    /// Starts a fragment introduced by `/* label */`.
    pub fn new(label: &str) -> Self {
        Self {
            out: format!("\n/* {} */\n", escape::css_comment(label)),
            empty: true,
        }
    }

    /// Appends a rule.
    pub fn rule(&mut self, selector: &str, declarations: Declarations<'_>) -> &mut Self {
        self.separate();
        write_rule(&mut self.out, selector, declarations, "");
        self
    }

    /// Appends a `@media (max-width: …px)` block holding `rules`.
    pub fn media(&mut self, max_width: u32, rules: &[(&str, Declarations<'_>)]) -> &mut Self {
        self.separate();
        self.out
            .push_str(&format!("@media (max-width: {max_width}px) {{\n"));
        for (idx, (selector, declarations)) in rules.iter().enumerate() {
            if idx > 0 {
                self.out.push('\n');
            }
            write_rule(&mut self.out, selector, declarations, "  ");
        }
        self.out.push_str("}\n");
        self
    }

    /// Returns the finished fragment.
    pub fn finish(&mut self) -> String {
        std::mem::take(&mut self.out)
    }

    fn separate(&mut self) {
        if !self.empty {
            self.out.push('\n');
        }
        self.empty = false;
    }
}

fn write_rule(out: &mut String, selector: &str, declarations: Declarations<'_>, indent: &str) {
    out.push_str(&format!("{indent}{selector} {{\n"));
    for (property, value) in declarations {
        out.push_str(&format!("{indent}  {property}: {value};\n"));
    }
    out.push_str(&format!("{indent}}}\n"));
}

/// `padding: <top>px 0 <bottom>px 0`
pub fn vertical_padding(top: i64, bottom: i64) -> String {
    format!("{top}px 0 {bottom}px 0")
}
