use crate::shared::ui::{escape, ThemeBasePath};

/// Anchor whose target is resolved against the mounted theme's base path.
#[derive(Debug, Clone)]
pub struct ThemeLink {
    href: String,
    label: String,
    class: Option<String>,
    current: bool,
}

impl ThemeLink {
    pub fn new(base: &ThemeBasePath, to: &str, label: &str) -> Self {
        Self {
            href: base.join(to),
            label: label.to_string(),
            class: None,
            current: false,
        }
    }

    pub fn class(mut self, class: &str) -> Self {
        self.class = Some(class.to_string());
        self
    }

    pub fn current(mut self, current: bool) -> Self {
        self.current = current;
        self
    }

    pub fn href(&self) -> &str {
        &self.href
    }

    pub fn render(&self) -> String {
        let mut html = format!("<a href=\"{}\"", escape(&self.href));
        if let Some(class) = &self.class {
            html.push_str(&format!(" class=\"{}\"", escape(class)));
        }
        if self.current {
            html.push_str(" aria-current=\"page\"");
        }
        html.push('>');
        html.push_str(&escape(&self.label));
        html.push_str("</a>");
        html
    }
}
