use tera::{Context, Tera};

#[derive(Debug)]
pub enum TemplateError {
    TeraError(tera::Error),
}

impl From<tera::Error> for TemplateError {
    fn from(err: tera::Error) -> Self {
        TemplateError::TeraError(err)
    }
}

impl std::fmt::Display for TemplateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TemplateError::TeraError(e) => write!(f, "Template error: {}", e),
        }
    }
}

impl std::error::Error for TemplateError {}

/// The document shell, theme stylesheet and parameterized client scripts,
/// compiled into the binary. Only `.html` templates are auto-escaped; the
/// stylesheet and scripts receive raw values.
pub struct Templates {
    tera: Tera,
}

impl Templates {
    pub fn new() -> Result<Self, TemplateError> {
        let mut tera = Tera::default();
        tera.add_raw_templates(vec![
            ("shell.html", include_str!("../templates/shell.html")),
            ("style.css", include_str!("../templates/style.css")),
            ("cart.js", include_str!("../templates/cart.js")),
            ("inventory.js", include_str!("../templates/inventory.js")),
            ("product.js", include_str!("../templates/product.js")),
            ("blog-index.js", include_str!("../templates/blog-index.js")),
            ("blog-post.js", include_str!("../templates/blog-post.js")),
            ("translate.js", include_str!("../templates/translate.js")),
        ])?;

        Ok(Self { tera })
    }

    pub fn render(&self, template: &str, context: &Context) -> Result<String, TemplateError> {
        Ok(self.tera.render(template, context)?)
    }
}

/// Scripts that take no parameters ship as plain embedded text.
pub mod raw {
    pub const CSV_HELPERS: &str = include_str!("../templates/csv.js");
    pub const REVEAL: &str = include_str!("../templates/reveal.js");
    pub const CAROUSEL: &str = include_str!("../templates/carousel.js");
    pub const SW_REGISTER: &str = include_str!("../templates/sw-register.js");
    pub const SERVICE_WORKER: &str = include_str!("../templates/service-worker.js");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_embedded_templates_compile() {
        assert!(Templates::new().is_ok());
    }

    #[test]
    fn js_templates_are_not_escaped() {
        let templates = Templates::new().unwrap();
        let mut context = Context::new();
        context.insert("feed_url", "https://example.com/pub?output=csv&x=1");
        let js = templates.render("translate.js", &context).unwrap();
        assert!(js.contains("pub?output=csv&x=1"));
    }
}
