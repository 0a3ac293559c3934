use tera::Context;

use crate::config::SiteConfig;
use crate::scripts;
use crate::sections;
use crate::template::{TemplateError, Templates};
use crate::theme::{self, ThemeTokens};

/// Wraps page bodies with the shared document shell: metadata, structured
/// data, fonts, theme CSS, nav, footer, floating widgets and behavior
/// scripts. Everything shared is resolved once in `new`, so assembling the
/// same `(title, body, extra_js)` always produces the same bytes.
pub struct PageAssembler {
    templates: Templates,
    business_name: String,
    meta_description: String,
    keywords: String,
    google_verification: Option<String>,
    share_image: Option<String>,
    analytics_id: Option<String>,
    theme_color: String,
    apple_icon: String,
    schema: String,
    fonts_href: String,
    css: String,
    nav: String,
    footer: String,
    widgets: String,
    shared_scripts: String,
}

impl PageAssembler {
    pub fn new(config: &SiteConfig) -> Result<Self, TemplateError> {
        let templates = Templates::new()?;
        let tokens = theme::resolve_theme(&config.theme);
        let css = render_stylesheet(&templates, &tokens)?;

        let mut widgets = String::new();
        if let Some(widget) = sections::whatsapp_widget(config) {
            widgets.push_str(&widget);
        }
        widgets.push_str(&scripts::cart_system(&templates, config)?);

        let mut shared_scripts = String::new();
        shared_scripts.push_str(&scripts::csv_helpers());
        shared_scripts.push_str(&scripts::reveal());
        if let Some(switch) = scripts::language_switch(&templates, config)? {
            shared_scripts.push_str(&switch);
        }
        shared_scripts.push_str(&scripts::service_worker_registration());

        let apple_icon = config
            .pwa
            .icon
            .clone()
            .or_else(|| config.business.logo_url.clone())
            .unwrap_or_default();

        Ok(Self {
            business_name: config.business.name.clone(),
            meta_description: config.seo.description.clone(),
            keywords: config.seo.keywords.clone(),
            google_verification: config.seo.google_verification.clone(),
            share_image: config.seo.share_image.clone(),
            analytics_id: config.seo.analytics_id.clone(),
            theme_color: config.theme.primary.clone(),
            apple_icon,
            schema: schema_json(config),
            fonts_href: fonts_href(&tokens),
            css,
            nav: sections::navigation(config),
            footer: sections::footer(config),
            widgets,
            shared_scripts,
            templates,
        })
    }

    pub fn assemble(
        &self,
        title: &str,
        body: &str,
        extra_js: &str,
    ) -> Result<String, TemplateError> {
        let mut context = Context::new();
        context.insert("title", title);
        context.insert("business_name", &self.business_name);
        context.insert("meta_description", &self.meta_description);
        context.insert("keywords", &self.keywords);
        context.insert("google_verification", &self.google_verification);
        context.insert("share_image", &self.share_image);
        context.insert("analytics_id", &self.analytics_id);
        context.insert("theme_color", &self.theme_color);
        context.insert("apple_icon", &self.apple_icon);
        context.insert("schema", &self.schema);
        context.insert("fonts_href", &self.fonts_href);
        context.insert("css", &self.css);
        context.insert("nav", &self.nav);
        context.insert("content", body);
        context.insert("footer", &self.footer);
        context.insert("widgets", &self.widgets);
        context.insert("scripts", &self.shared_scripts);
        context.insert("extra_js", extra_js);

        self.templates.render("shell.html", &context)
    }

    pub fn templates(&self) -> &Templates {
        &self.templates
    }
}

fn render_stylesheet(templates: &Templates, tokens: &ThemeTokens) -> Result<String, TemplateError> {
    let mut context = Context::new();
    context.insert("primary", &tokens.primary);
    context.insert("accent", &tokens.accent);
    context.insert("background", &tokens.background);
    context.insert("text", &tokens.text);
    context.insert("card", &tokens.card);
    context.insert("nav", &tokens.nav);
    context.insert("radius", &tokens.radius);
    context.insert("heading_font", &tokens.heading_font);
    context.insert("body_font", &tokens.body_font);
    context.insert("animation", tokens.animation_css);

    templates.render("style.css", &context)
}

/// LocalBusiness structured data derived from the business identity.
fn schema_json(config: &SiteConfig) -> String {
    let business = &config.business;
    let image = business
        .logo_url
        .clone()
        .or_else(|| config.content.hero.slides.first().cloned())
        .unwrap_or_default();

    serde_json::json!({
        "@context": "https://schema.org",
        "@type": "LocalBusiness",
        "name": business.name,
        "image": image,
        "telephone": business.phone,
        "email": business.email,
        "areaServed": config.seo.area,
        "address": { "@type": "PostalAddress", "streetAddress": business.address },
        "url": business.url,
        "description": config.seo.description,
    })
    .to_string()
}

fn fonts_href(tokens: &ThemeTokens) -> String {
    format!(
        "https://fonts.googleapis.com/css2?family={}:wght@400;700;900&family={}:wght@300;400;600&display=swap",
        tokens.heading_font.replace(' ', "+"),
        tokens.body_font.replace(' ', "+"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;

    #[test]
    fn same_inputs_produce_identical_documents() {
        let config = SiteConfig::default();
        let assembler = PageAssembler::new(&config).unwrap();
        let first = assembler.assemble("Home", "<p>body</p>", "").unwrap();
        let second = assembler.assemble("Home", "<p>body</p>", "").unwrap();
        assert_eq!(first, second);

        // a fresh assembler over the same config agrees byte for byte
        let other = PageAssembler::new(&config).unwrap();
        assert_eq!(first, other.assemble("Home", "<p>body</p>", "").unwrap());
    }

    #[test]
    fn verification_meta_only_when_configured() {
        let mut config = SiteConfig::default();
        let without = PageAssembler::new(&config)
            .unwrap()
            .assemble("Home", "", "")
            .unwrap();
        assert!(!without.contains("google-site-verification"));

        config.seo.google_verification = Some("tok-123".into());
        let with = PageAssembler::new(&config)
            .unwrap()
            .assemble("Home", "", "")
            .unwrap();
        assert!(with.contains(r#"<meta name="google-site-verification" content="tok-123">"#));
    }

    #[test]
    fn fonts_link_joins_names_with_plus() {
        let mut config = SiteConfig::default();
        config.theme.heading_font = "Space Grotesk".into();
        let page = PageAssembler::new(&config)
            .unwrap()
            .assemble("Home", "", "")
            .unwrap();
        assert!(page.contains("family=Space+Grotesk"));
    }

    #[test]
    fn structured_data_names_the_business() {
        let config = SiteConfig::default();
        let schema = schema_json(&config);
        let parsed: serde_json::Value = serde_json::from_str(&schema).unwrap();
        assert_eq!(parsed["@type"], "LocalBusiness");
        assert_eq!(parsed["name"], config.business.name.as_str());
        // no logo configured, so the first hero slide stands in
        assert_eq!(parsed["image"], config.content.hero.slides[0].as_str());
    }

    #[test]
    fn page_title_pairs_page_and_business() {
        let config = SiteConfig::default();
        let page = PageAssembler::new(&config)
            .unwrap()
            .assemble("Contact", "", "")
            .unwrap();
        assert!(page.contains("<title>Contact | StopWebRent.com</title>"));
    }
}
