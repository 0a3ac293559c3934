use std::path::Path;

use crate::config::SiteConfig;
use crate::page::PageAssembler;
use crate::scripts;
use crate::sections;
use crate::template::{TemplateError, raw};

#[derive(Debug)]
pub enum BuildError {
    TemplateError(TemplateError),
}

impl From<TemplateError> for BuildError {
    fn from(err: TemplateError) -> Self {
        BuildError::TemplateError(err)
    }
}

impl std::fmt::Display for BuildError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BuildError::TemplateError(e) => write!(f, "Template error: {}", e),
        }
    }
}

impl std::error::Error for BuildError {}

#[derive(Debug, Clone)]
pub struct ArchiveEntry {
    pub name: String,
    pub contents: String,
}

/// The build output: named text entries under a fixed file-name scheme, so
/// cross-page links resolve by convention. Entries are independent of each
/// other; order is informational only.
#[derive(Debug, Clone, Default)]
pub struct Archive {
    entries: Vec<ArchiveEntry>,
}

impl Archive {
    fn add(&mut self, name: &str, contents: String) {
        self.entries.push(ArchiveEntry {
            name: name.to_string(),
            contents,
        });
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| e.name == name)
            .map(|e| e.contents.as_str())
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.name.as_str())
    }

    pub fn entries(&self) -> &[ArchiveEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn write_to_dir<P: AsRef<Path>>(&self, dir: P) -> std::io::Result<()> {
        std::fs::create_dir_all(&dir)?;
        for entry in &self.entries {
            std::fs::write(dir.as_ref().join(&entry.name), &entry.contents)?;
        }

        Ok(())
    }
}

pub struct SiteBuilder {
    config: SiteConfig,
}

impl SiteBuilder {
    pub fn new(config: SiteConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    pub fn build(&self) -> Result<Archive, BuildError> {
        build_site(&self.config)
    }
}

/// Render every page and asset for this configuration. Pages always present:
/// home, about, contact, privacy, terms, booking, product. The blog pair is
/// added only when the blog section is enabled. A missing optional field
/// never fails the build; it only drops the element that depended on it.
pub fn build_site(config: &SiteConfig) -> Result<Archive, BuildError> {
    let assembler = PageAssembler::new(config)?;
    let templates = assembler.templates();
    let toggles = &config.sections;

    let mut archive = Archive::default();

    let mut home = String::new();
    if toggles.hero {
        home.push_str(&sections::hero(config));
    }
    if toggles.stats {
        home.push_str(&sections::stats(config));
    }
    if toggles.features {
        home.push_str(&sections::features(config));
    }
    if toggles.pricing {
        home.push_str(&sections::pricing(config));
    }
    if toggles.inventory {
        home.push_str(&sections::inventory());
    }
    if toggles.about {
        home.push_str(&sections::about(config));
    }
    if toggles.testimonials {
        home.push_str(&sections::testimonials(config));
    }
    if toggles.faq {
        home.push_str(&sections::faq(config));
    }
    if toggles.cta {
        home.push_str(&sections::cta(config));
    }

    let home_extra = if toggles.inventory {
        scripts::inventory_loader(templates, config)?.unwrap_or_default()
    } else {
        String::new()
    };
    archive.add("index.html", assembler.assemble("Home", &home, &home_extra)?);

    archive.add(
        "about.html",
        assembler.assemble(
            "About",
            &sections::document_page("About", &config.content.about.long),
            "",
        )?,
    );
    archive.add(
        "contact.html",
        assembler.assemble("Contact", &sections::contact_body(config), "")?,
    );
    archive.add(
        "privacy.html",
        assembler.assemble(
            "Privacy",
            &sections::document_page("Privacy", &config.content.legal.privacy),
            "",
        )?,
    );
    archive.add(
        "terms.html",
        assembler.assemble(
            "Terms",
            &sections::document_page("Terms", &config.content.legal.terms),
            "",
        )?,
    );
    archive.add(
        "booking.html",
        assembler.assemble("Book Now", &sections::booking_body(config), "")?,
    );

    let product_extra = scripts::product_loader(templates, config)?.unwrap_or_default();
    archive.add(
        "product.html",
        assembler.assemble("Product Details", &sections::product_body(), &product_extra)?,
    );

    if toggles.blog {
        let blog_extra = scripts::blog_index_loader(templates, config)?.unwrap_or_default();
        archive.add(
            "blog.html",
            assembler.assemble("Blog", &sections::blog_index_body(config), &blog_extra)?,
        );

        let post_extra = scripts::blog_post_loader(templates, config)?.unwrap_or_default();
        archive.add(
            "post.html",
            assembler.assemble("Article", &sections::blog_post_body(), &post_extra)?,
        );
    }

    archive.add("manifest.json", manifest(config));
    archive.add("service-worker.js", raw::SERVICE_WORKER.to_string());

    Ok(archive)
}

fn manifest(config: &SiteConfig) -> String {
    let short_name: String = config
        .pwa
        .short_name
        .clone()
        .unwrap_or_else(|| config.business.name.chars().take(12).collect());
    let icon = config
        .pwa
        .icon
        .clone()
        .or_else(|| config.business.logo_url.clone())
        .unwrap_or_default();

    serde_json::json!({
        "name": config.business.name,
        "short_name": short_name,
        "start_url": "./index.html",
        "display": "standalone",
        "background_color": "#ffffff",
        "theme_color": config.theme.primary,
        "description": config.pwa.description,
        "icons": [{ "src": icon, "sizes": "512x512", "type": "image/png" }],
    })
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_build_contains_every_expected_entry() {
        let config = SiteConfig::default();
        let archive = build_site(&config).unwrap();

        for name in [
            "index.html",
            "about.html",
            "contact.html",
            "privacy.html",
            "terms.html",
            "booking.html",
            "product.html",
            "blog.html",
            "post.html",
            "manifest.json",
            "service-worker.js",
        ] {
            assert!(archive.get(name).is_some(), "missing {name}");
        }

        let index = archive.get("index.html").unwrap();
        assert!(index.contains(&config.content.hero.headline));
    }

    #[test]
    fn building_twice_is_byte_identical() {
        let config = SiteConfig::default();
        let first = build_site(&config).unwrap();
        let second = build_site(&config).unwrap();

        assert_eq!(first.len(), second.len());
        for entry in first.entries() {
            assert_eq!(Some(entry.contents.as_str()), second.get(&entry.name));
        }
    }

    #[test]
    fn disabling_blog_removes_entries_and_every_link() {
        let mut config = SiteConfig::default();
        config.sections.blog = false;
        let archive = build_site(&config).unwrap();

        assert!(archive.get("blog.html").is_none());
        assert!(archive.get("post.html").is_none());
        for entry in archive.entries() {
            if entry.name.ends_with(".html") {
                assert!(
                    !entry.contents.contains("blog.html"),
                    "dead blog link in {}",
                    entry.name
                );
            }
        }
    }

    #[test]
    fn build_survives_missing_optional_fields() {
        let mut config = SiteConfig::default();
        config.business.whatsapp = None;
        config.business.logo_url = None;
        config.business.map_embed = None;
        config.store.feed_url = None;
        config.content.blog.feed_url = None;
        config.content.hero.slides.clear();
        config.content.features.lines.clear();

        let archive = build_site(&config).unwrap();
        let index = archive.get("index.html").unwrap();
        assert!(!index.contains(r#"class="wa-float""#));
    }

    #[test]
    fn manifest_derives_short_name_and_theme_color() {
        let mut config = SiteConfig::default();
        config.business.name = "A Very Long Business Name".into();
        let archive = build_site(&config).unwrap();

        let manifest: serde_json::Value =
            serde_json::from_str(archive.get("manifest.json").unwrap()).unwrap();
        assert_eq!(manifest["short_name"], "A Very Long ");
        assert_eq!(manifest["theme_color"], config.theme.primary.as_str());
        assert_eq!(manifest["icons"][0]["sizes"], "512x512");
    }

    #[test]
    fn service_worker_precaches_fixed_pages() {
        let archive = build_site(&SiteConfig::default()).unwrap();
        let sw = archive.get("service-worker.js").unwrap();
        assert!(sw.contains("./index.html"));
        assert!(sw.contains("./contact.html"));
        assert!(sw.contains("caches.match(e.request)"));
    }

    #[test]
    fn archive_writes_all_entries_to_disk() {
        let dir = tempfile::tempdir().unwrap();
        let archive = build_site(&SiteConfig::default()).unwrap();
        archive.write_to_dir(dir.path()).unwrap();

        for name in archive.names() {
            assert!(dir.path().join(name).is_file(), "missing {name} on disk");
        }
    }
}
