use std::{fmt, path::Path};

use serde::{Deserialize, Serialize};

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parsing(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "IO error: {}", e),
            ConfigError::Parsing(e) => write!(f, "TOML parse error: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(value: std::io::Error) -> Self {
        ConfigError::Io(value)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(value: toml::de::Error) -> Self {
        ConfigError::Parsing(value)
    }
}

/// Everything the generator consumes, as one flat value. Immutable during a
/// build; every field has a default so an empty file still produces a
/// complete site.
#[derive(Deserialize, Serialize, Debug, Clone, Default)]
#[serde(default)]
pub struct SiteConfig {
    pub business: BusinessConfig,
    pub seo: SeoConfig,
    pub theme: ThemeConfig,
    pub sections: SectionToggles,
    pub content: ContentConfig,
    pub store: StoreConfig,
    pub pwa: PwaConfig,
    pub social: SocialConfig,
    pub translations: TranslationConfig,
}

impl SiteConfig {
    pub fn read<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let data = std::fs::read_to_string(path)?;
        let config: SiteConfig = toml::from_str(&data)?;

        Ok(config)
    }
}

#[derive(Deserialize, Serialize, Debug, Clone)]
#[serde(default)]
pub struct BusinessConfig {
    pub name: String,
    pub tagline: String,
    pub phone: String,
    pub email: String,
    /// Multi-line postal address, newline separated.
    pub address: String,
    pub url: String,
    pub logo_url: Option<String>,
    /// WhatsApp number. Connector characters are stripped before it lands in
    /// any link.
    pub whatsapp: Option<String>,
    /// Raw map embed markup (iframe), inserted as-is on the contact page.
    pub map_embed: Option<String>,
}

impl Default for BusinessConfig {
    fn default() -> Self {
        Self {
            name: "StopWebRent.com".into(),
            tagline: "Stop Renting. Start Owning.".into(),
            phone: "966572562151".into(),
            email: "hello@example.com".into(),
            address: "12 Harbor Lane\nSpringfield".into(),
            url: "https://www.stopwebrent.com".into(),
            logo_url: None,
            whatsapp: Some("966572562151".into()),
            map_embed: None,
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone)]
#[serde(default)]
pub struct SeoConfig {
    pub description: String,
    /// Service area fed into the structured-data block.
    pub area: String,
    pub keywords: String,
    pub google_verification: Option<String>,
    pub analytics_id: Option<String>,
    /// Social share (og:image) URL.
    pub share_image: Option<String>,
}

impl Default for SeoConfig {
    fn default() -> Self {
        Self {
            description: "Stop paying monthly fees for your website. A static site with $0 hosting costs: pay once, own your code forever.".into(),
            area: "Global / Online".into(),
            keywords: "web design, no monthly fees, one time payment website".into(),
            google_verification: None,
            analytics_id: None,
            share_image: None,
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone)]
#[serde(default)]
pub struct ThemeConfig {
    /// Base theme name, resolved against the eight known themes; anything
    /// else falls back to the light default.
    pub base: String,
    pub primary: String,
    pub accent: String,
    pub heading_font: String,
    pub body_font: String,
    /// Corner radius token, e.g. "0px", "12px", "24px".
    pub radius: String,
    /// Scroll-reveal style: "fade-up", "zoom-in", "slide-right" or "none".
    pub animation: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            base: "clean-corporate".into(),
            primary: "#0F172A".into(),
            accent: "#EF4444".into(),
            heading_font: "Montserrat".into(),
            body_font: "Inter".into(),
            radius: "12px".into(),
            animation: "fade-up".into(),
        }
    }
}

/// Per-section switches. A disabled section disappears from the page body
/// and from every navigation link set.
#[derive(Deserialize, Serialize, Debug, Clone)]
#[serde(default)]
pub struct SectionToggles {
    pub hero: bool,
    pub stats: bool,
    pub features: bool,
    pub pricing: bool,
    pub inventory: bool,
    pub blog: bool,
    pub about: bool,
    pub testimonials: bool,
    pub faq: bool,
    pub cta: bool,
    pub booking: bool,
}

impl Default for SectionToggles {
    fn default() -> Self {
        Self {
            hero: true,
            stats: true,
            features: true,
            pricing: true,
            inventory: true,
            blog: true,
            about: true,
            testimonials: true,
            faq: true,
            cta: true,
            booking: true,
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, Default)]
#[serde(default)]
pub struct ContentConfig {
    pub hero: HeroContent,
    pub stats: StatsContent,
    pub features: FeaturesContent,
    pub about: AboutContent,
    pub pricing: PricingContent,
    pub testimonials: TestimonialsContent,
    pub faq: FaqContent,
    pub legal: LegalContent,
    pub booking: BookingContent,
    pub blog: BlogContent,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
#[serde(default)]
pub struct HeroContent {
    pub headline: String,
    pub subtext: String,
    /// Background slide image URLs; the carousel renders up to three.
    pub slides: Vec<String>,
}

impl Default for HeroContent {
    fn default() -> Self {
        Self {
            headline: "Stop Paying Rent for Your Website.".into(),
            subtext: "A site that loads in a blink and runs on $0 monthly fees. Pay once. Own it forever.".into(),
            slides: vec![
                "https://images.unsplash.com/photo-1460925895917-afdab827c52f?q=80&w=1600".into(),
                "https://images.unsplash.com/photo-1551288049-bebda4e38f71?q=80&w=1600".into(),
                "https://images.unsplash.com/photo-1526374965328-7f61d4dc18c5?q=80&w=1600".into(),
            ],
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct Stat {
    pub value: String,
    pub label: String,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
#[serde(default)]
pub struct StatsContent {
    pub entries: Vec<Stat>,
}

impl Default for StatsContent {
    fn default() -> Self {
        Self {
            entries: vec![
                Stat { value: "0.1s".into(), label: "Load Speed".into() },
                Stat { value: "$0".into(), label: "Monthly Fees".into() },
                Stat { value: "100%".into(), label: "Ownership".into() },
            ],
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone)]
#[serde(default)]
pub struct FeaturesContent {
    pub title: String,
    /// One feature per line: `icon | title | description`.
    pub lines: String,
}

impl Default for FeaturesContent {
    fn default() -> Self {
        Self {
            title: "Why It Works".into(),
            lines: "\
bolt | Performance | **Instant loading**. While rented platforms take seconds, a static page arrives in one round trip.
wallet | Economics | **$0 monthly fees**. No hosting subscription to keep alive.
table | Editing | **Spreadsheet CMS**. Update prices and photos from a simple sheet on your phone.
shield | Security | **No database**. Nothing to inject, nothing to hack.
star | Conversion | **One-tap chat**. Visitors reach you directly on WhatsApp.
heart | Ownership | **Your code, yours**. Download the archive and host it anywhere."
                .into(),
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone)]
#[serde(default)]
pub struct AboutContent {
    pub title: String,
    /// Short copy for the home-page section.
    pub short: String,
    /// Long copy for the dedicated about page.
    pub long: String,
    pub image: String,
}

impl Default for AboutContent {
    fn default() -> Self {
        Self {
            title: "Control Your Site from a Spreadsheet".into(),
            short: "No dashboard. No plugins to update. Open your sheet, change a cell, and watch the site update in seconds.".into(),
            long: "**The Digital Landlord Trap**\nMost owners don't realize they are locked into a rental cycle: monthly platform fees, plugin subscriptions, and hosting bills that never end.\n* You pay every month, forever\n* You never own the result\nWe build the site once, hand over the files, and you host them wherever you like.".into(),
            image: "https://images.unsplash.com/photo-1543286386-713df548e9cc?q=80&w=1600".into(),
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone)]
#[serde(default)]
pub struct PricingContent {
    pub setup_price: String,
    pub monthly_price: String,
    pub competitor: String,
    pub competitor_monthly: String,
    /// Operator-entered savings figure, substituted verbatim. Never computed.
    pub savings: String,
}

impl Default for PricingContent {
    fn default() -> Self {
        Self {
            setup_price: "$199".into(),
            monthly_price: "$0".into(),
            competitor: "Wix (Core Plan)".into(),
            competitor_monthly: "$29/mo".into(),
            savings: "$1,466".into(),
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone)]
#[serde(default)]
pub struct TestimonialsContent {
    /// One testimonial per line: `author | quote`.
    pub lines: String,
}

impl Default for TestimonialsContent {
    fn default() -> Self {
        Self {
            lines: "\
Rajesh Gupta, HVAC Business Owner | I was paying $35 a month for three years. One one-time fee later I finally own my site.
Sarah Jenkins, Cafe Owner | Updating my menu used to be a nightmare. Now I open a sheet on my phone, change the price, done.
David Miller, Financial Consultant | My old site took 4 seconds to load. The new one is instant and my ranking jumped within a month."
                .into(),
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone)]
#[serde(default)]
pub struct FaqContent {
    /// One entry per line: `question ? answer`.
    pub lines: String,
}

impl Default for FaqContent {
    fn default() -> Self {
        Self {
            lines: "\
Do I really pay $0 for hosting? ? Yes. Static pages sit comfortably inside the free tier of any CDN host.
What about my domain name? ? You pay the registrar directly, usually around $15 a year. We do not mark that up.
Can I add a blog later? ? Yes. Flip the blog section on and connect a sheet.
Is it secure? ? There is no database to hack, so common injection attacks have nothing to attack."
                .into(),
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone)]
#[serde(default)]
pub struct LegalContent {
    pub privacy: String,
    pub terms: String,
}

impl Default for LegalContent {
    fn default() -> Self {
        Self {
            privacy: "**1. Introduction**\nWe treat data privacy as an architectural feature, not a compliance checkbox. The site stores nothing about its visitors.".into(),
            terms: "**1. Service Agreement**\nBy engaging us for web development services you agree to these terms. The deliverable is a set of static files; once handed over, they are yours.".into(),
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone)]
#[serde(default)]
pub struct BookingContent {
    pub title: String,
    pub subtext: String,
    /// Raw scheduling-widget embed markup, inserted as-is.
    pub embed: String,
}

impl Default for BookingContent {
    fn default() -> Self {
        Self {
            title: "Book an Appointment".into(),
            subtext: "Select a time slot that works for you.".into(),
            embed: "<div class=\"calendly-inline-widget\" data-url=\"https://calendly.com/acme-demo/30min\" style=\"min-width:320px;height:630px;\"></div>\n<script type=\"text/javascript\" src=\"https://assets.calendly.com/assets/external/widget.js\" async></script>".into(),
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone)]
#[serde(default)]
pub struct BlogContent {
    pub title: String,
    pub subtext: String,
    /// Published CSV feed driving the blog index and post pages.
    pub feed_url: Option<String>,
}

impl Default for BlogContent {
    fn default() -> Self {
        Self {
            title: "Latest Insights".into(),
            subtext: "Thoughts on technology, business, and freedom.".into(),
            feed_url: None,
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone)]
#[serde(default)]
pub struct StoreConfig {
    /// Published CSV feed driving the inventory grid and product page.
    pub feed_url: Option<String>,
    /// Shown when a feed row carries no image of its own.
    pub fallback_image: String,
    pub paypal_link: Option<String>,
    pub upi_id: Option<String>,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            feed_url: None,
            fallback_image: "https://images.unsplash.com/photo-1460925895917-afdab827c52f?q=80&w=800".into(),
            paypal_link: None,
            upi_id: None,
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone)]
#[serde(default)]
pub struct PwaConfig {
    /// App short name; defaults to the first 12 characters of the business
    /// name when unset.
    pub short_name: Option<String>,
    pub description: String,
    /// 512x512 PNG icon URL; falls back to the logo.
    pub icon: Option<String>,
}

impl Default for PwaConfig {
    fn default() -> Self {
        Self {
            short_name: None,
            description: "Official App".into(),
            icon: None,
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, Default)]
#[serde(default)]
pub struct SocialConfig {
    pub facebook: Option<String>,
    pub instagram: Option<String>,
    pub twitter: Option<String>,
    pub linkedin: Option<String>,
    pub youtube: Option<String>,
}

#[derive(Deserialize, Serialize, Debug, Clone, Default)]
#[serde(default)]
pub struct TranslationConfig {
    /// Optional CSV feed of element-id to translated-text pairs; enables the
    /// language switch in the nav.
    pub feed_url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_yields_complete_defaults() {
        let config: SiteConfig = toml::from_str("").unwrap();
        assert_eq!(config.business.name, "StopWebRent.com");
        assert!(config.sections.blog);
        assert_eq!(config.content.stats.entries.len(), 3);
        assert!(config.store.feed_url.is_none());
    }

    #[test]
    fn partial_toml_keeps_unrelated_defaults() {
        let config: SiteConfig = toml::from_str(
            "[business]\nname = \"Acme Dental\"\n\n[sections]\nblog = false\n",
        )
        .unwrap();
        assert_eq!(config.business.name, "Acme Dental");
        assert!(!config.sections.blog);
        assert!(config.sections.hero);
        assert_eq!(config.theme.radius, "12px");
    }
}
