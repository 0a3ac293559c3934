//! One renderer per page section. Each is a pure function from the
//! configuration to an HTML fragment; the assembler decides which fragments
//! a page gets. Operator text goes through `html_escape`, embed fields
//! (booking widget, map iframe) are inserted as-is.

use crate::config::SiteConfig;
use crate::content::{self, icon_svg};
use crate::scripts;
use crate::text;

fn esc(text: &str) -> String {
    html_escape::encode_text(text).into_owned()
}

fn attr(text: &str) -> String {
    html_escape::encode_quoted_attribute(text).into_owned()
}

/// Reduce a phone number to its digits before it lands in a `tel:` or
/// `wa.me` link. "+1 (234)-567" becomes "1234567".
pub fn contact_digits(number: &str) -> String {
    number.chars().filter(|c| c.is_ascii_digit()).collect()
}

pub fn navigation(config: &SiteConfig) -> String {
    let business = &config.business;
    let logo = match &business.logo_url {
        Some(url) => format!(
            r#"<img src="{}" height="40" alt="{} Logo">"#,
            attr(url),
            attr(&business.name)
        ),
        None => format!(
            r#"<span style="font-weight:900; font-size:1.5rem; color:var(--p)">{}</span>"#,
            esc(&business.name)
        ),
    };

    let mut links = String::new();
    links.push_str(r#"<a href="index.html" onclick="toggleMenu()">Home</a>"#);
    if config.sections.features {
        links.push_str(r#"<a href="index.html#features" onclick="toggleMenu()">Features</a>"#);
    }
    if config.sections.pricing {
        links.push_str(r#"<a href="index.html#pricing" onclick="toggleMenu()">Savings</a>"#);
    }
    if config.sections.inventory {
        links.push_str(r#"<a href="index.html#inventory" onclick="toggleMenu()">Store</a>"#);
    }
    if config.sections.blog {
        links.push_str(r#"<a href="blog.html" onclick="toggleMenu()">Blog</a>"#);
    }
    if config.sections.booking {
        links.push_str(r#"<a href="booking.html" onclick="toggleMenu()">Book Now</a>"#);
    }
    if config.translations.feed_url.is_some() {
        links.push_str(r##"<a href="#" onclick="toggleLang()" title="Switch Language">&#127760;</a>"##);
    }
    links.push_str(r#"<a href="contact.html" onclick="toggleMenu()">Contact</a>"#);
    links.push_str(&format!(
        r#"<a href="tel:{}" class="btn-accent" style="padding:0.6rem 1.5rem; margin-left:1.5rem; margin-bottom:0; border-radius:50px; color:white !important; width:auto; text-align:center; display:inline-block;">Call Now</a>"#,
        contact_digits(&business.phone)
    ));

    format!(
        r#"<nav><div class="container nav-flex">
    <a href="index.html" style="text-decoration:none">{logo}</a>
    <div class="mobile-menu" onclick="document.querySelector('.nav-links').classList.toggle('active')">&#9776;</div>
    <div class="nav-links">{links}</div>
</div></nav>
<script>function toggleMenu() {{ document.querySelector('.nav-links').classList.remove('active'); }}</script>"#
    )
}

pub fn footer(config: &SiteConfig) -> String {
    let mut icons = String::new();
    if let Some(url) = &config.social.facebook {
        icons.push_str(&social_anchor(url, "Facebook", FACEBOOK_ICON));
    }
    if let Some(url) = &config.social.instagram {
        icons.push_str(&social_anchor(url, "Instagram", INSTAGRAM_ICON));
    }
    if let Some(url) = &config.social.twitter {
        icons.push_str(&social_anchor(url, "X (Twitter)", TWITTER_ICON));
    }
    if let Some(url) = &config.social.linkedin {
        icons.push_str(&social_anchor(url, "LinkedIn", LINKEDIN_ICON));
    }
    if let Some(url) = &config.social.youtube {
        icons.push_str(&social_anchor(url, "YouTube", YOUTUBE_ICON));
    }

    let mut quick_links = String::from(r#"<a href="index.html">Home</a>"#);
    if config.sections.blog {
        quick_links.push_str(r#"<a href="blog.html">Blog</a>"#);
    }
    if config.sections.booking {
        quick_links.push_str(r#"<a href="booking.html">Book Now</a>"#);
    }

    let address = esc(&config.business.address).replace('\n', "<br>");
    let name = esc(&config.business.name);

    format!(
        r#"<footer><div class="container">
    <div class="footer-grid">
        <div>
            <h3 style="color:white; margin-bottom:1.5rem;">{name}</h3>
            <p style="opacity:0.8; font-size:0.9rem;">{address}</p>
            <div style="margin-top:1.5rem; display:flex; gap:1.2rem;">{icons}</div>
        </div>
        <div>
            <h4 style="color:white; font-size:0.9rem; text-transform:uppercase;">Links</h4>
            {quick_links}
        </div>
        <div>
            <h4 style="color:white; font-size:0.9rem; text-transform:uppercase;">Legal</h4>
            <a href="privacy.html">Privacy</a><a href="terms.html">Terms</a>
        </div>
    </div>
    <div style="border-top:1px solid rgba(255,255,255,0.1); margin-top:3rem; padding-top:2rem; text-align:center; opacity:0.4; font-size:0.8rem;">
        &copy; {name}. All rights reserved.
    </div>
</div></footer>"#
    )
}

fn social_anchor(url: &str, label: &str, svg: &str) -> String {
    format!(
        r#"<a href="{}" target="_blank" aria-label="{}">{}</a>"#,
        attr(url),
        label,
        svg
    )
}

pub fn hero(config: &SiteConfig) -> String {
    let hero = &config.content.hero;
    let mut slides = String::new();
    let mut slide_count = 0;
    for url in hero.slides.iter().filter(|u| !u.trim().is_empty()).take(3) {
        let class = if slide_count == 0 {
            "carousel-slide active"
        } else {
            "carousel-slide"
        };
        slides.push_str(&format!(
            r#"<div class="{}" style="background-image: url('{}')"></div>"#,
            class,
            attr(url)
        ));
        slide_count += 1;
    }

    let primary_cta = if config.sections.inventory {
        r##"<a href="#inventory" class="btn btn-accent">Explore Now</a>"##
    } else {
        r#"<a href="contact.html" class="btn btn-accent">Get Started</a>"#
    };

    let rotation = if slide_count > 0 {
        scripts::carousel()
    } else {
        String::new()
    };

    format!(
        r#"<section class="hero">
    <div class="hero-overlay"></div>
    {slides}
    <div class="container hero-content">
        <h1>{headline}</h1>
        <p>{subtext}</p>
        <div style="display:flex; gap:1rem; justify-content:center; flex-wrap:wrap;">
            {primary_cta}
            <a href="contact.html" class="btn" style="background:rgba(255,255,255,0.2); backdrop-filter:blur(10px); color:white;">Contact Us</a>
        </div>
    </div>
</section>
{rotation}"#,
        headline = esc(&hero.headline),
        subtext = esc(&hero.subtext),
    )
}

pub fn stats(config: &SiteConfig) -> String {
    let cells: String = config
        .content
        .stats
        .entries
        .iter()
        .map(|stat| {
            format!(
                r#"<div class="reveal"><h3 style="color:#ffffff; margin:0; font-size:3rem;">{}</h3><p style="color:rgba(255,255,255,0.8); margin:0;">{}</p></div>"#,
                esc(&stat.value),
                esc(&stat.label)
            )
        })
        .collect();

    format!(
        r#"<div style="background:var(--p); color:white; padding:3rem 0; text-align:center;"><div class="container grid-3">{}</div></div>"#,
        cells
    )
}

pub fn features(config: &SiteConfig) -> String {
    let cards: String = content::parse_features(&config.content.features.lines)
        .iter()
        .map(|feature| {
            format!(
                r#"<div class="card reveal"><div style="color:var(--s); margin-bottom:1rem;">{}</div><h3>{}</h3><div class="prose">{}</div></div>"#,
                icon_svg(&feature.icon),
                esc(&feature.title),
                text::format(&feature.description)
            )
        })
        .collect();

    format!(
        r#"<section id="features"><div class="container"><div class="section-head reveal"><h2>{}</h2></div><div class="grid-3">{}</div></div></section>"#,
        esc(&config.content.features.title),
        cards
    )
}

/// Three fixed comparison rows. Everything, including the savings figure, is
/// a literal substitution; nothing is computed.
pub fn pricing(config: &SiteConfig) -> String {
    let pricing = &config.content.pricing;
    format!(
        r#"<section id="pricing"><div class="container">
    <div class="section-head reveal"><h2>The Cost of Ownership</h2><p>See how the monthly trap adds up over five years.</p></div>
    <div class="pricing-wrapper reveal">
        <table class="pricing-table">
            <thead>
                <tr><th style="width:40%">Expense Category</th><th style="background:var(--s); font-size:1.2rem;">{us} (Us)</th><th>{competitor}</th></tr>
            </thead>
            <tbody>
                <tr><td>Initial Setup Fee</td><td><strong>{setup}</strong></td><td>$0</td></tr>
                <tr><td>Annual Costs</td><td><strong>{monthly}</strong></td><td>{competitor_monthly}</td></tr>
                <tr><td><strong>Your 5-Year Savings</strong></td><td style="color:var(--s); font-size:1.3rem;">You Save {savings}</td><td>$0</td></tr>
            </tbody>
        </table>
    </div>
</div></section>"#,
        us = esc(&config.business.name),
        competitor = esc(&pricing.competitor),
        setup = esc(&pricing.setup_price),
        monthly = esc(&pricing.monthly_price),
        competitor_monthly = esc(&pricing.competitor_monthly),
        savings = esc(&pricing.savings),
    )
}

/// The grid itself is filled in the browser; this only lays out the section
/// and its loading placeholder.
pub fn inventory() -> String {
    r#"<section id="inventory" style="background:rgba(0,0,0,0.02)"><div class="container">
    <div class="section-head reveal"><h2>Portfolio &amp; Store</h2><p>Secure checkout available.</p></div>
    <div id="inv-grid" class="grid-3"><div style="text-align:center; padding:4rem;">Loading Store...</div></div>
</div></section>"#
        .to_string()
}

pub fn about(config: &SiteConfig) -> String {
    let about = &config.content.about;
    format!(
        r#"<section id="about"><div class="container">
    <div class="about-grid">
        <div class="reveal">
            <h2 style="font-size:2.5rem; margin-bottom:1.5rem;">{title}</h2>
            <div class="prose" style="font-size:1.1rem; margin-bottom:2rem;">{short}</div>
            <a href="about.html" class="btn btn-primary" style="padding: 0.8rem 2rem; font-size:0.9rem;">Read Our Full Story</a>
        </div>
        <img src="{image}" class="reveal" loading="lazy" style="width:100%; border-radius:var(--radius); box-shadow:0 20px 50px -20px rgba(0,0,0,0.2); aspect-ratio:4/3; object-fit:cover;">
    </div>
</div></section>"#,
        title = esc(&about.title),
        short = text::format(&about.short),
        image = attr(&about.image),
    )
}

pub fn testimonials(config: &SiteConfig) -> String {
    let cards: String = content::parse_testimonials(&config.content.testimonials.lines)
        .iter()
        .map(|t| {
            format!(
                r#"<div class="card reveal" style="text-align:center;"><i>"{}"</i><br><b>- {}</b></div>"#,
                esc(&t.quote),
                esc(&t.author)
            )
        })
        .collect();

    format!(
        r#"<section><div class="container"><div class="section-head reveal"><h2>Client Stories</h2></div><div class="grid-3">{}</div></div></section>"#,
        cards
    )
}

pub fn faq(config: &SiteConfig) -> String {
    let items: String = content::parse_faq(&config.content.faq.lines)
        .iter()
        .map(|entry| {
            format!(
                r#"<details class="reveal"><summary>{}?</summary><p>{}</p></details>"#,
                esc(&entry.question),
                esc(&entry.answer)
            )
        })
        .collect();

    format!(
        r#"<section id="faq"><div class="container" style="max-width:800px;"><div class="section-head reveal"><h2>Frequently Asked Questions</h2></div>{}</div></section>"#,
        items
    )
}

pub fn cta(config: &SiteConfig) -> String {
    format!(
        r#"<section style="background:var(--s); color:white; text-align:center;"><div class="container reveal"><h2 style="color:white;">{}</h2><p style="margin-bottom:2rem;">Get in touch today.</p><a href="contact.html" class="btn" style="background:white; color:var(--s);">Get Started</a></div></section>"#,
        esc(&config.business.tagline)
    )
}

/// Compact page header for inner pages.
pub fn inner_header(title: &str) -> String {
    format!(
        r#"<section class="hero" style="min-height: 40vh; background:var(--p);"><div class="container hero-content"><h1>{}</h1></div></section>"#,
        esc(title)
    )
}

/// Inner header + formatted long-form copy: the about and legal pages.
pub fn document_page(title: &str, copy: &str) -> String {
    format!(
        r#"{}<div class="container prose legal-text" style="padding:3rem 1.5rem;">{}</div>"#,
        inner_header(title),
        text::format(copy)
    )
}

pub fn contact_body(config: &SiteConfig) -> String {
    let business = &config.business;
    let address = esc(&business.address).replace('\n', "<br>");
    let phone_digits = contact_digits(&business.phone);

    let whatsapp_button = match &business.whatsapp {
        Some(number) if !contact_digits(number).is_empty() => format!(
            r#"<br>
                    <a href="https://wa.me/{}" target="_blank" class="btn btn-accent" style="width:100%; text-align:center;">Chat on WhatsApp</a>"#,
            contact_digits(number)
        ),
        _ => String::new(),
    };

    let form = if business.email.is_empty() {
        String::new()
    } else {
        format!(
            r#"<div class="card">
                <h3 style="margin-bottom:1.5rem;">Send a Message</h3>
                <form action="https://formsubmit.co/{email}" method="POST">
                    <div style="display:grid; grid-template-columns:1fr 1fr; gap:1rem;">
                        <div><label>Name</label><input type="text" name="name" required placeholder="Your Name"></div>
                        <div><label>Email</label><input type="email" name="email" required placeholder="Your Email"></div>
                    </div>
                    <label>Message</label><textarea name="message" rows="5" required placeholder="How can we help you?"></textarea>
                    <button type="submit" class="btn btn-primary" style="width:100%;">Send Message</button>
                    <input type="hidden" name="_captcha" value="false">
                    <input type="hidden" name="_next" value="{url}/contact.html">
                </form>
            </div>"#,
            email = attr(&business.email),
            url = attr(&business.url),
        )
    };

    let map = match &business.map_embed {
        Some(embed) => format!(
            r#"<br><br>
        <div style="border-radius:12px; overflow:hidden; box-shadow:0 10px 30px rgba(0,0,0,0.1);">{}</div>"#,
            embed
        ),
        None => String::new(),
    };

    format!(
        r#"{header}
<section>
    <div class="container">
        <div class="contact-grid">
            <div>
                <div style="background:var(--card); padding:2rem; border-radius:12px; border:1px solid #eee;">
                    <h3 style="color:var(--p);">Get In Touch</h3>
                    <p style="margin-top:1rem;"><strong>Address:</strong><br>{address}</p>
                    <p style="margin-top:1rem;"><strong>Phone:</strong><br><a href="tel:{phone_digits}" style="color:var(--s);">{phone}</a></p>
                    <p style="margin-top:1rem;"><strong>Email:</strong><br><a href="mailto:{email}">{email}</a></p>
                    {whatsapp_button}
                </div>
            </div>
            {form}
        </div>
        {map}
    </div>
</section>"#,
        header = inner_header("Contact Us"),
        phone = esc(&business.phone),
        email = esc(&business.email),
    )
}

pub fn booking_body(config: &SiteConfig) -> String {
    let booking = &config.content.booking;
    format!(
        r#"<section class="hero" style="min-height:30vh; background:var(--p);">
    <div class="container hero-content"><h1>{title}</h1><p>{subtext}</p></div>
</section>
<section>
    <div class="container" style="text-align:center;">
        <div style="background:white; border-radius:12px; overflow:hidden; box-shadow:0 10px 40px rgba(0,0,0,0.1); width:100%;">
            {embed}
        </div>
    </div>
</section>"#,
        title = esc(&booking.title),
        subtext = esc(&booking.subtext),
        embed = booking.embed,
    )
}

pub fn blog_index_body(config: &SiteConfig) -> String {
    let blog = &config.content.blog;
    let background = match config.content.hero.slides.first() {
        Some(url) if !url.trim().is_empty() => format!(
            "background-image: linear-gradient(rgba(0,0,0,0.6), rgba(0,0,0,0.6)), url('{}'); background-size: cover;",
            attr(url)
        ),
        _ => "background:var(--p);".to_string(),
    };

    format!(
        r#"<section class="hero" style="min-height:40vh; {background}">
    <div class="container hero-content"><h1>{title}</h1><p>{subtext}</p></div>
</section>
<section><div class="container"><div id="blog-grid" class="grid-3">Loading...</div></div></section>"#,
        title = esc(&blog.title),
        subtext = esc(&blog.subtext),
    )
}

pub fn blog_post_body() -> String {
    r#"<div id="post-container" style="padding-top:70px;">Loading...</div>"#.to_string()
}

pub fn product_body() -> String {
    r#"<section style="padding-top:150px;"><div class="container"><div id="product-detail">Loading...</div></div></section>"#
        .to_string()
}

/// Floating chat shortcut; absent entirely when no number is configured.
pub fn whatsapp_widget(config: &SiteConfig) -> Option<String> {
    let number = config.business.whatsapp.as_ref()?;
    let digits = contact_digits(number);
    if digits.is_empty() {
        return None;
    }

    Some(format!(
        r#"<a href="https://wa.me/{}" class="wa-float" target="_blank" aria-label="Chat on WhatsApp"><svg style="width:32px;height:32px" viewBox="0 0 24 24"><path fill="currentColor" d="M12.04 2c-5.46 0-9.91 4.45-9.91 9.91c0 1.75.46 3.45 1.32 4.95L2.05 22l5.25-1.38c1.45.79 3.08 1.21 4.74 1.21c5.46 0 9.91-4.45 9.91-9.91c0-2.65-1.03-5.14-2.9-7.01A9.816 9.816 0 0 0 12.04 2m.01 1.67c2.2 0 4.26.86 5.82 2.42a8.225 8.225 0 0 1 2.41 5.83c0 4.54-3.7 8.23-8.24 8.23c-1.48 0-2.93-.39-4.19-1.15l-.3-.17l-3.12.82l.83-3.04l-.2-.32a8.188 8.188 0 0 1-1.26-4.38c.01-4.54 3.7-8.24 8.25-8.24"/></svg></a>"#,
        digits
    ))
}

const FACEBOOK_ICON: &str = r#"<svg class="social-icon" viewBox="0 0 24 24"><path d="M18 2h-3a5 5 0 0 0-5 5v3H7v4h3v8h4v-8h3l1-4h-4V7a1 1 0 0 1 1-1h3z"></path></svg>"#;
const INSTAGRAM_ICON: &str = r#"<svg class="social-icon" viewBox="0 0 24 24"><path d="M16.98 0a6.9 6.9 0 0 1 5.08 1.98A6.94 6.94 0 0 1 24 7.02v9.96c0 2.08-.68 3.87-1.98 5.13A7.14 7.14 0 0 1 16.94 24H7.06a7.06 7.06 0 0 1-5.03-1.89A6.96 6.96 0 0 1 0 16.94V7.02C0 2.8 2.8 0 7.02 0h9.96zM7.17 2.1c-1.4 0-2.6.48-3.46 1.33c-.85.85-1.33 2.06-1.33 3.46v10.3c0 1.3.47 2.5 1.33 3.36c.86.85 2.06 1.33 3.46 1.33h9.66c1.4 0 2.6-.48 3.46-1.33c.85-.85 1.33-2.06 1.33-3.46V6.89c0-1.4-.47-2.6-1.33-3.46c-.86-.85-2.06-1.33-3.46-1.33H7.17zm11.97 3.33c.77 0 1.4.63 1.4 1.4c0 .77-.63 1.4-1.4 1.4c-.77 0-1.4-.63-1.4-1.4c0-.77.63-1.4 1.4-1.4zM12 5.76c3.39 0 6.14 2.75 6.14 6.14c0 3.39-2.75 6.14-6.14 6.14c-3.39 0-6.14-2.75-6.14-6.14c0-3.39 2.75-6.14 6.14-6.14zm0 2.1c-2.2 0-3.99 1.79-3.99 4.04c0 2.25 1.79 4.04 3.99 4.04c2.2 0 3.99-1.79 3.99-4.04c0-2.25-1.79-4.04-3.99-4.04z"/></svg>"#;
const TWITTER_ICON: &str = r#"<svg class="social-icon" viewBox="0 0 24 24"><path d="M18.901 1.153h3.68l-8.04 9.19L24 22.846h-7.406l-5.8-7.584l-6.638 7.584H.474l8.6-9.83L0 1.154h7.594l5.243 6.932ZM17.61 20.644h2.039L6.486 3.24H4.298Z"></path></svg>"#;
const LINKEDIN_ICON: &str = r#"<svg class="social-icon" viewBox="0 0 24 24"><path d="M16 8a6 6 0 0 1 6 6v7h-4v-7a2 2 0 0 0-2-2a2 2 0 0 0-2 2v7h-4v-7a6 6 0 0 1 6-6zM2 9h4v12H2zM4 2a2 2 0 1 1-2 2a2 2 0 0 1 2-2z"></path></svg>"#;
const YOUTUBE_ICON: &str = r#"<svg class="social-icon" viewBox="0 0 24 24"><path d="M23.498 6.186a3.016 3.016 0 0 0-2.122-2.136C19.505 3.545 12 3.545 12 3.545s-7.505 0-9.377.505A3.017 3.017 0 0 0 .502 6.186C0 8.07 0 12 0 12s0 3.93.502 5.814a3.016 3.016 0 0 0 2.122 2.136c1.871.505 9.376.505 9.376.505s7.505 0 9.377-.505a3.015 3.015 0 0 0 2.122-2.136C24 15.93 24 12 24 12s0-3.93-.502-5.814zM9.545 15.568V8.432L15.818 12l-6.273 3.568z"/></svg>"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;

    #[test]
    fn contact_digits_strips_every_connector() {
        assert_eq!(contact_digits("+1 (234)-567"), "1234567");
        assert_eq!(contact_digits("966572562151"), "966572562151");
        assert_eq!(contact_digits("words only"), "");
    }

    #[test]
    fn nav_call_button_uses_digits_only() {
        let mut config = SiteConfig::default();
        config.business.phone = "+1 (234)-567".into();
        let nav = navigation(&config);
        assert!(nav.contains(r#"href="tel:1234567""#));
    }

    #[test]
    fn nav_drops_links_for_disabled_sections() {
        let mut config = SiteConfig::default();
        config.sections.blog = false;
        config.sections.booking = false;
        config.sections.pricing = false;
        let nav = navigation(&config);
        assert!(!nav.contains("blog.html"));
        assert!(!nav.contains("booking.html"));
        assert!(!nav.contains("#pricing"));
        assert!(nav.contains("contact.html"));
    }

    #[test]
    fn footer_skips_empty_social_links() {
        let mut config = SiteConfig::default();
        config.social.facebook = Some("https://facebook.com/acme".into());
        let footer = footer(&config);
        assert!(footer.contains("facebook.com/acme"));
        assert!(!footer.contains("aria-label=\"YouTube\""));
    }

    #[test]
    fn footer_quick_links_respect_toggles() {
        let mut config = SiteConfig::default();
        config.sections.blog = false;
        let footer = footer(&config);
        assert!(!footer.contains("blog.html"));
        assert!(footer.contains("booking.html"));
    }

    #[test]
    fn hero_renders_at_most_three_slides() {
        let mut config = SiteConfig::default();
        config.content.hero.slides = vec![
            "a.jpg".into(),
            "b.jpg".into(),
            "".into(),
            "c.jpg".into(),
            "d.jpg".into(),
        ];
        let hero = hero(&config);
        assert_eq!(hero.matches("background-image: url(").count(), 3);
        assert_eq!(hero.matches(r#"class="carousel-slide active""#).count(), 1);
        assert!(hero.contains("currentSlide + 1) % slides.length"));
    }

    #[test]
    fn hero_without_slides_skips_the_rotation_script() {
        let mut config = SiteConfig::default();
        config.content.hero.slides.clear();
        let hero = hero(&config);
        assert!(!hero.contains("setInterval"));
        assert!(hero.contains(&config.content.hero.headline));
    }

    #[test]
    fn feature_cards_use_fallback_icon_for_unknown_keys() {
        let mut config = SiteConfig::default();
        config.content.features.lines = "mystery | Title | Desc".into();
        let html = features(&config);
        assert!(html.contains("M12 2C6.48"));
    }

    #[test]
    fn empty_faq_is_still_a_valid_section() {
        let mut config = SiteConfig::default();
        config.content.faq.lines = "no delimiters here at all".into();
        let html = faq(&config);
        assert!(html.contains(r#"<section id="faq""#));
        assert!(!html.contains("<details"));
    }

    #[test]
    fn pricing_substitutes_the_savings_figure_verbatim() {
        let mut config = SiteConfig::default();
        config.content.pricing.savings = "$9,999".into();
        assert!(pricing(&config).contains("You Save $9,999"));
    }

    #[test]
    fn whatsapp_widget_needs_a_number() {
        let mut config = SiteConfig::default();
        config.business.whatsapp = None;
        assert!(whatsapp_widget(&config).is_none());

        config.business.whatsapp = Some("+1 (234)-567".into());
        let widget = whatsapp_widget(&config).unwrap();
        assert!(widget.contains("wa.me/1234567"));
    }

    #[test]
    fn contact_body_keeps_raw_map_embed() {
        let mut config = SiteConfig::default();
        config.business.map_embed = Some("<iframe src=\"https://maps.example\"></iframe>".into());
        let body = contact_body(&config);
        assert!(body.contains("<iframe src=\"https://maps.example\"></iframe>"));
    }
}
