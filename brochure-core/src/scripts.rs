//! Behavior scripts for the generated pages. Everything here runs in the
//! visitor's browser; the generator only decides which blocks a page gets
//! and fills in the configured URLs and numbers.

use tera::Context;

use crate::config::SiteConfig;
use crate::sections::contact_digits;
use crate::template::{TemplateError, Templates, raw};

fn script_block(body: &str) -> String {
    format!("<script>\n{}</script>", body)
}

/// CSV line parser + minimal feed markdown, shared by every loader.
pub fn csv_helpers() -> String {
    script_block(raw::CSV_HELPERS)
}

/// Scroll-reveal activation. Marked elements without an animation rule are
/// simply always visible, so this is safe to ship unconditionally.
pub fn reveal() -> String {
    script_block(raw::REVEAL)
}

/// Hero slide rotation: fixed interval, wraps around modulo the slide count.
pub fn carousel() -> String {
    script_block(raw::CAROUSEL)
}

pub fn service_worker_registration() -> String {
    script_block(raw::SW_REGISTER)
}

/// Floating cart, modal, and WhatsApp checkout. The number is reduced to
/// digits before it is embedded in the `wa.me` link.
pub fn cart_system(templates: &Templates, config: &SiteConfig) -> Result<String, TemplateError> {
    let number = config
        .business
        .whatsapp
        .as_deref()
        .unwrap_or(config.business.phone.as_str());

    let mut pay = Vec::new();
    if let Some(upi) = &config.store.upi_id {
        pay.push(format!("UPI: {}", upi));
    }
    if let Some(paypal) = &config.store.paypal_link {
        pay.push(format!("PayPal: {}", paypal));
    }

    let mut context = Context::new();
    context.insert("wa_number", &contact_digits(number));
    context.insert("pay_links", &pay.join(" | "));
    let js = templates.render("cart.js", &context)?;

    Ok(format!(
        r#"<div id="cart-float" onclick="toggleCart()" style="display:none;">
    <span>&#128722;</span> <span id="cart-count">0</span>
</div>
<div id="cart-overlay" onclick="toggleCart()"></div>
<div id="cart-modal">
    <h3>Your Cart</h3>
    <div id="cart-items" style="max-height:300px; overflow-y:auto; margin:1rem 0;"></div>
    <div style="font-weight:bold; font-size:1.2rem; margin-bottom:1rem; text-align:right;">Total: <span id="cart-total">0.00</span></div>
    <button onclick="checkoutWhatsApp()" class="btn btn-accent" style="width:100%">Checkout via WhatsApp</button>
</div>
{}"#,
        script_block(&js)
    ))
}

/// Present only when a translation feed is configured.
pub fn language_switch(
    templates: &Templates,
    config: &SiteConfig,
) -> Result<Option<String>, TemplateError> {
    let Some(feed_url) = &config.translations.feed_url else {
        return Ok(None);
    };

    let mut context = Context::new();
    context.insert("feed_url", feed_url);
    let js = templates.render("translate.js", &context)?;

    Ok(Some(script_block(&js)))
}

/// Store grid loader; without a feed URL the grid keeps its placeholder.
pub fn inventory_loader(
    templates: &Templates,
    config: &SiteConfig,
) -> Result<Option<String>, TemplateError> {
    let Some(feed_url) = &config.store.feed_url else {
        return Ok(None);
    };

    let mut context = Context::new();
    context.insert("feed_url", feed_url);
    context.insert("fallback_image", &config.store.fallback_image);
    let js = templates.render("inventory.js", &context)?;

    Ok(Some(script_block(&js)))
}

/// Product detail loader (`?item=` lookup, first row when absent).
pub fn product_loader(
    templates: &Templates,
    config: &SiteConfig,
) -> Result<Option<String>, TemplateError> {
    let Some(feed_url) = &config.store.feed_url else {
        return Ok(None);
    };

    let mut context = Context::new();
    context.insert("feed_url", feed_url);
    context.insert("fallback_image", &config.store.fallback_image);
    let js = templates.render("product.js", &context)?;

    Ok(Some(script_block(&js)))
}

pub fn blog_index_loader(
    templates: &Templates,
    config: &SiteConfig,
) -> Result<Option<String>, TemplateError> {
    let Some(feed_url) = &config.content.blog.feed_url else {
        return Ok(None);
    };

    let mut context = Context::new();
    context.insert("feed_url", feed_url);
    let js = templates.render("blog-index.js", &context)?;

    Ok(Some(script_block(&js)))
}

pub fn blog_post_loader(
    templates: &Templates,
    config: &SiteConfig,
) -> Result<Option<String>, TemplateError> {
    let Some(feed_url) = &config.content.blog.feed_url else {
        return Ok(None);
    };

    let mut context = Context::new();
    context.insert("feed_url", feed_url);
    let js = templates.render("blog-post.js", &context)?;

    Ok(Some(script_block(&js)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;

    #[test]
    fn cart_checkout_number_is_digits_only() {
        let templates = Templates::new().unwrap();
        let mut config = SiteConfig::default();
        config.business.whatsapp = Some("+1 (234)-567".into());
        let cart = cart_system(&templates, &config).unwrap();
        assert!(cart.contains("const waNumber = \"1234567\";"));
    }

    #[test]
    fn loaders_are_absent_without_feed_urls() {
        let templates = Templates::new().unwrap();
        let config = SiteConfig::default();
        assert!(inventory_loader(&templates, &config).unwrap().is_none());
        assert!(blog_index_loader(&templates, &config).unwrap().is_none());
        assert!(language_switch(&templates, &config).unwrap().is_none());
    }

    #[test]
    fn inventory_loader_embeds_feed_and_fallback() {
        let templates = Templates::new().unwrap();
        let mut config = SiteConfig::default();
        config.store.feed_url = Some("https://sheets.example/pub?output=csv".into());
        let js = inventory_loader(&templates, &config).unwrap().unwrap();
        assert!(js.contains("https://sheets.example/pub?output=csv"));
        assert!(js.contains(&config.store.fallback_image));
    }
}
