use crate::config::ThemeConfig;

/// The eight named base themes. Resolution from the configured name is
/// total: anything not listed lands on the light default palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    CleanCorporate,
    MidnightSaas,
    Glassmorphism,
    CyberpunkNeon,
    LuxuryGold,
    ForestEco,
    OceanBreeze,
    StarkMinimalist,
}

impl Theme {
    pub const ALL: [Theme; 8] = [
        Theme::CleanCorporate,
        Theme::MidnightSaas,
        Theme::Glassmorphism,
        Theme::CyberpunkNeon,
        Theme::LuxuryGold,
        Theme::ForestEco,
        Theme::OceanBreeze,
        Theme::StarkMinimalist,
    ];

    pub fn from_name(name: &str) -> Option<Theme> {
        match name.trim().to_lowercase().as_str() {
            "clean-corporate" => Some(Theme::CleanCorporate),
            "midnight-saas" => Some(Theme::MidnightSaas),
            "glassmorphism" => Some(Theme::Glassmorphism),
            "cyberpunk-neon" => Some(Theme::CyberpunkNeon),
            "luxury-gold" => Some(Theme::LuxuryGold),
            "forest-eco" => Some(Theme::ForestEco),
            "ocean-breeze" => Some(Theme::OceanBreeze),
            "stark-minimalist" => Some(Theme::StarkMinimalist),
            _ => None,
        }
    }

    pub fn palette(self) -> Palette {
        match self {
            Theme::CleanCorporate => Palette {
                background: "#f8fafc",
                text: "#1e293b",
                card: "#f1f5f9",
                nav: "rgba(248, 250, 252, 0.95)",
            },
            Theme::MidnightSaas => Palette {
                background: "#0f172a",
                text: "#f8fafc",
                card: "#1e293b",
                nav: "rgba(15, 23, 42, 0.9)",
            },
            Theme::Glassmorphism => Palette {
                background: "#e2e8f0",
                text: "#111827",
                card: "rgba(255, 255, 255, 0.65)",
                nav: "rgba(255, 255, 255, 0.55)",
            },
            Theme::CyberpunkNeon => Palette {
                background: "#050505",
                text: "#00ff9d",
                card: "#111111",
                nav: "rgba(0, 0, 0, 0.8)",
            },
            Theme::LuxuryGold => Palette {
                background: "#1c1c1c",
                text: "#d4af37",
                card: "#2a2a2a",
                nav: "rgba(28, 28, 28, 0.95)",
            },
            Theme::ForestEco => Palette {
                background: "#f1f8e9",
                text: "#1b5e20",
                card: "#f9fbe7",
                nav: "rgba(241, 248, 233, 0.9)",
            },
            Theme::OceanBreeze => Palette {
                background: "#e0f7fa",
                text: "#006064",
                card: "#f2fdff",
                nav: "rgba(224, 247, 250, 0.9)",
            },
            Theme::StarkMinimalist => Palette {
                background: "#fdfdfd",
                text: "#000000",
                card: "#f7f7f7",
                nav: "rgba(255, 255, 255, 1)",
            },
        }
    }
}

/// The surface quadruple a base theme fixes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: &'static str,
    pub text: &'static str,
    pub card: &'static str,
    pub nav: &'static str,
}

/// The fallback for unrecognized theme names.
pub const DEFAULT_PALETTE: Palette = Palette {
    background: "#ffffff",
    text: "#0f172a",
    card: "#ffffff",
    nav: "rgba(255, 255, 255, 0.95)",
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Animation {
    FadeUp,
    ZoomIn,
    SlideRight,
    /// No reveal rule at all: marked elements render statically visible.
    None,
}

impl Animation {
    pub fn from_name(name: &str) -> Animation {
        match name.trim().to_lowercase().as_str() {
            "fade-up" => Animation::FadeUp,
            "zoom-in" => Animation::ZoomIn,
            "slide-right" => Animation::SlideRight,
            _ => Animation::None,
        }
    }

    /// The `.reveal` transition pair for this style. Without a rule the
    /// class is inert and content stays visible, so an unknown style can
    /// never hide anything permanently.
    pub fn css(self) -> &'static str {
        match self {
            Animation::FadeUp => {
                ".reveal { opacity: 0; transform: translateY(30px); transition: all 0.8s ease-out; } .reveal.active { opacity: 1; transform: translateY(0); }"
            }
            Animation::ZoomIn => {
                ".reveal { opacity: 0; transform: scale(0.95); transition: all 0.8s cubic-bezier(0.175, 0.885, 0.32, 1.275); } .reveal.active { opacity: 1; transform: scale(1); }"
            }
            Animation::SlideRight => {
                ".reveal { opacity: 0; transform: translateX(-30px); transition: all 0.8s ease-out; } .reveal.active { opacity: 1; transform: translateX(0); }"
            }
            Animation::None => "",
        }
    }
}

/// The concrete style values the renderers and stylesheet consume.
#[derive(Debug, Clone, PartialEq)]
pub struct ThemeTokens {
    pub primary: String,
    pub accent: String,
    pub background: String,
    pub text: String,
    pub card: String,
    pub nav: String,
    pub radius: String,
    pub heading_font: String,
    pub body_font: String,
    pub animation_css: &'static str,
}

/// One-to-one mapping from the theme selection. Colors, fonts and radius
/// pass through verbatim; only the base name and animation name are
/// interpreted.
pub fn resolve_theme(config: &ThemeConfig) -> ThemeTokens {
    let palette = match Theme::from_name(&config.base) {
        Some(theme) => theme.palette(),
        None => DEFAULT_PALETTE,
    };

    ThemeTokens {
        primary: config.primary.clone(),
        accent: config.accent.clone(),
        background: palette.background.to_string(),
        text: palette.text.to_string(),
        card: palette.card.to_string(),
        nav: palette.nav.to_string(),
        radius: config.radius.clone(),
        heading_font: config.heading_font.clone(),
        body_font: config.body_font.clone(),
        animation_css: Animation::from_name(&config.animation).css(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_named_theme_differs_from_the_fallback() {
        for theme in Theme::ALL {
            let palette = theme.palette();
            assert_ne!(palette.background, DEFAULT_PALETTE.background, "{theme:?}");
            assert_ne!(palette.text, DEFAULT_PALETTE.text, "{theme:?}");
            assert_ne!(palette.card, DEFAULT_PALETTE.card, "{theme:?}");
        }
    }

    #[test]
    fn unknown_name_resolves_to_exactly_the_fallback() {
        let config = ThemeConfig {
            base: "vaporwave".into(),
            ..ThemeConfig::default()
        };
        let tokens = resolve_theme(&config);
        assert_eq!(tokens.background, DEFAULT_PALETTE.background);
        assert_eq!(tokens.text, DEFAULT_PALETTE.text);
        assert_eq!(tokens.card, DEFAULT_PALETTE.card);
        assert_eq!(tokens.nav, DEFAULT_PALETTE.nav);
    }

    #[test]
    fn colors_and_fonts_pass_through_verbatim() {
        let config = ThemeConfig {
            primary: "#123456".into(),
            accent: "rebeccapurple".into(),
            heading_font: "Space Grotesk".into(),
            ..ThemeConfig::default()
        };
        let tokens = resolve_theme(&config);
        assert_eq!(tokens.primary, "#123456");
        assert_eq!(tokens.accent, "rebeccapurple");
        assert_eq!(tokens.heading_font, "Space Grotesk");
    }

    #[test]
    fn none_and_unknown_animations_emit_no_rule() {
        assert_eq!(Animation::from_name("none").css(), "");
        assert_eq!(Animation::from_name("wiggle").css(), "");
        assert!(Animation::from_name("slide-right").css().contains("translateX"));
    }
}
