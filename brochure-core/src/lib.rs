pub mod builder;
pub mod config;
pub mod content;
pub mod page;
pub mod scripts;
pub mod sections;
pub mod template;
pub mod text;
pub mod theme;

// Re-export main types
pub use builder::{Archive, ArchiveEntry, BuildError, SiteBuilder, build_site};
pub use config::{ConfigError, SiteConfig};
pub use page::PageAssembler;
pub use template::{TemplateError, Templates};
pub use theme::{Animation, Theme, ThemeTokens, resolve_theme};
