//! Configuration handling

mod site;

pub use site::{
    AnalyticsConfig, BlogConfig, BuildConfig, CommentsConfig, DevConfig, FeatureFlags,
    MarkdownConfig, NavEntry, PathsConfig, RssConfig, SeoConfig, SiteConfig, SiteMeta,
    SocialLinks, ThemeTokens,
};
