//! Testing utilities and mock implementations.
//!
//! This module provides a mock `Fetcher` and HTML fixtures, allowing the
//! pipeline and the session to be exercised without network access.
//!
//! # Example
//!
//! ```rust,ignore
//! use altscan_core::testing::{fixtures, MockFetcher};
//!
//! let fetcher = MockFetcher::new();
//! fetcher.set_default_page(fixtures::MIXED_PAGE).await;
//!
//! // Use in an Analyzer...
//! ```

mod mock_fetcher;

pub use mock_fetcher::{MockFetcher, RecordedFetch};

/// Test fixtures and helper functions.
pub mod fixtures {
    /// A page exercising every extraction path and every local rule.
    pub const MIXED_PAGE: &str = r##"<!DOCTYPE html>
<html>
<head><title>Gallery</title></head>
<body>
  <img src="/img/cat.jpg" alt="Cat sitting on a chair">
  <img src="/img/no-alt.png">
  <a href="/home"><img src="/img/home.png" alt=""></a>
  <img src="/img/logo.png" alt="logo.png">
  <picture>
    <source srcset="/img/hero-wide.webp 1200w, /img/hero-narrow.webp 600w" media="(min-width: 800px)">
    <img src="/img/hero.jpg" alt="Harbour at sunset">
  </picture>
  <img data-lazy-src="/img/lazy.jpg" alt="Lazy loaded chart">
  <div><img style="background-image: url('/img/bg.png')" alt="Decorative banner"></div>
  <img src="/img/cat.jpg" alt="Duplicate of the first image">
</body>
</html>"##;

    /// `count` images sharing the same alt text.
    pub fn repeated_alt_page(count: usize, alt: &str) -> String {
        let images: String = (0..count)
            .map(|i| format!(r#"<img src="/icons/{}.svg" alt="{}">"#, i, alt))
            .collect();
        format!("<html><body>{}</body></html>", images)
    }
}
