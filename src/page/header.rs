//! Site header with scroll-dependent styling

use crate::config::SiteConfig;
use crate::helpers::{html_escape, url_for};

/// Class applied to the header once the page is scrolled past the threshold
pub const SCROLLED_CLASS: &str = "scrolled";

/// Scroll state of the header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderState {
    threshold: u32,
    scrolled: bool,
}

impl HeaderState {
    pub fn new(threshold: u32) -> Self {
        Self {
            threshold,
            scrolled: false,
        }
    }

    /// Apply a scroll offset; returns whether the scrolled flag changed
    pub fn update(&mut self, scroll_y: f64) -> bool {
        let scrolled = scroll_y > f64::from(self.threshold);
        let changed = scrolled != self.scrolled;
        self.scrolled = scrolled;
        changed
    }

    pub fn is_scrolled(&self) -> bool {
        self.scrolled
    }

    pub fn class(&self) -> &'static str {
        if self.scrolled {
            SCROLLED_CLASS
        } else {
            ""
        }
    }
}

/// The page header: "Back to top" and "About me" navigation
pub struct Header<'a> {
    config: &'a SiteConfig,
    state: HeaderState,
}

impl<'a> Header<'a> {
    pub fn new(config: &'a SiteConfig) -> Self {
        Self {
            config,
            state: HeaderState::new(config.header.scroll_threshold),
        }
    }

    /// Render the header markup for the current state
    pub fn render(&self) -> String {
        format!(
            r#"<header class="{class}"><nav class="navbar"><a href="{home}" class="nav-link" data-scroll-top>Back to top</a><a href="{about}" class="nav-link">About me</a></nav></header>"#,
            class = self.state.class(),
            home = html_escape(&url_for(self.config, "/")),
            about = html_escape(&self.config.about_url),
        )
    }

    /// Browser-side counterpart of [`HeaderState::update`] plus smooth scroll to top
    pub fn script(&self) -> String {
        format!(
            r#"<script>
(function() {{
    var header = document.querySelector('header');
    if (!header) return;
    function onScroll() {{
        header.className = window.scrollY > {threshold} ? '{scrolled}' : '';
    }}
    window.addEventListener('scroll', onScroll);
    onScroll();
    var top = header.querySelector('[data-scroll-top]');
    if (top) {{
        top.addEventListener('click', function(event) {{
            event.preventDefault();
            window.scrollTo({{ top: 0, behavior: 'smooth' }});
        }});
    }}
}})();
</script>"#,
            threshold = self.state.threshold,
            scrolled = SCROLLED_CLASS,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scroll_threshold() {
        let mut state = HeaderState::new(50);
        assert!(!state.is_scrolled());
        assert!(!state.update(50.0));
        assert_eq!(state.class(), "");

        assert!(state.update(50.5));
        assert_eq!(state.class(), "scrolled");
        assert!(!state.update(400.0));

        assert!(state.update(0.0));
        assert!(!state.is_scrolled());
    }

    #[test]
    fn test_render_header() {
        let config = SiteConfig::default();
        let header = Header::new(&config);
        let html = header.render();
        assert!(html.starts_with(r#"<header class="">"#));
        assert!(html.contains(">Back to top</a>"));
        assert!(html.contains(r#"href="https://www.carolinecah.com""#));
    }

    #[test]
    fn test_script_uses_threshold() {
        let mut config = SiteConfig::default();
        config.header.scroll_threshold = 120;
        let script = Header::new(&config).script();
        assert!(script.contains("window.scrollY > 120"));
        assert!(script.contains("behavior: 'smooth'"));
    }
}
