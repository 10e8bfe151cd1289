//! DOM contract between the desktop runtime and the surrounding page.

/// Element ids and selectors the desktop binds to on the host page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeskConfig {
    /// Id of the element cards are rendered into.
    pub render_target_id: &'static str,
    /// Selector of the navigation tab container.
    pub tab_container_selector: &'static str,
    /// Selector of the preview close button.
    pub close_selector: &'static str,
    /// Id of the clear-all control.
    pub clear_id: &'static str,
}

impl DeskConfig {
    /// Markup of the page this desktop is embedded in.
    pub const fn page_defaults() -> Self {
        Self {
            render_target_id: "desk-section",
            tab_container_selector: ".nav-tabs",
            close_selector: ".btn-close",
            clear_id: "clear",
        }
    }

    /// Selector form of [`DeskConfig::clear_id`].
    pub fn clear_selector(&self) -> String {
        format!("#{}", self.clear_id)
    }
}

impl Default for DeskConfig {
    fn default() -> Self {
        Self::page_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_follow_page_markup() {
        let config = DeskConfig::default();
        assert_eq!(config.render_target_id, "desk-section");
        assert_eq!(config.tab_container_selector, ".nav-tabs");
        assert_eq!(config.close_selector, ".btn-close");
        assert_eq!(config.clear_selector(), "#clear");
    }
}
