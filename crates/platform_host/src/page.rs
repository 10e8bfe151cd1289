//! Page-level services: blocking alerts, reloads, and sibling-script hooks.

use std::{cell::RefCell, rc::Rc};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Global functions provided by sibling page scripts.
pub enum PageHook {
    /// Wires file previews once cards exist in the DOM.
    PreviewAfterRender,
    /// Renders the empty-desktop state after a clear-all.
    BaseAfterRender,
}

impl PageHook {
    /// Global function name resolved on `window`.
    pub const fn function_name(self) -> &'static str {
        match self {
            Self::PreviewAfterRender => "previewAfterRender",
            Self::BaseAfterRender => "baseAfterRender",
        }
    }
}

/// Host service for page-level side effects.
pub trait PageService {
    /// Shows a blocking user-facing alert.
    fn alert(&self, message: &str);

    /// Reloads the whole document.
    fn reload(&self) -> Result<(), String>;

    /// Invokes a sibling-script hook. A missing hook is not an error.
    fn run_hook(&self, hook: PageHook) -> Result<(), String>;
}

#[derive(Debug, Clone, Copy, Default)]
/// Page service that ignores every request.
pub struct NoopPageService;

impl PageService for NoopPageService {
    fn alert(&self, _message: &str) {}

    fn reload(&self) -> Result<(), String> {
        Ok(())
    }

    fn run_hook(&self, _hook: PageHook) -> Result<(), String> {
        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
/// Page service recording alerts, reloads and hooks for tests.
pub struct MemoryPageService {
    alerts: Rc<RefCell<Vec<String>>>,
    reloads: Rc<RefCell<usize>>,
    hooks: Rc<RefCell<Vec<PageHook>>>,
}

impl MemoryPageService {
    /// Alert messages shown so far.
    pub fn alerts(&self) -> Vec<String> {
        self.alerts.borrow().clone()
    }

    /// Number of reloads requested.
    pub fn reloads(&self) -> usize {
        *self.reloads.borrow()
    }

    /// Hooks invoked so far.
    pub fn hooks(&self) -> Vec<PageHook> {
        self.hooks.borrow().clone()
    }
}

impl PageService for MemoryPageService {
    fn alert(&self, message: &str) {
        self.alerts.borrow_mut().push(message.to_string());
    }

    fn reload(&self) -> Result<(), String> {
        *self.reloads.borrow_mut() += 1;
        Ok(())
    }

    fn run_hook(&self, hook: PageHook) -> Result<(), String> {
        self.hooks.borrow_mut().push(hook);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_page_service_records_everything() {
        let page = MemoryPageService::default();
        let page_obj: &dyn PageService = &page;

        page_obj.alert("oops");
        page_obj.reload().expect("reload");
        page_obj
            .run_hook(PageHook::BaseAfterRender)
            .expect("hook");

        assert_eq!(page.alerts(), vec!["oops".to_string()]);
        assert_eq!(page.reloads(), 1);
        assert_eq!(page.hooks(), vec![PageHook::BaseAfterRender]);
    }

    #[test]
    fn hook_names_match_sibling_scripts() {
        assert_eq!(
            PageHook::PreviewAfterRender.function_name(),
            "previewAfterRender"
        );
        assert_eq!(PageHook::BaseAfterRender.function_name(), "baseAfterRender");
    }
}
