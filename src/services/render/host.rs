use std::collections::BTreeMap;

/// The page the widget draws into. Targets are addressed by stable ids.
#[cfg_attr(test, mockall::automock)]
pub trait RenderHost {
    fn has_target(&self, id: &str) -> bool;
    fn set_text(&mut self, id: &str, text: &str);
    fn set_markup(&mut self, id: &str, markup: &str);
    fn inject_styles(&mut self, css: &str);
}

/// In-memory host page. Holds whatever content was last written into each
/// registered target.
#[derive(Debug, Clone, Default)]
pub struct MemoryPage {
    targets: BTreeMap<String, String>,
    stylesheets: Vec<String>,
}

impl MemoryPage {
    pub fn new() -> Self {
        Self::default()
    }

    /// A page that carries the given target ids, all empty.
    pub fn with_targets<'a>(ids: impl IntoIterator<Item = &'a str>) -> Self {
        let mut page = Self::new();
        for id in ids {
            page.add_target(id);
        }
        page
    }

    pub fn add_target(&mut self, id: &str) {
        self.targets.entry(id.to_string()).or_default();
    }

    pub fn remove_target(&mut self, id: &str) {
        self.targets.remove(id);
    }

    pub fn content(&self, id: &str) -> Option<&str> {
        self.targets.get(id).map(String::as_str)
    }

    pub fn stylesheets(&self) -> &[String] {
        &self.stylesheets
    }
}

impl RenderHost for MemoryPage {
    fn has_target(&self, id: &str) -> bool {
        self.targets.contains_key(id)
    }

    fn set_text(&mut self, id: &str, text: &str) {
        if let Some(slot) = self.targets.get_mut(id) {
            *slot = text.to_string();
        }
    }

    fn set_markup(&mut self, id: &str, markup: &str) {
        if let Some(slot) = self.targets.get_mut(id) {
            *slot = markup.to_string();
        }
    }

    fn inject_styles(&mut self, css: &str) {
        self.stylesheets.push(css.to_string());
    }
}
