//! Filters that restrict which events are shown

use std::collections::BTreeSet;

use crate::Event;


/// Which events should be shown, according to their module and category.
///
/// An empty selection does not filter anything out. When both a module and a category selection exist,
/// an event must match both of them.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EventFilter {
    modules: BTreeSet<String>,
    categories: BTreeSet<String>,
}

impl EventFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected_modules(&self) -> &BTreeSet<String>    { &self.modules }
    pub fn selected_categories(&self) -> &BTreeSet<String> { &self.categories }

    /// Select this module if it was not, unselect it otherwise
    pub fn toggle_module(&mut self, module: &str) {
        toggle(&mut self.modules, module);
    }

    /// Select this category if it was not, unselect it otherwise
    pub fn toggle_category(&mut self, category: &str) {
        toggle(&mut self.categories, category);
    }

    pub fn clear_modules(&mut self) {
        self.modules.clear();
    }

    pub fn clear_categories(&mut self) {
        self.categories.clear();
    }

    pub fn clear(&mut self) {
        self.clear_modules();
        self.clear_categories();
    }

    /// Whether any module or category is selected
    pub fn is_active(&self) -> bool {
        self.modules.is_empty() == false || self.categories.is_empty() == false
    }

    pub fn matches(&self, event: &Event) -> bool {
        (self.modules.is_empty() || self.modules.contains(event.module()))
            && (self.categories.is_empty() || self.categories.contains(event.category()))
    }

    /// Returns the matching events, in their original order
    pub fn apply<'a, I>(&self, events: I) -> Vec<&'a Event>
    where
        I: IntoIterator<Item = &'a Event>,
    {
        events.into_iter()
            .filter(|event| self.matches(event))
            .collect()
    }
}

fn toggle(set: &mut BTreeSet<String>, value: &str) {
    if set.remove(value) == false {
        set.insert(value.to_string());
    }
}
