//! UI Slice - 搜索框、当前标签页、侧边栏

use serde::Serialize;

/// 初始标签页
pub const DEFAULT_TAB: &str = "home";

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UiSlice {
    pub search_input: String,
    pub selected_tab: String,
    pub sidebar_open: bool,
}

impl Default for UiSlice {
    fn default() -> Self {
        Self {
            search_input: String::new(),
            selected_tab: DEFAULT_TAB.to_string(),
            sidebar_open: false,
        }
    }
}

impl UiSlice {
    pub fn set_search_input(&mut self, input: String) {
        self.search_input = input;
    }

    pub fn set_selected_tab(&mut self, tab: String) {
        self.selected_tab = tab;
    }

    pub fn set_sidebar_open(&mut self, open: bool) {
        self.sidebar_open = open;
    }

    pub fn toggle_sidebar(&mut self) {
        self.sidebar_open = !self.sidebar_open;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_sidebar() {
        let mut slice = UiSlice::default();
        assert_eq!(slice.selected_tab, "home");

        slice.toggle_sidebar();
        assert!(slice.sidebar_open);
        slice.toggle_sidebar();
        assert!(!slice.sidebar_open);
    }
}
