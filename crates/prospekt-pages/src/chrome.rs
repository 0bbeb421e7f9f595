//! Page chrome: theme toggle, mobile menu, scroll-dependent state
//!
//! Everything outside the form that reacts to user input. Like the form
//! controllers this is headless: the rendering layer reads the flags and
//! applies them to the document.

use std::collections::HashMap;

/// Storage key for the persisted theme choice.
pub const THEME_KEY: &str = "theme";

/// Scroll offset past which the header casts a shadow.
pub const HEADER_SHADOW_OFFSET: f64 = 10.0;

/// Scroll offset past which the back-to-top button appears.
pub const BACK_TO_TOP_OFFSET: f64 = 300.0;

/// Gap kept between the header and a scrolled-to section.
const SCROLL_MARGIN: f64 = 20.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
	#[default]
	Light,
	Dark,
}

impl Theme {
	pub fn as_str(&self) -> &'static str {
		match self {
			Theme::Light => "light",
			Theme::Dark => "dark",
		}
	}

	/// Parse a stored value. Anything unrecognized falls back to light,
	/// so a corrupted store never breaks the page.
	pub fn parse(value: &str) -> Self {
		match value {
			"dark" => Theme::Dark,
			_ => Theme::Light,
		}
	}

	pub fn toggled(&self) -> Self {
		match self {
			Theme::Light => Theme::Dark,
			Theme::Dark => Theme::Light,
		}
	}
}

/// Key-value persistence for user preferences.
///
/// Browsers back this with localStorage; tests with
/// [`MemoryPreferenceStore`].
pub trait PreferenceStore {
	fn get(&self, key: &str) -> Option<String>;
	fn set(&mut self, key: &str, value: &str);
}

/// In-memory preference store.
#[derive(Debug, Default)]
pub struct MemoryPreferenceStore {
	entries: HashMap<String, String>,
}

impl MemoryPreferenceStore {
	pub fn new() -> Self {
		Self::default()
	}
}

impl PreferenceStore for MemoryPreferenceStore {
	fn get(&self, key: &str) -> Option<String> {
		self.entries.get(key).cloned()
	}

	fn set(&mut self, key: &str, value: &str) {
		self.entries.insert(key.to_string(), value.to_string());
	}
}

/// State of the page chrome.
#[derive(Debug)]
pub struct UiController<S: PreferenceStore> {
	store: S,
	theme: Theme,
	menu_open: bool,
	header_shadow: bool,
	back_to_top_visible: bool,
}

impl<S: PreferenceStore> UiController<S> {
	/// Restore the persisted theme (falling back to light) and start with
	/// the menu closed.
	pub fn new(store: S) -> Self {
		let theme = store
			.get(THEME_KEY)
			.map(|v| Theme::parse(&v))
			.unwrap_or_default();
		Self {
			store,
			theme,
			menu_open: false,
			header_shadow: false,
			back_to_top_visible: false,
		}
	}

	pub fn theme(&self) -> Theme {
		self.theme
	}

	/// Flip the theme and persist the choice.
	pub fn toggle_theme(&mut self) -> Theme {
		self.theme = self.theme.toggled();
		self.store.set(THEME_KEY, self.theme.as_str());
		self.theme
	}

	pub fn menu_open(&self) -> bool {
		self.menu_open
	}

	/// Body scrolling is locked while the mobile menu covers the page.
	pub fn body_scroll_locked(&self) -> bool {
		self.menu_open
	}

	pub fn toggle_menu(&mut self) {
		self.menu_open = !self.menu_open;
	}

	/// Following a nav link closes the menu.
	pub fn on_nav_link_click(&mut self) {
		self.menu_open = false;
	}

	/// A click outside the open menu closes it.
	pub fn on_outside_click(&mut self) {
		self.menu_open = false;
	}

	pub fn on_escape(&mut self) {
		self.menu_open = false;
	}

	pub fn header_shadow(&self) -> bool {
		self.header_shadow
	}

	pub fn back_to_top_visible(&self) -> bool {
		self.back_to_top_visible
	}

	/// Recompute scroll-dependent flags from the current page offset.
	pub fn on_scroll(&mut self, page_offset: f64) {
		self.header_shadow = page_offset > HEADER_SHADOW_OFFSET;
		self.back_to_top_visible = page_offset > BACK_TO_TOP_OFFSET;
	}
}

/// Absolute scroll destination for a smooth in-page jump: the target's
/// top, corrected for the fixed header plus a small margin.
pub fn scroll_target(element_top: f64, page_offset: f64, header_height: f64) -> f64 {
	element_top + page_offset - header_height - SCROLL_MARGIN
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[test]
	fn test_theme_restored_from_store() {
		let mut store = MemoryPreferenceStore::new();
		store.set(THEME_KEY, "dark");

		let ui = UiController::new(store);
		assert_eq!(ui.theme(), Theme::Dark);
	}

	#[rstest]
	#[case("light", Theme::Light)]
	#[case("dark", Theme::Dark)]
	#[case("solarized", Theme::Light)]
	#[case("", Theme::Light)]
	fn test_theme_parse_falls_back_to_light(#[case] stored: &str, #[case] expected: Theme) {
		assert_eq!(Theme::parse(stored), expected);
	}

	#[test]
	fn test_toggle_theme_persists() {
		let mut ui = UiController::new(MemoryPreferenceStore::new());
		assert_eq!(ui.theme(), Theme::Light);

		assert_eq!(ui.toggle_theme(), Theme::Dark);
		assert_eq!(ui.store.get(THEME_KEY).as_deref(), Some("dark"));

		assert_eq!(ui.toggle_theme(), Theme::Light);
		assert_eq!(ui.store.get(THEME_KEY).as_deref(), Some("light"));
	}

	#[test]
	fn test_menu_locks_body_scroll() {
		let mut ui = UiController::new(MemoryPreferenceStore::new());
		ui.toggle_menu();
		assert!(ui.menu_open());
		assert!(ui.body_scroll_locked());

		ui.on_escape();
		assert!(!ui.menu_open());
		assert!(!ui.body_scroll_locked());
	}

	#[rstest]
	#[case(0.0, false, false)]
	#[case(10.0, false, false)]
	#[case(11.0, true, false)]
	#[case(300.0, true, false)]
	#[case(301.0, true, true)]
	fn test_scroll_thresholds(
		#[case] offset: f64,
		#[case] shadow: bool,
		#[case] back_to_top: bool,
	) {
		let mut ui = UiController::new(MemoryPreferenceStore::new());
		ui.on_scroll(offset);
		assert_eq!(ui.header_shadow(), shadow);
		assert_eq!(ui.back_to_top_visible(), back_to_top);
	}

	#[test]
	fn test_scroll_target_accounts_for_header() {
		// Element 500px down the viewport, page already scrolled 200px,
		// 80px fixed header.
		assert_eq!(scroll_target(500.0, 200.0, 80.0), 600.0);
	}
}
