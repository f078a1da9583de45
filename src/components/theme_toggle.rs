use web_sys::MouseEvent;
use yew::prelude::*;

use crate::config;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    fn from_stored(value: &str) -> Option<Theme> {
        match value {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }
}

/// Stored preference wins; otherwise fall back to the OS color scheme.
pub fn resolve_initial_theme(stored: Option<&str>, prefers_dark: bool) -> Theme {
    stored
        .and_then(Theme::from_stored)
        .unwrap_or(if prefers_dark { Theme::Dark } else { Theme::Light })
}

/// Reads the persisted choice and the `prefers-color-scheme` query.
pub fn detect_initial_theme() -> Theme {
    let window = match web_sys::window() {
        Some(window) => window,
        None => return Theme::Light,
    };
    let stored = window
        .local_storage()
        .ok()
        .flatten()
        .and_then(|storage| storage.get_item(config::THEME_STORAGE_KEY).ok())
        .flatten();
    let prefers_dark = window
        .match_media("(prefers-color-scheme: dark)")
        .ok()
        .flatten()
        .map(|query| query.matches())
        .unwrap_or(false);
    resolve_initial_theme(stored.as_deref(), prefers_dark)
}

/// Sets `data-theme` on the document element and persists the choice.
pub fn apply_theme(theme: Theme) {
    if let Some(window) = web_sys::window() {
        if let Some(root) = window.document().and_then(|doc| doc.document_element()) {
            let _ = root.set_attribute("data-theme", theme.as_str());
        }
        if let Ok(Some(storage)) = window.local_storage() {
            let _ = storage.set_item(config::THEME_STORAGE_KEY, theme.as_str());
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct ThemeToggleProps {
    pub theme: Theme,
    pub on_toggle: Callback<Theme>,
}

#[function_component(ThemeToggle)]
pub fn theme_toggle(props: &ThemeToggleProps) -> Html {
    let onclick = {
        let theme = props.theme;
        let on_toggle = props.on_toggle.clone();
        Callback::from(move |_: MouseEvent| {
            on_toggle.emit(theme.toggled());
        })
    };
    html! {
        <button
            class="theme-toggle"
            aria-pressed={(props.theme == Theme::Dark).to_string()}
            title="Switch theme"
            {onclick}
        >
            { if props.theme == Theme::Dark { "☀️" } else { "🌙" } }
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stored_preference_wins_over_media_query() {
        assert_eq!(resolve_initial_theme(Some("light"), true), Theme::Light);
        assert_eq!(resolve_initial_theme(Some("dark"), false), Theme::Dark);
    }

    #[test]
    fn media_query_decides_without_a_stored_preference() {
        assert_eq!(resolve_initial_theme(None, true), Theme::Dark);
        assert_eq!(resolve_initial_theme(None, false), Theme::Light);
    }

    #[test]
    fn garbage_in_storage_falls_back_to_the_media_query() {
        assert_eq!(resolve_initial_theme(Some("solarized"), true), Theme::Dark);
        assert_eq!(resolve_initial_theme(Some(""), false), Theme::Light);
    }

    #[test]
    fn toggling_flips_between_the_two_themes() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
    }
}
