use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Local storage key holding the preference.
pub const STORAGE_KEY: &str = "theme";
/// Class set on the root element while the dark theme is active.
pub const DARK_CLASS: &str = "dark";

const DARK_SPELLINGS: [&str; 2] = ["dark", "theme-dark"];
const LIGHT_SPELLINGS: [&str; 2] = ["light", "theme-light"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown theme: {0}")]
pub struct UnknownTheme(pub String);

impl Theme {
    pub fn is_dark(&self) -> bool {
        matches!(self, Self::Dark)
    }

    pub fn toggled(&self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }

    /// Unset or unreadable values fall back to dark.
    pub fn from_stored(value: Option<&str>) -> Self {
        value.and_then(|v| v.parse().ok()).unwrap_or_default()
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = UnknownTheme;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let v = s.trim().to_ascii_lowercase();
        if DARK_SPELLINGS.contains(&v.as_str()) {
            Ok(Self::Dark)
        } else if LIGHT_SPELLINGS.contains(&v.as_str()) {
            Ok(Self::Light)
        } else {
            Err(UnknownTheme(s.to_string()))
        }
    }
}

/// Inline script run before hydration so the first paint already has the
/// right theme class. Anything but a light spelling counts as dark, same as
/// [`Theme::from_stored`].
pub fn bootstrap_script() -> String {
    let light = LIGHT_SPELLINGS
        .iter()
        .map(|s| format!("'{s}'"))
        .collect::<Vec<_>>()
        .join(",");
    format!(
        "(function(){{try{{var s=localStorage.getItem('{STORAGE_KEY}');\
         if(!s||[{light}].indexOf(s.trim().toLowerCase())<0){{document.documentElement.classList.add('{DARK_CLASS}');}}\
         }}catch(e){{document.documentElement.classList.add('{DARK_CLASS}');}}}})();"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_current_and_legacy() {
        assert_eq!("dark".parse::<Theme>(), Ok(Theme::Dark));
        assert_eq!("theme-dark".parse::<Theme>(), Ok(Theme::Dark));
        assert_eq!("Light".parse::<Theme>(), Ok(Theme::Light));
        assert_eq!("theme-light".parse::<Theme>(), Ok(Theme::Light));
        assert!("blue".parse::<Theme>().is_err());
    }

    #[test]
    fn test_default_is_dark() {
        assert_eq!(Theme::default(), Theme::Dark);
        assert_eq!(Theme::from_stored(None), Theme::Dark);
        assert_eq!(Theme::from_stored(Some("garbage")), Theme::Dark);
        assert_eq!(Theme::from_stored(Some("light")), Theme::Light);
    }

    #[test]
    fn test_display_roundtrips_and_toggles() {
        for t in [Theme::Dark, Theme::Light] {
            assert_eq!(t.to_string().parse::<Theme>(), Ok(t));
            assert_eq!(t.toggled().toggled(), t);
        }
        assert!(!Theme::Dark.toggled().is_dark());
    }

    #[test]
    fn test_bootstrap_script_uses_constants() {
        let script = bootstrap_script();
        assert!(script.contains("localStorage.getItem('theme')"));
        assert!(script.contains("'theme-light'"));
        assert!(script.contains("classList.add('dark')"));
        assert!(!script.contains("'theme-dark'"));
    }
}
