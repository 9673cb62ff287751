use std::env;

/// Whether the terminal advertises a dark background.
///
/// Reads `COLORFGBG` (set by rxvt, Konsole, iTerm2 and others) as `fg;bg` or
/// `fg;default;bg`. Anything missing or unparsable counts as light.
pub fn terminal_prefers_dark() -> bool {
    colorfgbg_is_dark(env::var("COLORFGBG").ok().as_deref())
}

pub(crate) fn colorfgbg_is_dark(value: Option<&str>) -> bool {
    let Some(value) = value else {
        return false;
    };

    // Background is the last field; ANSI 0-6 and 8 are the dark colors
    match value.rsplit(';').next().and_then(|bg| bg.trim().parse::<u8>().ok()) {
        Some(bg) => bg <= 6 || bg == 8,
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_colorfgbg_dark_background() {
        assert!(colorfgbg_is_dark(Some("15;0")));
        assert!(colorfgbg_is_dark(Some("7;default;8")));
    }

    #[test]
    fn test_colorfgbg_light_background() {
        assert!(!colorfgbg_is_dark(Some("0;15")));
        assert!(!colorfgbg_is_dark(Some("0;7")));
    }

    #[test]
    fn test_colorfgbg_missing_or_garbage_defaults_to_light() {
        assert!(!colorfgbg_is_dark(None));
        assert!(!colorfgbg_is_dark(Some("")));
        assert!(!colorfgbg_is_dark(Some("15;default")));
    }
}
