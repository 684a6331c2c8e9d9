//! Writing direction of question and answer text.

use std::sync::OnceLock;

use regex::Regex;

/// Hebrew through N'Ko, plus the Hebrew and Arabic presentation forms.
const RTL_PATTERN: &str = r"[\x{0591}-\x{07FF}\x{FB1D}-\x{FDFD}\x{FE70}-\x{FEFC}]";

static RTL_REGEX: OnceLock<Regex> = OnceLock::new();

fn rtl_regex() -> &'static Regex {
    RTL_REGEX.get_or_init(|| Regex::new(RTL_PATTERN).expect("valid regex pattern"))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextDirection {
    Ltr,
    Rtl,
}

impl TextDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            TextDirection::Ltr => "ltr",
            TextDirection::Rtl => "rtl",
        }
    }

    pub fn is_rtl(&self) -> bool {
        matches!(self, TextDirection::Rtl)
    }
}

impl std::fmt::Display for TextDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Right-to-left as soon as any right-to-left script character appears.
pub fn detect_direction(text: &str) -> TextDirection {
    if rtl_regex().is_match(text) {
        TextDirection::Rtl
    } else {
        TextDirection::Ltr
    }
}
