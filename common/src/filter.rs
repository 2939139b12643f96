//! スタイルフィルタ
//!
//! プロンプトに付加する固定のスタイル修飾子。ワイヤ上は表示名（"Neon Punk"等）で表現する。

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StyleFilter {
    Vintage,
    Minimalist,
    Psychedelic,
    Abstract,
    #[serde(rename = "Neon Punk")]
    NeonPunk,
}

impl StyleFilter {
    /// 表示順
    pub const ALL: [StyleFilter; 5] = [
        StyleFilter::Vintage,
        StyleFilter::Minimalist,
        StyleFilter::Psychedelic,
        StyleFilter::Abstract,
        StyleFilter::NeonPunk,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            StyleFilter::Vintage => "Vintage",
            StyleFilter::Minimalist => "Minimalist",
            StyleFilter::Psychedelic => "Psychedelic",
            StyleFilter::Abstract => "Abstract",
            StyleFilter::NeonPunk => "Neon Punk",
        }
    }
}

impl fmt::Display for StyleFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for StyleFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .to_lowercase()
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '_'))
            .collect();

        match normalized.as_str() {
            "vintage" => Ok(StyleFilter::Vintage),
            "minimalist" => Ok(StyleFilter::Minimalist),
            "psychedelic" => Ok(StyleFilter::Psychedelic),
            "abstract" => Ok(StyleFilter::Abstract),
            "neonpunk" => Ok(StyleFilter::NeonPunk),
            _ => Err(format!(
                "Unknown filter: {}. Use one of: {}",
                s,
                StyleFilter::ALL.map(|f| f.label()).join(", ")
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str_accepts_label_variants() {
        assert_eq!("Vintage".parse::<StyleFilter>(), Ok(StyleFilter::Vintage));
        assert_eq!("neon punk".parse::<StyleFilter>(), Ok(StyleFilter::NeonPunk));
        assert_eq!("neon-punk".parse::<StyleFilter>(), Ok(StyleFilter::NeonPunk));
        assert_eq!("NEON_PUNK".parse::<StyleFilter>(), Ok(StyleFilter::NeonPunk));
    }

    #[test]
    fn test_from_str_unknown() {
        let err = "sepia".parse::<StyleFilter>().unwrap_err();
        assert!(err.contains("sepia"));
        assert!(err.contains("Neon Punk"));
    }

    #[test]
    fn test_wire_names_match_labels() {
        for filter in StyleFilter::ALL {
            let json = serde_json::to_string(&filter).expect("シリアライズ失敗");
            assert_eq!(json, format!("\"{}\"", filter.label()));
        }
    }

    #[test]
    fn test_deserialize_unknown_filter_fails() {
        assert!(serde_json::from_str::<StyleFilter>("\"Sepia\"").is_err());
    }
}
