//! Application areas a project can be filed under.

use serde::{Deserialize, Serialize};

use crate::constants::LANG_ZH_CN;
use crate::error::DomainError;

/// Business area a project serves.
///
/// Each area carries a Chinese and an English label; which one is shown
/// depends on the caller's `Content-Language`. Serialized as the English
/// label; either label or the variant name is accepted on input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum ApplicationArea {
    Operation,
    Analysis,
    Product,
    RiskControl,
    Marketing,
    Other,
}

impl ApplicationArea {
    /// All areas in display order
    pub const ALL: [ApplicationArea; 6] = [
        ApplicationArea::Operation,
        ApplicationArea::Analysis,
        ApplicationArea::Product,
        ApplicationArea::RiskControl,
        ApplicationArea::Marketing,
        ApplicationArea::Other,
    ];

    /// Chinese label
    pub fn zh_name(&self) -> &'static str {
        match self {
            ApplicationArea::Operation => "运营",
            ApplicationArea::Analysis => "分析",
            ApplicationArea::Product => "产品",
            ApplicationArea::RiskControl => "风控",
            ApplicationArea::Marketing => "营销",
            ApplicationArea::Other => "其他",
        }
    }

    /// English label
    pub fn en_name(&self) -> &'static str {
        match self {
            ApplicationArea::Operation => "Operation",
            ApplicationArea::Analysis => "Analysis",
            ApplicationArea::Product => "Product",
            ApplicationArea::RiskControl => "Risk Control",
            ApplicationArea::Marketing => "Marketing",
            ApplicationArea::Other => "Other",
        }
    }

    /// Label for the given language tag. Only an exact `zh-CN` (after trimming)
    /// selects the Chinese label.
    pub fn label(&self, lang: Option<&str>) -> &'static str {
        match lang.map(str::trim) {
            Some(LANG_ZH_CN) => self.zh_name(),
            _ => self.en_name(),
        }
    }

    /// Labels of every area for the given language tag.
    pub fn labels(lang: Option<&str>) -> Vec<&'static str> {
        Self::ALL.iter().map(|area| area.label(lang)).collect()
    }
}

impl std::str::FromStr for ApplicationArea {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|area| {
                area.en_name().eq_ignore_ascii_case(s)
                    || area.zh_name() == s
                    || format!("{:?}", area).eq_ignore_ascii_case(s)
            })
            .ok_or_else(|| DomainError::UnknownApplicationArea(s.to_string()))
    }
}

impl TryFrom<String> for ApplicationArea {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ApplicationArea> for String {
    fn from(area: ApplicationArea) -> Self {
        area.en_name().to_string()
    }
}
