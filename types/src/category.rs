//! Inquiry category — a closed set of selectable values.

use serde::{Deserialize, Serialize};

/// The kind of inquiry being submitted.
///
/// The set is closed: the selector is built from [`Category::ALL`], so a
/// value outside the set is a programming error, not user input. Parsing a
/// foreign string (config, wire) goes through [`std::str::FromStr`] and
/// yields a hard error rather than a user-facing validation message.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// 一般的なお問い合わせ
    #[default]
    General,
    /// サポート
    Support,
    /// 不具合報告
    Bug,
    /// ご提案
    Suggestion,
}

impl Category {
    /// All legal values, in selector display order.
    pub const ALL: [Category; 4] = [
        Category::General,
        Category::Support,
        Category::Bug,
        Category::Suggestion,
    ];

    /// Wire identifier (matches the serde representation).
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::General => "general",
            Self::Support => "support",
            Self::Bug => "bug",
            Self::Suggestion => "suggestion",
        }
    }

    /// Display label shown in the selector and the confirmation step.
    pub fn label(&self) -> &'static str {
        match self {
            Self::General => "一般的なお問い合わせ",
            Self::Support => "サポート",
            Self::Bug => "不具合報告",
            Self::Suggestion => "ご提案",
        }
    }
}

impl std::str::FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "general" => Ok(Self::General),
            "support" => Ok(Self::Support),
            "bug" => Ok(Self::Bug),
            "suggestion" => Ok(Self::Suggestion),
            other => Err(UnknownCategory(other.to_string())),
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A string that names no member of the closed category set.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnknownCategory(pub String);

impl std::fmt::Display for UnknownCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown inquiry category: {}", self.0)
    }
}

impl std::error::Error for UnknownCategory {}
