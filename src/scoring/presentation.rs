use serde::Serialize;

use crate::types::RiskLevel;

/// Icon drawn next to a risk badge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum IconKind {
    AlertTriangle,
    Shield,
    Check,
}

impl IconKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            IconKind::AlertTriangle => "alert-triangle",
            IconKind::Shield => "shield",
            IconKind::Check => "check",
        }
    }

    /// Text glyph used by the server-rendered pages
    pub fn glyph(&self) -> &'static str {
        match self {
            IconKind::AlertTriangle => "⚠",
            IconKind::Shield => "🛡",
            IconKind::Check => "✓",
        }
    }
}

/// Visual category for a risk level, shared by every place a result shows up
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Presentation {
    pub color_token: &'static str,
    pub badge_token: &'static str,
    pub icon: IconKind,
}

// No fallback arm: a new level must pick its own styling.
pub fn presentation_for(level: RiskLevel) -> Presentation {
    match level {
        RiskLevel::High => Presentation {
            color_token: "text-risk-high",
            badge_token: "bg-risk-high/10 border-risk-high/30",
            icon: IconKind::AlertTriangle,
        },
        RiskLevel::Medium => Presentation {
            color_token: "text-risk-medium",
            badge_token: "bg-risk-medium/10 border-risk-medium/30",
            icon: IconKind::Shield,
        },
        RiskLevel::Low => Presentation {
            color_token: "text-risk-low",
            badge_token: "bg-risk-low/10 border-risk-low/30",
            icon: IconKind::Check,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_level_is_distinct() {
        let high = presentation_for(RiskLevel::High);
        let medium = presentation_for(RiskLevel::Medium);
        let low = presentation_for(RiskLevel::Low);

        assert_ne!(high, medium);
        assert_ne!(medium, low);
        assert_eq!(high.icon, IconKind::AlertTriangle);
        assert_eq!(low.color_token, "text-risk-low");
    }

    #[test]
    fn test_serialized_shape() {
        let json = serde_json::to_value(presentation_for(RiskLevel::Medium)).unwrap();
        assert_eq!(json["colorToken"], "text-risk-medium");
        assert_eq!(json["icon"], "shield");
    }
}
