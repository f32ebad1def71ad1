use serde::Deserialize;

/// Percentages at which a budget bar changes colour. Both bounds are inclusive
/// of the more severe tier.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct BudgetThresholds {
    pub warning: f64,
    pub danger: f64,
}

impl Default for BudgetThresholds {
    fn default() -> Self {
        Self {
            warning: 80.0,
            danger: 100.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BudgetSeverity {
    Success,
    Warning,
    Danger,
}

impl BudgetSeverity {
    pub const ALL: [BudgetSeverity; 3] = [
        BudgetSeverity::Success,
        BudgetSeverity::Warning,
        BudgetSeverity::Danger,
    ];

    pub fn classify(percentage: f64, thresholds: &BudgetThresholds) -> Self {
        if percentage >= thresholds.danger {
            BudgetSeverity::Danger
        } else if percentage >= thresholds.warning {
            BudgetSeverity::Warning
        } else {
            BudgetSeverity::Success
        }
    }

    pub fn from_percentage(percentage: f64) -> Self {
        Self::classify(percentage, &BudgetThresholds::default())
    }

    pub fn class_name(self) -> &'static str {
        match self {
            BudgetSeverity::Success => "bg-success",
            BudgetSeverity::Warning => "bg-warning",
            BudgetSeverity::Danger => "bg-danger",
        }
    }

    pub fn all_class_names() -> [&'static str; 3] {
        Self::ALL.map(BudgetSeverity::class_name)
    }
}

/// Read the leading number of an attribute value, the way `parseFloat` does:
/// `"85%"` is 85, `"abc"` is NaN.
///
/// NaN compares below every threshold, so unreadable values land in the
/// success tier.
pub fn parse_percentage(raw: &str) -> f64 {
    let trimmed = raw.trim_start();
    let numeric_len = trimmed
        .char_indices()
        .take_while(|(_, ch)| ch.is_ascii_digit() || matches!(ch, '+' | '-' | '.' | 'e' | 'E'))
        .map(|(index, ch)| index + ch.len_utf8())
        .last()
        .unwrap_or(0);

    (1..=numeric_len)
        .rev()
        .find_map(|end| trimmed[..end].parse::<f64>().ok())
        .unwrap_or(f64::NAN)
}
