use serde::Deserialize;
use serde::Serialize;

use crate::constants::STRONG_PASSWORD_MIN_LENGTH;

/// Advisory meter shown under password inputs. Never blocks a submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PasswordStrength {
    Weak,
    Medium,
    Strong,
}

impl PasswordStrength {
    pub fn label(&self) -> &'static str {
        match self {
            PasswordStrength::Weak => "弱い",
            PasswordStrength::Medium => "普通",
            PasswordStrength::Strong => "強い",
        }
    }
}

pub fn password_strength(value: &str) -> PasswordStrength {
    let classes = [
        value.chars().any(|c| c.is_ascii_digit()),
        value.chars().any(|c| c.is_ascii_lowercase()),
        value.chars().any(|c| c.is_ascii_uppercase()),
    ]
    .into_iter()
    .filter(|present| *present)
    .count();

    if classes == 3 && value.chars().count() >= STRONG_PASSWORD_MIN_LENGTH {
        PasswordStrength::Strong
    } else if classes >= 2 {
        PasswordStrength::Medium
    } else {
        PasswordStrength::Weak
    }
}
