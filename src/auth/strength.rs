//! Password strength scoring.
//!
//! Four criteria are worth 25 points each: at least 8 characters, an ASCII
//! uppercase letter, an ASCII digit, and one of [`SPECIAL_CHARS`].

#[cfg(test)]
#[path = "strength_test.rs"]
mod strength_test;

/// Symbols counted toward the special-character criterion.
pub const SPECIAL_CHARS: &str = "!@#$%^&*(),.?\":{}|<>";

/// Minimum length for the length criterion and for sign-up passwords.
pub const MIN_PASSWORD_LEN: usize = 8;

/// Sign-up is refused below this score.
pub const MIN_SIGN_UP_STRENGTH: u8 = 50;

const POINTS_PER_CRITERION: u8 = 25;

/// Which of the four criteria a password meets.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PasswordCriteria {
    pub min_length: bool,
    pub uppercase: bool,
    pub digit: bool,
    pub special: bool,
}

impl PasswordCriteria {
    #[must_use]
    pub fn evaluate(password: &str) -> Self {
        Self {
            min_length: password.chars().count() >= MIN_PASSWORD_LEN,
            uppercase: password.chars().any(|c| c.is_ascii_uppercase()),
            digit: password.chars().any(|c| c.is_ascii_digit()),
            special: password.chars().any(|c| SPECIAL_CHARS.contains(c)),
        }
    }

    #[must_use]
    pub fn satisfied(self) -> u8 {
        [self.min_length, self.uppercase, self.digit, self.special]
            .into_iter()
            .map(u8::from)
            .sum()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum StrengthLabel {
    Weak,
    Fair,
    Good,
    Strong,
}

impl StrengthLabel {
    #[must_use]
    pub fn from_score(value: u8) -> Self {
        match value {
            0..=25 => Self::Weak,
            26..=50 => Self::Fair,
            51..=75 => Self::Good,
            _ => Self::Strong,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Weak => "Weak",
            Self::Fair => "Fair",
            Self::Good => "Good",
            Self::Strong => "Strong",
        }
    }

    /// Fill class of the meter bar.
    #[must_use]
    pub fn bar_class(self) -> &'static str {
        match self {
            Self::Weak => "bg-red-500",
            Self::Fair => "bg-yellow-500",
            Self::Good => "bg-blue-500",
            Self::Strong => "bg-green-500",
        }
    }

    /// Text colour class of the label.
    #[must_use]
    pub fn text_class(self) -> &'static str {
        match self {
            Self::Weak => "text-red-500",
            Self::Fair => "text-yellow-500",
            Self::Good => "text-blue-500",
            Self::Strong => "text-green-500",
        }
    }
}

/// Score in `0..=100` plus its label.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PasswordStrength {
    pub value: u8,
    pub label: StrengthLabel,
}

#[must_use]
pub fn password_strength(password: &str) -> PasswordStrength {
    let value = PasswordCriteria::evaluate(password).satisfied() * POINTS_PER_CRITERION;
    PasswordStrength { value, label: StrengthLabel::from_score(value) }
}
