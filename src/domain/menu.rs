//! Menu choices and numeric input shared by the logs

use crate::error::{QuestlogError, Result};

/// Map a 1-based menu number or a case-insensitive name onto one of `options`.
///
/// A trailing `!` is ignored on both sides.
pub fn menu_choice(options: &[&'static str], choice: &str) -> Option<&'static str> {
    let choice = choice.trim();
    if let Ok(n) = choice.parse::<usize>() {
        return n.checked_sub(1).and_then(|i| options.get(i).copied());
    }
    options.iter().copied().find(|option| {
        option
            .trim_end_matches('!')
            .eq_ignore_ascii_case(choice.trim_end_matches('!'))
    })
}

/// Like [`menu_choice`], but an unknown choice is an input error listing the options
pub fn require_choice(label: &str, options: &[&'static str], choice: &str) -> Result<&'static str> {
    menu_choice(options, choice).ok_or_else(|| {
        QuestlogError::InvalidInput(format!(
            "Invalid {} '{}'. Choose one of: {}",
            label,
            choice.trim(),
            options.join(", ")
        ))
    })
}

/// A finite amount greater than zero
pub fn require_positive(label: &str, value: f64) -> Result<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(QuestlogError::InvalidInput(format!(
            "{} must be a positive number, got {}",
            label, value
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SIZES: &[&str] = &["Small", "Large!"];

    #[test]
    fn test_menu_choice_by_number_or_name() {
        assert_eq!(menu_choice(SIZES, "1"), Some("Small"));
        assert_eq!(menu_choice(SIZES, " large "), Some("Large!"));
        assert_eq!(menu_choice(SIZES, "LARGE!"), Some("Large!"));
        assert_eq!(menu_choice(SIZES, "0"), None);
        assert_eq!(menu_choice(SIZES, "3"), None);
        assert_eq!(menu_choice(SIZES, "medium"), None);
    }

    #[test]
    fn test_require_choice_lists_options() {
        let err = require_choice("size", SIZES, "huge").unwrap_err();
        assert!(err.to_string().contains("Small, Large!"));
    }

    #[test]
    fn test_require_positive() {
        assert_eq!(require_positive("Servings", 1.5).unwrap(), 1.5);
        assert!(require_positive("Servings", 0.0).is_err());
        assert!(require_positive("Servings", -2.0).is_err());
        assert!(require_positive("Servings", f64::NAN).is_err());
        assert!(require_positive("Servings", f64::INFINITY).is_err());
    }
}
