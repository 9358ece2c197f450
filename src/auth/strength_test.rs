use super::*;

#[test]
fn empty_password_is_zero_weak() {
    assert_eq!(password_strength(""), PasswordStrength { value: 0, label: StrengthLabel::Weak });
}

#[test]
fn all_criteria_is_strong() {
    let s = password_strength("Passw0rd!");
    assert_eq!(s.value, 100);
    assert_eq!(s.label, StrengthLabel::Strong);
    assert_eq!(s.label.as_str(), "Strong");
}

#[test]
fn each_criterion_alone_scores_25() {
    for p in ["abcdefgh", "A", "1", "!"] {
        assert_eq!(password_strength(p).value, 25, "password {p:?}");
        assert_eq!(password_strength(p).label, StrengthLabel::Weak);
    }
}

#[test]
fn label_thresholds() {
    assert_eq!(password_strength("Ab").label, StrengthLabel::Weak);
    assert_eq!(password_strength("A1").label, StrengthLabel::Fair);
    assert_eq!(password_strength("A1!").label, StrengthLabel::Good);
    assert_eq!(password_strength("Abcdefg1!").label, StrengthLabel::Strong);
}

#[test]
fn from_score_boundaries() {
    assert_eq!(StrengthLabel::from_score(25), StrengthLabel::Weak);
    assert_eq!(StrengthLabel::from_score(26), StrengthLabel::Fair);
    assert_eq!(StrengthLabel::from_score(50), StrengthLabel::Fair);
    assert_eq!(StrengthLabel::from_score(75), StrengthLabel::Good);
    assert_eq!(StrengthLabel::from_score(76), StrengthLabel::Strong);
}

#[test]
fn score_is_monotone_in_satisfied_criteria() {
    // Adding criteria one at a time never lowers the score or the label.
    let steps = ["a", "aaaaaaaa", "Aaaaaaaa", "Aaaaaaa1", "Aaaaaa1!"];
    let scores: Vec<PasswordStrength> = steps.iter().map(|p| password_strength(p)).collect();
    for pair in scores.windows(2) {
        assert!(pair[0].value <= pair[1].value);
        assert!(pair[0].label <= pair[1].label);
    }
    assert_eq!(scores.last().unwrap().value, 100);
}

#[test]
fn score_is_25_per_satisfied_criterion() {
    for p in ["", "x", "Xy1", "long enough", "LONG!", "Aa1!aaaa", "ñññññññÑ"] {
        let expected = PasswordCriteria::evaluate(p).satisfied() * 25;
        assert_eq!(password_strength(p).value, expected, "password {p:?}");
    }
}

#[test]
fn uppercase_and_digit_are_ascii_only() {
    let c = PasswordCriteria::evaluate("Ñ٣");
    assert!(!c.uppercase);
    assert!(!c.digit);
}

#[test]
fn length_counts_characters_not_bytes() {
    assert!(!PasswordCriteria::evaluate("ééé").min_length);
    assert!(PasswordCriteria::evaluate("éééééééé").min_length);
}

#[test]
fn every_listed_symbol_counts_as_special() {
    for c in SPECIAL_CHARS.chars() {
        assert!(PasswordCriteria::evaluate(&c.to_string()).special, "symbol {c:?}");
    }
    assert!(!PasswordCriteria::evaluate("-_=+").special);
}

#[test]
fn classes_follow_label() {
    assert_eq!(StrengthLabel::Weak.bar_class(), "bg-red-500");
    assert_eq!(StrengthLabel::Good.text_class(), "text-blue-500");
}
