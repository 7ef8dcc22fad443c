//! Form validation and list parsing shared by the pages.
//!
//! Validators return the message shown to the user on the first failing rule.

pub type Validation = Result<(), String>;

pub const MIN_PASSWORD_LEN: usize = 6;

/// Characters of bookmark content shown in the list
pub const PREVIEW_CHARS: usize = 100;

fn blank(value: &str) -> bool {
    value.trim().is_empty()
}

fn looks_like_email(value: &str) -> bool {
    value.contains('@')
}

pub fn validate_login(email: &str, password: &str) -> Validation {
    if blank(email) || blank(password) {
        return Err("Please enter both email and password".to_string());
    }
    if !looks_like_email(email) {
        return Err("Please enter a valid email address".to_string());
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err("Password must be at least 6 characters".to_string());
    }
    Ok(())
}

#[derive(Debug, Clone, Default)]
pub struct RegisterForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub agree_terms: bool,
}

pub fn validate_register(form: &RegisterForm) -> Validation {
    if blank(&form.name) {
        return Err("Please enter your full name".to_string());
    }
    if blank(&form.email) {
        return Err("Please enter your email".to_string());
    }
    if !looks_like_email(&form.email) {
        return Err("Please enter a valid email address".to_string());
    }
    if form.password.is_empty() {
        return Err("Please enter a password".to_string());
    }
    if form.password.chars().count() < MIN_PASSWORD_LEN {
        return Err("Password must be at least 6 characters".to_string());
    }
    if form.password != form.confirm_password {
        return Err("Passwords do not match".to_string());
    }
    if !form.agree_terms {
        return Err("Please agree to the Terms of Service".to_string());
    }
    Ok(())
}

pub fn validate_bookmark(title: &str, content: &str) -> Validation {
    if blank(title) || blank(content) {
        return Err("Please fill all fields".to_string());
    }
    Ok(())
}

/// Parse a production cost; rejects negatives, NaN and infinities
pub fn parse_cost(raw: &str) -> Result<f64, String> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|c| c.is_finite() && *c >= 0.0)
        .ok_or_else(|| "Please enter a valid production cost".to_string())
}

pub fn validate_pricing(product_name: &str, cost: &str) -> Result<f64, String> {
    if blank(product_name) {
        return Err("Please enter a product name".to_string());
    }
    parse_cost(cost)
}

pub fn validate_quick_design(description: &str) -> Validation {
    if blank(description) {
        return Err("Please describe your design".to_string());
    }
    Ok(())
}

/// Parse the fabric budget range, both ends inclusive
pub fn parse_budget(min: &str, max: &str) -> Result<(f64, f64), String> {
    let parse = |raw: &str| {
        raw.trim()
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite() && *v >= 0.0)
    };
    match (parse(min), parse(max)) {
        (Some(lo), Some(hi)) if lo <= hi => Ok((lo, hi)),
        (Some(_), Some(_)) => Err("Minimum budget cannot exceed maximum budget".to_string()),
        _ => Err("Please enter a valid budget".to_string()),
    }
}

/// `"a, b,,c "` -> `["a", "b", "c"]`
pub fn split_csv(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

pub fn split_whitespace_tags(raw: &str) -> Vec<String> {
    raw.split_whitespace().map(str::to_string).collect()
}

/// First `max` characters, with an ellipsis when something was cut
pub fn truncate_preview(text: &str, max: usize) -> String {
    match text.char_indices().nth(max) {
        Some((byte, _)) => format!("{}...", &text[..byte]),
        None => text.to_string(),
    }
}

/// `0.873` -> `"87%"`
pub fn ratio_percent(ratio: f64) -> String {
    format!("{:.0}%", (ratio * 100.0).clamp(0.0, 100.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_register() -> RegisterForm {
        RegisterForm {
            name: "Meera Rao".to_string(),
            email: "meera@example.com".to_string(),
            password: "secret1".to_string(),
            confirm_password: "secret1".to_string(),
            agree_terms: true,
        }
    }

    // ========================================================================
    // Login
    // ========================================================================

    #[test]
    fn test_login_requires_both_fields() {
        assert_eq!(
            validate_login("  ", "secret1").unwrap_err(),
            "Please enter both email and password"
        );
        assert_eq!(
            validate_login("a@b.c", "").unwrap_err(),
            "Please enter both email and password"
        );
    }

    #[test]
    fn test_login_email_and_password_rules() {
        assert_eq!(
            validate_login("meera", "secret1").unwrap_err(),
            "Please enter a valid email address"
        );
        assert_eq!(
            validate_login("a@b.c", "12345").unwrap_err(),
            "Password must be at least 6 characters"
        );
        assert!(validate_login("a@b.c", "123456").is_ok());
    }

    // ========================================================================
    // Register
    // ========================================================================

    #[test]
    fn test_register_valid() {
        assert!(validate_register(&valid_register()).is_ok());
    }

    #[test]
    fn test_register_messages_in_order() {
        let cases: Vec<(Box<dyn Fn(&mut RegisterForm)>, &str)> = vec![
            (Box::new(|f| f.name.clear()), "Please enter your full name"),
            (Box::new(|f| f.email = " ".into()), "Please enter your email"),
            (
                Box::new(|f| f.email = "meera.example.com".into()),
                "Please enter a valid email address",
            ),
            (Box::new(|f| f.password.clear()), "Please enter a password"),
            (
                Box::new(|f| {
                    f.password = "abc".into();
                    f.confirm_password = "abc".into();
                }),
                "Password must be at least 6 characters",
            ),
            (
                Box::new(|f| f.confirm_password = "secret2".into()),
                "Passwords do not match",
            ),
            (
                Box::new(|f| f.agree_terms = false),
                "Please agree to the Terms of Service",
            ),
        ];

        for (mutate, expected) in cases {
            let mut form = valid_register();
            mutate(&mut form);
            assert_eq!(validate_register(&form).unwrap_err(), expected);
        }
    }

    // ========================================================================
    // Page forms
    // ========================================================================

    #[test]
    fn test_bookmark_requires_title_and_content() {
        assert_eq!(
            validate_bookmark("Tip", "  ").unwrap_err(),
            "Please fill all fields"
        );
        assert!(validate_bookmark("Tip", "Layer linen").is_ok());
    }

    #[test]
    fn test_pricing_cost() {
        assert_eq!(validate_pricing("Kurta", " 450.5 "), Ok(450.5));
        assert_eq!(
            validate_pricing("Kurta", "-1").unwrap_err(),
            "Please enter a valid production cost"
        );
        assert!(validate_pricing("Kurta", "NaN").is_err());
        assert!(validate_pricing("Kurta", "abc").is_err());
        assert!(validate_pricing("", "10").is_err());
    }

    #[test]
    fn test_quick_design_description() {
        assert!(validate_quick_design("\n").is_err());
        assert!(validate_quick_design("Indigo block print").is_ok());
    }

    #[test]
    fn test_budget_range() {
        assert_eq!(parse_budget("100", "5000"), Ok((100.0, 5000.0)));
        assert_eq!(parse_budget("500", "500"), Ok((500.0, 500.0)));
        assert_eq!(
            parse_budget("600", "500").unwrap_err(),
            "Minimum budget cannot exceed maximum budget"
        );
        assert!(parse_budget("", "500").is_err());
        assert!(parse_budget("-5", "500").is_err());
    }

    // ========================================================================
    // List helpers
    // ========================================================================

    #[test]
    fn test_split_csv() {
        assert_eq!(split_csv(" red , ,gold,"), vec!["red", "gold"]);
        assert!(split_csv("").is_empty());
    }

    #[test]
    fn test_split_whitespace_tags() {
        assert_eq!(
            split_whitespace_tags("#a  #b\t#c"),
            vec!["#a", "#b", "#c"]
        );
    }

    #[test]
    fn test_truncate_preview() {
        assert_eq!(truncate_preview("short", 100), "short");
        assert_eq!(truncate_preview("abcdef", 3), "abc...");
        assert_eq!(truncate_preview("abc", 3), "abc");
        // Multi-byte characters are never split.
        assert_eq!(truncate_preview("₹₹₹₹", 2), "₹₹...");
    }

    #[test]
    fn test_ratio_percent() {
        assert_eq!(ratio_percent(0.873), "87%");
        assert_eq!(ratio_percent(1.4), "100%");
    }
}
