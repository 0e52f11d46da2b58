//! Field descriptors — the tagged-variant rule vocabulary.

use std::sync::OnceLock;

use regex::Regex;
use serde_json::Value;

/// The kind of a field plus its constraint parameters.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldKind {
    /// Free text with a minimum (and optional maximum) character count.
    Text {
        min_len: usize,
        max_len: Option<usize>,
    },
    /// Phone number in the `+7 (XXX) XXX-XX-XX` mask.
    Phone,
    /// Must parse as a URL, or be empty.
    Url,
    /// Numeric value with optional bounds.
    Number { min: Option<f64>, max: Option<f64> },
    /// String drawn from a fixed option set.
    OneOf { options: &'static [&'static str] },
    /// List of option identifiers.
    List {
        min_items: usize,
        max_items: Option<usize>,
    },
    /// Whole-number rating in an inclusive range.
    Rating { min: u8, max: u8 },
}

/// A single field's validation rule.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldRule {
    pub name: &'static str,
    pub required: bool,
    pub kind: FieldKind,
}

fn phone_mask() -> &'static Regex {
    static MASK: OnceLock<Regex> = OnceLock::new();
    MASK.get_or_init(|| {
        Regex::new(r"^\+7 \(\d{3}\) \d{3}-\d{2}-\d{2}$").expect("phone mask regex is valid")
    })
}

impl FieldRule {
    pub const fn required(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            required: true,
            kind,
        }
    }

    pub const fn optional(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            required: false,
            kind,
        }
    }

    /// Check a candidate value against this rule.
    ///
    /// `None` means the value satisfies the rule; `Some(message)` carries the
    /// user-facing error. Missing values, `null`, and (for text kinds) the
    /// empty string all count as "absent": an error for required fields,
    /// accepted for optional ones.
    pub fn check(&self, value: Option<&Value>) -> Option<String> {
        let value = match value {
            None | Some(Value::Null) => {
                return self.required.then(|| self.required_message());
            }
            Some(v) => v,
        };

        match &self.kind {
            FieldKind::Text { min_len, max_len } => {
                let Some(text) = value.as_str() else {
                    return Some("must be text".to_string());
                };
                let text = text.trim();
                if text.is_empty() {
                    return self.required.then(|| self.required_message());
                }
                let len = text.chars().count();
                if len < *min_len {
                    return Some(format!("must be at least {min_len} characters"));
                }
                if let Some(max) = max_len {
                    if len > *max {
                        return Some(format!("must be at most {max} characters"));
                    }
                }
                None
            }
            FieldKind::Phone => {
                let Some(text) = value.as_str() else {
                    return Some("must be text".to_string());
                };
                if text.is_empty() {
                    return self.required.then(|| self.required_message());
                }
                if phone_mask().is_match(text) {
                    None
                } else {
                    Some("must match +7 (XXX) XXX-XX-XX".to_string())
                }
            }
            FieldKind::Url => {
                let Some(text) = value.as_str() else {
                    return Some("must be text".to_string());
                };
                // URL fields are always url-or-empty.
                if text.is_empty() {
                    return self.required.then(|| self.required_message());
                }
                if url::Url::parse(text).is_ok() {
                    None
                } else {
                    Some("must be a valid URL".to_string())
                }
            }
            FieldKind::Number { min, max } => {
                let Some(n) = value.as_f64() else {
                    return Some("must be a number".to_string());
                };
                if let Some(min) = min {
                    if n < *min {
                        return Some(format!("must be at least {min}"));
                    }
                }
                if let Some(max) = max {
                    if n > *max {
                        return Some(format!("must be at most {max}"));
                    }
                }
                None
            }
            FieldKind::OneOf { options } => {
                let Some(text) = value.as_str() else {
                    return Some("must be text".to_string());
                };
                if text.is_empty() {
                    return self.required.then(|| self.required_message());
                }
                if options.contains(&text) {
                    None
                } else {
                    Some(format!("must be one of: {}", options.join(", ")))
                }
            }
            FieldKind::List {
                min_items,
                max_items,
            } => {
                let Some(items) = value.as_array() else {
                    return Some("must be a list".to_string());
                };
                if items.iter().any(|item| !item.is_string()) {
                    return Some("must be a list of text values".to_string());
                }
                if items.is_empty() {
                    return self.required.then(|| self.required_message());
                }
                if items.len() < *min_items {
                    return Some(format!("select at least {min_items} options"));
                }
                if let Some(max) = max_items {
                    if items.len() > *max {
                        return Some(format!("select at most {max} options"));
                    }
                }
                None
            }
            FieldKind::Rating { min, max } => {
                let Some(n) = value.as_u64() else {
                    return Some("must be a whole number".to_string());
                };
                if n < u64::from(*min) || n > u64::from(*max) {
                    Some(format!("must be between {min} and {max}"))
                } else {
                    None
                }
            }
        }
    }

    fn required_message(&self) -> String {
        match self.kind {
            FieldKind::List { .. } => "select at least one option".to_string(),
            _ => "is required".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn text_length_bounds() {
        let rule = FieldRule::required(
            "title",
            FieldKind::Text {
                min_len: 5,
                max_len: Some(10),
            },
        );
        assert!(rule.check(Some(&json!("just right"))).is_none()); // 10 chars
        assert_eq!(
            rule.check(Some(&json!("long enough."))), // 12 chars
            Some("must be at most 10 characters".to_string())
        );
        assert_eq!(
            rule.check(Some(&json!("tiny"))),
            Some("must be at least 5 characters".to_string())
        );
        assert_eq!(rule.check(None), Some("is required".to_string()));
    }

    #[test]
    fn optional_text_accepts_empty() {
        let rule = FieldRule::optional(
            "note",
            FieldKind::Text {
                min_len: 5,
                max_len: None,
            },
        );
        assert!(rule.check(Some(&json!(""))).is_none());
        assert!(rule.check(None).is_none());
        assert!(rule.check(Some(&Value::Null)).is_none());
    }

    #[test]
    fn text_rejects_non_string() {
        let rule = FieldRule::required(
            "city",
            FieldKind::Text {
                min_len: 2,
                max_len: None,
            },
        );
        assert_eq!(rule.check(Some(&json!(42))), Some("must be text".to_string()));
        assert_eq!(
            rule.check(Some(&json!(["x"]))),
            Some("must be text".to_string())
        );
    }

    #[test]
    fn phone_mask_enforced() {
        let rule = FieldRule::required("phone", FieldKind::Phone);
        assert!(rule.check(Some(&json!("+7 (921) 555-01-02"))).is_none());
        assert!(rule.check(Some(&json!("+7 921 555 01 02"))).is_some());
        assert!(rule.check(Some(&json!("89215550102"))).is_some());
        assert!(rule.check(Some(&json!("+7 (92) 555-01-02"))).is_some());
    }

    #[test]
    fn url_or_empty() {
        let rule = FieldRule::optional("website", FieldKind::Url);
        assert!(rule.check(Some(&json!("https://example.com/menu"))).is_none());
        assert!(rule.check(Some(&json!(""))).is_none());
        assert!(rule.check(None).is_none());
        assert_eq!(
            rule.check(Some(&json!("not a url"))),
            Some("must be a valid URL".to_string())
        );
    }

    #[test]
    fn number_bounds() {
        let rule = FieldRule::required(
            "salary_from",
            FieldKind::Number {
                min: Some(0.0),
                max: None,
            },
        );
        assert!(rule.check(Some(&json!(45000))).is_none());
        assert!(rule.check(Some(&json!(0))).is_none());
        assert_eq!(
            rule.check(Some(&json!(-1))),
            Some("must be at least 0".to_string())
        );
        assert_eq!(
            rule.check(Some(&json!("45000"))),
            Some("must be a number".to_string())
        );
    }

    #[test]
    fn one_of_membership() {
        let rule = FieldRule::required(
            "rank",
            FieldKind::OneOf {
                options: &["junior", "middle", "senior"],
            },
        );
        assert!(rule.check(Some(&json!("middle"))).is_none());
        let message = rule.check(Some(&json!("legendary"))).unwrap();
        assert!(message.contains("junior, middle, senior"));
    }

    #[test]
    fn required_list_needs_an_element() {
        let rule = FieldRule::required(
            "cuisines",
            FieldKind::List {
                min_items: 1,
                max_items: None,
            },
        );
        assert!(rule.check(Some(&json!(["italian"]))).is_none());
        assert_eq!(
            rule.check(Some(&json!([]))),
            Some("select at least one option".to_string())
        );
        assert_eq!(rule.check(None), Some("select at least one option".to_string()));
    }

    #[test]
    fn optional_list_accepts_empty() {
        let rule = FieldRule::optional(
            "certificates",
            FieldKind::List {
                min_items: 1,
                max_items: None,
            },
        );
        assert!(rule.check(Some(&json!([]))).is_none());
        assert!(rule.check(None).is_none());
    }

    #[test]
    fn list_rejects_mixed_elements() {
        let rule = FieldRule::required(
            "goals",
            FieldKind::List {
                min_items: 1,
                max_items: None,
            },
        );
        assert_eq!(
            rule.check(Some(&json!(["grow", 7]))),
            Some("must be a list of text values".to_string())
        );
    }

    #[test]
    fn list_max_items() {
        let rule = FieldRule::required(
            "venue_formats",
            FieldKind::List {
                min_items: 1,
                max_items: Some(2),
            },
        );
        assert!(rule.check(Some(&json!(["cafe", "bar"]))).is_none());
        assert_eq!(
            rule.check(Some(&json!(["cafe", "bar", "hotel"]))),
            Some("select at most 2 options".to_string())
        );
    }

    #[test]
    fn rating_range() {
        let rule = FieldRule::required("self_rating", FieldKind::Rating { min: 1, max: 5 });
        assert!(rule.check(Some(&json!(1))).is_none());
        assert!(rule.check(Some(&json!(5))).is_none());
        assert_eq!(
            rule.check(Some(&json!(0))),
            Some("must be between 1 and 5".to_string())
        );
        assert_eq!(
            rule.check(Some(&json!(6))),
            Some("must be between 1 and 5".to_string())
        );
        assert_eq!(
            rule.check(Some(&json!(3.5))),
            Some("must be a whole number".to_string())
        );
    }
}
