//! Naming conventions: resource type inference and key transforms.

use crate::framework::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

const SERIALIZER_SUFFIX: &str = "Serializer";

/// Case transform applied to attribute keys and resource type names in output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyTransform {
    /// Keys are emitted exactly as declared.
    #[default]
    None,
    /// `purchased_at`
    Underscore,
    /// `PurchasedAt`
    Camel,
    /// `purchasedAt`
    LowerCamel,
    /// `purchased-at`
    Dash,
}

impl KeyTransform {
    pub fn apply(self, key: &str) -> String {
        match self {
            KeyTransform::None => key.to_string(),
            KeyTransform::Underscore => words(key).join("_"),
            KeyTransform::Dash => words(key).join("-"),
            KeyTransform::Camel => words(key).iter().map(|w| capitalize(w)).collect(),
            KeyTransform::LowerCamel => words(key)
                .iter()
                .enumerate()
                .map(|(i, w)| if i == 0 { w.clone() } else { capitalize(w) })
                .collect(),
        }
    }
}

impl FromStr for KeyTransform {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "none" => Ok(KeyTransform::None),
            "underscore" | "snake" => Ok(KeyTransform::Underscore),
            "camel" => Ok(KeyTransform::Camel),
            "lower_camel" | "lowercamel" => Ok(KeyTransform::LowerCamel),
            "dash" | "kebab" => Ok(KeyTransform::Dash),
            _ => Err(ConfigError::InvalidOption {
                key: "key_transform".into(),
                value: s.to_string(),
            }),
        }
    }
}

/// Infers a resource type name from a serializer identifier.
///
/// Drops any module path, strips a trailing `Serializer` and converts the remainder to
/// snake case: `"fleet::CollectionWithDefaultSerializer"` becomes `"collection_with_default"`.
pub fn infer_type_name(serializer_name: &str) -> String {
    let base = serializer_name.rsplit("::").next().unwrap_or(serializer_name);
    let base = base.strip_suffix(SERIALIZER_SUFFIX).unwrap_or(base);
    words(base).join("_")
}

/// Splits an identifier into lowercase words on `_`, `-`, spaces and case boundaries.
fn words(ident: &str) -> Vec<String> {
    let chars: Vec<char> = ident.chars().collect();
    let mut words = Vec::new();
    let mut current = String::new();

    for (i, &c) in chars.iter().enumerate() {
        if c == '_' || c == '-' || c.is_whitespace() {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            continue;
        }
        if c.is_uppercase() && !current.is_empty() {
            let prev = chars[i - 1];
            let next_is_lower = chars.get(i + 1).is_some_and(|n| n.is_lowercase());
            // "HTTPServer" splits as "http" + "server"
            if prev.is_lowercase() || prev.is_ascii_digit() || (prev.is_uppercase() && next_is_lower) {
                words.push(std::mem::take(&mut current));
            }
        }
        current.extend(c.to_lowercase());
    }
    if !current.is_empty() {
        words.push(current);
    }
    words
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
