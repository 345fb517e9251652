use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A single inventory record.
///
/// Serialized with camelCase keys and `createdAt` as epoch milliseconds, which is
/// the shape used both for the persisted collection and for export files.
///
/// Every field has a serde default and a lenient reader so that structurally
/// valid imports are accepted as-is; field values are only checked at the form
/// boundary (see [`ProductForm::validate`]). `stock` is a float for the same
/// reason: an imported `2.5` survives a save/load cycle unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    #[serde(default, deserialize_with = "lenient::text")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub category: String,
    #[serde(default, with = "lenient::number")]
    pub price: f64,
    #[serde(default, with = "lenient::number")]
    pub stock: f64,
    #[serde(default = "epoch", with = "lenient::millis")]
    pub created_at: DateTime<Utc>,
}

fn epoch() -> DateTime<Utc> {
    DateTime::<Utc>::UNIX_EPOCH
}

/// Field codecs that read whatever an exported file may hold.
///
/// Nothing here fails on a well-formed JSON value: unusable numbers read as
/// NaN (written back as `null`), unusable timestamps as the Unix epoch.
mod lenient {
    use chrono::{DateTime, TimeZone, Utc};
    use serde::{Deserialize, Deserializer, Serializer};
    use serde_json::Value;

    pub fn text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
        Ok(match Value::deserialize(deserializer)? {
            Value::String(s) => s,
            Value::Null => String::new(),
            other => other.to_string(),
        })
    }

    pub mod number {
        use super::*;

        // 2^53: every integer up to here is exact in an f64.
        const MAX_EXACT: f64 = 9_007_199_254_740_992.0;

        /// Whole numbers are written as JSON integers (`5`, not `5.0`).
        pub fn serialize<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
            if value.fract() == 0.0 && value.abs() <= MAX_EXACT {
                serializer.serialize_i64(*value as i64)
            } else {
                serializer.serialize_f64(*value)
            }
        }

        pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
            Ok(match Value::deserialize(deserializer)? {
                Value::Number(n) => n.as_f64().unwrap_or(f64::NAN),
                Value::String(s) => s.trim().parse().unwrap_or(f64::NAN),
                _ => f64::NAN,
            })
        }
    }

    pub mod millis {
        use super::*;

        pub fn serialize<S: Serializer>(
            value: &DateTime<Utc>,
            serializer: S,
        ) -> Result<S::Ok, S::Error> {
            serializer.serialize_i64(value.timestamp_millis())
        }

        pub fn deserialize<'de, D: Deserializer<'de>>(
            deserializer: D,
        ) -> Result<DateTime<Utc>, D::Error> {
            let millis = match Value::deserialize(deserializer)? {
                Value::Number(n) => n.as_i64().or_else(|| {
                    n.as_f64()
                        .filter(|f| f.is_finite())
                        .map(|f| f.trunc() as i64)
                }),
                Value::String(s) => s.trim().parse::<i64>().ok().or_else(|| {
                    DateTime::parse_from_rfc3339(s.trim())
                        .ok()
                        .map(|d| d.timestamp_millis())
                }),
                _ => None,
            };
            Ok(millis
                .and_then(|ms| Utc.timestamp_millis_opt(ms).single())
                .unwrap_or(DateTime::<Utc>::UNIX_EPOCH))
        }
    }
}

/// Current time at the precision timestamps are persisted with.
pub fn timestamp_now() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(3)
}

impl Product {
    /// Counts entered through the form are whole numbers, hence the `i64`.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        category: impl Into<String>,
        price: f64,
        stock: i64,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category: category.into(),
            price,
            stock: stock as f64,
            created_at,
        }
    }

    /// The trailing six characters of the id, used as the short display id.
    pub fn short_id(&self) -> &str {
        let start = self
            .id
            .char_indices()
            .rev()
            .nth(5)
            .map(|(i, _)| i)
            .unwrap_or(0);
        &self.id[start..]
    }
}

/// Reasons a form submission is refused. Checked in declaration order.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Name is required")]
    NameRequired,
    #[error("Category is required")]
    CategoryRequired,
    #[error("Invalid price")]
    InvalidPrice,
    #[error("Invalid stock")]
    InvalidStock,
}

/// Raw field values of the create/edit form.
///
/// Numbers are kept as text, exactly as typed, and only parsed by
/// [`ProductForm::validate`]. `id` is empty when creating.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductForm {
    pub id: String,
    pub name: String,
    pub category: String,
    pub price: String,
    pub stock: String,
}

/// A form that passed validation, ready to become a [`Product`].
#[derive(Debug, Clone, PartialEq)]
pub struct ValidForm {
    pub id: Option<String>,
    pub name: String,
    pub category: String,
    pub price: f64,
    pub stock: i64,
}

impl ProductForm {
    /// Form pre-filled from an existing product (the edit path).
    pub fn from_product(product: &Product) -> Self {
        Self {
            id: product.id.clone(),
            name: product.name.clone(),
            category: product.category.clone(),
            price: product.price.to_string(),
            stock: product.stock.to_string(),
        }
    }

    pub fn is_edit(&self) -> bool {
        !self.id.trim().is_empty()
    }

    pub fn validate(&self) -> Result<ValidForm, ValidationError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(ValidationError::NameRequired);
        }
        let category = self.category.trim();
        if category.is_empty() {
            return Err(ValidationError::CategoryRequired);
        }
        let price = parse_price(&self.price).ok_or(ValidationError::InvalidPrice)?;
        let stock = parse_stock(&self.stock).ok_or(ValidationError::InvalidStock)?;

        let id = self.id.trim();
        Ok(ValidForm {
            id: (!id.is_empty()).then(|| id.to_string()),
            name: name.to_string(),
            category: category.to_string(),
            price,
            stock,
        })
    }
}

// An empty field counts as zero, matching how a blank number input is read.
fn parse_price(raw: &str) -> Option<f64> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Some(0.0);
    }
    raw.parse::<f64>()
        .ok()
        .filter(|p| p.is_finite() && *p >= 0.0)
}

fn parse_stock(raw: &str) -> Option<i64> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Some(0);
    }
    if let Ok(n) = raw.parse::<i64>() {
        return (n >= 0).then_some(n);
    }
    // "4.0" is an integer count, "4.5" is not.
    let f = raw.parse::<f64>().ok()?;
    (f.is_finite() && f >= 0.0 && f.fract() == 0.0 && f <= i64::MAX as f64).then_some(f as i64)
}
