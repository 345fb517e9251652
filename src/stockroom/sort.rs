//! # Ordering
//!
//! Six comparators over [`Product`], selected by a [`SortKey`]. Keys use the
//! same spelling as the sort selector values (`name-asc`, `createdAt-desc`, ...).
//! Anything unrecognized falls back to newest-first.
//!
//! Name ordering approximates a locale collation: names are compared
//! case-insensitively with Latin accents folded ("Édredon" sorts with "edredon"),
//! and the raw strings only break ties.

use crate::model::Product;
use std::cmp::Ordering;
use std::fmt;

pub type Comparator = fn(&Product, &Product) -> Ordering;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortKey {
    NameAsc,
    NameDesc,
    PriceAsc,
    PriceDesc,
    CreatedAsc,
    #[default]
    CreatedDesc,
}

impl SortKey {
    pub const ALL: [SortKey; 6] = [
        SortKey::NameAsc,
        SortKey::NameDesc,
        SortKey::PriceAsc,
        SortKey::PriceDesc,
        SortKey::CreatedAsc,
        SortKey::CreatedDesc,
    ];

    /// Parses a selector value, falling back to the default for anything unknown.
    pub fn from_key(key: &str) -> Self {
        match key.trim() {
            "name-asc" => SortKey::NameAsc,
            "name-desc" => SortKey::NameDesc,
            "price-asc" => SortKey::PriceAsc,
            "price-desc" => SortKey::PriceDesc,
            "createdAt-asc" => SortKey::CreatedAsc,
            _ => SortKey::CreatedDesc,
        }
    }

    pub fn as_key(&self) -> &'static str {
        match self {
            SortKey::NameAsc => "name-asc",
            SortKey::NameDesc => "name-desc",
            SortKey::PriceAsc => "price-asc",
            SortKey::PriceDesc => "price-desc",
            SortKey::CreatedAsc => "createdAt-asc",
            SortKey::CreatedDesc => "createdAt-desc",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortKey::NameAsc => "Name (A-Z)",
            SortKey::NameDesc => "Name (Z-A)",
            SortKey::PriceAsc => "Price (low to high)",
            SortKey::PriceDesc => "Price (high to low)",
            SortKey::CreatedAsc => "Oldest first",
            SortKey::CreatedDesc => "Newest first",
        }
    }

    pub fn comparator(&self) -> Comparator {
        match self {
            SortKey::NameAsc => by_name_asc,
            SortKey::NameDesc => by_name_desc,
            SortKey::PriceAsc => by_price_asc,
            SortKey::PriceDesc => by_price_desc,
            SortKey::CreatedAsc => by_created_asc,
            SortKey::CreatedDesc => by_created_desc,
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_key())
    }
}

pub fn by_name_asc(a: &Product, b: &Product) -> Ordering {
    collate(&a.name, &b.name)
}

pub fn by_name_desc(a: &Product, b: &Product) -> Ordering {
    collate(&a.name, &b.name).reverse()
}

pub fn by_price_asc(a: &Product, b: &Product) -> Ordering {
    a.price.total_cmp(&b.price)
}

pub fn by_price_desc(a: &Product, b: &Product) -> Ordering {
    b.price.total_cmp(&a.price)
}

pub fn by_created_asc(a: &Product, b: &Product) -> Ordering {
    a.created_at.cmp(&b.created_at)
}

pub fn by_created_desc(a: &Product, b: &Product) -> Ordering {
    b.created_at.cmp(&a.created_at)
}

fn collate(a: &str, b: &str) -> Ordering {
    let primary = a
        .chars()
        .flat_map(fold_char)
        .cmp(b.chars().flat_map(fold_char));
    primary.then_with(|| a.cmp(b))
}

fn fold_char(c: char) -> std::char::ToLowercase {
    let base = match c {
        'À'..='Å' | 'à'..='å' => 'a',
        'Ç' | 'ç' => 'c',
        'È'..='Ë' | 'è'..='ë' => 'e',
        'Ì'..='Ï' | 'ì'..='ï' => 'i',
        'Ñ' | 'ñ' => 'n',
        'Ò'..='Ö' | 'ò'..='ö' => 'o',
        'Ù'..='Ü' | 'ù'..='ü' => 'u',
        'Ý' | 'ý' | 'ÿ' => 'y',
        other => other,
    };
    base.to_lowercase()
}
