//! Display data for one page of products.
//!
//! This turns a [`Page`] into plain, already-formatted strings. It holds no
//! business logic and no terminal concerns; `cli::render` lays these values out.

use crate::model::Product;
use crate::money::MoneyFormat;
use crate::pagination::{Page, PagerControls};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RowView {
    pub id: String,
    pub short_id: String,
    pub name: String,
    pub category: String,
    pub price: String,
    pub stock: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableView {
    pub rows: Vec<RowView>,
    pub pager: Option<PagerControls>,
    pub page: usize,
    pub total_pages: usize,
    pub total_items: usize,
}

impl TableView {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

pub fn present_row(product: &Product, money: &MoneyFormat) -> RowView {
    RowView {
        id: product.id.clone(),
        short_id: product.short_id().to_string(),
        name: product.name.clone(),
        category: product.category.clone(),
        price: money.format(product.price),
        stock: product.stock.to_string(),
        created_at: product.created_at,
    }
}

pub fn present(page: &Page<Product>, money: &MoneyFormat) -> TableView {
    TableView {
        rows: page.items.iter().map(|p| present_row(p, money)).collect(),
        pager: page.controls(),
        page: page.number,
        total_pages: page.total_pages,
        total_items: page.total_items,
    }
}
