//! # Rendering Module
//!
//! Styled terminal output from minijinja templates, with automatic color
//! detection and a `style` filter backed by [`STOCKROOM_THEME`].
//!
//! Layout calculations (column widths, truncation, padding) stay in Rust because
//! they need Unicode-aware widths. Templates select styles and arrange lines.
//!
//! Every public renderer has an `*_internal` twin taking `use_color: Option<bool>`
//! (`None` auto-detects) so tests can force plain output.

use super::styles::{names, STOCKROOM_THEME};
use super::templates::{
    CONFIG_TEMPLATE, LIST_TEMPLATE, MESSAGES_TEMPLATE, PRODUCT_TEMPLATE, SHELL_HELP_TEMPLATE,
};
use chrono::{DateTime, Utc};
use console::Term;
use minijinja::{Environment, Value};
use serde::Serialize;
use stockroom::api::{CmdMessage, MessageLevel};
use stockroom::model::Product;
use stockroom::money::MoneyFormat;
use stockroom::pagination::PagerControls;
use stockroom::presenter::{present_row, RowView, TableView};
use unicode_width::UnicodeWidthStr;

pub const ID_WIDTH: usize = 6;
pub const NAME_WIDTH: usize = 28;
pub const CATEGORY_WIDTH: usize = 14;
pub const PRICE_WIDTH: usize = 14;
pub const STOCK_WIDTH: usize = 6;
pub const TIME_WIDTH: usize = 14;

const EMPTY_MESSAGE: &str = "No products found.";

#[derive(Serialize)]
struct RowLine {
    id: String,
    name: String,
    category: String,
    price: String,
    stock: String,
    created: String,
}

#[derive(Serialize)]
struct ListData<'a> {
    status: Option<&'a str>,
    empty: bool,
    empty_message: &'static str,
    header: String,
    rows: Vec<RowLine>,
    pager: Option<&'a PagerControls>,
    summary: String,
}

#[derive(Serialize)]
struct ProductData {
    id: String,
    name: String,
    category: String,
    price: String,
    stock: String,
    created: String,
}

#[derive(Serialize)]
struct MessageData {
    content: String,
    style: &'static str,
}

#[derive(Serialize)]
struct MessagesData {
    messages: Vec<MessageData>,
}

#[derive(Serialize)]
struct ConfigEntry {
    key: String,
    value: String,
}

#[derive(Serialize)]
struct ConfigData {
    entries: Vec<ConfigEntry>,
}

#[derive(Serialize)]
struct HelpLine {
    usage: String,
    description: &'static str,
}

#[derive(Serialize)]
struct HelpData {
    commands: Vec<HelpLine>,
}

/// Shell commands and their one-line descriptions, in help order.
pub const SHELL_COMMANDS: [(&str, &str); 13] = [
    ("list", "Show the current page"),
    ("search [TEXT]", "Filter by name or category (empty clears)"),
    ("sort KEY", "Order by name-asc, name-desc, price-asc, price-desc, createdAt-asc, createdAt-desc"),
    ("page N", "Jump to page N"),
    ("next", "Next page"),
    ("prev", "Previous page"),
    ("new", "Create a product"),
    ("edit ID", "Edit a product"),
    ("delete ID", "Delete a product"),
    ("export [PATH]", "Write all products to a JSON file"),
    ("import PATH", "Replace all products from a JSON file"),
    ("help", "Show this help"),
    ("quit", "Leave the shell"),
];

fn render_template<T: Serialize>(
    template: &'static str,
    data: &T,
    use_color: Option<bool>,
) -> Result<String, minijinja::Error> {
    let use_color = use_color.unwrap_or_else(|| Term::stdout().features().colors_supported());

    let mut env = Environment::new();
    env.set_trim_blocks(true);
    env.set_lstrip_blocks(true);
    env.set_keep_trailing_newline(true);
    env.add_filter("style", move |value: Value, name: String| -> String {
        STOCKROOM_THEME.apply(&name, &value.to_string(), use_color)
    });
    env.add_template("_inline", template)?;
    env.get_template("_inline")?.render(data)
}

/// Renders a page of products: header, rows, pager strip and summary.
pub fn render_table(table: &TableView, status: Option<&str>) -> String {
    render_table_internal(table, status, Utc::now(), None)
}

pub fn render_table_internal(
    table: &TableView,
    status: Option<&str>,
    now: DateTime<Utc>,
    use_color: Option<bool>,
) -> String {
    let rows: Vec<RowLine> = table.rows.iter().map(|row| row_line(row, now)).collect();
    let data = ListData {
        status,
        empty: rows.is_empty(),
        empty_message: EMPTY_MESSAGE,
        header: header_line(),
        rows,
        pager: table.pager.as_ref(),
        summary: summary_line(table),
    };

    render_template(LIST_TEMPLATE, &data, use_color)
        .unwrap_or_else(|e| format!("Render error: {}\n", e))
}

fn row_line(row: &RowView, now: DateTime<Utc>) -> RowLine {
    RowLine {
        id: pad_right(&row.short_id, ID_WIDTH),
        name: pad_right(&truncate_to_width(&row.name, NAME_WIDTH), NAME_WIDTH),
        category: pad_right(
            &truncate_to_width(&row.category, CATEGORY_WIDTH),
            CATEGORY_WIDTH,
        ),
        price: pad_left(&row.price, PRICE_WIDTH),
        stock: pad_left(&row.stock, STOCK_WIDTH),
        created: format_time_ago(row.created_at, now),
    }
}

fn header_line() -> String {
    [
        pad_right("ID", ID_WIDTH),
        pad_right("Name", NAME_WIDTH),
        pad_right("Category", CATEGORY_WIDTH),
        pad_left("Price", PRICE_WIDTH),
        pad_left("Stock", STOCK_WIDTH),
        pad_left("Created", TIME_WIDTH),
    ]
    .join("  ")
}

fn summary_line(table: &TableView) -> String {
    let noun = if table.total_items == 1 {
        "product"
    } else {
        "products"
    };
    if table.total_items == 0 {
        return format!("0 {}", noun);
    }
    format!(
        "Page {} of {} · {} {}",
        table.page, table.total_pages, table.total_items, noun
    )
}

/// Renders one product in full.
pub fn render_product(product: &Product, money: &MoneyFormat) -> String {
    render_product_internal(product, money, Utc::now(), None)
}

pub fn render_product_internal(
    product: &Product,
    money: &MoneyFormat,
    now: DateTime<Utc>,
    use_color: Option<bool>,
) -> String {
    let row = present_row(product, money);
    let data = ProductData {
        id: row.id,
        name: row.name,
        category: row.category,
        price: row.price,
        stock: row.stock,
        created: format!(
            "{} ({})",
            product.created_at.format("%Y-%m-%d %H:%M UTC"),
            format_time_ago(product.created_at, now).trim_start()
        ),
    };

    render_template(PRODUCT_TEMPLATE, &data, use_color)
        .unwrap_or_else(|e| format!("Render error: {}\n", e))
}

/// Renders command messages, styled by level.
pub fn render_messages(messages: &[CmdMessage]) -> String {
    render_messages_internal(messages, None)
}

pub fn render_messages_internal(messages: &[CmdMessage], use_color: Option<bool>) -> String {
    if messages.is_empty() {
        return String::new();
    }

    let data = MessagesData {
        messages: messages
            .iter()
            .map(|msg| MessageData {
                content: msg.content.clone(),
                style: match msg.level {
                    MessageLevel::Info => names::INFO,
                    MessageLevel::Success => names::SUCCESS,
                    MessageLevel::Warning => names::WARNING,
                    MessageLevel::Error => names::ERROR,
                },
            })
            .collect(),
    };

    render_template(MESSAGES_TEMPLATE, &data, use_color).unwrap_or_else(|_| {
        messages
            .iter()
            .map(|m| format!("{}\n", m.content))
            .collect()
    })
}

/// Prints command messages to stdout.
pub fn print_messages(messages: &[CmdMessage]) {
    let output = render_messages(messages);
    if !output.is_empty() {
        print!("{}", output);
    }
}

pub fn render_config(entries: &[(&str, String)]) -> String {
    render_config_internal(entries, None)
}

pub fn render_config_internal(entries: &[(&str, String)], use_color: Option<bool>) -> String {
    let data = ConfigData {
        entries: entries
            .iter()
            .map(|(key, value)| ConfigEntry {
                key: key.to_string(),
                value: value.clone(),
            })
            .collect(),
    };
    render_template(CONFIG_TEMPLATE, &data, use_color)
        .unwrap_or_else(|e| format!("Render error: {}\n", e))
}

pub fn render_shell_help(use_color: Option<bool>) -> String {
    let width = SHELL_COMMANDS
        .iter()
        .map(|(usage, _)| usage.width())
        .max()
        .unwrap_or(0)
        + 3;
    let data = HelpData {
        commands: SHELL_COMMANDS
            .iter()
            .map(|&(usage, description)| HelpLine {
                usage: pad_right(usage, width),
                description,
            })
            .collect(),
    };
    render_template(SHELL_HELP_TEMPLATE, &data, use_color)
        .unwrap_or_else(|e| format!("Render error: {}\n", e))
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    use unicode_width::UnicodeWidthChar;

    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    let limit = max_width.saturating_sub(1);

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > limit {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}

fn pad_right(s: &str, width: usize) -> String {
    format!("{}{}", s, " ".repeat(width.saturating_sub(s.width())))
}

fn pad_left(s: &str, width: usize) -> String {
    format!("{}{}", " ".repeat(width.saturating_sub(s.width())), s)
}

fn format_time_ago(timestamp: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let duration = now.signed_duration_since(timestamp);

    let formatter = timeago::Formatter::new();
    let time_str = formatter.convert(duration.to_std().unwrap_or_default());

    pad_left(&time_str, TIME_WIDTH)
}
