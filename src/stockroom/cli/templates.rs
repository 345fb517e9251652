//! # CLI Templates
//!
//! Terminal output is rendered from minijinja templates kept as stand-alone files
//! under `templates/` and embedded here with `include_str!`.
//!
//! The environment renders with `trim_blocks` and `lstrip_blocks`, so a line
//! holding only a block tag produces no output. Every other line is output as is.
//!
//! Layout math (column widths, truncation) stays in Rust; templates only choose
//! styles and arrange the pre-computed strings.

pub const LIST_TEMPLATE: &str = include_str!("templates/list.jinja");
pub const PRODUCT_TEMPLATE: &str = include_str!("templates/product.jinja");
pub const MESSAGES_TEMPLATE: &str = include_str!("templates/messages.jinja");
pub const CONFIG_TEMPLATE: &str = include_str!("templates/config.jinja");
pub const SHELL_HELP_TEMPLATE: &str = include_str!("templates/shell_help.jinja");
