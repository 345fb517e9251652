//! # CLI Layer
//!
//! This module is **one possible UI client** for stockroom, not the application itself.
//!
//! It is the only place that:
//! - Knows about terminal I/O (stdout, stderr, stdin prompts)
//! - Installs the tracing subscriber
//! - Formats output for human consumption
//!
//! ## Structure
//!
//! - `run()`: Main dispatch logic (called by `main.rs`)
//! - `init_context()`: Builds the `Session` over the resolved data directory
//! - `handle_*()`: Per-command handlers that drive the session and print results
//!
//! One-shot mutations print their messages followed by the first page of the
//! default view, so the effect is visible right away.

use super::render::{print_messages, render_config, render_product, render_table};
use super::setup::{Cli, Commands};
use super::shell::Shell;
use clap::Parser;
use std::fs::File;
use std::io::{BufRead, BufWriter, Write};
use std::path::PathBuf;
use std::str::FromStr;
use stockroom::api::{CmdMessage, ConfigAction};
use stockroom::commands::export::EXPORT_FILENAME;
use stockroom::error::{Result, StockroomError};
use stockroom::init::initialize;
use stockroom::model::Product;
use stockroom::session::Session;
use stockroom::sort::SortKey;
use stockroom::store::fs::FileStore;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter directive.
const LOG_ENV: &str = "STOCKROOM_LOG";

struct AppContext {
    session: Session<FileStore>,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::List { search, sort, page }) => handle_list(&mut ctx, search, sort, page),
        Some(Commands::Add {
            name,
            category,
            price,
            stock,
        }) => handle_add(&mut ctx, name, category, price, stock),
        Some(Commands::Edit {
            id,
            name,
            category,
            price,
            stock,
        }) => handle_edit(&mut ctx, &id, name, category, price, stock),
        Some(Commands::Show { id }) => handle_show(&mut ctx, &id),
        Some(Commands::Delete { id, yes }) => handle_delete(&mut ctx, &id, yes),
        Some(Commands::Export { output }) => handle_export(&mut ctx, output),
        Some(Commands::Import { path }) => handle_import(&mut ctx, path),
        Some(Commands::Config { key, value }) => handle_config(&mut ctx, key, value),
        Some(Commands::Shell) => handle_shell(ctx),
        None => handle_list(&mut ctx, None, None, 1),
    }
}

fn init_tracing(verbose: bool) {
    let env = if verbose {
        "debug".to_string()
    } else {
        std::env::var(LOG_ENV).unwrap_or_else(|_| "warn".to_string())
    };
    let filter = EnvFilter::from_str(&env).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let ctx = initialize(cli.data_dir.clone())?;
    Ok(AppContext {
        session: Session::new(ctx.api),
    })
}

fn handle_list(
    ctx: &mut AppContext,
    search: Option<String>,
    sort: Option<String>,
    page: usize,
) -> Result<()> {
    if let Some(sort) = sort {
        ctx.session.set_sort(SortKey::from_key(&sort))?;
    }
    if let Some(search) = search {
        ctx.session.set_search(&search)?;
    }
    let table = ctx.session.go_to_page(page)?;
    print!("{}", render_table(&table, None));
    Ok(())
}

fn handle_add(
    ctx: &mut AppContext,
    name: String,
    category: String,
    price: String,
    stock: String,
) -> Result<()> {
    let mut form = ctx.session.open_new().clone();
    form.name = name;
    form.category = category;
    form.price = price;
    form.stock = stock;

    let result = ctx.session.save(form)?;
    print_messages(&result.messages);
    if let Some(table) = &result.table {
        print!("{}", render_table(table, None));
    }
    Ok(())
}

fn handle_edit(
    ctx: &mut AppContext,
    id: &str,
    name: Option<String>,
    category: Option<String>,
    price: Option<String>,
    stock: Option<String>,
) -> Result<()> {
    let mut form = ctx.session.open_edit(id)?.clone();
    if let Some(name) = name {
        form.name = name;
    }
    if let Some(category) = category {
        form.category = category;
    }
    if let Some(price) = price {
        form.price = price;
    }
    if let Some(stock) = stock {
        form.stock = stock;
    }

    let result = ctx.session.save(form)?;
    print_messages(&result.messages);
    if let Some(table) = &result.table {
        print!("{}", render_table(table, None));
    }
    Ok(())
}

fn handle_show(ctx: &mut AppContext, id: &str) -> Result<()> {
    let api = ctx.session.api();
    let result = api.get(id)?;
    for product in &result.affected_products {
        print!("{}", render_product(product, &api.money_format()));
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_delete(ctx: &mut AppContext, id: &str, yes: bool) -> Result<()> {
    let result = ctx
        .session
        .delete(id, |product| yes || confirm_delete(product))?;
    print_messages(&result.messages);
    if let Some(table) = &result.table {
        print!("{}", render_table(table, None));
    }
    Ok(())
}

fn confirm_delete(product: &Product) -> bool {
    print!("Delete \"{}\" ({})? [y/N] ", product.name, product.id);
    if std::io::stdout().flush().is_err() {
        return false;
    }
    let mut answer = String::new();
    match std::io::stdin().lock().read_line(&mut answer) {
        Ok(_) => matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"),
        Err(_) => false,
    }
}

fn handle_export(ctx: &mut AppContext, output: Option<PathBuf>) -> Result<()> {
    let path = output.unwrap_or_else(|| PathBuf::from(EXPORT_FILENAME));
    let file = File::create(&path).map_err(StockroomError::Io)?;

    let mut result = ctx.session.export(BufWriter::new(file))?;
    result.add_message(CmdMessage::info(format!("Saved to {}", path.display())));
    print_messages(&result.messages);
    Ok(())
}

fn handle_import(ctx: &mut AppContext, path: PathBuf) -> Result<()> {
    let text = std::fs::read_to_string(&path).map_err(StockroomError::Io)?;
    let result = ctx.session.import(&text)?;
    print_messages(&result.messages);
    if let Some(table) = &result.table {
        print!("{}", render_table(table, None));
    }
    Ok(())
}

fn handle_config(
    ctx: &mut AppContext,
    key: Option<String>,
    value: Option<String>,
) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };
    let show_all = matches!(action, ConfigAction::ShowAll);

    let result = ctx.session.api().config_action(action)?;
    if show_all {
        if let Some(config) = &result.config {
            print!("{}", render_config(&config.list_all()));
        }
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_shell(ctx: AppContext) -> Result<()> {
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut shell = Shell::new(ctx.session, stdin.lock(), stdout.lock(), None);
    shell.run()
}
