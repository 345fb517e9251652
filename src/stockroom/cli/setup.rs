use clap::builder::PossibleValuesParser;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Accepted values for `--sort`.
pub const SORT_KEYS: [&str; 6] = [
    "name-asc",
    "name-desc",
    "price-asc",
    "price-desc",
    "createdAt-asc",
    "createdAt-desc",
];

#[derive(Parser, Debug)]
#[command(
    name = "stockroom",
    bin_name = "stockroom",
    version,
    disable_help_subcommand = true
)]
#[command(about = "Local product inventory with search, sorting and JSON export", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory holding the product collection and config
    #[arg(long, global = true, env = "STOCKROOM_DATA", value_name = "PATH")]
    pub data_dir: Option<PathBuf>,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List products (default)
    #[command(alias = "ls", display_order = 1)]
    List {
        /// Filter by name or category (case-insensitive)
        #[arg(short, long)]
        search: Option<String>,

        /// Ordering
        #[arg(long, value_parser = PossibleValuesParser::new(SORT_KEYS))]
        sort: Option<String>,

        /// Page to show (past the end shows the last page)
        #[arg(short, long, default_value_t = 1)]
        page: usize,
    },

    /// Add a product
    #[command(alias = "new", display_order = 2)]
    Add {
        #[arg(long, default_value = "")]
        name: String,

        #[arg(long, default_value = "")]
        category: String,

        /// Unit price, zero or more
        #[arg(long, default_value = "", allow_hyphen_values = true)]
        price: String,

        /// Units in stock, a whole number, zero or more
        #[arg(long, default_value = "", allow_hyphen_values = true)]
        stock: String,
    },

    /// Edit a product; omitted fields keep their current value
    #[command(alias = "e", display_order = 3)]
    Edit {
        id: String,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        category: Option<String>,

        #[arg(long, allow_hyphen_values = true)]
        price: Option<String>,

        #[arg(long, allow_hyphen_values = true)]
        stock: Option<String>,
    },

    /// Show one product
    #[command(alias = "v", display_order = 4)]
    Show { id: String },

    /// Delete a product
    #[command(alias = "rm", display_order = 5)]
    Delete {
        id: String,

        /// Skip confirmation
        #[arg(long, short = 'y')]
        yes: bool,
    },

    /// Export all products to a JSON file
    #[command(display_order = 10)]
    Export {
        /// Destination file (defaults to productos.json)
        #[arg(long, short = 'o', value_name = "PATH")]
        output: Option<PathBuf>,
    },

    /// Replace all products from an exported JSON file
    #[command(display_order = 11)]
    Import { path: PathBuf },

    /// Get or set configuration
    #[command(display_order = 20)]
    Config {
        /// Configuration key (page-size, locale, currency, seed-demo-data)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },

    /// Interactive session keeping search, sort and page between commands
    #[command(display_order = 30)]
    Shell,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).unwrap()
    }

    #[test]
    fn naked_invocation_has_no_command() {
        assert!(parse(&["stockroom"]).command.is_none());
    }

    #[test]
    fn list_flags() {
        match parse(&["stockroom", "ls", "-s", "tech", "--sort", "price-asc", "-p", "2"]).command {
            Some(Commands::List { search, sort, page }) => {
                assert_eq!(search.as_deref(), Some("tech"));
                assert_eq!(sort.as_deref(), Some("price-asc"));
                assert_eq!(page, 2);
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn unknown_sort_is_rejected() {
        assert!(Cli::try_parse_from(["stockroom", "list", "--sort", "cheapest"]).is_err());
    }

    #[test]
    fn add_accepts_negative_numbers_for_validation() {
        match parse(&["stockroom", "add", "--name", "Lamp", "--price", "-5"]).command {
            Some(Commands::Add { price, stock, .. }) => {
                assert_eq!(price, "-5");
                assert_eq!(stock, "");
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = parse(&["stockroom", "delete", "abc", "--yes", "--data-dir", "/tmp/x", "-v"]);
        assert!(cli.verbose);
        assert_eq!(cli.data_dir, Some(PathBuf::from("/tmp/x")));
        assert!(matches!(cli.command, Some(Commands::Delete { yes: true, .. })));
    }

    #[test]
    fn edit_fields_are_optional() {
        match parse(&["stockroom", "edit", "abc", "--stock", "4"]).command {
            Some(Commands::Edit {
                id, name, stock, ..
            }) => {
                assert_eq!(id, "abc");
                assert!(name.is_none());
                assert_eq!(stock.as_deref(), Some("4"));
            }
            other => panic!("unexpected {:?}", other),
        }
    }
}
