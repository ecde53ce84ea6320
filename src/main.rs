use clap::{Parser as ClapParser, Subcommand};
use molang_builder::cli::{self, CallOptions, CliError};
use std::io::{self, Read};
use tracing_subscriber::EnvFilter;

#[derive(ClapParser)]
#[command(name = "molang")]
#[command(about = "Render Molang expressions from the built-in catalog")]
#[command(version)]
struct Cli {
    /// Log clamping and registry decisions
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a built-in call (reads one call per line from stdin if omitted)
    Call {
        /// Namespace: q, c, v, t or math
        namespace: Option<String>,

        /// Built-in or variable name
        builtin: Option<String>,

        /// Arguments: numbers, true/false, or strings
        #[arg(allow_hyphen_values = true)]
        args: Vec<String>,

        /// Print the result as a JSON string
        #[arg(long)]
        json: bool,

        /// Extra prefix to treat as Molang instead of a string literal
        #[arg(long = "prefix")]
        prefixes: Vec<String>,
    },

    /// List built-ins with their arity and clamp bounds
    Catalog {
        /// Namespace to list (all if omitted)
        namespace: Option<String>,

        /// Emit JSON
        #[arg(long)]
        json: bool,
    },

    /// List documentation categories
    Docs,

    /// Show documentation for a specific category
    Doc {
        /// Category name (use 'molang docs' to list categories)
        category: String,
    },
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Call {
            namespace,
            builtin,
            args,
            json,
            prefixes,
        } => run_call(namespace, builtin, args, json, prefixes),
        Commands::Catalog { namespace, json } => run_catalog(namespace, json),
        Commands::Docs => {
            print!("{}", cli::get_docs_overview());
            Ok(())
        }
        Commands::Doc { category } => {
            cli::get_doc_category(&category).map(|content| print!("{}", content))
        }
    };

    if let Err(e) = result {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run_call(
    namespace: Option<String>,
    builtin: Option<String>,
    args: Vec<String>,
    json: bool,
    prefixes: Vec<String>,
) -> Result<(), CliError> {
    let rendered = match (namespace, builtin) {
        (Some(namespace), Some(builtin)) => {
            let options = CallOptions {
                namespace,
                builtin,
                args,
                prefixes,
            };
            vec![cli::execute_call(&options)?]
        }
        (None, None) if !atty::is(atty::Stream::Stdin) => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            cli::execute_lines(&buffer, &prefixes)?
        }
        _ => return Err(CliError::NoInput),
    };

    for expr in rendered {
        if json {
            println!("{}", serde_json::to_string(&expr)?);
        } else {
            println!("{}", expr);
        }
    }
    Ok(())
}

fn run_catalog(namespace: Option<String>, json: bool) -> Result<(), CliError> {
    let entries = cli::catalog_entries(namespace.as_deref())?;
    if json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
    } else {
        print!("{}", cli::format_catalog(&entries));
    }
    Ok(())
}
