use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use customer_store_core::{
    ConnectionParameters, Customer, ENV_DB_PASSWORD, ENV_DB_URL, ENV_DB_USERNAME,
};
use customer_store_sqlite::CustomerService;
use tracing_subscriber::EnvFilter;

/// Output format for `list`.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum CliOutputFormat {
    Table,
    Json,
}

#[derive(Debug, Parser)]
#[command(name = "customers")]
#[command(about = "Create and list customers in a relational store")]
struct Cli {
    #[command(flatten)]
    store: StoreArgs,
    /// Log statements and connection activity to stderr.
    #[arg(long, short, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Args)]
struct StoreArgs {
    /// YAML file with `endpoint`, `username` and `password`; takes precedence over the flags below.
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Store endpoint (e.g. sqlite:///var/lib/customers.db).
    #[arg(long, global = true, env = ENV_DB_URL)]
    url: Option<String>,
    /// Auth principal.
    #[arg(long, global = true, env = ENV_DB_USERNAME, default_value = "")]
    username: String,
    /// Auth credential.
    #[arg(long, global = true, env = ENV_DB_PASSWORD, default_value = "", hide_env_values = true)]
    password: String,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Create the customers table if it does not exist.
    Init,
    /// Insert one customer.
    Add(AddArgs),
    /// Print every customer.
    List(ListArgs),
}

#[derive(Debug, Args)]
struct AddArgs {
    /// Caller-assigned customer id.
    #[arg(long, allow_negative_numbers = true)]
    id: i64,
    /// Customer name.
    #[arg(long)]
    name: String,
}

#[derive(Debug, Args)]
struct ListArgs {
    /// Output format.
    #[arg(long, default_value = "table")]
    format: CliOutputFormat,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = connect(&cli.store).and_then(|service| match cli.command {
        Command::Init => run_init(&service),
        Command::Add(args) => run_add(&service, args),
        Command::List(args) => run_list(&service, args),
    });

    if let Err(err) = result {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

/// Installs a stderr subscriber; `RUST_LOG` wins over `--verbose`.
fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(verbose)
        .compact()
        .try_init();
}

fn resolve_params(args: &StoreArgs) -> Result<ConnectionParameters, String> {
    if let Some(path) = &args.config {
        return ConnectionParameters::load(path)
            .map_err(|e| format!("Failed to load config '{}': {e}", path.display()));
    }
    let url = args
        .url
        .as_deref()
        .ok_or_else(|| format!("No store endpoint: pass --url, --config, or set {ENV_DB_URL}"))?;
    Ok(ConnectionParameters::new(url, &args.username, &args.password))
}

fn connect(args: &StoreArgs) -> Result<CustomerService, String> {
    let params = resolve_params(args)?;
    tracing::debug!(?params, "resolved connection parameters");
    CustomerService::new(params).map_err(|e| format!("Failed to open customer store: {e}"))
}

// ---------------------------------------------------------------------------
// commands
// ---------------------------------------------------------------------------

fn run_init(_service: &CustomerService) -> Result<(), String> {
    // Construction already bootstrapped the table.
    println!("Customers table ready.");
    Ok(())
}

fn run_add(service: &CustomerService, args: AddArgs) -> Result<(), String> {
    let customer = Customer::new(args.id, args.name).map_err(|e| format!("Invalid customer: {e}"))?;
    service.create_customer(&customer).map_err(|e| {
        if e.is_constraint_violation() {
            format!("Customer {} already exists", customer.id())
        } else {
            format!("Failed to create customer {}: {e}", customer.id())
        }
    })?;
    println!("Created customer {} ({}).", customer.id(), customer.name());
    Ok(())
}

fn run_list(service: &CustomerService, args: ListArgs) -> Result<(), String> {
    let customers = service
        .get_all_customers()
        .map_err(|e| format!("Failed to list customers: {e}"))?;

    match args.format {
        CliOutputFormat::Json => {
            let json = serde_json::to_string_pretty(&customers)
                .map_err(|e| format!("Failed to serialize customers: {e}"))?;
            println!("{json}");
        }
        CliOutputFormat::Table => {
            if customers.is_empty() {
                println!("No customers.");
                return Ok(());
            }
            let width = customers
                .iter()
                .map(|c| c.id().to_string().len())
                .max()
                .unwrap_or(2)
                .max(2);
            println!("{:>width$}  NAME", "ID");
            for customer in &customers {
                println!("{:>width$}  {}", customer.id(), customer.name());
            }
        }
    }
    Ok(())
}
