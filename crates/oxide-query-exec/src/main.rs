//! oxide-query CLI
//!
//! Runs a query against SQLite and checks how many rows it returned.

use clap::{Parser, ValueEnum};
use oxide_query_result::QueryResultMask;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use oxide_query_exec::config::{DEFAULT_DATABASE_URL, DEFAULT_MAX_CONNECTIONS};
use oxide_query_exec::{parse_param, Database, DatabaseConfig, Statement};

/// Run a SQL query and enforce its row count.
#[derive(Parser)]
#[command(name = "oxide-query")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Database URL (SQLite path or connection string).
    #[arg(short, long, env = "DATABASE_URL", default_value = DEFAULT_DATABASE_URL)]
    database: String,

    /// Maximum number of pooled connections.
    #[arg(long, default_value_t = DEFAULT_MAX_CONNECTIONS)]
    max_connections: u32,

    /// Statements to run before the query (repeatable).
    #[arg(short, long)]
    setup: Vec<String>,

    /// Parameter bound to the next `?` placeholder (repeatable).
    #[arg(short, long = "param")]
    params: Vec<String>,

    /// Number of rows the query must return.
    #[arg(short, long, value_enum, default_value_t = Expect::One)]
    expect: Expect,

    /// Enable verbose output.
    #[arg(short, long)]
    verbose: bool,

    /// The SQL query.
    query: String,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Expect {
    One,
    OneOrNone,
    Many,
    ManyOrNone,
    None,
    Any,
}

impl Expect {
    fn mask(self) -> QueryResultMask {
        match self {
            Self::One => QueryResultMask::ONE,
            Self::OneOrNone => QueryResultMask::ONE | QueryResultMask::NONE,
            Self::Many => QueryResultMask::MANY,
            Self::ManyOrNone | Self::Any => QueryResultMask::ANY,
            Self::None => QueryResultMask::NONE,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .without_time()
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config = DatabaseConfig::new(&cli.database).max_connections(cli.max_connections);
    let db = Database::connect(&config).await?;

    for sql in &cli.setup {
        db.execute(&Statement::raw(sql.as_str())).await?;
    }

    let statement = if cli.params.is_empty() {
        Statement::raw(cli.query.as_str())
    } else {
        let mut statement = Statement::new(cli.query.as_str());
        for param in &cli.params {
            statement = statement.bind(parse_param(param));
        }
        statement
    };

    // Cardinality violations are logged by the query helper and reported
    // through the returned error.
    let result = db.query(&statement, cli.expect.mask()).await?;
    info!(command = %result.command, rows = result.len(), "Query succeeded");
    println!("{}", serde_json::to_string_pretty(&result.rows)?);

    Ok(())
}
