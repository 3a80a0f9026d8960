//! CLI entry point - the composition root.
//!
//! Command dispatch routes to handlers which delegate to `AppCore`.
//! Only `bootstrap` (and the web server's own bootstrap) touch the database.

use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use campus_cli::error::exit_code_for;
use campus_cli::{Cli, CliConfig, Commands, CourseCommand, StudentCommand, bootstrap, handlers};

#[tokio::main]
async fn main() {
    // Load environment variables before clap reads its env fallbacks
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(cli.default_log_filter()));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    if let Err(err) = run(cli).await {
        eprintln!("Error: {err:#}");
        std::process::exit(exit_code_for(&err));
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let Some(command) = cli.command else {
        // No command provided - show help
        Cli::command().print_help()?;
        return Ok(());
    };

    match command {
        Commands::Web(args) => handlers::web::execute(&args, cli.database).await?,
        Commands::Paths => handlers::paths::execute(cli.database)?,
        Commands::Students { command } => {
            let ctx = bootstrap(CliConfig::resolve(cli.database)?).await?;
            match command {
                StudentCommand::List => handlers::students::list(&ctx).await?,
                StudentCommand::Add { name } => handlers::students::add(&ctx, &name).await?,
                StudentCommand::Remove { id } => handlers::students::remove(&ctx, id).await?,
            }
        }
        Commands::Courses { command } => {
            let ctx = bootstrap(CliConfig::resolve(cli.database)?).await?;
            match command {
                CourseCommand::List { name } => handlers::courses::list(&ctx, name).await?,
                CourseCommand::Show { id } => handlers::courses::show(&ctx, id).await?,
                CourseCommand::Add { name, students } => {
                    handlers::courses::add(&ctx, &name, students).await?;
                }
                CourseCommand::Remove { id } => handlers::courses::remove(&ctx, id).await?,
            }
        }
    }

    Ok(())
}
