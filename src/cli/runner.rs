//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands};
use crate::config::Config;
use crate::error::{Error, Result};
use crate::graphql::GraphqlClient;
use crate::output::render;
use crate::pagination::Paginator;
use crate::resources::{list_fields, list_items, list_projects};
use std::io::Write;
use std::time::Instant;
use tracing::info;

/// Where to update token scopes
const TOKEN_SETTINGS_URL: &str = "https://github.com/settings/tokens";

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command against the environment's configuration
    pub async fn run(&self) -> Result<()> {
        let config = self.load_config(Config::from_env()?)?;
        let out = self.execute(&config).await?;

        let mut stdout = std::io::stdout().lock();
        stdout.write_all(out.as_bytes())?;
        stdout.flush()?;
        Ok(())
    }

    /// Apply command-line overrides to a base configuration
    pub fn load_config(&self, base: Config) -> Result<Config> {
        let mut builder = base.into_builder();
        if let Some(page_size) = self.cli.page_size {
            builder = builder.page_size(page_size);
        }
        if self.cli.max_pages.is_some() {
            builder = builder.max_pages(self.cli.max_pages);
        }
        builder.build()
    }

    /// Fetch the requested collection and render it
    pub async fn execute(&self, config: &Config) -> Result<String> {
        let client = GraphqlClient::from_config(config)?;
        let paginator = Paginator::from_config(config);
        let format = self.cli.output;
        let start = Instant::now();

        let (count, out) = match &self.cli.command {
            Commands::Projects { owner, owner_type } => {
                let projects = list_projects(&client, &paginator, owner, *owner_type).await?;
                (projects.len(), render(&projects, format)?)
            }
            Commands::Items { project_id } => {
                let items = list_items(&client, &paginator, project_id).await?;
                (items.len(), render(&items, format)?)
            }
            Commands::Fields { project_id } => {
                let fields = list_fields(&client, &paginator, project_id).await?;
                (fields.len(), render(&fields, format)?)
            }
        };

        info!(
            records = count,
            format = %format,
            duration_ms = start.elapsed().as_millis() as u64,
            "Command complete"
        );
        Ok(out)
    }
}

/// User-facing message for a failed command
pub fn describe_error(err: &Error) -> String {
    match err {
        Error::InsufficientScope { scope } => format!(
            "Error: Your GitHub token does not have the required '{scope}' scope. \
             Please update your token's scopes at: {TOKEN_SETTINGS_URL}"
        ),
        Error::AuthenticationFailed { status } => format!(
            "Error: Authentication failed ({status}). \
             Please check your GitHub token and its permissions."
        ),
        other => format!("Error: {other}"),
    }
}
