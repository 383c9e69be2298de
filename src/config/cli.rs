use crate::domain::model::{ActiveCategory, ContactForm};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "portfolio-site")]
#[command(about = "Render the portfolio page and handle its contact form")]
pub struct CliConfig {
    /// Path to TOML configuration file (defaults to ./site.toml when present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Render the page once per gallery filter (index.html, portfolio-<category>.html)
    Render(RenderArgs),
    /// List portfolio items, optionally filtered by category
    Portfolio(PortfolioArgs),
    /// Submit the contact form through the email relay
    Contact(ContactArgs),
}

#[derive(Debug, Clone, Args)]
pub struct RenderArgs {
    /// Output directory (overrides site.output_path)
    #[arg(short, long)]
    pub output: Option<String>,

    /// Render every section already revealed
    #[arg(long)]
    pub reveal_all: bool,
}

#[derive(Debug, Clone, Args)]
pub struct PortfolioArgs {
    #[arg(long, value_enum, default_value_t = ActiveCategory::All)]
    pub category: ActiveCategory,

    /// Print items as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Clone, Args)]
pub struct ContactArgs {
    #[arg(long, default_value = "")]
    pub name: String,

    #[arg(long, default_value = "")]
    pub email: String,

    #[arg(long, default_value = "")]
    pub subject: String,

    #[arg(long, default_value = "")]
    pub message: String,

    /// Validate and show the payload without calling the relay
    #[arg(long)]
    pub dry_run: bool,
}

impl ContactArgs {
    pub fn to_form(&self) -> ContactForm {
        ContactForm::new(
            self.name.as_str(),
            self.email.as_str(),
            self.subject.as_str(),
            self.message.as_str(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_render_args() {
        let cli = CliConfig::try_parse_from(["portfolio-site", "render", "--output", "out"]).unwrap();

        match cli.command {
            Command::Render(args) => {
                assert_eq!(args.output.as_deref(), Some("out"));
                assert!(!args.reveal_all);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_render_always_writes_every_view() {
        // filter buttons link to every view, so a single-category render is not offered
        let result = CliConfig::try_parse_from(["portfolio-site", "render", "--category", "games"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_unknown_category_is_rejected() {
        let result = CliConfig::try_parse_from(["portfolio-site", "portfolio", "--category", "film"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_contact_args_become_form() {
        let cli = CliConfig::try_parse_from([
            "portfolio-site",
            "-v",
            "contact",
            "--name",
            "Ada",
            "--email",
            "ada@example.com",
            "--subject",
            "Hi",
            "--message",
            "Hello",
        ])
        .unwrap();

        assert!(cli.verbose);
        let Command::Contact(args) = cli.command else {
            panic!("expected contact command");
        };
        assert_eq!(
            args.to_form(),
            ContactForm::new("Ada", "ada@example.com", "Hi", "Hello")
        );
    }
}
