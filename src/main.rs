use clap::Parser;
use portfolio_site::config::cli::{Command, ContactArgs, PortfolioArgs, RenderArgs};
use portfolio_site::content::registry::PORTFOLIO_ITEMS;
use portfolio_site::core::contact::validate_form;
use portfolio_site::utils::error::ErrorSeverity;
use portfolio_site::utils::{logger, validation::Validate};
use portfolio_site::{
    ActiveCategory, CliConfig, ContactFlow, EmailJsRelay, LocalStorage, Page, PortfolioFilter,
    SectionVisibility, SiteConfig, SiteError, SubmitOutcome,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = CliConfig::parse();

    // 初始化日誌
    if cli.json_logs {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting portfolio-site");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let config = match SiteConfig::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => fail(&e),
    };

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        fail(&e);
    }

    let result = match &cli.command {
        Command::Render(args) => render(&config, args).await,
        Command::Portfolio(args) => list_portfolio(args),
        Command::Contact(args) => contact(&config, args).await,
    };

    if let Err(e) = result {
        tracing::error!(
            "❌ Command failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        fail(&e);
    }

    Ok(())
}

fn fail(e: &SiteError) -> ! {
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());

    let exit_code = match e.severity() {
        ErrorSeverity::Low => 2,
        ErrorSeverity::Medium | ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    };
    std::process::exit(exit_code);
}

async fn render(config: &SiteConfig, args: &RenderArgs) -> portfolio_site::Result<()> {
    let output_path = args
        .output
        .clone()
        .unwrap_or_else(|| config.site.output_path.clone());
    let storage = LocalStorage::new(output_path);

    let visibility = if args.reveal_all {
        SectionVisibility::all_visible()
    } else {
        SectionVisibility::new()
    };

    // 每個分類各輸出一頁，篩選按鈕互相連結
    for category in ActiveCategory::ALL {
        let page = Page::new(config)
            .with_category(category)
            .with_visibility(visibility.clone());
        let written = page.write_to(&storage).await?;
        tracing::info!("📁 Rendered {} view to {}", category, written);
        println!("📁 {}", written);
    }

    Ok(())
}

fn list_portfolio(args: &PortfolioArgs) -> portfolio_site::Result<()> {
    let filter = PortfolioFilter::new(args.category);
    let items = filter.visible(PORTFOLIO_ITEMS);
    tracing::debug!("{} of {} items match {}", items.len(), PORTFOLIO_ITEMS.len(), args.category);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&items)?);
        return Ok(());
    }

    for item in items {
        println!(
            "#{:<3} {:<28} [{}] {}",
            item.id,
            item.title.trim(),
            item.category.label(),
            item.url
        );
    }
    Ok(())
}

async fn contact(config: &SiteConfig, args: &ContactArgs) -> portfolio_site::Result<()> {
    let mut form = args.to_form();

    if args.dry_run {
        validate_form(&form)?;
        tracing::info!("🔍 DRY RUN MODE - relay will not be called");
        println!("{}", serde_json::to_string_pretty(&form)?);
        return Ok(());
    }

    let flow = ContactFlow::new(EmailJsRelay::from_config(&config.relay), config.templates());

    let outcome = flow.submit(&mut form).await;
    if let Some(toast) = outcome.toast() {
        println!("{}: {}", toast.title, toast.description);
    }

    match outcome {
        SubmitOutcome::Sent => Ok(()),
        SubmitOutcome::Failed { error, .. } | SubmitOutcome::Blocked { error } => Err(error),
    }
}
