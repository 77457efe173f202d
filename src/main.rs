use clap::Parser;
use publish_relocate::utils::{logger, report, validation::Validate};
use publish_relocate::{CliConfig, DeployEngine, LocalFileSystem, SystemCommandRunner};

async fn run(cli: &CliConfig) -> publish_relocate::Result<()> {
    let config = cli.resolve()?;
    if cli.verbose {
        tracing::debug!("Resolved config: {:?}", config);
    }

    config.validate()?;
    tracing::info!("✅ Configuration loaded and validated");

    let engine = DeployEngine::new(SystemCommandRunner::new(), LocalFileSystem::new(), config);

    if cli.dry_run {
        let plan = engine.plan();
        tracing::info!("🔍 DRY RUN MODE - nothing will be executed");
        println!("Would run: {}", plan.command.display_line());
        if let Some(dir) = &plan.command.working_dir {
            println!("  in: {}", dir.display());
        }
        println!("Would move: {}", plan.source.display());
        println!("        to: {}", plan.destination.display());
        return Ok(());
    }

    let deploy_report = engine.run().await?;
    tracing::info!(
        "✅ Deploy finished in state {:?} (publish {}ms, relocate {}ms)",
        deploy_report.final_state,
        deploy_report.publish_ms,
        deploy_report.relocate_ms
    );

    // Report failures do not fail a completed deploy.
    if let Some(path) = &cli.report {
        match report::write_report(&deploy_report, path).await {
            Ok(()) => tracing::info!("📁 Report saved to: {}", path),
            Err(e) => tracing::warn!("⚠️ Could not write report to {}: {}", path, e),
        }
    }

    Ok(())
}

#[tokio::main]
async fn main() {
    let cli = CliConfig::parse();

    if cli.json_logs {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting publish-relocate");

    if let Err(e) = run(&cli).await {
        tracing::error!(
            "❌ Deploy failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());

        std::process::exit(e.exit_code());
    }
}
