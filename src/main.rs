use clap::Parser;
use showcase_site::adapters::console::render_card;
use showcase_site::core::ConfigProvider;
use showcase_site::core::links::{malformed_links, site_links};
use showcase_site::domain::model::ContactForm;
use showcase_site::utils::error::ErrorSeverity;
use showcase_site::utils::{logger, validation::Validate};
use showcase_site::{
    CliConfig, Command, ConsoleNotifier, DisplayCard, RestContentSource, SiteConfig, SiteError,
    SitePage, Submission, SubmissionHandler,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = CliConfig::parse();

    logger::init_logger(cli.verbose, logger::LogFormat::from_flag(cli.json_logs));

    tracing::info!("Starting showcase-site CLI");
    tracing::debug!("CLI config: {:?}", cli);

    let config = match SiteConfig::from_file(&cli.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Failed to load config file '{}': {}", cli.config, e);
            eprintln!("💡 Make sure the file exists and is valid TOML format");
            std::process::exit(1);
        }
    };

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    if let Err(e) = run(cli.command, &config).await {
        tracing::error!(
            "❌ Command failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());

        let exit_code = match e.severity() {
            ErrorSeverity::Low => 4,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        };
        std::process::exit(exit_code);
    }

    Ok(())
}

async fn run(command: Command, config: &SiteConfig) -> Result<(), SiteError> {
    match command {
        Command::Services { json } => {
            let page = SitePage::new(RestContentSource::from_config(config));
            page.mount_services().await;
            let cards = page.services().cards().await.unwrap_or_default();
            print_cards(&cards, json)
        }
        Command::Portfolio { json } => {
            let page = SitePage::new(RestContentSource::from_config(config));
            page.mount_portfolio().await;
            let cards = page.portfolio().cards().await.unwrap_or_default();
            print_cards(&cards, json)
        }
        Command::Contact {
            name,
            email,
            message,
            phone,
            subject,
            service_type,
        } => {
            let handler = SubmissionHandler::new(
                RestContentSource::from_config(config),
                ConsoleNotifier,
                config.submission_messages(),
            );
            let mut form = ContactForm {
                name,
                email,
                phone,
                subject,
                message,
                service_type,
            };

            match handler.submit(&mut form).await? {
                Submission::Sent | Submission::Busy => Ok(()),
                // The failure toast has already been printed.
                Submission::Failed => std::process::exit(2),
            }
        }
        Command::Links => {
            let links = site_links(config.whatsapp_phone(), &config.contact.phone);
            for link in &links {
                println!("{:<20} {:?}\t{}", link.label, link.kind, link.href);
            }

            let broken = malformed_links(&links);
            for (link, e) in &broken {
                eprintln!("❌ {}: {}", link.label, e);
            }
            if broken.is_empty() {
                println!("✅ All {} links are well-formed", links.len());
                Ok(())
            } else {
                std::process::exit(1)
            }
        }
    }
}

fn print_cards(cards: &[DisplayCard], json: bool) -> Result<(), SiteError> {
    if json {
        println!("{}", serde_json::to_string_pretty(cards)?);
        return Ok(());
    }

    for card in cards {
        println!("{}\n", render_card(card));
    }
    tracing::info!("Rendered {} cards", cards.len());
    Ok(())
}
