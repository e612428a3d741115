use std::io::{BufRead, Write};
use std::str::FromStr;
use std::sync::Arc;

use anyhow::Context;
use rust_decimal::Decimal;

use invest_journey::catalog::{JourneyRules, Program, ServiceCatalog};
use invest_journey::config::AppConfig;
use invest_journey::journey::{
    derive_journey, progress_stats, timeline_fill, JourneyStep, StatusStore, StepStatus,
};
use invest_journey::session::{
    BusinessModel, InvestmentType, InvestorStatus, LegalEntityType, OnboardingAnswers, Sector,
    SessionStore,
};
use invest_journey::store::{FileStorage, Storage};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let config = AppConfig::from_env()?;

    eprintln!("⚖️  Invest Journey v{}", env!("CARGO_PKG_VERSION"));
    eprintln!("   Storage: {}", config.data_path.display());
    eprintln!("   Locale: {}", config.locale);
    eprintln!("   Type `help` for commands. `quit` to exit.\n");

    let storage: Arc<dyn Storage> = Arc::new(
        FileStorage::open(&config.data_path)
            .with_context(|| format!("opening storage at {}", config.data_path.display()))?,
    );

    let catalog = ServiceCatalog::builtin(config.locale);
    let rules = JourneyRules::builtin(&catalog);
    let programs = Program::builtin(config.locale);
    let mut session = SessionStore::load(Arc::clone(&storage))?;

    let stdin = std::io::stdin();
    loop {
        print!("> ");
        std::io::stdout().flush()?;
        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let parts: Vec<&str> = line.split_whitespace().collect();
        let Some((&command, args)) = parts.split_first() else {
            continue;
        };

        let result = match command {
            "help" => {
                print_help();
                Ok(())
            }
            "login" => cmd_login(&mut session, args),
            "logout" => session.logout().map_err(Into::into),
            "onboard" => cmd_onboard(&mut session, args),
            "journey" => cmd_journey(&session, &rules, &catalog, &storage),
            "set" => cmd_set(&session, &rules, &catalog, &storage, args),
            "reset" => cmd_reset(&session, &rules, &catalog, &storage, args),
            "upload" => cmd_upload(&mut session, &catalog, args),
            "services" => {
                for service in catalog.iter() {
                    println!("{:24} {} ({})", service.id, service.name, service.agency);
                }
                Ok(())
            }
            "programs" => {
                for program in &programs {
                    println!("{:24} {}", program.id, program.name);
                }
                Ok(())
            }
            "docs" => {
                match session.current_user() {
                    Some(user) if !user.documents.is_empty() => {
                        for doc in &user.documents {
                            println!(
                                "{}  {} ({} bytes) for {}",
                                doc.uploaded_at.format("%Y-%m-%d %H:%M"),
                                doc.file_name,
                                doc.size_bytes,
                                doc.service_name
                            );
                        }
                    }
                    Some(_) => println!("No documents submitted yet."),
                    None => println!("Not logged in."),
                }
                Ok(())
            }
            "quit" | "exit" => break,
            other => {
                println!("Unknown command: {other}. Type `help`.");
                Ok(())
            }
        };

        if let Err(e) = result {
            println!("Error: {e}");
        }
    }

    Ok(())
}

fn print_help() {
    println!("  login <email> <new|existing>   start a session");
    println!("  onboard <foreign|local|gulf> <llc|branch|sole|jsc|sjsc> <sector> <capital> <standard|franchise> [partner|no-partner]");
    println!("  journey                        show the derived checklist and progress");
    println!("  set <step-id> <status>         set a step status (not_started|in_progress|in_review|completed)");
    println!("  reset <step-id>                reset a step to not started");
    println!("  upload <service-id> <file> [size] record a submitted document");
    println!("  services | programs | docs     reference tables and submitted documents");
    println!("  logout | quit");
}

fn cmd_login(session: &mut SessionStore, args: &[&str]) -> anyhow::Result<()> {
    let [email, status] = args else {
        anyhow::bail!("usage: login <email> <new|existing>");
    };
    let status = match *status {
        "new" => InvestorStatus::New,
        "existing" => InvestorStatus::Existing,
        other => anyhow::bail!("unknown investor status: {other}"),
    };
    let user = session.login(email, status)?;
    println!(
        "Logged in as {} ({} investor).",
        user.email, user.profile.investor_status
    );
    if !user.profile.has_onboarded {
        println!("Run `onboard` to build your journey.");
    }
    Ok(())
}

fn cmd_onboard(session: &mut SessionStore, args: &[&str]) -> anyhow::Result<()> {
    let (required, partner) = match args {
        [a, b, c, d, e] => (([*a, *b, *c, *d, *e]), None),
        [a, b, c, d, e, p] => (([*a, *b, *c, *d, *e]), Some(*p)),
        _ => anyhow::bail!(
            "usage: onboard <investment-type> <entity> <sector> <capital> <business-model> [partner|no-partner]"
        ),
    };
    let [investment_type, entity, sector, capital, model] = required;

    let answers = OnboardingAnswers {
        investment_type: parse_investment_type(investment_type)?,
        legal_entity_type: parse_entity(entity)?,
        sector: parse_sector(sector)?,
        capital: Decimal::from_str(capital).context("invalid capital amount")?,
        business_model: match model {
            "standard" => BusinessModel::Standard,
            "franchise" => BusinessModel::Franchise,
            other => anyhow::bail!("unknown business model: {other}"),
        },
        has_saudi_partner: match partner {
            None => None,
            Some("partner") => Some(true),
            Some("no-partner") => Some(false),
            Some(other) => anyhow::bail!("expected partner|no-partner, got {other}"),
        },
    };

    let minimum = answers.minimum_capital();
    let profile = session.complete_onboarding(answers)?;
    if profile.capital == minimum && minimum > Decimal::from_str(capital)? {
        println!("Capital raised to the {minimum} SAR minimum for this profile.");
    }
    println!("Onboarding complete. Run `journey` to see your checklist.");
    Ok(())
}

fn cmd_upload(
    session: &mut SessionStore,
    catalog: &ServiceCatalog,
    args: &[&str],
) -> anyhow::Result<()> {
    let (service_id, file_name, size) = match args {
        [service_id, file_name] => (*service_id, *file_name, 0u64),
        [service_id, file_name, size] => (
            *service_id,
            *file_name,
            size.parse().context("invalid file size")?,
        ),
        _ => anyhow::bail!("usage: upload <service-id> <file> [size]"),
    };
    let service = catalog
        .get(service_id)
        .with_context(|| format!("unknown service: {service_id}"))?;
    let mime_type = match file_name.rsplit_once('.') {
        Some((_, "pdf")) => "application/pdf",
        Some((_, "zip")) => "application/zip",
        _ => "application/octet-stream",
    };
    let added = session.add_documents(
        service,
        [(file_name.to_string(), size, mime_type.to_string())],
    )?;
    println!("Recorded {added} document(s) for {}.", service.name);
    Ok(())
}

fn cmd_journey(
    session: &SessionStore,
    rules: &JourneyRules,
    catalog: &ServiceCatalog,
    storage: &Arc<dyn Storage>,
) -> anyhow::Result<()> {
    let journey = current_journey(session, rules, catalog);
    if journey.is_empty() {
        println!("Your journey is not ready yet. Log in and complete onboarding first.");
        return Ok(());
    }

    let statuses = StatusStore::load(Arc::clone(storage), &journey)?;
    let stats = progress_stats(&journey, &statuses);

    println!(
        "Progress: {}% ({} of {} steps completed, {} in motion)",
        stats.percentage,
        stats.completed,
        stats.total,
        stats.progressed - stats.completed
    );
    if let Some(fill) = timeline_fill(&stats) {
        println!("Timeline fill: {:.0}% of the track.", fill * 100.0);
    }
    for step in &journey {
        let status = statuses.get(&step.id);
        let marker = match status {
            StepStatus::Completed => "✓",
            StepStatus::InReview => "◐",
            StepStatus::InProgress => "●",
            StepStatus::NotStarted => "○",
        };
        println!(
            "  {marker} {:24} {} [{status}] ({})",
            step.id, step.service.name, step.service.agency
        );
    }
    Ok(())
}

fn cmd_set(
    session: &SessionStore,
    rules: &JourneyRules,
    catalog: &ServiceCatalog,
    storage: &Arc<dyn Storage>,
    args: &[&str],
) -> anyhow::Result<()> {
    let [step_id, status] = args else {
        anyhow::bail!("usage: set <step-id> <status>");
    };
    let status = StepStatus::from_str(status).map_err(|e| anyhow::anyhow!(e))?;
    let journey = current_journey(session, rules, catalog);
    let mut statuses = StatusStore::load(Arc::clone(storage), &journey)?;
    statuses.set(step_id, status)?;
    println!("{step_id} → {status}");
    Ok(())
}

fn cmd_reset(
    session: &SessionStore,
    rules: &JourneyRules,
    catalog: &ServiceCatalog,
    storage: &Arc<dyn Storage>,
    args: &[&str],
) -> anyhow::Result<()> {
    let [step_id] = args else {
        anyhow::bail!("usage: reset <step-id>");
    };
    let journey = current_journey(session, rules, catalog);
    let mut statuses = StatusStore::load(Arc::clone(storage), &journey)?;
    statuses.reset(step_id)?;
    println!("{step_id} → {}", StepStatus::NotStarted);
    Ok(())
}

fn current_journey(
    session: &SessionStore,
    rules: &JourneyRules,
    catalog: &ServiceCatalog,
) -> Vec<JourneyStep> {
    match session.current_profile() {
        Some(profile) => derive_journey(profile, rules, catalog),
        None => Vec::new(),
    }
}

fn parse_investment_type(s: &str) -> anyhow::Result<InvestmentType> {
    Ok(match s {
        "foreign" => InvestmentType::Foreign,
        "local" => InvestmentType::Local,
        "gulf" => InvestmentType::Gulf,
        other => anyhow::bail!("unknown investment type: {other}"),
    })
}

fn parse_entity(s: &str) -> anyhow::Result<LegalEntityType> {
    Ok(match s {
        "llc" => LegalEntityType::Llc,
        "branch" => LegalEntityType::Branch,
        "sole" => LegalEntityType::Sole,
        "jsc" => LegalEntityType::Jsc,
        "sjsc" => LegalEntityType::Sjsc,
        other => anyhow::bail!("unknown legal entity type: {other}"),
    })
}

fn parse_sector(s: &str) -> anyhow::Result<Sector> {
    Ok(match s {
        "technology" => Sector::Technology,
        "industrial" => Sector::Industrial,
        "tourism" => Sector::Tourism,
        "real_estate" => Sector::RealEstate,
        "health" => Sector::Health,
        "trade" => Sector::Trade,
        other => anyhow::bail!("unknown sector: {other}"),
    })
}
