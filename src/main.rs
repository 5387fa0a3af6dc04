use clap::Parser;
use seed_lottery::config::cli::{Cli, Command, DrawArgs, ShowArgs};
use seed_lottery::config::{build_engine, LotteryConfig};
use seed_lottery::core::report::{render_text, write_exports};
use seed_lottery::utils::error::{ErrorSeverity, LotteryError, Result};
use seed_lottery::utils::{logger, validation::Validate};
use seed_lottery::core::ConfigProvider;
use seed_lottery::{LotteryResult, Seed};
use std::path::PathBuf;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // 載入配置（未指定時使用預設值）
    let config = match &cli.config {
        Some(path) => match LotteryConfig::from_file(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("❌ Failed to load config file '{}': {}", path.display(), e);
                eprintln!("💡 Make sure the file exists and is valid TOML format");
                std::process::exit(1);
            }
        },
        None => LotteryConfig::default(),
    };

    // 初始化日誌
    if cli.json_logs || config.json_logs() {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting seed-lottery");
    if cli.verbose {
        tracing::debug!("CLI args: {:?}", cli);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    let outcome = match &cli.command {
        Command::Draw(args) => run_draw(&config, args).await,
        Command::Show(args) => run_show(&config, args).await,
        Command::Seed => {
            println!("{}", Seed::random());
            Ok(())
        }
    };

    if let Err(e) = outcome {
        tracing::error!(
            "❌ Lottery failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );

        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 Suggestion: {}", e.recovery_suggestion());

        // 根據錯誤嚴重程度決定退出碼
        let exit_code = match e.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        };

        if exit_code > 0 {
            std::process::exit(exit_code);
        }
    }
}

async fn run_draw(config: &LotteryConfig, args: &DrawArgs) -> Result<()> {
    let entrant_text = args.entrant_text()?;

    let seed = match (&args.seed, args.random_seed) {
        (Some(seed), _) => seed.clone(),
        (None, true) => {
            let seed = Seed::random();
            tracing::info!("🎲 Generated seed {}", seed);
            seed.to_string()
        }
        (None, false) => {
            return Err(LotteryError::MissingConfigError {
                field: "--seed or --random-seed".to_string(),
            })
        }
    };

    let engine = build_engine(config)?;

    let result = if args.save {
        let saved = engine.save(&entrant_text, &seed).await?;
        println!("🔗 Draw id: {}", saved.id);
        println!(
            "⏳ Retrievable until {}",
            saved.expires_at.format("%Y-%m-%d %H:%M:%S UTC")
        );
        saved.result
    } else {
        engine.draw(&entrant_text, &seed)?
    };

    emit(config, &result, args.json, args.export.as_ref())
}

async fn run_show(config: &LotteryConfig, args: &ShowArgs) -> Result<()> {
    let engine = build_engine(config)?;
    let result = engine.retrieve(&args.id).await?;
    emit(config, &result, args.json, args.export.as_ref())
}

fn emit(
    config: &LotteryConfig,
    result: &LotteryResult,
    json: bool,
    export: Option<&Option<PathBuf>>,
) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(result)?);
    } else {
        println!("{}", render_text(result));
    }

    if let Some(dir) = export {
        let dir = dir
            .clone()
            .unwrap_or_else(|| PathBuf::from(config.output_directory()));
        let formats = config.parsed_export_formats()?;
        let written = write_exports(&dir, result, &formats)?;
        for path in written {
            println!("📁 Output saved to: {}", path.display());
        }
    }

    Ok(())
}
