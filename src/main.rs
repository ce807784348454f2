// ==========================================
// 球员交易计算器 - 命令行入口
// ==========================================
// 用法:
//   dynasty-trade players.xlsx
//   dynasty-trade players.xlsx --top 20
//   dynasty-trade players.xlsx --side-a "Josh Allen-0" --side-b "Bijan Robinson-3"
// ==========================================

use clap::Parser;
use dynasty_trade::app::AppState;
use dynasty_trade::config::AppConfig;
use dynasty_trade::domain::TradeSide;
use dynasty_trade::{i18n, logging, ApiError};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "dynasty-trade")]
#[command(about = "Import player valuations and evaluate a two-sided trade", long_about = None)]
#[command(version)]
struct Cli {
    /// Spreadsheet file (.xlsx, .xls or .csv)
    file: PathBuf,

    /// Config file (default: <config_dir>/dynasty-trade/config.json)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Message language (en, zh-CN); overrides config
    #[arg(short, long)]
    locale: Option<String>,

    /// Number of ranked players to print
    #[arg(short, long, default_value_t = 10)]
    top: usize,

    /// Player ids on side A
    #[arg(long = "side-a", num_args = 1..)]
    side_a: Vec<String>,

    /// Player ids on side B
    #[arg(long = "side-b", num_args = 1..)]
    side_b: Vec<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            // 配置不可用时按 --locale（若受支持）输出提示
            let locale = cli
                .locale
                .as_deref()
                .filter(|l| i18n::is_supported(l))
                .unwrap_or("en");
            eprintln!("{}", e.user_message(locale));
            return Ok(ExitCode::FAILURE);
        }
    };

    // 初始化日志系统
    logging::init(&config.log_filter);
    i18n::set_locale(&config.locale);

    tracing::info!("==================================================");
    tracing::info!("{}", dynasty_trade::APP_NAME);
    tracing::info!("系统版本: {}", dynasty_trade::VERSION);
    tracing::info!("界面语言: {}", i18n::current_locale());
    tracing::info!("==================================================");

    let state = AppState::new(config);
    let locale = state.config.locale.clone();

    let file_path = cli.file.to_string_lossy().to_string();
    let response = match state.import_api.import_file(&file_path).await {
        Ok(response) => response,
        Err(e) => {
            tracing::error!(kind = e.kind(), "导入失败: {}", e);
            eprintln!("{}", e.user_message(&locale));
            return Ok(ExitCode::FAILURE);
        }
    };
    println!("{}", response.message);

    if let Some(loaded) = state.store.dataset()? {
        println!();
        println!("{:>4}  {:<28} {:>10} {:>8} {:>8}  id", "#", "name", "value", "nb10", "ppg");
        for (rank, player) in loaded.dataset.records().iter().take(cli.top).enumerate() {
            let ppg = player
                .ppg
                .map(|v| format!("{:.1}", v))
                .unwrap_or_else(|| "-".to_string());
            println!(
                "{:>4}  {:<28} {:>10.2} {:>8.2} {:>8}  {}",
                rank + 1,
                player.name,
                player.value_score,
                player.nb10,
                ppg,
                player.id
            );
        }
    }

    if cli.side_a.is_empty() && cli.side_b.is_empty() {
        return Ok(ExitCode::SUCCESS);
    }

    let sides = [(TradeSide::A, &cli.side_a), (TradeSide::B, &cli.side_b)];
    for (side, ids) in sides {
        for id in ids {
            if let Err(e) = state.trade_api.add_player(side, id) {
                return Ok(report(&e, &locale));
            }
        }
    }

    let summary = match state.trade_api.summary() {
        Ok(summary) => summary,
        Err(e) => return Ok(report(&e, &locale)),
    };
    println!();
    println!(
        "Team A: {:.1}  |  Team B: {:.1}  |  Difference: {:.1}",
        summary.summary.side_a_total, summary.summary.side_b_total, summary.summary.difference
    );
    println!("{}", summary.verdict);

    Ok(ExitCode::SUCCESS)
}

/// 加载配置并应用 --locale 覆盖
fn load_config(cli: &Cli) -> Result<AppConfig, ApiError> {
    let mut config = AppConfig::load_or_default(cli.config.as_deref())?;
    if let Some(locale) = &cli.locale {
        config.locale = locale.clone();
        config.validate()?;
    }
    Ok(config)
}

fn report(err: &ApiError, locale: &str) -> ExitCode {
    tracing::error!(kind = err.kind(), "{}", err);
    eprintln!("{}", err.user_message(locale));
    ExitCode::FAILURE
}
