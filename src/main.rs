use std::path::PathBuf;

use clap::{Parser, Subcommand};
use solar_investment_toolbox::{app, config};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "solar_investment_toolbox")]
#[command(about = "Distributed solar generation investment analysis (NPV, IRR, payback)")]
struct Cli {
    /// 로그 상세도 (-v: debug, -vv: trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// 시나리오 파일로 투자 분석을 실행한다
    Run {
        /// 시나리오 TOML 경로
        scenario: PathBuf,

        /// 설정 파일 경로
        #[arg(short, long, default_value = config::DEFAULT_CONFIG_PATH)]
        config: PathBuf,

        /// CSV 보고서 저장 경로
        #[arg(long)]
        csv: Option<PathBuf>,

        /// 요약 문서(JSON) 저장 경로
        #[arg(long)]
        json: Option<PathBuf>,

        /// 연도별 표 출력
        #[arg(short, long)]
        yearly: bool,
    },

    /// 기준 시나리오를 TOML로 출력한다
    Template,

    /// 기본 설정 파일을 생성한다
    InitConfig {
        #[arg(short, long, default_value = config::DEFAULT_CONFIG_PATH)]
        config: PathBuf,
    },
}

/// 프로그램의 엔트리 포인트. 로그를 설정한 뒤 명령을 실행한다.
fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    if let Err(err) = try_run(cli) {
        tracing::error!("{err}");
        eprintln!("오류: {err}");
        std::process::exit(1);
    }
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn try_run(cli: Cli) -> Result<(), app::AppError> {
    match cli.command {
        Commands::Run {
            scenario,
            config,
            csv,
            json,
            yearly,
        } => {
            app::run(&app::RunOptions {
                scenario,
                config,
                csv,
                json,
                yearly,
            })?;
        }
        Commands::Template => print!("{}", app::scenario_template()?),
        Commands::InitConfig { config } => app::init_config(&config)?,
    }
    Ok(())
}
