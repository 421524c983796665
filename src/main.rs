use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use unit_converter::{app, config, i18n};

#[derive(Debug, Parser)]
#[command(name = "unit_converter", version, about = "Multi-category unit converter")]
struct Cli {
    /// 표시 언어 (auto, ko, en)
    #[arg(long, short = 'L')]
    lang: Option<String>,

    /// 설정 파일 경로
    #[arg(long, default_value = config::DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// 로그 상세도 (-v: info, -vv: debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// 한 번 변환하고 종료한다
    Convert {
        #[arg(allow_negative_numbers = true)]
        value: f64,
        from: String,
        to: String,
        /// 범주 (생략 시 단위로 추정)
        #[arg(long, short)]
        category: Option<String>,
    },
    /// 범주 또는 범주의 단위 목록을 출력한다
    List { category: Option<String> },
}

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 CLI 애플리케이션을 실행한다.
fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let lang = i18n::resolve_language(cli.lang.as_deref(), None);
    let mut tr = i18n::Translator::new_with_pack(&lang, None);
    if let Err(err) = try_run(cli, &mut tr) {
        eprintln!("{}: {err}", tr.t(i18n::keys::ERROR_PREFIX));
        std::process::exit(1);
    }
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "unit_converter=info",
        _ => "unit_converter=debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn try_run(cli: Cli, tr: &mut i18n::Translator) -> Result<(), app::AppError> {
    match cli.command {
        Some(Command::Convert {
            value,
            from,
            to,
            category,
        }) => {
            // 단발성 명령은 설정 파일을 만들지 않는다
            let cfg = config::load(&cli.config)?;
            app::run_convert(&cfg, value, &from, &to, category.as_deref())
        }
        Some(Command::List { category }) => app::run_list(category.as_deref()),
        None => {
            let mut cfg = config::load_or_default(&cli.config)?;
            let lang = i18n::resolve_language(cli.lang.as_deref(), Some(&cfg.language));
            *tr = i18n::Translator::new_with_pack(&lang, None);
            app::run(&mut cfg, &cli.config, tr)
        }
    }
}
