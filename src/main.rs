use std::path::PathBuf;

use clap::Parser;
use emi_calculator::{app, config, form::LoanForm, i18n, ui_cli};
use tracing_subscriber::EnvFilter;

/// 대출 EMI 계산기 CLI.
#[derive(Debug, Parser)]
#[command(name = "emi_calculator_cli", version, about = "Loan EMI calculator")]
struct Args {
    /// 대출 원금. 표시 형식(₹10,00,000)도 받는다.
    #[arg(short, long)]
    principal: Option<String>,
    /// 상환 기간 [년]
    #[arg(short, long)]
    tenure: Option<String>,
    /// 연 이율 [%]
    #[arg(short, long)]
    rate: Option<String>,
    /// 언어 코드(auto/en-in/en-us/ko-kr)
    #[arg(short = 'L', long, default_value = "auto")]
    lang: String,
    /// 설정 파일 경로(기본: ./config.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,
}

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 CLI 애플리케이션을 실행한다.
fn main() {
    init_tracing();
    let args = Args::parse();
    let lang = i18n::resolve_language(&args.lang, None);
    if let Err(err) = try_run(args) {
        tracing::error!("{err}");
        let tr = i18n::Translator::new(&lang);
        eprintln!("{}: {err}", tr.t(i18n::keys::ERROR_PREFIX));
        std::process::exit(1);
    }
}

fn try_run(args: Args) -> Result<(), app::AppError> {
    let cfg = match &args.config {
        Some(path) => config::load_from_path(path)?,
        None => config::load_or_default()?,
    };
    let lang = i18n::resolve_language(&args.lang, Some(cfg.language.as_str()));
    let tr = i18n::Translator::new_with_pack(&lang, cfg.language_pack_dir.as_deref());
    tracing::debug!(lang = %lang, "language resolved");

    if args.principal.is_none() && args.tenure.is_none() && args.rate.is_none() {
        return app::run(&cfg, &tr);
    }

    // 빠진 항목은 기본값으로 채운다.
    let defaults = LoanForm::defaults(&cfg.ranges);
    let text_or_default = |arg: &Option<String>, fallback: String| {
        arg.clone().unwrap_or(fallback)
    };
    let form = LoanForm::from_texts(
        &cfg.ranges,
        &text_or_default(&args.principal, defaults.principal.to_string()),
        &text_or_default(&args.tenure, defaults.tenure.to_string()),
        &text_or_default(&args.rate, defaults.rate.to_string()),
    );
    ui_cli::print_evaluation(&tr, &form, &form.evaluate());
    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
