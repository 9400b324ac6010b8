use thiserror::Error;

use crate::config::Config;
use crate::i18n::{self, Translator};
use crate::ui_cli;
use crate::ui_cli::MenuChoice;

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum AppError {
    /// 표준 입출력 오류
    #[error("입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    /// 설정 로드 오류
    #[error("설정 오류: {0}")]
    Config(#[from] crate::config::ConfigError),
}

/// CLI 애플리케이션의 메인 루프를 실행한다.
pub fn run(config: &Config, tr: &Translator) -> Result<(), AppError> {
    loop {
        match ui_cli::main_menu(tr)? {
            MenuChoice::Emi => ui_cli::handle_emi(tr, config)?,
            MenuChoice::Format => ui_cli::handle_format(tr)?,
            MenuChoice::Ranges => ui_cli::handle_ranges(tr, config),
            MenuChoice::Exit => {
                println!("{}", tr.t(i18n::keys::APP_EXIT));
                break;
            }
        }
    }
    Ok(())
}
