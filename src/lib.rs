//! 핵심 계산 로직을 라이브러리로 분리하여 CLI와 GUI가 같은 코드를 쓴다.

pub mod app;
pub mod config;
pub mod debounce;
pub mod field;
pub mod finance;
pub mod form;
pub mod i18n;
pub mod normalize;
pub mod ui_cli;
