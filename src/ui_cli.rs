use std::io::{self, BufRead, Write};

use crate::app::AppError;
use crate::config::Config;
use crate::field::LoanField;
use crate::form::{Evaluation, LoanForm};
use crate::i18n::{keys, Translator};
use crate::normalize::{self, format_as_currency_display};

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Emi,
    Format,
    Ranges,
    Exit,
}

impl MenuChoice {
    /// 메뉴 번호를 선택지로 바꾼다.
    pub fn parse(sel: &str) -> Option<Self> {
        match sel.trim() {
            "1" => Some(MenuChoice::Emi),
            "2" => Some(MenuChoice::Format),
            "3" => Some(MenuChoice::Ranges),
            "0" => Some(MenuChoice::Exit),
            _ => None,
        }
    }
}

/// 메인 메뉴를 표시하고 선택값을 반환한다.
pub fn main_menu(tr: &Translator) -> Result<MenuChoice, AppError> {
    println!("{}", tr.t(keys::MAIN_MENU_TITLE));
    println!("{}", tr.t(keys::MAIN_MENU_EMI));
    println!("{}", tr.t(keys::MAIN_MENU_FORMAT));
    println!("{}", tr.t(keys::MAIN_MENU_RANGES));
    println!("{}", tr.t(keys::MAIN_MENU_EXIT));
    loop {
        let sel = read_line(&tr.t(keys::PROMPT_MENU_SELECT))?;
        match MenuChoice::parse(&sel) {
            Some(choice) => return Ok(choice),
            None => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
        }
    }
}

/// EMI 계산 메뉴를 처리한다.
pub fn handle_emi(tr: &Translator, cfg: &Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::EMI_HEADING));
    println!("{}", tr.t(keys::EMI_NOTE));
    let principal = read_line(&tr.t(keys::PROMPT_PRINCIPAL))?;
    let tenure = read_line(&tr.t(keys::PROMPT_TENURE))?;
    let rate = read_line(&tr.t(keys::PROMPT_RATE))?;
    let form = LoanForm::from_texts(&cfg.ranges, &principal, &tenure, &rate);
    print_evaluation(tr, &form, &form.evaluate());
    Ok(())
}

/// 금액 표시 형식 메뉴를 처리한다.
pub fn handle_format(tr: &Translator) -> Result<(), AppError> {
    println!("{}", tr.t(keys::FORMAT_HEADING));
    let amount = read_f64(tr, &tr.t(keys::PROMPT_AMOUNT))?;
    let decimals = read_line(&tr.t(keys::PROMPT_DECIMALS))?
        .trim()
        .parse::<usize>()
        .unwrap_or(0);
    let formatted = format_as_currency_display(amount, decimals);
    println!("{} {formatted}", tr.t(keys::RESULT_FORMATTED));
    println!(
        "{} {}",
        tr.t(keys::RESULT_PARSED_BACK),
        normalize::parse_displayed_number(&formatted)
    );
    Ok(())
}

/// 설정된 입력 범위를 표시한다.
pub fn handle_ranges(tr: &Translator, cfg: &Config) {
    println!("{}", tr.t(keys::RANGES_HEADING));
    println!("{}", tr.t(keys::RANGES_COLUMNS));
    for field in LoanField::ALL {
        let spec = field.range(&cfg.ranges);
        println!(
            "{}: {} / {} / {} / {}",
            tr.t(field.label_key()),
            spec.min,
            spec.max,
            spec.step,
            spec.default_value
        );
    }
}

/// 계산 결과를 출력한다. 대화형 메뉴와 단발 실행이 함께 쓴다.
pub fn print_evaluation(tr: &Translator, form: &LoanForm, eval: &Evaluation) {
    println!("{}", tr.t(keys::RESULT_INPUTS_USED));
    for field in LoanField::ALL {
        let unit = field
            .unit_key()
            .map(|key| format!(" {}", tr.t(key)))
            .unwrap_or_default();
        println!(
            "  {}: {}{unit}",
            tr.t(field.label_key()),
            normalize::display_field_value(field, &form.get(field)),
        );
    }
    println!(
        "{} {}",
        tr.t(keys::RESULT_EMI),
        format_as_currency_display(eval.result.emi, 0)
    );
    println!(
        "{} {}",
        tr.t(keys::RESULT_TOTAL_INTEREST),
        format_as_currency_display(eval.result.total_interest, 0)
    );
    println!(
        "{} {}",
        tr.t(keys::RESULT_TOTAL_PAYABLE),
        format_as_currency_display(eval.breakdown.total_payable, 0)
    );
    println!(
        "{} {:.2} %",
        tr.t(keys::RESULT_INTEREST_SHARE),
        eval.breakdown.interest_percent
    );
}

fn read_line(prompt: &str) -> Result<String, AppError> {
    print!("{prompt}");
    io::stdout().flush()?;
    let mut buf = String::new();
    let read = io::stdin().lock().read_line(&mut buf)?;
    if read == 0 {
        return Err(AppError::Io(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "stdin closed",
        )));
    }
    Ok(buf)
}

fn read_f64(tr: &Translator, prompt: &str) -> Result<f64, AppError> {
    loop {
        let s = read_line(prompt)?;
        let v = normalize::parse_displayed_number(&s);
        if v.is_finite() {
            return Ok(v);
        }
        println!("{}", tr.t(keys::ERROR_INVALID_NUMBER));
    }
}
