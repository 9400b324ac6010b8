use std::borrow::Cow;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use sys_locale::get_locale;

/// 문자열 키를 모아두는 네임스페이스.
pub mod keys {
    pub const ERROR_PREFIX: &str = "general.error_prefix";
    pub const APP_EXIT: &str = "general.app_exit";

    pub const MAIN_MENU_TITLE: &str = "main_menu.title";
    pub const MAIN_MENU_EMI: &str = "main_menu.emi";
    pub const MAIN_MENU_FORMAT: &str = "main_menu.format";
    pub const MAIN_MENU_RANGES: &str = "main_menu.ranges";
    pub const MAIN_MENU_EXIT: &str = "main_menu.exit";
    pub const PROMPT_MENU_SELECT: &str = "prompt.menu_select";
    pub const INVALID_SELECTION_RETRY: &str = "error.invalid_selection_retry";

    pub const EMI_HEADING: &str = "emi.heading";
    pub const EMI_NOTE: &str = "emi.note";
    pub const PROMPT_PRINCIPAL: &str = "prompt.principal";
    pub const PROMPT_TENURE: &str = "prompt.tenure";
    pub const PROMPT_RATE: &str = "prompt.rate";
    pub const RESULT_INPUTS_USED: &str = "result.inputs_used";
    pub const RESULT_EMI: &str = "result.emi";
    pub const RESULT_TOTAL_INTEREST: &str = "result.total_interest";
    pub const RESULT_TOTAL_PAYABLE: &str = "result.total_payable";
    pub const RESULT_INTEREST_SHARE: &str = "result.interest_share";

    pub const FORMAT_HEADING: &str = "format.heading";
    pub const PROMPT_AMOUNT: &str = "prompt.amount";
    pub const PROMPT_DECIMALS: &str = "prompt.decimals";
    pub const RESULT_FORMATTED: &str = "result.formatted";
    pub const RESULT_PARSED_BACK: &str = "result.parsed_back";

    pub const RANGES_HEADING: &str = "ranges.heading";
    pub const RANGES_COLUMNS: &str = "ranges.columns";

    pub const FIELD_PRINCIPAL: &str = "field.principal";
    pub const FIELD_TENURE: &str = "field.tenure";
    pub const FIELD_RATE: &str = "field.rate";
    pub const UNIT_YEARS: &str = "unit.years";
    pub const UNIT_PERCENT: &str = "unit.percent";

    pub const ERROR_INVALID_NUMBER: &str = "error.invalid_number";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Ko,
    En,
}

impl Language {
    fn from_code(code: &str) -> Self {
        let c = code.to_lowercase();
        if c.starts_with("ko") {
            Language::Ko
        } else {
            Language::En
        }
    }

    pub fn as_code(&self) -> &'static str {
        match self {
            Language::Ko => "ko",
            Language::En => "en",
        }
    }
}

/// 런타임 언어 번들을 제공한다.
#[derive(Debug, Clone)]
pub struct Translator {
    lang: Language,
    overrides: Option<HashMap<String, String>>,
}

impl Translator {
    /// 언어 코드(ko/en)에 따라 번역기를 생성한다. 알 수 없는 코드는 en으로 폴백한다.
    pub fn new(lang_code: &str) -> Self {
        Self {
            lang: Language::from_code(lang_code),
            overrides: None,
        }
    }

    /// 언어 코드 + 언어팩 디렉터리(locales/ 등)를 받아서 번역기를 생성한다.
    /// 디렉터리가 없거나 파일이 없으면 내장 언어팩을 사용한다.
    pub fn new_with_pack(lang_code: &str, pack_dir: Option<&str>) -> Self {
        let overrides = pack_dir
            .and_then(|dir| load_overrides(dir, lang_code))
            .or_else(|| load_overrides("locales", lang_code))
            .or_else(|| built_in_pack(lang_code));
        Self {
            lang: Language::from_code(lang_code),
            overrides,
        }
    }

    pub fn language(&self) -> Language {
        self.lang
    }

    pub fn language_code(&self) -> &'static str {
        self.lang.as_code()
    }

    /// 키를 조회해 문자열을 반환한다. 언어팩에 없으면 None.
    pub fn lookup(&self, key: &str) -> Option<String> {
        self.overrides.as_ref().and_then(|m| m.get(key).cloned())
    }

    /// 언어팩 값이 없으면 주어진 기본 문자열을 쓴다(GUI용).
    pub fn text(&self, key: &str, default: &str) -> String {
        self.lookup(key).unwrap_or_else(|| default.to_string())
    }

    /// 번역을 가져온다. 한국어 번역이 없으면 영어 문자열을 폴백한다.
    pub fn t(&self, key: &str) -> Cow<'static, str> {
        if let Some(v) = self.lookup(key) {
            return Cow::Owned(v);
        }
        let builtin = match self.lang {
            Language::Ko => ko(key).unwrap_or_else(|| en(key)),
            Language::En => en(key),
        };
        Cow::Borrowed(builtin)
    }
}

/// CLI 플래그/설정/시스템 순으로 언어 코드를 결정한다.
pub fn resolve_language(cli_arg: &str, config_lang: Option<&str>) -> String {
    normalize_lang(cli_arg)
        .or_else(|| config_lang.and_then(normalize_lang))
        .or_else(detect_system_language)
        .unwrap_or_else(|| "en-in".to_string())
}

fn normalize_lang(code: &str) -> Option<String> {
    let c = code.trim().to_lowercase();
    match c.as_str() {
        "ko" | "ko-kr" => Some("ko-kr".into()),
        "en" | "en-in" => Some("en-in".into()),
        "en-us" | "en-uk" | "en-gb" => Some("en-us".into()),
        "auto" | "" => None,
        other if other.starts_with("ko") => Some("ko-kr".into()),
        other if other.starts_with("en") => Some("en-in".into()),
        _ => None,
    }
}

fn normalize_locale_string(loc: &str) -> Option<String> {
    let lang = loc
        .split(['.', '_', '-'])
        .next()
        .unwrap_or_default()
        .to_lowercase();
    match lang.as_str() {
        "ko" => Some("ko-kr".into()),
        "en" => Some("en-in".into()),
        _ => None,
    }
}

/// 시스템 로케일에서 언어를 추정한다.
pub fn detect_system_language() -> Option<String> {
    if let Some(lang) = get_locale().as_deref().and_then(normalize_locale_string) {
        return Some(lang);
    }
    for var in ["LANG", "LC_ALL"] {
        if let Ok(value) = std::env::var(var) {
            if let Some(code) = normalize_locale_string(&value) {
                return Some(code);
            }
        }
    }
    None
}

/// TOML 기반 언어팩을 로드한다. 형식: key = "value" 또는 중첩 테이블.
fn load_overrides(dir: &str, lang: &str) -> Option<HashMap<String, String>> {
    let try_load = |code: &str| -> Option<HashMap<String, String>> {
        let path = Path::new(dir).join(format!("{code}.toml"));
        let content = fs::read_to_string(&path).ok()?;
        let map = parse_toml_to_map(&content);
        if map.is_some() {
            tracing::debug!(path = %path.display(), "language pack loaded");
        }
        map
    };

    // 1) full code (e.g., en-in)
    if let Some(map) = try_load(lang) {
        return Some(map);
    }
    // 2) base code (e.g., en)
    if let Some((base, _)) = lang.split_once(['-', '_']) {
        if let Some(map) = try_load(base) {
            return Some(map);
        }
    }
    None
}

fn parse_toml_to_map(src: &str) -> Option<HashMap<String, String>> {
    let value: toml::Value = toml::from_str(src).ok()?;
    let table = value.as_table()?;
    let mut map = HashMap::new();

    fn walk(prefix: &str, val: &toml::Value, out: &mut HashMap<String, String>) {
        match val {
            toml::Value::String(s) => {
                out.insert(prefix.to_string(), s.to_string());
            }
            toml::Value::Table(t) => {
                for (k, v) in t {
                    let key = if prefix.is_empty() {
                        k.clone()
                    } else {
                        format!("{prefix}.{k}")
                    };
                    walk(&key, v, out);
                }
            }
            _ => {}
        }
    }

    for (k, v) in table {
        walk(k, v, &mut map);
    }

    if map.is_empty() {
        None
    } else {
        Some(map)
    }
}

/// 내장 언어팩(파일이 없어도 동작하도록 빌드 시 포함).
fn built_in_pack(lang: &str) -> Option<HashMap<String, String>> {
    match lang.to_lowercase().as_str() {
        "en-in" | "en-us" | "en" => parse_toml_to_map(include_str!("../locales/en.toml")),
        "ko-kr" | "ko" => parse_toml_to_map(include_str!("../locales/ko-kr.toml")),
        _ => None,
    }
}

fn ko(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        ERROR_PREFIX => "오류",
        APP_EXIT => "프로그램을 종료합니다.",
        MAIN_MENU_TITLE => "\n=== EMI Calculator ===",
        MAIN_MENU_EMI => "1) EMI 계산",
        MAIN_MENU_FORMAT => "2) 금액 표시 형식 변환",
        MAIN_MENU_RANGES => "3) 입력 범위 보기",
        MAIN_MENU_EXIT => "0) 종료",
        PROMPT_MENU_SELECT => "메뉴 선택: ",
        INVALID_SELECTION_RETRY => "잘못된 입력입니다. 다시 선택하세요.",
        EMI_HEADING => "\n-- EMI 계산 --",
        EMI_NOTE => "참고: 입력값은 허용 범위로 맞춰지며, 0이나 빈 값은 최솟값으로 처리됩니다.",
        PROMPT_PRINCIPAL => "대출 원금 (예: ₹10,00,000): ",
        PROMPT_TENURE => "상환 기간 [년]: ",
        PROMPT_RATE => "연 이율 [%]: ",
        RESULT_INPUTS_USED => "적용된 입력값:",
        RESULT_EMI => "월 상환액(EMI):",
        RESULT_TOTAL_INTEREST => "이자 합계:",
        RESULT_TOTAL_PAYABLE => "총 상환액:",
        RESULT_INTEREST_SHARE => "이자 비중:",
        FORMAT_HEADING => "\n-- 금액 표시 형식 --",
        PROMPT_AMOUNT => "금액: ",
        PROMPT_DECIMALS => "소수 자릿수 (기본 0): ",
        RESULT_FORMATTED => "표시 형식:",
        RESULT_PARSED_BACK => "다시 읽은 값:",
        RANGES_HEADING => "\n-- 입력 범위 --",
        RANGES_COLUMNS => "항목 / 최소 / 최대 / 스텝 / 기본값",
        FIELD_PRINCIPAL => "대출 원금",
        FIELD_TENURE => "상환 기간",
        FIELD_RATE => "연 이율",
        UNIT_YEARS => "년",
        UNIT_PERCENT => "%",
        ERROR_INVALID_NUMBER => "숫자를 입력하세요.",
        _ => return None,
    })
}

fn en(key: &str) -> &'static str {
    use keys::*;
    match key {
        ERROR_PREFIX => "Error",
        APP_EXIT => "Exiting application.",
        MAIN_MENU_TITLE => "\n=== EMI Calculator ===",
        MAIN_MENU_EMI => "1) Calculate EMI",
        MAIN_MENU_FORMAT => "2) Currency display format",
        MAIN_MENU_RANGES => "3) Show input ranges",
        MAIN_MENU_EXIT => "0) Exit",
        PROMPT_MENU_SELECT => "Select menu: ",
        INVALID_SELECTION_RETRY => "Invalid input. Please choose again.",
        EMI_HEADING => "\n-- EMI --",
        EMI_NOTE => "Note: inputs are clamped to their ranges; 0 or empty becomes the minimum.",
        PROMPT_PRINCIPAL => "Loan amount (e.g. ₹10,00,000): ",
        PROMPT_TENURE => "Tenure [years]: ",
        PROMPT_RATE => "Interest rate [% p.a.]: ",
        RESULT_INPUTS_USED => "Inputs used:",
        RESULT_EMI => "Monthly EMI:",
        RESULT_TOTAL_INTEREST => "Total interest:",
        RESULT_TOTAL_PAYABLE => "Total payable:",
        RESULT_INTEREST_SHARE => "Interest share:",
        FORMAT_HEADING => "\n-- Currency display --",
        PROMPT_AMOUNT => "Amount: ",
        PROMPT_DECIMALS => "Decimal places (default 0): ",
        RESULT_FORMATTED => "Formatted:",
        RESULT_PARSED_BACK => "Parsed back:",
        RANGES_HEADING => "\n-- Input ranges --",
        RANGES_COLUMNS => "Field / Min / Max / Step / Default",
        FIELD_PRINCIPAL => "Loan amount",
        FIELD_TENURE => "Tenure",
        FIELD_RATE => "Interest rate",
        UNIT_YEARS => "yr",
        UNIT_PERCENT => "%",
        ERROR_INVALID_NUMBER => "Please enter a number.",
        _ => "",
    }
}
