use crate::field::LoanField;
use crate::normalize::CURRENCY_SYMBOL;

/// 텍스트 상자에 새로 입력된 문자를 받아들일지 판단한다.
///
/// 원금/기간은 숫자만, 이율은 숫자와 소수점을 허용한다.
/// 백스페이스나 방향키 같은 편집 키는 위젯이 처리하므로 여기서 다루지 않는다.
pub fn accepts_keystroke(field: LoanField, ch: char) -> bool {
    ch.is_ascii_digit() || (ch == '.' && field.accepts_decimal_point())
}

/// 입력 문자열에서 허용되지 않는 문자를 걸러낸다.
///
/// 원금은 서식화된 표시(`₹`, `,`)가 텍스트 상자에 남아 있으므로 그대로 둔다.
pub fn filter_typed_text(field: LoanField, text: &str) -> String {
    text.chars()
        .filter(|&c| {
            accepts_keystroke(field, c)
                || (field.is_currency() && (c == ',' || CURRENCY_SYMBOL.contains(c)))
        })
        .collect()
}
