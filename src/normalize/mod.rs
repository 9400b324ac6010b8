//! 입력값 정규화 모듈 모음. 표시 문자열과 숫자 사이를 오가며 범위를 맞춘다.

pub mod currency;
mod decimal;
pub mod field_text;
pub mod keystroke;
pub mod parse;
pub mod range;

pub use currency::{format_as_currency_display, format_grouped_indian, CURRENCY_SYMBOL};
pub use field_text::{display_field_value, normalize_field_text};
pub use keystroke::{accepts_keystroke, filter_typed_text};
pub use parse::parse_displayed_number;
pub use range::{clamp_to_range, percent_in_range, NormalizedValue, RangeSpec};
