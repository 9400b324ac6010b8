/// 소수 자릿수 상한. 이보다 큰 요청은 이 값으로 줄인다.
pub const MAX_FRACTION_DIGITS: usize = 100;

/// 음이 아닌 유한한 값을 소수 `places` 자리로 반올림해 (정수부, 소수부) 자릿수 문자열로 돌려준다.
///
/// 이진 오차가 결과를 바꾸지 않도록 값의 최단 십진 표기(`{:e}`)를 자릿수 단위로
/// 반올림한다. 정확히 절반이면 올린다. 1.005는 1.01, 8.25는 8.3이 된다.
pub(crate) fn round_half_up(abs: f64, places: usize) -> (String, String) {
    let places = places.min(MAX_FRACTION_DIGITS);
    let (digits, point) = shortest_digits(abs);

    // 남길 자릿수(정수부 포함). 음수면 모든 자리가 반올림 위치보다 아래에 있다.
    let keep = point + places as i64;
    let mut kept: Vec<u8> = Vec::new();
    let mut round_up = false;
    if keep >= 0 {
        let keep = keep as usize;
        kept.extend(digits.iter().take(keep));
        kept.resize(keep, 0);
        round_up = digits.get(keep).is_some_and(|&d| d >= 5);
    }

    if round_up {
        let mut carry = true;
        for d in kept.iter_mut().rev() {
            if *d == 9 {
                *d = 0;
            } else {
                *d += 1;
                carry = false;
                break;
            }
        }
        if carry {
            kept.insert(0, 1);
        }
    }

    if kept.len() <= places {
        let mut padded = vec![0; places + 1 - kept.len()];
        padded.append(&mut kept);
        kept = padded;
    }
    let split = kept.len() - places;
    let int_digits = strip_leading_zeros(&to_text(&kept[..split]));
    (int_digits, to_text(&kept[split..]))
}

/// 최단 십진 표기의 유효 숫자들과 소수점 위치(정수부 자릿수)를 구한다.
fn shortest_digits(abs: f64) -> (Vec<u8>, i64) {
    let sci = format!("{abs:e}");
    let (mantissa, exp) = sci.split_once('e').unwrap_or((sci.as_str(), "0"));
    let exp: i64 = exp.parse().unwrap_or(0);
    let digits = mantissa
        .bytes()
        .filter(u8::is_ascii_digit)
        .map(|b| b - b'0')
        .collect();
    (digits, exp + 1)
}

fn to_text(digits: &[u8]) -> String {
    digits.iter().map(|d| char::from(b'0' + d)).collect()
}

fn strip_leading_zeros(s: &str) -> String {
    let trimmed = s.trim_start_matches('0');
    if trimmed.is_empty() {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}
