/// 원금/이자 구성 차트에 쓰는 수치.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Breakdown {
    /// 원금 [₹]
    pub principal: f64,
    /// 이자 합계 [₹]
    pub total_interest: f64,
    /// 총 상환액 = 원금 + 이자 [₹]
    pub total_payable: f64,
    /// 총 상환액 중 이자 비중 [%], 소수 둘째 자리 반올림
    pub interest_percent: f64,
    /// 총 상환액 중 원금 비중 [%]
    pub principal_percent: f64,
}

/// 원금과 이자 합계로 차트 구성을 계산한다.
///
/// 총 상환액이 0이면 비중을 0으로 둔다.
pub fn breakdown(principal: f64, total_interest: f64) -> Breakdown {
    let total_payable = principal + total_interest;
    let interest_percent = if total_payable != 0.0 && total_payable.is_finite() {
        round_to(total_interest / total_payable * 100.0, 2)
    } else {
        0.0
    };
    let principal_percent = if total_payable != 0.0 && total_payable.is_finite() {
        round_to(100.0 - interest_percent, 2)
    } else {
        0.0
    };
    Breakdown {
        principal,
        total_interest,
        total_payable,
        interest_percent,
        principal_percent,
    }
}

fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10_f64.powi(places);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_loan_interest_share() {
        let b = breakdown(10_000_000.0, 5_950_000.0);
        assert_eq!(b.total_payable, 15_950_000.0);
        // 5.95M / 15.95M = 37.304...%
        assert_eq!(b.interest_percent, 37.3);
        assert_eq!(b.principal_percent, 62.7);
    }

    #[test]
    fn empty_loan_has_no_share() {
        let b = breakdown(0.0, 0.0);
        assert_eq!(b.interest_percent, 0.0);
        assert_eq!(b.principal_percent, 0.0);
    }
}
