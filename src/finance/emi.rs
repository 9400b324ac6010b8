/// 1년의 개월 수.
pub const MONTHS_PER_YEAR: f64 = 12.0;

/// EMI 계산 입력.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoanInputs {
    /// 대출 원금 [₹]
    pub principal: f64,
    /// 상환 기간 [년]
    pub tenure_years: f64,
    /// 연 이율 [%]
    pub annual_rate_percent: f64,
}

/// EMI 계산 결과.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoanResult {
    /// 월 상환액 [₹/월]
    pub emi: f64,
    /// 전체 기간 이자 합계 [₹]
    pub total_interest: f64,
}

/// 상환 기간(년)을 개월 수로 환산한다. NaN은 그대로 전파된다.
pub fn months_from_tenure(tenure_years: f64) -> f64 {
    tenure_years * MONTHS_PER_YEAR
}

/// 월 이자(단리)를 구한다. 기간이 0이면 0.
///
/// `total_interest`와 대수적으로 같은 값을 다른 경로로 유도하며,
/// 공식 검증과 공식 안내 화면에서만 쓴다.
pub fn interest_per_month(principal: f64, tenure_years: f64, annual_rate_percent: f64) -> f64 {
    if tenure_years == 0.0 {
        return 0.0;
    }
    let months = months_from_tenure(tenure_years);
    principal * annual_rate_percent * 0.01 * tenure_years / months
}

/// 전체 기간의 이자 합계(단리)를 계산한다.
///
/// `principal × tenure × rate × 0.01`
pub fn total_interest(principal: f64, tenure_years: f64, annual_rate_percent: f64) -> f64 {
    principal * tenure_years * annual_rate_percent * 0.01
}

/// 월 상환액(EMI)을 계산한다. 기간이 0이면 0을 반환한다.
///
/// `(principal + total_interest) / months`
pub fn emi(principal: f64, tenure_years: f64, annual_rate_percent: f64) -> f64 {
    if tenure_years == 0.0 {
        return 0.0;
    }
    let interest = total_interest(principal, tenure_years, annual_rate_percent);
    (principal + interest) / months_from_tenure(tenure_years)
}

/// 입력 묶음으로 EMI와 이자 합계를 한 번에 계산한다.
pub fn calculate(input: &LoanInputs) -> LoanResult {
    LoanResult {
        emi: emi(
            input.principal,
            input.tenure_years,
            input.annual_rate_percent,
        ),
        total_interest: total_interest(
            input.principal,
            input.tenure_years,
            input.annual_rate_percent,
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_loan_matches_hand_calculation() {
        let res = calculate(&LoanInputs {
            principal: 10_000_000.0,
            tenure_years: 7.0,
            annual_rate_percent: 8.5,
        });
        assert!((res.total_interest - 5_950_000.0).abs() < 1e-6);
        assert!((res.emi - 189_880.952_380_952).abs() < 1e-6, "emi={}", res.emi);
    }

    #[test]
    fn zero_tenure_yields_zero() {
        assert_eq!(emi(1_000_000.0, 0.0, 10.0), 0.0);
        assert_eq!(total_interest(1_000_000.0, 0.0, 10.0), 0.0);
        assert_eq!(interest_per_month(1_000_000.0, 0.0, 10.0), 0.0);
    }

    #[test]
    fn both_interest_derivations_agree() {
        for &(p, t, r) in &[
            (10_000_000.0, 7.0, 8.5),
            (250_000.0, 3.0, 12.3),
            (1.0, 10.0, 5.0),
        ] {
            let via_month = interest_per_month(p, t, r) * months_from_tenure(t);
            let direct = total_interest(p, t, r);
            assert!((via_month - direct).abs() < 1e-6 * direct.max(1.0));
        }
    }

    #[test]
    fn negative_inputs_are_permissive() {
        let value = emi(-1000.0, 2.0, 10.0);
        assert!(value.is_finite());
        assert!(value < 0.0);
    }

    #[test]
    fn nan_tenure_propagates() {
        assert!(months_from_tenure(f64::NAN).is_nan());
        assert!(emi(1000.0, f64::NAN, 10.0).is_nan());
    }
}
