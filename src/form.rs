//! 텍스트 입력 → 정규화 → 계산으로 이어지는 한 번의 화면 갱신 흐름.

use crate::config::RangeSet;
use crate::field::LoanField;
use crate::finance::{self, Breakdown, LoanInputs, LoanResult};
use crate::normalize::{self, NormalizedValue};

/// 범위에 맞춘 세 입력값.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoanForm {
    pub principal: NormalizedValue,
    pub tenure: NormalizedValue,
    pub rate: NormalizedValue,
}

/// 계산 결과와 차트 구성.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Evaluation {
    pub inputs: LoanInputs,
    pub result: LoanResult,
    pub breakdown: Breakdown,
}

impl LoanForm {
    /// 각 항목의 기본값으로 채운다.
    pub fn defaults(ranges: &RangeSet) -> Self {
        let pick = |field: LoanField| {
            let spec = field.range(ranges);
            spec.clamp(spec.default_value, field.rounds_to_step())
        };
        Self {
            principal: pick(LoanField::Principal),
            tenure: pick(LoanField::Tenure),
            rate: pick(LoanField::Rate),
        }
    }

    /// 표시 문자열 세 개를 해석해 범위에 맞춘다.
    pub fn from_texts(ranges: &RangeSet, principal: &str, tenure: &str, rate: &str) -> Self {
        Self {
            principal: normalize::normalize_field_text(LoanField::Principal, ranges, principal),
            tenure: normalize::normalize_field_text(LoanField::Tenure, ranges, tenure),
            rate: normalize::normalize_field_text(LoanField::Rate, ranges, rate),
        }
    }

    pub fn get(&self, field: LoanField) -> NormalizedValue {
        match field {
            LoanField::Principal => self.principal,
            LoanField::Tenure => self.tenure,
            LoanField::Rate => self.rate,
        }
    }

    pub fn set(&mut self, field: LoanField, value: NormalizedValue) {
        match field {
            LoanField::Principal => self.principal = value,
            LoanField::Tenure => self.tenure = value,
            LoanField::Rate => self.rate = value,
        }
    }

    pub fn inputs(&self) -> LoanInputs {
        LoanInputs {
            principal: self.principal.value(),
            tenure_years: self.tenure.value(),
            annual_rate_percent: self.rate.value(),
        }
    }

    /// EMI, 이자 합계, 차트 구성을 계산한다.
    pub fn evaluate(&self) -> Evaluation {
        let inputs = self.inputs();
        let result = finance::calculate(&inputs);
        let breakdown = finance::breakdown(inputs.principal, result.total_interest);
        tracing::debug!(
            principal = inputs.principal,
            tenure = inputs.tenure_years,
            rate = inputs.annual_rate_percent,
            emi = result.emi,
            "loan evaluated"
        );
        Evaluation {
            inputs,
            result,
            breakdown,
        }
    }
}
