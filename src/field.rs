use crate::config::RangeSet;
use crate::i18n::keys;
use crate::normalize::RangeSpec;

/// 화면에서 다루는 대출 입력 항목.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LoanField {
    /// 대출 원금 [₹]
    Principal,
    /// 상환 기간 [년]
    Tenure,
    /// 연 이율 [%]
    Rate,
}

impl LoanField {
    pub const ALL: [LoanField; 3] = [LoanField::Principal, LoanField::Tenure, LoanField::Rate];

    /// 배열 보관용 순번.
    pub fn index(self) -> usize {
        match self {
            LoanField::Principal => 0,
            LoanField::Tenure => 1,
            LoanField::Rate => 2,
        }
    }

    /// 설정된 범위 묶음에서 이 항목의 범위를 꺼낸다.
    pub fn range(self, ranges: &RangeSet) -> RangeSpec {
        match self {
            LoanField::Principal => ranges.principal,
            LoanField::Tenure => ranges.tenure,
            LoanField::Rate => ranges.rate,
        }
    }

    /// 입력값을 스텝 배수로 반올림하는지 여부. 소수 스텝을 쓰는 이율만 반올림한다.
    pub fn rounds_to_step(self) -> bool {
        matches!(self, LoanField::Rate)
    }

    /// 소수점 입력 허용 여부.
    pub fn accepts_decimal_point(self) -> bool {
        matches!(self, LoanField::Rate)
    }

    /// 값이 통화 형식으로 표시되는지 여부.
    pub fn is_currency(self) -> bool {
        matches!(self, LoanField::Principal)
    }

    /// 번역 키.
    pub fn label_key(self) -> &'static str {
        match self {
            LoanField::Principal => keys::FIELD_PRINCIPAL,
            LoanField::Tenure => keys::FIELD_TENURE,
            LoanField::Rate => keys::FIELD_RATE,
        }
    }

    /// 단위 번역 키. 통화는 기호가 값에 포함되므로 없다.
    pub fn unit_key(self) -> Option<&'static str> {
        match self {
            LoanField::Principal => None,
            LoanField::Tenure => Some(keys::UNIT_YEARS),
            LoanField::Rate => Some(keys::UNIT_PERCENT),
        }
    }
}
