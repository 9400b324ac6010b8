use std::time::{Duration, Instant};

/// 연속 입력을 하나로 묶는 단일 슬롯 스케줄러.
///
/// 새 이벤트가 들어오면 대기 중인 값을 버리고 마감 시각을 다시 잡는다.
/// 대기 중인 값은 항상 최대 하나이며, 조용한 구간이 지난 뒤 `poll`에서 한 번만 나온다.
/// 시각은 호출하는 쪽이 넘겨준다(GUI는 매 프레임 `Instant::now()`).
#[derive(Debug, Clone)]
pub struct Debouncer<T> {
    quiet: Duration,
    pending: Option<(T, Instant)>,
}

impl<T> Debouncer<T> {
    pub fn new(quiet: Duration) -> Self {
        Self {
            quiet,
            pending: None,
        }
    }

    pub fn from_millis(ms: u64) -> Self {
        Self::new(Duration::from_millis(ms))
    }

    pub fn quiet_window(&self) -> Duration {
        self.quiet
    }

    /// 값을 예약한다. 이전 예약은 취소된다.
    pub fn schedule(&mut self, value: T, now: Instant) {
        if self.pending.is_some() {
            tracing::trace!("debounce: rescheduling pending event");
        }
        self.pending = Some((value, now + self.quiet));
    }

    /// 마감 시각이 지났으면 예약된 값을 꺼낸다.
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        let due = matches!(&self.pending, Some((_, deadline)) if now >= *deadline);
        if due {
            self.pending.take().map(|(v, _)| v)
        } else {
            None
        }
    }

    /// 예약을 취소하고 대기 중이던 값을 돌려준다.
    pub fn cancel(&mut self) -> Option<T> {
        self.pending.take().map(|(v, _)| v)
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// 다음 실행 예정 시각.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|(_, d)| *d)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_once_after_quiet_window() {
        let start = Instant::now();
        let mut d = Debouncer::from_millis(1000);
        d.schedule("a", start);
        assert_eq!(d.poll(start + Duration::from_millis(999)), None);
        assert_eq!(d.poll(start + Duration::from_millis(1000)), Some("a"));
        assert_eq!(d.poll(start + Duration::from_millis(5000)), None);
        assert!(!d.is_pending());
    }

    #[test]
    fn new_event_cancels_and_reschedules() {
        let start = Instant::now();
        let mut d = Debouncer::from_millis(1000);
        d.schedule(1, start);
        d.schedule(2, start + Duration::from_millis(800));
        // 첫 예약의 마감 시각에는 아무것도 나오지 않는다.
        assert_eq!(d.poll(start + Duration::from_millis(1000)), None);
        assert_eq!(
            d.next_deadline(),
            Some(start + Duration::from_millis(1800))
        );
        assert_eq!(d.poll(start + Duration::from_millis(1800)), Some(2));
    }

    #[test]
    fn cancel_drops_pending_value() {
        let start = Instant::now();
        let mut d = Debouncer::from_millis(10);
        d.schedule('x', start);
        assert_eq!(d.cancel(), Some('x'));
        assert_eq!(d.poll(start + Duration::from_secs(1)), None);
    }
}
