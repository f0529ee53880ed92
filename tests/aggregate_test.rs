// PoW Bench - Free and Open Source Software Statement
//
// File: tests/aggregate_test.rs
// Version: 1.0.0
// Developer: OIEIEIO <oieieio@protonmail.com>
//
// Tests for the aggregate hashrate state under concurrent updates.
//
// Tree Location:
// - tests/aggregate_test.rs (aggregate state tests)
// - Depends on: pow-bench, rand

#[cfg(test)]
mod tests {
    use pow_bench::miner::AggregateState;
    use rand::Rng;
    use std::sync::Arc;
    use std::thread;
    use std::time::{Duration, Instant};

    #[test]
    fn test_concurrent_completions_are_not_lost() {
        let aggregate = Arc::new(AggregateState::new());
        let mut handles = Vec::new();

        for _ in 0..16 {
            let aggregate = Arc::clone(&aggregate);
            handles.push(thread::spawn(move || {
                let mut rng = rand::thread_rng();
                let mut local_sum = 0u64;
                for _ in 0..1000 {
                    let nonces = rng.gen_range(0..100_000u64);
                    aggregate.record_completion(nonces);
                    local_sum += nonces;
                }
                local_sum
            }));
        }

        let expected: u64 = handles.into_iter().map(|h| h.join().unwrap()).sum();
        assert_eq!(aggregate.total_nonces(), expected);
    }

    #[test]
    fn test_record_completion_returns_running_total() {
        let aggregate = AggregateState::new();
        assert_eq!(aggregate.record_completion(10), 10);
        assert_eq!(aggregate.record_completion(5), 15);
        assert_eq!(aggregate.total_nonces(), 15);
    }

    #[test]
    fn test_current_rate_uses_elapsed_time() {
        let start = Instant::now() - Duration::from_secs(2);
        let aggregate = AggregateState::started_at(start);
        aggregate.record_completion(1_000_000);
        let rate = aggregate.current_rate();
        assert!(
            rate > 0.0 && rate <= 500_000.0,
            "rate {} should be at most 1M / 2s",
            rate
        );
    }

    #[test]
    fn test_peak_rate_keeps_maximum() {
        let aggregate = AggregateState::new();
        aggregate.observe_rate(1_500.0);
        aggregate.observe_rate(900.0);
        aggregate.observe_rate(2_000.7);
        assert_eq!(aggregate.peak_rate(), 2_000.0);
    }

    #[test]
    fn test_default_starts_empty() {
        let aggregate = AggregateState::default();
        assert_eq!(aggregate.total_nonces(), 0);
        assert_eq!(aggregate.peak_rate(), 0.0);
        assert_eq!(aggregate.current_rate(), 0.0);
    }
}

// Changelog:
// - v1.0.0 (2026-10-18): Aggregate state tests.
