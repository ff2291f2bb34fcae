//! Property-based tests for result classification and aggregation.

use proptest::prelude::*;

use urlprobe::stats::{HostStats, aggregate};
use urlprobe::types::ProbeResult;

fn arb_probe_result() -> impl Strategy<Value = ProbeResult> {
    prop_oneof![
        // Response in the success range
        (200u16..400, 0.001f64..2.0).prop_map(|(status, duration)| {
            ProbeResult::response("http://example.com".to_string(), status, duration)
        }),
        // Response in the failed range
        (400u16..600, 0.001f64..2.0).prop_map(|(status, duration)| {
            ProbeResult::response("http://example.com".to_string(), status, duration)
        }),
        // Transport fault / timeout
        "[a-z ]{1,24}".prop_map(|description| {
            ProbeResult::failure("http://example.com".to_string(), description)
        }),
    ]
}

proptest! {
    #[test]
    fn prop_classification_is_exclusive(result in arb_probe_result()) {
        let success = result.success && matches!(result.status, Some(s) if (200..400).contains(&s));
        let failed = !result.success && result.is_failed_status();
        let error = !result.success && result.error.is_some();

        let matched = [success, failed, error].iter().filter(|&&b| b).count();
        prop_assert_eq!(matched, 1);
    }

    #[test]
    fn prop_bucket_sum_equals_results_folded(
        results in prop::collection::vec(arb_probe_result(), 0..64)
    ) {
        let stats = aggregate(&results);
        prop_assert_eq!(stats.total(), results.len());
    }

    #[test]
    fn prop_aggregation_is_idempotent(
        results in prop::collection::vec(arb_probe_result(), 0..64)
    ) {
        prop_assert_eq!(aggregate(&results), aggregate(&results));
    }

    #[test]
    fn prop_aggregation_is_order_independent(
        results in prop::collection::vec(arb_probe_result(), 0..64)
    ) {
        let mut reversed = results.clone();
        reversed.reverse();

        let forward = aggregate(&results);
        let backward = aggregate(&reversed);

        prop_assert_eq!(forward.success_count, backward.success_count);
        prop_assert_eq!(forward.failed_count, backward.failed_count);
        prop_assert_eq!(forward.error_count, backward.error_count);
        prop_assert_eq!(forward.min_time(), backward.min_time());
        prop_assert_eq!(forward.max_time(), backward.max_time());
        prop_assert!((forward.avg_time() - backward.avg_time()).abs() < 1e-9);
    }

    #[test]
    fn prop_latency_stats_are_ordered(
        results in prop::collection::vec(arb_probe_result(), 0..64)
    ) {
        let stats = aggregate(&results);
        prop_assert!(stats.min_time() <= stats.avg_time() + 1e-9);
        prop_assert!(stats.avg_time() <= stats.max_time() + 1e-9);
    }

    #[test]
    fn prop_only_positive_durations_are_recorded(
        results in prop::collection::vec(arb_probe_result(), 0..64)
    ) {
        let stats = aggregate(&results);
        prop_assert!(stats.times.iter().all(|&t| t > 0.0));

        let positive = results.iter().filter(|r| r.duration > 0.0).count();
        prop_assert_eq!(stats.times.len(), positive);
    }
}

#[test]
fn empty_latency_boundary_is_zero_not_an_error() {
    let stats = HostStats::new();
    assert_eq!(stats.min_time(), 0.0);
    assert_eq!(stats.max_time(), 0.0);
    assert_eq!(stats.avg_time(), 0.0);
}
