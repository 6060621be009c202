//! Tests for the heuristic rent estimator.

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use crate::estimator::{
        EstimatorKind, HeuristicEstimator, JitterSource, RentEstimatorTrait, UniformJitter,
        HEURISTIC_MAX_RENT, HEURISTIC_MIN_RENT,
    };
    use crate::features::PropertyFeatures;

    const EPSILON: f64 = 1e-9;

    fn features(beds: f64, baths: f64, footage: f64, lat: f64, lng: f64) -> PropertyFeatures {
        PropertyFeatures::new(beds, baths, footage, lat, lng).unwrap()
    }

    /// Location multiplier for a property whose unadjusted rent is 3150.
    fn location_multiplier(lat: f64, lng: f64) -> f64 {
        let estimator = HeuristicEstimator::deterministic();
        estimator
            .estimate(&features(0.0, 1.0, 1000.0, lat, lng))
            .unwrap()
            / 3150.0
    }

    struct FixedJitter(f64);

    impl JitterSource for FixedJitter {
        fn factor(&self) -> f64 {
            self.0
        }
    }

    #[test]
    fn test_downtown_scenario() {
        let estimator = HeuristicEstimator::deterministic();
        let estimate = estimator
            .estimate(&features(2.0, 1.5, 1200.0, 37.7749, -122.4194))
            .unwrap();
        // (3360 + 1300 + 525) * 1.25 * 1.10
        assert!((estimate - 7129.375).abs() < EPSILON, "estimate {estimate}");
    }

    #[test]
    fn test_western_neighbourhood() {
        let estimator = HeuristicEstimator::deterministic();
        let estimate = estimator
            .estimate(&features(1.0, 1.0, 1000.0, 37.76, -122.45))
            .unwrap();
        // (2800 + 650 + 350) * 1.0 * 0.95
        assert!((estimate - 3610.0).abs() < EPSILON, "estimate {estimate}");
    }

    #[test]
    fn test_latitude_breakpoints() {
        let lng = -122.45; // 0.95
        let cases = [
            (37.80, 1.15),
            (37.79, 1.25),
            (37.78, 1.25),
            (37.77, 1.0),
            (37.76, 1.0),
            (37.75, 1.0),
            (37.74, 0.95),
        ];
        for (lat, expected) in cases {
            let multiplier = location_multiplier(lat, lng);
            assert!(
                (multiplier - expected * 0.95).abs() < EPSILON,
                "lat {lat}: got {multiplier}"
            );
        }
    }

    #[test]
    fn test_longitude_breakpoints() {
        let lat = 37.76; // 1.0
        let cases = [
            (-122.35, 1.20),
            (-122.40, 1.10),
            (-122.42, 1.10),
            (-122.43, 0.95),
            (-122.50, 0.95),
        ];
        for (lng, expected) in cases {
            let multiplier = location_multiplier(lat, lng);
            assert!(
                (multiplier - expected).abs() < EPSILON,
                "lng {lng}: got {multiplier}"
            );
        }
    }

    #[test]
    fn test_clamped_to_minimum() {
        let estimator = HeuristicEstimator::deterministic();
        let estimate = estimator
            .estimate(&features(0.0, 0.5, 250.0, 37.6, -122.6))
            .unwrap();
        assert_eq!(estimate, HEURISTIC_MIN_RENT);
    }

    #[test]
    fn test_clamped_to_maximum() {
        let estimator = HeuristicEstimator::deterministic();
        let estimate = estimator
            .estimate(&features(10.0, 10.0, 10000.0, 37.78, -122.35))
            .unwrap();
        assert_eq!(estimate, HEURISTIC_MAX_RENT);
    }

    #[test]
    fn test_deterministic_without_jitter() {
        let estimator = HeuristicEstimator::deterministic();
        let input = features(3.0, 2.0, 1750.0, 37.8, -122.41);
        let first = estimator.estimate(&input).unwrap();
        for _ in 0..20 {
            assert_eq!(estimator.estimate(&input).unwrap(), first);
        }
    }

    #[test]
    fn test_jitter_applied_before_clamp() {
        let estimator = HeuristicEstimator::new(Arc::new(FixedJitter(1.02)));
        let estimate = estimator
            .estimate(&features(1.0, 1.0, 1000.0, 37.76, -122.45))
            .unwrap();
        assert!((estimate - 3610.0 * 1.02).abs() < EPSILON);

        let estimator = HeuristicEstimator::new(Arc::new(FixedJitter(1.02)));
        let estimate = estimator
            .estimate(&features(10.0, 10.0, 10000.0, 37.78, -122.35))
            .unwrap();
        assert_eq!(estimate, HEURISTIC_MAX_RENT);
    }

    #[test]
    fn test_random_jitter_stays_near_deterministic_value() {
        let estimator = HeuristicEstimator::new(Arc::new(UniformJitter::new(0.02)));
        let input = features(1.0, 1.0, 1000.0, 37.76, -122.45);
        for _ in 0..100 {
            let estimate = estimator.estimate(&input).unwrap();
            assert!(estimate >= 3610.0 * 0.98 - EPSILON && estimate <= 3610.0 * 1.02 + EPSILON);
        }
    }

    #[test]
    fn test_model_info() {
        let estimator = HeuristicEstimator::deterministic();
        assert_eq!(estimator.kind(), EstimatorKind::Heuristic);
        let info = estimator.model_info();
        assert_eq!(info.model_type, "Heuristic Estimator");
        assert_eq!(
            info.features,
            vec!["Beds", "Baths", "Footage", "Latitude", "Longitude"]
        );
        assert!(!info.fallback);

        let fallback = HeuristicEstimator::deterministic().into_fallback();
        assert!(fallback.model_info().fallback);
    }
}
