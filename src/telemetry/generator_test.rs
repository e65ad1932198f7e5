use std::time::{Duration, Instant};

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::telemetry::{TelemetryConfig, TelemetryGenerator, TelemetryPreset, UptimeMode};

const SAMPLES: usize = 2_000;

fn generator(preset: TelemetryPreset) -> TelemetryGenerator {
    TelemetryGenerator::new(TelemetryConfig::preset(preset)).expect("preset should be valid")
}

// =============================================================================
// Bounds
// =============================================================================

#[test]
fn standard_figures_stay_in_bounds() {
    let generator = generator(TelemetryPreset::Standard);
    let mut rng = StdRng::seed_from_u64(7);

    for _ in 0..SAMPLES {
        let status = generator.generate_with(&mut rng);
        assert!((0.0..100.0).contains(&status.cpu_load), "{}", status.cpu_load);
        assert!(status.memory_mb < 1024);
        assert!(status.latency_ms < 50);
    }
}

#[test]
fn provisioned_figures_stay_in_bounds() {
    let generator = generator(TelemetryPreset::Provisioned);
    let mut rng = StdRng::seed_from_u64(42);

    for _ in 0..SAMPLES {
        let status = generator.generate_with(&mut rng);
        assert!((0.0..100.0).contains(&status.cpu_load));
        assert!((512..1536).contains(&status.memory_mb));
        assert!((10..60).contains(&status.latency_ms));
    }
}

#[test]
fn single_value_ranges_always_yield_the_minimum() {
    let config = TelemetryConfig::default()
        .with_memory_mb(256..257)
        .with_latency_ms(5..6);
    let generator = TelemetryGenerator::new(config).unwrap();

    for _ in 0..100 {
        let status = generator.generate();
        assert_eq!(status.memory_mb, 256);
        assert_eq!(status.latency_ms, 5);
    }
}

#[test]
fn thread_rng_figures_stay_in_bounds() {
    let generator = generator(TelemetryPreset::Standard);

    for _ in 0..SAMPLES {
        let status = generator.generate();
        assert!(status.cpu_load >= 0.0 && status.cpu_load < 100.0);
        assert!(status.memory_mb < 1024);
        assert!(status.latency_ms < 50);
    }
}

#[test]
fn same_seed_gives_same_figures() {
    let generator = generator(TelemetryPreset::Standard);
    let a = generator.generate_with(&mut StdRng::seed_from_u64(1));
    let b = generator.generate_with(&mut StdRng::seed_from_u64(1));

    assert_eq!(a.cpu_load, b.cpu_load);
    assert_eq!(a.memory_mb, b.memory_mb);
    assert_eq!(a.latency_ms, b.latency_ms);
}

// =============================================================================
// Status and uptime
// =============================================================================

#[test]
fn status_uses_configured_label() {
    let config = TelemetryConfig::default().with_status_label("alive");
    let generator = TelemetryGenerator::new(config).unwrap();
    assert_eq!(generator.generate().status, "alive");
}

#[test]
fn uptime_counts_from_start_instant() {
    let started = Instant::now()
        .checked_sub(Duration::from_secs(125))
        .expect("monotonic clock should cover two minutes");
    let generator = TelemetryGenerator::started_at(TelemetryConfig::default(), started).unwrap();

    assert_eq!(generator.generate().uptime, "2m5s");
}

#[test]
fn fresh_generator_reports_zero_seconds() {
    let generator = generator(TelemetryPreset::Standard);
    assert_eq!(generator.generate().uptime, "0s");
}

#[test]
fn uptime_is_monotonic() {
    let generator = generator(TelemetryPreset::Standard);
    let mut previous = generator.uptime();

    for _ in 0..1_000 {
        let current = generator.uptime();
        assert!(current >= previous);
        previous = current;
    }
}

#[test]
fn fixed_uptime_is_returned_verbatim() {
    let generator = generator(TelemetryPreset::Placeholder);
    let status = generator.generate();

    assert_eq!(status.status, "OPERATIONAL");
    assert_eq!(status.uptime, "02:45:12");
}

#[test]
fn custom_fixed_uptime() {
    let config = TelemetryConfig::default().with_uptime(UptimeMode::Fixed("forever".to_string()));
    let generator = TelemetryGenerator::new(config).unwrap();
    assert_eq!(generator.generate().uptime, "forever");
}

#[test]
fn construction_keeps_the_preset() {
    for preset in [
        TelemetryPreset::Standard,
        TelemetryPreset::Provisioned,
        TelemetryPreset::Placeholder,
    ] {
        let built = generator(preset);
        assert_eq!(built.config(), &TelemetryConfig::preset(preset));
    }
}

#[test]
fn invalid_config_is_rejected_at_construction() {
    let config = TelemetryConfig::default().with_memory_mb(10..10);
    assert!(TelemetryGenerator::new(config).is_err());
}

// =============================================================================
// Serialization
// =============================================================================

#[test]
fn snapshot_serializes_with_snake_case_fields() {
    let generator = generator(TelemetryPreset::Standard);
    let value = serde_json::to_value(generator.generate()).unwrap();
    let object = value.as_object().expect("Expected object");

    assert_eq!(object.len(), 5);
    assert!(object["status"].is_string());
    assert!(object["uptime"].is_string());
    assert!(object["cpu_load"].is_f64());
    assert!(object["memory_mb"].is_u64());
    assert!(object["latency_ms"].is_u64());
}
