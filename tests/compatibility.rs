//! End-to-end checks through the `EnvironmentProbe` facade using the
//! deterministic fake environment.

use std::sync::Arc;

use lamco_viewport_probe::environment::fake::{RecordingSurface, StaticEnvironment};
use lamco_viewport_probe::{
    Breakpoint, Config, CssFeature, EnvironmentProbe, PlatformFeature, SimulationOutcome,
    SimulationState,
};

fn probe(env: StaticEnvironment) -> EnvironmentProbe<RecordingSurface> {
    EnvironmentProbe::with_defaults(Arc::new(env), RecordingSurface::new()).unwrap()
}

#[test]
fn report_is_byte_identical_across_runs() {
    let env = StaticEnvironment::bare()
        .with_viewport(280.0, 560.0)
        .with_failing_css("container-type");
    let probe = probe(env);

    let first = probe.run_compatibility_check();
    let second = probe.run_compatibility_check();
    assert_eq!(first.to_json().unwrap(), second.to_json().unwrap());
    assert_eq!(first.format_text(), second.format_text());
}

#[test]
fn narrow_viewport_message_iff_below_320() {
    for (width, expected) in [(319.0, true), (319.99, true), (320.0, false), (1024.0, false)] {
        let report = probe(StaticEnvironment::desktop().with_viewport(width, 700.0))
            .run_compatibility_check();
        let has_narrow = report.recommendations.iter().any(|r| r.contains("320px"));
        assert_eq!(has_narrow, expected, "width {width}");
    }
}

#[test]
fn each_flag_drives_its_own_recommendation() {
    let cases = [
        ("flex-wrap", "Flexbox"),
        ("grid-template-columns", "Grid"),
        ("--probe-custom-property", "custom properties"),
    ];
    for (property, needle) in cases {
        let report = probe(StaticEnvironment::desktop().with_css_support(property, false))
            .run_compatibility_check();
        assert_eq!(report.recommendations.len(), 1, "{property}");
        assert!(report.recommendations[0].contains(needle), "{property}");
    }

    let report = probe(
        StaticEnvironment::desktop()
            .with_platform_feature(PlatformFeature::IntersectionObserver, false),
    )
    .run_compatibility_check();
    assert_eq!(report.recommendations.len(), 1);
    assert!(report.recommendations[0].contains("IntersectionObserver"));
}

#[test]
fn failing_css_query_yields_complete_flag_map() {
    let probe = probe(StaticEnvironment::desktop().with_failing_css("backdrop-filter"));
    let css = probe.check_css_support();

    assert_eq!(css.len(), CssFeature::ALL.len());
    for feature in CssFeature::ALL {
        let expected = feature != CssFeature::BackdropFilter;
        assert_eq!(css.get(feature.flag_name()), expected, "{feature:?}");
    }
}

#[test]
fn android_tablet_overlap_is_reported() {
    let viewport = probe(StaticEnvironment::android_tablet()).capture_viewport();
    assert!(viewport.is_tablet);
    assert!(viewport.is_mobile);
    assert!(!viewport.is_desktop);
}

#[test]
fn classify_boundaries_through_facade() {
    let probe = probe(StaticEnvironment::desktop());
    assert_eq!(probe.classify(575.0), Breakpoint::Xs);
    assert_eq!(probe.classify(576.0), Breakpoint::Sm);
    assert_eq!(probe.classify(1399.0), Breakpoint::Xl);
    assert_eq!(probe.classify(1400.0), Breakpoint::Xxl);
}

#[test]
fn simulator_transitions() {
    let mut probe = probe(StaticEnvironment::desktop());

    assert_eq!(probe.simulate_viewport("no-such-device"), SimulationOutcome::UnknownProfile);
    assert_eq!(probe.simulation_state(), &SimulationState::Normal);

    assert_eq!(probe.simulate_viewport("small-phone"), SimulationOutcome::Applied);
    probe.reset_simulation();
    assert_eq!(probe.simulation_state(), &SimulationState::Normal);

    probe.simulate_viewport("small-phone");
    probe.simulate_viewport("large-phone");
    let active = probe.simulation_state().active_profile().unwrap();
    assert_eq!(active.name, "large-phone");

    let overlay = probe.simulator().surface().current().unwrap();
    assert_eq!((overlay.width, overlay.height), (414, 896));
    assert!((overlay.scale - 1.0 / 3.0).abs() < f64::EPSILON);
}

#[test]
fn simulation_does_not_feed_into_report() {
    let mut probe = probe(StaticEnvironment::desktop());
    let before = probe.run_compatibility_check();
    probe.simulate_viewport("small-phone");
    let after = probe.run_compatibility_check();
    assert_eq!(before, after);
}

#[test]
fn config_file_drives_probe() {
    let config = Config::from_toml_str(
        r#"
        [report]
        min_supported_width = 400

        [simulator]
        allowed_hosts = ["staging.internal"]
        "#,
    )
    .unwrap();

    let env = StaticEnvironment::desktop()
        .with_viewport(390.0, 844.0)
        .with_host("staging.internal:8443");
    let mut probe =
        EnvironmentProbe::new(config, Arc::new(env), RecordingSurface::new()).unwrap();

    let report = probe.run_compatibility_check();
    assert_eq!(report.recommendations.len(), 1);
    assert!(report.recommendations[0].contains("400px"));

    assert_eq!(probe.simulate_viewport("tablet"), SimulationOutcome::Applied);
}
