//! Tenant profile serialization round trips.
//!
//! Tenant files are TOML and the API speaks JSON; both representations
//! must reproduce the profile exactly.

use tredumo_core::defaults::default_tenant;
use tredumo_core::models::tenant::TenantProfile;
use tredumo_core::models::theme::RampStep;

#[test]
fn profile_round_trips_through_toml() {
    let profile = default_tenant();

    let serialized = toml::to_string(&profile).unwrap();
    let parsed: TenantProfile = toml::from_str(&serialized).unwrap();

    assert_eq!(parsed, profile);
}

#[test]
fn profile_round_trips_through_json() {
    let profile = default_tenant();

    let serialized = serde_json::to_string(&profile).unwrap();
    let parsed: TenantProfile = serde_json::from_str(&serialized).unwrap();

    assert_eq!(parsed, profile);
}

#[test]
fn toml_ramp_keys_are_step_labels() {
    let profile = default_tenant();
    let serialized = toml::to_string(&profile).unwrap();

    // Step keys serialize as their numeric labels, ready for hand-editing
    assert!(serialized.contains("\"50\"") || serialized.contains("50 = "));
    assert!(serialized.contains("#6366f1"));
}

#[test]
fn json_exposes_ramp_steps_by_label() {
    let profile = default_tenant();
    let json = serde_json::to_value(&profile).unwrap();

    assert_eq!(
        json["tokens"]["colors"]["primary"]["500"],
        profile.tokens.colors.primary[&RampStep::S500]
    );
    assert_eq!(json["school"]["hours"]["monday"], "8:00 AM - 5:00 PM");
}

#[test]
fn malformed_tenant_key_fails_profile_parse() {
    let profile = default_tenant();
    let mut json = serde_json::to_value(&profile).unwrap();
    json["key"] = serde_json::Value::String("Not A Label".to_string());

    let parsed: Result<TenantProfile, _> = serde_json::from_value(json);
    assert!(parsed.is_err());
}
