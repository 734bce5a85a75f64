//! Tests for service settings loading.

use thirdbrain_models::ServiceSettings;

#[test]
fn bundled_defaults_parse() {
    let settings = ServiceSettings::load().unwrap();
    assert!(settings.text.base_url.starts_with("https://"));
    assert_eq!(settings.text.model, "gpt-3.5-turbo");
    assert_eq!(settings.text.long_model, "gpt-3.5-turbo-16k");
    assert_eq!(settings.stability.engine, "stable-diffusion-v1-5");
    assert_eq!(settings.stability.clip_guidance_preset, "FAST_BLUE");
    assert!(settings.music.base_url.contains("spotify"));
}

#[test]
fn default_settings_match_bundled_file() {
    let loaded = ServiceSettings::load().unwrap();
    let defaults = ServiceSettings::default();
    assert_eq!(loaded, defaults);
}
