use std::collections::HashMap;

use super::*;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| map.get(key).cloned()
}

#[test]
fn from_lookup_reads_all_parameters() {
    let cfg = BackendConfig::from_lookup(lookup_from(&[
        (API_KEY_VAR, "key-123"),
        (AUTH_DOMAIN_VAR, "auth.example.com"),
        (PROJECT_ID_VAR, "menosense-test"),
    ]))
    .unwrap();
    assert_eq!(cfg.api_key, "key-123");
    assert_eq!(cfg.auth_domain, "auth.example.com");
    assert_eq!(cfg.project_id, "menosense-test");
}

#[test]
fn from_lookup_defaults_auth_domain_from_project() {
    let cfg =
        BackendConfig::from_lookup(lookup_from(&[(API_KEY_VAR, "key"), (PROJECT_ID_VAR, "menosense-test")])).unwrap();
    assert_eq!(cfg.auth_domain, "menosense-test.firebaseapp.com");
}

#[test]
fn from_lookup_trims_values() {
    let cfg = BackendConfig::from_lookup(lookup_from(&[(API_KEY_VAR, "  key  "), (PROJECT_ID_VAR, " p ")])).unwrap();
    assert_eq!(cfg.api_key, "key");
    assert_eq!(cfg.project_id, "p");
}

#[test]
fn from_lookup_requires_api_key() {
    let err = BackendConfig::from_lookup(lookup_from(&[(PROJECT_ID_VAR, "p")])).unwrap_err();
    assert_eq!(err, ConfigError::Missing(API_KEY_VAR));
}

#[test]
fn from_lookup_rejects_blank_project() {
    let err = BackendConfig::from_lookup(lookup_from(&[(API_KEY_VAR, "k"), (PROJECT_ID_VAR, "   ")])).unwrap_err();
    assert_eq!(err, ConfigError::Missing(PROJECT_ID_VAR));
    assert_eq!(err.to_string(), "missing backend parameter FIREBASE_PROJECT_ID");
}

#[test]
fn from_document_is_empty_outside_browser() {
    assert!(BackendConfig::from_document().is_err());
}

#[test]
fn meta_name_is_namespaced_kebab_case() {
    assert_eq!(meta_name(API_KEY_VAR), "menosense:firebase-api-key");
    assert_eq!(meta_name(PROJECT_ID_VAR), "menosense:firebase-project-id");
}

#[test]
fn auth_domain_travels_through_meta_tags() {
    let cfg = BackendConfig::from_lookup(lookup_from(&[
        (API_KEY_VAR, "k"),
        (AUTH_DOMAIN_VAR, " login.menosense.app "),
        (PROJECT_ID_VAR, "p"),
    ]))
    .unwrap();
    assert_eq!(meta_name(AUTH_DOMAIN_VAR), "menosense:firebase-auth-domain");
    let echoed = BackendConfig::from_lookup(|key| match key {
        API_KEY_VAR => Some(cfg.api_key.clone()),
        AUTH_DOMAIN_VAR => Some(cfg.auth_domain.clone()),
        PROJECT_ID_VAR => Some(cfg.project_id.clone()),
        _ => None,
    })
    .unwrap();
    assert_eq!(echoed, cfg);
    assert_eq!(echoed.auth_domain, "login.menosense.app");
}
