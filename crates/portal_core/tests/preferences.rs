use portal_core::env::{selected_profession, set_selected_profession, SELECTED_PROFESSION_KEY};
use portal_core::{
    Environment, PersistentEnvironment, PreferenceError, PreferenceRepository,
    SqlitePreferenceRepository,
};

#[test]
fn preferences_survive_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("prefs.db");

    let repo = SqlitePreferenceRepository::open(&path).unwrap();
    repo.set(SELECTED_PROFESSION_KEY, "frontend").unwrap();
    repo.set(SELECTED_PROFESSION_KEY, "qa").unwrap();
    drop(repo);

    let repo = SqlitePreferenceRepository::open(&path).unwrap();
    assert_eq!(
        repo.get(SELECTED_PROFESSION_KEY).unwrap().as_deref(),
        Some("qa")
    );
}

#[test]
fn remove_and_unknown_keys_read_as_none() {
    let repo = SqlitePreferenceRepository::in_memory().unwrap();
    assert_eq!(repo.get("theme").unwrap(), None);

    repo.set("theme", "dark").unwrap();
    repo.remove("theme").unwrap();
    assert_eq!(repo.get("theme").unwrap(), None);
}

#[test]
fn keys_are_trimmed_and_blank_keys_rejected() {
    let repo = SqlitePreferenceRepository::in_memory().unwrap();
    repo.set("  theme ", "dark").unwrap();
    assert_eq!(repo.get("theme").unwrap().as_deref(), Some("dark"));

    let err = repo.set("   ", "x").unwrap_err();
    assert!(matches!(err, PreferenceError::InvalidKey(_)));
}

#[test]
fn persistent_environment_round_trips_selected_profession() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("prefs.db");

    let mut env = PersistentEnvironment::new(SqlitePreferenceRepository::open(&path).unwrap());
    assert_eq!(selected_profession(&env), "all");
    set_selected_profession(&mut env, "qa");
    drop(env);

    let env = PersistentEnvironment::new(SqlitePreferenceRepository::open(&path).unwrap());
    assert_eq!(selected_profession(&env), "qa");
    assert_eq!(env.fragment(), None);
}

#[test]
fn blank_key_write_is_swallowed_by_environment() {
    let mut env = PersistentEnvironment::new(SqlitePreferenceRepository::in_memory().unwrap());

    env.set_preference(" ", "qa");

    assert_eq!(env.preference(" "), None);
}
