// Integration tests for configuration loading and the starter file.

use campusmud::config::Config;
use tempfile::tempdir;

#[test]
fn create_default_then_load_round_trips() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("config.toml");
    let path = path.to_str().expect("utf-8 path");

    Config::create_default(path).expect("starter file written");
    let config = Config::load(path).expect("starter file loads");

    assert_eq!(config.game.starting_health, 10);
    assert_eq!(config.game.edible_probability, 0.6);
    assert_eq!(config.game.item_probability, 0.6);
    assert!(config.game.rng_seed.is_none());
    assert_eq!(config.logging.level, "info");
}

#[test]
fn create_default_refuses_to_overwrite() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("config.toml");
    let path = path.to_str().expect("utf-8 path");

    Config::create_default(path).expect("first write succeeds");
    assert!(Config::create_default(path).is_err());
}

#[test]
fn invalid_values_fail_to_load() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[game]\nedible_probability = 2.5\n").expect("written");
    assert!(Config::load(path.to_str().expect("utf-8 path")).is_err());

    std::fs::write(&path, "[logging]\nlevel = \"loud\"\n").expect("written");
    assert!(Config::load(path.to_str().expect("utf-8 path")).is_err());
}

#[test]
fn sparse_files_pick_up_defaults() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        "[game]\nrng_seed = 77\nstarting_health = 25\n",
    )
    .expect("written");

    let config = Config::load(path.to_str().expect("utf-8 path")).expect("loads");
    assert_eq!(config.game.rng_seed, Some(77));
    assert_eq!(config.game.starting_health, 25);
    assert_eq!(config.game.item_probability, 0.6);
}

#[test]
fn missing_file_is_an_error() {
    assert!(Config::load("/nonexistent/campusmud-config.toml").is_err());
}
