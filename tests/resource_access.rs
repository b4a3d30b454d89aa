use std::collections::HashMap;
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::PathBuf;

use assert_fs::prelude::*;
use assert_fs::TempDir;

use basedirs::{BaseDirError, EnvSnapshot, StandardLocations};

// Build locations whose every category lives inside `root`, so the tests
// never touch the real home directory.
fn sandboxed_locations(root: &TempDir) -> StandardLocations {
    let home = root.child("home");
    let mut vars = HashMap::new();
    vars.insert(
        "XDG_DATA_DIRS".to_string(),
        format!(
            "{}:{}",
            root.child("usr-local-share").path().display(),
            root.child("usr-share").path().display()
        ),
    );
    vars.insert(
        "XDG_CONFIG_DIRS".to_string(),
        root.child("etc-xdg").path().display().to_string(),
    );
    vars.insert(
        "XDG_RUNTIME_DIR".to_string(),
        root.child("runtime").path().display().to_string(),
    );
    let env = EnvSnapshot::from_parts(vars, Some(home.path().to_path_buf()), 1000);
    StandardLocations::from_env(&env).unwrap()
}

#[test]
fn ensure_bindings_create_under_their_category() {
    let root = TempDir::new().unwrap();
    let loc = sandboxed_locations(&root);

    let data = loc.ensure_data_resource(["myapp", "plugins"]).unwrap();
    let config = loc.ensure_config_resource(["myapp"]).unwrap();
    let state = loc.ensure_state_resource(["myapp", "journal"]).unwrap();
    let cache = loc.ensure_cache_resource(["myapp", "thumbs"]).unwrap();

    assert_eq!(data, loc.data_home.join("myapp/plugins"));
    assert_eq!(config, loc.config_home.join("myapp"));
    assert_eq!(state, loc.state_home.join("myapp/journal"));
    assert_eq!(cache, loc.cache_home.join("myapp/thumbs"));
    for created in [&data, &config, &state, &cache] {
        assert!(created.is_dir(), "expected {} to exist", created.display());
    }
}

#[test]
fn ensure_binding_is_idempotent_and_escape_safe() {
    let root = TempDir::new().unwrap();
    let loc = sandboxed_locations(&root);

    let first = loc.ensure_cache_resource(["myapp"]).unwrap();
    let second = loc.ensure_cache_resource(["myapp"]).unwrap();
    assert_eq!(first, second);

    let err = loc.ensure_cache_resource(["../outside"]).unwrap_err();
    assert!(matches!(err, BaseDirError::PathEscape { .. }));
    assert!(!root.child("home/outside").path().exists());
}

#[test]
fn find_data_resource_prefers_data_home() {
    let root = TempDir::new().unwrap();
    let loc = sandboxed_locations(&root);

    // Present in the user location and in the second system dir.
    fs::create_dir_all(loc.data_home.join("myapp/icons")).unwrap();
    fs::create_dir_all(loc.data_dirs[1].join("myapp/icons")).unwrap();

    let got = loc
        .find_data_resource(["myapp", "icons"])
        .collect::<Result<Vec<_>, _>>()
        .unwrap();
    assert_eq!(
        got,
        vec![
            loc.data_home.join("myapp/icons"),
            loc.data_dirs[1].join("myapp/icons"),
        ]
    );
}

#[test]
fn find_config_resource_walks_system_dirs() {
    let root = TempDir::new().unwrap();
    let loc = sandboxed_locations(&root);

    root.child("etc-xdg/myapp/settings.toml")
        .write_str("answer = 42")
        .unwrap();

    let got = loc
        .find_config_resource(["myapp", "settings.toml"])
        .collect::<Result<Vec<_>, _>>()
        .unwrap();
    assert_eq!(got, vec![loc.config_dirs[0].join("myapp/settings.toml")]);
}

#[test]
fn find_config_resource_empty_when_nothing_exists() {
    let root = TempDir::new().unwrap();
    let loc = sandboxed_locations(&root);

    let got = loc
        .find_config_resource(["nowhere"])
        .collect::<Result<Vec<_>, _>>()
        .unwrap();
    assert!(got.is_empty());
}

#[test]
fn ensure_runtime_dir_creates_private_directory() {
    let root = TempDir::new().unwrap();
    let loc = sandboxed_locations(&root);

    assert!(!loc.runtime_dir.exists());
    let created = loc.ensure_runtime_dir().unwrap();
    assert_eq!(created, loc.runtime_dir.as_path());
    assert!(created.is_dir());

    let mode = fs::metadata(created).unwrap().permissions().mode();
    assert_eq!(mode & 0o777, 0o700);

    // Second call succeeds silently on the existing directory.
    loc.ensure_runtime_dir().unwrap();
}

#[test]
fn free_functions_compose_with_plain_paths() {
    let root = TempDir::new().unwrap();

    let base = root.child("base").path().to_path_buf();
    let made = basedirs::ensure_resource(&base, ["a", "b/c"]).unwrap();
    assert_eq!(made, base.join("a/b/c"));

    let other = root.child("other").path().to_path_buf();
    let found = basedirs::find_resource(vec![other, base.clone()], ["a", "b/c"])
        .collect::<Result<Vec<PathBuf>, _>>()
        .unwrap();
    assert_eq!(found, vec![base.join("a/b/c")]);
}
