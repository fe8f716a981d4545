//!
//! The compiler sets tests.
//!

use std::path::Path;

use crate::compiler_set::fixture;
use crate::compiler_set::fixture::Toolchain;
use crate::options::catalog;
use crate::runner::fake::FakeRunner;
use crate::CompilerSet;
use crate::CompilerSets;
use crate::Config;
use crate::Language;
use crate::MemoryStore;
use crate::Preset;
use crate::Settings;
use crate::Store;
use crate::Value;

///
/// Creates the settings over an empty in-memory store.
///
fn settings(app_directory: &Path) -> Settings<MemoryStore> {
    Settings::new(MemoryStore::default(), app_directory.to_path_buf())
}

///
/// Creates a named set with the C compiler under the application directory.
///
fn named_set(app_directory: &Path, name: &str) -> CompilerSet {
    let mut set = CompilerSet::new();
    set.name = name.to_owned();
    set.c_compiler = app_directory.join(name).join("bin").join("gcc");
    set
}

#[test]
fn detect() {
    let directory = tempfile::tempdir().expect("Always valid");
    let toolchain = Toolchain::create(directory.path().join("MinGW64").as_path());
    let runner = toolchain.runner();
    let mut settings = settings(directory.path());

    let mut sets = CompilerSets::new();
    let detections = sets.detect(
        &mut settings,
        Config::default().install_folders.as_slice(),
        &runner,
    );

    assert_eq!(detections.len(), 2);
    assert!(!detections[0].report.compiler_found);
    assert!(detections[1].report.is_complete(), "{}", detections[1].report);

    let names: Vec<&str> = sets.list().iter().map(|set| set.name.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "MinGW GCC 11.2.0 64-bit Release",
            "MinGW GCC 11.2.0 64-bit Debug",
            "MinGW GCC 11.2.0 64-bit Profiling",
        ]
    );
    assert_eq!(sets.default_index(), Some(1));
    assert_eq!(
        sets.default_set().map(|set| set.name.as_str()),
        Some("MinGW GCC 11.2.0 64-bit Debug")
    );
    for set in sets.list() {
        assert_eq!(set.c_compiler, toolchain.gcc());
        assert_eq!(set.defines.len(), 3);
    }
}

#[test]
fn detect_clears_previous_sets() {
    let directory = tempfile::tempdir().expect("Always valid");
    let mut settings = settings(directory.path());

    let mut sets = CompilerSets::new();
    sets.add(named_set(directory.path(), "old"));
    sets.save(&mut settings);
    assert!(settings.store().contains_group("CompilerSet_0"));

    let detections = sets.detect(
        &mut settings,
        Config::default().install_folders.as_slice(),
        &FakeRunner::default(),
    );

    assert!(detections.iter().all(|detection| !detection.report.compiler_found));
    assert!(sets.is_empty());
    assert_eq!(sets.default_index(), None);
    assert!(!settings.store().contains_group("CompilerSet_0"));
}

#[test]
fn presets() {
    let mut base = CompilerSet::new();
    base.name = "TDM-GCC 9.2.0".to_owned();
    base.target = "i686".to_owned();
    base.set_option_value("-pipe", 1);

    let release = Preset::Release.derive(&base);
    let debug = Preset::Debug.derive(&base);
    let profiling = Preset::Profiling.derive(&base);

    assert_eq!(release.name, "TDM-GCC 9.2.0 32-bit Release");
    assert_eq!(release.option_char(catalog::OPTIMIZATION), 'a');
    assert!(release
        .compile_arguments(Language::C)
        .contains(&"-O2".to_owned()));
    assert_eq!(release.option_char(catalog::STRIP), '1');
    assert_eq!(release.option_char(catalog::DEBUG_INFO), '0');

    assert_eq!(debug.name, "TDM-GCC 9.2.0 32-bit Debug");
    assert_eq!(debug.option_char(catalog::DEBUG_INFO), '1');
    assert_eq!(debug.option_char(catalog::WARNINGS_ALL), '1');
    assert_eq!(debug.option_char(catalog::WARNINGS_EXTRA), '1');
    assert_eq!(debug.option_char(catalog::OPTIMIZATION), '0');

    assert_eq!(profiling.option_char(catalog::PROFILING), '1');
    assert_eq!(profiling.option_char(catalog::STRIP), '0');

    for set in [&release, &debug, &profiling] {
        assert_eq!(set.option_char("-pipe"), '1');
        assert_eq!(set.target, base.target);
    }
    assert_eq!(base.name, "TDM-GCC 9.2.0");
    assert_eq!(base.option_char(catalog::PROFILING), '0');

    let mut stripped = release.clone();
    stripped.name = debug.name.clone();
    for setting in [catalog::OPTIMIZATION, catalog::STRIP] {
        stripped.set_option_value(setting, 0);
    }
    for setting in [catalog::DEBUG_INFO, catalog::WARNINGS_ALL, catalog::WARNINGS_EXTRA] {
        stripped.set_option_value(setting, 1);
    }
    assert_eq!(stripped, debug);
}

#[test]
fn save_load() {
    let directory = tempfile::tempdir().expect("Always valid");
    let toolchain = Toolchain::create(directory.path().join("MinGW64").as_path());
    let runner = toolchain.runner();
    let mut settings = settings(directory.path());

    let mut sets = CompilerSets::new();
    sets.detect(
        &mut settings,
        Config::default().install_folders.as_slice(),
        &runner,
    );
    sets.set_default_index(2).expect("Always valid");
    sets.save(&mut settings);

    assert_eq!(
        settings.store().value("CompilerSets", "count"),
        Some(Value::Integer(3))
    );
    assert_eq!(
        settings.store().value("CompilerSets", "schemaVersion"),
        Some(Value::Integer(1))
    );
    assert_eq!(
        settings.string("CompilerSet_0", "ccompiler"),
        "%AppPath%/MinGW64/bin/gcc"
    );
    assert_eq!(settings.store().value("CompilerSet_0", "defines"), None);

    let mut loaded = CompilerSets::new();
    loaded.load(&settings, &runner);
    assert_eq!(loaded, sets);
    assert_eq!(
        loaded.get(0).map(|set| set.defines.len()),
        Some(fixture::DEFINES_OUTPUT.lines().filter(|line| !line.is_empty()).count())
    );
}

#[test]
fn load_after_relocation() {
    let old = tempfile::tempdir().expect("Always valid");
    let new = tempfile::tempdir().expect("Always valid");
    let mut settings = settings(old.path());

    let mut sets = CompilerSets::new();
    sets.add(named_set(old.path(), "MinGW64"));
    sets.save(&mut settings);

    let settings = Settings::new(settings.into_store(), new.path().to_path_buf());
    let mut loaded = CompilerSets::new();
    loaded.load(&settings, &FakeRunner::default());

    assert_eq!(
        loaded.get(0).map(|set| set.c_compiler.clone()),
        Some(new.path().join("MinGW64").join("bin").join("gcc"))
    );
}

#[test]
fn load_drops_invalid_default_index() {
    let directory = tempfile::tempdir().expect("Always valid");
    let mut settings = settings(directory.path());

    let mut sets = CompilerSets::new();
    sets.add(named_set(directory.path(), "a"));
    sets.save(&mut settings);
    settings.set("CompilerSets", "defaultIndex", 5_i64);

    let mut loaded = CompilerSets::new();
    loaded.load(&settings, &FakeRunner::default());
    assert_eq!(loaded.len(), 1);
    assert_eq!(loaded.default_index(), None);
    assert_eq!(loaded.default_set(), None);
}

#[test]
fn load_empty_store() {
    let directory = tempfile::tempdir().expect("Always valid");
    let settings = settings(directory.path());

    let mut loaded = CompilerSets::new();
    loaded.load(&settings, &FakeRunner::default());
    assert!(loaded.is_empty());
    assert_eq!(loaded.default_index(), None);
}

#[test]
fn delete_shifts_groups() {
    let directory = tempfile::tempdir().expect("Always valid");
    let mut settings = settings(directory.path());

    let mut sets = CompilerSets::new();
    for name in ["a", "b", "c"] {
        sets.add(named_set(directory.path(), name));
    }
    sets.set_default_index(2).expect("Always valid");
    sets.save(&mut settings);

    let removed = sets.delete(1, &mut settings).expect("Always valid");
    assert_eq!(removed.name, "b");
    assert_eq!(sets.len(), 2);
    assert_eq!(sets.default_index(), Some(1));
    assert_eq!(settings.string("CompilerSet_0", "Name"), "a");
    assert_eq!(settings.string("CompilerSet_1", "Name"), "c");
    assert!(!settings.store().contains_group("CompilerSet_2"));
    assert_eq!(settings.integer("CompilerSets", "count", 0), 2);
    assert_eq!(settings.integer("CompilerSets", "defaultIndex", -1), 1);
}

#[test]
fn delete_last_set() {
    let directory = tempfile::tempdir().expect("Always valid");
    let mut settings = settings(directory.path());

    let mut sets = CompilerSets::new();
    sets.add(named_set(directory.path(), "a"));
    sets.set_default_index(0).expect("Always valid");
    sets.save(&mut settings);

    sets.delete(0, &mut settings).expect("Always valid");
    assert!(sets.is_empty());
    assert_eq!(sets.default_index(), None);
    assert_eq!(settings.integer("CompilerSets", "defaultIndex", 0), -1);
    assert!(sets.delete(0, &mut settings).is_err());
}

#[test]
fn save_removes_stale_groups() {
    let directory = tempfile::tempdir().expect("Always valid");
    let mut settings = settings(directory.path());

    let mut sets = CompilerSets::new();
    for name in ["a", "b"] {
        sets.add(named_set(directory.path(), name));
    }
    sets.save(&mut settings);

    let mut shorter = CompilerSets::new();
    shorter.add(named_set(directory.path(), "c"));
    shorter.save(&mut settings);

    assert_eq!(settings.string("CompilerSet_0", "Name"), "c");
    assert!(!settings.store().contains_group("CompilerSet_1"));
}

#[test]
fn set_default_index_out_of_range() {
    let mut sets = CompilerSets::new();
    assert!(sets.set_default_index(0).is_err());
    assert_eq!(sets.add(CompilerSet::new()), 0);
    assert!(sets.set_default_index(0).is_ok());
    assert_eq!(sets.default_index(), Some(0));
}

#[test]
fn config_file() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("configs")
        .join("compiler-sets.json");
    let config = Config::from_path(path.as_path()).expect("Always valid");
    assert_eq!(config, Config::default());
}

#[test]
fn config_defaults() {
    let directory = tempfile::tempdir().expect("Always valid");
    let path = directory.path().join("config.json");
    std::fs::write(path.as_path(), r#"{ "install_folders": ["TDM-GCC"] }"#).expect("Always valid");

    let config = Config::from_path(path.as_path()).expect("Always valid");
    assert_eq!(config.install_folders, vec!["TDM-GCC".to_owned()]);
    assert_eq!(config.timeout().as_secs(), 30);

    std::fs::write(path.as_path(), r#"{ "timeout": 0 }"#).expect("Always valid");
    assert!(Config::from_path(path.as_path()).is_err());
}
