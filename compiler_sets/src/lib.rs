//!
//! The compiler sets library.
//!

pub mod compiler_set;
pub mod config;
pub mod options;
pub mod preset;
pub mod runner;
pub mod settings;

#[cfg(test)]
mod tests;

pub use self::compiler_set::detection::report::Report;
pub use self::compiler_set::CompilerSet;
pub use self::config::Config;
pub use self::options::language::Language;
pub use self::options::CompilerOption;
pub use self::preset::Preset;
pub use self::runner::process::ProcessRunner;
pub use self::runner::Runner;
pub use self::settings::store::json::JsonStore;
pub use self::settings::store::memory::MemoryStore;
pub use self::settings::store::Store;
pub use self::settings::value::Value;
pub use self::settings::Settings;

use std::path::PathBuf;

use rayon::iter::IntoParallelRefIterator;
use rayon::iter::IntoParallelRefMutIterator;
use rayon::iter::ParallelIterator;

///
/// The detection outcome of one install folder.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Detection {
    /// The probed install folder.
    pub folder: PathBuf,
    /// The detection report.
    pub report: Report,
}

///
/// The compiler sets.
///
/// The sets are persisted positionally, one group per index, so every
/// operation that shifts the list rewrites the affected trailing groups.
///
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompilerSets {
    /// The sets in the persisted order.
    list: Vec<CompilerSet>,
    /// The default set index.
    default_index: Option<usize>,
}

impl CompilerSets {
    /// The collection group.
    pub const GROUP: &'static str = "CompilerSets";
    /// The set group prefix, followed by the set index.
    pub const SET_GROUP_PREFIX: &'static str = "CompilerSet_";

    /// The default index key.
    const DEFAULT_INDEX_KEY: &'static str = "defaultIndex";
    /// The set count key.
    const COUNT_KEY: &'static str = "count";
    /// The schema version key.
    const SCHEMA_VERSION_KEY: &'static str = "schemaVersion";
    /// The schema version of the positional options encoding.
    const SCHEMA_VERSION: i64 = 1;

    ///
    /// Creates an empty collection.
    ///
    pub fn new() -> Self {
        Self::default()
    }

    ///
    /// The group name of the set with the index.
    ///
    pub fn group_name(index: usize) -> String {
        format!("{}{index}", Self::SET_GROUP_PREFIX)
    }

    ///
    /// Replaces the sets with the ones detected in the install folders.
    ///
    /// The folders are relative to the application directory and are probed in
    /// parallel. Every recognized toolchain yields the Release, Debug, and
    /// Profiling presets, and the Debug preset of the last one becomes the default.
    ///
    pub fn detect<S: Store>(
        &mut self,
        settings: &mut Settings<S>,
        install_folders: &[String],
        runner: &dyn Runner,
    ) -> Vec<Detection> {
        self.clear(settings);

        let folders: Vec<PathBuf> = install_folders
            .iter()
            .map(|folder| settings.app_directory().join(folder))
            .collect();
        let detected: Vec<(CompilerSet, Report)> = folders
            .par_iter()
            .map(|folder| CompilerSet::from_folder(folder.as_path(), runner))
            .collect();

        let mut detections = Vec::with_capacity(folders.len());
        for (folder, (base, report)) in folders.into_iter().zip(detected) {
            if report.is_recognized() {
                self.add_presets(&base);
            }
            detections.push(Detection { folder, report });
        }
        detections
    }

    ///
    /// Appends the presets derived from the base set and selects the Debug one.
    ///
    pub fn add_presets(&mut self, base: &CompilerSet) {
        for preset in Preset::ALL.into_iter() {
            self.list.push(preset.derive(base));
        }
        self.default_index = Some(self.list.len() - 2);
    }

    ///
    /// Writes every set and the collection group.
    ///
    /// Groups left over from a longer list are removed.
    ///
    pub fn save<S: Store>(&self, settings: &mut Settings<S>) {
        let previous_count = Self::persisted_count(settings);
        for index in self.list.len()..previous_count {
            settings.remove_group(Self::group_name(index).as_str());
        }

        for (index, set) in self.list.iter().enumerate() {
            set.save(settings, Self::group_name(index).as_str());
        }
        self.save_header(settings);
    }

    ///
    /// Replaces the sets with the persisted ones.
    ///
    /// The predefined macros are read from the live compilers. A persisted
    /// default index out of range is dropped.
    ///
    pub fn load<S: Store>(&mut self, settings: &Settings<S>, runner: &dyn Runner) {
        let count = Self::persisted_count(settings);
        self.list = (0..count)
            .map(|index| CompilerSet::load(settings, Self::group_name(index).as_str()))
            .collect();
        self.list.par_iter_mut().for_each(|set| {
            set.detect_defines(runner);
        });

        let default_index = settings.integer(Self::GROUP, Self::DEFAULT_INDEX_KEY, -1);
        self.default_index = usize::try_from(default_index)
            .ok()
            .filter(|index| *index < self.list.len());
    }

    ///
    /// Removes the set, rewriting the groups of the sets after it.
    ///
    /// The default index is clamped to the last set.
    ///
    pub fn delete<S: Store>(
        &mut self,
        index: usize,
        settings: &mut Settings<S>,
    ) -> anyhow::Result<CompilerSet> {
        if index >= self.list.len() {
            anyhow::bail!(
                "Compiler set index {index} is out of range (there are {} sets)",
                self.list.len()
            );
        }

        for group_index in index..self.list.len() {
            settings.remove_group(Self::group_name(group_index).as_str());
        }
        let removed = self.list.remove(index);
        for (group_index, set) in self.list.iter().enumerate().skip(index) {
            set.save(settings, Self::group_name(group_index).as_str());
        }

        self.default_index = match self.default_index {
            Some(_) if self.list.is_empty() => None,
            Some(default_index) if default_index >= self.list.len() => Some(self.list.len() - 1),
            default_index => default_index,
        };
        self.save_header(settings);

        Ok(removed)
    }

    ///
    /// Removes every set along with its group.
    ///
    pub fn clear<S: Store>(&mut self, settings: &mut Settings<S>) {
        for index in 0..self.list.len() {
            settings.remove_group(Self::group_name(index).as_str());
        }
        self.list.clear();
        self.default_index = None;
    }

    ///
    /// Appends the set and returns its index.
    ///
    pub fn add(&mut self, set: CompilerSet) -> usize {
        self.list.push(set);
        self.list.len() - 1
    }

    ///
    /// The default set.
    ///
    pub fn default_set(&self) -> Option<&CompilerSet> {
        self.list.get(self.default_index?)
    }

    ///
    /// The default set index.
    ///
    pub fn default_index(&self) -> Option<usize> {
        self.default_index
    }

    ///
    /// Selects the default set.
    ///
    pub fn set_default_index(&mut self, index: usize) -> anyhow::Result<()> {
        if index >= self.list.len() {
            anyhow::bail!(
                "Compiler set index {index} is out of range (there are {} sets)",
                self.list.len()
            );
        }
        self.default_index = Some(index);
        Ok(())
    }

    ///
    /// The set with the index.
    ///
    pub fn get(&self, index: usize) -> Option<&CompilerSet> {
        self.list.get(index)
    }

    ///
    /// The set with the index, mutably.
    ///
    pub fn get_mut(&mut self, index: usize) -> Option<&mut CompilerSet> {
        self.list.get_mut(index)
    }

    ///
    /// The sets in the persisted order.
    ///
    pub fn list(&self) -> &[CompilerSet] {
        self.list.as_slice()
    }

    ///
    /// The number of sets.
    ///
    pub fn len(&self) -> usize {
        self.list.len()
    }

    ///
    /// Whether there are no sets.
    ///
    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    ///
    /// Writes the default index, the set count, and the schema version.
    ///
    fn save_header<S: Store>(&self, settings: &mut Settings<S>) {
        let default_index = self
            .default_index
            .and_then(|index| i64::try_from(index).ok())
            .unwrap_or(-1);
        settings.set(Self::GROUP, Self::DEFAULT_INDEX_KEY, default_index);
        settings.set(Self::GROUP, Self::COUNT_KEY, self.list.len() as i64);
        settings.set(Self::GROUP, Self::SCHEMA_VERSION_KEY, Self::SCHEMA_VERSION);
    }

    ///
    /// The persisted set count.
    ///
    fn persisted_count<S: Store>(settings: &Settings<S>) -> usize {
        usize::try_from(settings.integer(Self::GROUP, Self::COUNT_KEY, 0)).unwrap_or_default()
    }
}
