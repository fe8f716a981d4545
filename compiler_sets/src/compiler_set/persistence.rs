//!
//! The compiler set persistence.
//!

use crate::settings::store::Store;
use crate::settings::Settings;

use super::CompilerSet;

/// The C compiler key.
const C_COMPILER: &str = "ccompiler";
/// The C++ compiler key.
const CPP_COMPILER: &str = "cppcompiler";
/// The debugger key.
const DEBUGGER: &str = "debugger";
/// The make tool key.
const MAKE: &str = "make";
/// The resource compiler key.
const RESOURCE_COMPILER: &str = "windres";
/// The profiler key.
const PROFILER: &str = "profiler";

/// The encoded options key.
const OPTIONS: &str = "Options";

/// The custom compile parameters switch key.
const USE_CUSTOM_COMPILE_PARAMS: &str = "useCustomCompileParams";
/// The custom compile parameters key.
const CUSTOM_COMPILE_PARAMS: &str = "customCompileParams";
/// The custom link parameters switch key.
const USE_CUSTOM_LINK_PARAMS: &str = "useCustomLinkParams";
/// The custom link parameters key.
const CUSTOM_LINK_PARAMS: &str = "customLinkParams";
/// The static linking key.
const STATIC_LINK: &str = "StaticLink";
/// The charset parameters key.
const AUTO_ADD_CHARSET_PARAMS: &str = "AddCharset";

/// The machine triple key.
const DUMP_MACHINE: &str = "DumpMachine";
/// The version key.
const VERSION: &str = "Version";
/// The build tag key.
const BUILD_TYPE: &str = "Type";
/// The name key.
const NAME: &str = "Name";
/// The target key.
const TARGET: &str = "Target";

/// The binary directories key.
const BIN_DIRS: &str = "Bins";
/// The C include directories key.
const C_INCLUDE_DIRS: &str = "C";
/// The C++ include directories key.
const CPP_INCLUDE_DIRS: &str = "Cpp";
/// The library directories key.
const LIB_DIRS: &str = "Libs";

impl CompilerSet {
    ///
    /// Writes the set into the group.
    ///
    /// The predefined macros are not written, since they are detected on load.
    ///
    pub fn save<S: Store>(&self, settings: &mut Settings<S>, group: &str) {
        for (key, path) in [
            (C_COMPILER, &self.c_compiler),
            (CPP_COMPILER, &self.cpp_compiler),
            (DEBUGGER, &self.debugger),
            (MAKE, &self.make),
            (RESOURCE_COMPILER, &self.resource_compiler),
            (PROFILER, &self.profiler),
        ] {
            settings.set_path(group, key, path.as_path());
        }

        settings.set(group, OPTIONS, self.options_string());

        settings.set(group, USE_CUSTOM_COMPILE_PARAMS, self.use_custom_compile_params);
        settings.set(group, CUSTOM_COMPILE_PARAMS, self.custom_compile_params.as_str());
        settings.set(group, USE_CUSTOM_LINK_PARAMS, self.use_custom_link_params);
        settings.set(group, CUSTOM_LINK_PARAMS, self.custom_link_params.as_str());
        settings.set(group, STATIC_LINK, self.static_link);
        settings.set(group, AUTO_ADD_CHARSET_PARAMS, self.auto_add_charset_params);

        settings.set(group, DUMP_MACHINE, self.dump_machine.as_str());
        settings.set(group, VERSION, self.version.as_str());
        settings.set(group, BUILD_TYPE, self.build_type.as_str());
        settings.set(group, NAME, self.name.as_str());
        settings.set(group, TARGET, self.target.as_str());

        settings.set_paths(group, BIN_DIRS, self.bin_dirs.as_slice());
        settings.set_paths(group, C_INCLUDE_DIRS, self.c_include_dirs.as_slice());
        settings.set_paths(group, CPP_INCLUDE_DIRS, self.cpp_include_dirs.as_slice());
        settings.set_paths(group, LIB_DIRS, self.lib_dirs.as_slice());
    }

    ///
    /// Reads the set from the group.
    ///
    /// Missing keys yield empty values, so a missing group yields an empty set
    /// with every option off.
    ///
    pub fn load<S: Store>(settings: &Settings<S>, group: &str) -> Self {
        let mut set = Self::new();

        set.c_compiler = settings.path(group, C_COMPILER);
        set.cpp_compiler = settings.path(group, CPP_COMPILER);
        set.debugger = settings.path(group, DEBUGGER);
        set.make = settings.path(group, MAKE);
        set.resource_compiler = settings.path(group, RESOURCE_COMPILER);
        set.profiler = settings.path(group, PROFILER);

        set.set_options_string(settings.string(group, OPTIONS).as_str());

        set.use_custom_compile_params = settings.bool(group, USE_CUSTOM_COMPILE_PARAMS);
        set.custom_compile_params = settings.string(group, CUSTOM_COMPILE_PARAMS);
        set.use_custom_link_params = settings.bool(group, USE_CUSTOM_LINK_PARAMS);
        set.custom_link_params = settings.string(group, CUSTOM_LINK_PARAMS);
        set.static_link = settings.bool(group, STATIC_LINK);
        set.auto_add_charset_params = settings.bool(group, AUTO_ADD_CHARSET_PARAMS);

        set.dump_machine = settings.string(group, DUMP_MACHINE);
        set.version = settings.string(group, VERSION);
        set.build_type = settings.string(group, BUILD_TYPE);
        set.name = settings.string(group, NAME);
        set.target = settings.string(group, TARGET);

        set.bin_dirs = settings.paths(group, BIN_DIRS);
        set.c_include_dirs = settings.paths(group, C_INCLUDE_DIRS);
        set.cpp_include_dirs = settings.paths(group, CPP_INCLUDE_DIRS);
        set.lib_dirs = settings.paths(group, LIB_DIRS);

        set
    }
}
