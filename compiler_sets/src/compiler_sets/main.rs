//!
//! The compiler sets executable.
//!

pub(crate) mod arguments;

use std::path::Path;
use std::path::PathBuf;
use std::time::Instant;

use clap::Parser;
use colored::Colorize;

use compiler_sets::CompilerSet;
use compiler_sets::CompilerSets;
use compiler_sets::Language;

use self::arguments::Arguments;

/// The success exit code.
const EXIT_CODE_SUCCESS: i32 = 0;

/// The failure exit code.
const EXIT_CODE_FAILURE: i32 = 1;

/// The default settings file name inside the application directory.
const SETTINGS_FILE_NAME: &str = "compiler-sets.json";

///
/// The application entry point.
///
fn main() {
    let exit_code = match Arguments::try_parse()
        .map_err(|error| anyhow::anyhow!(error))
        .and_then(main_inner)
    {
        Ok(()) => EXIT_CODE_SUCCESS,
        Err(error) => {
            eprintln!("{error:?}");
            EXIT_CODE_FAILURE
        }
    };
    std::process::exit(exit_code);
}

///
/// The entry point wrapper used for proper error handling.
///
fn main_inner(arguments: Arguments) -> anyhow::Result<()> {
    let arguments = Arguments::validate(arguments)?;
    let quiet = arguments.quiet;

    let app_directory = match arguments.app_directory.clone() {
        Some(app_directory) => app_directory,
        None => std::env::current_exe()
            .map_err(|error| anyhow::anyhow!("Executable path resolving error: {error}"))?
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default(),
    };

    let mut config = match arguments.config.as_deref() {
        Some(path) => compiler_sets::Config::from_path(path)?,
        None => compiler_sets::Config::default(),
    };
    if let Some(timeout) = arguments.timeout {
        config.timeout = timeout;
    }

    let settings_path = arguments
        .settings
        .clone()
        .unwrap_or_else(|| app_directory.join(SETTINGS_FILE_NAME));
    let store = compiler_sets::JsonStore::open(settings_path.as_path())?;
    let mut settings = compiler_sets::Settings::new(store, app_directory);
    let runner = compiler_sets::ProcessRunner::new(config.timeout());

    let run_time_start = Instant::now();
    let mut sets = CompilerSets::new();
    if arguments.detect {
        if !quiet {
            println!(
                "   {} toolchains in {} with the {}s timeout",
                "Detecting".bright_green().bold(),
                settings.app_directory().display(),
                config.timeout,
            );
        }

        let detections =
            sets.detect(&mut settings, config.install_folders.as_slice(), &runner);
        for detection in detections.iter() {
            if quiet {
                continue;
            }
            if detection.report.is_recognized() {
                println!(
                    "    {} {}",
                    "Detected".bright_green().bold(),
                    detection.folder.display()
                );
            } else {
                println!(
                    "    {} {}",
                    "Skipping".bright_yellow().bold(),
                    detection.folder.display()
                );
            }
            if arguments.verbose {
                println!("             {}", detection.report);
            }
        }
    } else {
        sets.load(&settings, &runner);
        if !quiet {
            println!(
                "      {} {} compiler sets from {}",
                "Loaded".bright_green().bold(),
                sets.len(),
                settings_path.display()
            );
        }
    }

    if let Some(index) = arguments.delete {
        let removed = sets.delete(index, &mut settings)?;
        if !quiet {
            println!(
                "     {} compiler set #{index} `{}`",
                "Deleted".bright_green().bold(),
                removed.name
            );
        }
    }
    if let Some(index) = arguments.default {
        sets.set_default_index(index)?;
    }

    if arguments.is_mutating() {
        sets.save(&mut settings);
        settings.store().flush()?;
        if !quiet {
            println!(
                "       {} {} compiler sets to {}",
                "Saved".bright_green().bold(),
                sets.len(),
                settings_path.display()
            );
        }
    }

    if let Some(index) = arguments.show {
        let set = sets
            .get(index)
            .ok_or_else(|| anyhow::anyhow!("Compiler set #{index} does not exist"))?;
        print_set(set, arguments.language);
    }
    if arguments.list || arguments.show.is_none() {
        print_list(&sets);
    }

    if !quiet {
        println!(
            "    {} in {}m{:02}s",
            "Finished".bright_green().bold(),
            run_time_start.elapsed().as_secs() / 60,
            run_time_start.elapsed().as_secs() % 60,
        );
    }

    Ok(())
}

///
/// Prints the sets, marking the default one.
///
fn print_list(sets: &CompilerSets) {
    for (index, set) in sets.list().iter().enumerate() {
        let marker = if sets.default_index() == Some(index) {
            "*".bright_green().bold().to_string()
        } else {
            " ".to_owned()
        };
        println!("{marker} {index:>3} {}", set.name);
    }
}

///
/// Prints the set in detail, with the compile flags of the language or of both.
///
fn print_set(set: &CompilerSet, language: Option<Language>) {
    println!("{}", set.name.bold());
    println!("  target:           {}", set.target);
    println!("  machine:          {}", set.dump_machine);
    println!("  version:          {}", set.version);
    println!("  type:             {}", set.build_type);

    for (name, path) in [
        ("C compiler", &set.c_compiler),
        ("C++ compiler", &set.cpp_compiler),
        ("make", &set.make),
        ("debugger", &set.debugger),
        ("profiler", &set.profiler),
        ("resource compiler", &set.resource_compiler),
    ] {
        println!("  {:<17} {}", format!("{name}:"), path.display());
    }

    for (name, directories) in [
        ("binaries", &set.bin_dirs),
        ("C includes", &set.c_include_dirs),
        ("C++ includes", &set.cpp_include_dirs),
        ("libraries", &set.lib_dirs),
    ] {
        println!("  {name}:");
        print_directories(directories.as_slice());
    }

    println!("  options:");
    for option in set.options().iter().filter(|option| option.value != 0) {
        println!(
            "    {:<16} {}",
            option.setting,
            option.selected_label().unwrap_or("on")
        );
    }
    let languages = match language {
        Some(language) => vec![language],
        None => vec![Language::C, Language::Cpp],
    };
    for language in languages.into_iter() {
        println!(
            "  {:<17} {}",
            format!("{language} flags:"),
            set.compile_arguments(language).join(" ")
        );
    }
    println!("  link flags:       {}", set.link_arguments().join(" "));
    println!("  defines:          {}", set.defines.len());

    if let Err(error) = set.validate() {
        println!("{}", error.to_string().bright_red());
    }
}

///
/// Prints the directories, one per line.
///
fn print_directories(directories: &[PathBuf]) {
    for directory in directories.iter() {
        println!("    {}", directory.display());
    }
}
