//!
//! The compiler option catalog.
//!
//! The persisted options string is positional, so entries may only ever be
//! appended to the end of the catalog.
//!

use once_cell::sync::Lazy;

use super::CompilerOption;

/// The `-O` option setting.
pub const OPTIMIZATION: &str = "-O";
/// The `-O` value of the "Med" (`-O2`) choice, used by release builds.
pub const OPTIMIZATION_MEDIUM: usize = 2;
/// The `-s` option setting.
pub const STRIP: &str = "-s";
/// The `-g3` option setting.
pub const DEBUG_INFO: &str = "-g3";
/// The `-Wall` option setting.
pub const WARNINGS_ALL: &str = "-Wall";
/// The `-Wextra` option setting.
pub const WARNINGS_EXTRA: &str = "-Wextra";
/// The `-pg` option setting.
pub const PROFILING: &str = "-pg";

/// The number of options in the catalog.
pub const CATALOG_SIZE: usize = 25;

/// The machine types accepted by `-march=` and `-mtune=`.
const MACHINES: [&str; 27] = [
    "",
    "This CPU=native",
    "i386=i386",
    "i486=i486",
    "i586=i586",
    "i686=i686",
    "Pentium=pentium",
    "Pentium MMX=pentium-mmx",
    "Pentium Pro=pentiumpro",
    "Pentium 2=pentium2",
    "Pentium 3=pentium3",
    "Pentium 4=pentium4",
    "Conroe=core2",
    "Nehalem=corei7",
    "Sandy=corei7-avx",
    "K6=k6",
    "K6-2=k6-2",
    "K6-3=k6-3",
    "Athlon=athlon",
    "Athlon Tbird=athlon-tbird",
    "Athlon 4=athlon-4",
    "Athlon XP=athlon-xp",
    "Athlon MP=athlon-mp",
    "K8=k8",
    "K8 Rev.E=k8-sse3",
    "K10=barcelona",
    "Bulldozer=bdver1",
];

/// The instruction set extensions accepted by `-m`.
const EXTENSIONS: [&str; 16] = [
    "",
    "MMX=mmx",
    "3D Now=3dnow",
    "SSE=sse",
    "SSE2=sse2",
    "SSE3=sse3",
    "SSSE3=ssse3",
    "SSE4=sse4",
    "SSE4A=sse4a",
    "SSE4.1=sse4.1",
    "SSE4.2=sse4.2",
    "AVX=avx",
    "AVX2=avx2",
    "FMA4=fma4",
    "XOP=xop",
    "AES=aes",
];

/// The optimization levels accepted by `-O`.
const OPTIMIZATION_LEVELS: [&str; 7] = [
    "",
    "Low=1",
    "Med=2",
    "High=3",
    "Highest (fast)=fast",
    "Size (s)=s",
    "Debug (g)=g",
];

/// The pointer sizes.
const POINTER_SIZES: [&str; 3] = ["", "32bit=m32", "64bit=m64"];

/// The language standards accepted by `-std=`.
const STANDARDS: [&str; 19] = [
    "",
    "ISO C90=c90",
    "ISO C99=c99",
    "ISO C11=c11",
    "ISO C17=c17",
    "ISO C++=c++98",
    "ISO C++11=c++11",
    "ISO C++14=c++14",
    "ISO C++17=c++17",
    "ISO C++20=c++2a",
    "GNU C90=gnu90",
    "GNU C99=gnu99",
    "GNU C11=gnu11",
    "GNU C17=gnu17",
    "GNU C++=gnu++98",
    "GNU C++11=gnu++11",
    "GNU C++14=gnu++14",
    "GNU C++17=gnu++17",
    "GNU C++20=gnu++20",
];

///
/// The catalog every compiler set is created from.
///
static CATALOG: Lazy<Vec<CompilerOption>> = Lazy::new(build);

///
/// Returns a fresh copy of the catalog.
///
pub fn options() -> Vec<CompilerOption> {
    CATALOG.clone()
}

///
/// Builds the catalog.
///
#[rustfmt::skip]
fn build() -> Vec<CompilerOption> {
    let mut options = Vec::with_capacity(CATALOG_SIZE);

    let section = "C options";
    options.push(switch("Support all ANSI standard C programs (-ansi)", section, true, true, false, "-ansi"));
    options.push(switch("Do not recognize asm,inline or typeof as a keyword (-fno-asm)", section, true, true, false, "-fno-asm"));
    options.push(switch("Imitate traditional C preprocessors (-traditional-cpp)", section, true, true, false, "-traditional-cpp"));

    let section = "Code Generation";
    options.push(CompilerOption::new("Optimize for the following machine (-march)", section, true, true, false, "-march=", &MACHINES));
    options.push(CompilerOption::new("Optimize less, while maintaining full compatibility (-tune)", section, true, true, false, "-mtune=", &MACHINES));
    options.push(CompilerOption::new("Enable use of specific instructions (-mx)", section, true, true, false, "-m", &EXTENSIONS));
    options.push(CompilerOption::new("Optimization level (-Ox)", section, true, true, false, OPTIMIZATION, &OPTIMIZATION_LEVELS));
    options.push(CompilerOption::new("Compile with the following pointer size (-mx)", section, true, true, true, "-", &POINTER_SIZES));
    options.push(CompilerOption::new("Language standard (-std)", section, true, true, false, "-std=", &STANDARDS));

    let section = "Warnings";
    options.push(switch("Inhibit all warning messages (-w)", section, true, true, false, "-w"));
    options.push(switch("Show most warnings (-Wall)", section, true, true, false, WARNINGS_ALL));
    options.push(switch("Show some more warnings (-Wextra)", section, true, true, false, WARNINGS_EXTRA));
    options.push(switch("Check ISO C/C++/C++0x conformance (-pedantic)", section, true, true, false, "-pedantic"));
    options.push(switch("Only check the code for syntax errors (-fsyntax-only)", section, true, true, false, "-fsyntax-only"));
    options.push(switch("Make all warnings into errors (-Werror)", section, true, true, false, "-Werror"));
    options.push(switch("Abort compilation on first error (-Wfatal-errors)", section, true, true, false, "-Wfatal-errors"));

    let section = "Profiling";
    options.push(switch("Generate profiling info for analysis (-pg)", section, true, true, true, PROFILING));

    let section = "Linker";
    options.push(switch("Link an Objective C program (-lobjc)", section, false, false, true, "-lobjc"));
    options.push(switch("Do not use standard system libraries (-nostdlib)", section, true, true, true, "-nostdlib"));
    options.push(switch("Do not create a console window (-mwindows)", section, true, true, true, "-mwindows"));
    options.push(switch("Strip executable (-s)", section, false, false, true, STRIP));
    options.push(switch("Generate debugging information (-g3)", section, true, true, true, DEBUG_INFO));

    let section = "Output";
    options.push(switch("-fverbose-asm", section, true, true, false, "-fverbose-asm"));
    options.push(switch("Do not assemble, but output assembler code (-S)", section, true, true, false, "-S"));
    options.push(switch("Use pipes instead of temporary files during compilation (-pipe)", section, true, true, false, "-pipe"));

    options
}

///
/// Creates an on/off option.
///
fn switch(
    name: &str,
    section: &str,
    is_c: bool,
    is_cpp: bool,
    is_linker: bool,
    setting: &str,
) -> CompilerOption {
    CompilerOption::new(name, section, is_c, is_cpp, is_linker, setting, &[])
}
