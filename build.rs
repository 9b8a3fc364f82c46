use std::env;
use std::path::PathBuf;

/// Directories probed for libcairo when pkg-config cannot locate it.
const FALLBACK_LIB_DIRS: &[&str] = &[
    "/usr/lib/x86_64-linux-gnu",
    "/usr/lib/aarch64-linux-gnu",
    "/usr/lib64",
    "/usr/lib",
    "/usr/local/lib",
    "/opt/homebrew/lib",
];

fn main() {
    println!("cargo:rerun-if-env-changed=CAIRO_LIB_DIR");

    // An explicit directory wins over any probing.
    if let Some(dir) = env::var_os("CAIRO_LIB_DIR") {
        let dir = PathBuf::from(dir);
        if link_in_dir(&dir) {
            return;
        }
        panic!("CAIRO_LIB_DIR={} does not contain libcairo", dir.display());
    }

    if pkg_config::Config::new()
        .atleast_version("1.14")
        .probe("cairo")
        .is_ok()
    {
        return;
    }

    // No cairo.pc installed; look for the shared library directly. Runtime
    // packages often ship only the versioned name, which the linker will
    // not find through -l, so link that file by absolute path.
    for dir in FALLBACK_LIB_DIRS {
        if link_in_dir(&PathBuf::from(dir)) {
            return;
        }
    }

    panic!(
        "cairo not found: install the cairo development package, \
         or point CAIRO_LIB_DIR at the directory containing libcairo.so"
    );
}

fn link_in_dir(dir: &std::path::Path) -> bool {
    if dir.join("libcairo.so").exists() || dir.join("libcairo.dylib").exists() {
        println!("cargo:rustc-link-search=native={}", dir.display());
        println!("cargo:rustc-link-lib=cairo");
        return true;
    }
    let versioned = dir.join("libcairo.so.2");
    if versioned.exists() {
        println!("cargo:rustc-link-arg={}", versioned.display());
        return true;
    }
    false
}
