//! Build script for clockish-simulator
//!
//! On Windows, points the linker at a vendored SDL2 and places SDL2.dll next to the binary.
//! Other platforms use the system SDL2.

use std::path::{Path, PathBuf};
use std::{env, fs};

fn main() {
    if env::var("CARGO_CFG_TARGET_OS").unwrap_or_default() != "windows" {
        return;
    }

    let Ok(manifest_dir) = env::var("CARGO_MANIFEST_DIR") else {
        return;
    };
    let manifest_dir = PathBuf::from(manifest_dir);
    let vendor_sdl2 = manifest_dir.join("vendor").join("sdl2");
    println!("cargo:rerun-if-changed={}", vendor_sdl2.display());

    if !vendor_sdl2.exists() {
        println!("cargo:warning=SDL2 not found at {}", vendor_sdl2.display());
        println!("cargo:warning=Put SDL2.lib and SDL2.dll in simulator/vendor/sdl2/");
        return;
    }

    println!("cargo:rustc-link-search=native={}", vendor_sdl2.display());

    // OUT_DIR is target/<profile>/build/clockish-simulator-<hash>/out
    if let Ok(out_dir) = env::var("OUT_DIR") {
        let out_path = PathBuf::from(out_dir);
        if let Some(profile_dir) = out_path
            .ancestors()
            .find(|p| p.file_name().is_some_and(|n| n == "release" || n == "debug"))
        {
            copy_dll(&vendor_sdl2, profile_dir);
        }
    }
}

fn copy_dll(
    vendor_sdl2: &Path,
    profile_dir: &Path,
) {
    let src = vendor_sdl2.join("SDL2.dll");
    let dst = profile_dir.join("SDL2.dll");
    if !src.exists() || dst.exists() {
        return;
    }
    if let Err(e) = fs::copy(&src, &dst) {
        println!("cargo:warning=Failed to copy SDL2.dll: {e}");
    }
}
