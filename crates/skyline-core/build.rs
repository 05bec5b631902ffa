// File: crates/skyline-core/build.rs
// Summary: Build script linking Windows system libraries required by Skia/ICU.

fn main() {
    #[cfg(target_os = "windows")]
    {
        // RegOpenKeyExW and friends, pulled in through Skia's font enumeration.
        println!("cargo:rustc-link-lib=advapi32");
    }
}
