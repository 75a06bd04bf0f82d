// File: crates/chart-core/build.rs
// Summary: Build script linking the Windows system libraries Skia textlayout (ICU) needs.

fn main() {
    #[cfg(target_os = "windows")]
    {
        // Registry lookups (RegOpenKeyExW, RegQueryInfoKeyW) used by ICU data loading
        println!("cargo:rustc-link-lib=advapi32");
    }
}
