// File: crates/plotgrid-render-skia/build.rs
// Summary: Links the extra Windows system libraries skia-safe's ICU/font code needs.

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    if std::env::var("CARGO_CFG_TARGET_OS").as_deref() == Ok("windows") {
        // registry lookups in the font manager
        println!("cargo:rustc-link-lib=advapi32");
    }
}
