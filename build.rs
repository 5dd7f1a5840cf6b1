use std::env;
use std::fs;
use std::path::PathBuf;

fn main() {
    // Stage memory.x into OUT_DIR so cortex-m-rt's linker script finds it.
    // Harmless on hosted builds, which never link against it.
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());
    fs::copy("memory.x", out_dir.join("memory.x")).unwrap();
    println!("cargo:rustc-link-search={}", out_dir.display());
    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}
