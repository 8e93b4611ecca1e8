//! Build script for attodry-sys FFI bindings.
//!
//! With the `attodry-sdk` feature enabled, bindings are generated from the
//! vendor header with bindgen and the interface library is linked. Without
//! the feature nothing is generated: `src/stub.rs` provides stand-in
//! implementations with identical signatures so the workspace builds and
//! tests on machines without the vendor SDK.

fn main() {
    println!("cargo:rerun-if-changed=wrapper.h");
    println!("cargo:rerun-if-env-changed=ATTODRY_SDK_DIR");

    #[cfg(feature = "attodry-sdk")]
    generate_bindings();
}

#[cfg(feature = "attodry-sdk")]
fn generate_bindings() {
    use std::env;
    use std::path::PathBuf;

    let sdk_dir = env::var("ATTODRY_SDK_DIR").expect(
        "ATTODRY_SDK_DIR environment variable must be set when the `attodry-sdk` feature is enabled",
    );

    let sdk_include_path = PathBuf::from(&sdk_dir).join("include");

    // Allow ATTODRY_LIB_DIR to override the default lib path
    let sdk_lib_path = if let Ok(lib_dir) = env::var("ATTODRY_LIB_DIR") {
        PathBuf::from(lib_dir)
    } else {
        PathBuf::from(&sdk_dir).join("lib")
    };

    if !sdk_include_path.exists() {
        panic!(
            "attoDRY SDK include path does not exist: {:?}",
            sdk_include_path
        );
    }
    if !sdk_lib_path.exists() {
        eprintln!(
            "Warning: attoDRY SDK lib path does not exist: {:?}",
            sdk_lib_path
        );
    }

    let bindings = bindgen::Builder::default()
        .header("wrapper.h")
        .clang_arg(format!("-I{}", sdk_include_path.display()))
        // The whole interface surface plus the LabVIEW runtime status query
        .allowlist_function("AttoDRY_Interface_.*")
        .allowlist_function("LVDLLStatus")
        .allowlist_type("AttoDRY_Interface_.*")
        .allowlist_var("AttoDRY_Interface_.*")
        .allowlist_var("Enum_.*")
        // Keep enum values as flat constants (matches the stub module)
        .default_enum_style(bindgen::EnumVariation::Consts)
        .derive_debug(true)
        .derive_copy(true)
        .generate_comments(true)
        .parse_callbacks(Box::new(bindgen::CargoCallbacks::new()))
        .generate()
        .expect("Unable to generate attoDRY bindings");

    let out_path = PathBuf::from(env::var("OUT_DIR").expect("OUT_DIR not set"));
    bindings
        .write_to_file(out_path.join("bindings.rs"))
        .expect("Couldn't write bindings!");

    println!("cargo:rustc-link-search=native={}", sdk_lib_path.display());
    println!("cargo:rustc-link-lib=attoDRYLib");
}
