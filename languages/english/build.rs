// Fetch the English tokenizer binary into OUT_DIR, src/model.rs embeds it
fn main() {
    println!("cargo:rerun-if-changed=build.rs");

    let out_dir = std::env::var("OUT_DIR").expect("OUT_DIR is set for build scripts");
    nlprule_build::BinaryBuilder::new(&["en"], out_dir)
        .build()
        .expect("failed to build nlprule binaries")
        .validate()
        .expect("nlprule binaries failed validation");
}
