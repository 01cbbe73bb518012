use std::env;
use std::path::PathBuf;

fn main() {
    println!("cargo:rerun-if-changed=src");
    println!("cargo:rerun-if-changed=cbindgen.toml");

    let (Ok(crate_dir), Ok(out_dir)) = (env::var("CARGO_MANIFEST_DIR"), env::var("OUT_DIR")) else {
        println!("cargo:warning=skipping C header generation: cargo paths not set");
        return;
    };
    let crate_dir = PathBuf::from(crate_dir);
    let config = cbindgen::Config::from_root_or_default(&crate_dir);

    match cbindgen::Builder::new()
        .with_crate(&crate_dir)
        .with_config(config)
        .generate()
    {
        Ok(bindings) => {
            bindings.write_to_file(PathBuf::from(out_dir).join("integresql.h"));
        }
        Err(e) => println!("cargo:warning=skipping C header generation: {e}"),
    }
}
