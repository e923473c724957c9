//! Build script for compiling protobuf definitions.

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Use the bundled protoc unless the environment already points at one.
    if std::env::var_os("PROTOC").is_none() {
        std::env::set_var("PROTOC", protoc_bin_vendored::protoc_bin_path()?);
    }

    // Compile proto files to OUT_DIR
    tonic_build::configure()
        .build_server(true)
        .build_client(true)
        .compile_protos(
            &["../../proto/user.proto", "../../proto/health.proto"],
            &["../../proto"],
        )?;

    // Rerun if proto files change
    println!("cargo:rerun-if-changed=../../proto/");

    Ok(())
}
