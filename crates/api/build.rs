fn main() -> Result<(), Box<dyn std::error::Error>> {
    let out_dir = std::path::PathBuf::from(std::env::var("OUT_DIR")?);

    // Server and client stubs, plus the descriptor set served by reflection.
    tonic_prost_build::configure()
        .build_server(true)
        .build_client(true)
        .file_descriptor_set_path(out_dir.join("user_v1_descriptor.bin"))
        .compile_protos(&["proto/user_v1.proto"], &["proto"])?;

    Ok(())
}
