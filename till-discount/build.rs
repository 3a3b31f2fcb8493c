fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Point prost/tonic at the vendored protoc binary so the build does not
    // depend on a system-installed protobuf-compiler.
    if std::env::var_os("PROTOC").is_none() {
        std::env::set_var("PROTOC", protoc_bin_vendored::protoc_bin_path()?);
    }
    tonic_build::compile_protos("proto/discount.proto")?;
    Ok(())
}
