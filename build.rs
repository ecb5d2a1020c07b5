//! Build script for proto compilation.
//!
//! The generated bindings are committed under `src/proto`, so this only
//! needs to run when the proto definitions change.
//!
//! To regenerate: `cargo build --features regenerate-proto`

fn main() -> Result<(), Box<dyn std::error::Error>> {
    #[cfg(feature = "regenerate-proto")]
    {
        tonic_build::configure()
            .build_server(false)
            .out_dir("src/proto")
            .compile_protos(
                &[
                    "proto/cirrus/cloud/operation/operation.proto",
                    "proto/cirrus/cloud/iam/v1/iam_token_service.proto",
                    "proto/cirrus/cloud/vpc/v1/security_group_service.proto",
                    "proto/cirrus/cloud/spark/v1/cluster_service.proto",
                    "proto/cirrus/cloud/query/v1/query_service.proto",
                ],
                &["proto"],
            )?;
    }

    println!("cargo:rerun-if-changed=proto");

    Ok(())
}
