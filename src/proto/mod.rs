//! Generated protobuf bindings for the Cirrus control-plane API.
//!
//! The files in this directory are produced by `tonic-build` from the
//! definitions under `proto/` and committed to the repository. Regenerate
//! with `cargo build --features regenerate-proto`.

pub mod cirrus {
    pub mod cloud {
        pub mod operation {
            include!("cirrus.cloud.operation.rs");
        }

        pub mod iam {
            pub mod v1 {
                include!("cirrus.cloud.iam.v1.rs");
            }
        }

        pub mod vpc {
            pub mod v1 {
                include!("cirrus.cloud.vpc.v1.rs");
            }
        }

        pub mod spark {
            pub mod v1 {
                include!("cirrus.cloud.spark.v1.rs");
            }
        }

        pub mod query {
            pub mod v1 {
                include!("cirrus.cloud.query.v1.rs");
            }
        }
    }
}
