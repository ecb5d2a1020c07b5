// This file is part of the terraform-provider-cirrus project
//
// Copyright (C) ANEO, 2025-2026. All rights reserved.
//
// Licensed under the Apache License, Version 2.0 (the "License")
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use thiserror::Error;
use tonic::Code;

/// Errors produced by the control-plane client layer.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("transport error: {0}")]
    Transport(#[from] tonic::transport::Error),

    #[error("{0}")]
    Status(#[from] tonic::Status),

    #[error("operation {id} failed: {message} (code {code})")]
    OperationFailed { id: String, code: i32, message: String },

    #[error("timed out waiting for operation {0}")]
    OperationTimeout(String),

    #[error("unexpected response: {0}")]
    InvalidResponse(String),
}

/// Check whether `err` wraps a gRPC status with the given code, at any
/// nesting depth.
pub fn is_status_with_code(err: &anyhow::Error, code: Code) -> bool {
    err.chain().any(|cause| {
        if let Some(status) = cause.downcast_ref::<tonic::Status>() {
            return status.code() == code;
        }
        if let Some(ApiError::Status(status)) = cause.downcast_ref::<ApiError>() {
            return status.code() == code;
        }
        false
    })
}

pub fn is_not_found(err: &anyhow::Error) -> bool {
    is_status_with_code(err, Code::NotFound)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_code_on_bare_status() {
        let err = anyhow::Error::from(tonic::Status::not_found("no such cluster"));
        assert!(is_status_with_code(&err, Code::NotFound));
        assert!(is_not_found(&err));
        assert!(!is_status_with_code(&err, Code::PermissionDenied));
    }

    #[test]
    fn finds_code_under_context_layers() {
        let err = anyhow::Error::from(tonic::Status::not_found("gone"))
            .context("failed to read cluster")
            .context("refreshing state");
        assert!(is_status_with_code(&err, Code::NotFound));
    }

    #[test]
    fn finds_code_behind_api_error() {
        let err = anyhow::Error::from(ApiError::Status(tonic::Status::already_exists("dup")))
            .context("creating connection");
        assert!(is_status_with_code(&err, Code::AlreadyExists));
        assert!(!is_not_found(&err));
    }

    #[test]
    fn ignores_unrelated_errors() {
        let err = anyhow::Error::from(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "file not found",
        ));
        assert!(!is_not_found(&err));

        let err = anyhow::Error::from(ApiError::OperationFailed {
            id: "op1".into(),
            code: Code::NotFound as i32,
            message: "gone".into(),
        });
        assert!(!is_not_found(&err));
    }
}
