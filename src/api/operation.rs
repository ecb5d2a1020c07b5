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

use std::time::Duration;

use prost::Message;
use tracing::debug;

use crate::proto::cirrus::cloud::operation::{operation, GetOperationRequest, Operation};

use super::error::ApiError;
use super::Cloud;

const POLL_INTERVAL: Duration = Duration::from_secs(2);

/// Unpack a service-specific message from an operation's `metadata` field.
pub fn unpack_metadata<M: Message + Default>(op: &Operation) -> Result<M, ApiError> {
    let Some(metadata) = &op.metadata else {
        return Err(ApiError::InvalidResponse(format!(
            "operation {} carries no metadata",
            op.id
        )));
    };
    M::decode(metadata.value.as_slice()).map_err(|err| {
        ApiError::InvalidResponse(format!(
            "cannot decode metadata of operation {} ({}): {err}",
            op.id, metadata.type_url
        ))
    })
}

impl Cloud {
    /// Poll the operation to completion, within `timeout`.
    ///
    /// All long-running-operation polling goes through here; resources never
    /// poll on their own.
    pub async fn wait_operation(
        &self,
        op: Operation,
        timeout: Duration,
    ) -> Result<Operation, ApiError> {
        let id = op.id.clone();
        tokio::time::timeout(timeout, self.poll_operation(op))
            .await
            .map_err(|_| ApiError::OperationTimeout(id))?
    }

    async fn poll_operation(&self, mut op: Operation) -> Result<Operation, ApiError> {
        loop {
            if op.done {
                if let Some(operation::Result::Error(status)) = &op.result {
                    return Err(ApiError::OperationFailed {
                        id: op.id.clone(),
                        code: status.code,
                        message: status.message.clone(),
                    });
                }
                return Ok(op);
            }

            debug!(operation = %op.id, "waiting for operation");
            tokio::time::sleep(POLL_INTERVAL).await;
            op = self
                .operations()
                .get(GetOperationRequest {
                    operation_id: op.id.clone(),
                })
                .await?
                .into_inner();
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::proto::cirrus::cloud::spark::v1::CreateClusterMetadata;

    use super::*;

    fn done_operation() -> Operation {
        Operation {
            id: "op1".into(),
            done: true,
            ..Default::default()
        }
    }

    #[test]
    fn unpack_metadata_round_trips() {
        let metadata = CreateClusterMetadata {
            cluster_id: "c1".into(),
        };
        let mut op = done_operation();
        op.metadata = Some(prost_types::Any {
            type_url: "type.cirrus-cloud.net/cirrus.cloud.spark.v1.CreateClusterMetadata".into(),
            value: metadata.encode_to_vec(),
        });

        let decoded: CreateClusterMetadata = unpack_metadata(&op).unwrap();
        assert_eq!(decoded.cluster_id, "c1");
    }

    #[test]
    fn unpack_metadata_requires_metadata() {
        let op = done_operation();
        let err = unpack_metadata::<CreateClusterMetadata>(&op).unwrap_err();
        assert!(err.to_string().contains("no metadata"));
    }
}
