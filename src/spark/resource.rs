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

use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use async_trait::async_trait;
use tracing::{info, warn};

use tf_provider::value::{Value, ValueEmpty};
use tf_provider::{AttributePath, Diagnostics, Resource, Schema};

use crate::api::{is_not_found, unpack_metadata, Cloud, CloudHandle};
use crate::proto::cirrus::cloud::spark::v1 as spark;
use crate::proto::cirrus::cloud::spark::v1::{
    CreateClusterMetadata, CreateClusterRequest, DeleteClusterRequest, GetClusterRequest,
    UpdateClusterRequest,
};
use crate::utils::{
    expand_string_list, required_string, WithNormalize, WithSchema, WithTimeouts, WithValidate,
};

use super::convert::{
    cluster_update_mask, expand_cluster_config, expand_labels, flatten_cluster,
};
use super::state::ClusterState;

pub(super) const DEFAULT_CREATE_TIMEOUT: Duration = Duration::from_secs(3600);
const DEFAULT_UPDATE_TIMEOUT: Duration = Duration::from_secs(3600);
const DEFAULT_DELETE_TIMEOUT: Duration = Duration::from_secs(1800);

#[derive(Debug)]
pub struct SparkClusterResource {
    cloud: Arc<CloudHandle>,
}

impl SparkClusterResource {
    pub fn new(cloud: Arc<CloudHandle>) -> Self {
        Self { cloud }
    }
}

#[async_trait]
impl Resource for SparkClusterResource {
    type State<'a> = Value<ClusterState<'a>>;
    type PrivateState<'a> = ValueEmpty;
    type ProviderMetaState<'a> = ValueEmpty;

    fn schema(&self, _diags: &mut Diagnostics) -> Option<Schema> {
        Some(ClusterState::schema())
    }

    async fn validate<'a>(&self, diags: &mut Diagnostics, config: Self::State<'a>) -> Option<()> {
        if let Value::Value(state) = &config {
            state.validate(diags, Default::default()).await;
        }
        if diags.errors.is_empty() {
            Some(())
        } else {
            None
        }
    }

    async fn read<'a>(
        &self,
        diags: &mut Diagnostics,
        state: Self::State<'a>,
        private_state: Self::PrivateState<'a>,
        _provider_meta_state: Self::ProviderMetaState<'a>,
    ) -> Option<(Self::State<'a>, Self::PrivateState<'a>)> {
        let Value::Value(state) = state else {
            return Some((Value::Null, private_state));
        };
        let cloud = self.cloud.configured(diags)?;

        let id = state.id.as_str();
        if id.is_empty() {
            diags.root_error(
                "Cannot read cluster",
                "The cluster ID is missing from the state.",
            );
            return None;
        }

        match read_cluster(cloud, id).await {
            Ok(cluster) => Some((
                Value::Value(flatten_cluster(&cluster, &state)),
                private_state,
            )),
            Err(err) if is_not_found(&err) => {
                diags.root_warning(
                    "Cluster has vanished",
                    "The cluster no longer exists remotely and will be removed from the state.",
                );
                Some((Value::Null, private_state))
            }
            Err(err) => {
                diags.root_error("Failed to read cluster", err.to_string());
                None
            }
        }
    }

    async fn plan_create<'a>(
        &self,
        diags: &mut Diagnostics,
        proposed_state: Self::State<'a>,
        _config_state: Self::State<'a>,
        _provider_meta_state: Self::ProviderMetaState<'a>,
    ) -> Option<(Self::State<'a>, Self::PrivateState<'a>)> {
        let Value::Value(mut state) = proposed_state else {
            return Some((Value::Null, Default::default()));
        };
        state.normalize(diags);
        state.id = Value::Unknown;
        state.status = Value::Unknown;
        state.created_at = Value::Unknown;
        if state.folder_id.is_null() {
            state.folder_id = Value::Unknown;
        }
        Some((Value::Value(state), Default::default()))
    }

    async fn plan_update<'a>(
        &self,
        diags: &mut Diagnostics,
        prior_state: Self::State<'a>,
        proposed_state: Self::State<'a>,
        _config_state: Self::State<'a>,
        prior_private_state: Self::PrivateState<'a>,
        _provider_meta_state: Self::ProviderMetaState<'a>,
    ) -> Option<(
        Self::State<'a>,
        Self::PrivateState<'a>,
        Vec<tf_provider::AttributePath>,
    )> {
        let Value::Value(mut state) = proposed_state else {
            return Some((Value::Null, prior_private_state, vec![]));
        };
        state.normalize(diags);

        let mut trigger_replace = Vec::new();
        if let Value::Value(prior) = &prior_state {
            state.id = prior.id.clone();
            state.created_at = prior.created_at.clone();
            if state.folder_id.is_null() {
                state.folder_id = prior.folder_id.clone();
            } else if !prior.folder_id.is_null() && state.folder_id != prior.folder_id {
                // Clusters cannot move between folders.
                trigger_replace.push(AttributePath::new("folder_id"));
            }

            // The status only settles once the update has been applied.
            let mask = cluster_update_mask(&state, prior);
            state.status = if mask.is_empty() {
                prior.status.clone()
            } else {
                Value::Unknown
            };
        }
        Some((Value::Value(state), prior_private_state, trigger_replace))
    }

    async fn plan_destroy<'a>(
        &self,
        diags: &mut Diagnostics,
        prior_state: Self::State<'a>,
        prior_private_state: Self::PrivateState<'a>,
        _provider_meta_state: Self::ProviderMetaState<'a>,
    ) -> Option<Self::PrivateState<'a>> {
        if let Value::Value(state) = &prior_state {
            if state.deletion_protection.as_ref().map_or(false, |on| *on) {
                diags.root_warning(
                    "Deletion protection is enabled",
                    "Destroying the cluster will fail until `deletion_protection` is unset.",
                );
            }
        }
        Some(prior_private_state)
    }

    async fn create<'a>(
        &self,
        diags: &mut Diagnostics,
        planned_state: Self::State<'a>,
        _config_state: Self::State<'a>,
        private_state: Self::PrivateState<'a>,
        _provider_meta_state: Self::ProviderMetaState<'a>,
    ) -> Option<(Self::State<'a>, Self::PrivateState<'a>)> {
        let Value::Value(mut state) = planned_state else {
            diags.root_error("Failed to create cluster", "The planned state is empty.");
            return None;
        };
        state.normalize(diags);
        let cloud = self.cloud.configured(diags)?;

        let folder_id = cloud.folder_for(&state.folder_id, diags)?;
        let name = required_string(&state.name, diags, AttributePath::new("name"), "name")?;
        let config = expand_cluster_config(&state.config, diags, AttributePath::new("config"))?;
        let timeout = state.timeouts.create_timeout(DEFAULT_CREATE_TIMEOUT);

        let request = CreateClusterRequest {
            folder_id,
            name,
            description: state.description.as_str().to_owned(),
            labels: expand_labels(&state.labels),
            config: Some(config),
            service_account_id: state.service_account_id.as_str().to_owned(),
            security_group_ids: expand_string_list(&state.security_group_ids),
            deletion_protection: state
                .deletion_protection
                .as_ref()
                .map_or(false, |on| *on),
        };

        let op = match cloud.clusters().create(request).await {
            Ok(response) => response.into_inner(),
            Err(status) => {
                diags.root_error("Failed to create cluster", status.to_string());
                return None;
            }
        };
        let metadata: CreateClusterMetadata = match unpack_metadata(&op) {
            Ok(metadata) => metadata,
            Err(err) => {
                diags.root_error("Failed to create cluster", err.to_string());
                return None;
            }
        };
        let cluster_id = metadata.cluster_id;

        if let Err(err) = cloud.wait_operation(op, timeout).await {
            diags.root_error(
                "Failed to create cluster",
                format!("Cluster creation did not complete: {err}"),
            );
            // Best-effort rollback of the half-created cluster.
            match delete_cluster(cloud, &cluster_id, DEFAULT_DELETE_TIMEOUT).await {
                Ok(()) => diags.root_warning(
                    "Cluster creation rolled back",
                    format!("Cluster {cluster_id} was deleted after the failed creation."),
                ),
                Err(err) => {
                    warn!(id = %cluster_id, error = %err, "cluster rollback failed");
                    diags.root_warning(
                        "Cluster cleanup failed",
                        format!("Cluster {cluster_id} may still exist: {err}"),
                    );
                }
            }
            return None;
        }

        match read_cluster(cloud, &cluster_id).await {
            Ok(cluster) => {
                info!(id = %cluster.id, "created Spark cluster");
                Some((
                    Value::Value(flatten_cluster(&cluster, &state)),
                    private_state,
                ))
            }
            Err(err) => {
                diags.root_error(
                    "Failed to read the cluster back after creation",
                    err.to_string(),
                );
                None
            }
        }
    }

    async fn update<'a>(
        &self,
        diags: &mut Diagnostics,
        prior_state: Self::State<'a>,
        planned_state: Self::State<'a>,
        _config_state: Self::State<'a>,
        private_state: Self::PrivateState<'a>,
        _provider_meta_state: Self::ProviderMetaState<'a>,
    ) -> Option<(Self::State<'a>, Self::PrivateState<'a>)> {
        let Value::Value(mut state) = planned_state else {
            diags.root_error("Failed to update cluster", "The planned state is empty.");
            return None;
        };
        let Value::Value(prior) = prior_state else {
            diags.root_error("Failed to update cluster", "The prior state is empty.");
            return None;
        };
        state.normalize(diags);
        let cloud = self.cloud.configured(diags)?;

        let mask = cluster_update_mask(&state, &prior);
        if mask.is_empty() {
            return Some((Value::Value(state), private_state));
        }

        let cluster_id = prior.id.as_str().to_owned();
        let config = expand_cluster_config(&state.config, diags, AttributePath::new("config"))?;
        let timeout = state.timeouts.update_timeout(DEFAULT_UPDATE_TIMEOUT);

        let request = UpdateClusterRequest {
            cluster_id: cluster_id.clone(),
            update_mask: Some(mask.into_field_mask()),
            name: state.name.as_str().to_owned(),
            description: state.description.as_str().to_owned(),
            labels: expand_labels(&state.labels),
            config: Some(config),
            service_account_id: state.service_account_id.as_str().to_owned(),
            security_group_ids: expand_string_list(&state.security_group_ids),
            deletion_protection: state
                .deletion_protection
                .as_ref()
                .map_or(false, |on| *on),
        };

        match update_cluster(cloud, request, timeout).await {
            Ok(cluster) => {
                info!(id = %cluster.id, "updated Spark cluster");
                Some((
                    Value::Value(flatten_cluster(&cluster, &state)),
                    private_state,
                ))
            }
            Err(err) => {
                diags.root_error("Failed to update cluster", err.to_string());
                None
            }
        }
    }

    async fn destroy<'a>(
        &self,
        diags: &mut Diagnostics,
        state: Self::State<'a>,
        _planned_private_state: Self::PrivateState<'a>,
        _provider_meta_state: Self::ProviderMetaState<'a>,
    ) -> Option<()> {
        let Value::Value(state) = state else {
            return Some(());
        };
        let cloud = self.cloud.configured(diags)?;

        let id = state.id.as_str();
        if id.is_empty() {
            return Some(());
        }
        if state.deletion_protection.as_ref().map_or(false, |on| *on) {
            diags.root_error(
                "Deletion protection is enabled",
                "Unset `deletion_protection` before destroying the cluster.",
            );
            return None;
        }
        let timeout = state.timeouts.delete_timeout(DEFAULT_DELETE_TIMEOUT);

        match delete_cluster(cloud, id, timeout).await {
            Ok(()) => {
                info!(id, "deleted Spark cluster");
                Some(())
            }
            Err(err) if is_not_found(&err) => {
                diags.root_warning(
                    "Cluster already deleted",
                    "The cluster no longer exists remotely.",
                );
                Some(())
            }
            Err(err) => {
                diags.root_error("Failed to delete cluster", err.to_string());
                None
            }
        }
    }

    async fn import<'a>(
        &self,
        diags: &mut Diagnostics,
        id: String,
    ) -> Option<(Self::State<'a>, Self::PrivateState<'a>)> {
        if id.is_empty() {
            diags.root_error("Invalid import ID", "Import expects the cluster ID.");
            return None;
        }
        let state = ClusterState {
            id: Value::Value(id.into()),
            ..Default::default()
        };
        Some((Value::Value(state), Value::Null))
    }
}

pub(super) async fn read_cluster(cloud: &Cloud, id: &str) -> anyhow::Result<spark::Cluster> {
    let cluster = cloud
        .clusters()
        .get(GetClusterRequest {
            cluster_id: id.to_owned(),
        })
        .await?
        .into_inner();
    Ok(cluster)
}

async fn update_cluster(
    cloud: &Cloud,
    request: UpdateClusterRequest,
    timeout: Duration,
) -> anyhow::Result<spark::Cluster> {
    let id = request.cluster_id.clone();
    let op = cloud
        .clusters()
        .update(request)
        .await
        .context("update call failed")?
        .into_inner();
    cloud
        .wait_operation(op, timeout)
        .await
        .context("cluster update did not complete")?;
    read_cluster(cloud, &id)
        .await
        .context("failed to read the cluster back")
}

async fn delete_cluster(cloud: &Cloud, id: &str, timeout: Duration) -> anyhow::Result<()> {
    let op = cloud
        .clusters()
        .delete(DeleteClusterRequest {
            cluster_id: id.to_owned(),
        })
        .await
        .context("delete call failed")?
        .into_inner();
    cloud
        .wait_operation(op, timeout)
        .await
        .context("cluster deletion did not complete")?;
    Ok(())
}
