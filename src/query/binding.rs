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

use std::marker::PhantomData;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use async_trait::async_trait;
use tracing::info;

use tf_provider::value::{Value, ValueEmpty};
use tf_provider::schema::Schema;
use tf_provider::{AttributePath, Diagnostics, Resource};

use crate::api::{is_not_found, unpack_metadata, Cloud, CloudHandle};
use crate::proto::cirrus::cloud::query::v1 as query;
use crate::proto::cirrus::cloud::query::v1::{
    CreateBindingMetadata, CreateBindingRequest, DeleteBindingRequest, GetBindingRequest,
    UpdateBindingRequest,
};
use crate::updatemask::UpdateMask;
use crate::utils::{
    required_string, string_value, timestamp_value, WithSchema, WithTimeouts, WithValidate,
};

use super::state::BindingState;
use super::strategy::BindingStrategy;

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(300);

/// CRUD implementation shared by every binding flavor.
#[derive(Debug)]
pub struct QueryBindingResource<T: BindingStrategy> {
    cloud: Arc<CloudHandle>,
    strategy: PhantomData<T>,
}

impl<T: BindingStrategy> QueryBindingResource<T> {
    pub fn new(cloud: Arc<CloudHandle>) -> Self {
        Self {
            cloud,
            strategy: PhantomData,
        }
    }
}

#[async_trait]
impl<T: BindingStrategy> Resource for QueryBindingResource<T> {
    type State<'a> = Value<BindingState<'a, T>>;
    type PrivateState<'a> = ValueEmpty;
    type ProviderMetaState<'a> = ValueEmpty;

    fn schema(&self, _diags: &mut Diagnostics) -> Option<Schema> {
        Some(BindingState::<T>::schema())
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
                "Cannot read binding",
                "The binding ID is missing from the state.",
            );
            return None;
        }

        match read_binding(cloud, id).await {
            Ok(binding) => {
                let new_state = flatten_binding::<T>(diags, &binding, &state)?;
                Some((Value::Value(new_state), private_state))
            }
            Err(err) if is_not_found(&err) => {
                diags.root_warning(
                    "Binding has vanished",
                    "The binding no longer exists remotely and will be removed from the state.",
                );
                Some((Value::Null, private_state))
            }
            Err(err) => {
                diags.root_error("Failed to read binding", err.to_string());
                None
            }
        }
    }

    async fn plan_create<'a>(
        &self,
        _diags: &mut Diagnostics,
        proposed_state: Self::State<'a>,
        _config_state: Self::State<'a>,
        _provider_meta_state: Self::ProviderMetaState<'a>,
    ) -> Option<(Self::State<'a>, Self::PrivateState<'a>)> {
        let Value::Value(mut state) = proposed_state else {
            return Some((Value::Null, Default::default()));
        };
        state.id = Value::Unknown;
        state.created_at = Value::Unknown;
        Some((Value::Value(state), Default::default()))
    }

    async fn plan_update<'a>(
        &self,
        _diags: &mut Diagnostics,
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
        let mut trigger_replace = Vec::new();
        if let Value::Value(prior) = &prior_state {
            state.id = prior.id.clone();
            state.created_at = prior.created_at.clone();
            if !state.connection_id.is_null()
                && !prior.connection_id.is_null()
                && state.connection_id != prior.connection_id
            {
                // A binding belongs to one connection for life.
                trigger_replace.push(AttributePath::new("connection_id"));
            }
        }
        Some((Value::Value(state), prior_private_state, trigger_replace))
    }

    async fn plan_destroy<'a>(
        &self,
        _diags: &mut Diagnostics,
        _prior_state: Self::State<'a>,
        prior_private_state: Self::PrivateState<'a>,
        _provider_meta_state: Self::ProviderMetaState<'a>,
    ) -> Option<Self::PrivateState<'a>> {
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
        let Value::Value(state) = planned_state else {
            diags.root_error("Failed to create binding", "The planned state is empty.");
            return None;
        };
        let cloud = self.cloud.configured(diags)?;

        let connection_id = required_string(
            &state.connection_id,
            diags,
            AttributePath::new("connection_id"),
            "connection_id",
        )?;
        let name = required_string(&state.name, diags, AttributePath::new("name"), "name")?;
        let Some(settings) = state.settings.as_ref() else {
            diags.error_short("`settings` block is required", AttributePath::new("settings"));
            return None;
        };
        let setting = T::expand_setting(settings, diags, AttributePath::new("settings"))?;
        let timeout = state.timeouts.create_timeout(DEFAULT_TIMEOUT);

        let request = CreateBindingRequest {
            connection_id,
            name,
            description: state.description.as_str().to_owned(),
            setting: Some(query::BindingSetting {
                binding: Some(setting),
            }),
        };

        match create_binding(cloud, request, timeout).await {
            Ok(binding) => {
                info!(id = %binding.id, kind = T::NAME, "created query binding");
                let new_state = flatten_binding::<T>(diags, &binding, &state)?;
                Some((Value::Value(new_state), private_state))
            }
            Err(err) => {
                diags.root_error("Failed to create binding", err.to_string());
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
        let Value::Value(state) = planned_state else {
            diags.root_error("Failed to update binding", "The planned state is empty.");
            return None;
        };
        let Value::Value(prior) = prior_state else {
            diags.root_error("Failed to update binding", "The prior state is empty.");
            return None;
        };
        let cloud = self.cloud.configured(diags)?;

        let mut mask = UpdateMask::new();
        mask.field("name", &state.name, &prior.name);
        mask.field("description", &state.description, &prior.description);
        mask.field("setting", &state.settings, &prior.settings);

        if mask.is_empty() {
            return Some((Value::Value(state), private_state));
        }

        let Some(settings) = state.settings.as_ref() else {
            diags.error_short("`settings` block is required", AttributePath::new("settings"));
            return None;
        };
        let setting = T::expand_setting(settings, diags, AttributePath::new("settings"))?;
        let timeout = state.timeouts.update_timeout(DEFAULT_TIMEOUT);

        let request = UpdateBindingRequest {
            binding_id: prior.id.as_str().to_owned(),
            update_mask: Some(mask.into_field_mask()),
            name: state.name.as_str().to_owned(),
            description: state.description.as_str().to_owned(),
            setting: Some(query::BindingSetting {
                binding: Some(setting),
            }),
        };

        match update_binding(cloud, request, timeout).await {
            Ok(binding) => {
                info!(id = %binding.id, kind = T::NAME, "updated query binding");
                let new_state = flatten_binding::<T>(diags, &binding, &state)?;
                Some((Value::Value(new_state), private_state))
            }
            Err(err) => {
                diags.root_error("Failed to update binding", err.to_string());
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
        let timeout = state.timeouts.delete_timeout(DEFAULT_TIMEOUT);

        match delete_binding(cloud, id, timeout).await {
            Ok(()) => {
                info!(id, kind = T::NAME, "deleted query binding");
                Some(())
            }
            Err(err) if is_not_found(&err) => {
                diags.root_warning(
                    "Binding already deleted",
                    "The binding no longer exists remotely.",
                );
                Some(())
            }
            Err(err) => {
                diags.root_error("Failed to delete binding", err.to_string());
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
            diags.root_error("Invalid import ID", "Import expects the binding ID.");
            return None;
        }
        let state = BindingState::<T> {
            id: Value::Value(id.into()),
            ..Default::default()
        };
        Some((Value::Value(state), Value::Null))
    }
}

async fn read_binding(cloud: &Cloud, id: &str) -> anyhow::Result<query::Binding> {
    let binding = cloud
        .query_bindings()
        .get(GetBindingRequest {
            binding_id: id.to_owned(),
        })
        .await?
        .into_inner();
    Ok(binding)
}

async fn create_binding(
    cloud: &Cloud,
    request: CreateBindingRequest,
    timeout: Duration,
) -> anyhow::Result<query::Binding> {
    let op = cloud
        .query_bindings()
        .create(request)
        .await
        .context("create call failed")?
        .into_inner();
    let op = cloud
        .wait_operation(op, timeout)
        .await
        .context("binding creation did not complete")?;
    let metadata: CreateBindingMetadata = unpack_metadata(&op)?;
    read_binding(cloud, &metadata.binding_id)
        .await
        .context("failed to read the binding back")
}

async fn update_binding(
    cloud: &Cloud,
    request: UpdateBindingRequest,
    timeout: Duration,
) -> anyhow::Result<query::Binding> {
    let id = request.binding_id.clone();
    let op = cloud
        .query_bindings()
        .update(request)
        .await
        .context("update call failed")?
        .into_inner();
    cloud
        .wait_operation(op, timeout)
        .await
        .context("binding update did not complete")?;
    read_binding(cloud, &id)
        .await
        .context("failed to read the binding back")
}

async fn delete_binding(cloud: &Cloud, id: &str, timeout: Duration) -> anyhow::Result<()> {
    let op = cloud
        .query_bindings()
        .delete(DeleteBindingRequest {
            binding_id: id.to_owned(),
        })
        .await
        .context("delete call failed")?
        .into_inner();
    cloud
        .wait_operation(op, timeout)
        .await
        .context("binding deletion did not complete")?;
    Ok(())
}

fn flatten_binding<'a, T: BindingStrategy>(
    diags: &mut Diagnostics,
    binding: &query::Binding,
    prior: &BindingState<'a, T>,
) -> Option<BindingState<'a, T>> {
    let Some(setting) = binding
        .setting
        .as_ref()
        .and_then(|setting| setting.binding.as_ref())
    else {
        diags.root_error(
            "Invalid binding payload",
            format!("Binding {} carries no settings.", binding.id),
        );
        return None;
    };
    let settings = T::pack_to_state(setting, diags)?;
    Some(BindingState {
        id: Value::Value(binding.id.clone().into()),
        connection_id: Value::Value(binding.connection_id.clone().into()),
        name: Value::Value(binding.name.clone().into()),
        description: string_value(binding.description.clone(), &prior.description),
        created_at: timestamp_value(&binding.created_at),
        settings: Value::Value(settings),
        timeouts: prior.timeouts.clone(),
    })
}
