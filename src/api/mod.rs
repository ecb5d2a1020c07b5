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

use std::sync::OnceLock;

use anyhow::{Context, Result};
use tf_provider::value::ValueString;
use tf_provider::{AttributePath, Diagnostics};
use tonic::service::interceptor::InterceptedService;
use tonic::transport::{Channel, ClientTlsConfig};
use tracing::info;

use crate::proto::cirrus::cloud::operation::operation_service_client::OperationServiceClient;
use crate::proto::cirrus::cloud::query::v1::binding_service_client::BindingServiceClient;
use crate::proto::cirrus::cloud::query::v1::connection_service_client::ConnectionServiceClient;
use crate::proto::cirrus::cloud::spark::v1::cluster_service_client::ClusterServiceClient;
use crate::proto::cirrus::cloud::vpc::v1::security_group_service_client::SecurityGroupServiceClient;

mod auth;
pub mod error;
mod operation;

pub use auth::TokenInterceptor;
pub use error::{is_not_found, is_status_with_code, ApiError};
pub use operation::unpack_metadata;

pub const DEFAULT_ENDPOINT: &str = "https://api.cirrus-cloud.net:443";

type AuthedChannel = InterceptedService<Channel, TokenInterceptor>;

/// Provider-level credentials, as written in the provider block.
pub enum Auth<'a> {
    /// OAuth token, exchanged for an IAM token on configure.
    OauthToken(&'a str),
    /// IAM token used as-is.
    IamToken(&'a str),
}

/// Configured handle on the Cirrus control plane, shared by every resource.
#[derive(Debug, Clone)]
pub struct Cloud {
    channel: Channel,
    interceptor: TokenInterceptor,
    folder_id: Option<String>,
}

impl Cloud {
    pub async fn connect(
        endpoint: &str,
        auth: Auth<'_>,
        folder_id: Option<String>,
        insecure: bool,
    ) -> Result<Self> {
        let mut builder = Channel::from_shared(endpoint.to_owned())
            .with_context(|| format!("invalid endpoint: {endpoint}"))?;
        if !insecure {
            builder = builder
                .tls_config(ClientTlsConfig::new().with_native_roots())
                .map_err(ApiError::Transport)
                .context("failed to configure TLS")?;
        }
        let channel = builder.connect_lazy();

        let iam_token = match auth {
            Auth::IamToken(token) => token.to_owned(),
            Auth::OauthToken(token) => auth::exchange_oauth_token(channel.clone(), token).await?,
        };

        info!(endpoint, "configured Cirrus control-plane client");
        Ok(Self {
            channel,
            interceptor: TokenInterceptor::new(&iam_token)?,
            folder_id,
        })
    }

    /// Folder to use when a resource does not specify one.
    pub fn default_folder(&self) -> Option<&str> {
        self.folder_id.as_deref()
    }

    /// Folder for a resource: its own `folder_id` attribute, or the
    /// provider-level default.
    pub fn folder_for(&self, folder_id: &ValueString, diags: &mut Diagnostics) -> Option<String> {
        match folder_id.as_deref_option() {
            Some(folder) if !folder.is_empty() => Some(folder.to_owned()),
            _ => match self.default_folder() {
                Some(folder) => Some(folder.to_owned()),
                None => {
                    diags.error_short(
                        "`folder_id` is required when the provider has no default folder",
                        AttributePath::new("folder_id"),
                    );
                    None
                }
            },
        }
    }

    pub fn clusters(&self) -> ClusterServiceClient<AuthedChannel> {
        ClusterServiceClient::with_interceptor(self.channel.clone(), self.interceptor.clone())
    }

    pub fn security_groups(&self) -> SecurityGroupServiceClient<AuthedChannel> {
        SecurityGroupServiceClient::with_interceptor(self.channel.clone(), self.interceptor.clone())
    }

    pub fn query_connections(&self) -> ConnectionServiceClient<AuthedChannel> {
        ConnectionServiceClient::with_interceptor(self.channel.clone(), self.interceptor.clone())
    }

    pub fn query_bindings(&self) -> BindingServiceClient<AuthedChannel> {
        BindingServiceClient::with_interceptor(self.channel.clone(), self.interceptor.clone())
    }

    pub fn operations(&self) -> OperationServiceClient<AuthedChannel> {
        OperationServiceClient::with_interceptor(self.channel.clone(), self.interceptor.clone())
    }
}

/// Late-bound [`Cloud`]: resources are registered before the provider is
/// configured, so they hold this handle instead of the client itself.
#[derive(Debug, Default)]
pub struct CloudHandle {
    cloud: OnceLock<Cloud>,
}

impl CloudHandle {
    pub fn set(&self, cloud: Cloud) {
        _ = self.cloud.set(cloud);
    }

    /// Get the configured client, or record a diagnostic if `configure` has
    /// not run.
    pub fn configured(&self, diags: &mut Diagnostics) -> Option<&Cloud> {
        let cloud = self.cloud.get();
        if cloud.is_none() {
            diags.root_error(
                "Provider is not configured",
                "The Cirrus provider must be configured before resources can be applied.",
            );
        }
        cloud
    }
}
