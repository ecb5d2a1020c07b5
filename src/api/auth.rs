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

use anyhow::{anyhow, Context, Result};
use tonic::metadata::{Ascii, MetadataValue};
use tonic::service::Interceptor;
use tonic::transport::Channel;
use tracing::debug;

use crate::proto::cirrus::cloud::iam::v1::create_iam_token_request::Identity;
use crate::proto::cirrus::cloud::iam::v1::iam_token_service_client::IamTokenServiceClient;
use crate::proto::cirrus::cloud::iam::v1::CreateIamTokenRequest;

/// Attaches the IAM token to every outgoing call.
#[derive(Debug, Clone)]
pub struct TokenInterceptor {
    header: MetadataValue<Ascii>,
}

impl TokenInterceptor {
    pub fn new(iam_token: &str) -> Result<Self> {
        let header = format!("Bearer {iam_token}")
            .parse()
            .context("IAM token is not a valid header value")?;
        Ok(Self { header })
    }
}

impl Interceptor for TokenInterceptor {
    fn call(
        &mut self,
        mut request: tonic::Request<()>,
    ) -> Result<tonic::Request<()>, tonic::Status> {
        request
            .metadata_mut()
            .insert("authorization", self.header.clone());
        Ok(request)
    }
}

/// Exchange the user-supplied OAuth token for a short-lived IAM token.
///
/// The token is exchanged once when the provider is configured; provider
/// processes live for a single Terraform run, well below the token TTL.
pub async fn exchange_oauth_token(channel: Channel, oauth_token: &str) -> Result<String> {
    let mut client = IamTokenServiceClient::new(channel);
    let response = client
        .create(CreateIamTokenRequest {
            identity: Some(Identity::OauthToken(oauth_token.to_owned())),
        })
        .await
        .context("failed to exchange the OAuth token for an IAM token")?
        .into_inner();

    if response.iam_token.is_empty() {
        return Err(anyhow!("token service returned an empty IAM token"));
    }
    debug!("obtained IAM token");
    Ok(response.iam_token)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interceptor_attaches_bearer_header() {
        let mut interceptor = TokenInterceptor::new("t1.secret").unwrap();
        let request = interceptor.call(tonic::Request::new(())).unwrap();
        let auth = request.metadata().get("authorization").unwrap();
        assert_eq!(auth.to_str().unwrap(), "Bearer t1.secret");
    }

    #[test]
    fn rejects_non_ascii_tokens() {
        assert!(TokenInterceptor::new("jeton\u{00e9}").is_err());
    }
}
