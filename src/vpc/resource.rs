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

use std::borrow::Cow;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use async_trait::async_trait;
use tracing::info;

use tf_provider::value::{Value, ValueEmpty, ValueList, ValueString};
use tf_provider::{AttributePath, Diagnostics, Resource, Schema};

use crate::api::{is_not_found, unpack_metadata, Cloud, CloudHandle};
use crate::globallock;
use crate::id;
use crate::proto::cirrus::cloud::vpc::v1 as vpc;
use crate::proto::cirrus::cloud::vpc::v1::security_group_rule::Direction;
use crate::proto::cirrus::cloud::vpc::v1::{
    GetSecurityGroupRequest, UpdateSecurityGroupRulesMetadata, UpdateSecurityGroupRulesRequest,
};
use crate::updatemask::{preserve_empty, UpdateMask};
use crate::utils::{
    expand_string_list, required_string, string_value, WithSchema, WithTimeouts, WithValidate,
};

use super::state::SecurityGroupRuleState;

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(180);

#[derive(Debug)]
pub struct SecurityGroupRuleResource {
    cloud: Arc<CloudHandle>,
}

impl SecurityGroupRuleResource {
    pub fn new(cloud: Arc<CloudHandle>) -> Self {
        Self { cloud }
    }
}

#[async_trait]
impl Resource for SecurityGroupRuleResource {
    type State<'a> = Value<SecurityGroupRuleState<'a>>;
    type PrivateState<'a> = ValueEmpty;
    type ProviderMetaState<'a> = ValueEmpty;

    fn schema(&self, _diags: &mut Diagnostics) -> Option<Schema> {
        Some(SecurityGroupRuleState::schema())
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

        let rule_id = state.id.as_str();
        let sg_id = state.security_group_id.as_str();
        if rule_id.is_empty() || sg_id.is_empty() {
            diags.root_error(
                "Cannot read security group rule",
                "The rule or security group ID is missing from the state.",
            );
            return None;
        }

        let group = match read_security_group(cloud, sg_id).await {
            Ok(group) => group,
            Err(err) if is_not_found(&err) => {
                diags.root_warning(
                    "Security group has vanished",
                    "The parent security group no longer exists; the rule will be removed from the state.",
                );
                return Some((Value::Null, private_state));
            }
            Err(err) => {
                diags.root_error("Failed to read security group", err.to_string());
                return None;
            }
        };

        let Some(rule) = group.rules.iter().find(|rule| rule.id == rule_id) else {
            diags.root_warning(
                "Security group rule has vanished",
                "The rule no longer exists remotely and will be removed from the state.",
            );
            return Some((Value::Null, private_state));
        };

        Some((
            Value::Value(flatten_rule(sg_id, rule, &state)),
            private_state,
        ))
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
            // Rules are immutable remotely: any semantic change replaces the
            // whole rule.
            for path in changed_fields(&state, prior).paths() {
                trigger_replace.push(AttributePath::new(path.as_str()));
            }
            state.id = if trigger_replace.is_empty() {
                prior.id.clone()
            } else {
                Value::Unknown
            };
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
            diags.root_error(
                "Failed to create security group rule",
                "The planned state is empty.",
            );
            return None;
        };
        let cloud = self.cloud.configured(diags)?;

        let sg_id = required_string(
            &state.security_group_id,
            diags,
            AttributePath::new("security_group_id"),
            "security_group_id",
        )?;
        let spec = expand_rule_spec(&state, diags)?;
        let timeout = state.timeouts.create_timeout(DEFAULT_TIMEOUT);

        // Concurrent rule changes against one group lose updates without
        // this lock: the API call is a read-modify-write on the rule list.
        let _guard = globallock::lock(&sg_id).await;

        let result = add_rule(cloud, &sg_id, spec, timeout).await;
        let rule_id = match result {
            Ok(rule_id) => rule_id,
            Err(err) => {
                diags.root_error("Failed to create security group rule", err.to_string());
                return None;
            }
        };

        let group = match read_security_group(cloud, &sg_id).await {
            Ok(group) => group,
            Err(err) => {
                diags.root_error(
                    "Failed to read the security group back after rule creation",
                    err.to_string(),
                );
                return None;
            }
        };
        let Some(rule) = group.rules.iter().find(|rule| rule.id == rule_id) else {
            diags.root_error(
                "Failed to create security group rule",
                format!("Rule {rule_id} is missing from the updated security group."),
            );
            return None;
        };

        info!(id = %rule_id, security_group = %sg_id, "created security group rule");
        Some((
            Value::Value(flatten_rule(&sg_id, rule, &state)),
            private_state,
        ))
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
        // Semantic changes replace the rule, so only timeout edits reach
        // this point.
        let Value::Value(state) = planned_state else {
            diags.root_error(
                "Failed to update security group rule",
                "The planned state is empty.",
            );
            return None;
        };
        if let Value::Value(prior) = &prior_state {
            if !changed_fields(&state, prior).is_empty() {
                diags.root_error(
                    "Cannot update security group rule in place",
                    "Rule attribute changes must be applied by replacement.",
                );
                return None;
            }
        }
        Some((Value::Value(state), private_state))
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

        let rule_id = state.id.as_str();
        let sg_id = state.security_group_id.as_str();
        if rule_id.is_empty() || sg_id.is_empty() {
            return Some(());
        }
        let timeout = state.timeouts.delete_timeout(DEFAULT_TIMEOUT);

        let _guard = globallock::lock(sg_id).await;

        match remove_rule(cloud, sg_id, rule_id, timeout).await {
            Ok(()) => {
                info!(id = %rule_id, security_group = %sg_id, "deleted security group rule");
                Some(())
            }
            Err(err) if is_not_found(&err) => {
                diags.root_warning(
                    "Security group rule already deleted",
                    "The rule or its security group no longer exists remotely.",
                );
                Some(())
            }
            Err(err) => {
                diags.root_error("Failed to delete security group rule", err.to_string());
                None
            }
        }
    }

    async fn import<'a>(
        &self,
        diags: &mut Diagnostics,
        import_id: String,
    ) -> Option<(Self::State<'a>, Self::PrivateState<'a>)> {
        let (sg_id, rule_id) = match id::deconstruct(&import_id, 2) {
            Ok(parts) => (parts[0].to_owned(), parts[1].to_owned()),
            Err(err) => {
                diags.root_error(
                    "Invalid import ID",
                    format!("Import expects `<security_group_id>,<rule_id>`: {err}"),
                );
                return None;
            }
        };
        let state = SecurityGroupRuleState {
            id: Value::Value(rule_id.into()),
            security_group_id: Value::Value(sg_id.into()),
            ..Default::default()
        };
        Some((Value::Value(state), Value::Null))
    }
}

async fn read_security_group(cloud: &Cloud, sg_id: &str) -> anyhow::Result<vpc::SecurityGroup> {
    let group = cloud
        .security_groups()
        .get(GetSecurityGroupRequest {
            security_group_id: sg_id.to_owned(),
        })
        .await?
        .into_inner();
    Ok(group)
}

async fn add_rule(
    cloud: &Cloud,
    sg_id: &str,
    spec: vpc::SecurityGroupRuleSpec,
    timeout: Duration,
) -> anyhow::Result<String> {
    let op = cloud
        .security_groups()
        .update_rules(UpdateSecurityGroupRulesRequest {
            security_group_id: sg_id.to_owned(),
            deletion_rule_ids: vec![],
            addition_rule_specs: vec![spec],
        })
        .await
        .context("update rules call failed")?
        .into_inner();
    let op = cloud
        .wait_operation(op, timeout)
        .await
        .context("rule addition did not complete")?;
    let metadata: UpdateSecurityGroupRulesMetadata = unpack_metadata(&op)?;
    metadata
        .added_rule_ids
        .into_iter()
        .next()
        .context("the operation reported no added rule")
}

async fn remove_rule(
    cloud: &Cloud,
    sg_id: &str,
    rule_id: &str,
    timeout: Duration,
) -> anyhow::Result<()> {
    let op = cloud
        .security_groups()
        .update_rules(UpdateSecurityGroupRulesRequest {
            security_group_id: sg_id.to_owned(),
            deletion_rule_ids: vec![rule_id.to_owned()],
            addition_rule_specs: vec![],
        })
        .await
        .context("update rules call failed")?
        .into_inner();
    cloud
        .wait_operation(op, timeout)
        .await
        .context("rule deletion did not complete")?;
    Ok(())
}

/// Semantic attributes whose change replaces the rule; timeouts and the
/// computed ID are excluded.
fn changed_fields(plan: &SecurityGroupRuleState, state: &SecurityGroupRuleState) -> UpdateMask {
    let mut mask = UpdateMask::new();
    mask.field(
        "security_group_id",
        &plan.security_group_id,
        &state.security_group_id,
    );
    mask.field("direction", &plan.direction, &state.direction);
    mask.field("description", &plan.description, &state.description);
    mask.field("protocol", &plan.protocol, &state.protocol);
    mask.field("from_port", &plan.from_port, &state.from_port);
    mask.field("to_port", &plan.to_port, &state.to_port);
    mask.collection("v4_cidr_blocks", &plan.v4_cidr_blocks, &state.v4_cidr_blocks);
    mask.collection("v6_cidr_blocks", &plan.v6_cidr_blocks, &state.v6_cidr_blocks);
    mask
}

fn expand_rule_spec(
    state: &SecurityGroupRuleState,
    diags: &mut Diagnostics,
) -> Option<vpc::SecurityGroupRuleSpec> {
    let direction = match state.direction.as_str() {
        "ingress" => Direction::Ingress,
        "egress" => Direction::Egress,
        other => {
            diags.error(
                "Invalid direction",
                format!("{other:?} is neither `ingress` nor `egress`"),
                AttributePath::new("direction"),
            );
            return None;
        }
    };

    let ports = match (&state.from_port, &state.to_port) {
        (Value::Value(from), Value::Value(to)) => Some(vpc::PortRange {
            from_port: *from,
            to_port: *to,
        }),
        (Value::Value(from), _) => Some(vpc::PortRange {
            from_port: *from,
            to_port: *from,
        }),
        (_, Value::Value(_)) => {
            diags.error_short(
                "`to_port` requires `from_port`",
                AttributePath::new("to_port"),
            );
            return None;
        }
        _ => None,
    };

    let v4_cidr_blocks = expand_string_list(&state.v4_cidr_blocks);
    let v6_cidr_blocks = expand_string_list(&state.v6_cidr_blocks);
    let cidr_blocks = if v4_cidr_blocks.is_empty() && v6_cidr_blocks.is_empty() {
        None
    } else {
        Some(vpc::CidrBlocks {
            v4_cidr_blocks,
            v6_cidr_blocks,
        })
    };

    Some(vpc::SecurityGroupRuleSpec {
        description: state.description.as_str().to_owned(),
        direction: direction as i32,
        ports,
        protocol_name: state.protocol.as_str().to_owned(),
        cidr_blocks,
    })
}

fn flatten_rule<'a>(
    sg_id: &str,
    rule: &vpc::SecurityGroupRule,
    prior: &SecurityGroupRuleState<'a>,
) -> SecurityGroupRuleState<'a> {
    let direction = match Direction::try_from(rule.direction) {
        Ok(Direction::Ingress) => Value::Value(Cow::Borrowed("ingress")),
        Ok(Direction::Egress) => Value::Value(Cow::Borrowed("egress")),
        _ => Value::Null,
    };
    let (from_port, to_port) = match &rule.ports {
        Some(ports) => (Value::Value(ports.from_port), Value::Value(ports.to_port)),
        None => (Value::Null, Value::Null),
    };
    let (v4, v6) = match &rule.cidr_blocks {
        Some(blocks) => (
            flatten_string_list(&blocks.v4_cidr_blocks),
            flatten_string_list(&blocks.v6_cidr_blocks),
        ),
        None => (Value::Null, Value::Null),
    };

    SecurityGroupRuleState {
        id: Value::Value(rule.id.clone().into()),
        security_group_id: Value::Value(sg_id.to_owned().into()),
        direction,
        description: string_value(rule.description.clone(), &prior.description),
        protocol: string_value(rule.protocol_name.clone(), &prior.protocol),
        from_port,
        to_port,
        v4_cidr_blocks: preserve_empty(v4, &prior.v4_cidr_blocks),
        v6_cidr_blocks: preserve_empty(v6, &prior.v6_cidr_blocks),
        timeouts: prior.timeouts.clone(),
    }
}

fn flatten_string_list<'a>(list: &[String]) -> ValueList<ValueString<'a>> {
    if list.is_empty() {
        Value::Null
    } else {
        Value::Value(
            list.iter()
                .map(|item| Value::Value(Cow::Owned(item.clone())))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rule_state() -> SecurityGroupRuleState<'static> {
        SecurityGroupRuleState {
            id: Value::Value("rule-1".into()),
            security_group_id: Value::Value("sg-1".into()),
            direction: Value::Value("ingress".into()),
            description: Value::Null,
            protocol: Value::Value("tcp".into()),
            from_port: Value::Value(443),
            to_port: Value::Value(443),
            v4_cidr_blocks: Value::Value(vec![Value::Value("10.0.0.0/8".into())]),
            v6_cidr_blocks: Value::Null,
            timeouts: Value::Null,
        }
    }

    #[test]
    fn spec_round_trips_through_flatten() {
        let mut diags = Diagnostics::default();
        let state = rule_state();
        let spec = expand_rule_spec(&state, &mut diags).unwrap();
        assert!(diags.errors.is_empty());

        let rule = vpc::SecurityGroupRule {
            id: "rule-1".into(),
            description: spec.description.clone(),
            direction: spec.direction,
            ports: spec.ports,
            protocol_name: spec.protocol_name.clone(),
            cidr_blocks: spec.cidr_blocks.clone(),
        };
        let flattened = flatten_rule("sg-1", &rule, &state);
        assert_eq!(flattened, state);
        assert!(changed_fields(&flattened, &state).is_empty());
    }

    #[test]
    fn from_port_alone_covers_a_single_port() {
        let mut diags = Diagnostics::default();
        let mut state = rule_state();
        state.to_port = Value::Null;
        let spec = expand_rule_spec(&state, &mut diags).unwrap();
        assert_eq!(
            spec.ports,
            Some(vpc::PortRange {
                from_port: 443,
                to_port: 443
            })
        );
    }

    #[test]
    fn to_port_alone_is_rejected() {
        let mut diags = Diagnostics::default();
        let mut state = rule_state();
        state.from_port = Value::Null;
        assert!(expand_rule_spec(&state, &mut diags).is_none());
        assert!(!diags.errors.is_empty());
    }

    #[test]
    fn invalid_direction_is_rejected() {
        let mut diags = Diagnostics::default();
        let mut state = rule_state();
        state.direction = Value::Value("sideways".into());
        assert!(expand_rule_spec(&state, &mut diags).is_none());
        assert!(!diags.errors.is_empty());
    }

    #[test]
    fn semantic_changes_are_detected() {
        let state = rule_state();
        assert!(changed_fields(&state, &state).is_empty());

        let mut plan = rule_state();
        plan.from_port = Value::Value(80);
        plan.to_port = Value::Value(80);
        let mask = changed_fields(&plan, &state);
        assert_eq!(mask.paths(), ["from_port", "to_port"]);

        let mut plan = rule_state();
        plan.timeouts = Value::Value(Default::default());
        assert!(changed_fields(&plan, &state).is_empty());
    }

    #[test]
    fn import_id_round_trips() {
        let import_id = id::construct(&["sg-1", "rule-7"]).unwrap();
        let parts = id::deconstruct(&import_id, 2).unwrap();
        assert_eq!(parts, ["sg-1", "rule-7"]);
    }
}
