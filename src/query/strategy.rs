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

use std::fmt::Debug;

use serde::{Deserialize, Serialize};
use tf_provider::schema::Block;
use tf_provider::{AttributePath, Diagnostics};

use crate::proto::cirrus::cloud::query::v1::{binding_setting, connection_setting};

/// One vendor-specific connection flavor.
///
/// Every connection resource shares a single CRUD implementation; a strategy
/// only supplies the settings model, its schema block, and the translation
/// to and from the protobuf `setting` payload.
pub trait ConnectionStrategy: Debug + Default + Clone + Send + Sync + 'static {
    const NAME: &'static str;

    type Settings<'a>: Send
        + Sync
        + Clone
        + Debug
        + Default
        + PartialEq
        + Serialize
        + for<'de> Deserialize<'de>;

    /// Schema of the `settings` block.
    fn settings_block() -> Block;

    /// Translate the settings model into the protobuf payload.
    fn expand_setting(
        settings: &Self::Settings<'_>,
        diags: &mut Diagnostics,
        attr_path: AttributePath,
    ) -> Option<connection_setting::Connection>;

    /// Translate the protobuf payload back into the settings model.
    fn pack_to_state<'a>(
        setting: &connection_setting::Connection,
        diags: &mut Diagnostics,
    ) -> Option<Self::Settings<'a>>;

    /// Whether a remote connection is of this flavor.
    fn matches(setting: &connection_setting::Connection) -> bool;

    /// Statically validate the settings; values not known until apply are
    /// skipped.
    fn validate_settings(
        settings: &Self::Settings<'_>,
        diags: &mut Diagnostics,
        attr_path: AttributePath,
    ) {
        _ = (settings, diags, attr_path);
    }
}

/// One vendor-specific binding flavor, mirroring [`ConnectionStrategy`].
pub trait BindingStrategy: Debug + Default + Clone + Send + Sync + 'static {
    const NAME: &'static str;

    type Settings<'a>: Send
        + Sync
        + Clone
        + Debug
        + Default
        + PartialEq
        + Serialize
        + for<'de> Deserialize<'de>;

    /// Schema of the `settings` block.
    fn settings_block() -> Block;

    /// Translate the settings model into the protobuf payload.
    fn expand_setting(
        settings: &Self::Settings<'_>,
        diags: &mut Diagnostics,
        attr_path: AttributePath,
    ) -> Option<binding_setting::Binding>;

    /// Translate the protobuf payload back into the settings model.
    fn pack_to_state<'a>(
        setting: &binding_setting::Binding,
        diags: &mut Diagnostics,
    ) -> Option<Self::Settings<'a>>;

    /// Statically validate the settings; values not known until apply are
    /// skipped.
    fn validate_settings(
        settings: &Self::Settings<'_>,
        diags: &mut Diagnostics,
        attr_path: AttributePath,
    ) {
        _ = (settings, diags, attr_path);
    }
}
