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

//! Field-mask construction for partial updates: plan and prior state are
//! compared field by field and the paths that differ are sent to the update
//! RPC. A null collection and an empty one are the same remote object, so
//! they compare equal.

use std::collections::{BTreeMap, BTreeSet};

use prost_types::FieldMask;
use tf_provider::value::Value;

#[derive(Debug, Default)]
pub struct UpdateMask {
    paths: Vec<String>,
}

impl UpdateMask {
    pub fn new() -> Self {
        Default::default()
    }

    /// Record `path` when plan and state differ.
    pub fn field<T: PartialEq>(&mut self, path: &str, plan: &Value<T>, state: &Value<T>) {
        if !scalar_equal(plan, state) {
            self.push(path);
        }
    }

    /// Record `path` when plan and state differ, with null treated as an
    /// empty collection.
    pub fn collection<T>(&mut self, path: &str, plan: &Value<T>, state: &Value<T>)
    where
        T: PartialEq + EmptyCollection,
    {
        if !collection_equal(plan, state) {
            self.push(path);
        }
    }

    /// Merge a sub-object mask under `parent`.
    ///
    /// When every compared sub-field changed the parent path is emitted
    /// once; otherwise each changed sub-field path is emitted on its own.
    pub fn nested(&mut self, parent: &str, sub: NestedMask) {
        if sub.compared > 0 && sub.changed.len() == sub.compared {
            self.push(parent);
        } else {
            for path in &sub.changed {
                self.push(&format!("{parent}.{path}"));
            }
        }
    }

    fn push(&mut self, path: &str) {
        if !self.paths.iter().any(|existing| existing == path) {
            self.paths.push(path.to_owned());
        }
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    pub fn paths(&self) -> &[String] {
        &self.paths
    }

    pub fn into_field_mask(self) -> FieldMask {
        FieldMask { paths: self.paths }
    }
}

/// Mask for one nested sub-object; tracks how many fields were compared so
/// [`UpdateMask::nested`] can decide between the parent path and per-field
/// paths.
#[derive(Debug, Default)]
pub struct NestedMask {
    changed: Vec<String>,
    compared: usize,
}

impl NestedMask {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn field<T: PartialEq>(&mut self, path: &str, plan: &Value<T>, state: &Value<T>) {
        self.compared += 1;
        if !scalar_equal(plan, state) {
            self.changed.push(path.to_owned());
        }
    }

    pub fn collection<T>(&mut self, path: &str, plan: &Value<T>, state: &Value<T>)
    where
        T: PartialEq + EmptyCollection,
    {
        self.compared += 1;
        if !collection_equal(plan, state) {
            self.changed.push(path.to_owned());
        }
    }
}

fn scalar_equal<T: PartialEq>(plan: &Value<T>, state: &Value<T>) -> bool {
    match (plan, state) {
        (Value::Value(plan), Value::Value(state)) => plan == state,
        (Value::Value(_), _) | (_, Value::Value(_)) => false,
        _ => true,
    }
}

fn collection_equal<T>(plan: &Value<T>, state: &Value<T>) -> bool
where
    T: PartialEq + EmptyCollection,
{
    match (plan, state) {
        (Value::Value(plan), Value::Value(state)) => plan == state,
        (Value::Value(present), _) | (_, Value::Value(present)) => present.is_empty_collection(),
        _ => true,
    }
}

/// Keep a prior null when the API returned an empty collection, so reads do
/// not flip state between the two equivalent forms.
pub fn preserve_empty<T: EmptyCollection>(api: Value<T>, prior: &Value<T>) -> Value<T> {
    if prior.is_null() {
        if let Value::Value(collection) = &api {
            if collection.is_empty_collection() {
                return Value::Null;
            }
        }
    }
    api
}

pub trait EmptyCollection {
    fn is_empty_collection(&self) -> bool;
}

impl<T> EmptyCollection for Vec<T> {
    fn is_empty_collection(&self) -> bool {
        self.is_empty()
    }
}

impl<K: Ord, V> EmptyCollection for BTreeMap<K, V> {
    fn is_empty_collection(&self) -> bool {
        self.is_empty()
    }
}

impl<T: Ord> EmptyCollection for BTreeSet<T> {
    fn is_empty_collection(&self) -> bool {
        self.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use std::borrow::Cow;

    use tf_provider::value::{ValueMap, ValueString};

    use super::*;

    fn string(value: &str) -> ValueString<'_> {
        Value::Value(Cow::Borrowed(value))
    }

    fn labels<'a>(pairs: &[(&'a str, &'a str)]) -> ValueMap<'a, ValueString<'a>> {
        Value::Value(
            pairs
                .iter()
                .map(|(k, v)| (Cow::Borrowed(*k), string(v)))
                .collect(),
        )
    }

    #[test]
    fn equal_fields_produce_an_empty_mask() {
        let mut mask = UpdateMask::new();
        mask.field("name", &string("db"), &string("db"));
        mask.field("description", &ValueString::Null, &ValueString::Null);
        mask.collection("labels", &labels(&[("env", "prod")]), &labels(&[("env", "prod")]));
        mask.collection("labels2", &ValueMap::<ValueString>::Null, &labels(&[]));
        assert!(mask.is_empty());
    }

    #[test]
    fn changed_fields_are_recorded_in_order() {
        let mut mask = UpdateMask::new();
        mask.field("name", &string("new"), &string("old"));
        mask.field("description", &string("same"), &string("same"));
        mask.collection("labels", &labels(&[("a", "1")]), &ValueMap::Null);
        assert_eq!(mask.paths(), ["name", "labels"]);
    }

    #[test]
    fn null_is_not_an_empty_scalar() {
        let mut mask = UpdateMask::new();
        mask.field("description", &ValueString::Null, &string(""));
        assert_eq!(mask.paths(), ["description"]);
    }

    #[test]
    fn nested_emits_parent_when_all_sub_fields_changed() {
        let mut sub = NestedMask::new();
        sub.field("logging", &string("on"), &string("off"));
        sub.field("maintenance_window", &string("weekly"), &string("anytime"));

        let mut mask = UpdateMask::new();
        mask.nested("config", sub);
        assert_eq!(mask.paths(), ["config"]);
    }

    #[test]
    fn nested_emits_sub_paths_on_partial_change() {
        let mut sub = NestedMask::new();
        sub.field("logging", &string("on"), &string("off"));
        sub.field("maintenance_window", &string("weekly"), &string("weekly"));

        let mut mask = UpdateMask::new();
        mask.nested("config", sub);
        assert_eq!(mask.paths(), ["config.logging"]);
    }

    #[test]
    fn nested_without_changes_emits_nothing() {
        let mut sub = NestedMask::new();
        sub.field("logging", &string("on"), &string("on"));

        let mut mask = UpdateMask::new();
        mask.nested("config", sub);
        assert!(mask.is_empty());
    }

    #[test]
    fn preserve_empty_keeps_prior_null() {
        let api = labels(&[]);
        assert!(preserve_empty(api, &ValueMap::Null).is_null());

        let api = labels(&[("env", "prod")]);
        assert_eq!(preserve_empty(api.clone(), &ValueMap::Null), api);

        let api = labels(&[]);
        assert_eq!(preserve_empty(api.clone(), &labels(&[])), api);
    }

    #[test]
    fn paths_are_deduplicated() {
        let mut mask = UpdateMask::new();
        mask.field("name", &string("a"), &string("b"));
        mask.field("name", &string("a"), &string("b"));
        assert_eq!(mask.paths(), ["name"]);

        let mask = mask.into_field_mask();
        assert_eq!(mask.paths, ["name"]);
    }
}
