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

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use lazy_static::lazy_static;
use tokio::sync::{Mutex as AsyncMutex, OwnedMutexGuard};

lazy_static! {
    static ref LOCKS: Mutex<HashMap<String, Arc<AsyncMutex<()>>>> = Mutex::new(HashMap::new());
}

/// Serialize mutations against a shared remote parent.
///
/// Terraform applies independent resources concurrently; rule additions and
/// deletions against the same security group would otherwise race through
/// read-modify-write update calls.
pub async fn lock(key: &str) -> OwnedMutexGuard<()> {
    let mutex = {
        let mut locks = LOCKS.lock().unwrap_or_else(|err| err.into_inner());
        locks
            .entry(key.to_owned())
            .or_insert_with(|| Arc::new(AsyncMutex::new(())))
            .clone()
    };
    mutex.lock_owned().await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn serializes_holders_of_the_same_key() {
        let guard = lock("globallock-test-sg").await;

        let contender = tokio::spawn(async { lock("globallock-test-sg").await });
        tokio::task::yield_now().await;
        assert!(!contender.is_finished());

        drop(guard);
        contender.await.unwrap();
    }

    #[tokio::test]
    async fn distinct_keys_do_not_contend() {
        let _a = lock("globallock-test-a").await;
        let _b = lock("globallock-test-b").await;
    }
}
