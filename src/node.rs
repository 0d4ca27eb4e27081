//! Node.js bindings, built with the `node` feature.

use napi::bindgen_prelude::*;
use napi_derive::napi;

use crate::{FixedSet, FixedSetConfig};

/// A fixed set exposed to JavaScript as `FixedSet`.
#[napi(js_name = "FixedSet")]
pub struct JsFixedSet {
    inner: FixedSet,
}

#[napi]
impl JsFixedSet {
    /// Builds the set from `keys`. Pass `seed` for a reproducible build.
    #[napi(constructor)]
    pub fn new(keys: Vec<i64>, seed: Option<u32>) -> Result<Self> {
        let mut config = FixedSetConfig::default();
        if let Some(seed) = seed {
            config = config.with_seed(u64::from(seed));
        }
        let inner = FixedSet::build_with_config(&keys, &config)
            .map_err(|e| Error::from_reason(e.to_string()))?;
        Ok(Self { inner })
    }

    /// Whether `key` is a member.
    #[napi]
    pub fn contains(&self, key: i64) -> bool {
        self.inner.contains(key)
    }

    /// Answers a batch of queries in order.
    #[napi]
    pub fn contains_all(&self, keys: Vec<i64>) -> Vec<bool> {
        self.inner.contains_all(&keys)
    }

    /// Number of distinct keys. Fails instead of truncating past `u32::MAX`.
    #[napi(getter)]
    pub fn size(&self) -> Result<u32> {
        js_size(self.inner.len())
    }
}

fn js_size(len: usize) -> Result<u32> {
    u32::try_from(len)
        .map_err(|_| Error::from_reason(format!("set size {} does not fit in u32", len)))
}
