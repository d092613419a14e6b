//! Free-form task input payload
//!
//! Upstream producers of task inputs are not fully enumerable, so the
//! payload stays a generic ordered key → JSON value container. A few keys
//! are reserved and interpreted by the orchestrator:
//!
//! | Key             | Type   | Meaning                                          |
//! |-----------------|--------|--------------------------------------------------|
//! | `action`        | string | Action text matched by playbook guardrails       |
//! | `simulate_only` | bool   | Complete without calling the executor once safe  |

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub const ACTION_KEY: &str = "action";
pub const SIMULATE_ONLY_KEY: &str = "simulate_only";

/// Ordered task input payload
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskPayload(Map<String, Value>);

impl TaskPayload {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.0.insert(key.into(), value.into())
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.0.keys()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Reserved `action` key, when it holds a string
    pub fn action(&self) -> Option<&str> {
        self.get(ACTION_KEY).and_then(Value::as_str)
    }

    /// Reserved `simulate_only` key; anything but `true` is false
    pub fn simulate_only(&self) -> bool {
        self.get(SIMULATE_ONLY_KEY)
            .and_then(Value::as_bool)
            .unwrap_or(false)
    }
}

impl From<Map<String, Value>> for TaskPayload {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl From<TaskPayload> for Value {
    fn from(payload: TaskPayload) -> Self {
        Value::Object(payload.0)
    }
}
