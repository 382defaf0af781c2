//! Scenario files and the runner behind the `navstack-demo` binary.
//!
//! A scenario is an ordered list of steps in TOML:
//!
//! ```toml
//! name = "rewind"
//!
//! [[step]]
//! navigate = "A"
//!
//! [[step]]
//! navigate = "B"
//! flag = "CLEAR_TOP:B"
//! carry = true            # smuggle the flag through params
//! params = { tab = "inbox" }
//!
//! [[step]]
//! back = true
//!
//! [[step]]
//! reset = "home"
//! ```

use navstack_resolver::{FlagCarrier, NavAction, NavigationRequest, NavigationRuntime};
use navstack_types::{NavFlag, Params};
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;
use tracing::info;

/// Errors reading or validating a scenario.
#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("step {step}: {source}")]
    Flag {
        step: usize,
        #[source]
        source: navstack_types::Error,
    },

    #[error("step {step}: {reason}")]
    InvalidStep { step: usize, reason: String },
}

/// One step as written in the scenario file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Step {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub navigate: Option<String>,
    /// Compact flag form, e.g. `CLEAR_TOP:B`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flag: Option<String>,
    #[serde(default, skip_serializing_if = "Params::is_empty")]
    pub params: Params,
    /// Send the flag inside params under the carrier key.
    #[serde(default)]
    pub carry: bool,
    #[serde(default)]
    pub back: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reset: Option<String>,
}

impl Step {
    fn navigate(target: &str, flag: Option<&str>) -> Self {
        Self {
            navigate: Some(target.into()),
            flag: flag.map(String::from),
            carry: flag.is_some(),
            ..Self::default()
        }
    }

    /// Converts the step into a runtime action. `index` is 1-based.
    fn to_action(&self, index: usize, carrier: &FlagCarrier) -> Result<NavAction, ScenarioError> {
        let kinds = usize::from(self.navigate.is_some())
            + usize::from(self.back)
            + usize::from(self.reset.is_some());
        if kinds != 1 {
            return Err(ScenarioError::InvalidStep {
                step: index,
                reason: "exactly one of `navigate`, `back` or `reset` is required".into(),
            });
        }

        if self.back {
            return Ok(NavAction::Back);
        }
        if let Some(root) = &self.reset {
            return Ok(NavAction::Reset {
                root: root.clone(),
                params: self.params.clone(),
            });
        }

        let target = self.navigate.clone().unwrap_or_default();
        let flag = self
            .flag
            .as_deref()
            .map(str::parse::<NavFlag>)
            .transpose()
            .map_err(|source| ScenarioError::Flag {
                step: index,
                source,
            })?;

        let mut params = self.params.clone();
        let mut request = NavigationRequest::new(target);
        match flag {
            Some(flag) if self.carry => carrier
                .embed(&mut params, &flag)
                .map_err(|source| ScenarioError::Flag {
                    step: index,
                    source,
                })?,
            Some(flag) => request = request.with_flag(flag),
            None => {}
        }
        Ok(NavAction::Navigate(request.with_params(params)))
    }

    fn describe(&self) -> String {
        if self.back {
            return "back".into();
        }
        if let Some(root) = &self.reset {
            return format!("reset({root})");
        }
        let target = self.navigate.as_deref().unwrap_or_default();
        match &self.flag {
            Some(flag) => format!("navigate({target}, {flag})"),
            None => format!("navigate({target})"),
        }
    }
}

/// A named, ordered list of steps.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    #[serde(default)]
    pub name: String,
    #[serde(default, rename = "step")]
    pub steps: Vec<Step>,
}

/// What one step did.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StepReport {
    pub step: String,
    /// The primitive plan, when the step was intercepted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plan: Option<String>,
    /// Entry names bottom-first after the step.
    pub stack: Vec<String>,
}

impl Scenario {
    /// Parses a scenario document.
    pub fn from_toml_str(contents: &str) -> Result<Self, ScenarioError> {
        Ok(toml::from_str(contents)?)
    }

    /// Reads and parses a scenario file.
    pub fn load(path: &Path) -> Result<Self, ScenarioError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Push A, B, C, D; rewind to B; clear the stack to `home`.
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            name: "push, rewind, clear".into(),
            steps: vec![
                Step::navigate("A", None),
                Step::navigate("B", None),
                Step::navigate("C", None),
                Step::navigate("D", None),
                Step::navigate("B", Some("CLEAR_TOP:B")),
                Step::navigate("home", Some("CLEAR_STACK")),
            ],
        }
    }

    /// Validates every step and runs them in order against `runtime`.
    ///
    /// Nothing is dispatched if any step is invalid.
    pub fn run(&self, runtime: &mut NavigationRuntime) -> Result<Vec<StepReport>, ScenarioError> {
        let carrier = runtime.interceptor().resolver().carrier().clone();
        let actions = self
            .steps
            .iter()
            .enumerate()
            .map(|(i, step)| step.to_action(i + 1, &carrier))
            .collect::<Result<Vec<_>, _>>()?;

        let mut reports = Vec::with_capacity(actions.len());
        for (step, action) in self.steps.iter().zip(actions) {
            let plan = runtime.dispatch(action).map(|plan| plan.to_string());
            let stack = runtime
                .stack()
                .names()
                .into_iter()
                .map(String::from)
                .collect::<Vec<_>>();
            info!(step = %step.describe(), stack = ?stack, "Step applied");
            reports.push(StepReport {
                step: step.describe(),
                plan,
                stack,
            });
        }
        Ok(reports)
    }
}
