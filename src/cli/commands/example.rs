//! Implementation of the `dialectic example` command.

use anyhow::Result;
use serde::Serialize;

use crate::cli::display::heading;
use crate::cli::output::{output, CommandOutput};
use crate::domain::models::{AgentId, Request};
use crate::infrastructure::templates::AgentTemplate;

#[derive(Debug, Serialize)]
pub struct ExampleOutput {
    pub request: Request,
    #[serde(skip)]
    pub templates: Vec<&'static AgentTemplate>,
}

impl ExampleOutput {
    pub fn new() -> Self {
        Self {
            request: Request::example(),
            templates: AgentId::BOTH.iter().map(|agent| AgentTemplate::for_agent(*agent)).collect(),
        }
    }
}

impl Default for ExampleOutput {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandOutput for ExampleOutput {
    fn to_human(&self) -> String {
        let mut sections = vec![
            heading("Sample request"),
            serde_yaml::to_string(&self.request)
                .unwrap_or_default()
                .trim_end()
                .to_string(),
            format!("Intent: {}", self.request.intent()),
        ];
        for template in &self.templates {
            sections.push(format!("{}\n{}", heading(template.title), template.render()));
        }
        sections.join("\n\n")
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(&self.request).unwrap_or_default()
    }
}

#[allow(clippy::unused_async)]
pub async fn execute(json_mode: bool) -> Result<()> {
    output(&ExampleOutput::new(), json_mode);
    Ok(())
}
