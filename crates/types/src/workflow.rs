//! Static description of the automation pipeline shown on the page.
//!
//! The document is illustrative only: it is rendered and copied as text, never
//! executed or validated. Configuration maps keep authoring order (via
//! `IndexMap`) so the pretty-printed JSON reads in the same order it was
//! written.

use indexmap::IndexMap;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use serde_json::{Value as JsonValue, json};

/// The reference pipeline, built once on first access and never mutated.
pub static REFERENCE_WORKFLOW: Lazy<WorkflowDocument> = Lazy::new(reference_workflow);

/// Top-level automation document: a trigger plus ordered steps.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WorkflowDocument {
    /// Display name of the pipeline.
    pub workflow_name: String,
    /// What starts the pipeline inside the external platform.
    pub trigger: WorkflowTrigger,
    /// Steps numbered from 1 in execution order.
    pub steps: Vec<WorkflowStep>,
}

/// Opaque trigger descriptor. None of the fields are interpreted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WorkflowTrigger {
    #[serde(rename = "type")]
    pub kind: String,
    pub schedule: String,
    pub action: String,
}

/// One stage of the pipeline, targeting an external app and action.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WorkflowStep {
    /// 1-based position within `WorkflowDocument::steps`.
    pub step: u32,
    pub name: String,
    pub app: String,
    pub action: String,
    /// Arbitrary JSON-compatible settings keyed in authoring order.
    #[serde(default)]
    pub config: IndexMap<String, JsonValue>,
    /// Suggested no-cost replacement for a paid app.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub free_alternative: Option<String>,
    /// Free service the step already relies on.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub free_tool: Option<String>,
}

impl WorkflowStep {
    /// Creates a step from its identity and a JSON object literal for `config`.
    ///
    /// Non-object `config` values produce an empty map.
    pub fn new(step: u32, name: &str, app: &str, action: &str, config: JsonValue) -> Self {
        let config = match config {
            JsonValue::Object(map) => map.into_iter().collect(),
            _ => IndexMap::new(),
        };
        Self {
            step,
            name: name.to_string(),
            app: app.to_string(),
            action: action.to_string(),
            config,
            free_alternative: None,
            free_tool: None,
        }
    }

    pub fn with_free_alternative(mut self, alternative: &str) -> Self {
        self.free_alternative = Some(alternative.to_string());
        self
    }

    pub fn with_free_tool(mut self, tool: &str) -> Self {
        self.free_tool = Some(tool.to_string());
        self
    }
}

impl WorkflowDocument {
    /// Serializes the document as JSON indented by two spaces.
    pub fn to_pretty_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Looks up a step by its 1-based number.
    pub fn step(&self, number: u32) -> Option<&WorkflowStep> {
        self.steps.iter().find(|step| step.step == number)
    }

    /// Returns `true` when step numbers run `1..=len` in order.
    pub fn has_contiguous_steps(&self) -> bool {
        self.steps.iter().zip(1u32..).all(|(step, expected)| step.step == expected)
    }
}

fn reference_workflow() -> WorkflowDocument {
    let steps = vec![
        WorkflowStep::new(
            1,
            "YouTube Search",
            "YouTube Data API v3",
            "Search Videos",
            json!({
                "query": "imagine OR imagines",
                "publishedAfter": "{{now - 48 hours}}",
                "order": "date",
                "maxResults": 10,
                "type": "video"
            }),
        )
        .with_free_alternative("Use YouTube RSS Feed + RSS by Zapier (Free)"),
        WorkflowStep::new(
            2,
            "Filter by Engagement",
            "Filter",
            "Sort and Filter",
            json!({
                "sort_by": "viewCount + commentCount",
                "limit": 3
            }),
        ),
        WorkflowStep::new(
            3,
            "Loop Through Videos",
            "Iterator",
            "Loop",
            json!({ "array": "{{step1.videos}}" }),
        ),
        WorkflowStep::new(
            4,
            "Get Video Details",
            "YouTube Data API v3",
            "Get Video Info",
            json!({ "videoId": "{{step3.current.id}}" }),
        ),
        WorkflowStep::new(
            5,
            "Download Video",
            "HTTP/Webhook",
            "POST Request",
            json!({
                "url": "https://api.cobalt.tools/api/json",
                "method": "POST",
                "headers": {
                    "Accept": "application/json",
                    "Content-Type": "application/json"
                },
                "body": {
                    "url": "https://youtube.com/watch?v={{step4.id}}",
                    "videoQuality": "max"
                }
            }),
        )
        .with_free_tool("cobalt.tools API (Free, no auth required)"),
        WorkflowStep::new(
            6,
            "Generate Caption & Hashtags",
            "OpenAI GPT",
            "Create Completion",
            json!({
                "prompt": "Create an engaging TikTok caption and 10 hashtags for this video title: {{step4.title}}. Theme: Wattpad imagines. Format: Caption on first line, then hashtags.",
                "model": "gpt-3.5-turbo"
            }),
        )
        .with_free_alternative("Use Hugging Face API (Free tier) or GPT4Free"),
        WorkflowStep::new(
            7,
            "Calculate Best Posting Time",
            "Date/Time Formatter",
            "Calculate Time",
            json!({
                "timezone": "America/New_York",
                "best_times": ["9:00 AM", "12:00 PM", "5:00 PM", "7:00 PM"],
                "offset_days": "{{step3.index}}"
            }),
        ),
        WorkflowStep::new(
            8,
            "Schedule TikTok Post",
            "Delay",
            "Delay Until",
            json!({ "delay_until": "{{step7.calculated_time}}" }),
        ),
        WorkflowStep::new(
            9,
            "Post to TikTok",
            "HTTP/Webhook",
            "POST Request",
            json!({
                "url": "TikTok API endpoint",
                "method": "POST",
                "note": "TikTok doesn't have official posting API - use Buffer or Publer free tier"
            }),
        )
        .with_free_alternative("Buffer (Free: 3 posts), Publer (Free: unlimited), or manual upload"),
        WorkflowStep::new(
            10,
            "Send Notification",
            "Email",
            "Send Email",
            json!({
                "to": "your@email.com",
                "subject": "TikTok Video Scheduled",
                "body": "Video: {{step4.title}}\nCaption: {{step6.caption}}\nScheduled: {{step7.calculated_time}}\nDownload: {{step5.download_url}}"
            }),
        ),
    ];

    WorkflowDocument {
        workflow_name: "YouTube to TikTok Automation".to_string(),
        trigger: WorkflowTrigger {
            kind: "Schedule".to_string(),
            schedule: "Every 24 hours".to_string(),
            action: "Start Workflow".to_string(),
        },
        steps,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_workflow_has_ten_contiguous_steps() {
        let document = &*REFERENCE_WORKFLOW;
        assert_eq!(document.steps.len(), 10);
        let numbers: Vec<u32> = document.steps.iter().map(|step| step.step).collect();
        assert_eq!(numbers, (1..=10).collect::<Vec<_>>());
        assert!(document.has_contiguous_steps());
    }

    #[test]
    fn reference_trigger_is_a_schedule() {
        assert_eq!(REFERENCE_WORKFLOW.trigger.kind, "Schedule");
        assert_eq!(REFERENCE_WORKFLOW.trigger.schedule, "Every 24 hours");
    }

    #[test]
    fn pretty_json_uses_two_space_indent_and_authoring_order() {
        let text = REFERENCE_WORKFLOW.to_pretty_json().expect("serialize");
        assert!(text.starts_with("{\n  \"workflow_name\": \"YouTube to TikTok Automation\",\n  \"trigger\": {\n    \"type\": \"Schedule\""));

        let query = text.find("\"query\"").expect("query key");
        let published = text.find("\"publishedAfter\"").expect("publishedAfter key");
        let max_results = text.find("\"maxResults\"").expect("maxResults key");
        assert!(query < published && published < max_results);
    }

    #[test]
    fn pretty_json_parses_back_to_the_same_document() {
        let text = REFERENCE_WORKFLOW.to_pretty_json().expect("serialize");
        let parsed: JsonValue = serde_json::from_str(&text).expect("parse");
        assert_eq!(parsed["steps"][4]["name"], "Download Video");
        assert_eq!(parsed["steps"][4]["config"]["url"], "https://api.cobalt.tools/api/json");

        let document: WorkflowDocument = serde_json::from_value(parsed).expect("document");
        assert_eq!(document, *REFERENCE_WORKFLOW);
    }

    #[test]
    fn absent_optional_fields_are_omitted() {
        let text = REFERENCE_WORKFLOW.to_pretty_json().expect("serialize");
        let parsed: JsonValue = serde_json::from_str(&text).expect("parse");
        let filter_step = parsed["steps"][1].as_object().expect("object");
        assert!(!filter_step.contains_key("free_alternative"));
        assert!(!filter_step.contains_key("free_tool"));
        assert_eq!(
            parsed["steps"][4]["free_tool"],
            "cobalt.tools API (Free, no auth required)"
        );
    }

    #[test]
    fn step_lookup_is_one_based() {
        assert_eq!(REFERENCE_WORKFLOW.step(1).map(|step| step.name.as_str()), Some("YouTube Search"));
        assert_eq!(REFERENCE_WORKFLOW.step(10).map(|step| step.app.as_str()), Some("Email"));
        assert!(REFERENCE_WORKFLOW.step(0).is_none());
        assert!(REFERENCE_WORKFLOW.step(11).is_none());
    }

    #[test]
    fn gaps_in_numbering_break_contiguity() {
        let mut document = REFERENCE_WORKFLOW.clone();
        document.steps.remove(3);
        assert!(!document.has_contiguous_steps());
    }

    #[test]
    fn non_object_config_becomes_empty_map() {
        let step = WorkflowStep::new(1, "Noop", "None", "Nothing", json!([1, 2, 3]));
        assert!(step.config.is_empty());
    }

    #[test]
    fn document_also_serializes_as_yaml() {
        let yaml = serde_yaml::to_string(&*REFERENCE_WORKFLOW).expect("yaml");
        assert!(yaml.contains("workflow_name: YouTube to TikTok Automation"));
        assert!(yaml.contains("type: Schedule"));
    }
}
