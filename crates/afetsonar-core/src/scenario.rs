//! Canned demo scenarios
//!
//! The four pre-authored response plans are structured data, not prose
//! blobs: each scenario is a record of damage-class id lists, road
//! closures, priority tiers and access routes, embedded at compile
//! time and rendered to HTML by a single renderer. A canned report is
//! selected purely by scenario id and is never derived from a live
//! tally.

use lazy_static::lazy_static;
use serde::Deserialize;

use crate::error::TriageError;
use crate::report::{Report, ReportSource};

const SCENARIOS_JSON: &str = include_str!("../assets/scenarios.json");

lazy_static! {
    static ref SCENARIOS: Vec<Scenario> =
        serde_json::from_str(SCENARIOS_JSON).expect("embedded scenarios.json is well-formed");
}

/// Validated demo scenario identifier (1-4).
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct ScenarioId(u8);

impl ScenarioId {
    pub fn new(id: u8) -> Result<Self, TriageError> {
        if (1..=SCENARIOS.len() as u8).contains(&id) {
            Ok(Self(id))
        } else {
            Err(TriageError::UnknownScenario(id))
        }
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

/// One pre-authored scenario record.
#[derive(Debug, Clone, Deserialize)]
pub struct Scenario {
    pub id: u8,
    pub image_label: String,
    pub intro: String,
    pub structure_count: u32,
    pub damage_classes: Vec<DamageClass>,
    pub access: Access,
    pub priority: Option<PrioritySection>,
    pub tiers_heading: String,
    pub tiers: Vec<PriorityTier>,
    pub plans_heading: Option<String>,
    pub access_plans: Vec<AccessPlan>,
    pub directives_heading: String,
    pub directives: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DamageClass {
    pub heading: String,
    /// Structure id list as prose (ranges like "15–24" included).
    pub ids: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Access {
    pub heading: String,
    pub intro: Option<String>,
    pub closures_heading: String,
    pub closures: Vec<RoadClosure>,
    pub notes: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RoadClosure {
    pub segment: String,
    pub condition: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PrioritySection {
    pub heading: String,
    pub intro: String,
    pub factors: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PriorityTier {
    pub heading: String,
    pub structures: Option<String>,
    pub note: Option<String>,
    pub recommendations_heading: Option<String>,
    pub recommendations: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AccessPlan {
    pub heading: String,
    pub points: Vec<String>,
}

/// Look up a scenario record by validated id.
pub fn scenario(id: ScenarioId) -> &'static Scenario {
    // ScenarioId::new guarantees the index is in range.
    &SCENARIOS[(id.get() - 1) as usize]
}

/// Render the canned report for a demo scenario.
///
/// Output depends only on the embedded scenario data; a concurrently
/// sampled batch never changes it.
pub fn render_canned(id: ScenarioId) -> Report {
    let s = scenario(id);
    let mut html = String::new();

    html.push_str(&format!(
        "<h3>AFETSONAR – Structural Status & Response Analysis ({})</h3>\n",
        s.image_label
    ));
    html.push_str(&format!("{}<br><br>\n", s.intro));

    html.push_str("<strong>1.1. Damage Classification Distribution</strong><br>\n");
    for class in &s.damage_classes {
        html.push_str(&format!(
            "<strong>{}</strong><br>\n{}<br><br>\n",
            class.heading, class.ids
        ));
    }

    let mut section = 2;

    html.push_str(&format!("<h3>{}. {}</h3>\n", section, s.access.heading));
    if let Some(intro) = &s.access.intro {
        html.push_str(&format!("{}<br><br>\n", intro));
    }
    html.push_str(&format!(
        "<strong>{}.1. {}</strong><br>\n",
        section, s.access.closures_heading
    ));
    for closure in &s.access.closures {
        html.push_str(&format!("• {} → {}.<br>\n", closure.segment, closure.condition));
    }
    html.push_str("<br>\n");
    for note in &s.access.notes {
        html.push_str(&format!("{}<br><br>\n", note));
    }
    section += 1;

    if let Some(priority) = &s.priority {
        html.push_str(&format!("<h3>{}. {}</h3>\n", section, priority.heading));
        html.push_str(&format!("{}<br>\n", priority.intro));
        for factor in &priority.factors {
            html.push_str(&format!("• {}<br>\n", factor));
        }
        html.push_str("<br>\n");
        section += 1;
    }

    html.push_str(&format!("<h3>{}. {}</h3>\n", section, s.tiers_heading));
    for (i, tier) in s.tiers.iter().enumerate() {
        html.push_str(&format!(
            "<strong>{}.{}. {}</strong><br>\n",
            section,
            i + 1,
            tier.heading
        ));
        if let Some(structures) = &tier.structures {
            html.push_str(&format!("{}<br>\n", structures));
        }
        if let Some(note) = &tier.note {
            html.push_str(&format!("{}<br>\n", note));
        }
        if let Some(rec_heading) = &tier.recommendations_heading {
            html.push_str(&format!("<strong>{}</strong><br>\n", rec_heading));
        }
        for rec in &tier.recommendations {
            html.push_str(&format!("• {}<br>\n", rec));
        }
        html.push_str("<br>\n");
    }
    section += 1;

    if !s.access_plans.is_empty() {
        if let Some(heading) = &s.plans_heading {
            html.push_str(&format!("<h3>{}. {}</h3>\n", section, heading));
        }
        for plan in &s.access_plans {
            html.push_str(&format!("<u>{}</u><br>\n", plan.heading));
            for point in &plan.points {
                html.push_str(&format!("• {}<br>\n", point));
            }
            html.push_str("<br>\n");
        }
        section += 1;
    }

    html.push_str(&format!(
        "<h3>{}. {}</h3>\n",
        section, s.directives_heading
    ));
    for directive in &s.directives {
        html.push_str(&format!("{}<br><br>\n", directive));
    }

    Report {
        source: ReportSource::Canned { scenario: id },
        html,
    }
}
