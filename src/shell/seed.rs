// Activities the directory starts with.

use crate::modules::activities::core::activity::{Activity, ActivityRecord};
use anyhow::Context;
use std::path::Path;

fn activity(
    name: &str,
    description: &str,
    schedule: &str,
    max_participants: u32,
    participants: &[&str],
) -> Activity {
    Activity {
        name: name.to_string(),
        description: description.to_string(),
        schedule: schedule.to_string(),
        max_participants,
        participants: participants.iter().map(|p| p.to_string()).collect(),
    }
}

pub fn default_activities() -> Vec<Activity> {
    vec![
        activity(
            "Chess Club",
            "Learn strategies and compete in chess tournaments",
            "Fridays, 3:30 PM - 5:00 PM",
            12,
            &["michael@mergington.edu", "daniel@mergington.edu"],
        ),
        activity(
            "Programming Class",
            "Learn programming fundamentals and build software projects",
            "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
            20,
            &["emma@mergington.edu", "sophia@mergington.edu"],
        ),
        activity(
            "Gym Class",
            "Physical education and sports activities",
            "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
            30,
            &["john@mergington.edu", "olivia@mergington.edu"],
        ),
        activity(
            "Soccer Team",
            "Join the school soccer team and compete in matches",
            "Tuesdays and Thursdays, 4:00 PM - 5:30 PM",
            22,
            &["liam@mergington.edu", "noah@mergington.edu"],
        ),
        activity(
            "Basketball Team",
            "Practice and play basketball with the school team",
            "Wednesdays and Fridays, 3:30 PM - 5:00 PM",
            15,
            &["ava@mergington.edu", "mia@mergington.edu"],
        ),
        activity(
            "Art Studio",
            "Explore your creativity through painting and drawing",
            "Thursdays, 3:30 PM - 5:00 PM",
            15,
            &["amelia@mergington.edu", "harper@mergington.edu"],
        ),
        activity(
            "Drama Club",
            "Act, direct, and produce plays and performances",
            "Mondays and Wednesdays, 4:00 PM - 5:30 PM",
            20,
            &["ella@mergington.edu", "scarlett@mergington.edu"],
        ),
        activity(
            "Math Club",
            "Solve challenging problems and participate in math competitions",
            "Tuesdays, 3:30 PM - 4:30 PM",
            10,
            &["james@mergington.edu", "benjamin@mergington.edu"],
        ),
        activity(
            "Debate Team",
            "Develop public speaking and argumentation skills",
            "Fridays, 4:00 PM - 5:30 PM",
            12,
            &["charlotte@mergington.edu", "henry@mergington.edu"],
        ),
    ]
}

/// Parses a JSON object of activity name to record, keeping the file's key
/// order.
pub fn parse_activities(json: &str) -> anyhow::Result<Vec<Activity>> {
    let directory: serde_json::Map<String, serde_json::Value> =
        serde_json::from_str(json).context("activities must be a JSON object keyed by name")?;
    directory
        .into_iter()
        .map(|(name, value)| {
            let record: ActivityRecord = serde_json::from_value(value)
                .with_context(|| format!("invalid record for activity {name:?}"))?;
            let mut activity = Activity::from_record(name, record);
            // rosters never hold the same email twice
            let mut seen = std::collections::HashSet::new();
            activity.participants.retain(|p| seen.insert(p.clone()));
            Ok(activity)
        })
        .collect()
}

pub fn load_activities(path: &Path) -> anyhow::Result<Vec<Activity>> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read activities file {}", path.display()))?;
    parse_activities(&json)
}
