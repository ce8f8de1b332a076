use serde::{Deserialize, Serialize};

/// One extracurricular offering and its roster, in signup order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Activity {
    pub name: String,
    pub description: String,
    pub schedule: String,
    pub max_participants: u32,
    pub participants: Vec<String>,
}

/// Wire shape of an activity. The name is the key of the surrounding map,
/// so it is not repeated inside the record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityRecord {
    pub description: String,
    pub schedule: String,
    pub max_participants: u32,
    #[serde(default)]
    pub participants: Vec<String>,
}

impl Activity {
    pub fn from_record(name: impl Into<String>, record: ActivityRecord) -> Self {
        Self {
            name: name.into(),
            description: record.description,
            schedule: record.schedule,
            max_participants: record.max_participants,
            participants: record.participants,
        }
    }

    pub fn has_participant(&self, email: &str) -> bool {
        self.participants.iter().any(|p| p == email)
    }
}

impl From<Activity> for ActivityRecord {
    fn from(activity: Activity) -> Self {
        Self {
            description: activity.description,
            schedule: activity.schedule,
            max_participants: activity.max_participants,
            participants: activity.participants,
        }
    }
}
