use crate::modules::activities::core::activity::Activity;
use crate::modules::activities::use_cases::unregister_from_activity::command::UnregisterFromActivity;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum UnregisterError {
    #[error("Activity not found")]
    ActivityNotFound,

    #[error("Student is not signed up for this activity")]
    NotSignedUp,
}

/// Removes the email from the roster, keeping the order of the remaining
/// participants.
pub fn decide_unregister(
    state: Option<&Activity>,
    command: UnregisterFromActivity,
) -> Result<Activity, UnregisterError> {
    let Some(activity) = state else {
        return Err(UnregisterError::ActivityNotFound);
    };
    if !activity.has_participant(&command.email) {
        return Err(UnregisterError::NotSignedUp);
    }
    let mut next = activity.clone();
    next.participants.retain(|p| p != &command.email);
    Ok(next)
}

#[cfg(test)]
mod unregister_decide_tests {
    use super::*;
    use crate::tests::fixtures::activities::ActivityBuilder;
    use rstest::{fixture, rstest};

    #[fixture]
    fn activity() -> Activity {
        ActivityBuilder::new()
            .name("Chess Club")
            .participants(vec![
                "michael@mergington.edu".into(),
                "daniel@mergington.edu".into(),
                "tester@example.com".into(),
            ])
            .build()
    }

    fn command(email: &str) -> UnregisterFromActivity {
        UnregisterFromActivity {
            activity_name: "Chess Club".into(),
            email: email.into(),
        }
    }

    #[rstest]
    fn it_should_remove_the_email_and_keep_the_order(activity: Activity) {
        let next = decide_unregister(Some(&activity), command("daniel@mergington.edu")).unwrap();
        assert_eq!(
            next.participants,
            vec!["michael@mergington.edu", "tester@example.com"]
        );
    }

    #[rstest]
    fn it_should_reject_an_email_that_is_not_enrolled(activity: Activity) {
        let decision = decide_unregister(Some(&activity), command("nobody@example.com"));
        assert_eq!(decision, Err(UnregisterError::NotSignedUp));
    }

    #[rstest]
    fn it_should_reject_an_unknown_activity() {
        let decision = decide_unregister(None, command("tester@example.com"));
        assert_eq!(decision, Err(UnregisterError::ActivityNotFound));
    }
}
