// Pure decision function for signing a participant up.
//
// Rules
// - The activity must exist.
// - An email appears at most once per roster.
// - Accepted signups append to the end of the roster.

use crate::modules::activities::core::activity::Activity;
use crate::modules::activities::use_cases::sign_up_for_activity::command::SignUpForActivity;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SignUpError {
    #[error("Activity not found")]
    ActivityNotFound,

    #[error("Student is already signed up for this activity")]
    AlreadySignedUp,
}

pub fn decide_sign_up(
    state: Option<&Activity>,
    command: SignUpForActivity,
) -> Result<Activity, SignUpError> {
    let Some(activity) = state else {
        return Err(SignUpError::ActivityNotFound);
    };
    if activity.has_participant(&command.email) {
        return Err(SignUpError::AlreadySignedUp);
    }
    let mut next = activity.clone();
    next.participants.push(command.email);
    Ok(next)
}
