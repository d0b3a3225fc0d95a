//! Session identifiers derived from session-start flags

use crate::error::ValidationError;
use crate::labels::LabelSequence;

/// Assign a session id to every message
///
/// Messages must be ordered by channel, then by time. A new session begins
/// whenever the channel changes and whenever a message is flagged as a
/// session start within the same channel. Ids are `session_1`, `session_2`,
/// ... across all channels.
pub fn assign_session_ids<C: PartialEq>(
    channels: &[C],
    starts: &LabelSequence,
) -> Result<Vec<String>, ValidationError> {
    if channels.len() != starts.len() {
        return Err(ValidationError::ChannelMismatch {
            channels: channels.len(),
            starts: starts.len(),
        });
    }

    let mut session = 0usize;
    let mut current: Option<&C> = None;
    let ids = channels
        .iter()
        .enumerate()
        .map(|(i, channel)| {
            if current != Some(channel) {
                session += 1;
                current = Some(channel);
            } else if starts.is_start(i) {
                session += 1;
            }
            format!("session_{session}")
        })
        .collect();

    Ok(ids)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_on_channel_change_and_start() {
        let channels = ["a", "a", "a", "b", "b", "b"];
        let starts = LabelSequence::new(vec![1, 0, 1, 0, 0, 1]).unwrap();
        let ids = assign_session_ids(&channels, &starts).unwrap();
        assert_eq!(
            ids,
            vec![
                "session_1",
                "session_1",
                "session_2",
                "session_3",
                "session_3",
                "session_4"
            ]
        );
    }

    #[test]
    fn test_first_message_start_flag_does_not_double_count() {
        let channels = [7, 7];
        let starts = LabelSequence::new(vec![1, 0]).unwrap();
        let ids = assign_session_ids(&channels, &starts).unwrap();
        assert_eq!(ids, vec!["session_1", "session_1"]);
    }

    #[test]
    fn test_channel_count_mismatch() {
        let starts = LabelSequence::new(vec![0, 0]).unwrap();
        let err = assign_session_ids(&["x"], &starts).unwrap_err();
        assert_eq!(
            err,
            ValidationError::ChannelMismatch {
                channels: 1,
                starts: 2,
            }
        );
    }

    #[test]
    fn test_empty_input() {
        let ids = assign_session_ids::<&str>(&[], &LabelSequence::default()).unwrap();
        assert!(ids.is_empty());
    }
}
