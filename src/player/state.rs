use std::fmt;

#[derive(Debug, Default, PartialEq, Eq, Copy, Clone)]
pub enum PlaybackState {
    #[default]
    Stopped,
    Playing,
    Paused,
}

impl PlaybackState {
    /// The only edges the player may take:
    ///
    /// - `Stopped` -> `Playing` (a loaded track starts)
    /// - `Playing` <-> `Paused`
    /// - `Playing` | `Paused` -> `Stopped`
    pub fn can_transition_to(self, next: PlaybackState) -> bool {
        use PlaybackState::*;

        matches!(
            (self, next),
            (Stopped, Playing)
                | (Playing, Paused)
                | (Paused, Playing)
                | (Playing, Stopped)
                | (Paused, Stopped)
        )
    }

    pub fn is_active(self) -> bool {
        self != PlaybackState::Stopped
    }
}

impl fmt::Display for PlaybackState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            PlaybackState::Stopped => "stopped",
            PlaybackState::Playing => "playing",
            PlaybackState::Paused => "paused",
        };
        f.write_str(s)
    }
}

#[cfg(test)]
mod tests {
    use super::PlaybackState::{self, *};

    const ALL: [PlaybackState; 3] = [Stopped, Playing, Paused];

    #[test]
    fn exactly_five_edges_are_legal() {
        let legal: Vec<_> = ALL
            .iter()
            .flat_map(|&from| ALL.iter().map(move |&to| (from, to)))
            .filter(|(from, to)| from.can_transition_to(*to))
            .collect();

        assert_eq!(
            legal,
            vec![
                (Stopped, Playing),
                (Playing, Stopped),
                (Playing, Paused),
                (Paused, Stopped),
                (Paused, Playing),
            ]
        );
    }

    #[test]
    fn stopped_never_jumps_to_paused() {
        assert!(!Stopped.can_transition_to(Paused));
    }

    #[test]
    fn self_loops_are_not_transitions() {
        for state in ALL {
            assert!(!state.can_transition_to(state));
        }
    }
}
