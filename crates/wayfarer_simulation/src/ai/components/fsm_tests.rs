//! Tests for FSM AI components.

#[cfg(test)]
mod tests {
    use super::super::fsm::{AIBrain, AIConfig, AIState, NpcKind};

    #[test]
    fn test_ai_brain_starts_uninitialized() {
        let brain = AIBrain::default();
        assert_eq!(brain.state(), None);
        assert_eq!(brain.wait_timer(), 0.0);
        assert!(!brain.is_in(AIState::Idle));
    }

    #[test]
    fn test_ai_config_default() {
        let config = AIConfig::default();
        assert_eq!(config.kind, NpcKind::Friendly);
        assert_eq!(config.awareness_range, 5.0);
        assert_eq!(config.interaction_range, 2.5);
        assert_eq!(config.rotation_speed, 5.0);
        assert_eq!(config.wait_time_at_point, 3.0);
    }

    #[test]
    fn test_engage_state_by_kind() {
        assert_eq!(NpcKind::Friendly.engage_state(), AIState::Alert);
        assert_eq!(NpcKind::Hostile.engage_state(), AIState::Chase);
        assert!(NpcKind::Hostile.is_hostile());
        assert!(!NpcKind::Friendly.is_hostile());
    }

    #[test]
    fn test_hostile_builder() {
        let config = AIConfig::hostile().with_ranges(5.0, 2.0);
        assert_eq!(config.kind, NpcKind::Hostile);
        assert_eq!(config.awareness_range, 5.0);
        assert_eq!(config.interaction_range, 2.0);
        assert_eq!(config.wait_time_at_point, 3.0);
    }

    #[test]
    fn test_state_names_unique() {
        let names: Vec<_> = AIState::ALL.iter().map(|s| s.as_str()).collect();
        for (i, name) in names.iter().enumerate() {
            assert!(!names[i + 1..].contains(name));
        }
    }
}
