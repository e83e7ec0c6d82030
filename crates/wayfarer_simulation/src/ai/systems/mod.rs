//! AI ECS systems

pub mod fsm;

pub use fsm::{acquire_player_target, ai_behavior_tick, target_position};
