pub mod item_state;
pub mod replay_event;
pub mod state_reconstructor;
