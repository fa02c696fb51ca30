pub mod human;
pub mod random;
pub mod registry;

pub use human::HumanBot;
pub use random::RandomBot;
pub use registry::{create_bot_from_spec, label_for_spec};
