pub mod entrance;
pub mod hero;
pub mod particles;
pub mod progress;
pub mod skills;
