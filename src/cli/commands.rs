pub mod generate;
pub mod period;
pub mod scatter;
pub mod scores;
pub mod slider;

pub use generate::generate;
pub use period::period;
pub use scatter::scatter;
pub use scores::scores;
pub use slider::slider;
