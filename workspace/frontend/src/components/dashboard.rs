mod chart;
mod errors;
mod scatter;
mod slider;
mod view;

pub use view::Dashboard;
