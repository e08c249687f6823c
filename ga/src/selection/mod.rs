pub mod roulette;
pub mod tournament;

pub use roulette::RouletteWheelChooser;
pub use tournament::TournamentChooser;
