pub mod leaderboard;
pub mod lineup;
pub mod rounds;
