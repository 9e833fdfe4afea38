//! Host side of the puzzle's signals

use hypercube_core::PuzzleHost;

/// Logs and counts solves and strikes
#[derive(Debug, Default)]
pub struct LoggingHost {
    solved: u32,
    strikes: u32,
}

impl LoggingHost {
    pub fn solved(&self) -> u32 {
        self.solved
    }

    pub fn strikes(&self) -> u32 {
        self.strikes
    }
}

impl PuzzleHost for LoggingHost {
    fn signal_solved(&mut self) {
        self.solved += 1;
        log::info!("Host: module solved");
    }

    fn signal_strike(&mut self) {
        self.strikes += 1;
        log::info!("Host: strike {}", self.strikes);
    }
}
