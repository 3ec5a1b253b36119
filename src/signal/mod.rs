pub mod highpass;
pub mod peaks;

pub use self::highpass::{remove_baseline_wander, HighPass};
pub use self::peaks::{dedup_peaks, detect_peaks, Peak};
