use std::ops::Range;

use rand::Rng;
use tokio::time::{sleep, Duration};

/// Randomized pause between automated actions to reduce detectability.
pub async fn humanize(seconds: Range<f64>) {
    let secs = rand::thread_rng().gen_range(seconds);
    sleep(Duration::from_secs_f64(secs)).await;
}
