use super::*;
use std::time::Duration;

pub fn load_statistics(
    connections: &sqlite::Connections,
    now: Timestamp,
    recent_window: Duration,
) -> Result<usecases::Statistics> {
    Ok(connections
        .shared()?
        .read(|db| usecases::load_statistics(db, now, recent_window))?)
}
