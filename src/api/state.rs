use std::sync::Arc;

use crate::calculate::KickoffSchedule;
use crate::fetch::SnapshotSource;

#[derive(Clone)]
pub struct AppState {
    pub source: Arc<dyn SnapshotSource>,
    pub schedule: Arc<KickoffSchedule>,
}
