use relay_core_health_contracts::{HealthFeatureService, HealthStatus};
use relay_di::Build;
use relay_shared_contracts::time::TimeService;

#[derive(Debug, Clone, Build, Default)]
pub struct HealthFeatureServiceImpl<Time> {
    time: Time,
}

impl<Time> HealthFeatureService for HealthFeatureServiceImpl<Time>
where
    Time: TimeService,
{
    async fn get_status(&self) -> HealthStatus {
        HealthStatus {
            timestamp: self.time.now(),
        }
    }
}
