//! Distance resolver task

use defmt::*;

use echoline_core::DistanceResolver;

use super::SharedPipeline;

/// Resolver task - converts echo intervals into distances
#[embassy_executor::task]
pub async fn resolver_task(pipeline: &'static SharedPipeline, speed_cm_per_s: f32) {
    info!("Resolver task started");

    let resolver = DistanceResolver::new(&pipeline.intervals, &pipeline.distances, speed_cm_per_s);

    loop {
        let (interval, distance) = resolver.resolve_next().await;
        debug!("{} us -> {} cm", interval.as_micros(), distance.as_cm());
    }
}
