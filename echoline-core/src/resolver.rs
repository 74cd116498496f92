//! Distance resolver
//!
//! Waits for echo intervals and republishes them as distances. The wait
//! has no timeout: if the sensor stops answering, the distance channel
//! simply stays empty and the presentation loop reports the failure.

use embassy_sync::blocking_mutex::raw::RawMutex;

use crate::channel::LatestChannel;
use crate::measurement::{Distance, Interval};

/// Interval to distance stage
pub struct DistanceResolver<'a, M: RawMutex> {
    intervals: &'a LatestChannel<M, Interval>,
    distances: &'a LatestChannel<M, Distance>,
    speed_cm_per_s: f32,
}

impl<'a, M: RawMutex> DistanceResolver<'a, M> {
    pub fn new(
        intervals: &'a LatestChannel<M, Interval>,
        distances: &'a LatestChannel<M, Distance>,
        speed_cm_per_s: f32,
    ) -> Self {
        Self {
            intervals,
            distances,
            speed_cm_per_s,
        }
    }

    /// Wait for the next interval, convert it and publish the distance
    ///
    /// Publishing replaces an unread distance; it never waits for the
    /// consumer. Returns the interval and the distance it resolved to.
    pub async fn resolve_next(&self) -> (Interval, Distance) {
        let interval = self.intervals.receive().await;
        let distance = Distance::from_interval_at(interval, self.speed_cm_per_s);
        self.distances.publish(distance);
        (interval, distance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SPEED_OF_SOUND_CM_PER_S;
    use embassy_futures::block_on;
    use embassy_futures::join::join;
    use embassy_sync::blocking_mutex::raw::NoopRawMutex;

    #[test]
    fn test_resolves_pending_interval() {
        let intervals: LatestChannel<NoopRawMutex, Interval> = LatestChannel::new();
        let distances: LatestChannel<NoopRawMutex, Distance> = LatestChannel::new();
        let resolver = DistanceResolver::new(&intervals, &distances, SPEED_OF_SOUND_CM_PER_S);

        intervals.publish(Interval::from_micros(588));
        let (interval, distance) = block_on(resolver.resolve_next());

        assert_eq!(interval.as_micros(), 588);
        assert_eq!(distances.try_receive(), Some(distance));
        assert!((distance.as_cm() - 9.996).abs() < 1e-3);
        assert!(!intervals.is_pending());
    }

    #[test]
    fn test_stale_distance_replaced() {
        let intervals: LatestChannel<NoopRawMutex, Interval> = LatestChannel::new();
        let distances: LatestChannel<NoopRawMutex, Distance> = LatestChannel::new();
        let resolver = DistanceResolver::new(&intervals, &distances, SPEED_OF_SOUND_CM_PER_S);

        intervals.publish(Interval::from_micros(588));
        block_on(resolver.resolve_next());
        intervals.publish(Interval::from_micros(1176));
        let (_, second) = block_on(resolver.resolve_next());

        assert_eq!(distances.try_receive(), Some(second));
        assert_eq!(distances.try_receive(), None);
    }

    #[test]
    fn test_waits_for_interval() {
        let intervals: LatestChannel<NoopRawMutex, Interval> = LatestChannel::new();
        let distances: LatestChannel<NoopRawMutex, Distance> = LatestChannel::new();
        let resolver = DistanceResolver::new(&intervals, &distances, SPEED_OF_SOUND_CM_PER_S);

        let ((interval, _), ()) = block_on(join(resolver.resolve_next(), async {
            // Nothing is published until the interval arrives
            assert!(!distances.is_pending());
            intervals.publish(Interval::from_micros(2000));
        }));

        assert_eq!(interval.as_micros(), 2000);
        assert!(distances.is_pending());
    }
}
