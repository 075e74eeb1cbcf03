use crate::config::PauseWindow;
use async_trait::async_trait;
use rand::Rng;
use std::time::Duration;

/// Waits between page loads so requests do not arrive at a fixed cadence
#[async_trait]
pub trait Delay: Send + Sync {
    async fn pause(&self, window: PauseWindow);
}

/// Sleeps for a uniformly random duration inside the window
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomDelay;

impl RandomDelay {
    /// Draws a duration from `window`; a degenerate window yields its minimum
    pub fn sample(window: PauseWindow) -> Duration {
        let secs = if window.max_secs > window.min_secs {
            rand::thread_rng().gen_range(window.min_secs..=window.max_secs)
        } else {
            window.min_secs
        };
        Duration::try_from_secs_f64(secs.max(0.0)).unwrap_or(Duration::MAX)
    }
}

#[async_trait]
impl Delay for RandomDelay {
    async fn pause(&self, window: PauseWindow) {
        let duration = Self::sample(window);
        ::log::debug!("Pausing for {:.2} seconds", duration.as_secs_f64());
        tokio::time::sleep(duration).await;
    }
}

/// Returns immediately
#[derive(Debug, Default, Clone, Copy)]
pub struct NoDelay;

#[async_trait]
impl Delay for NoDelay {
    async fn pause(&self, _window: PauseWindow) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_samples_stay_inside_window() {
        let window = PauseWindow::new(1.5, 3.0);
        for _ in 0..200 {
            let secs = RandomDelay::sample(window).as_secs_f64();
            assert!((1.5..=3.0).contains(&secs), "{} outside window", secs);
        }
    }

    #[test]
    fn test_degenerate_window() {
        assert_eq!(RandomDelay::sample(PauseWindow::zero()), Duration::ZERO);
        assert_eq!(
            RandomDelay::sample(PauseWindow::new(2.0, 2.0)),
            Duration::from_secs(2)
        );
    }

    #[test]
    fn test_huge_window_saturates_instead_of_panicking() {
        assert_eq!(
            RandomDelay::sample(PauseWindow::new(1e20, 1e20)),
            Duration::MAX
        );
    }

    #[tokio::test]
    async fn test_no_delay_returns_immediately() {
        let start = std::time::Instant::now();
        NoDelay.pause(PauseWindow::new(2.0, 5.0)).await;
        assert!(start.elapsed() < Duration::from_secs(1));
    }
}
