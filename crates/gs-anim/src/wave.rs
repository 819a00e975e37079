//! Idle wave
//!
//! After a round settles every slot bobs on a sine wave, phase-shifted by its
//! index: `offset_i = sin(elapsed / period + i) × amplitude`. The wave runs
//! until the next round begins and is then disposed. At most one wave is ever
//! live; [`WaveSlot`] owns it.

use gs_core::TimingConfig;

/// A running wave
#[derive(Debug)]
pub struct WaveTicker {
    start_ms: f64,
    slot_count: usize,
    period_ms: f64,
    amplitude: f64,
    ticks: u64,
}

impl WaveTicker {
    /// Start a wave at `now_ms`
    pub fn start(now_ms: f64, slot_count: usize, timing: &TimingConfig) -> Self {
        Self {
            start_ms: now_ms,
            slot_count,
            period_ms: timing.wave_period_ms,
            amplitude: timing.wave_amplitude,
            ticks: 0,
        }
    }

    /// Vertical offset of one slot at `now_ms`
    pub fn offset(&self, slot: usize, now_ms: f64) -> f64 {
        let elapsed = (now_ms - self.start_ms).max(0.0);
        let phase = if self.period_ms > 0.0 {
            elapsed / self.period_ms
        } else {
            0.0
        };
        (phase + slot as f64).sin() * self.amplitude
    }

    /// Offsets for every slot
    pub fn tick(&mut self, now_ms: f64) -> Vec<f64> {
        self.ticks += 1;
        (0..self.slot_count)
            .map(|i| self.offset(i, now_ms))
            .collect()
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn start_ms(&self) -> f64 {
        self.start_ms
    }

    /// Stop the wave. Consumes the ticker so it cannot be advanced again.
    pub fn dispose(self) {
        log::debug!(
            "[Wave] Disposed after {} ticks (started at {:.0}ms)",
            self.ticks,
            self.start_ms
        );
    }
}

/// Holder for the single live wave
#[derive(Debug, Default)]
pub struct WaveSlot {
    active: Option<WaveTicker>,
}

impl WaveSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Install a wave. Fails, handing the wave back, while another is live.
    pub fn install(&mut self, wave: WaveTicker) -> Result<(), WaveTicker> {
        if self.active.is_some() {
            return Err(wave);
        }
        self.active = Some(wave);
        Ok(())
    }

    /// Remove the live wave without disposing it
    pub fn take(&mut self) -> Option<WaveTicker> {
        self.active.take()
    }

    /// Advance the live wave, if any
    pub fn tick(&mut self, now_ms: f64) -> Option<Vec<f64>> {
        self.active.as_mut().map(|wave| wave.tick(now_ms))
    }

    /// Dispose the live wave; returns whether one was running
    pub fn stop(&mut self) -> bool {
        match self.active.take() {
            Some(wave) => {
                wave.dispose();
                true
            }
            None => false,
        }
    }

    pub fn is_running(&self) -> bool {
        self.active.is_some()
    }

    pub fn current(&self) -> Option<&WaveTicker> {
        self.active.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wave_offsets() {
        let timing = TimingConfig::normal();
        let mut wave = WaveTicker::start(1000.0, 7, &timing);

        let offsets = wave.tick(1000.0);
        assert_eq!(offsets.len(), 7);
        assert_eq!(offsets[0], 0.0);
        assert_eq!(offsets[1], 1.0f64.sin() * 10.0);

        // 250ms elapsed → phase 0.5
        assert_eq!(wave.offset(2, 1250.0), 2.5f64.sin() * 10.0);
        assert!(wave.tick(5000.0).iter().all(|o| o.abs() <= 10.0));
        assert_eq!(wave.ticks(), 2);
    }

    #[test]
    fn test_single_live_wave() {
        let timing = TimingConfig::normal();
        let mut slot = WaveSlot::new();
        assert!(!slot.is_running());
        assert!(slot.tick(0.0).is_none());

        assert!(slot.install(WaveTicker::start(0.0, 7, &timing)).is_ok());
        let rejected = slot.install(WaveTicker::start(10.0, 7, &timing));
        assert_eq!(rejected.map_err(|w| w.start_ms()), Err(10.0));
        assert_eq!(slot.current().map(WaveTicker::start_ms), Some(0.0));

        assert!(slot.tick(16.0).is_some());
        assert!(slot.stop());
        assert!(!slot.is_running());
        assert!(!slot.stop());
    }

    #[test]
    fn test_take_then_reinstall() {
        let timing = TimingConfig::normal();
        let mut slot = WaveSlot::new();
        slot.install(WaveTicker::start(0.0, 3, &timing)).unwrap();

        let wave = slot.take().unwrap();
        assert!(!slot.is_running());
        assert!(slot.install(wave).is_ok());
    }
}
