//! Round state machine
//!
//! One round at a time. `submit_bet` enqueues a bet and `tick` drives the
//! fade-out, reveal, settlement and idle wave from the frame clock. All
//! player-facing effects go out through the injected [`Notifier`].

use std::collections::VecDeque;
use std::sync::Arc;

use gs_anim::{FadeOut, RevealAnimator, RevealEvent, WaveSlot, WaveTicker};
use gs_core::{
    GameConfig, GsError, GsResult, Outcome, OutcomeGenerator, PayoutTable, RoundResult, Tint,
};
use gs_event::{LogKind, Notifier, RoundSignal};
use serde::Serialize;

use crate::session::Session;
use crate::stats::SessionStats;
use crate::view::{BannerView, ResultBanner, SlotView};

/// Observable machine state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum RoundState {
    /// Nothing running, nothing animating
    Idle,
    /// Previous round's symbols fading before the next bet is validated
    FadingOut,
    /// Slots revealing; settlement follows the last completion
    Revealing,
    /// Settled; symbols bob until the next bet
    Waving,
}

impl RoundState {
    /// A round is in flight; new bets queue
    pub fn is_busy(&self) -> bool {
        matches!(self, RoundState::FadingOut | RoundState::Revealing)
    }
}

#[derive(Debug)]
struct ActiveRound {
    round_id: u64,
    bet: f64,
    outcome: Outcome,
    reveal: RevealAnimator,
}

#[derive(Debug)]
enum Phase {
    Idle,
    FadingOut { fade: FadeOut, bet: f64 },
    Revealing(ActiveRound),
    Waving,
}

/// Round engine for one session
pub struct RoundMachine {
    config: GameConfig,
    table: PayoutTable,
    generator: OutcomeGenerator,
    notifier: Arc<dyn Notifier>,
    session: Session,
    phase: Phase,
    pending: VecDeque<f64>,
    forced: Option<Outcome>,

    // Presentation state
    shown: Option<Outcome>,
    offsets: Vec<f64>,
    highlighted: Vec<bool>,
    tints: Vec<Tint>,
    wave: WaveSlot,
    banner: Option<ResultBanner>,
    last_result: Option<RoundResult>,
    now_ms: f64,
}

impl RoundMachine {
    /// Create a machine and publish the starting balance
    pub fn new(
        config: GameConfig,
        notifier: Arc<dyn Notifier>,
        generator: OutcomeGenerator,
    ) -> GsResult<Self> {
        config.validate()?;

        let slot_count = config.slot_count;
        let machine = Self {
            table: config.payout_table(),
            session: Session::new(config.starting_balance),
            config,
            generator,
            notifier,
            phase: Phase::Idle,
            pending: VecDeque::new(),
            forced: None,
            shown: None,
            offsets: vec![0.0; slot_count],
            highlighted: vec![false; slot_count],
            tints: vec![Tint::NEUTRAL; slot_count],
            wave: WaveSlot::new(),
            banner: None,
            last_result: None,
            now_ms: 0.0,
        };

        log::info!(
            "[Round] Session opened: {} slots, balance {:.2}, {} timing",
            slot_count,
            machine.session.balance(),
            machine.config.timing.profile.display_name()
        );
        machine.notifier.publish_balance(machine.session.balance());
        Ok(machine)
    }

    // ═══════════════════════════════════════════════════════════════════════════
    // INPUT
    // ═══════════════════════════════════════════════════════════════════════════

    /// Submit a bet at `now_ms`.
    ///
    /// A bet that arrives while a round is in flight waits until the machine is
    /// idle again. Malformed amounts are refused outright and publish nothing.
    pub fn submit_bet(&mut self, bet: f64, now_ms: f64) -> GsResult<()> {
        if !bet.is_finite() || bet <= 0.0 {
            return Err(GsError::InvalidInput(format!(
                "bet must be a finite positive amount, got {bet}"
            )));
        }

        if self.state().is_busy() {
            log::debug!(
                "[Round] Bet {:.2} queued ({} waiting)",
                bet,
                self.pending.len() + 1
            );
        }
        self.pending.push_back(bet);
        self.tick(now_ms);
        Ok(())
    }

    /// Use `outcome` for the next accepted round instead of drawing one
    pub fn force_next_outcome(&mut self, outcome: Outcome) -> GsResult<()> {
        if outcome.len() != self.config.slot_count {
            return Err(GsError::InvalidInput(format!(
                "forced outcome has {} symbols, machine has {} slots",
                outcome.len(),
                self.config.slot_count
            )));
        }
        self.forced = Some(outcome);
        Ok(())
    }

    // ═══════════════════════════════════════════════════════════════════════════
    // FRAME LOOP
    // ═══════════════════════════════════════════════════════════════════════════

    /// Advance everything to `now_ms`. Call once per frame.
    pub fn tick(&mut self, now_ms: f64) {
        self.now_ms = now_ms;

        loop {
            self.advance(now_ms);
            if self.state().is_busy() {
                break;
            }
            let Some(bet) = self.pending.pop_front() else {
                break;
            };
            self.begin_round(bet, now_ms);
        }

        if let Some(offsets) = self.wave.tick(now_ms) {
            self.offsets = offsets;
        }
    }

    fn advance(&mut self, now_ms: f64) {
        if let Phase::FadingOut { fade, bet } = &mut self.phase {
            if fade.tick(now_ms) {
                let bet = *bet;
                self.phase = Phase::Idle;
                self.shown = None;
                self.offsets.fill(0.0);
                self.notifier.publish_signal(RoundSignal::FadeOutCompleted);
                self.start_round(bet, now_ms);
            }
        }

        if let Phase::Revealing(round) = &mut self.phase {
            let events = round.reveal.tick(now_ms);
            let complete = round.reveal.is_complete();

            for event in events {
                let signal = match event {
                    RevealEvent::Started(slot) => {
                        log::debug!("[Reveal] Slot {slot} started");
                        RoundSignal::SpawnStarted { slot }
                    }
                    RevealEvent::Completed(slot) => {
                        log::debug!("[Reveal] Slot {slot} completed");
                        RoundSignal::SpawnCompleted { slot }
                    }
                };
                self.notifier.publish_signal(signal);
            }

            if complete {
                self.settle(now_ms);
            }
        }
    }

    // ═══════════════════════════════════════════════════════════════════════════
    // ROUND FLOW
    // ═══════════════════════════════════════════════════════════════════════════

    /// Tear down the previous round's visuals, fading if symbols are shown
    fn begin_round(&mut self, bet: f64, now_ms: f64) {
        self.stop_wave();
        self.banner = None;
        self.highlighted.fill(false);
        self.tints.fill(Tint::NEUTRAL);

        if self.shown.is_some() {
            self.phase = Phase::FadingOut {
                fade: FadeOut::new(now_ms, self.config.timing.fade_out_ms),
                bet,
            };
            self.notifier.publish_signal(RoundSignal::FadeOutStarted);
        } else {
            self.start_round(bet, now_ms);
        }
    }

    fn start_round(&mut self, bet: f64, now_ms: f64) {
        if let Err(err) = self.try_start_round(bet, now_ms) {
            self.phase = Phase::Idle;
            match err {
                GsError::InsufficientFunds { bet, balance } => {
                    log::info!("[Round] Bet {bet:.2} rejected, balance {balance:.2}");
                    self.session.record_rejection();
                    self.notifier
                        .publish_log(LogKind::Error.entry("Insufficient balance"));
                }
                other => {
                    log::error!("[Round] Could not start round: {other}");
                    self.notifier.publish_log(LogKind::Error.entry(other.to_string()));
                }
            }
        }
    }

    fn try_start_round(&mut self, bet: f64, now_ms: f64) -> GsResult<()> {
        self.session.ensure_funds(bet)?;
        let outcome = self.draw_outcome()?;
        let round_id = self.session.debit(bet)?;

        self.notifier.publish_balance(self.session.balance());
        self.notifier.publish_bet_state(bet);
        self.notifier
            .publish_signal(RoundSignal::RoundStarted { round_id, bet });

        log::info!("[Round] #{round_id} started: bet {bet:.2}, outcome {outcome}");

        let slot_count = outcome.len();
        self.shown = Some(outcome.clone());
        self.offsets.fill(0.0);
        self.phase = Phase::Revealing(ActiveRound {
            round_id,
            bet,
            outcome,
            reveal: RevealAnimator::new(slot_count, now_ms, &self.config.timing),
        });
        Ok(())
    }

    fn draw_outcome(&mut self) -> GsResult<Outcome> {
        match self.forced.take() {
            Some(outcome) => Ok(outcome),
            None => self.generator.generate(self.config.slot_count),
        }
    }

    /// Evaluate, pay, start the wave
    fn settle(&mut self, now_ms: f64) {
        let Phase::Revealing(round) = std::mem::replace(&mut self.phase, Phase::Idle) else {
            return;
        };
        let ActiveRound {
            round_id,
            bet,
            outcome,
            ..
        } = round;

        self.notifier
            .publish_signal(RoundSignal::RevealCompleted { round_id });

        let eval = self.table.evaluate(&outcome, bet);

        if eval.is_win() {
            self.session.credit(eval.winnings);
            self.notifier.publish_balance(self.session.balance());
            self.notifier
                .publish_log(LogKind::Success.entry(format!("You won {:.2}$", eval.winnings)));
        } else {
            self.notifier
                .publish_log(LogKind::Error.entry(format!("You lost {bet:.2}$")));
        }

        let result = RoundResult::settle(round_id, bet, outcome, &eval, self.session.balance());

        for &slot in &result.highlighted {
            if let Some(symbol) = result.outcome.get(slot) {
                self.highlighted[slot] = true;
                self.tints[slot] = symbol.tint();
            }
        }
        if result.is_win {
            self.notifier.publish_signal(RoundSignal::SuccessCue);
        }

        let banner_amount = if result.is_win { result.winnings } else { -bet };
        self.banner = Some(ResultBanner::new(
            banner_amount,
            result.is_win,
            now_ms,
            self.config.timing.banner_duration_ms,
        ));

        log::info!(
            "[Round] #{} settled: x{} ({}), balance {:.2}",
            round_id,
            result.multiplier,
            result.rule.as_deref().unwrap_or("no win"),
            result.balance_after
        );

        self.session.record(&result);
        self.notifier
            .publish_signal(RoundSignal::Settled(result.clone()));
        self.last_result = Some(result);

        self.start_wave(now_ms);
        self.phase = Phase::Waving;
    }

    fn start_wave(&mut self, now_ms: f64) {
        self.stop_wave();
        let wave = WaveTicker::start(now_ms, self.config.slot_count, &self.config.timing);
        if let Err(rejected) = self.wave.install(wave) {
            rejected.dispose();
            return;
        }
        self.notifier.publish_signal(RoundSignal::WaveStarted);
    }

    fn stop_wave(&mut self) {
        if self.wave.stop() {
            self.notifier.publish_signal(RoundSignal::WaveStopped);
        }
    }

    // ═══════════════════════════════════════════════════════════════════════════
    // QUERIES
    // ═══════════════════════════════════════════════════════════════════════════

    pub fn state(&self) -> RoundState {
        match self.phase {
            Phase::Idle => RoundState::Idle,
            Phase::FadingOut { .. } => RoundState::FadingOut,
            Phase::Revealing(_) => RoundState::Revealing,
            Phase::Waving => RoundState::Waving,
        }
    }

    pub fn balance(&self) -> f64 {
        self.session.balance()
    }

    pub fn stats(&self) -> &SessionStats {
        self.session.stats()
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Most recently settled round
    pub fn last_result(&self) -> Option<&RoundResult> {
        self.last_result.as_ref()
    }

    /// Bets waiting behind the round in flight
    pub fn pending_bets(&self) -> usize {
        self.pending.len()
    }

    pub fn is_wave_running(&self) -> bool {
        self.wave.is_running()
    }

    /// Time of the last tick
    pub fn now_ms(&self) -> f64 {
        self.now_ms
    }

    /// Visual state of every slot at the last tick
    pub fn slots(&self) -> Vec<SlotView> {
        let now = self.now_ms;
        let Some(outcome) = &self.shown else {
            return vec![SlotView::empty(); self.config.slot_count];
        };

        (0..self.config.slot_count)
            .map(|i| {
                let (offset_y, opacity) = match &self.phase {
                    Phase::Revealing(round) => round
                        .reveal
                        .frame(i, now)
                        .map_or((0.0, 0.0), |f| (f.offset_y, f.opacity)),
                    Phase::FadingOut { fade, .. } => (self.offsets[i], fade.opacity(now)),
                    Phase::Idle | Phase::Waving => (self.offsets[i], 1.0),
                };
                SlotView {
                    symbol: outcome.get(i),
                    offset_y,
                    opacity,
                    highlighted: self.highlighted[i],
                    tint: self.tints[i],
                }
            })
            .collect()
    }

    /// Result banner at the last tick, if one is showing
    pub fn banner(&self) -> Option<BannerView> {
        self.banner.as_ref().map(|b| b.view_at(self.now_ms))
    }
}

impl std::fmt::Debug for RoundMachine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RoundMachine")
            .field("state", &self.state())
            .field("balance", &self.session.balance())
            .field("pending", &self.pending)
            .field("now_ms", &self.now_ms)
            .finish_non_exhaustive()
    }
}
