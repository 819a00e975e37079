//! Per-frame visual state handed to presentation

use gs_anim::{Easing, Tween};
use gs_core::{Symbol, Tint};
use serde::Serialize;

/// What one slot shows this frame
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SlotView {
    /// `None` while the slot is empty
    pub symbol: Option<Symbol>,
    pub offset_y: f64,
    pub opacity: f64,
    pub highlighted: bool,
    pub tint: Tint,
}

impl SlotView {
    /// Empty slot, neutral tint
    pub fn empty() -> Self {
        Self {
            symbol: None,
            offset_y: 0.0,
            opacity: 0.0,
            highlighted: false,
            tint: Tint::NEUTRAL,
        }
    }
}

impl Default for SlotView {
    fn default() -> Self {
        Self::empty()
    }
}

/// Result banner snapshot
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BannerView {
    pub text: String,
    pub opacity: f64,
    pub is_win: bool,
}

/// Count-up banner shown after settlement.
///
/// The displayed amount runs from 0 to the winnings (or the lost stake) while
/// the banner fades in.
#[derive(Debug, Clone)]
pub struct ResultBanner {
    is_win: bool,
    count_up: Tween,
    fade_in: Tween,
}

impl ResultBanner {
    pub fn new(amount: f64, is_win: bool, start_ms: f64, duration_ms: f64) -> Self {
        Self {
            is_win,
            count_up: Tween::new(start_ms, duration_ms, 0.0, amount.abs()),
            fade_in: Tween::new(start_ms, duration_ms, 0.0, 1.0).with_easing(Easing::EaseOutQuad),
        }
    }

    /// Amount shown at `now_ms`, never negative
    pub fn amount_at(&self, now_ms: f64) -> f64 {
        self.count_up.value_at(now_ms)
    }

    pub fn text_at(&self, now_ms: f64) -> String {
        let sign = if self.is_win { '+' } else { '-' };
        format!("{sign}{:.2}$", self.amount_at(now_ms))
    }

    pub fn view_at(&self, now_ms: f64) -> BannerView {
        BannerView {
            text: self.text_at(now_ms),
            opacity: self.fade_in.value_at(now_ms),
            is_win: self.is_win,
        }
    }

    pub fn is_win(&self) -> bool {
        self.is_win
    }

    pub fn is_settled_at(&self, now_ms: f64) -> bool {
        now_ms >= self.count_up.end_ms()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_win_banner_counts_up() {
        let banner = ResultBanner::new(20.0, true, 1000.0, 1000.0);
        assert_eq!(banner.text_at(1000.0), "+0.00$");
        assert_eq!(banner.text_at(1500.0), "+10.00$");
        assert_eq!(banner.text_at(2000.0), "+20.00$");
        assert!(banner.is_settled_at(2000.0));

        let view = banner.view_at(3000.0);
        assert_eq!(view.opacity, 1.0);
        assert!(view.is_win);
    }

    #[test]
    fn test_loss_banner() {
        let banner = ResultBanner::new(-5.0, false, 0.0, 1000.0);
        assert_eq!(banner.view_at(0.0).opacity, 0.0);
        assert_eq!(banner.text_at(250.0), "-1.25$");
        assert_eq!(banner.text_at(5000.0), "-5.00$");
    }

    #[test]
    fn test_instant_banner() {
        let banner = ResultBanner::new(3.0, true, 10.0, 0.0);
        assert_eq!(banner.text_at(10.0), "+3.00$");
    }

    #[test]
    fn test_empty_slot() {
        let slot = SlotView::default();
        assert_eq!(slot.symbol, None);
        assert_eq!(slot.tint, Tint::NEUTRAL);
        assert!(!slot.highlighted);
    }
}
