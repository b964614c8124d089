//! Decorative confetti burst.
//!
//! Purely additive: a burst spawns a fixed number of short-lived particles
//! with randomized position, size and lifetime, and each piece self-removes
//! once its lifetime elapses. There is nothing to tear down when the flag is
//! off beyond not spawning.

use rand::Rng;

use crate::storage::ConfettiConfig;
use crate::surface::{ConfettiPiece, Surface};

/// Spawn one burst. Returns the number of pieces added.
pub fn spawn<R: Rng>(
    surface: &mut Surface,
    cfg: &ConfettiConfig,
    rng: &mut R,
    now_ms: u64,
) -> usize {
    if cfg.glyphs.is_empty() {
        return 0;
    }
    let spread = cfg.max_lifetime_ms.saturating_sub(cfg.min_lifetime_ms);
    for i in 0..cfg.count {
        let lifetime_ms = cfg.min_lifetime_ms
            + if spread > 0 {
                rng.gen_range(0..=spread)
            } else {
                0
            };
        surface.confetti.push(ConfettiPiece {
            glyph: cfg.glyphs[i % cfg.glyphs.len()].clone(),
            left_pct: 20.0 + rng.gen::<f64>() * 60.0,
            top_pct: 10.0 + rng.gen::<f64>() * 10.0,
            font_px: 14.0 + rng.gen::<f64>() * 20.0,
            expires_at_ms: now_ms + lifetime_ms,
        });
    }
    cfg.count
}

/// Drop pieces whose lifetime has elapsed.
pub fn sweep(surface: &mut Surface, now_ms: u64) {
    surface.confetti.retain(|p| p.expires_at_ms > now_ms);
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn burst_spawns_configured_count() {
        let mut surface = Surface::default();
        let mut rng = Pcg32::seed_from_u64(1);
        let n = spawn(&mut surface, &ConfettiConfig::default(), &mut rng, 0);
        assert_eq!(n, 20);
        assert_eq!(surface.confetti.len(), 20);
    }

    #[test]
    fn pieces_stay_within_ranges() {
        let mut surface = Surface::default();
        let mut rng = Pcg32::seed_from_u64(2);
        spawn(&mut surface, &ConfettiConfig::default(), &mut rng, 1_000);
        for piece in &surface.confetti {
            assert!((20.0..=80.0).contains(&piece.left_pct));
            assert!((10.0..=20.0).contains(&piece.top_pct));
            assert!((14.0..=34.0).contains(&piece.font_px));
            assert!((2_500..=3_200).contains(&piece.expires_at_ms));
        }
    }

    #[test]
    fn glyphs_cycle_by_index() {
        let mut surface = Surface::default();
        let mut rng = Pcg32::seed_from_u64(3);
        let cfg = ConfettiConfig::default();
        spawn(&mut surface, &cfg, &mut rng, 0);
        assert_eq!(surface.confetti[0].glyph, cfg.glyphs[0]);
        assert_eq!(surface.confetti[4].glyph, cfg.glyphs[0]);
        assert_eq!(surface.confetti[5].glyph, cfg.glyphs[1]);
    }

    #[test]
    fn sweep_removes_expired_only() {
        let mut surface = Surface::default();
        let mut rng = Pcg32::seed_from_u64(4);
        let cfg = ConfettiConfig::default();
        spawn(&mut surface, &cfg, &mut rng, 0);
        sweep(&mut surface, cfg.min_lifetime_ms - 1);
        assert_eq!(surface.confetti.len(), 20);
        sweep(&mut surface, cfg.max_lifetime_ms + 1);
        assert!(surface.confetti.is_empty());
    }
}
