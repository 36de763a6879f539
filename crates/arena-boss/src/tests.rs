#[cfg(test)]
mod tests {
    use glam::Vec2;

    use arena_core::constants::{BOSS_EYE_HEALTH, STAGGER_STEP, TELEGRAPH_FIRE_FRAME};
    use arena_core::enums::{BossPartId, FacingFrame, PartState, TelegraphPhase};
    use arena_core::types::Bounds;

    use crate::encounter::BossEncounter;
    use crate::facing::facing_frame;
    use crate::layout::BossLayout;
    use crate::parts::{crosses_stagger_threshold, BossPart};
    use crate::telegraph::AttackTelegraph;

    fn make_boss() -> BossEncounter {
        BossEncounter::new(BossLayout::at(Vec2::ZERO), BOSS_EYE_HEALTH, STAGGER_STEP)
    }

    /// Eye at the given health without triggering any stagger on the way.
    fn eye_at(health: u32) -> BossPart {
        BossPart::new(BossPartId::EyeRight, health, false)
    }

    // ---- Stagger ----

    #[test]
    fn test_crossing_a_multiple_staggers() {
        let mut eye = eye_at(1050);
        let hit = eye.apply_damage(100, STAGGER_STEP);
        assert_eq!(hit.result.current, 950);
        assert!(hit.stagger_token.is_some());
        assert_eq!(eye.state(), PartState::Staggered);
        assert_eq!(eye.frame(), FacingFrame::Blink);
    }

    #[test]
    fn test_near_a_multiple_does_not_stagger() {
        let mut eye = eye_at(950);
        let hit = eye.apply_damage(50, STAGGER_STEP);
        assert_eq!(hit.result.current, 900);
        assert!(hit.stagger_token.is_none());
        assert_eq!(eye.state(), PartState::Alive);
    }

    #[test]
    fn test_landing_exactly_on_a_multiple_staggers() {
        assert!(crosses_stagger_threshold(6000, 5000, 1000));
        assert!(crosses_stagger_threshold(1100, 1000, 1000));
        assert!(!crosses_stagger_threshold(1000, 950, 1000));
        assert!(!crosses_stagger_threshold(500, 0, 1000), "Death is not a stagger");
        assert!(!crosses_stagger_threshold(500, 500, 1000));
    }

    #[test]
    fn test_staggered_part_still_takes_damage() {
        let mut eye = eye_at(1050);
        eye.apply_damage(100, STAGGER_STEP);
        eye.apply_damage(200, STAGGER_STEP);
        assert_eq!(eye.health().current(), 750);
        assert!(eye.is_staggered());
    }

    #[test]
    fn test_only_latest_token_clears_stagger() {
        let mut eye = eye_at(2100);
        let first = eye.apply_damage(200, STAGGER_STEP).stagger_token.unwrap();
        let second = eye.apply_damage(1000, STAGGER_STEP).stagger_token.unwrap();
        assert_ne!(first, second);

        assert!(!eye.clear_stagger(first), "Stale clear must not unlock");
        assert!(eye.is_staggered());
        assert!(eye.clear_stagger(second));
        assert_eq!(eye.state(), PartState::Alive);
        assert!(!eye.clear_stagger(second), "Clearing twice is a no-op");
    }

    #[test]
    fn test_destroyed_part_ignores_clear_and_facing() {
        let mut eye = eye_at(1050);
        let token = eye.apply_damage(100, STAGGER_STEP).stagger_token.unwrap();
        let hit = eye.apply_damage(5000, STAGGER_STEP);
        assert!(hit.destroyed);
        assert!(!eye.clear_stagger(token));
        assert_eq!(eye.state(), PartState::Destroyed);

        let frame = eye.frame();
        eye.face(&Bounds::new(Vec2::ZERO, Vec2::splat(10.0)), -100.0);
        assert_eq!(eye.frame(), frame);
    }

    // ---- Facing ----

    #[test]
    fn test_facing_frames() {
        let bounds = Bounds::new(Vec2::new(100.0, 0.0), Vec2::new(200.0, 50.0));
        assert_eq!(facing_frame(&bounds, 50.0, false), FacingFrame::LookLeft);
        assert_eq!(facing_frame(&bounds, 350.0, false), FacingFrame::LookRight);
        assert_eq!(facing_frame(&bounds, 200.0, false), FacingFrame::LookDown);
        // Edges count as "below".
        assert_eq!(facing_frame(&bounds, 100.0, false), FacingFrame::LookDown);
        assert_eq!(facing_frame(&bounds, 300.0, false), FacingFrame::LookDown);
    }

    #[test]
    fn test_mirrored_facing_swaps_sides() {
        let bounds = Bounds::new(Vec2::new(100.0, 0.0), Vec2::new(200.0, 50.0));
        assert_eq!(facing_frame(&bounds, 50.0, true), FacingFrame::LookRight);
        assert_eq!(facing_frame(&bounds, 350.0, true), FacingFrame::LookLeft);
        assert_eq!(facing_frame(&bounds, 200.0, true), FacingFrame::LookDown);
    }

    #[test]
    fn test_staggered_eye_keeps_blink_frame() {
        let mut boss = make_boss();
        boss.apply_damage(BossPartId::EyeRight, 1000);
        boss.update_facing(-1000.0);
        assert_eq!(boss.part(BossPartId::EyeRight).frame(), FacingFrame::Blink);
        assert_eq!(boss.part(BossPartId::EyeLeft).frame(), FacingFrame::LookRight);
        assert_eq!(boss.head_frame(), FacingFrame::LookLeft);
    }

    // ---- Aggregate defeat ----

    #[test]
    fn test_one_eye_is_not_defeat() {
        let mut boss = make_boss();
        let hit = boss.apply_damage(BossPartId::EyeLeft, BOSS_EYE_HEALTH);
        assert!(hit.destroyed);
        assert!(!hit.defeated);
        assert!(!boss.is_defeated());
    }

    #[test]
    fn test_both_eyes_defeat_exactly_once() {
        let mut boss = make_boss();
        boss.apply_damage(BossPartId::EyeLeft, BOSS_EYE_HEALTH);
        let hit = boss.apply_damage(BossPartId::EyeRight, BOSS_EYE_HEALTH + 500);
        assert!(hit.defeated);
        assert!(boss.is_defeated());

        let again = boss.apply_damage(BossPartId::EyeRight, 100);
        assert!(!again.defeated);
        assert!(!again.destroyed);
    }

    #[test]
    fn test_full_health_view() {
        let view = make_boss().view();
        assert_eq!(view.parts.len(), 2);
        for part in &view.parts {
            assert_eq!(part.health, 6000);
            assert_eq!(part.max_health, 6000);
            assert_eq!(part.state, PartState::Alive);
        }
        assert!(!view.defeated);
    }

    // ---- Telegraph ----

    #[test]
    fn test_telegraph_phases() {
        let mut telegraph = AttackTelegraph::default();
        assert_eq!(telegraph.phase(), TelegraphPhase::Idle);
        assert!(telegraph.begin(Vec2::ZERO, Vec2::new(5.0, 5.0)));
        assert_eq!(telegraph.phase(), TelegraphPhase::Warning);
        assert!(!telegraph.begin(Vec2::ZERO, Vec2::ONE), "Already warning");

        let mut fired = Vec::new();
        assert!(telegraph.complete_warning(|order| {
            fired.push(order.target);
        }));
        assert_eq!(fired, vec![Vec2::new(5.0, 5.0)]);
        assert_eq!(telegraph.phase(), TelegraphPhase::Idle);
        assert_eq!(telegraph.shots_fired(), 1);
    }

    #[test]
    fn test_cancelled_telegraph_never_fires() {
        let mut telegraph = AttackTelegraph::default();
        telegraph.begin(Vec2::ZERO, Vec2::ONE);
        telegraph.cancel();
        assert!(!telegraph.complete_warning(|_| panic!("must not fire")));
        assert_eq!(telegraph.shots_fired(), 0);
    }

    #[test]
    fn test_head_telegraphs_only_on_fire_frame() {
        let mut boss = make_boss();
        let target = Some(Vec2::new(10.0, 900.0));
        assert!(boss.on_head_frame(0, TELEGRAPH_FIRE_FRAME, target).is_none());
        assert!(boss.on_head_frame(1, TELEGRAPH_FIRE_FRAME, target).is_none());
        assert!(boss.on_head_frame(2, TELEGRAPH_FIRE_FRAME, None).is_none(), "No player");

        let start = boss.on_head_frame(2, TELEGRAPH_FIRE_FRAME, target).unwrap();
        assert_eq!(start.origin, boss.layout().muzzle);
        assert_eq!(start.target, Vec2::new(10.0, 900.0));
        assert_eq!(boss.telegraph_phase(), TelegraphPhase::Warning);
    }

    #[test]
    fn test_defeat_cancels_inflight_telegraph() {
        let mut boss = make_boss();
        boss.on_head_frame(2, TELEGRAPH_FIRE_FRAME, Some(Vec2::ONE));
        boss.apply_damage(BossPartId::EyeLeft, BOSS_EYE_HEALTH);
        boss.apply_damage(BossPartId::EyeRight, BOSS_EYE_HEALTH);
        assert_eq!(boss.telegraph_phase(), TelegraphPhase::Idle);
        assert!(!boss.release_telegraph(|_| panic!("defeated boss must not fire")));
        assert!(boss.on_head_frame(2, TELEGRAPH_FIRE_FRAME, Some(Vec2::ONE)).is_none());
    }

    // ---- Layout ----

    #[test]
    fn test_layout_centres_boss() {
        let layout = BossLayout::for_arena(1600.0, 1200.0);
        assert_eq!(layout.origin(), Vec2::new(800.0 - 192.0, 600.0 - 228.0 - 100.0));
        assert_eq!(layout.body.size, Vec2::new(384.0, 456.0));
        assert_eq!(layout.muzzle, layout.origin() + Vec2::new(352.0, 95.0));
        assert!(BossLayout::eye_flipped(BossPartId::EyeLeft));
        assert!(!BossLayout::eye_flipped(BossPartId::EyeRight));
    }
}
