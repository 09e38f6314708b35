use std::sync::Arc;

use crate::*;

struct TestHarness {
    game: GameState,
    last_tick: Option<TickOutcome>,
}

fn config(
    blinds: &[u64],
    chip_increment: u64,
    period: (u32, u32),
) -> Arc<PokerConfig> {
    let params = ScheduleParams {
        start_value: blinds[0],
        level_count: blinds.len(),
        switch_level_index: 1,
        scale_factor: 1.5,
        chip_increment,
    };
    let period = LevelDuration::new(period.0, period.1).unwrap();
    Arc::new(PokerConfig::with_blinds(params, period, blinds.to_vec()).unwrap())
}

fn standard_config() -> Arc<PokerConfig> {
    config(&[100, 200, 300, 400], 50, (1, 0))
}

impl TestHarness {
    fn new(config: Arc<PokerConfig>) -> Self {
        Self {
            game: GameState::new(config),
            last_tick: None,
        }
    }

    fn at(
        mut self,
        level: usize,
        minutes: u32,
        seconds: u32,
    ) -> Self {
        self.game.level = level;
        self.game.remaining = LevelDuration::new(minutes, seconds).unwrap();
        self
    }

    fn tick(&mut self) -> &mut Self {
        self.last_tick = Some(self.game.tick());
        self
    }

    fn ticks(
        &mut self,
        count: usize,
    ) -> &mut Self {
        for _ in 0..count {
            self.tick();
        }
        self
    }

    fn next(&mut self) -> &mut Self {
        self.game.next_level();
        self
    }

    fn prev(&mut self) -> &mut Self {
        self.game.prev_level();
        self
    }

    #[track_caller]
    fn check_clock(
        &self,
        minutes: u8,
        seconds: u8,
    ) -> &Self {
        let remaining = self.game.remaining();
        assert_eq!(
            (remaining.minutes(), remaining.seconds()),
            (minutes, seconds),
            "Expected clock {}:{:02}, got {}",
            minutes,
            seconds,
            remaining
        );
        self
    }

    #[track_caller]
    fn check_level(
        &self,
        expected: usize,
    ) -> &Self {
        assert_eq!(
            self.game.level(),
            expected,
            "Expected level {}, got {}",
            expected,
            self.game.level()
        );
        self
    }

    #[track_caller]
    fn check_last_tick(
        &self,
        expected: TickOutcome,
    ) -> &Self {
        assert_eq!(self.last_tick, Some(expected), "Unexpected tick outcome");
        self
    }
}

#[test]
fn test_new_game_starts_at_level_one_with_full_period() {
    let t = TestHarness::new(standard_config());
    t.check_level(1).check_clock(1, 0);
}

#[test]
fn test_sixty_ticks_drain_a_minute() {
    let mut t = TestHarness::new(standard_config());

    t.ticks(59).check_clock(0, 1).check_level(1);
    t.tick().check_clock(0, 0).check_level(1).check_last_tick(TickOutcome::Counted);

    // 61st tick rolls over into the next level
    t.tick()
        .check_level(2)
        .check_clock(1, 0)
        .check_last_tick(TickOutcome::LevelAdvanced { level: 2 });
}

#[test]
fn test_tick_borrows_a_minute() {
    let mut t = TestHarness::new(standard_config()).at(1, 3, 0);
    t.tick().check_clock(2, 59);
    t.tick().check_clock(2, 58);
}

#[test]
fn test_expiry_on_final_level_restarts_in_place() {
    let mut t = TestHarness::new(standard_config()).at(4, 0, 0);
    t.tick()
        .check_level(4)
        .check_clock(1, 0)
        .check_last_tick(TickOutcome::LevelRestarted);
}

#[test]
fn test_navigation_clamps_and_restarts_countdown() {
    let mut t = TestHarness::new(standard_config()).at(1, 0, 17);
    t.prev().check_level(1).check_clock(1, 0);

    let mut t = TestHarness::new(standard_config()).at(4, 0, 17);
    t.next().check_level(4).check_clock(1, 0);

    let mut t = TestHarness::new(standard_config()).at(2, 0, 5);
    t.next().check_level(3).check_clock(1, 0);
    t.ticks(10).check_clock(0, 50);
    t.prev().check_level(2).check_clock(1, 0);
}

#[test]
fn test_navigation_reports_movement() {
    let mut game = GameState::new(standard_config());
    assert!(!game.prev_level());
    assert!(game.next_level());
    assert!(game.next_level());
    assert!(game.next_level());
    assert!(!game.next_level());
    assert!(game.is_final_level());
}

#[test]
fn test_reset_level() {
    let mut t = TestHarness::new(standard_config()).at(3, 0, 12);
    t.game.reset_level();
    t.check_level(1).check_clock(1, 0);
}

#[test]
fn test_update_config_keeps_time_in_flight() {
    let mut t = TestHarness::new(standard_config()).at(2, 0, 42);
    t.game.update_config(config(&[100, 200, 400, 800], 50, (15, 0)), false);
    t.check_level(2).check_clock(0, 42);
    assert_eq!(t.game.config().big_blind(3), Some(400));
}

#[test]
fn test_update_config_resets_timer_on_request() {
    let mut t = TestHarness::new(standard_config()).at(2, 0, 42);
    t.game.update_config(config(&[100, 200, 400, 800], 50, (15, 30)), true);
    t.check_level(2).check_clock(15, 30);
}

#[test]
fn test_update_config_clamps_level_to_shorter_schedule() {
    let mut t = TestHarness::new(standard_config()).at(4, 0, 30);
    t.game.update_config(config(&[100, 200], 50, (1, 0)), false);
    t.check_level(2).check_clock(0, 30);
    assert!(t.game.is_final_level());
}

#[test]
fn test_snapshot_reports_current_and_next_blinds() {
    let t = TestHarness::new(standard_config()).at(2, 0, 9);
    let snapshot = t.game.snapshot().unwrap();
    assert_eq!(
        snapshot,
        LevelSnapshot {
            level: 2,
            minute: 0,
            second: 9,
            big_blind: 200,
            small_blind: 100,
            next_big_blind: Some(300),
            next_small_blind: Some(150),
        }
    );
}

#[test]
fn test_snapshot_on_final_level_has_no_next_blinds() {
    let t = TestHarness::new(standard_config()).at(4, 1, 0);
    let snapshot = t.game.snapshot().unwrap();
    assert_eq!(snapshot.big_blind, 400);
    assert_eq!(snapshot.next_big_blind, None);
    assert_eq!(snapshot.next_small_blind, None);
}

#[test]
fn test_snapshot_checks_small_blind_against_chip_increment() {
    let ok = TestHarness::new(config(&[100, 200], 50, (1, 0)));
    assert_eq!(ok.game.snapshot().unwrap().small_blind, 50);

    let misaligned = TestHarness::new(config(&[100, 200], 30, (1, 0)));
    assert_eq!(
        misaligned.game.snapshot(),
        Err(StateError::SmallBlindMisaligned {
            level: 1,
            small_blind: 50,
            chip_increment: 30,
        })
    );

    let too_small = TestHarness::new(config(&[1, 200], 50, (1, 0)));
    assert_eq!(
        too_small.game.snapshot(),
        Err(StateError::SmallBlindBelowIncrement {
            level: 1,
            small_blind: 0,
            chip_increment: 50,
        })
    );
}

#[test]
fn test_generated_schedule_drives_the_clock() {
    let params = ScheduleParams {
        start_value: 200,
        level_count: 15,
        switch_level_index: 6,
        scale_factor: 1.2,
        chip_increment: 50,
    };
    let config = PokerConfig::generated(params, LevelDuration::new(0, 2).unwrap()).unwrap();
    let mut t = TestHarness::new(Arc::new(config));

    // 3 ticks per level: 0:02 -> 0:01 -> 0:00 -> next level
    t.ticks(3 * 7).check_level(8);
    let snapshot = t.game.snapshot().unwrap();
    assert_eq!(snapshot.big_blind, 1700);
    assert_eq!(snapshot.small_blind, 850);
    assert_eq!(snapshot.next_big_blind, Some(2000));
}
