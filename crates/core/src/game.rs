//! Game engine: owns snake, food, score and direction.
//!
//! The engine is a plain owned value with no globals; the control loop
//! holds it by reference and drives it once per tick.

use crate::food::Food;
use crate::grid;
use crate::rng::SimpleRng;
use crate::snake::Snake;
use crate::types::{Direction, Position, CELL_SIZE, SCREEN_HEIGHT, SCREEN_WIDTH};

/// Notable outcome of the last `step` (consumed by the presentation
/// layer, e.g. to ring the eat cue).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    FoodEaten,
}

/// Complete game state.
#[derive(Debug, Clone)]
pub struct Game {
    snake: Snake,
    food: Food,
    direction: Direction,
    score: u32,
    /// Movement step per tick, equal to the cell size.
    speed: i32,
    width: i32,
    height: i32,
    rng: SimpleRng,
    last_event: Option<GameEvent>,
}

impl Game {
    /// New game on the standard 1200x800 screen.
    pub fn new(seed: u32) -> Self {
        Self::with_dimensions(seed, SCREEN_WIDTH, SCREEN_HEIGHT)
    }

    /// New game on a custom screen. Dimensions should be multiples of
    /// the cell size for clean wrapping; wrap arithmetic tolerates
    /// anything positive.
    pub fn with_dimensions(seed: u32, width: i32, height: i32) -> Self {
        Self {
            snake: Snake::new(Self::center(width, height)),
            food: Food::new(),
            direction: Direction::Up,
            score: 0,
            speed: CELL_SIZE,
            width,
            height,
            rng: SimpleRng::new(seed),
            last_event: None,
        }
    }

    fn center(width: i32, height: i32) -> Position {
        Position::new(width / 2, height / 2)
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn food(&self) -> &Food {
        &self.food
    }

    /// Mutable food access, used by tests to pin exact cells.
    pub fn food_mut(&mut self) -> &mut Food {
        &mut self.food
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    /// Apply a direction intent. Filtering (anti-reversal, per-tick
    /// latch) is the input mapper's job; the engine takes what it gets.
    pub fn set_direction(&mut self, direction: Direction) {
        self.direction = direction;
    }

    /// Advance the snake one cell in the current direction.
    ///
    /// The new head is pushed first and the tail popped only when no
    /// food was eaten, so the body holds at least two segments at pop
    /// time and can never shrink to empty.
    pub fn step(&mut self) {
        let head = self.snake.head();
        let (dx, dy) = self.direction.delta();
        let new_head = Position::new(
            grid::wrap(head.x + dx * self.speed, self.width),
            grid::wrap(head.y + dy * self.speed, self.height),
        );
        self.snake.push_head(new_head);

        let ate = self
            .food
            .position()
            .is_some_and(|f| grid::rects_overlap(new_head, f, CELL_SIZE));

        if ate {
            self.food.clear();
            self.score += 1;
            self.last_event = Some(GameEvent::FoodEaten);
        } else {
            self.snake.pop_tail();
        }
    }

    /// True iff the head occupies a non-head body cell. Pure query.
    pub fn check_self_collision(&self) -> bool {
        self.snake.hits_self()
    }

    /// Respawn the food if it was eaten. Idempotent when already set.
    pub fn ensure_food(&mut self) {
        if !self.food.is_set() {
            self.food.place(&mut self.rng, self.width, self.height);
        }
    }

    /// Restore the initial state in place: single segment at the screen
    /// center, heading Up, no food, score zero. The rng keeps its
    /// sequence so restarts do not replay the same food run.
    pub fn reset(&mut self) {
        self.snake = Snake::new(Self::center(self.width, self.height));
        self.direction = Direction::Up;
        self.food.clear();
        self.score = 0;
        self.last_event = None;
    }

    /// Take and clear the last step event.
    pub fn take_last_event(&mut self) -> Option<GameEvent> {
        self.last_event.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game_with_food(seed: u32, food: Position) -> Game {
        let mut game = Game::new(seed);
        game.food_mut().set(food);
        game
    }

    #[test]
    fn test_new_game_initial_state() {
        let game = Game::new(12345);

        assert_eq!(game.snake().len(), 1);
        assert_eq!(game.snake().head(), Position::new(600, 400));
        assert_eq!(game.direction(), Direction::Up);
        assert!(!game.food().is_set());
        assert_eq!(game.score(), 0);
    }

    #[test]
    fn test_step_moves_one_cell_up() {
        let mut game = Game::new(1);
        game.step();

        assert_eq!(game.snake().head(), Position::new(600, 375));
        assert_eq!(game.snake().len(), 1, "non-eating move preserves length");
    }

    #[test]
    fn test_step_each_direction() {
        for (dir, expected) in [
            (Direction::Up, Position::new(600, 375)),
            (Direction::Down, Position::new(600, 425)),
            (Direction::Left, Position::new(575, 400)),
            (Direction::Right, Position::new(625, 400)),
        ] {
            let mut game = Game::new(1);
            game.set_direction(dir);
            game.step();
            assert_eq!(game.snake().head(), expected, "direction {dir:?}");
        }
    }

    #[test]
    fn test_step_wraps_top_edge() {
        let mut game = Game::new(1);
        // Walk the head to y = 0, then one more step wraps.
        for _ in 0..16 {
            game.step();
        }
        assert_eq!(game.snake().head(), Position::new(600, 0));

        game.step();
        assert_eq!(game.snake().head(), Position::new(600, 775));
    }

    #[test]
    fn test_step_wraps_right_edge() {
        let mut game = Game::new(1);
        game.set_direction(Direction::Right);
        for _ in 0..24 {
            game.step();
        }
        assert_eq!(game.snake().head(), Position::new(0, 400));
    }

    #[test]
    fn test_wrap_invariant_over_many_steps() {
        let mut game = Game::new(99);
        let dirs = [
            Direction::Up,
            Direction::Left,
            Direction::Down,
            Direction::Right,
        ];
        for i in 0..500 {
            game.set_direction(dirs[i % dirs.len()]);
            game.step();
            let head = game.snake().head();
            assert!((0..game.width()).contains(&head.x));
            assert!((0..game.height()).contains(&head.y));
        }
    }

    #[test]
    fn test_eating_grows_and_scores() {
        let mut game = game_with_food(1, Position::new(600, 375));

        let len_before = game.snake().len();
        game.step();

        assert_eq!(game.score(), 1);
        assert!(!game.food().is_set(), "food consumed atomically");
        assert_eq!(game.snake().len(), len_before + 1, "tail kept on eat");
        assert_eq!(game.take_last_event(), Some(GameEvent::FoodEaten));
        assert_eq!(game.take_last_event(), None, "event is consumed once");
    }

    #[test]
    fn test_non_eating_step_emits_no_event() {
        let mut game = Game::new(1);
        game.step();
        assert_eq!(game.take_last_event(), None);
    }

    #[test]
    fn test_missed_food_is_untouched() {
        let mut game = game_with_food(1, Position::new(0, 0));

        game.step();

        assert_eq!(game.score(), 0);
        assert_eq!(game.food().position(), Some(Position::new(0, 0)));
        assert_eq!(game.snake().len(), 1);
    }

    #[test]
    fn test_step_preserves_length_unless_eating() {
        // Property over a long mixed run: length changes exactly when
        // food is eaten, by exactly one.
        let mut game = Game::new(777);
        game.food_mut().set(Position::new(0, 0));

        for i in 0..200 {
            let eat_tick = i % 3 == 0;
            if eat_tick {
                // Pin food one cell ahead of the head.
                let head = game.snake().head();
                let (dx, dy) = game.direction().delta();
                let (w, h) = (game.width(), game.height());
                game.food_mut().set(Position::new(
                    grid::wrap(head.x + dx * CELL_SIZE, w),
                    grid::wrap(head.y + dy * CELL_SIZE, h),
                ));
            } else {
                // Park food far from the snake's column.
                game.food_mut().set(Position::new(0, 0));
            }

            let len_before = game.snake().len();
            let score_before = game.score();
            game.step();

            if game.score() > score_before {
                assert_eq!(game.snake().len(), len_before + 1, "tick {i}");
            } else {
                assert_eq!(game.snake().len(), len_before, "tick {i}");
            }
            game.take_last_event();

            // Keep the walk inside a small loop away from (0, 0).
            if game.snake().head().y < 2 * CELL_SIZE {
                game.set_direction(Direction::Down);
            } else if game.snake().head().y > 600 {
                game.set_direction(Direction::Up);
            }
        }
    }

    #[test]
    fn test_self_collision_after_reversal() {
        let mut game = game_with_food(1, Position::new(600, 375));
        // Grow to length 2.
        game.step();
        assert_eq!(game.snake().len(), 2);
        assert!(!game.check_self_collision());

        // An (illegal, unfiltered) reversal steps the head back onto
        // the body.
        game.set_direction(Direction::Down);
        game.step();
        assert!(game.check_self_collision());
    }

    #[test]
    fn test_check_self_collision_is_pure() {
        let mut game = Game::new(1);
        game.step();
        let head = game.snake().head();
        let len = game.snake().len();
        let _ = game.check_self_collision();
        assert_eq!(game.snake().head(), head);
        assert_eq!(game.snake().len(), len);
    }

    #[test]
    fn test_ensure_food_is_idempotent() {
        let mut game = Game::new(5);
        game.ensure_food();
        let first = game.food().position();
        assert!(first.is_some());

        game.ensure_food();
        assert_eq!(game.food().position(), first);
    }

    #[test]
    fn test_ensure_food_respawns_after_eat() {
        let mut game = game_with_food(5, Position::new(600, 375));
        game.step();
        assert!(!game.food().is_set());

        game.ensure_food();
        assert!(game.food().is_set());
    }

    #[test]
    fn test_reset_restores_initial_state() {
        let mut game = Game::new(42);
        game.ensure_food();
        game.set_direction(Direction::Left);
        for _ in 0..10 {
            game.step();
        }
        let head = game.snake().head();
        game.food_mut().set(Position::new(head.x - CELL_SIZE, head.y));
        game.step();
        assert!(game.score() > 0);

        game.reset();

        assert_eq!(game.snake().len(), 1);
        assert_eq!(game.snake().head(), Position::new(600, 400));
        assert_eq!(game.direction(), Direction::Up);
        assert!(!game.food().is_set());
        assert_eq!(game.score(), 0);
        assert_eq!(game.take_last_event(), None);
    }

    #[test]
    fn test_custom_dimensions_center_and_wrap() {
        let mut game = Game::with_dimensions(1, 200, 100);
        assert_eq!(game.snake().head(), Position::new(100, 50));

        game.set_direction(Direction::Left);
        for _ in 0..5 {
            game.step();
        }
        assert_eq!(game.snake().head(), Position::new(175, 50), "wrapped left");
    }
}
