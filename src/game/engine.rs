use super::{
    action::{Direction, Intent},
    config::{GameConfig, Ruleset},
    state::{CollisionType, GameState, Position, Snake},
};
use rand::Rng;

/// What happened during one movement tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickResult {
    /// Whether the snake ate the apple this tick
    pub ate_apple: bool,
    /// Type of collision if the tick ended the run
    pub collision: Option<CollisionType>,
}

/// The game engine that handles all game rules
pub struct GameEngine {
    config: GameConfig,
    rng: rand::rngs::ThreadRng,
}

impl GameEngine {
    /// Create a new game engine with the given configuration.
    ///
    /// The RNG is taken from the thread once here and reused for every
    /// apple spawn for the rest of the process.
    pub fn new(config: GameConfig) -> Self {
        Self {
            config,
            rng: rand::thread_rng(),
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Build the canonical starting state for the configured ruleset:
    /// classic starts a lone segment at the origin, arena starts a full
    /// snake at the field center. A fresh apple is spawned either way.
    pub fn reset(&mut self) -> GameState {
        let cell = self.config.cell_size;
        let head = match self.config.ruleset {
            Ruleset::Classic => Position::new(0, 0),
            Ruleset::Arena => Position::new(
                self.config.field_width / cell / 2 * cell,
                self.config.field_height / cell / 2 * cell,
            ),
        };

        let snake = Snake::new(head, Direction::Right, self.config.initial_length, cell);
        let apple = self.spawn_apple(&snake);

        GameState::new(snake, apple, self.config.field_width, self.config.field_height)
    }

    /// Advance the snake one cell and resolve the consequences.
    ///
    /// A collision reports immediately; the caller decides whether it is
    /// fatal or a respawn. Otherwise an apple under the head grows the
    /// snake and respawns the apple.
    pub fn tick(&mut self, state: &mut GameState) -> TickResult {
        state.snake.advance(self.config.cell_size);
        state.ticks += 1;

        if let Some(collision) = self.check_collision(state) {
            return TickResult {
                ate_apple: false,
                collision: Some(collision),
            };
        }

        let ate_apple = state.apple_collision();
        if ate_apple {
            state.snake.grow();
            state.score += 1;
            state.apple = self.spawn_apple(&state.snake);
        }

        TickResult {
            ate_apple,
            collision: None,
        }
    }

    /// Apply one routed input intent
    pub fn apply(&mut self, state: &mut GameState, intent: Intent) {
        match intent {
            Intent::Turn(direction) => state.snake.steer(direction),
            Intent::Grow => state.snake.grow(),
        }
    }

    /// Check if the head ended the tick somewhere it must not be
    fn check_collision(&self, state: &GameState) -> Option<CollisionType> {
        // Classic rules have no walls; the field is unbounded.
        if self.config.ruleset == Ruleset::Arena && !state.in_bounds(state.snake.head().pos) {
            return Some(CollisionType::Wall);
        }

        if state.snake.self_collision() {
            return Some(CollisionType::SelfCollision);
        }

        None
    }

    /// Spawn the apple at a random grid-aligned position not covered by
    /// the snake. Loops forever if the snake fills the entire field, which
    /// no attainable snake does.
    fn spawn_apple(&mut self, snake: &Snake) -> Position {
        let cell = self.config.cell_size;
        let cols = self.config.field_width / cell;
        let rows = self.config.field_height / cell;

        loop {
            let pos = Position::new(
                self.rng.gen_range(0..cols) * cell,
                self.rng.gen_range(0..rows) * cell,
            );

            if !snake.occupies(pos) {
                return pos;
            }
        }
    }
}
