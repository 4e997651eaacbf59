use super::action::Direction;

/// A grid-aligned position on the play field, in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Move position by delta
    pub fn moved_by(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Move position one cell in a direction
    pub fn stepped(&self, direction: Direction, cell: i32) -> Self {
        let (dx, dy) = direction.delta();
        self.moved_by(dx * cell, dy * cell)
    }
}

/// One unit of the snake's body.
///
/// `facing` is the direction the segment was moving when it last advanced,
/// so a segment grown off the tail keeps moving the way the old tail did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment {
    pub pos: Position,
    pub facing: Direction,
}

/// The snake in the game
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    /// Body segments, with head at index 0 and tail last
    pub segments: Vec<Segment>,
}

impl Snake {
    /// Starting capacity of the segment buffer; the buffer doubles in
    /// segments (never raw bytes) once growth exhausts it.
    const STARTING_CAPACITY: usize = 32;

    /// Create a new snake with `length` segments laid out contiguously
    /// behind the head along `facing`
    pub fn new(head: Position, facing: Direction, length: usize, cell: i32) -> Self {
        let mut segments = Vec::with_capacity(Self::STARTING_CAPACITY.max(length));
        segments.push(Segment { pos: head, facing });

        let (dx, dy) = facing.delta();
        for i in 1..length {
            let prev = segments[i - 1].pos;
            segments.push(Segment {
                pos: prev.moved_by(-dx * cell, -dy * cell),
                facing,
            });
        }

        Self { segments }
    }

    /// Get the head segment
    pub fn head(&self) -> Segment {
        self.segments[0]
    }

    /// Get the tail segment (last)
    pub fn tail(&self) -> Segment {
        *self.segments.last().unwrap()
    }

    /// Get the length of the snake
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Check if the snake is empty (should never happen in practice)
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Point the head in a new direction, unless that would reverse it
    /// straight into its own body
    pub fn steer(&mut self, direction: Direction) {
        let head = &mut self.segments[0];
        if !head.facing.is_opposite(direction) {
            head.facing = direction;
        }
    }

    /// Shift every segment into its predecessor's slot, tail end first so
    /// each slot is read before it is overwritten, then move the head one
    /// cell in its facing direction.
    pub fn advance(&mut self, cell: i32) {
        for i in (1..self.segments.len()).rev() {
            self.segments[i] = self.segments[i - 1];
        }

        let head = &mut self.segments[0];
        head.pos = head.pos.stepped(head.facing, cell);
    }

    /// Append one segment stacked on the current tail; it separates
    /// visually on the next advance
    pub fn grow(&mut self) {
        let tail = self.tail();
        self.segments.push(tail);
    }

    /// Check if the head occupies the same cell as any other segment
    pub fn self_collision(&self) -> bool {
        let head = self.segments[0].pos;
        self.segments[1..].iter().any(|segment| segment.pos == head)
    }

    /// Check if any segment occupies the given position
    pub fn occupies(&self, pos: Position) -> bool {
        self.segments.iter().any(|segment| segment.pos == pos)
    }
}

/// Type of collision that ends a movement tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionType {
    /// Snake hit a wall
    Wall,
    /// Snake hit itself
    SelfCollision,
}

impl CollisionType {
    /// Get a human-readable description for display
    pub fn describe(&self) -> &'static str {
        match self {
            CollisionType::Wall => "the snake hit a wall",
            CollisionType::SelfCollision => "the snake ran into itself",
        }
    }
}

/// Complete game state
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub snake: Snake,
    pub apple: Position,
    pub field_width: i32,
    pub field_height: i32,
    pub score: u32,
    pub ticks: u32,
}

impl GameState {
    /// Create a new game state
    pub fn new(snake: Snake, apple: Position, field_width: i32, field_height: i32) -> Self {
        Self {
            snake,
            apple,
            field_width,
            field_height,
            score: 0,
            ticks: 0,
        }
    }

    /// Check if a position is within the walls of the field
    pub fn in_bounds(&self, pos: Position) -> bool {
        pos.x >= 0 && pos.x < self.field_width && pos.y >= 0 && pos.y < self.field_height
    }

    /// Check if the head sits on the apple
    pub fn apple_collision(&self) -> bool {
        self.snake.head().pos == self.apple
    }
}
