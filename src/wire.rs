use std::{
    collections::{HashMap, HashSet},
    fmt::Display,
    iter,
    str::FromStr,
};

use once_cell::sync::Lazy;
use regex::Regex;

use crate::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub fn unit_vec(&self) -> (i32, i32) {
        match self {
            Direction::Up => (0, 1),
            Direction::Down => (0, -1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }
}

impl Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Direction::Up => write!(f, "U"),
            Direction::Down => write!(f, "D"),
            Direction::Left => write!(f, "L"),
            Direction::Right => write!(f, "R"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    direction: Direction,
    distance: u32,
}

impl Move {
    pub fn new(direction: Direction, distance: u32) -> Self {
        Self {
            direction,
            distance,
        }
    }
}

impl FromStr for Move {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        static MOVE_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^([LRUD])(\d+)$").unwrap());

        let caps = MOVE_PATTERN
            .captures(s)
            .ok_or_else(|| Error::InvalidMoveText(s.to_string()))?;
        let direction = match &caps[1] {
            "U" => Direction::Up,
            "D" => Direction::Down,
            "L" => Direction::Left,
            _ => Direction::Right,
        };
        let distance = caps[2]
            .parse::<u32>()
            .map_err(|_| Error::InvalidMoveText(s.to_string()))?;
        Ok(Move::new(direction, distance))
    }
}

impl Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.direction, self.distance)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Point {
        Point { x, y }
    }

    pub fn origin() -> Point {
        Point::new(0, 0)
    }

    pub fn mht_dist(&self) -> i32 {
        self.x.abs() + self.y.abs()
    }
}

#[derive(Debug, Clone)]
pub struct Wire {
    moves: Vec<Move>,
}

impl FromStr for Wire {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let moves = s
            .split(',')
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .map(Move::from_str)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Wire { moves })
    }
}

impl Wire {
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    /// Walks the wire from the origin one grid unit at a time, yielding the
    /// position after every unit step. The origin itself is not yielded
    /// unless the wire comes back to it.
    pub fn walk(&self) -> impl Iterator<Item = Point> + '_ {
        self.moves
            .iter()
            .flat_map(|m| iter::repeat(m.direction.unit_vec()).take(m.distance as usize))
            .scan(Point::origin(), |pos, (dx, dy)| {
                pos.x += dx;
                pos.y += dy;
                Some(*pos)
            })
    }

    pub fn points(&self) -> HashSet<Point> {
        self.walk().collect()
    }

    /// Maps every visited point to the 1-based count of unit steps taken to
    /// reach it for the first time. Later visits don't overwrite the count.
    pub fn first_visit_steps(&self) -> HashMap<Point, usize> {
        let mut steps_map = HashMap::new();
        for (ind, point) in self.walk().enumerate() {
            steps_map.entry(point).or_insert(ind + 1);
        }

        steps_map
    }

    /// All points both wires pass through, the shared origin excluded.
    pub fn crossings(&self, other: &Wire) -> HashSet<Point> {
        self.points()
            .intersection(&other.points())
            .filter(|p| **p != Point::origin())
            .copied()
            .collect()
    }

    /// For every crossing point, the sum of both wires' first-visit step
    /// counts at that point.
    pub fn crossing_steps(&self, other: &Wire) -> Vec<usize> {
        let other_steps = other.first_visit_steps();
        self.first_visit_steps()
            .iter()
            .filter(|(point, _)| **point != Point::origin())
            .filter_map(|(point, steps)| other_steps.get(point).map(|o_steps| steps + o_steps))
            .collect()
    }
}
