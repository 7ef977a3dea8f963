//! Arithmetic question generation per difficulty tier.
//!
//! Generation is pure apart from the injected random source: the same seed
//! always yields the same sequence of problems.

use crate::difficulty::Difficulty;
use rand::Rng;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
}

impl Operator {
    const WITHOUT_DIV: [Operator; 3] = [Operator::Add, Operator::Sub, Operator::Mul];
    const ALL: [Operator; 4] = [Operator::Add, Operator::Sub, Operator::Mul, Operator::Div];

    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "×",
            Self::Div => "÷",
        }
    }
}

/// A generated question. `answer` is always the exact integer result of
/// `lhs op rhs`; division problems are built backwards from the quotient.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Problem {
    pub lhs: i32,
    pub op: Operator,
    pub rhs: i32,
    pub answer: i32,
}

impl Problem {
    fn new(lhs: i32, op: Operator, rhs: i32) -> Self {
        let answer = match op {
            Operator::Add => lhs + rhs,
            Operator::Sub => lhs - rhs,
            Operator::Mul => lhs * rhs,
            Operator::Div => lhs / rhs,
        };
        Self {
            lhs,
            op,
            rhs,
            answer,
        }
    }

    /// Built from `quotient × divisor` so the division is exact.
    fn division(quotient: i32, divisor: i32) -> Self {
        Self {
            lhs: quotient * divisor,
            op: Operator::Div,
            rhs: divisor,
            answer: quotient,
        }
    }

    /// Display text, e.g. `12 × 7` or `-4 - (-9)`.
    pub fn prompt(&self) -> String {
        if self.rhs < 0 {
            format!("{} {} ({})", self.lhs, self.op.symbol(), self.rhs)
        } else {
            format!("{} {} {}", self.lhs, self.op.symbol(), self.rhs)
        }
    }
}

/// Generate a `(prompt, answer)` pair for the given tier.
pub fn generate<R: Rng>(difficulty: Difficulty, rng: &mut R) -> (String, i32) {
    let problem = generate_problem(difficulty, rng);
    (problem.prompt(), problem.answer)
}

pub fn generate_problem<R: Rng>(difficulty: Difficulty, rng: &mut R) -> Problem {
    match difficulty {
        Difficulty::Easy => easy(rng),
        Difficulty::Medium => medium(rng),
        Difficulty::Hard => hard(rng),
    }
}

/// Operands 1-15 with at most one two-digit operand, products capped at 6×6,
/// differences never negative.
fn easy<R: Rng>(rng: &mut R) -> Problem {
    let mut a = rng.gen_range(1..=15);
    let mut b = rng.gen_range(1..=15);
    if a >= 10 && b >= 10 {
        b = rng.gen_range(1..=9);
    }

    let op = Operator::WITHOUT_DIV[rng.gen_range(0..Operator::WITHOUT_DIV.len())];
    match op {
        Operator::Mul if a > 6 || b > 6 => {
            a = rng.gen_range(1..=6);
            b = rng.gen_range(1..=6);
        }
        Operator::Sub if b > a => std::mem::swap(&mut a, &mut b),
        _ => {}
    }

    Problem::new(a, op, b)
}

fn medium<R: Rng>(rng: &mut R) -> Problem {
    match Operator::ALL[rng.gen_range(0..Operator::ALL.len())] {
        op @ (Operator::Add | Operator::Sub) => {
            let a = rng.gen_range(0..=50);
            let b = rng.gen_range(0..=50);
            Problem::new(a, op, b)
        }
        Operator::Mul => {
            let a = rng.gen_range(2..=12);
            let b = rng.gen_range(2..=12);
            Problem::new(a, Operator::Mul, b)
        }
        Operator::Div => {
            let divisor = rng.gen_range(2..=12);
            let quotient = rng.gen_range(2..=12);
            Problem::division(quotient, divisor)
        }
    }
}

/// Signed operands in -50..=50. Division ignores the drawn operands and is
/// built from a quotient in -10..=10 and a divisor in 1..=10.
fn hard<R: Rng>(rng: &mut R) -> Problem {
    let op = Operator::ALL[rng.gen_range(0..Operator::ALL.len())];
    let a = rng.gen_range(-50..=50);
    let mut b = rng.gen_range(-50..=50);
    if b == 0 {
        b = 1;
    }

    match op {
        Operator::Div => {
            let quotient = rng.gen_range(-10..=10);
            let divisor = rng.gen_range(1..=10);
            Problem::division(quotient, divisor)
        }
        _ => Problem::new(a, op, b),
    }
}
