//! Conditional, exact-match and loop control flow

use std::fmt;

/// Below this age alcohol cannot be bought (exclusive bound)
pub const DRINKING_AGE: i32 = 21;

/// From this age a car can be rented (inclusive bound)
pub const CAR_RENTAL_AGE: i32 = 25;

/// Where `drills branch countdown` starts
pub const COUNTDOWN_START: u32 = 5;

pub const LIFT_OFF: &str = "Lift off!";

/// Outcome of the if / else-if age check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AgeVerdict {
    /// Zero or negative; no bracket is evaluated
    Invalid(i32),
    CannotBuyAlcohol,
    CanBuyAlcohol,
    CanRentCar,
}

impl AgeVerdict {
    pub fn message(&self) -> String {
        match self {
            Self::Invalid(age) => format!("{age} is not a valid age"),
            Self::CannotBuyAlcohol => "You can not buy alcohol".to_string(),
            Self::CanBuyAlcohol => "You can buy alcohol but not rent a car".to_string(),
            Self::CanRentCar => "You can rent a car and buy alcohol".to_string(),
        }
    }
}

impl fmt::Display for AgeVerdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}

/// Classify an age into exactly one bracket
pub fn classify_age(age: i32) -> AgeVerdict {
    if age <= 0 {
        return AgeVerdict::Invalid(age);
    }

    if age < DRINKING_AGE {
        AgeVerdict::CannotBuyAlcohol
    } else if age >= CAR_RENTAL_AGE {
        AgeVerdict::CanRentCar
    } else {
        AgeVerdict::CanBuyAlcohol
    }
}

/// Exact-match branching: a few ages get their own arm, the rest fall through
pub fn exact_age_message(age: i32) -> String {
    match age {
        10 => "You are 10 years old".to_string(),
        20 => "You are 20 years old".to_string(),
        30 => "You are 30 years old".to_string(),
        other => format!("You are {other} years old"),
    }
}

/// Counts down from `start` to zero inclusive
#[derive(Debug, Clone)]
pub struct Countdown {
    next: Option<u32>,
}

impl Countdown {
    pub fn new(start: u32) -> Self {
        Self { next: Some(start) }
    }
}

impl Iterator for Countdown {
    type Item = u32;

    fn next(&mut self) -> Option<u32> {
        let current = self.next?;
        self.next = current.checked_sub(1);
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.next.map_or(0, |n| n as usize + 1);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Countdown {}

/// Parse the first whitespace-delimited token of `input` as an age
pub fn parse_age(input: &str) -> crate::error::Result<i32> {
    let token = input
        .split_whitespace()
        .next()
        .ok_or(crate::error::DrillError::MissingInput)?;

    token
        .parse::<i32>()
        .map_err(|_| crate::error::DrillError::InvalidInput(token.to_string()))
}
