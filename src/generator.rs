//! Number Generator
//!
//! Produces the random lists shown on the board.

use std::collections::HashSet;

/// How a fresh list is drawn
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum GenerationPolicy {
    /// Distinct values, redrawing on collision
    #[default]
    Unique,
    /// Independent draws, duplicates allowed
    Independent,
}

/// Source of uniform values in `[0, 1)`
pub trait RandomSource {
    fn next_unit(&mut self) -> f64;
}

/// Browser `Math.random()`
#[derive(Debug, Clone, Copy, Default)]
pub struct JsRandom;

impl RandomSource for JsRandom {
    fn next_unit(&mut self) -> f64 {
        js_sys::Math::random()
    }
}

/// Draw one value in `1..=max_value`
fn draw(source: &mut impl RandomSource, max_value: u32) -> u32 {
    let unit = source.next_unit().clamp(0.0, 1.0);
    let value = (unit * f64::from(max_value)).floor() as u32 + 1;
    value.min(max_value)
}

/// Generate `count` numbers in `1..=max_value`.
///
/// With `Unique`, `count` is capped at `max_value` so the draw loop always
/// terminates. A zero `max_value` yields an empty list.
pub fn generate_numbers(
    policy: GenerationPolicy,
    count: usize,
    max_value: u32,
    source: &mut impl RandomSource,
) -> Vec<u32> {
    if max_value == 0 {
        return Vec::new();
    }

    match policy {
        GenerationPolicy::Independent => (0..count).map(|_| draw(source, max_value)).collect(),
        GenerationPolicy::Unique => {
            let target = count.min(max_value as usize);
            let mut seen = HashSet::with_capacity(target);
            let mut numbers = Vec::with_capacity(target);
            while numbers.len() < target {
                let value = draw(source, max_value);
                if seen.insert(value) {
                    numbers.push(value);
                }
            }
            numbers
        }
    }
}
