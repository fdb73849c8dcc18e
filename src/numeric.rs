//! Numeric approximation routines

use crate::error::{SceneError, SceneResult};

/// Square root by Newton's method
///
/// Iterates until the guess stops changing. Negative input is an error.
pub fn newton_sqrt(value: f64) -> SceneResult<f64> {
    if value < 0.0 {
        return Err(SceneError::InvalidValue(
            "value".to_string(),
            format!("cannot take square root of negative number: {}", value),
        ));
    }
    if value == 0.0 {
        return Ok(0.0);
    }

    let mut guess = 1.0;
    // Bounded: the iteration can oscillate between two adjacent floats
    for _ in 0..64 {
        let new_guess = (value / guess + guess) / 2.0;
        if new_guess == guess {
            break;
        }
        guess = new_guess;
    }
    Ok(guess)
}
