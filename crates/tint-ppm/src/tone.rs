/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Tonal adjustments on raw channel values
//!
//! Both routines saturate, a value never wraps around
//! past either end of the range.

/// Step used when a caller asks to lighten or darken
/// without saying by how much
pub const DEFAULT_STEP: u32 = 50;

/// Add `amount` to every value, clamping the result to `max_value`
pub fn lighten(channel: &mut [u16], amount: u32, max_value: u16) {
    let max = u32::from(max_value);

    channel.iter_mut().for_each(|x| {
        // max fits in u16, so the narrowing never truncates
        *x = u32::from(*x).saturating_add(amount).min(max) as u16;
    });
}

/// Subtract `amount` from every value, stopping at zero
pub fn darken(channel: &mut [u16], amount: u32) {
    channel.iter_mut().for_each(|x| {
        *x = u32::from(*x).saturating_sub(amount) as u16;
    });
}

#[cfg(test)]
mod tests {
    use nanorand::Rng;

    use crate::tone::{darken, lighten};

    #[test]
    fn test_lighten_clamps_to_max() {
        let mut values = [0_u16, 100, 200, 255];
        lighten(&mut values, 100, 255);
        assert_eq!(values, [100, 200, 255, 255]);
    }

    #[test]
    fn test_lighten_respects_small_max() {
        let mut values = [0_u16, 1, 2, 3];
        lighten(&mut values, 1, 3);
        assert_eq!(values, [1, 2, 3, 3]);
    }

    #[test]
    fn test_lighten_huge_amount_does_not_wrap() {
        let mut values = [0_u16, 65535];
        lighten(&mut values, u32::MAX, 65535);
        assert_eq!(values, [65535, 65535]);
    }

    #[test]
    fn test_darken_clamps_to_zero() {
        let mut values = [0_u16, 10, 60, 255];
        darken(&mut values, 50);
        assert_eq!(values, [0, 0, 10, 205]);
    }

    #[test]
    fn test_zero_amount_is_identity() {
        let mut values = vec![0_u16; 300];
        nanorand::WyRand::new_seed(7).fill(&mut values);
        values.iter_mut().for_each(|x| *x %= 256);
        let original = values.clone();

        lighten(&mut values, 0, 255);
        assert_eq!(values, original);

        darken(&mut values, 0);
        assert_eq!(values, original);
    }

    #[test]
    fn test_lighten_then_darken_composition() {
        let mut rng = nanorand::WyRand::new_seed(42);
        let max = 1000_u16;

        for _ in 0..50 {
            let amount = rng.generate_range(0_u32..=1200);
            let mut values: Vec<u16> = (0..64).map(|_| rng.generate_range(0_u16..=max)).collect();

            let expected: Vec<u16> = values
                .iter()
                .map(|v| {
                    let up = (u32::from(*v) + amount).min(u32::from(max));
                    up.saturating_sub(amount) as u16
                })
                .collect();

            lighten(&mut values, amount, max);
            assert!(values.iter().all(|v| *v <= max));

            darken(&mut values, amount);
            assert_eq!(values, expected);
        }
    }
}
