/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Shared helpers for benchmarks

/// Build a plain ppm file of the given size with a repeating gradient
pub fn synthetic_ppm(width: usize, height: usize) -> String {
    let mut text = format!("P3\n{width} {height}\n255\n");

    for i in 0..width * height * 3 {
        text.push_str(&(i % 256).to_string());
        text.push(if i % 12 == 11 { '\n' } else { ' ' });
    }
    text
}
