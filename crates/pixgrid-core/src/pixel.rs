/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! A single 8-bit RGB pixel
use bytemuck::{Pod, Zeroable};

/// Number of channels stored in a pixel
pub const RGB_CHANNELS: usize = 3;

/// An 8-bit RGB pixel.
///
/// The layout is `#[repr(C)]` with no padding, so a slice of pixels
/// can be viewed as interleaved `[R,G,B,R,G,B]` bytes and vice versa.
#[repr(C)]
#[derive(Copy, Clone, Default, Debug, PartialEq, Eq, Hash, Pod, Zeroable)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Rgb {
        Rgb { r, g, b }
    }

    /// Create a pixel whose three channels carry the same value
    #[must_use]
    pub const fn gray(value: u8) -> Rgb {
        Rgb::new(value, value, value)
    }

    /// Return channels in `[R,G,B]` order
    #[must_use]
    pub const fn channels(self) -> [u8; RGB_CHANNELS] {
        [self.r, self.g, self.b]
    }

    /// Create a pixel from channels in `[R,G,B]` order
    #[must_use]
    pub const fn from_channels(channels: [u8; RGB_CHANNELS]) -> Rgb {
        Rgb::new(channels[0], channels[1], channels[2])
    }

    /// Return true if all three channels hold the same value
    #[must_use]
    pub const fn is_gray(self) -> bool {
        self.r == self.g && self.g == self.b
    }
}

impl From<[u8; RGB_CHANNELS]> for Rgb {
    fn from(value: [u8; RGB_CHANNELS]) -> Self {
        Rgb::from_channels(value)
    }
}

impl From<Rgb> for [u8; RGB_CHANNELS] {
    fn from(value: Rgb) -> Self {
        value.channels()
    }
}
