//! Grading tools — tone sliders and white balance offsets.

pub mod sliders;
pub mod white_balance;
