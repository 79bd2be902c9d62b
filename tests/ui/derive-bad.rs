#![allow(dead_code)]

use declenum::Declenum;

#[derive(Declenum)]
struct NotAnEnum {
    x: u8,
}

#[derive(Declenum)]
enum Generic<T> {
    A,
    B(T),
}

#[derive(Declenum)]
enum Empty {}

#[derive(Declenum)]
#[repr(u8)]
enum WithFields {
    A(u8),
}

fn main() {}
