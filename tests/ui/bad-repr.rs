#![allow(dead_code)]

use declenum::{declenum, Declenum};

declenum!(Floating, f32, A);

#[derive(Declenum)]
#[repr(C)]
enum OnlyC {
    A,
}

fn main() {}
