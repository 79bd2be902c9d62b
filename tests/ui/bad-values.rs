use declenum::declenum;

declenum!(Tuple, u8, A(u8), B);
declenum!(Struct, u8, A { x: u8 });
declenum!(Conditional, u8, #[cfg(any())] A, B);
declenum!(Optioned, u8, #[declenum(dbg)] A);

fn main() {}
