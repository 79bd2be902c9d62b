use declenum::declenum;

declenum!(Twice, u8, A, B, A);

fn main() {}
