use declenum::declenum;

declenum!(Nothing, u8);
declenum!(AlsoNothing, u8,);

fn main() {}
