use declenum::{declenum, EnumTraits};

const BASE: i16 = 100;

declenum!(Explicit, i16, Low = -5, Next, High = BASE, Higher);

fn main() {
    assert_eq!(Explicit::VALUES, [-5, -4, 100, 101]);
    assert_eq!(Explicit::Higher as i16, 101);
}
