use declenum::{declenum, EnumTraits};

declenum! {
    /// Some values
    pub(crate) Several, u8,
    A, B, C, D, E,
}

const _: () = assert!(Several::COUNT == 5);

fn main() {
    assert_eq!(Several::NAME, "Several");
    assert_eq!(Several::VALUES, [0, 1, 2, 3, 4]);
    assert_eq!(format!("{:?}", Several::C), "C");
}
