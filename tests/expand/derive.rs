use declenum::{Declenum, EnumTraits};

#[derive(Declenum, Debug)]
#[repr(u32)]
enum Handwritten {
    Start = 1,
    Middle,
    End = 10,
}

#[derive(Declenum)]
enum DefaultRepr {
    Only,
}

const _: () = assert!(Handwritten::COUNT == 3);

fn main() {
    assert_eq!(Handwritten::VALUES, [1, 2, 10]);
    assert_eq!(<DefaultRepr as EnumTraits>::VALUES, [0isize]);
    let _ = (Handwritten::Start, Handwritten::Middle, Handwritten::End);
    let _ = DefaultRepr::Only;
}
