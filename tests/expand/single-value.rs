// The basic case: several enums, each with one value.

use declenum::{declenum, enum_traits};

declenum!(Test0, i32, E0);
declenum!(Test1, i32, E0);
declenum!(pub Test2, i32, E0);

const _: () = assert!(enum_traits::<Test0>().count == 1);
const _: () = assert!(enum_traits::<Test1>().count == 1);
const _: () = assert!(enum_traits::<Test2>().count == 1);

fn main() {
    assert_eq!(Test0::E0 as i32, 0);
    assert_eq!(enum_traits::<Test2>().names, ["E0"]);
}
