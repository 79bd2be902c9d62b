use declenum::{declenum, EnumTraits};

declenum! {
    #[declenum(rename_all = "kebab-case")]
    Method, u8,
    Get, HeadRequest, Move,
}

fn main() {
    assert_eq!(Method::NAMES, ["get", "head-request", "move"]);
}
