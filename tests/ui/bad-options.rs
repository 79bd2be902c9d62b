use declenum::declenum;

declenum! {
    #[declenum(unknown)]
    Unknown, u8, A
}

declenum! {
    #[declenum(rename_all = snake_case, rename_all = kebab_case)]
    Contradictory, u8, A
}

declenum! {
    #[declenum(rename_all = "sPoNgEcAsE")]
    NoSuchCase, u8, A
}

fn main() {}
