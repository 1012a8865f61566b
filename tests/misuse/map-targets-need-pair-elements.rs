use std::collections::BTreeMap;

fn main() {
    let _map: BTreeMap<i32, i32> = millefeuille::to(vec![1i32, 2, 3]); //~ ERROR E0277
}
