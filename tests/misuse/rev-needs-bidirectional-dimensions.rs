use std::iter;

use millefeuille::product;

fn main() {
    let forward_only = iter::repeat(1).take(3);
    for _ in product!(0..2, forward_only).into_iter().rev() {} //~ ERROR DoubleEndedIterator
}
