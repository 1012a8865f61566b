use millefeuille::product;

fn main() {
    let odds = (1..10).filter(|n| n % 2 == 1);
    let mut cursor = product!(odds, 0..3).into_iter();
    cursor.jump(2); //~ ERROR E0599
}
