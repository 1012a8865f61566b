use millefeuille::{generate, product};

fn main() {
    let numbers = generate(|mut co| async move {
        co.emit(1).await;
    });
    let view = product!(numbers, 0..3); //~ ERROR E0277
    let _ = view.into_iter();
}
